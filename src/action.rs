//! Segment actions
//!
//! An action decides how a segment turns its level into lit LEDs.
//! Raw ids are stable so they can be stored or sent over the wire.

const ACTION_NAME_NONE: &str = "none";
const ACTION_NAME_FILL_FROM_START: &str = "fill_from_start";
const ACTION_NAME_FILL_FROM_END: &str = "fill_from_end";
const ACTION_NAME_FILL_FROM_CENTER: &str = "fill_from_center";
const ACTION_NAME_STATIC: &str = "static";
const ACTION_NAME_RANDOM_THRESHOLD: &str = "random_threshold";

const ACTION_ID_NONE: u8 = 0;
const ACTION_ID_FILL_FROM_START: u8 = 1;
const ACTION_ID_FILL_FROM_END: u8 = 2;
const ACTION_ID_FILL_FROM_CENTER: u8 = 3;
const ACTION_ID_STATIC: u8 = 4;
const ACTION_ID_RANDOM_THRESHOLD: u8 = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Action {
    /// Not rendered. The level is still computed for hooks.
    #[default]
    None = ACTION_ID_NONE,
    /// Light LEDs from the first one up
    FillFromStart = ACTION_ID_FILL_FROM_START,
    /// Light LEDs from the last one down
    FillFromEnd = ACTION_ID_FILL_FROM_END,
    /// Light LEDs outward from the middle
    FillFromCenter = ACTION_ID_FILL_FROM_CENTER,
    /// Light every LED regardless of level
    Static = ACTION_ID_STATIC,
    /// Sparkle: each LED is lit when its fixed random threshold is at or
    /// below the level
    RandomThreshold = ACTION_ID_RANDOM_THRESHOLD,
}

impl Action {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            ACTION_ID_NONE => Self::None,
            ACTION_ID_FILL_FROM_START => Self::FillFromStart,
            ACTION_ID_FILL_FROM_END => Self::FillFromEnd,
            ACTION_ID_FILL_FROM_CENTER => Self::FillFromCenter,
            ACTION_ID_STATIC => Self::Static,
            ACTION_ID_RANDOM_THRESHOLD => Self::RandomThreshold,
            _ => return None,
        })
    }

    pub const fn raw(self) -> u8 {
        self as u8
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => ACTION_NAME_NONE,
            Self::FillFromStart => ACTION_NAME_FILL_FROM_START,
            Self::FillFromEnd => ACTION_NAME_FILL_FROM_END,
            Self::FillFromCenter => ACTION_NAME_FILL_FROM_CENTER,
            Self::Static => ACTION_NAME_STATIC,
            Self::RandomThreshold => ACTION_NAME_RANDOM_THRESHOLD,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            ACTION_NAME_NONE => Some(Self::None),
            ACTION_NAME_FILL_FROM_START => Some(Self::FillFromStart),
            ACTION_NAME_FILL_FROM_END => Some(Self::FillFromEnd),
            ACTION_NAME_FILL_FROM_CENTER => Some(Self::FillFromCenter),
            ACTION_NAME_STATIC => Some(Self::Static),
            ACTION_NAME_RANDOM_THRESHOLD => Some(Self::RandomThreshold),
            _ => None,
        }
    }

    /// Returns if the action addresses the whole segment regardless of level
    pub const fn fills_completely(self) -> bool {
        matches!(self, Self::Static | Self::RandomThreshold)
    }

    pub const fn is_rendered(self) -> bool {
        !matches!(self, Self::None)
    }
}
