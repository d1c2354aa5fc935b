//! Fixed-capacity segment storage
//!
//! Segments live in index-addressed slots. The index returned by
//! [`SegmentStore::define`] is the segment's handle for its whole life.
//! Property access works by explicit handle or through the "current" cursor.

use heapless::Vec;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::action::Action;
use crate::band::BandMask;
use crate::color::Rgb;
use crate::error::ConfigError;
use crate::hook::{SegmentAccess, SegmentHook, lookup, lookup_mut};
use crate::segment::{Segment, SegmentId, SegmentUpdate};

/// Default segment capacity
pub const DEFAULT_MAX_SEGMENTS: usize = 100;

pub(crate) type Slots<const N: usize> = Vec<Option<Segment>, N>;

/// Ordered segment collection with a "current" cursor
///
/// `N` is the max number of segments.
pub struct SegmentStore<'h, const N: usize> {
    /// Slots up to the highest defined index
    slots: Slots<N>,
    hooks: [Option<&'h dyn SegmentHook>; N],
    cursor: usize,
}

impl<const N: usize> Default for SegmentStore<'_, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'h, const N: usize> SegmentStore<'h, N> {
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            hooks: [None; N],
            cursor: 0,
        }
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    /// Define the next segment and make it current
    ///
    /// The first definition on an empty store lands on index 0, every later
    /// one on the slot after the cursor. The slot is reset to defaults,
    /// including its hook. Slots skipped over stay undefined.
    pub fn define(
        &mut self,
        first_led: u16,
        led_count: u16,
        action: Action,
        foreground: Rgb,
        bands: BandMask,
    ) -> Result<SegmentId, ConfigError> {
        let index = if self.slots.is_empty() {
            0
        } else {
            self.cursor + 1
        };
        if index >= N {
            #[cfg(feature = "esp32-log")]
            println!("[SegmentStore.define] capacity of {} exceeded", N);
            return Err(ConfigError::CapacityExceeded { capacity: N });
        }

        if index >= self.slots.len() {
            self.slots
                .resize(index + 1, None)
                .map_err(|()| ConfigError::CapacityExceeded { capacity: N })?;
        }
        self.slots[index] = Some(Segment::new(
            first_led, led_count, action, foreground, bands,
        ));
        self.hooks[index] = None;
        self.cursor = index;

        #[cfg(feature = "esp32-log")]
        println!(
            "[SegmentStore.define] segment {}: {} LEDs from {}, {}",
            index,
            led_count,
            first_led,
            action.as_str()
        );

        Ok(SegmentId(index))
    }

    /// Index targeted by the `current*` accessors
    pub const fn cursor(&self) -> SegmentId {
        SegmentId(self.cursor)
    }

    /// Move the cursor
    ///
    /// Does not touch any segment. The next [`define`](Self::define) lands
    /// on the slot after `index`.
    pub fn set_cursor(&mut self, index: usize) -> Result<(), ConfigError> {
        if index >= N {
            return Err(ConfigError::IndexOutOfRange { index, capacity: N });
        }
        self.cursor = index;
        Ok(())
    }

    /// Highest defined index
    pub fn watermark(&self) -> Option<SegmentId> {
        self.slots.len().checked_sub(1).map(SegmentId)
    }

    /// Number of slots up to the watermark
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, id: SegmentId) -> Result<&Segment, ConfigError> {
        lookup(&self.slots, id)
    }

    pub fn get_mut(&mut self, id: SegmentId) -> Result<&mut Segment, ConfigError> {
        lookup_mut(&mut self.slots, id)
    }

    pub fn update(&mut self, id: SegmentId, update: &SegmentUpdate) -> Result<(), ConfigError> {
        update.apply(self.get_mut(id)?);
        Ok(())
    }

    pub fn current(&self) -> Result<&Segment, ConfigError> {
        self.get(self.cursor())
    }

    pub fn current_mut(&mut self) -> Result<&mut Segment, ConfigError> {
        self.get_mut(self.cursor())
    }

    pub fn update_current(&mut self, update: &SegmentUpdate) -> Result<(), ConfigError> {
        self.update(self.cursor(), update)
    }

    /// Register or clear the per-cycle hook of a segment
    pub fn set_hook(
        &mut self,
        id: SegmentId,
        hook: Option<&'h dyn SegmentHook>,
    ) -> Result<(), ConfigError> {
        self.get(id)?;
        self.hooks[id.0] = hook;
        Ok(())
    }

    pub fn has_hook(&self, id: SegmentId) -> bool {
        self.hooks.get(id.0).is_some_and(Option::is_some)
    }

    /// Defined segments in index order
    pub fn iter(&self) -> impl Iterator<Item = (SegmentId, &Segment)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_ref().map(|segment| (SegmentId(index), segment)))
    }

    /// Drop every segment and hook and move the cursor back to 0
    pub fn reset(&mut self) {
        self.slots.clear();
        self.hooks = [None; N];
        self.cursor = 0;
    }

    /// Call every registered hook in index order
    pub fn run_hooks(&mut self) {
        for index in 0..self.slots.len() {
            let Some(hook) = self.hooks[index] else {
                continue;
            };
            hook.on_cycle(SegmentId(index), &mut SegmentAccess::new(&mut self.slots));
        }
    }

    pub(crate) fn slots_mut(&mut self) -> &mut [Option<Segment>] {
        &mut self.slots
    }

    pub(crate) fn snapshot(&self) -> Slots<N> {
        self.slots.clone()
    }

    pub(crate) fn restore(&mut self, slots: Slots<N>) {
        self.slots = slots;
    }
}
