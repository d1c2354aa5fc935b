//! LED visiting order within a segment
//!
//! Each segment visits exactly `led_count` LEDs. The step number (not the
//! physical offset) decides foreground vs background, so a center fill lights
//! its first N visited LEDs symmetrically around the middle.

use crate::action::Action;

/// One visited LED
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// Visit order within the segment, starting at 0
    pub index: u16,
    /// Physical LED index on the strip
    pub position: i32,
    /// `false` if spacing skips this LED
    pub addressed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Forward,
    Backward,
    /// Alternating outward: 0, +1, -1, +2, -2, ...
    Outward,
}

/// Iterator over the LEDs of a segment in visiting order
#[derive(Debug, Clone)]
pub struct Traversal {
    direction: Direction,
    position: i32,
    increment: i32,
    index: u16,
    len: u16,
    /// Spacing + 1
    period: u16,
    countdown: u16,
}

impl Traversal {
    pub fn new(action: Action, first_led: u16, led_count: u16, spacing: u16) -> Self {
        let first = i32::from(first_led);
        let len = i32::from(led_count);
        let (direction, position) = match action {
            Action::FillFromEnd => (Direction::Backward, first + len - 1),
            Action::FillFromCenter => (Direction::Outward, first + (len - 1).max(0) / 2),
            Action::None
            | Action::FillFromStart
            | Action::Static
            | Action::RandomThreshold => (Direction::Forward, first),
        };

        Self {
            direction,
            position,
            increment: match direction {
                Direction::Forward => 1,
                Direction::Backward => -1,
                Direction::Outward => 0,
            },
            index: 0,
            len: led_count,
            period: spacing.saturating_add(1),
            countdown: 0,
        }
    }

    fn tick_spacing(&mut self, addressed: bool) {
        if addressed {
            self.countdown = self.period;
        }
        self.countdown -= 1;
    }
}

impl Iterator for Traversal {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        if self.index >= self.len {
            return None;
        }

        let addressed = self.countdown == 0;
        let step = Step {
            index: self.index,
            position: self.position,
            addressed,
        };

        if self.direction == Direction::Outward {
            self.increment = if self.increment <= 0 {
                1 - self.increment
            } else {
                -(self.increment + 1)
            };
        }
        self.tick_spacing(addressed);

        self.position += self.increment;
        self.index += 1;
        Some(step)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::from(self.len - self.index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Traversal {}
