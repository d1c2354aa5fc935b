//! Per-cycle segment hooks
//!
//! A hook runs once per cycle for the segment it is registered on, after the
//! levels of all segments are computed and before anything is rendered. It may
//! read and change any segment; changes only last for the cycle being rendered.

use crate::error::ConfigError;
use crate::segment::{Segment, SegmentId, SegmentUpdate};

/// Hook called for a segment on every cycle
///
/// Implemented for `Fn(SegmentId, &mut SegmentAccess<'_>)` closures. Hooks
/// are shared references, keep any state in a `Cell`.
pub trait SegmentHook {
    fn on_cycle(&self, id: SegmentId, segments: &mut SegmentAccess<'_>);
}

impl<F> SegmentHook for F
where
    F: Fn(SegmentId, &mut SegmentAccess<'_>),
{
    fn on_cycle(&self, id: SegmentId, segments: &mut SegmentAccess<'_>) {
        self(id, segments);
    }
}

/// Read/write view of the defined segments
pub struct SegmentAccess<'a> {
    slots: &'a mut [Option<Segment>],
}

impl<'a> SegmentAccess<'a> {
    pub(crate) fn new(slots: &'a mut [Option<Segment>]) -> Self {
        Self { slots }
    }

    /// Number of slots up to the highest defined index
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, id: SegmentId) -> Result<&Segment, ConfigError> {
        lookup(self.slots, id)
    }

    pub fn get_mut(&mut self, id: SegmentId) -> Result<&mut Segment, ConfigError> {
        lookup_mut(self.slots, id)
    }

    pub fn update(&mut self, id: SegmentId, update: &SegmentUpdate) -> Result<(), ConfigError> {
        update.apply(self.get_mut(id)?);
        Ok(())
    }

    /// Level of a segment in the current cycle
    pub fn level(&self, id: SegmentId) -> Result<u16, ConfigError> {
        self.get(id).map(Segment::level)
    }
}

pub(crate) fn lookup(slots: &[Option<Segment>], id: SegmentId) -> Result<&Segment, ConfigError> {
    slots
        .get(id.0)
        .and_then(Option::as_ref)
        .ok_or(ConfigError::UndefinedSegment(id))
}

pub(crate) fn lookup_mut(
    slots: &mut [Option<Segment>],
    id: SegmentId,
) -> Result<&mut Segment, ConfigError> {
    slots
        .get_mut(id.0)
        .and_then(Option::as_mut)
        .ok_or(ConfigError::UndefinedSegment(id))
}
