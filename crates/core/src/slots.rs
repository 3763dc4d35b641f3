//! # Slot Calculation
//!
//! Splits the overlap of two availability windows into whole one-hour slots.
//! The first slot starts exactly where the overlap starts; a trailing piece
//! shorter than an hour is dropped rather than truncated.

use chrono::{DateTime, Duration, Utc};
use serde::{Serialize, Serializer, ser::SerializeTuple};

use crate::{models::user::Availability, timestamp};

/// Length of every slot
pub fn slot_length() -> Duration {
    Duration::hours(1)
}

/// One bookable hour, rendered on the wire as `[start, end]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Serialize for Slot {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut pair = serializer.serialize_tuple(2)?;
        pair.serialize_element(&timestamp::format(&self.start))?;
        pair.serialize_element(&timestamp::format(&self.end))?;
        pair.end()
    }
}

/// Computes the one-hour slots in which both the candidate and the
/// interviewer are available
///
/// # Example
///
/// ```
/// use interview_core::{models::user::Availability, slots::overlapping_slots, timestamp::parse};
///
/// let candidate = Availability::new(
///     parse("2025-01-26T08:00:00.000000Z").unwrap(),
///     parse("2025-01-26T12:00:00.000000Z").unwrap(),
/// );
/// let interviewer = Availability::new(
///     parse("2025-01-26T09:00:00.000000Z").unwrap(),
///     parse("2025-01-26T11:00:00.000000Z").unwrap(),
/// );
///
/// assert_eq!(overlapping_slots(&candidate, &interviewer).len(), 2);
/// ```
pub fn overlapping_slots(candidate: &Availability, interviewer: &Availability) -> Vec<Slot> {
    let Some(window) = candidate.intersection(interviewer) else {
        return Vec::new();
    };

    let step = slot_length();
    let mut slots = Vec::new();
    let mut start = window.from;
    // Stops at the end of the overlap or at the last representable instant
    while let Some(end) = start
        .checked_add_signed(step)
        .filter(|end| *end <= window.to)
    {
        slots.push(Slot { start, end });
        start = end;
    }

    slots
}
