use strum::Display;
use thiserror::Error;
use time::{Date, Time};

use crate::id::*;

/// The unit of mutual exclusion: a single hourly slot of a venue on a date.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SlotKey {
    pub venue_id: Id,
    pub date: Date,
    pub start_time: Time,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub start_time: Time,
    pub end_time: Time,
    pub is_enabled: bool,
    pub is_booked: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum SlotStatus {
    Available,
    Booked,
    Unavailable,
}

impl Slot {
    pub fn status(&self) -> SlotStatus {
        if self.is_booked {
            SlotStatus::Booked
        } else if self.is_enabled {
            SlotStatus::Available
        } else {
            SlotStatus::Unavailable
        }
    }
}

#[derive(Debug, Error)]
#[error("Invalid slot grid: {first_hour}:00 - {last_hour}:00")]
pub struct InvalidSlotGrid {
    pub first_hour: u8,
    pub last_hour: u8,
}

/// Contiguous, non-overlapping one hour slots from `first_hour`
/// until `last_hour` (exclusive) of a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotGrid {
    first_hour: u8,
    last_hour: u8,
}

impl SlotGrid {
    pub const DEFAULT_FIRST_HOUR: u8 = 6;
    pub const DEFAULT_LAST_HOUR: u8 = 23;

    // The end of the last slot must be representable as a wall clock
    // time of the same day, i.e. 23:00 at the latest.
    const MAX_LAST_HOUR: u8 = 23;

    pub fn new(first_hour: u8, last_hour: u8) -> Result<Self, InvalidSlotGrid> {
        if first_hour >= last_hour || last_hour > Self::MAX_LAST_HOUR {
            return Err(InvalidSlotGrid {
                first_hour,
                last_hour,
            });
        }
        Ok(Self {
            first_hour,
            last_hour,
        })
    }

    pub fn first_hour(&self) -> u8 {
        self.first_hour
    }

    pub fn last_hour(&self) -> u8 {
        self.last_hour
    }

    /// Start and end time of all slots in chronological order.
    pub fn slots(&self) -> impl Iterator<Item = (Time, Time)> {
        (self.first_hour..self.last_hour).filter_map(|h| {
            let start = Time::from_hms(h, 0, 0).ok()?;
            let end = Time::from_hms(h + 1, 0, 0).ok()?;
            Some((start, end))
        })
    }

    /// The end time of the slot that starts at the given time
    /// or `None` if no slot of this grid starts at this time.
    pub fn slot_end(&self, start_time: Time) -> Option<Time> {
        if start_time.minute() != 0 || start_time.second() != 0 || start_time.nanosecond() != 0 {
            return None;
        }
        let hour = start_time.hour();
        if hour < self.first_hour || hour >= self.last_hour {
            return None;
        }
        Time::from_hms(hour + 1, 0, 0).ok()
    }
}

impl Default for SlotGrid {
    fn default() -> Self {
        Self {
            first_hour: Self::DEFAULT_FIRST_HOUR,
            last_hour: Self::DEFAULT_LAST_HOUR,
        }
    }
}
