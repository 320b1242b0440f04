use std::fmt;

use time::{Date, Time};

use crate::{id::*, time::*};

/// Day of the week, counting from Monday = 0 to Sunday = 6.
pub type WeekdayIndex = u8;

pub const MAX_WEEKDAY_INDEX: WeekdayIndex = 6;

pub fn weekday_index(date: Date) -> WeekdayIndex {
    date.weekday().number_days_from_monday()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayAvailability {
    pub day_of_week: WeekdayIndex,
    pub is_open: bool,
}

/// The venue is closed for the whole inclusive date range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Closure {
    pub id: Id,
    pub start_date: Date,
    pub end_date: Date,
    pub reason: String,
}

impl Closure {
    pub fn contains(&self, date: Date) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotOverride {
    pub start_time: Time,
    pub end_time: Time,
    pub is_enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmergencyBlock {
    pub is_blocked: bool,
    pub reason: Option<String>,
    pub updated_at: Timestamp,
}

/// All availability rules that are owned by a single venue.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VenueSchedule {
    pub day_availability: Vec<DayAvailability>,
    pub closures: Vec<Closure>,
    pub slot_overrides: Vec<SlotOverride>,
    pub emergency_block: Option<EmergencyBlock>,
}

impl VenueSchedule {
    pub fn day_availability(&self, day_of_week: WeekdayIndex) -> Option<&DayAvailability> {
        self.day_availability
            .iter()
            .find(|d| d.day_of_week == day_of_week)
    }

    /// The earliest starting closure that covers the given date.
    pub fn closure_on(&self, date: Date) -> Option<&Closure> {
        self.closures
            .iter()
            .filter(|c| c.contains(date))
            .min_by_key(|c| (c.start_date, c.end_date))
    }

    pub fn slot_override(&self, start_time: Time, end_time: Time) -> Option<&SlotOverride> {
        self.slot_overrides
            .iter()
            .find(|o| o.start_time == start_time && o.end_time == end_time)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClosedReason {
    VenueInactive,
    EmergencyBlock(Option<String>),
    ClosedToday(Option<String>),
    Closure(String),
    DayClosed,
}

impl fmt::Display for ClosedReason {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::VenueInactive => f.write_str("Venue inactive"),
            Self::EmergencyBlock(reason) => write!(
                f,
                "Emergency closure: {}",
                reason.as_deref().unwrap_or("operational issue")
            ),
            Self::ClosedToday(reason) => write!(
                f,
                "Closed today: {}",
                reason.as_deref().unwrap_or("daily maintenance")
            ),
            Self::Closure(reason) => write!(f, "Closed for maintenance: {reason}"),
            Self::DayClosed => f.write_str("Closed on this day of the week"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Availability {
    Open,
    Closed(ClosedReason),
}

impl Availability {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open)
    }

    pub fn reason(&self) -> String {
        match self {
            Self::Open => "Available".to_string(),
            Self::Closed(reason) => reason.to_string(),
        }
    }
}
