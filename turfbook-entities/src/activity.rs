use num_derive::FromPrimitive;
use num_traits::FromPrimitive as _;
use strum::Display;
use thiserror::Error;

use crate::{id::*, time::*};

pub type ActivityKindPrimitive = i16;

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive, Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityKind {
    BookingCreated    = 0,
    BookingConfirmed  = 1,
    BookingCancelled  = 2,
    PriceChanged      = 3,
    StatusChanged     = 4,
    OperationsChanged = 5,
}

#[derive(Debug, Error)]
#[error("Invalid activity kind primitive: {0}")]
pub struct InvalidActivityKindPrimitive(ActivityKindPrimitive);

impl TryFrom<ActivityKindPrimitive> for ActivityKind {
    type Error = InvalidActivityKindPrimitive;
    fn try_from(from: ActivityKindPrimitive) -> Result<Self, Self::Error> {
        Self::from_i16(from).ok_or(InvalidActivityKindPrimitive(from))
    }
}

impl From<ActivityKind> for ActivityKindPrimitive {
    fn from(from: ActivityKind) -> Self {
        from as ActivityKindPrimitive
    }
}

/// An entry in the activity log of a venue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VenueActivity {
    pub venue_id: Id,
    pub kind: ActivityKind,
    pub description: String,
    pub at: Timestamp,
    /// The account that triggered the activity, `None` for
    /// background jobs.
    pub by: Option<Id>,
}
