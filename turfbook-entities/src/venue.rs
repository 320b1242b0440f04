use rust_decimal::Decimal;

use crate::{id::*, time::*};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Venue {
    pub id             : Id,
    pub owner          : Id,
    pub name           : String,
    pub city           : Option<String>,
    pub price_per_hour : Decimal,
    // Visibility as controlled by the owner (or an administrator)
    pub active         : bool,
    // Manual switch that only applies to the current day
    pub open_today     : bool,
    pub closed_reason  : Option<String>,
    pub created_at     : Timestamp,
}

impl Venue {
    pub fn is_owned_by(&self, account: &Id) -> bool {
        &self.owner == account
    }
}
