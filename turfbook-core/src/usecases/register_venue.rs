use super::prelude::*;
use crate::entities::money::{round_currency, MAX_AMOUNT};

#[derive(Debug, Clone)]
pub struct NewVenue {
    pub owner: Id,
    pub name: String,
    pub city: Option<String>,
    pub price_per_hour: Decimal,
}

pub(crate) fn validate_price(price: Decimal) -> Result<Decimal> {
    let price = round_currency(price);
    if price <= Decimal::ZERO || price >= MAX_AMOUNT {
        return Err(Error::InvalidPrice);
    }
    Ok(price)
}

/// New venues are inactive until the owner activates them.
pub fn register_venue<R: VenueRepo>(repo: &R, new_venue: NewVenue, now: Timestamp) -> Result<Venue> {
    let NewVenue {
        owner,
        name,
        city,
        price_per_hour,
    } = new_venue;
    let name = name.trim().to_owned();
    if name.is_empty() {
        return Err(Error::InvalidName);
    }
    let venue = Venue {
        id: Id::new(),
        owner,
        name,
        city: city.map(|c| c.trim().to_owned()).filter(|c| !c.is_empty()),
        price_per_hour: validate_price(price_per_hour)?,
        active: false,
        open_today: true,
        closed_reason: None,
        created_at: now,
    };
    log::debug!("Registering venue {} of owner {}", venue.id, venue.owner);
    repo.create_venue(&venue)?;
    Ok(venue)
}
