use super::prelude::*;

/// Active venues, optionally narrowed down to a city.
pub fn find_active_venues<R: VenueRepo>(
    repo: &R,
    city: Option<&str>,
    pagination: &Pagination,
) -> Result<Vec<Venue>> {
    let city = city.map(str::trim).filter(|c| !c.is_empty());
    Ok(repo.find_active_venues(city, pagination)?)
}
