use super::{prelude::*, venue_operations::authorize_venue_owner};

pub fn recent_venue_activities<R>(
    repo: &R,
    venue_id: &str,
    account: &Id,
    pagination: &Pagination,
) -> Result<Vec<VenueActivity>>
where
    R: VenueRepo + VenueActivityRepo,
{
    authorize_venue_owner(repo, venue_id, account)?;
    Ok(repo.recent_venue_activities(venue_id, pagination)?)
}
