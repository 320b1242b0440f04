use super::*;
use time::{Date, Time};
use turfbook_core::usecases::{BookingPolicy, NewVenue};

pub fn register_venue(connections: &sqlite::Connections, new_venue: NewVenue) -> Result<Venue> {
    let mut repo = connections.exclusive()?;
    let venue =
        repo.transaction(|conn| usecases::register_venue(conn, new_venue, Timestamp::now()))?;
    info!("Registered venue {} of owner {}", venue.id, venue.owner);
    Ok(venue)
}

pub fn set_venue_active(
    connections: &sqlite::Connections,
    venue_id: &str,
    account: &Id,
    active: bool,
) -> Result<Venue> {
    let mut repo = connections.exclusive()?;
    Ok(repo.transaction(|conn| {
        usecases::set_venue_active(conn, venue_id, account, active, Timestamp::now())
    })?)
}

pub fn set_venue_open_today(
    connections: &sqlite::Connections,
    venue_id: &str,
    account: &Id,
    open: bool,
    reason: Option<String>,
) -> Result<Venue> {
    let mut repo = connections.exclusive()?;
    Ok(repo.transaction(|conn| {
        usecases::set_venue_open_today(conn, venue_id, account, open, reason, Timestamp::now())
    })?)
}

pub fn update_venue_price(
    connections: &sqlite::Connections,
    venue_id: &str,
    account: &Id,
    price_per_hour: Decimal,
) -> Result<Venue> {
    let mut repo = connections.exclusive()?;
    Ok(repo.transaction(|conn| {
        usecases::update_venue_price(conn, venue_id, account, price_per_hour, Timestamp::now())
    })?)
}

pub fn set_emergency_block(
    connections: &sqlite::Connections,
    venue_id: &str,
    account: &Id,
    is_blocked: bool,
    reason: Option<String>,
) -> Result<EmergencyBlock> {
    let mut repo = connections.exclusive()?;
    let block = repo.transaction(|conn| {
        usecases::set_emergency_block(conn, venue_id, account, is_blocked, reason, Timestamp::now())
    })?;
    if block.is_blocked {
        warn!("Venue {venue_id} has been blocked: {:?}", block.reason);
    }
    Ok(block)
}

pub fn set_day_availability(
    connections: &sqlite::Connections,
    venue_id: &str,
    account: &Id,
    day_of_week: WeekdayIndex,
    is_open: bool,
) -> Result<DayAvailability> {
    let mut repo = connections.exclusive()?;
    Ok(repo.transaction(|conn| {
        usecases::set_day_availability(conn, venue_id, account, day_of_week, is_open)
    })?)
}

pub fn add_closure(
    connections: &sqlite::Connections,
    venue_id: &str,
    account: &Id,
    start_date: Date,
    end_date: Date,
    reason: String,
) -> Result<Closure> {
    let mut repo = connections.exclusive()?;
    Ok(repo.transaction(|conn| {
        usecases::add_closure(conn, venue_id, account, start_date, end_date, reason)
    })?)
}

pub fn remove_closure(
    connections: &sqlite::Connections,
    venue_id: &str,
    account: &Id,
    closure_id: &str,
) -> Result<()> {
    let mut repo = connections.exclusive()?;
    Ok(repo.transaction(|conn| usecases::remove_closure(conn, venue_id, account, closure_id))?)
}

pub fn set_slot_override(
    connections: &sqlite::Connections,
    policy: &BookingPolicy,
    venue_id: &str,
    account: &Id,
    start_time: Time,
    is_enabled: bool,
) -> Result<SlotOverride> {
    let mut repo = connections.exclusive()?;
    Ok(repo.transaction(|conn| {
        usecases::set_slot_override(conn, policy, venue_id, account, start_time, is_enabled)
    })?)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    #[test]
    fn owner_operations_are_logged() {
        let fixture = BackendFixture::new();
        let venue = fixture.create_active_venue("1000");
        flows::update_venue_price(
            &fixture.connections,
            venue.id.as_str(),
            &venue.owner,
            dec!(1200),
        )
        .unwrap();
        flows::set_venue_open_today(
            &fixture.connections,
            venue.id.as_str(),
            &venue.owner,
            false,
            Some("Rain".into()),
        )
        .unwrap();

        let activities = usecases::recent_venue_activities(
            &fixture.connections.shared().unwrap(),
            venue.id.as_str(),
            &venue.owner,
            &Pagination {
                offset: None,
                limit: None,
            },
        )
        .unwrap();
        let kinds: Vec<_> = activities.iter().map(|a| a.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ActivityKind::OperationsChanged,
                ActivityKind::PriceChanged,
                ActivityKind::StatusChanged,
            ]
        );
        assert_eq!(
            activities[1].description,
            "Price updated from 1000.00 to 1200.00"
        );
    }

    #[test]
    fn only_owners_may_change_their_venue() {
        let fixture = BackendFixture::new();
        let venue = fixture.create_active_venue("1000");
        let err = flows::set_venue_active(&fixture.connections, venue.id.as_str(), &Id::new(), false)
            .unwrap_err();
        assert!(matches!(
            err.as_parameter_error(),
            Some(usecases::Error::Forbidden)
        ));
    }

    #[test]
    fn emergency_block_closes_the_venue() {
        let fixture = BackendFixture::new();
        let venue = fixture.create_active_venue("1000");
        flows::set_emergency_block(
            &fixture.connections,
            venue.id.as_str(),
            &venue.owner,
            true,
            Some("Flooding".into()),
        )
        .unwrap();
        let err = fixture
            .create_reservation(&Id::new(), venue.id.as_str(), "18:00")
            .unwrap_err();
        assert!(matches!(
            err.as_parameter_error(),
            Some(usecases::Error::VenueClosed(ClosedReason::EmergencyBlock(_)))
        ));
        flows::set_emergency_block(
            &fixture.connections,
            venue.id.as_str(),
            &venue.owner,
            false,
            None,
        )
        .unwrap();
        assert!(fixture
            .create_reservation(&Id::new(), venue.id.as_str(), "18:00")
            .is_ok());
    }

    #[test]
    fn disabled_slot_cannot_be_booked() {
        let fixture = BackendFixture::new();
        let venue = fixture.create_active_venue("1000");
        flows::set_slot_override(
            &fixture.connections,
            &fixture.policy,
            venue.id.as_str(),
            &venue.owner,
            time!(18:00),
            false,
        )
        .unwrap();
        let err = fixture
            .create_reservation(&Id::new(), venue.id.as_str(), "18:00")
            .unwrap_err();
        assert!(matches!(
            err.as_parameter_error(),
            Some(usecases::Error::SlotDisabled)
        ));
        let slots = fixture.query_slots(venue.id.as_str());
        let disabled: Vec<_> = slots.slots.iter().filter(|s| !s.is_enabled).collect();
        assert_eq!(disabled.len(), 1);
        assert_eq!(disabled[0].status(), SlotStatus::Unavailable);
    }

    #[test]
    fn closure_closes_the_venue() {
        let fixture = BackendFixture::new();
        let venue = fixture.create_active_venue("1000");
        let tomorrow = fixture.tomorrow();
        let closure = flows::add_closure(
            &fixture.connections,
            venue.id.as_str(),
            &venue.owner,
            tomorrow,
            tomorrow,
            "Maintenance".into(),
        )
        .unwrap();
        let err = fixture
            .create_reservation(&Id::new(), venue.id.as_str(), "18:00")
            .unwrap_err();
        assert!(matches!(
            err.as_parameter_error(),
            Some(usecases::Error::VenueClosed(ClosedReason::Closure(_)))
        ));
        flows::remove_closure(
            &fixture.connections,
            venue.id.as_str(),
            &venue.owner,
            closure.id.as_str(),
        )
        .unwrap();
        assert!(fixture
            .create_reservation(&Id::new(), venue.id.as_str(), "18:00")
            .is_ok());
    }
}
