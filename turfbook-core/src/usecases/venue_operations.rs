use super::{prelude::*, register_venue::validate_price};
use time::{Date, Time};

/// Loads a venue on behalf of its owner.
pub fn authorize_venue_owner<R: VenueRepo>(repo: &R, venue_id: &str, account: &Id) -> Result<Venue> {
    let venue = repo.get_venue(venue_id)?;
    if !venue.is_owned_by(account) {
        log::debug!("Account {} does not own venue {}", account, venue.id);
        return Err(Error::Forbidden);
    }
    Ok(venue)
}

fn log_activity<R: VenueActivityRepo>(
    repo: &R,
    venue: &Venue,
    kind: ActivityKind,
    description: String,
    by: &Id,
    now: Timestamp,
) -> Result<()> {
    repo.log_venue_activity(&VenueActivity {
        venue_id: venue.id.clone(),
        kind,
        description,
        at: now,
        by: Some(by.clone()),
    })?;
    Ok(())
}

pub fn set_venue_active<R>(
    repo: &R,
    venue_id: &str,
    account: &Id,
    active: bool,
    now: Timestamp,
) -> Result<Venue>
where
    R: VenueRepo + VenueActivityRepo,
{
    let mut venue = authorize_venue_owner(repo, venue_id, account)?;
    if venue.active == active {
        return Ok(venue);
    }
    venue.active = active;
    repo.update_venue(&venue)?;
    let status = if active { "Active" } else { "Inactive" };
    log_activity(
        repo,
        &venue,
        ActivityKind::StatusChanged,
        format!("Venue status changed to {status}"),
        account,
        now,
    )?;
    Ok(venue)
}

pub fn set_venue_open_today<R>(
    repo: &R,
    venue_id: &str,
    account: &Id,
    open: bool,
    reason: Option<String>,
    now: Timestamp,
) -> Result<Venue>
where
    R: VenueRepo + VenueActivityRepo,
{
    let mut venue = authorize_venue_owner(repo, venue_id, account)?;
    venue.open_today = open;
    venue.closed_reason = if open {
        None
    } else {
        reason.map(|r| r.trim().to_owned()).filter(|r| !r.is_empty())
    };
    repo.update_venue(&venue)?;
    let description = if open {
        "Opened for today".to_owned()
    } else {
        ClosedReason::ClosedToday(venue.closed_reason.clone()).to_string()
    };
    log_activity(
        repo,
        &venue,
        ActivityKind::OperationsChanged,
        description,
        account,
        now,
    )?;
    Ok(venue)
}

pub fn update_venue_price<R>(
    repo: &R,
    venue_id: &str,
    account: &Id,
    price_per_hour: Decimal,
    now: Timestamp,
) -> Result<Venue>
where
    R: VenueRepo + VenueActivityRepo,
{
    let price_per_hour = validate_price(price_per_hour)?;
    let mut venue = authorize_venue_owner(repo, venue_id, account)?;
    if venue.price_per_hour == price_per_hour {
        return Ok(venue);
    }
    let old_price = venue.price_per_hour;
    venue.price_per_hour = price_per_hour;
    repo.update_venue(&venue)?;
    log_activity(
        repo,
        &venue,
        ActivityKind::PriceChanged,
        format!("Price updated from {old_price} to {price_per_hour}"),
        account,
        now,
    )?;
    Ok(venue)
}

pub fn set_emergency_block<R>(
    repo: &R,
    venue_id: &str,
    account: &Id,
    is_blocked: bool,
    reason: Option<String>,
    now: Timestamp,
) -> Result<EmergencyBlock>
where
    R: VenueRepo + VenueScheduleRepo + VenueActivityRepo,
{
    let venue = authorize_venue_owner(repo, venue_id, account)?;
    let block = EmergencyBlock {
        is_blocked,
        reason: reason.map(|r| r.trim().to_owned()).filter(|r| !r.is_empty()),
        updated_at: now,
    };
    repo.replace_emergency_block(venue_id, &block)?;
    let description = if is_blocked {
        ClosedReason::EmergencyBlock(block.reason.clone()).to_string()
    } else {
        "Emergency closure lifted".to_owned()
    };
    log_activity(
        repo,
        &venue,
        ActivityKind::OperationsChanged,
        description,
        account,
        now,
    )?;
    Ok(block)
}

pub fn set_day_availability<R>(
    repo: &R,
    venue_id: &str,
    account: &Id,
    day_of_week: WeekdayIndex,
    is_open: bool,
) -> Result<DayAvailability>
where
    R: VenueRepo + VenueScheduleRepo,
{
    if day_of_week > MAX_WEEKDAY_INDEX {
        return Err(Error::InvalidWeekday);
    }
    authorize_venue_owner(repo, venue_id, account)?;
    let day = DayAvailability {
        day_of_week,
        is_open,
    };
    repo.replace_day_availability(venue_id, &day)?;
    Ok(day)
}

pub fn add_closure<R>(
    repo: &R,
    venue_id: &str,
    account: &Id,
    start_date: Date,
    end_date: Date,
    reason: String,
) -> Result<Closure>
where
    R: VenueRepo + VenueScheduleRepo,
{
    if end_date < start_date {
        return Err(Error::EndDateBeforeStart);
    }
    authorize_venue_owner(repo, venue_id, account)?;
    let closure = Closure {
        id: Id::new(),
        start_date,
        end_date,
        reason: reason.trim().to_owned(),
    };
    repo.create_closure(venue_id, &closure)?;
    Ok(closure)
}

pub fn remove_closure<R>(repo: &R, venue_id: &str, account: &Id, closure_id: &str) -> Result<()>
where
    R: VenueRepo + VenueScheduleRepo,
{
    authorize_venue_owner(repo, venue_id, account)?;
    repo.delete_closure(venue_id, closure_id)?;
    Ok(())
}

pub fn set_slot_override<R>(
    repo: &R,
    policy: &BookingPolicy,
    venue_id: &str,
    account: &Id,
    start_time: Time,
    is_enabled: bool,
) -> Result<SlotOverride>
where
    R: VenueRepo + VenueScheduleRepo,
{
    let end_time = policy
        .slot_grid
        .slot_end(start_time)
        .ok_or(Error::InvalidSlotTime)?;
    authorize_venue_owner(repo, venue_id, account)?;
    let slot_override = SlotOverride {
        start_time,
        end_time,
        is_enabled,
    };
    repo.replace_slot_override(venue_id, &slot_override)?;
    Ok(slot_override)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};
    use crate::entities::builders::*;
    use rust_decimal_macros::dec;
    use time::macros::{date, time};

    fn setup() -> (MockDb, Id) {
        let db = MockDb::default();
        let venue = Venue::build()
            .id("v1")
            .owner("owner")
            .price_per_hour("800.00")
            .finish();
        db.venues.borrow_mut().push(venue);
        (db, "owner".into())
    }

    #[test]
    fn only_the_owner_may_operate_a_venue() {
        let (db, _) = setup();
        let stranger = Id::from("stranger");
        let now = Timestamp::now();
        assert!(matches!(
            set_venue_active(&db, "v1", &stranger, false, now),
            Err(Error::Forbidden)
        ));
        assert!(matches!(
            update_venue_price(&db, "v1", &stranger, dec!(1), now),
            Err(Error::Forbidden)
        ));
        assert!(matches!(
            set_emergency_block(&db, "v1", &stranger, true, None, now),
            Err(Error::Forbidden)
        ));
        assert!(db.activities.borrow().is_empty());
        assert!(db.venues.borrow()[0].active);
    }

    #[test]
    fn toggle_active() {
        let (db, owner) = setup();
        let now = Timestamp::now();
        let venue = set_venue_active(&db, "v1", &owner, false, now).unwrap();
        assert!(!venue.active);
        // No change, no log entry
        set_venue_active(&db, "v1", &owner, false, now).unwrap();
        let activities = db.activities.borrow();
        assert_eq!(activities.len(), 1);
        assert_eq!(activities[0].kind, ActivityKind::StatusChanged);
        assert_eq!(activities[0].description, "Venue status changed to Inactive");
    }

    #[test]
    fn close_for_today() {
        let (db, owner) = setup();
        let venue =
            set_venue_open_today(&db, "v1", &owner, false, Some("Rain".into()), Timestamp::now())
                .unwrap();
        assert!(!venue.open_today);
        assert_eq!(venue.closed_reason.as_deref(), Some("Rain"));
        let venue =
            set_venue_open_today(&db, "v1", &owner, true, Some("ignored".into()), Timestamp::now())
                .unwrap();
        assert!(venue.open_today);
        assert_eq!(venue.closed_reason, None);
    }

    #[test]
    fn price_change_is_logged() {
        let (db, owner) = setup();
        let venue = update_venue_price(&db, "v1", &owner, dec!(950.5), Timestamp::now()).unwrap();
        assert_eq!(venue.price_per_hour, dec!(950.50));
        let activities = db.activities.borrow();
        assert_eq!(activities[0].kind, ActivityKind::PriceChanged);
        assert_eq!(activities[0].description, "Price updated from 800.00 to 950.50");
        assert!(matches!(
            update_venue_price(&db, "v1", &owner, dec!(-1), Timestamp::now()),
            Err(Error::InvalidPrice)
        ));
        for price in [dec!(0.004), dec!(100000000), Decimal::MAX] {
            assert!(matches!(
                update_venue_price(&db, "v1", &owner, price, Timestamp::now()),
                Err(Error::InvalidPrice)
            ));
        }
        assert_eq!(db.venues.borrow()[0].price_per_hour, dec!(950.50));
    }

    #[test]
    fn emergency_block() {
        let (db, owner) = setup();
        set_emergency_block(&db, "v1", &owner, true, Some("Power cut".into()), Timestamp::now())
            .unwrap();
        let block = db.load_venue_schedule("v1").unwrap().emergency_block.unwrap();
        assert!(block.is_blocked);
        assert_eq!(block.reason.as_deref(), Some("Power cut"));
        set_emergency_block(&db, "v1", &owner, false, None, Timestamp::now()).unwrap();
        let block = db.load_venue_schedule("v1").unwrap().emergency_block.unwrap();
        assert!(!block.is_blocked);
    }

    #[test]
    fn weekdays() {
        let (db, owner) = setup();
        assert!(matches!(
            set_day_availability(&db, "v1", &owner, 7, false),
            Err(Error::InvalidWeekday)
        ));
        set_day_availability(&db, "v1", &owner, 6, false).unwrap();
        set_day_availability(&db, "v1", &owner, 6, true).unwrap();
        let schedule = db.load_venue_schedule("v1").unwrap();
        assert_eq!(schedule.day_availability.len(), 1);
        assert!(schedule.day_availability(6).unwrap().is_open);
    }

    #[test]
    fn closures() {
        let (db, owner) = setup();
        assert!(matches!(
            add_closure(
                &db,
                "v1",
                &owner,
                date!(2024 - 06 - 12),
                date!(2024 - 06 - 10),
                "Repair".into()
            ),
            Err(Error::EndDateBeforeStart)
        ));
        let closure = add_closure(
            &db,
            "v1",
            &owner,
            date!(2024 - 06 - 10),
            date!(2024 - 06 - 10),
            "Repair".into(),
        )
        .unwrap();
        assert_eq!(db.load_venue_schedule("v1").unwrap().closures.len(), 1);
        remove_closure(&db, "v1", &owner, closure.id.as_str()).unwrap();
        assert!(db.load_venue_schedule("v1").unwrap().closures.is_empty());
        assert!(matches!(
            remove_closure(&db, "v1", &owner, closure.id.as_str()),
            Err(Error::Repo(RepoError::NotFound))
        ));
    }

    #[test]
    fn slot_overrides() {
        let (db, owner) = setup();
        let policy = BookingPolicy::default();
        let o = set_slot_override(&db, &policy, "v1", &owner, time!(14:00), false).unwrap();
        assert_eq!(o.end_time, time!(15:00));
        set_slot_override(&db, &policy, "v1", &owner, time!(14:00), true).unwrap();
        let schedule = db.load_venue_schedule("v1").unwrap();
        assert_eq!(schedule.slot_overrides.len(), 1);
        assert!(schedule.slot_overrides[0].is_enabled);
        assert!(matches!(
            set_slot_override(&db, &policy, "v1", &owner, time!(14:30), false),
            Err(Error::InvalidSlotTime)
        ));
    }
}
