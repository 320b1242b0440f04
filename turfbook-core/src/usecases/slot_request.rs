use super::prelude::*;
use time::Date;

pub fn parse_date_param(date: &str) -> Result<Date> {
    parse_date(date).map_err(|_| Error::InvalidDate)
}

/// Validates the slot of a booking request before any locking
/// takes place.
pub fn parse_slot_key(
    policy: &BookingPolicy,
    venue_id: &str,
    date: &str,
    start_time: &str,
    today: Date,
) -> Result<SlotKey> {
    let date = parse_date_param(date)?;
    if date < today {
        return Err(Error::DateInPast);
    }
    let start_time = parse_time(start_time).map_err(|_| Error::InvalidSlotTime)?;
    if policy.slot_grid.slot_end(start_time).is_none() {
        return Err(Error::InvalidSlotTime);
    }
    Ok(SlotKey {
        venue_id: venue_id.into(),
        date,
        start_time,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::{date, time};

    const TODAY: Date = date!(2024 - 06 - 05);

    #[test]
    fn valid_slot() {
        let key =
            parse_slot_key(&BookingPolicy::default(), "v1", "2024-06-05", "14:00", TODAY).unwrap();
        assert_eq!(key.venue_id.as_str(), "v1");
        assert_eq!(key.date, TODAY);
        assert_eq!(key.start_time, time!(14:00));
    }

    #[test]
    fn malformed_input() {
        let policy = BookingPolicy::default();
        assert!(matches!(
            parse_slot_key(&policy, "v1", "2024-13-01", "14:00", TODAY),
            Err(Error::InvalidDate)
        ));
        assert!(matches!(
            parse_slot_key(&policy, "v1", "2024-06-05", "2pm", TODAY),
            Err(Error::InvalidSlotTime)
        ));
    }

    #[test]
    fn times_outside_of_the_grid() {
        let policy = BookingPolicy::default();
        for t in ["05:00", "23:00", "14:30"] {
            assert!(matches!(
                parse_slot_key(&policy, "v1", "2024-06-05", t, TODAY),
                Err(Error::InvalidSlotTime)
            ));
        }
    }

    #[test]
    fn past_dates() {
        assert!(matches!(
            parse_slot_key(&BookingPolicy::default(), "v1", "2024-06-04", "14:00", TODAY),
            Err(Error::DateInPast)
        ));
    }
}
