use std::{cell::RefCell, collections::HashMap};

use time::{Date, Time};

use super::prelude::*;

type RepoResult<T> = std::result::Result<T, RepoError>;

#[derive(Default)]
pub struct MockDb {
    pub venues: RefCell<Vec<Venue>>,
    pub schedules: RefCell<HashMap<Id, VenueSchedule>>,
    pub reservations: RefCell<Vec<Reservation>>,
    pub payments: RefCell<Vec<Payment>>,
    pub activities: RefCell<Vec<VenueActivity>>,
}

impl MockDb {
    fn with_schedule<T>(&self, venue_id: &str, f: impl FnOnce(&mut VenueSchedule) -> T) -> T {
        let mut schedules = self.schedules.borrow_mut();
        f(schedules.entry(venue_id.into()).or_default())
    }
}

impl VenueRepo for MockDb {
    fn create_venue(&self, venue: &Venue) -> RepoResult<()> {
        if self.venues.borrow().iter().any(|v| v.id == venue.id) {
            return Err(RepoError::AlreadyExists);
        }
        self.venues.borrow_mut().push(venue.clone());
        Ok(())
    }

    fn update_venue(&self, venue: &Venue) -> RepoResult<()> {
        let mut venues = self.venues.borrow_mut();
        let existing = venues
            .iter_mut()
            .find(|v| v.id == venue.id)
            .ok_or(RepoError::NotFound)?;
        *existing = venue.clone();
        Ok(())
    }

    fn get_venue(&self, id: &str) -> RepoResult<Venue> {
        self.venues
            .borrow()
            .iter()
            .find(|v| v.id.as_str() == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn find_active_venues(
        &self,
        city: Option<&str>,
        pagination: &Pagination,
    ) -> RepoResult<Vec<Venue>> {
        let city = city.map(str::to_lowercase);
        let mut venues: Vec<_> = self
            .venues
            .borrow()
            .iter()
            .filter(|v| v.active)
            .filter(|v| match (&city, &v.city) {
                (None, _) => true,
                (Some(pattern), Some(city)) => city.to_lowercase().contains(pattern),
                (Some(_), None) => false,
            })
            .cloned()
            .collect();
        venues.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(paginate(venues, pagination))
    }
}

fn paginate<T>(items: Vec<T>, pagination: &Pagination) -> Vec<T> {
    let offset = pagination.offset.unwrap_or(0) as usize;
    let limit = pagination.limit.map(|l| l as usize).unwrap_or(usize::MAX);
    items.into_iter().skip(offset).take(limit).collect()
}

impl VenueScheduleRepo for MockDb {
    fn load_venue_schedule(&self, venue_id: &str) -> RepoResult<VenueSchedule> {
        Ok(self
            .schedules
            .borrow()
            .get(venue_id)
            .cloned()
            .unwrap_or_default())
    }

    fn replace_day_availability(&self, venue_id: &str, day: &DayAvailability) -> RepoResult<()> {
        self.with_schedule(venue_id, |s| {
            s.day_availability
                .retain(|d| d.day_of_week != day.day_of_week);
            s.day_availability.push(*day);
        });
        Ok(())
    }

    fn replace_slot_override(&self, venue_id: &str, o: &SlotOverride) -> RepoResult<()> {
        self.with_schedule(venue_id, |s| {
            s.slot_overrides
                .retain(|x| (x.start_time, x.end_time) != (o.start_time, o.end_time));
            s.slot_overrides.push(*o);
        });
        Ok(())
    }

    fn replace_emergency_block(&self, venue_id: &str, block: &EmergencyBlock) -> RepoResult<()> {
        self.with_schedule(venue_id, |s| s.emergency_block = Some(block.clone()));
        Ok(())
    }

    fn create_closure(&self, venue_id: &str, closure: &Closure) -> RepoResult<()> {
        self.with_schedule(venue_id, |s| s.closures.push(closure.clone()));
        Ok(())
    }

    fn delete_closure(&self, venue_id: &str, closure_id: &str) -> RepoResult<()> {
        self.with_schedule(venue_id, |s| {
            let count = s.closures.len();
            s.closures.retain(|c| c.id.as_str() != closure_id);
            if s.closures.len() == count {
                return Err(RepoError::NotFound);
            }
            Ok(())
        })
    }
}

impl ReservationRepo for MockDb {
    fn create_reservation(&self, reservation: &Reservation) -> RepoResult<()> {
        if self.find_active_reservation(&reservation.slot_key())?.is_some() {
            return Err(RepoError::AlreadyExists);
        }
        self.reservations.borrow_mut().push(reservation.clone());
        Ok(())
    }

    fn get_reservation(&self, id: &str) -> RepoResult<Reservation> {
        self.reservations
            .borrow()
            .iter()
            .find(|r| r.id.as_str() == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn find_active_reservation(&self, slot: &SlotKey) -> RepoResult<Option<Reservation>> {
        Ok(self
            .reservations
            .borrow()
            .iter()
            .find(|r| r.status.is_active() && &r.slot_key() == slot)
            .cloned())
    }

    fn active_reservation_starts(&self, venue_id: &str, date: Date) -> RepoResult<Vec<Time>> {
        Ok(self
            .reservations
            .borrow()
            .iter()
            .filter(|r| {
                r.status.is_active() && r.venue_id.as_str() == venue_id && r.booking_date == date
            })
            .map(|r| r.start_time)
            .collect())
    }

    fn update_pending_reservation(&self, reservation: &Reservation) -> RepoResult<usize> {
        let mut reservations = self.reservations.borrow_mut();
        match reservations
            .iter_mut()
            .find(|r| r.id == reservation.id && r.status == ReservationStatus::Pending)
        {
            Some(r) => {
                *r = reservation.clone();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    fn find_expired_pending_reservations(&self, now: Timestamp) -> RepoResult<Vec<Reservation>> {
        Ok(self
            .reservations
            .borrow()
            .iter()
            .filter(|r| r.is_expired_at(now))
            .cloned()
            .collect())
    }

    fn recent_reservations_of_customer(
        &self,
        customer: &Id,
        pagination: &Pagination,
    ) -> RepoResult<Vec<Reservation>> {
        let mut reservations: Vec<_> = self
            .reservations
            .borrow()
            .iter()
            .filter(|r| &r.customer == customer)
            .cloned()
            .collect();
        // Later insertions first on equal time stamps
        reservations.reverse();
        reservations.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(paginate(reservations, pagination))
    }
}

impl PaymentRepo for MockDb {
    fn replace_payment(&self, payment: &Payment) -> RepoResult<()> {
        let mut payments = self.payments.borrow_mut();
        payments.retain(|p| p.reservation_id != payment.reservation_id);
        payments.push(payment.clone());
        Ok(())
    }

    fn get_payment_of_reservation(&self, reservation_id: &str) -> RepoResult<Payment> {
        self.payments
            .borrow()
            .iter()
            .find(|p| p.reservation_id.as_str() == reservation_id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }
}

impl VenueActivityRepo for MockDb {
    fn log_venue_activity(&self, activity: &VenueActivity) -> RepoResult<()> {
        self.activities.borrow_mut().push(activity.clone());
        Ok(())
    }

    fn recent_venue_activities(
        &self,
        venue_id: &str,
        pagination: &Pagination,
    ) -> RepoResult<Vec<VenueActivity>> {
        let mut activities: Vec<_> = self
            .activities
            .borrow()
            .iter()
            .filter(|a| a.venue_id.as_str() == venue_id)
            .cloned()
            .collect();
        activities.sort_by(|a, b| b.at.cmp(&a.at));
        Ok(paginate(activities, pagination))
    }
}
