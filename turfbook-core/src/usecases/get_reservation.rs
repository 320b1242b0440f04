use super::prelude::*;

/// Loads a reservation on behalf of the customer that made it.
pub fn get_reservation<R: ReservationRepo>(
    repo: &R,
    id: &str,
    requested_by: &Id,
) -> Result<Reservation> {
    let reservation = repo.get_reservation(id)?;
    if !reservation.is_owned_by(requested_by) {
        return Err(Error::Forbidden);
    }
    Ok(reservation)
}

/// All reservations of a customer, newest first.
pub fn recent_reservations_of_customer<R: ReservationRepo>(
    repo: &R,
    customer: &Id,
    pagination: &Pagination,
) -> Result<Vec<Reservation>> {
    Ok(repo.recent_reservations_of_customer(customer, pagination)?)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};
    use crate::entities::builders::*;
    use time::Duration;

    #[test]
    fn only_the_customer_may_read_a_reservation() {
        let db = MockDb::default();
        let r = Reservation::build().customer("alice").finish();
        let id = r.id.clone();
        db.reservations.borrow_mut().push(r);
        assert!(get_reservation(&db, id.as_str(), &"alice".into()).is_ok());
        assert!(matches!(
            get_reservation(&db, id.as_str(), &"bob".into()),
            Err(Error::Forbidden)
        ));
        assert!(matches!(
            get_reservation(&db, "unknown", &"alice".into()),
            Err(Error::Repo(RepoError::NotFound))
        ));
    }

    #[test]
    fn list_own_reservations_newest_first() {
        let db = MockDb::default();
        let now = Timestamp::now();
        for (customer, minutes) in [("alice", 0), ("bob", 1), ("alice", 2), ("alice", 1)] {
            db.reservations.borrow_mut().push(
                Reservation::build()
                    .customer(customer)
                    .created_at(now + Duration::minutes(minutes))
                    .finish(),
            );
        }
        let alice = Id::from("alice");
        let reservations =
            recent_reservations_of_customer(&db, &alice, &Pagination::default()).unwrap();
        assert_eq!(reservations.len(), 3);
        assert!(reservations.iter().all(|r| r.customer == alice));
        assert_eq!(reservations[0].created_at, now + Duration::minutes(2));
        assert_eq!(reservations[2].created_at, now);
        let page = recent_reservations_of_customer(
            &db,
            &alice,
            &Pagination {
                offset: Some(1),
                limit: Some(1),
            },
        )
        .unwrap();
        assert_eq!(page.len(), 1);
        assert_eq!(page[0].created_at, now + Duration::minutes(1));
        assert!(recent_reservations_of_customer(&db, &"carol".into(), &Pagination::default())
            .unwrap()
            .is_empty());
    }
}
