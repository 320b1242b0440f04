pub mod prelude {
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    pub use rust_decimal_macros::dec;
    pub use time::{
        macros::{date, time},
        Date, Duration,
    };
    pub use turfbook_core::{
        entities::{
            activity::*, availability::*, id::Id, payment::*, reservation::*, settings::*,
            slot::*, time::Timestamp, venue::*,
        },
        gateways::payment::{self, PaymentGateway},
        repositories::{Error as RepoError, *},
        usecases::{self, BookingPolicy},
    };

    pub mod sqlite {
        pub use super::super::super::sqlite::*;
    }

    pub use crate::{
        error::AppError, prelude as flows, prelude::BookedSlot, SharedSettings, SlotLocks,
    };

    pub const VALID_SIGNATURE: &str = "valid";

    pub const CURRENCY: &str = "INR";

    #[derive(Default)]
    pub struct DummyPaymentGateway {
        unreachable: AtomicBool,
        order_count: AtomicUsize,
    }

    impl DummyPaymentGateway {
        pub fn set_unreachable(&self, unreachable: bool) {
            self.unreachable.store(unreachable, Ordering::SeqCst);
        }
    }

    impl PaymentGateway for DummyPaymentGateway {
        fn create_order(
            &self,
            amount: rust_decimal::Decimal,
            currency: &str,
            _receipt: &str,
        ) -> Result<PaymentOrder, payment::Error> {
            if self.unreachable.load(Ordering::SeqCst) {
                return Err(payment::Error::Unreachable("connection refused".into()));
            }
            let n = self.order_count.fetch_add(1, Ordering::SeqCst);
            Ok(PaymentOrder {
                order_id: format!("order_{n}"),
                amount,
                currency: currency.into(),
            })
        }

        fn verify_payment(&self, _payment_id: &str, _order_id: &str, signature: &str) -> bool {
            signature == VALID_SIGNATURE
        }
    }

    pub struct BackendFixture {
        pub connections: sqlite::Connections,
        pub slot_locks: SlotLocks,
        pub policy: BookingPolicy,
        pub settings: SharedSettings,
        pub gateway: DummyPaymentGateway,
    }

    impl BackendFixture {
        pub fn new() -> Self {
            let _ = env_logger::builder().is_test(true).try_init();
            let connections = sqlite::Connections::init(":memory:", 1).unwrap();
            turfbook_db_sqlite::run_embedded_database_migrations(connections.exclusive().unwrap())
                .unwrap();
            Self {
                connections,
                slot_locks: SlotLocks::new(),
                policy: BookingPolicy::default(),
                settings: SharedSettings::default(),
                gateway: DummyPaymentGateway::default(),
            }
        }

        pub fn tomorrow(&self) -> Date {
            self.policy.today(Timestamp::now()).next_day().unwrap()
        }

        pub fn register_venue(&self, price_per_hour: &str) -> Venue {
            flows::register_venue(
                &self.connections,
                usecases::NewVenue {
                    owner: Id::new(),
                    name: "Green Field Arena".into(),
                    city: Some("Pune".into()),
                    price_per_hour: price_per_hour.parse().unwrap(),
                },
            )
            .unwrap()
        }

        pub fn create_active_venue(&self, price_per_hour: &str) -> Venue {
            let venue = self.register_venue(price_per_hour);
            flows::set_venue_active(&self.connections, venue.id.as_str(), &venue.owner, true)
                .unwrap()
        }

        /// Books a slot of tomorrow.
        pub fn create_reservation(
            &self,
            customer: &Id,
            venue_id: &str,
            start_time: &str,
        ) -> Result<Reservation, AppError> {
            flows::create_reservation(
                &self.connections,
                &self.slot_locks,
                &self.policy,
                &self.settings,
                customer.clone(),
                venue_id,
                &format_date(self.tomorrow()),
                start_time,
            )
        }

        pub fn book_slot(
            &self,
            customer: &Id,
            venue_id: &str,
            start_time: &str,
        ) -> Result<BookedSlot, AppError> {
            flows::book_slot(
                &self.connections,
                &self.slot_locks,
                &self.policy,
                &self.settings,
                &self.gateway,
                CURRENCY,
                customer.clone(),
                venue_id,
                &format_date(self.tomorrow()),
                start_time,
            )
        }

        pub fn create_payment_order(
            &self,
            reservation_id: &Id,
            customer: &Id,
        ) -> Result<Payment, AppError> {
            flows::create_payment_order(
                &self.connections,
                &self.slot_locks,
                &self.gateway,
                CURRENCY,
                reservation_id.as_str(),
                customer,
            )
        }

        pub fn handle_payment_callback(
            &self,
            callback: usecases::PaymentCallback,
        ) -> Result<Reservation, AppError> {
            flows::handle_payment_callback(
                &self.connections,
                &self.slot_locks,
                &self.gateway,
                callback,
            )
        }

        pub fn sweep(&self, now: Timestamp) -> Result<usize, AppError> {
            flows::sweep_expired_reservations(&self.connections, &self.slot_locks, now)
        }

        pub fn get_reservation(&self, id: &Id) -> Reservation {
            self.connections
                .shared()
                .unwrap()
                .get_reservation(id.as_str())
                .unwrap()
        }

        pub fn query_slots(&self, venue_id: &str) -> usecases::SlotsOfDay {
            usecases::query_slots(
                &self.connections.shared().unwrap(),
                &self.policy,
                venue_id,
                self.tomorrow(),
                self.policy.today(Timestamp::now()),
            )
            .unwrap()
        }
    }

    fn format_date(date: Date) -> String {
        turfbook_core::entities::time::format_date(date)
    }
}

use self::prelude::*;
use turfbook_core::entities::builders::*;

#[test]
fn unique_index_rejects_second_active_reservation_of_a_slot() {
    let fixture = BackendFixture::new();
    let venue = fixture.create_active_venue("1000");
    let tomorrow = fixture.tomorrow();
    let first = Reservation::build()
        .venue_id(venue.id.as_str())
        .slot(tomorrow, time!(18:00))
        .finish();
    let second = Reservation::build()
        .venue_id(venue.id.as_str())
        .slot(tomorrow, time!(18:00))
        .finish();
    let mut repo = fixture.connections.exclusive().unwrap();
    repo.transaction(|conn| conn.create_reservation(&first))
        .unwrap();
    let err = repo
        .transaction(|conn| conn.create_reservation(&second))
        .unwrap_err();
    assert!(matches!(err, usecases::Error::Repo(RepoError::AlreadyExists)));

    // Cancelled reservations do not hold the slot
    let cancelled = Reservation::build()
        .venue_id(venue.id.as_str())
        .slot(tomorrow, time!(18:00))
        .status(ReservationStatus::Cancelled)
        .finish();
    assert!(repo
        .transaction(|conn| conn.create_reservation(&cancelled))
        .is_ok());
}

#[test]
fn find_active_venues_by_city_in_database() {
    let fixture = BackendFixture::new();
    let pune = fixture.create_active_venue("1000");
    fixture.register_venue("1000");
    let shared = fixture.connections.shared().unwrap();
    let venues = shared
        .find_active_venues(Some("PUN"), &Pagination::default())
        .unwrap();
    assert_eq!(venues.len(), 1);
    assert_eq!(venues[0].id, pune.id);
    // Wildcards are matched literally
    assert!(shared
        .find_active_venues(Some("P_ne"), &Pagination::default())
        .unwrap()
        .is_empty());
    assert!(shared
        .find_active_venues(Some("%"), &Pagination::default())
        .unwrap()
        .is_empty());
    let page = Pagination {
        offset: Some(1),
        limit: None,
    };
    assert!(shared.find_active_venues(None, &page).unwrap().is_empty());
}

#[test]
fn recent_reservations_of_customer_in_database() {
    let fixture = BackendFixture::new();
    let venue = fixture.create_active_venue("1000");
    let customer = Id::new();
    for start_time in ["07:00", "08:00", "09:00"] {
        fixture
            .create_reservation(&customer, venue.id.as_str(), start_time)
            .unwrap();
    }
    fixture
        .create_reservation(&Id::new(), venue.id.as_str(), "10:00")
        .unwrap();
    let shared = fixture.connections.shared().unwrap();
    let reservations = shared
        .recent_reservations_of_customer(&customer, &Pagination::default())
        .unwrap();
    let starts: Vec<_> = reservations.iter().map(|r| r.start_time).collect();
    assert_eq!(starts, [time!(09:00), time!(08:00), time!(07:00)]);
    let page = shared
        .recent_reservations_of_customer(
            &customer,
            &Pagination {
                offset: Some(2),
                limit: Some(5),
            },
        )
        .unwrap();
    assert_eq!(page.len(), 1);
    assert_eq!(page[0].start_time, time!(07:00));
}
