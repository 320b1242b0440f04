#![allow(clippy::extra_unused_lifetimes)]

// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in **milli**seconds. Dates are
// stored as `YYYY-MM-DD`, times as `HH:MM` and amounts
// as decimal strings.

use super::schema::*;

#[derive(Insertable)]
#[diesel(table_name = venue)]
pub struct NewVenue<'a> {
    pub id: &'a str,
    pub owner: &'a str,
    pub name: &'a str,
    pub city: Option<&'a str>,
    pub price_per_hour: String,
    pub active: bool,
    pub open_today: bool,
    pub closed_reason: Option<&'a str>,
    pub created_at: i64,
}

#[derive(AsChangeset)]
#[diesel(table_name = venue, treat_none_as_null = true)]
pub struct VenueChangeset<'a> {
    pub name: &'a str,
    pub city: Option<&'a str>,
    pub price_per_hour: String,
    pub active: bool,
    pub open_today: bool,
    pub closed_reason: Option<&'a str>,
}

#[derive(Queryable)]
pub struct Venue {
    pub rowid: i64,
    pub id: String,
    pub owner: String,
    pub name: String,
    pub city: Option<String>,
    pub price_per_hour: String,
    pub active: bool,
    pub open_today: bool,
    pub closed_reason: Option<String>,
    pub created_at: i64,
}

#[derive(Queryable, Insertable)]
#[diesel(table_name = venue_day_availability)]
pub struct VenueDayAvailability {
    pub venue_rowid: i64,
    pub day_of_week: i16,
    pub is_open: bool,
}

#[derive(Insertable)]
#[diesel(table_name = venue_closure)]
pub struct NewVenueClosure<'a> {
    pub id: &'a str,
    pub venue_rowid: i64,
    pub start_date: String,
    pub end_date: String,
    pub reason: &'a str,
}

#[derive(Queryable)]
pub struct VenueClosure {
    pub rowid: i64,
    pub id: String,
    pub venue_rowid: i64,
    pub start_date: String,
    pub end_date: String,
    pub reason: String,
}

#[derive(Queryable, Insertable)]
#[diesel(table_name = venue_slot_override)]
pub struct VenueSlotOverride {
    pub venue_rowid: i64,
    pub start_time: String,
    pub end_time: String,
    pub is_enabled: bool,
}

#[derive(Queryable, Insertable)]
#[diesel(table_name = venue_emergency_block)]
pub struct VenueEmergencyBlock {
    pub venue_rowid: i64,
    pub is_blocked: bool,
    pub reason: Option<String>,
    pub updated_at: i64,
}

#[derive(Insertable)]
#[diesel(table_name = venue_activity)]
pub struct NewVenueActivity<'a> {
    pub venue_rowid: i64,
    pub kind: i16,
    pub description: &'a str,
    pub created_at: i64,
    pub created_by: Option<&'a str>,
}

#[derive(Queryable)]
pub struct VenueActivity {
    pub rowid: i64,
    pub venue_rowid: i64,
    pub kind: i16,
    pub description: String,
    pub created_at: i64,
    pub created_by: Option<String>,
}

#[derive(Insertable)]
#[diesel(table_name = reservation)]
pub struct NewReservation<'a> {
    pub id: &'a str,
    pub customer: &'a str,
    pub venue_rowid: i64,
    pub booking_date: String,
    pub start_time: String,
    pub end_time: String,
    pub status: i16,
    pub payment_status: i16,
    pub expires_at: Option<i64>,
    pub base_amount: String,
    pub convenience_fee: String,
    pub total_amount: String,
    pub commission_percentage: String,
    pub platform_commission: String,
    pub owner_earnings: String,
    pub created_at: i64,
}

// Only the lifecycle of a reservation is mutable
#[derive(AsChangeset)]
#[diesel(table_name = reservation, treat_none_as_null = true)]
pub struct ReservationChangeset {
    pub status: i16,
    pub payment_status: i16,
    pub expires_at: Option<i64>,
    pub platform_commission: String,
    pub owner_earnings: String,
}

#[derive(Queryable)]
pub struct JoinedReservation {
    pub id: String,
    pub customer: String,
    pub booking_date: String,
    pub start_time: String,
    pub end_time: String,
    pub status: i16,
    pub payment_status: i16,
    pub expires_at: Option<i64>,
    pub base_amount: String,
    pub convenience_fee: String,
    pub total_amount: String,
    pub commission_percentage: String,
    pub platform_commission: String,
    pub owner_earnings: String,
    pub created_at: i64,
    // Joined columns
    pub venue_id: String,
}

#[derive(Queryable, Insertable)]
#[diesel(table_name = payment)]
pub struct Payment {
    pub reservation_rowid: i64,
    pub order_id: String,
    pub amount: String,
    pub currency: String,
    pub status: i16,
    pub transaction_id: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}
