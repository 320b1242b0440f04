//! Data transfer objects of the JSON API.
//!
//! Dates are formatted as `YYYY-MM-DD`, times of day as `HH:MM`,
//! timestamps as unix milliseconds and amounts as decimal strings.

use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Venue {
    pub id             : String,
    pub owner          : String,
    pub name           : String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city           : Option<String>,
    pub price_per_hour : String,
    pub active         : bool,
    pub open_today     : bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closed_reason  : Option<String>,
    pub created_at     : i64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct NewVenue {
    pub name: String,
    pub city: Option<String>,
    pub price_per_hour: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct VenueAvailability {
    pub venue_id: String,
    pub date: String,
    pub is_open: bool,
    pub reason: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq, Eq))]
#[serde(rename_all = "lowercase")]
pub enum SlotStatus {
    Available,
    Booked,
    Unavailable,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Slot {
    pub start_time: String,
    pub end_time: String,
    pub is_enabled: bool,
    pub is_booked: bool,
    pub status: SlotStatus,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct SlotsOfDay {
    pub venue_id: String,
    pub date: String,
    pub is_open: bool,
    pub reason: String,
    pub slots: Vec<Slot>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct NewReservation {
    pub date: String,
    pub start_time: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq, Eq))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReservationStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq, Eq))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Initiated,
    Success,
    Failed,
    Refunded,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Reservation {
    pub id                    : String,
    pub customer              : String,
    pub venue_id              : String,
    pub booking_date          : String,
    pub start_time            : String,
    pub end_time              : String,
    pub status                : ReservationStatus,
    pub payment_status        : PaymentStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at            : Option<i64>,
    pub base_amount           : String,
    pub convenience_fee       : String,
    pub total_amount          : String,
    pub commission_percentage : String,
    pub platform_commission   : String,
    pub owner_earnings        : String,
    pub created_at            : i64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct PaymentOrder {
    pub order_id: String,
    pub amount: String,
    pub currency: String,
    pub status: PaymentStatus,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct BookedSlot {
    pub reservation: Reservation,
    /// Missing if the payment gateway has not been reachable.
    pub payment_order: Option<PaymentOrder>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq, Eq))]
#[serde(rename_all = "lowercase")]
pub enum PaymentOutcome {
    Success,
    Failure,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct PaymentCallback {
    pub reservation_id: String,
    pub order_id: String,
    pub payment_id: Option<String>,
    pub signature: Option<String>,
    pub outcome: PaymentOutcome,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct VenueActive {
    pub active: bool,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct OpenToday {
    pub open: bool,
    pub reason: Option<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct VenuePrice {
    pub price_per_hour: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct SetEmergencyBlock {
    pub is_blocked: bool,
    pub reason: Option<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct EmergencyBlock {
    pub is_blocked: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    pub updated_at: i64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq))]
pub struct DayAvailability {
    /// 0 = Sunday, ..., 6 = Saturday
    pub day_of_week: u8,
    pub is_open: bool,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct SetDayAvailability {
    pub is_open: bool,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct NewClosure {
    pub start_date: String,
    pub end_date: String,
    pub reason: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Closure {
    pub id: String,
    pub start_date: String,
    pub end_date: String,
    pub reason: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct SetSlotOverride {
    pub start_time: String,
    pub is_enabled: bool,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct SlotOverride {
    pub start_time: String,
    pub end_time: String,
    pub is_enabled: bool,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct VenueActivity {
    pub kind: String,
    pub description: String,
    pub at: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub by: Option<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct Error {
    /// The HTTP status code of the response
    pub http_status: u16,
    pub message: String,
}
