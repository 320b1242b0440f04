use super::*;
use turfbook_entities as e;

use e::time::{format_date, format_time};

impl From<e::venue::Venue> for Venue {
    fn from(from: e::venue::Venue) -> Self {
        let e::venue::Venue {
            id,
            owner,
            name,
            city,
            price_per_hour,
            active,
            open_today,
            closed_reason,
            created_at,
        } = from;
        Self {
            id: id.into(),
            owner: owner.into(),
            name,
            city,
            price_per_hour: price_per_hour.to_string(),
            active,
            open_today,
            closed_reason,
            created_at: created_at.as_millis(),
        }
    }
}

impl From<e::slot::SlotStatus> for SlotStatus {
    fn from(from: e::slot::SlotStatus) -> Self {
        use e::slot::SlotStatus as E;
        match from {
            E::Available => Self::Available,
            E::Booked => Self::Booked,
            E::Unavailable => Self::Unavailable,
        }
    }
}

impl From<e::slot::Slot> for Slot {
    fn from(from: e::slot::Slot) -> Self {
        let status = from.status().into();
        let e::slot::Slot {
            start_time,
            end_time,
            is_enabled,
            is_booked,
        } = from;
        Self {
            start_time: format_time(start_time),
            end_time: format_time(end_time),
            is_enabled,
            is_booked,
            status,
        }
    }
}

impl From<e::reservation::ReservationStatus> for ReservationStatus {
    fn from(from: e::reservation::ReservationStatus) -> Self {
        use e::reservation::ReservationStatus as E;
        match from {
            E::Pending => Self::Pending,
            E::Confirmed => Self::Confirmed,
            E::Cancelled => Self::Cancelled,
            E::Completed => Self::Completed,
        }
    }
}

impl From<ReservationStatus> for e::reservation::ReservationStatus {
    fn from(from: ReservationStatus) -> Self {
        use ReservationStatus as B;
        match from {
            B::Pending => Self::Pending,
            B::Confirmed => Self::Confirmed,
            B::Cancelled => Self::Cancelled,
            B::Completed => Self::Completed,
        }
    }
}

impl From<e::reservation::PaymentStatus> for PaymentStatus {
    fn from(from: e::reservation::PaymentStatus) -> Self {
        use e::reservation::PaymentStatus as E;
        match from {
            E::Initiated => Self::Initiated,
            E::Success => Self::Success,
            E::Failed => Self::Failed,
            E::Refunded => Self::Refunded,
        }
    }
}

impl From<PaymentStatus> for e::reservation::PaymentStatus {
    fn from(from: PaymentStatus) -> Self {
        use PaymentStatus as B;
        match from {
            B::Initiated => Self::Initiated,
            B::Success => Self::Success,
            B::Failed => Self::Failed,
            B::Refunded => Self::Refunded,
        }
    }
}

impl From<e::reservation::Reservation> for Reservation {
    fn from(from: e::reservation::Reservation) -> Self {
        let e::reservation::Reservation {
            id,
            customer,
            venue_id,
            booking_date,
            start_time,
            end_time,
            status,
            payment_status,
            expires_at,
            base_amount,
            convenience_fee,
            total_amount,
            commission_percentage,
            platform_commission,
            owner_earnings,
            created_at,
        } = from;
        Self {
            id: id.into(),
            customer: customer.into(),
            venue_id: venue_id.into(),
            booking_date: format_date(booking_date),
            start_time: format_time(start_time),
            end_time: format_time(end_time),
            status: status.into(),
            payment_status: payment_status.into(),
            expires_at: expires_at.map(e::time::Timestamp::as_millis),
            base_amount: base_amount.to_string(),
            convenience_fee: convenience_fee.to_string(),
            total_amount: total_amount.to_string(),
            commission_percentage: commission_percentage.to_string(),
            platform_commission: platform_commission.to_string(),
            owner_earnings: owner_earnings.to_string(),
            created_at: created_at.as_millis(),
        }
    }
}

impl From<e::payment::Payment> for PaymentOrder {
    fn from(from: e::payment::Payment) -> Self {
        let e::payment::Payment {
            order_id,
            amount,
            currency,
            status,
            ..
        } = from;
        Self {
            order_id,
            amount: amount.to_string(),
            currency,
            status: status.into(),
        }
    }
}

impl From<PaymentOutcome> for e::payment::PaymentOutcome {
    fn from(from: PaymentOutcome) -> Self {
        match from {
            PaymentOutcome::Success => Self::Success,
            PaymentOutcome::Failure => Self::Failure,
        }
    }
}

impl From<e::availability::EmergencyBlock> for EmergencyBlock {
    fn from(from: e::availability::EmergencyBlock) -> Self {
        let e::availability::EmergencyBlock {
            is_blocked,
            reason,
            updated_at,
        } = from;
        Self {
            is_blocked,
            reason,
            updated_at: updated_at.as_millis(),
        }
    }
}

impl From<e::availability::DayAvailability> for DayAvailability {
    fn from(from: e::availability::DayAvailability) -> Self {
        let e::availability::DayAvailability {
            day_of_week,
            is_open,
        } = from;
        Self {
            day_of_week,
            is_open,
        }
    }
}

impl From<e::availability::Closure> for Closure {
    fn from(from: e::availability::Closure) -> Self {
        let e::availability::Closure {
            id,
            start_date,
            end_date,
            reason,
        } = from;
        Self {
            id: id.into(),
            start_date: format_date(start_date),
            end_date: format_date(end_date),
            reason,
        }
    }
}

impl From<e::availability::SlotOverride> for SlotOverride {
    fn from(from: e::availability::SlotOverride) -> Self {
        let e::availability::SlotOverride {
            start_time,
            end_time,
            is_enabled,
        } = from;
        Self {
            start_time: format_time(start_time),
            end_time: format_time(end_time),
            is_enabled,
        }
    }
}

impl From<e::activity::VenueActivity> for VenueActivity {
    fn from(from: e::activity::VenueActivity) -> Self {
        let e::activity::VenueActivity {
            venue_id: _,
            kind,
            description,
            at,
            by,
        } = from;
        Self {
            kind: kind.to_string(),
            description,
            at: at.as_millis(),
            by: by.map(Into::into),
        }
    }
}
