///////////////////////////////////////////////////////////////////////
// Venues
///////////////////////////////////////////////////////////////////////

table! {
    venue (rowid) {
        rowid -> BigInt,
        id -> Text,
        owner -> Text,
        name -> Text,
        city -> Nullable<Text>,
        price_per_hour -> Text,
        active -> Bool,
        open_today -> Bool,
        closed_reason -> Nullable<Text>,
        created_at -> BigInt,
    }
}

table! {
    venue_day_availability (venue_rowid, day_of_week) {
        venue_rowid -> BigInt,
        day_of_week -> SmallInt,
        is_open -> Bool,
    }
}

joinable!(venue_day_availability -> venue (venue_rowid));

table! {
    venue_closure (rowid) {
        rowid -> BigInt,
        id -> Text,
        venue_rowid -> BigInt,
        start_date -> Text,
        end_date -> Text,
        reason -> Text,
    }
}

joinable!(venue_closure -> venue (venue_rowid));

table! {
    venue_slot_override (venue_rowid, start_time, end_time) {
        venue_rowid -> BigInt,
        start_time -> Text,
        end_time -> Text,
        is_enabled -> Bool,
    }
}

joinable!(venue_slot_override -> venue (venue_rowid));

table! {
    venue_emergency_block (venue_rowid) {
        venue_rowid -> BigInt,
        is_blocked -> Bool,
        reason -> Nullable<Text>,
        updated_at -> BigInt,
    }
}

joinable!(venue_emergency_block -> venue (venue_rowid));

table! {
    venue_activity (rowid) {
        rowid -> BigInt,
        venue_rowid -> BigInt,
        kind -> SmallInt,
        description -> Text,
        created_at -> BigInt,
        created_by -> Nullable<Text>,
    }
}

joinable!(venue_activity -> venue (venue_rowid));

///////////////////////////////////////////////////////////////////////
// Reservations
///////////////////////////////////////////////////////////////////////

table! {
    reservation (rowid) {
        rowid -> BigInt,
        id -> Text,
        customer -> Text,
        venue_rowid -> BigInt,
        booking_date -> Text,
        start_time -> Text,
        end_time -> Text,
        status -> SmallInt,
        payment_status -> SmallInt,
        expires_at -> Nullable<BigInt>,
        base_amount -> Text,
        convenience_fee -> Text,
        total_amount -> Text,
        commission_percentage -> Text,
        platform_commission -> Text,
        owner_earnings -> Text,
        created_at -> BigInt,
    }
}

joinable!(reservation -> venue (venue_rowid));

table! {
    payment (reservation_rowid) {
        reservation_rowid -> BigInt,
        order_id -> Text,
        amount -> Text,
        currency -> Text,
        status -> SmallInt,
        transaction_id -> Nullable<Text>,
        created_at -> BigInt,
        updated_at -> BigInt,
    }
}

joinable!(payment -> reservation (reservation_rowid));

allow_tables_to_appear_in_same_query!(
    venue,
    venue_day_availability,
    venue_closure,
    venue_slot_override,
    venue_emergency_block,
    venue_activity,
    reservation,
    payment,
);
