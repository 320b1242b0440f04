use super::*;

impl ReservationRepo for DbConnection<'_> {
    fn create_reservation(&self, reservation: &Reservation) -> Result<()> {
        create_reservation(&mut self.conn.borrow_mut(), reservation)
    }
    fn get_reservation(&self, id: &str) -> Result<Reservation> {
        get_reservation(&mut self.conn.borrow_mut(), id)
    }
    fn find_active_reservation(&self, slot: &SlotKey) -> Result<Option<Reservation>> {
        find_active_reservation(&mut self.conn.borrow_mut(), slot)
    }
    fn active_reservation_starts(&self, venue_id: &str, date: Date) -> Result<Vec<Time>> {
        active_reservation_starts(&mut self.conn.borrow_mut(), venue_id, date)
    }
    fn update_pending_reservation(&self, reservation: &Reservation) -> Result<usize> {
        update_pending_reservation(&mut self.conn.borrow_mut(), reservation)
    }
    fn find_expired_pending_reservations(&self, now: Timestamp) -> Result<Vec<Reservation>> {
        find_expired_pending_reservations(&mut self.conn.borrow_mut(), now)
    }
    fn recent_reservations_of_customer(
        &self,
        customer: &Id,
        pagination: &Pagination,
    ) -> Result<Vec<Reservation>> {
        recent_reservations_of_customer(&mut self.conn.borrow_mut(), customer, pagination)
    }
}

impl ReservationRepo for DbReadOnly<'_> {
    fn create_reservation(&self, _reservation: &Reservation) -> Result<()> {
        unreachable!();
    }
    fn get_reservation(&self, id: &str) -> Result<Reservation> {
        get_reservation(&mut self.conn.borrow_mut(), id)
    }
    fn find_active_reservation(&self, slot: &SlotKey) -> Result<Option<Reservation>> {
        find_active_reservation(&mut self.conn.borrow_mut(), slot)
    }
    fn active_reservation_starts(&self, venue_id: &str, date: Date) -> Result<Vec<Time>> {
        active_reservation_starts(&mut self.conn.borrow_mut(), venue_id, date)
    }
    fn update_pending_reservation(&self, _reservation: &Reservation) -> Result<usize> {
        unreachable!();
    }
    fn find_expired_pending_reservations(&self, now: Timestamp) -> Result<Vec<Reservation>> {
        find_expired_pending_reservations(&mut self.conn.borrow_mut(), now)
    }
    fn recent_reservations_of_customer(
        &self,
        customer: &Id,
        pagination: &Pagination,
    ) -> Result<Vec<Reservation>> {
        recent_reservations_of_customer(&mut self.conn.borrow_mut(), customer, pagination)
    }
}

type JoinedReservationColumns = (
    schema::reservation::id,
    schema::reservation::customer,
    schema::reservation::booking_date,
    schema::reservation::start_time,
    schema::reservation::end_time,
    schema::reservation::status,
    schema::reservation::payment_status,
    schema::reservation::expires_at,
    schema::reservation::base_amount,
    schema::reservation::convenience_fee,
    schema::reservation::total_amount,
    schema::reservation::commission_percentage,
    schema::reservation::platform_commission,
    schema::reservation::owner_earnings,
    schema::reservation::created_at,
    schema::venue::id,
);

const JOINED_RESERVATION_COLUMNS: JoinedReservationColumns = (
    schema::reservation::id,
    schema::reservation::customer,
    schema::reservation::booking_date,
    schema::reservation::start_time,
    schema::reservation::end_time,
    schema::reservation::status,
    schema::reservation::payment_status,
    schema::reservation::expires_at,
    schema::reservation::base_amount,
    schema::reservation::convenience_fee,
    schema::reservation::total_amount,
    schema::reservation::commission_percentage,
    schema::reservation::platform_commission,
    schema::reservation::owner_earnings,
    schema::reservation::created_at,
    schema::venue::id,
);

const ACTIVE_STATUS_PRIMITIVES: [StatusPrimitive; 2] = [
    ReservationStatus::ACTIVE[0] as StatusPrimitive,
    ReservationStatus::ACTIVE[1] as StatusPrimitive,
];

fn load_reservation(row: models::JoinedReservation) -> Result<Reservation> {
    let models::JoinedReservation {
        id,
        customer,
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
        venue_id,
    } = row;
    Ok(Reservation {
        id: id.into(),
        customer: customer.into(),
        venue_id: venue_id.into(),
        booking_date: load_date(&booking_date)?,
        start_time: load_time(&start_time)?,
        end_time: load_time(&end_time)?,
        status: load_reservation_status(status)?,
        payment_status: load_payment_status(payment_status)?,
        expires_at: expires_at.map(load_timestamp).transpose()?,
        base_amount: load_amount(&base_amount)?,
        convenience_fee: load_amount(&convenience_fee)?,
        total_amount: load_amount(&total_amount)?,
        commission_percentage: load_amount(&commission_percentage)?,
        platform_commission: load_amount(&platform_commission)?,
        owner_earnings: load_amount(&owner_earnings)?,
        created_at: load_timestamp(created_at)?,
    })
}

fn create_reservation(conn: &mut SqliteConnection, reservation: &Reservation) -> Result<()> {
    let model = models::NewReservation {
        id: reservation.id.as_str(),
        customer: reservation.customer.as_str(),
        venue_rowid: resolve_venue_rowid(conn, reservation.venue_id.as_str())?,
        booking_date: date_to_sql(reservation.booking_date),
        start_time: time_to_sql(reservation.start_time),
        end_time: time_to_sql(reservation.end_time),
        status: reservation.status.into(),
        payment_status: reservation.payment_status.into(),
        expires_at: reservation.expires_at.map(Timestamp::as_millis),
        base_amount: amount_to_sql(reservation.base_amount),
        convenience_fee: amount_to_sql(reservation.convenience_fee),
        total_amount: amount_to_sql(reservation.total_amount),
        commission_percentage: amount_to_sql(reservation.commission_percentage),
        platform_commission: amount_to_sql(reservation.platform_commission),
        owner_earnings: amount_to_sql(reservation.owner_earnings),
        created_at: reservation.created_at.as_millis(),
    };
    diesel::insert_into(schema::reservation::table)
        .values(&model)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn get_reservation(conn: &mut SqliteConnection, id: &str) -> Result<Reservation> {
    use schema::reservation::dsl;
    let row = schema::reservation::table
        .inner_join(schema::venue::table)
        .select(JOINED_RESERVATION_COLUMNS)
        .filter(dsl::id.eq(id))
        .first::<models::JoinedReservation>(conn)
        .map_err(from_diesel_err)?;
    load_reservation(row)
}

fn find_active_reservation(
    conn: &mut SqliteConnection,
    slot: &SlotKey,
) -> Result<Option<Reservation>> {
    use schema::{reservation::dsl, venue::dsl as v_dsl};
    schema::reservation::table
        .inner_join(schema::venue::table)
        .select(JOINED_RESERVATION_COLUMNS)
        .filter(v_dsl::id.eq(slot.venue_id.as_str()))
        .filter(dsl::booking_date.eq(date_to_sql(slot.date)))
        .filter(dsl::start_time.eq(time_to_sql(slot.start_time)))
        .filter(dsl::status.eq_any(ACTIVE_STATUS_PRIMITIVES))
        .first::<models::JoinedReservation>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(load_reservation)
        .transpose()
}

fn active_reservation_starts(
    conn: &mut SqliteConnection,
    venue_id: &str,
    date: Date,
) -> Result<Vec<Time>> {
    use schema::{reservation::dsl, venue::dsl as v_dsl};
    schema::reservation::table
        .inner_join(schema::venue::table)
        .select(dsl::start_time)
        .filter(v_dsl::id.eq(venue_id))
        .filter(dsl::booking_date.eq(date_to_sql(date)))
        .filter(dsl::status.eq_any(ACTIVE_STATUS_PRIMITIVES))
        .order_by(dsl::start_time)
        .load::<String>(conn)
        .map_err(from_diesel_err)?
        .iter()
        .map(|start_time| load_time(start_time))
        .collect()
}

fn update_pending_reservation(
    conn: &mut SqliteConnection,
    reservation: &Reservation,
) -> Result<usize> {
    use schema::reservation::dsl;
    let changeset = models::ReservationChangeset {
        status: reservation.status.into(),
        payment_status: reservation.payment_status.into(),
        expires_at: reservation.expires_at.map(Timestamp::as_millis),
        platform_commission: amount_to_sql(reservation.platform_commission),
        owner_earnings: amount_to_sql(reservation.owner_earnings),
    };
    let pending = StatusPrimitive::from(ReservationStatus::Pending);
    diesel::update(
        schema::reservation::table
            .filter(dsl::id.eq(reservation.id.as_str()))
            .filter(dsl::status.eq(pending)),
    )
    .set(&changeset)
    .execute(conn)
    .map_err(from_diesel_err)
}

fn find_expired_pending_reservations(
    conn: &mut SqliteConnection,
    now: Timestamp,
) -> Result<Vec<Reservation>> {
    use schema::reservation::dsl;
    let pending = StatusPrimitive::from(ReservationStatus::Pending);
    schema::reservation::table
        .inner_join(schema::venue::table)
        .select(JOINED_RESERVATION_COLUMNS)
        .filter(dsl::status.eq(pending))
        .filter(dsl::expires_at.lt(now.as_millis()))
        .order_by(dsl::expires_at)
        .load::<models::JoinedReservation>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_reservation)
        .collect()
}

fn recent_reservations_of_customer(
    conn: &mut SqliteConnection,
    customer: &Id,
    pagination: &Pagination,
) -> Result<Vec<Reservation>> {
    use schema::reservation::dsl;
    let mut query = schema::reservation::table
        .inner_join(schema::venue::table)
        .select(JOINED_RESERVATION_COLUMNS)
        .filter(dsl::customer.eq(customer.as_str()))
        .order_by(dsl::created_at.desc())
        .then_order_by(dsl::rowid.desc()) // disambiguation of equal time stamps
        .into_boxed();

    // Pagination
    let offset = pagination.offset.unwrap_or(0) as i64;
    // SQLite does not support an OFFSET without a LIMIT
    if let Some(limit) = pagination.limit {
        query = query.limit(limit as i64);
        if offset > 0 {
            query = query.offset(offset);
        }
    } else if offset > 0 {
        query = query.limit(i64::MAX);
        query = query.offset(offset);
    }

    query
        .load::<models::JoinedReservation>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_reservation)
        .collect()
}
