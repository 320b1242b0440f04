use super::*;

#[allow(clippy::too_many_arguments)]
#[post(
    "/venues/<id>/reservations",
    format = "application/json",
    data = "<new_reservation>"
)]
pub fn post_reservation(
    db: sqlite::Connections,
    auth: Auth,
    cfg: &State<Cfg>,
    slot_locks: &State<SlotLocks>,
    settings: &State<SharedSettings>,
    payment_gw: &State<PaymentGw>,
    id: String,
    new_reservation: Json<json::NewReservation>,
) -> Result<json::BookedSlot> {
    let customer = auth.account_id()?.clone();
    let json::NewReservation { date, start_time } = new_reservation.into_inner();
    let booked = flows::book_slot(
        &db,
        slot_locks,
        &cfg.booking_policy,
        settings.inner(),
        &*payment_gw.0,
        &cfg.currency,
        customer,
        &id,
        &date,
        &start_time,
    )?;
    Ok(Json(to_json::booked_slot(booked)))
}

#[get("/reservations?<offset>&<limit>")]
pub fn get_reservations(
    db: sqlite::Connections,
    auth: Auth,
    offset: Option<u64>,
    limit: Option<u64>,
) -> Result<Vec<json::Reservation>> {
    let pagination = Pagination { offset, limit };
    let reservations =
        usecases::recent_reservations_of_customer(&db.shared()?, auth.account_id()?, &pagination)?;
    Ok(Json(reservations.into_iter().map(Into::into).collect()))
}

#[get("/reservations/<id>")]
pub fn get_reservation(
    db: sqlite::Connections,
    auth: Auth,
    id: String,
) -> Result<json::Reservation> {
    let reservation = usecases::get_reservation(&db.shared()?, &id, auth.account_id()?)?;
    Ok(Json(reservation.into()))
}

#[post("/reservations/<id>/payment-order")]
pub fn post_payment_order(
    db: sqlite::Connections,
    auth: Auth,
    cfg: &State<Cfg>,
    slot_locks: &State<SlotLocks>,
    payment_gw: &State<PaymentGw>,
    id: String,
) -> Result<json::PaymentOrder> {
    let payment = flows::create_payment_order(
        &db,
        slot_locks,
        &*payment_gw.0,
        &cfg.currency,
        &id,
        auth.account_id()?,
    )?;
    Ok(Json(payment.into()))
}
