use super::*;

#[post("/payments/callback", format = "application/json", data = "<callback>")]
pub fn post_payment_callback(
    db: sqlite::Connections,
    slot_locks: &State<SlotLocks>,
    payment_gw: &State<PaymentGw>,
    callback: Json<json::PaymentCallback>,
) -> Result<json::Reservation> {
    let callback = from_json::payment_callback(callback.into_inner());
    let reservation = flows::handle_payment_callback(&db, slot_locks, &*payment_gw.0, callback)?;
    Ok(Json(reservation.into()))
}
