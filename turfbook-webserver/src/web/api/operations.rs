use super::*;

#[put("/venues/<id>/active", format = "application/json", data = "<body>")]
pub fn put_venue_active(
    db: sqlite::Connections,
    auth: Auth,
    id: String,
    body: Json<json::VenueActive>,
) -> Result<json::Venue> {
    let venue = flows::set_venue_active(&db, &id, auth.account_id()?, body.active)?;
    Ok(Json(venue.into()))
}

#[put("/venues/<id>/today", format = "application/json", data = "<body>")]
pub fn put_venue_today(
    db: sqlite::Connections,
    auth: Auth,
    id: String,
    body: Json<json::OpenToday>,
) -> Result<json::Venue> {
    let json::OpenToday { open, reason } = body.into_inner();
    let venue = flows::set_venue_open_today(&db, &id, auth.account_id()?, open, reason)?;
    Ok(Json(venue.into()))
}

#[put("/venues/<id>/emergency-block", format = "application/json", data = "<body>")]
pub fn put_emergency_block(
    db: sqlite::Connections,
    auth: Auth,
    id: String,
    body: Json<json::SetEmergencyBlock>,
) -> Result<json::EmergencyBlock> {
    let json::SetEmergencyBlock { is_blocked, reason } = body.into_inner();
    let block = flows::set_emergency_block(&db, &id, auth.account_id()?, is_blocked, reason)?;
    Ok(Json(block.into()))
}

#[put("/venues/<id>/price", format = "application/json", data = "<body>")]
pub fn put_venue_price(
    db: sqlite::Connections,
    auth: Auth,
    id: String,
    body: Json<json::VenuePrice>,
) -> Result<json::Venue> {
    let price_per_hour = from_json::price(&body.price_per_hour)?;
    let venue = flows::update_venue_price(&db, &id, auth.account_id()?, price_per_hour)?;
    Ok(Json(venue.into()))
}

#[put("/venues/<id>/days/<weekday>", format = "application/json", data = "<body>")]
pub fn put_day_availability(
    db: sqlite::Connections,
    auth: Auth,
    id: String,
    weekday: u8,
    body: Json<json::SetDayAvailability>,
) -> Result<json::DayAvailability> {
    let day = flows::set_day_availability(&db, &id, auth.account_id()?, weekday, body.is_open)?;
    Ok(Json(day.into()))
}

#[post("/venues/<id>/closures", format = "application/json", data = "<body>")]
pub fn post_closure(
    db: sqlite::Connections,
    auth: Auth,
    id: String,
    body: Json<json::NewClosure>,
) -> Result<json::Closure> {
    let json::NewClosure {
        start_date,
        end_date,
        reason,
    } = body.into_inner();
    let start_date = from_json::date(&start_date)?;
    let end_date = from_json::date(&end_date)?;
    let closure = flows::add_closure(&db, &id, auth.account_id()?, start_date, end_date, reason)?;
    Ok(Json(closure.into()))
}

#[delete("/venues/<id>/closures/<closure_id>")]
pub fn delete_closure(
    db: sqlite::Connections,
    auth: Auth,
    id: String,
    closure_id: String,
) -> Result<()> {
    flows::remove_closure(&db, &id, auth.account_id()?, &closure_id)?;
    Ok(Json(()))
}

#[put("/venues/<id>/slot-overrides", format = "application/json", data = "<body>")]
pub fn put_slot_override(
    db: sqlite::Connections,
    auth: Auth,
    cfg: &State<Cfg>,
    id: String,
    body: Json<json::SetSlotOverride>,
) -> Result<json::SlotOverride> {
    let json::SetSlotOverride {
        start_time,
        is_enabled,
    } = body.into_inner();
    let start_time = from_json::time(&start_time)?;
    let slot_override = flows::set_slot_override(
        &db,
        &cfg.booking_policy,
        &id,
        auth.account_id()?,
        start_time,
        is_enabled,
    )?;
    Ok(Json(slot_override.into()))
}

#[get("/venues/<id>/activity?<offset>&<limit>")]
pub fn get_venue_activity(
    db: sqlite::Connections,
    auth: Auth,
    id: String,
    offset: Option<u64>,
    limit: Option<u64>,
) -> Result<Vec<json::VenueActivity>> {
    let pagination = Pagination { offset, limit };
    let activities =
        usecases::recent_venue_activities(&db.shared()?, &id, auth.account_id()?, &pagination)?;
    Ok(Json(activities.into_iter().map(Into::into).collect()))
}
