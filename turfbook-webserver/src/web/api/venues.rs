use super::*;

#[post("/venues", format = "application/json", data = "<new_venue>")]
pub fn post_venue(
    db: sqlite::Connections,
    auth: Auth,
    new_venue: Json<json::NewVenue>,
) -> Result<json::Venue> {
    let owner = auth.account_id()?.clone();
    let new_venue = from_json::try_new_venue(owner, new_venue.into_inner())?;
    let venue = flows::register_venue(&db, new_venue)?;
    Ok(Json(venue.into()))
}

#[get("/venues?<city>&<offset>&<limit>")]
pub fn get_venues(
    db: sqlite::Connections,
    city: Option<String>,
    offset: Option<u64>,
    limit: Option<u64>,
) -> Result<Vec<json::Venue>> {
    let pagination = Pagination { offset, limit };
    let venues = usecases::find_active_venues(&db.shared()?, city.as_deref(), &pagination)?;
    Ok(Json(venues.into_iter().map(Into::into).collect()))
}

#[get("/venues/<id>")]
pub fn get_venue(db: sqlite::Connections, id: String) -> Result<json::Venue> {
    let venue = db.shared()?.get_venue(&id)?;
    Ok(Json(venue.into()))
}

fn requested_date(cfg: &Cfg, date: Option<&str>) -> result::Result<(time::Date, time::Date), ApiError> {
    let today = cfg.booking_policy.today(Timestamp::now());
    let date = match date {
        Some(date) => from_json::date(date)?,
        None => today,
    };
    Ok((date, today))
}

#[get("/venues/<id>/availability?<date>")]
pub fn get_venue_availability(
    db: sqlite::Connections,
    cfg: &State<Cfg>,
    id: String,
    date: Option<String>,
) -> Result<json::VenueAvailability> {
    let (date, today) = requested_date(cfg, date.as_deref())?;
    let availability = usecases::query_venue_availability(&db.shared()?, &id, date, today)?;
    Ok(Json(to_json::venue_availability(&id, date, &availability)))
}

#[get("/venues/<id>/slots?<date>")]
pub fn get_venue_slots(
    db: sqlite::Connections,
    cfg: &State<Cfg>,
    id: String,
    date: Option<String>,
) -> Result<json::SlotsOfDay> {
    let (date, today) = requested_date(cfg, date.as_deref())?;
    let slots = usecases::query_slots(&db.shared()?, &cfg.booking_policy, &id, date, today)?;
    Ok(Json(to_json::slots_of_day(slots)))
}
