use super::*;

impl VenueRepo for DbConnection<'_> {
    fn create_venue(&self, venue: &Venue) -> Result<()> {
        create_venue(&mut self.conn.borrow_mut(), venue)
    }
    fn update_venue(&self, venue: &Venue) -> Result<()> {
        update_venue(&mut self.conn.borrow_mut(), venue)
    }
    fn get_venue(&self, id: &str) -> Result<Venue> {
        get_venue(&mut self.conn.borrow_mut(), id)
    }
    fn find_active_venues(
        &self,
        city: Option<&str>,
        pagination: &Pagination,
    ) -> Result<Vec<Venue>> {
        find_active_venues(&mut self.conn.borrow_mut(), city, pagination)
    }
}

impl VenueRepo for DbReadOnly<'_> {
    fn create_venue(&self, _venue: &Venue) -> Result<()> {
        unreachable!();
    }
    fn update_venue(&self, _venue: &Venue) -> Result<()> {
        unreachable!();
    }
    fn get_venue(&self, id: &str) -> Result<Venue> {
        get_venue(&mut self.conn.borrow_mut(), id)
    }
    fn find_active_venues(
        &self,
        city: Option<&str>,
        pagination: &Pagination,
    ) -> Result<Vec<Venue>> {
        find_active_venues(&mut self.conn.borrow_mut(), city, pagination)
    }
}

fn create_venue(conn: &mut SqliteConnection, venue: &Venue) -> Result<()> {
    let new_venue = models::NewVenue {
        id: venue.id.as_str(),
        owner: venue.owner.as_str(),
        name: &venue.name,
        city: venue.city.as_deref(),
        price_per_hour: amount_to_sql(venue.price_per_hour),
        active: venue.active,
        open_today: venue.open_today,
        closed_reason: venue.closed_reason.as_deref(),
        created_at: venue.created_at.as_millis(),
    };
    diesel::insert_into(schema::venue::table)
        .values(&new_venue)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn update_venue(conn: &mut SqliteConnection, venue: &Venue) -> Result<()> {
    use schema::venue::dsl;
    let changeset = models::VenueChangeset {
        name: &venue.name,
        city: venue.city.as_deref(),
        price_per_hour: amount_to_sql(venue.price_per_hour),
        active: venue.active,
        open_today: venue.open_today,
        closed_reason: venue.closed_reason.as_deref(),
    };
    let count = diesel::update(schema::venue::table.filter(dsl::id.eq(venue.id.as_str())))
        .set(&changeset)
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    debug_assert_eq!(1, count);
    Ok(())
}

fn get_venue(conn: &mut SqliteConnection, id: &str) -> Result<Venue> {
    use schema::venue::dsl;
    let row = schema::venue::table
        .filter(dsl::id.eq(id))
        .first::<models::Venue>(conn)
        .map_err(from_diesel_err)?;
    load_venue(row)
}

// Escapes the wildcards of a LIKE pattern with a backslash.
fn like_substring_pattern(text: &str) -> String {
    let mut pattern = String::with_capacity(text.len() + 2);
    pattern.push('%');
    for c in text.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

fn find_active_venues(
    conn: &mut SqliteConnection,
    city: Option<&str>,
    pagination: &Pagination,
) -> Result<Vec<Venue>> {
    use schema::venue::dsl;
    let mut query = schema::venue::table
        .filter(dsl::active.eq(true))
        .order_by(dsl::name)
        .then_order_by(dsl::rowid)
        .into_boxed();

    // Case-insensitive for ASCII characters
    if let Some(city) = city {
        query = query.filter(dsl::city.like(like_substring_pattern(city)).escape('\\'));
    }

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
        .load::<models::Venue>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_venue)
        .collect()
}

fn load_venue(row: models::Venue) -> Result<Venue> {
    let models::Venue {
        rowid: _,
        id,
        owner,
        name,
        city,
        price_per_hour,
        active,
        open_today,
        closed_reason,
        created_at,
    } = row;
    Ok(Venue {
        id: id.into(),
        owner: owner.into(),
        name,
        city,
        price_per_hour: load_amount(&price_per_hour)?,
        active,
        open_today,
        closed_reason,
        created_at: load_timestamp(created_at)?,
    })
}
