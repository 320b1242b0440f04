use super::*;

impl VenueActivityRepo for DbConnection<'_> {
    fn log_venue_activity(&self, activity: &VenueActivity) -> Result<()> {
        log_venue_activity(&mut self.conn.borrow_mut(), activity)
    }
    fn recent_venue_activities(
        &self,
        venue_id: &str,
        pagination: &Pagination,
    ) -> Result<Vec<VenueActivity>> {
        recent_venue_activities(&mut self.conn.borrow_mut(), venue_id, pagination)
    }
}

impl VenueActivityRepo for DbReadOnly<'_> {
    fn log_venue_activity(&self, _activity: &VenueActivity) -> Result<()> {
        unreachable!();
    }
    fn recent_venue_activities(
        &self,
        venue_id: &str,
        pagination: &Pagination,
    ) -> Result<Vec<VenueActivity>> {
        recent_venue_activities(&mut self.conn.borrow_mut(), venue_id, pagination)
    }
}

fn log_venue_activity(conn: &mut SqliteConnection, activity: &VenueActivity) -> Result<()> {
    let model = models::NewVenueActivity {
        venue_rowid: resolve_venue_rowid(conn, activity.venue_id.as_str())?,
        kind: activity.kind.into(),
        description: &activity.description,
        created_at: activity.at.as_millis(),
        created_by: activity.by.as_ref().map(Id::as_str),
    };
    diesel::insert_into(schema::venue_activity::table)
        .values(&model)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn recent_venue_activities(
    conn: &mut SqliteConnection,
    venue_id: &str,
    pagination: &Pagination,
) -> Result<Vec<VenueActivity>> {
    use schema::venue_activity::dsl;
    let venue_rowid = resolve_venue_rowid(conn, venue_id)?;
    let mut query = schema::venue_activity::table
        .filter(dsl::venue_rowid.eq(venue_rowid))
        .order_by(dsl::created_at.desc())
        .then_order_by(dsl::rowid.desc()) // disambiguation of equal time stamps
        .into_boxed();

    // Pagination
    let offset = pagination.offset.unwrap_or(0) as i64;
    // SQLite does not support an OFFSET without a LIMIT
    // <https://www.sqlite.org/lang_select.html>
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
        .load::<models::VenueActivity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(|row| -> Result<_> {
            Ok(VenueActivity {
                venue_id: venue_id.into(),
                kind: load_activity_kind(row.kind)?,
                description: row.description,
                at: load_timestamp(row.created_at)?,
                by: row.created_by.map(Into::into),
            })
        })
        .collect()
}
