use super::*;

impl VenueScheduleRepo for DbConnection<'_> {
    fn load_venue_schedule(&self, venue_id: &str) -> Result<VenueSchedule> {
        load_venue_schedule(&mut self.conn.borrow_mut(), venue_id)
    }
    fn replace_day_availability(&self, venue_id: &str, day: &DayAvailability) -> Result<()> {
        replace_day_availability(&mut self.conn.borrow_mut(), venue_id, day)
    }
    fn replace_slot_override(&self, venue_id: &str, slot_override: &SlotOverride) -> Result<()> {
        replace_slot_override(&mut self.conn.borrow_mut(), venue_id, slot_override)
    }
    fn replace_emergency_block(&self, venue_id: &str, block: &EmergencyBlock) -> Result<()> {
        replace_emergency_block(&mut self.conn.borrow_mut(), venue_id, block)
    }
    fn create_closure(&self, venue_id: &str, closure: &Closure) -> Result<()> {
        create_closure(&mut self.conn.borrow_mut(), venue_id, closure)
    }
    fn delete_closure(&self, venue_id: &str, closure_id: &str) -> Result<()> {
        delete_closure(&mut self.conn.borrow_mut(), venue_id, closure_id)
    }
}

impl VenueScheduleRepo for DbReadOnly<'_> {
    fn load_venue_schedule(&self, venue_id: &str) -> Result<VenueSchedule> {
        load_venue_schedule(&mut self.conn.borrow_mut(), venue_id)
    }
    fn replace_day_availability(&self, _venue_id: &str, _day: &DayAvailability) -> Result<()> {
        unreachable!();
    }
    fn replace_slot_override(&self, _venue_id: &str, _slot_override: &SlotOverride) -> Result<()> {
        unreachable!();
    }
    fn replace_emergency_block(&self, _venue_id: &str, _block: &EmergencyBlock) -> Result<()> {
        unreachable!();
    }
    fn create_closure(&self, _venue_id: &str, _closure: &Closure) -> Result<()> {
        unreachable!();
    }
    fn delete_closure(&self, _venue_id: &str, _closure_id: &str) -> Result<()> {
        unreachable!();
    }
}

fn load_venue_schedule(conn: &mut SqliteConnection, venue_id: &str) -> Result<VenueSchedule> {
    let venue_rowid = resolve_venue_rowid(conn, venue_id)?;

    let day_availability = {
        use schema::venue_day_availability::dsl;
        schema::venue_day_availability::table
            .filter(dsl::venue_rowid.eq(venue_rowid))
            .order_by(dsl::day_of_week)
            .load::<models::VenueDayAvailability>(conn)
            .map_err(from_diesel_err)?
            .into_iter()
            .map(|row| -> Result<_> {
                let day_of_week = WeekdayIndex::try_from(row.day_of_week)
                    .map_err(|_| anyhow!("Invalid day of week: {}", row.day_of_week))?;
                Ok(DayAvailability {
                    day_of_week,
                    is_open: row.is_open,
                })
            })
            .collect::<Result<Vec<_>>>()?
    };

    let closures = {
        use schema::venue_closure::dsl;
        schema::venue_closure::table
            .filter(dsl::venue_rowid.eq(venue_rowid))
            .order_by((dsl::start_date, dsl::end_date))
            .load::<models::VenueClosure>(conn)
            .map_err(from_diesel_err)?
            .into_iter()
            .map(|row| -> Result<_> {
                Ok(Closure {
                    id: row.id.into(),
                    start_date: load_date(&row.start_date)?,
                    end_date: load_date(&row.end_date)?,
                    reason: row.reason,
                })
            })
            .collect::<Result<Vec<_>>>()?
    };

    let slot_overrides = {
        use schema::venue_slot_override::dsl;
        schema::venue_slot_override::table
            .filter(dsl::venue_rowid.eq(venue_rowid))
            .order_by(dsl::start_time)
            .load::<models::VenueSlotOverride>(conn)
            .map_err(from_diesel_err)?
            .into_iter()
            .map(|row| -> Result<_> {
                Ok(SlotOverride {
                    start_time: load_time(&row.start_time)?,
                    end_time: load_time(&row.end_time)?,
                    is_enabled: row.is_enabled,
                })
            })
            .collect::<Result<Vec<_>>>()?
    };

    let emergency_block = {
        use schema::venue_emergency_block::dsl;
        schema::venue_emergency_block::table
            .filter(dsl::venue_rowid.eq(venue_rowid))
            .first::<models::VenueEmergencyBlock>(conn)
            .optional()
            .map_err(from_diesel_err)?
            .map(|row| -> Result<_> {
                Ok(EmergencyBlock {
                    is_blocked: row.is_blocked,
                    reason: row.reason,
                    updated_at: load_timestamp(row.updated_at)?,
                })
            })
            .transpose()?
    };

    Ok(VenueSchedule {
        day_availability,
        closures,
        slot_overrides,
        emergency_block,
    })
}

fn replace_day_availability(
    conn: &mut SqliteConnection,
    venue_id: &str,
    day: &DayAvailability,
) -> Result<()> {
    let model = models::VenueDayAvailability {
        venue_rowid: resolve_venue_rowid(conn, venue_id)?,
        day_of_week: day.day_of_week.into(),
        is_open: day.is_open,
    };
    diesel::replace_into(schema::venue_day_availability::table)
        .values(&model)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn replace_slot_override(
    conn: &mut SqliteConnection,
    venue_id: &str,
    slot_override: &SlotOverride,
) -> Result<()> {
    let model = models::VenueSlotOverride {
        venue_rowid: resolve_venue_rowid(conn, venue_id)?,
        start_time: time_to_sql(slot_override.start_time),
        end_time: time_to_sql(slot_override.end_time),
        is_enabled: slot_override.is_enabled,
    };
    diesel::replace_into(schema::venue_slot_override::table)
        .values(&model)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn replace_emergency_block(
    conn: &mut SqliteConnection,
    venue_id: &str,
    block: &EmergencyBlock,
) -> Result<()> {
    let model = models::VenueEmergencyBlock {
        venue_rowid: resolve_venue_rowid(conn, venue_id)?,
        is_blocked: block.is_blocked,
        reason: block.reason.clone(),
        updated_at: block.updated_at.as_millis(),
    };
    diesel::replace_into(schema::venue_emergency_block::table)
        .values(&model)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn create_closure(conn: &mut SqliteConnection, venue_id: &str, closure: &Closure) -> Result<()> {
    let model = models::NewVenueClosure {
        id: closure.id.as_str(),
        venue_rowid: resolve_venue_rowid(conn, venue_id)?,
        start_date: date_to_sql(closure.start_date),
        end_date: date_to_sql(closure.end_date),
        reason: &closure.reason,
    };
    diesel::insert_into(schema::venue_closure::table)
        .values(&model)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn delete_closure(conn: &mut SqliteConnection, venue_id: &str, closure_id: &str) -> Result<()> {
    use schema::venue_closure::dsl;
    let venue_rowid = resolve_venue_rowid(conn, venue_id)?;
    let count = diesel::delete(
        schema::venue_closure::table
            .filter(dsl::venue_rowid.eq(venue_rowid))
            .filter(dsl::id.eq(closure_id)),
    )
    .execute(conn)
    .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}
