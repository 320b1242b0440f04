use super::*;

impl PaymentRepo for DbConnection<'_> {
    fn replace_payment(&self, payment: &Payment) -> Result<()> {
        replace_payment(&mut self.conn.borrow_mut(), payment)
    }
    fn get_payment_of_reservation(&self, reservation_id: &str) -> Result<Payment> {
        get_payment_of_reservation(&mut self.conn.borrow_mut(), reservation_id)
    }
}

impl PaymentRepo for DbReadOnly<'_> {
    fn replace_payment(&self, _payment: &Payment) -> Result<()> {
        unreachable!();
    }
    fn get_payment_of_reservation(&self, reservation_id: &str) -> Result<Payment> {
        get_payment_of_reservation(&mut self.conn.borrow_mut(), reservation_id)
    }
}

fn replace_payment(conn: &mut SqliteConnection, payment: &Payment) -> Result<()> {
    let model = models::Payment {
        reservation_rowid: resolve_reservation_rowid(conn, payment.reservation_id.as_str())?,
        order_id: payment.order_id.clone(),
        amount: amount_to_sql(payment.amount),
        currency: payment.currency.clone(),
        status: payment.status.into(),
        transaction_id: payment.transaction_id.clone(),
        created_at: payment.created_at.as_millis(),
        updated_at: payment.updated_at.as_millis(),
    };
    diesel::replace_into(schema::payment::table)
        .values(&model)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn get_payment_of_reservation(conn: &mut SqliteConnection, reservation_id: &str) -> Result<Payment> {
    use schema::payment::dsl;
    let reservation_rowid = resolve_reservation_rowid(conn, reservation_id)?;
    let models::Payment {
        reservation_rowid: _,
        order_id,
        amount,
        currency,
        status,
        transaction_id,
        created_at,
        updated_at,
    } = schema::payment::table
        .filter(dsl::reservation_rowid.eq(reservation_rowid))
        .first::<models::Payment>(conn)
        .map_err(from_diesel_err)?;
    Ok(Payment {
        reservation_id: reservation_id.into(),
        order_id,
        amount: load_amount(&amount)?,
        currency,
        status: load_payment_status(status)?,
        transaction_id,
        created_at: load_timestamp(created_at)?,
        updated_at: load_timestamp(updated_at)?,
    })
}
