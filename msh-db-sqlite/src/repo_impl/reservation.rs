use super::*;

impl<'a> ReservationRepo for DbReadOnly<'a> {
    fn create_reservation(&self, _: &Reservation) -> Result<()> {
        Err(read_only_violation())
    }
    fn update_reservation(&self, _: &Reservation) -> Result<()> {
        Err(read_only_violation())
    }

    fn get_reservation(&self, id: &str) -> Result<Reservation> {
        get_reservation(&mut self.conn.borrow_mut(), id)
    }
    fn all_reservations(&self) -> Result<Vec<Reservation>> {
        load_reservations(&mut self.conn.borrow_mut(), ReservationFilter::All)
    }
    fn reservations_of_user(&self, user_id: &str) -> Result<Vec<Reservation>> {
        load_reservations(&mut self.conn.borrow_mut(), ReservationFilter::User(user_id))
    }
    fn reservations_of_facility(&self, facility_id: &str) -> Result<Vec<Reservation>> {
        load_reservations(
            &mut self.conn.borrow_mut(),
            ReservationFilter::Facility(facility_id),
        )
    }
}

impl<'a> ReservationRepo for DbReadWrite<'a> {
    fn create_reservation(&self, reservation: &Reservation) -> Result<()> {
        create_reservation(&mut self.conn.borrow_mut(), reservation)
    }
    fn update_reservation(&self, reservation: &Reservation) -> Result<()> {
        update_reservation(&mut self.conn.borrow_mut(), reservation)
    }

    fn get_reservation(&self, id: &str) -> Result<Reservation> {
        get_reservation(&mut self.conn.borrow_mut(), id)
    }
    fn all_reservations(&self) -> Result<Vec<Reservation>> {
        load_reservations(&mut self.conn.borrow_mut(), ReservationFilter::All)
    }
    fn reservations_of_user(&self, user_id: &str) -> Result<Vec<Reservation>> {
        load_reservations(&mut self.conn.borrow_mut(), ReservationFilter::User(user_id))
    }
    fn reservations_of_facility(&self, facility_id: &str) -> Result<Vec<Reservation>> {
        load_reservations(
            &mut self.conn.borrow_mut(),
            ReservationFilter::Facility(facility_id),
        )
    }
}

impl<'a> ReservationRepo for DbConnection<'a> {
    fn create_reservation(&self, reservation: &Reservation) -> Result<()> {
        create_reservation(&mut self.conn.borrow_mut(), reservation)
    }
    fn update_reservation(&self, reservation: &Reservation) -> Result<()> {
        update_reservation(&mut self.conn.borrow_mut(), reservation)
    }

    fn get_reservation(&self, id: &str) -> Result<Reservation> {
        get_reservation(&mut self.conn.borrow_mut(), id)
    }
    fn all_reservations(&self) -> Result<Vec<Reservation>> {
        load_reservations(&mut self.conn.borrow_mut(), ReservationFilter::All)
    }
    fn reservations_of_user(&self, user_id: &str) -> Result<Vec<Reservation>> {
        load_reservations(&mut self.conn.borrow_mut(), ReservationFilter::User(user_id))
    }
    fn reservations_of_facility(&self, facility_id: &str) -> Result<Vec<Reservation>> {
        load_reservations(
            &mut self.conn.borrow_mut(),
            ReservationFilter::Facility(facility_id),
        )
    }
}

enum ReservationFilter<'a> {
    All,
    User(&'a str),
    Facility(&'a str),
}

impl From<&Reservation> for models::NewReservation {
    fn from(r: &Reservation) -> Self {
        Self {
            id: r.id.to_string(),
            user_id: r.user_id.to_string(),
            user_email: r.user_email.to_string(),
            facility_id: r.facility_id.to_string(),
            start_at: r.start.as_millis(),
            end_at: r.end.as_millis(),
            status: r.status.to_string(),
            total_cost: r.total_cost,
            created_at: r.created_at.as_millis(),
            updated_at: r.updated_at.as_millis(),
        }
    }
}

impl TryFrom<models::ReservationEntity> for Reservation {
    type Error = repo::Error;
    fn try_from(from: models::ReservationEntity) -> Result<Self> {
        let models::ReservationEntity {
            id,
            user_id,
            user_email,
            facility_id,
            start_at,
            end_at,
            status,
            total_cost,
            created_at,
            updated_at,
        } = from;
        Ok(Reservation {
            id: id.into(),
            user_id: user_id.into(),
            user_email: EmailAddress::new_unchecked(user_email),
            facility_id: facility_id.into(),
            start: Timestamp::from_millis(start_at),
            end: Timestamp::from_millis(end_at),
            status: parse_column("reservation status", &status)?,
            total_cost,
            created_at: Timestamp::from_millis(created_at),
            updated_at: Timestamp::from_millis(updated_at),
        })
    }
}

fn create_reservation(conn: &mut SqliteConnection, r: &Reservation) -> Result<()> {
    diesel::insert_into(schema::reservations::table)
        .values(&models::NewReservation::from(r))
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn update_reservation(conn: &mut SqliteConnection, r: &Reservation) -> Result<()> {
    use schema::reservations::dsl;
    let count = diesel::update(dsl::reservations.filter(dsl::id.eq(r.id.as_str())))
        .set(&models::NewReservation::from(r))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn get_reservation(conn: &mut SqliteConnection, id: &str) -> Result<Reservation> {
    use schema::reservations::dsl;
    dsl::reservations
        .filter(dsl::id.eq(id))
        .first::<models::ReservationEntity>(conn)
        .map_err(from_diesel_err)?
        .try_into()
}

fn load_reservations(
    conn: &mut SqliteConnection,
    filter: ReservationFilter,
) -> Result<Vec<Reservation>> {
    use schema::reservations::dsl;
    let mut query = dsl::reservations.order_by(dsl::start_at).into_boxed();
    match filter {
        ReservationFilter::All => (),
        ReservationFilter::User(id) => query = query.filter(dsl::user_id.eq(id)),
        ReservationFilter::Facility(id) => query = query.filter(dsl::facility_id.eq(id)),
    }
    query
        .load::<models::ReservationEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(TryInto::try_into)
        .collect()
}
