use super::*;

pub fn create_reservation(
    connections: &sqlite::Connections,
    user: &User,
    new_reservation: usecases::NewReservation,
) -> Result<Reservation> {
    let reservation = connections.exclusive()?.transaction(|conn| {
        usecases::create_reservation(conn, user, new_reservation, Timestamp::now())
    })?;
    info!(
        "User {} booked facility {} ({} MAD)",
        user.id, reservation.facility_id, reservation.total_cost
    );
    Ok(reservation)
}

pub fn cancel_reservation(
    connections: &sqlite::Connections,
    account: &User,
    id: &str,
) -> Result<Reservation> {
    Ok(connections
        .exclusive()?
        .transaction(|conn| usecases::cancel_reservation(conn, account, id))?)
}

pub fn change_reservation_status(
    connections: &sqlite::Connections,
    id: &str,
    status: ReservationStatus,
) -> Result<Reservation> {
    Ok(connections
        .exclusive()?
        .transaction(|conn| usecases::change_reservation_status(conn, id, status))?)
}
