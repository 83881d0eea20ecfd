use super::*;

#[post("/reservations", format = "application/json", data = "<new_reservation>")]
pub fn post_reservation(
    db: sqlite::Connections,
    auth: Auth,
    new_reservation: JsonResult<json::NewReservation>,
) -> Result<json::Reservation> {
    let new_reservation = from_json::new_reservation(new_reservation?.into_inner());
    let user = auth.user(&db.shared()?)?;
    let reservation = flows::create_reservation(db.pool(), &user, new_reservation)?;
    Ok(Json(reservation.into()))
}

#[get("/reservations/mine")]
pub fn get_own_reservations(
    db: sqlite::Connections,
    auth: Auth,
) -> Result<Vec<json::Reservation>> {
    let db = db.shared()?;
    let user = auth.user(&db)?;
    let reservations = usecases::reservations_of_user(&db, &user)?;
    Ok(Json(reservations.into_iter().map(Into::into).collect()))
}

#[get("/reservations")]
pub fn get_reservations(db: sqlite::Connections, auth: Auth) -> Result<Vec<json::Reservation>> {
    let db = db.shared()?;
    auth.user_with_roles(&db, ADMIN_ROLES)?;
    let reservations = db.all_reservations()?;
    Ok(Json(reservations.into_iter().map(Into::into).collect()))
}

#[post("/reservations/<id>/cancel")]
pub fn post_cancel(db: sqlite::Connections, auth: Auth, id: &str) -> Result<json::Reservation> {
    let user = auth.user(&db.shared()?)?;
    let reservation = flows::cancel_reservation(db.pool(), &user, id)?;
    Ok(Json(reservation.into()))
}

#[post("/reservations/<id>/status", format = "application/json", data = "<data>")]
pub fn post_status(
    db: sqlite::Connections,
    auth: Auth,
    id: &str,
    data: JsonResult<json::ChangeReservationStatus>,
) -> Result<json::Reservation> {
    auth.user_with_roles(&db.shared()?, ADMIN_ROLES)?;
    let json::ChangeReservationStatus { status } = data?.into_inner();
    let reservation = flows::change_reservation_status(db.pool(), id, status.into())?;
    Ok(Json(reservation.into()))
}
