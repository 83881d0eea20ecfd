use super::prelude::*;

/// Cancels a reservation on behalf of its owner or an admin.
pub fn cancel_reservation<R: ReservationRepo>(repo: &R, account: &User, id: &str) -> Result<Reservation> {
    let reservation = repo.get_reservation(id)?;
    if reservation.user_id != account.id && account.role < Role::Admin {
        return Err(Error::Forbidden);
    }
    update_reservation_status(repo, reservation, ReservationStatus::Cancelled)
}

pub fn change_reservation_status<R: ReservationRepo>(
    repo: &R,
    id: &str,
    status: ReservationStatus,
) -> Result<Reservation> {
    let reservation = repo.get_reservation(id)?;
    if reservation.status == ReservationStatus::Cancelled && status != ReservationStatus::Cancelled {
        // The slot might have been booked by someone else in the meantime.
        let taken = repo
            .reservations_of_facility(reservation.facility_id.as_str())?
            .into_iter()
            .any(|r| {
                r.id != reservation.id
                    && r.status.is_blocking()
                    && r.overlaps(reservation.start, reservation.end)
            });
        if taken {
            return Err(Error::SlotTaken);
        }
    }
    update_reservation_status(repo, reservation, status)
}

fn update_reservation_status<R: ReservationRepo>(
    repo: &R,
    mut reservation: Reservation,
    status: ReservationStatus,
) -> Result<Reservation> {
    log::info!(
        "Changing status of reservation {} from {} to {}",
        reservation.id,
        reservation.status,
        status
    );
    reservation.status = status;
    reservation.updated_at = Timestamp::now();
    repo.update_reservation(&reservation)?;
    Ok(reservation)
}
