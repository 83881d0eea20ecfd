use super::prelude::*;

#[derive(Debug, Clone)]
pub struct NewReservation {
    pub facility_id: Id,
    pub start: Timestamp,
    pub end: Timestamp,
}

/// The cost of booking a facility for the given period.
///
/// Facilities without an hourly rate are free of charge.
pub fn reservation_cost(hourly_rate: Option<f64>, start: Timestamp, end: Timestamp) -> f64 {
    let Some(rate) = hourly_rate else {
        return 0.0;
    };
    let hours = end.duration_since(start).as_seconds_f64() / 3600.0;
    (rate * hours * 100.0).round() / 100.0
}

pub fn create_reservation<R>(
    repo: &R,
    user: &User,
    new_reservation: NewReservation,
    now: Timestamp,
) -> Result<Reservation>
where
    R: ReservationRepo + FacilityRepo,
{
    let NewReservation {
        facility_id,
        start,
        end,
    } = new_reservation;
    if end <= start {
        return Err(Error::EndDateBeforeStart);
    }
    if start < now {
        return Err(Error::ReservationInPast);
    }
    let facility = repo.get_facility(facility_id.as_str())?;
    let taken = repo
        .reservations_of_facility(facility_id.as_str())?
        .into_iter()
        .any(|r| r.status.is_blocking() && r.overlaps(start, end));
    if taken {
        return Err(Error::SlotTaken);
    }
    let reservation = Reservation {
        id: Id::new(),
        user_id: user.id.clone(),
        user_email: user.email.clone(),
        facility_id,
        start,
        end,
        status: ReservationStatus::Pending,
        total_cost: reservation_cost(facility.details.hourly_rate, start, end),
        created_at: now,
        updated_at: now,
    };
    log::info!(
        "New reservation {} of facility {} by {}",
        reservation.id,
        reservation.facility_id,
        reservation.user_email
    );
    repo.create_reservation(&reservation)?;
    Ok(reservation)
}
