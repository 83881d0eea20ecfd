use super::prelude::*;

/// Approves a pending request and spawns the requested facility.
///
/// Both writes must happen within the same transaction.
pub fn approve_facility_request<R>(repo: &R, id: &str) -> Result<(FacilityRequest, Facility)>
where
    R: FacilityRequestRepo + FacilityRepo,
{
    let mut request = repo.get_facility_request(id)?;
    if !request.status.is_pending() {
        return Err(Error::AlreadyReviewed);
    }
    let now = Timestamp::now();
    let facility = Facility {
        id: Id::new(),
        details: request.details.clone(),
        created_at: now,
        updated_at: now,
    };
    repo.create_facility(&facility)?;
    request.status = RequestStatus::Approved;
    request.facility_id = Some(facility.id.clone());
    request.updated_at = now;
    repo.update_facility_request(&request)?;
    log::info!("Approved facility request {id} as facility {}", facility.id);
    Ok((request, facility))
}

pub fn reject_facility_request<R>(repo: &R, id: &str, reason: &str) -> Result<FacilityRequest>
where
    R: FacilityRequestRepo,
{
    let reason = reason.trim();
    if reason.is_empty() {
        return Err(Error::MissingRejectionReason);
    }
    let mut request = repo.get_facility_request(id)?;
    if !request.status.is_pending() {
        return Err(Error::AlreadyReviewed);
    }
    request.status = RequestStatus::Rejected;
    request.rejection_reason = Some(reason.to_string());
    request.updated_at = Timestamp::now();
    repo.update_facility_request(&request)?;
    log::info!("Rejected facility request {id}");
    Ok(request)
}
