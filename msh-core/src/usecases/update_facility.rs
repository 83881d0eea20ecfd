use super::{create_new_facility::prepare_facility_details, prelude::*};

pub fn update_facility<R: FacilityRepo>(
    repo: &R,
    id: &str,
    details: FacilityDetails,
) -> Result<Facility> {
    let details = prepare_facility_details(details)?;
    let old = repo.get_facility(id)?;
    let facility = Facility {
        details,
        updated_at: Timestamp::now(),
        ..old
    };
    log::debug!("Updating facility {}", facility.id);
    repo.update_facility(&facility)?;
    Ok(facility)
}
