use super::prelude::*;
use crate::util::validate::{AutoCorrect, Validate};

/// Corrects and validates the descriptive fields of a facility.
pub fn prepare_facility_details(details: FacilityDetails) -> Result<FacilityDetails> {
    let details = details.auto_correct();
    details.validate()?;
    Ok(details)
}

pub fn create_new_facility<R: FacilityRepo>(repo: &R, details: FacilityDetails) -> Result<Facility> {
    let details = prepare_facility_details(details)?;
    let now = Timestamp::now();
    let facility = Facility {
        id: Id::new(),
        details,
        created_at: now,
        updated_at: now,
    };
    log::debug!("Creating facility {} ({})", facility.id, facility.details.name);
    repo.create_facility(&facility)?;
    Ok(facility)
}
