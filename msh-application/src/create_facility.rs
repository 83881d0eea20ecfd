use super::*;

/// Creates a new facility and tries to locate it
/// if no coordinate has been given.
pub fn create_facility(
    connections: &sqlite::Connections,
    geocoding: &dyn GeoCodingGateway,
    country: Option<&str>,
    details: FacilityDetails,
) -> Result<Facility> {
    let details = usecases::locate_facility(geocoding, details, country);
    let facility = connections
        .exclusive()?
        .transaction(|conn| usecases::create_new_facility(conn, details))?;
    info!("Created facility {} '{}'", facility.id, facility.details.name);
    Ok(facility)
}
