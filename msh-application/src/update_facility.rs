use super::*;

pub fn update_facility(
    connections: &sqlite::Connections,
    geocoding: &dyn GeoCodingGateway,
    country: Option<&str>,
    id: &str,
    details: FacilityDetails,
) -> Result<Facility> {
    let details = usecases::locate_facility(geocoding, details, country);
    let facility = connections
        .exclusive()?
        .transaction(|conn| usecases::update_facility(conn, id, details))
        .map_err(|err| {
            warn!("Failed to update facility {id}: {err}");
            err
        })?;
    Ok(facility)
}
