use super::*;

/// Approves a pending request within a single transaction.
///
/// Requests without a coordinate are located by their
/// address before the facility is created.
pub fn approve_facility_request(
    connections: &sqlite::Connections,
    geocoding: &dyn GeoCodingGateway,
    country: Option<&str>,
    id: &str,
) -> Result<(FacilityRequest, Facility)> {
    let location = {
        let request = connections.shared()?.get_facility_request(id)?;
        if request.status.is_pending() && request.details.location.is_none() {
            usecases::locate_facility(geocoding, request.details, country).location
        } else {
            None
        }
    };
    Ok(connections.exclusive()?.transaction(|conn| {
        if let Some(pos) = location {
            let mut request = conn.get_facility_request(id)?;
            if request.status.is_pending() && request.details.location.is_none() {
                request.details.location = Some(pos);
                conn.update_facility_request(&request)?;
            }
        }
        usecases::approve_facility_request(conn, id).map_err(|err| {
            warn!("Failed to approve facility request {id}: {err}");
            err
        })
    })?)
}

pub fn reject_facility_request(
    connections: &sqlite::Connections,
    id: &str,
    reason: &str,
) -> Result<FacilityRequest> {
    Ok(connections
        .exclusive()?
        .transaction(|conn| usecases::reject_facility_request(conn, id, reason))?)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    #[test]
    fn approve_pending_request() {
        let fixture = BackendFixture::new();
        let user = fixture.create_user("user@example.ma", Role::User);
        let request = fixture.create_facility_request(&user, "Stade municipal");
        let geocoding = DummyGeoCoding::not_found();

        let (approved, facility) =
            flows::approve_facility_request(&fixture.db_connections, &geocoding, None, request.id.as_str())
                .unwrap();
        assert_eq!(RequestStatus::Approved, approved.status);
        assert_eq!(Some(facility.id.clone()), approved.facility_id);
        assert_eq!("Stade municipal", facility.details.name);

        let db = fixture.db_connections.shared().unwrap();
        assert_eq!(1, db.count_facilities().unwrap());
        let stored = db.get_facility_request(request.id.as_str()).unwrap();
        assert_eq!(RequestStatus::Approved, stored.status);
    }

    #[test]
    fn locate_request_on_approval() {
        let fixture = BackendFixture::new();
        let user = fixture.create_user("user@example.ma", Role::User);
        let mut request = fixture.create_facility_request(&user, "Salle couverte");
        request.details.location = None;
        request.details.address.city = Some("Fès".into());
        fixture
            .db_connections
            .exclusive()
            .unwrap()
            .update_facility_request(&request)
            .unwrap();
        let geocoding = DummyGeoCoding::found(MapPoint::from_lat_lng_deg(34.03, -5.0));

        let (approved, facility) =
            flows::approve_facility_request(&fixture.db_connections, &geocoding, None, request.id.as_str())
                .unwrap();
        assert_eq!(
            Some(MapPoint::from_lat_lng_deg(34.03, -5.0)),
            facility.details.location
        );
        assert_eq!(facility.details.location, approved.details.location);
    }

    #[test]
    fn approve_reviewed_request_fails() {
        let fixture = BackendFixture::new();
        let user = fixture.create_user("user@example.ma", Role::User);
        let request = fixture.create_facility_request(&user, "Stade");
        let geocoding = DummyGeoCoding::not_found();
        let id = request.id.as_str();
        flows::reject_facility_request(&fixture.db_connections, id, "Doublon").unwrap();

        let result = flows::approve_facility_request(&fixture.db_connections, &geocoding, None, id);
        assert!(matches!(
            result,
            Err(AppError::Business(BError::Parameter(
                usecases::Error::AlreadyReviewed
            )))
        ));
        let result = flows::reject_facility_request(&fixture.db_connections, id, "Encore");
        assert!(matches!(
            result,
            Err(AppError::Business(BError::Parameter(
                usecases::Error::AlreadyReviewed
            )))
        ));
        assert_eq!(0, fixture.db_connections.shared().unwrap().count_facilities().unwrap());
    }

    #[test]
    fn reject_without_reason_fails() {
        let fixture = BackendFixture::new();
        let user = fixture.create_user("user@example.ma", Role::User);
        let request = fixture.create_facility_request(&user, "Stade");
        let result = flows::reject_facility_request(&fixture.db_connections, request.id.as_str(), "  ");
        assert!(matches!(
            result,
            Err(AppError::Business(BError::Parameter(
                usecases::Error::MissingRejectionReason
            )))
        ));
        let stored = fixture
            .db_connections
            .shared()
            .unwrap()
            .get_facility_request(request.id.as_str())
            .unwrap();
        assert_eq!(RequestStatus::Pending, stored.status);
    }
}
