use super::*;

pub fn create_facility_request(
    connections: &sqlite::Connections,
    geocoding: &dyn GeoCodingGateway,
    country: Option<&str>,
    requester: &User,
    new_request: usecases::NewFacilityRequest,
) -> Result<FacilityRequest> {
    let usecases::NewFacilityRequest {
        details,
        attachment_urls,
    } = new_request;
    let new_request = usecases::NewFacilityRequest {
        details: usecases::locate_facility(geocoding, details, country),
        attachment_urls,
    };
    Ok(connections
        .exclusive()?
        .transaction(|conn| usecases::create_facility_request(conn, requester, new_request))?)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    #[test]
    fn submit_request() {
        let fixture = BackendFixture::new();
        let user = fixture.create_user("user@example.ma", Role::User);
        let geocoding = DummyGeoCoding::found(MapPoint::from_lat_lng_deg(31.63, -8.0));
        let new_request = usecases::NewFacilityRequest {
            details: FacilityDetails {
                name: "Piscine municipale".into(),
                address: Address {
                    city: Some("Marrakech".into()),
                    ..Default::default()
                },
                ..Default::default()
            },
            attachment_urls: vec!["/uploads/plan.pdf".into()],
        };
        let request = flows::create_facility_request(
            &fixture.db_connections,
            &geocoding,
            None,
            &user,
            new_request,
        )
        .unwrap();
        assert_eq!(RequestStatus::Pending, request.status);
        assert_eq!(user.id, request.requested_by);
        assert!(request.details.location.is_some());
        let mine = fixture
            .db_connections
            .shared()
            .unwrap()
            .facility_requests_of_user(user.id.as_str())
            .unwrap();
        assert_eq!(vec![request], mine);
    }

    #[test]
    fn attachments_cannot_be_claimed_twice() {
        let fixture = BackendFixture::new();
        let alice = fixture.create_user("alice@example.ma", Role::User);
        let mallory = fixture.create_user("mallory@example.ma", Role::User);
        let geocoding = DummyGeoCoding::not_found();
        let new_request = || usecases::NewFacilityRequest {
            details: Facility::build().name("Terrain").finish().details,
            attachment_urls: vec!["/uploads/alice-plan.pdf".into()],
        };
        flows::create_facility_request(&fixture.db_connections, &geocoding, None, &alice, new_request())
            .unwrap();
        let err = flows::create_facility_request(
            &fixture.db_connections,
            &geocoding,
            None,
            &mallory,
            new_request(),
        )
        .err()
        .unwrap();
        assert!(matches!(
            err,
            AppError::Business(BError::Parameter(usecases::Error::AttachmentInUse(_)))
        ));
    }
}

