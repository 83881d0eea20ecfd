use super::*;
use crate::web::tests::prelude::*;

pub mod prelude {
    pub use crate::web::tests::prelude::*;

    pub fn test_json(r: &LocalResponse) {
        assert_eq!(
            r.headers().get("Content-Type").collect::<Vec<_>>()[0],
            "application/json"
        );
    }

    pub fn login<'c>(client: &'c Client, email: &str, pw: &str) -> LocalResponse<'c> {
        client
            .post("/api/login")
            .header(ContentType::JSON)
            .body(format!(r#"{{"email":"{email}","password":"{pw}"}}"#))
            .dispatch()
    }
}

use self::prelude::*;

fn error_status(response: LocalResponse) -> u16 {
    response.into_json::<msh_boundary::Error>().unwrap().http_status
}

fn create_facility(db: &sqlite::Connections, facility: Facility) -> Facility {
    db.exclusive().unwrap().create_facility(&facility).unwrap();
    facility
}

fn signed_in_admin(client: &Client, db: &sqlite::Connections) -> User {
    let admin = register_user(db, "admin@example.ma", "secret", Role::Admin);
    assert_eq!(Status::Ok, login(client, "admin@example.ma", "secret").status());
    admin
}

mod facilities {
    use super::*;

    #[test]
    fn filter_by_sport() {
        let (client, db) = setup();
        create_facility(
            &db,
            Facility::build().name("Stade").sports(vec!["Football"]).finish(),
        );
        create_facility(
            &db,
            Facility::build().name("Club").sports(vec!["Tennis"]).finish(),
        );

        let response = client.get("/api/facilities?sports=football").dispatch();
        assert_eq!(Status::Ok, response.status());
        test_json(&response);
        let facilities: Vec<json::Facility> = response.into_json().unwrap();
        assert_eq!(1, facilities.len());
        assert_eq!("Stade", facilities[0].details.name);

        let all: Vec<json::Facility> = client.get("/api/facilities").dispatch().into_json().unwrap();
        assert_eq!(2, all.len());
    }

    #[test]
    fn filter_by_type_and_text() {
        let (client, db) = setup();
        create_facility(
            &db,
            Facility::build()
                .name("Salle Couverte")
                .facility_type(FacilityType::Indoor)
                .finish(),
        );
        create_facility(
            &db,
            Facility::build()
                .name("Terrain")
                .facility_type(FacilityType::Outdoor)
                .finish(),
        );
        let indoor: Vec<json::Facility> = client
            .get("/api/facilities?indoor=true")
            .dispatch()
            .into_json()
            .unwrap();
        assert_eq!(1, indoor.len());
        assert_eq!("Salle Couverte", indoor[0].details.name);

        let both: Vec<json::Facility> = client
            .get("/api/facilities?indoor=true&outdoor=true")
            .dispatch()
            .into_json()
            .unwrap();
        assert_eq!(2, both.len());

        let text: Vec<json::Facility> = client
            .get("/api/facilities?text=terr")
            .dispatch()
            .into_json()
            .unwrap();
        assert_eq!(1, text.len());
    }

    #[test]
    fn filter_options() {
        let (client, db) = setup();
        create_facility(
            &db,
            Facility::build()
                .sports(vec!["Tennis", "Football"])
                .region("Rabat-Salé-Kénitra")
                .finish(),
        );
        let options: json::FilterOptions = client
            .get("/api/facilities/filter-options")
            .dispatch()
            .into_json()
            .unwrap();
        assert_eq!(vec!["Football", "Tennis"], options.sports);
        assert_eq!(vec!["Rabat-Salé-Kénitra"], options.regions);
    }

    #[test]
    fn get_unknown_facility() {
        let (client, _) = setup();
        let response = client.get("/api/facilities/does-not-exist").dispatch();
        assert_eq!(Status::NotFound, response.status());
        test_json(&response);
        assert_eq!(404, error_status(response));
    }

    #[test]
    fn only_admins_create_facilities() {
        let (client, db) = setup();
        let body = r#"{"name":"Complexe sportif","city":"Rabat"}"#;

        let response = client
            .post("/api/facilities")
            .header(ContentType::JSON)
            .body(body)
            .dispatch();
        assert_eq!(Status::Unauthorized, response.status());

        register_user(&db, "user@example.ma", "secret", Role::User);
        login(&client, "user@example.ma", "secret");
        let response = client
            .post("/api/facilities")
            .header(ContentType::JSON)
            .body(body)
            .dispatch();
        assert_eq!(Status::Forbidden, response.status());
        assert_eq!(403, error_status(response));
        assert_eq!(0, db.shared().unwrap().count_facilities().unwrap());
    }

    #[test]
    fn create_facility_and_locate_it() {
        let (client, db) = setup();
        signed_in_admin(&client, &db);
        let response = client
            .post("/api/facilities")
            .header(ContentType::JSON)
            .body(r#"{"name":"Complexe sportif","city":"Rabat","sports":["Football"]}"#)
            .dispatch();
        assert_eq!(Status::Ok, response.status());
        let facility: json::Facility = response.into_json().unwrap();
        assert_eq!(Some(34.0209), facility.details.lat);
        assert_eq!(Some(-6.8416), facility.details.lng);

        let stored = db
            .shared()
            .unwrap()
            .get_facility(&facility.id)
            .unwrap();
        assert_eq!("Complexe sportif", stored.details.name);
    }

    #[test]
    fn reject_incomplete_coordinate() {
        let (client, db) = setup();
        signed_in_admin(&client, &db);
        let response = client
            .post("/api/facilities")
            .header(ContentType::JSON)
            .body(r#"{"name":"Stade","lat":33.5}"#)
            .dispatch();
        assert_eq!(Status::BadRequest, response.status());
    }

    #[test]
    fn authorize_before_validating_the_body() {
        let (client, db) = setup();
        for body in [r#"{"name":"Stade","lat":33.5}"#, r#"{"name":"#] {
            let response = client
                .post("/api/facilities")
                .header(ContentType::JSON)
                .body(body)
                .dispatch();
            assert_eq!(Status::Unauthorized, response.status());
        }
        let facility = create_facility(&db, Facility::build().name("Stade").finish());
        let response = client
            .put(format!("/api/facilities/{}", facility.id))
            .header(ContentType::JSON)
            .body(r#"{"name":"Stade","lng":-7.6}"#)
            .dispatch();
        assert_eq!(Status::Unauthorized, response.status());
        let response = client
            .post("/api/equipments")
            .header(ContentType::JSON)
            .body(r#"{"name":"#)
            .dispatch();
        assert_eq!(Status::Unauthorized, response.status());
    }

    #[test]
    fn reject_invalid_json() {
        let (client, db) = setup();
        signed_in_admin(&client, &db);
        let response = client
            .post("/api/facilities")
            .header(ContentType::JSON)
            .body(r#"{"name":"#)
            .dispatch();
        assert_eq!(Status::BadRequest, response.status());
    }

    #[test]
    fn update_and_delete_facility() {
        let (client, db) = setup();
        signed_in_admin(&client, &db);
        let facility = create_facility(&db, Facility::build().name("Piscine").finish());

        let response = client
            .put(format!("/api/facilities/{}", facility.id))
            .header(ContentType::JSON)
            .body(r#"{"name":"Piscine municipale","lat":33.6,"lng":-7.6,"hourly_rate":50.0}"#)
            .dispatch();
        assert_eq!(Status::Ok, response.status());
        let updated: json::Facility = response.into_json().unwrap();
        assert_eq!("Piscine municipale", updated.details.name);
        assert_eq!(Some(50.0), updated.details.hourly_rate);

        let response = client
            .delete(format!("/api/facilities/{}", facility.id))
            .dispatch();
        assert_eq!(Status::Ok, response.status());
        assert_eq!(0, db.shared().unwrap().count_facilities().unwrap());

        let response = client
            .delete(format!("/api/facilities/{}", facility.id))
            .dispatch();
        assert_eq!(Status::NotFound, response.status());
    }

    const CSV: &str = "Nom,Lat,Lng\nStade A,\"33,5\",\"-7,5\"\n,33.1,-7.1\nSalle B,34.02,-6.83\n";

    fn import_request(mapping: &str) -> String {
        serde_json::json!({
            "csv": CSV,
            "mapping": serde_json::from_str::<serde_json::Value>(mapping).unwrap(),
        })
        .to_string()
    }

    #[test]
    fn suggest_import_mapping() {
        let (client, db) = setup();
        signed_in_admin(&client, &db);
        let response = client
            .post("/api/facilities/import/headers")
            .header(ContentType::JSON)
            .body(import_request("{}"))
            .dispatch();
        assert_eq!(Status::Ok, response.status());
        let headers: json::ImportHeaders = response.into_json().unwrap();
        let columns: Vec<_> = headers.headers.iter().map(|h| h.column.as_str()).collect();
        assert_eq!(vec!["Nom", "Lat", "Lng"], columns);
        let suggested = |field: &str| {
            headers
                .fields
                .iter()
                .find(|f| f.field == field)
                .and_then(|f| f.suggested_column.clone())
        };
        assert_eq!(Some("Nom".to_string()), suggested("name"));
        assert_eq!(Some("Lng".to_string()), suggested("longitude"));
        assert_eq!(None, suggested("sports"));
    }

    #[test]
    fn import_csv() {
        let (client, db) = setup();
        signed_in_admin(&client, &db);
        let response = client
            .post("/api/facilities/import")
            .header(ContentType::JSON)
            .body(import_request(
                r#"{"name":"Nom","latitude":"Lat","longitude":"Lng"}"#,
            ))
            .dispatch();
        assert_eq!(Status::Ok, response.status());
        let report: json::ImportReport = response.into_json().unwrap();
        assert_eq!(2, report.imported);
        assert_eq!(vec![3], report.skipped_lines);

        let facilities = db.shared().unwrap().all_facilities().unwrap();
        let stade = facilities
            .iter()
            .find(|f| f.details.name == "Stade A")
            .unwrap();
        assert_eq!(
            Some(MapPoint::from_lat_lng_deg(33.5, -7.5)),
            stade.details.location
        );
    }

    #[test]
    fn import_with_incomplete_mapping() {
        let (client, db) = setup();
        signed_in_admin(&client, &db);
        let response = client
            .post("/api/facilities/import")
            .header(ContentType::JSON)
            .body(import_request(r#"{"name":"Nom","latitude":"Lat"}"#))
            .dispatch();
        assert_eq!(Status::BadRequest, response.status());

        let response = client
            .post("/api/facilities/import")
            .header(ContentType::JSON)
            .body(import_request(r#"{"colour":"Nom"}"#))
            .dispatch();
        assert_eq!(Status::BadRequest, response.status());
        assert_eq!(0, db.shared().unwrap().count_facilities().unwrap());
    }
}

mod users {
    use super::*;

    #[test]
    fn register_and_login() {
        let (client, _) = setup();
        let response = client
            .post("/api/users")
            .header(ContentType::JSON)
            .body(r#"{"email":"amine@example.ma","password":"secret","name":"Amine"}"#)
            .dispatch();
        assert_eq!(Status::Ok, response.status());
        let user: json::User = response.into_json().unwrap();
        assert_eq!(json::UserRole::User, user.role);

        let response = client
            .post("/api/users")
            .header(ContentType::JSON)
            .body(r#"{"email":"amine@example.ma","password":"secret","name":"Amine"}"#)
            .dispatch();
        assert_eq!(Status::Conflict, response.status());

        let response = login(&client, "amine@example.ma", "wrong");
        assert_eq!(Status::Unauthorized, response.status());
        assert!(response.cookies().get_private(COOKIE_EMAIL_KEY).is_none());

        let response = login(&client, "amine@example.ma", "secret");
        assert_eq!(Status::Ok, response.status());
        assert!(response.cookies().get_private(COOKIE_EMAIL_KEY).is_some());

        let current: json::User = client.get("/api/users/current").dispatch().into_json().unwrap();
        assert_eq!("Amine", current.name);
    }

    #[test]
    fn register_with_invalid_email() {
        let (client, _) = setup();
        let response = client
            .post("/api/users")
            .header(ContentType::JSON)
            .body(r#"{"email":"not-an-email","password":"secret","name":"X"}"#)
            .dispatch();
        assert_eq!(Status::BadRequest, response.status());
    }

    #[test]
    fn logout() {
        let (client, db) = setup();
        register_user(&db, "user@example.ma", "secret", Role::User);
        login(&client, "user@example.ma", "secret");
        assert_eq!(
            Status::Ok,
            client.get("/api/users/current").dispatch().status()
        );
        assert_eq!(Status::Ok, client.post("/api/logout").dispatch().status());
        assert_eq!(
            Status::Unauthorized,
            client.get("/api/users/current").dispatch().status()
        );
    }

    #[test]
    fn authenticate_with_bearer_token() {
        let (client, db) = setup_untracked();
        register_user(&db, "user@example.ma", "secret", Role::User);
        let token: Option<json::JwtToken> = login(&client, "user@example.ma", "secret")
            .into_json()
            .unwrap();
        let token = token.unwrap().token;
        let bearer = || Header::new("Authorization", format!("Bearer {token}"));

        assert_eq!(
            Status::Unauthorized,
            client.get("/api/users/current").dispatch().status()
        );
        let response = client.get("/api/users/current").header(bearer()).dispatch();
        assert_eq!(Status::Ok, response.status());

        client.post("/api/logout").header(bearer()).dispatch();
        let response = client.get("/api/users/current").header(bearer()).dispatch();
        assert_eq!(Status::Unauthorized, response.status());
    }

    #[test]
    fn tokens_are_bound_to_account_and_role() {
        let (client, db) = setup_untracked();
        let mut admin = register_user(&db, "admin@example.ma", "secret", Role::Admin);
        let token: Option<json::JwtToken> = login(&client, "admin@example.ma", "secret")
            .into_json()
            .unwrap();
        let token = token.unwrap().token;
        let bearer = || Header::new("Authorization", format!("Bearer {token}"));
        let response = client.get("/api/users").header(bearer()).dispatch();
        assert_eq!(Status::Ok, response.status());

        admin.role = Role::User;
        db.exclusive().unwrap().update_user(&admin).unwrap();
        let response = client.get("/api/users/current").header(bearer()).dispatch();
        assert_eq!(Status::Unauthorized, response.status());

        admin.role = Role::Admin;
        db.exclusive().unwrap().update_user(&admin).unwrap();
        let response = client.get("/api/users/current").header(bearer()).dispatch();
        assert_eq!(Status::Ok, response.status());

        db.exclusive().unwrap().delete_user(admin.id.as_str()).unwrap();
        register_user(&db, "admin@example.ma", "other", Role::Admin);
        let response = client.get("/api/users").header(bearer()).dispatch();
        assert_eq!(Status::Unauthorized, response.status());
        let response = client.get("/api/users/current").header(bearer()).dispatch();
        assert_eq!(Status::Unauthorized, response.status());
    }

    #[test]
    fn update_own_profile() {
        let (client, db) = setup();
        let user = register_user(&db, "user@example.ma", "secret", Role::User);
        login(&client, "user@example.ma", "secret");
        let response = client
            .put("/api/users/current")
            .header(ContentType::JSON)
            .body(r#"{"name":"Salma","city":"Fès","favorite_sports":["Tennis"]}"#)
            .dispatch();
        assert_eq!(Status::Ok, response.status());
        let stored = db.shared().unwrap().get_user(user.id.as_str()).unwrap();
        assert_eq!("Salma", stored.name);
        assert_eq!(Some("Fès"), stored.profile.city.as_deref());
        assert_eq!(vec!["Tennis".to_string()], stored.profile.favorite_sports);
    }

    #[test]
    fn list_users_as_admin() {
        let (client, db) = setup();
        let user = register_user(&db, "user@example.ma", "secret", Role::User);
        login(&client, "user@example.ma", "secret");
        assert_eq!(Status::Forbidden, client.get("/api/users").dispatch().status());

        signed_in_admin(&client, &db);
        let users: Vec<json::User> = client.get("/api/users").dispatch().into_json().unwrap();
        assert_eq!(2, users.len());
        let response = client.get(format!("/api/users/{}", user.id)).dispatch();
        assert_eq!(Status::Ok, response.status());
    }

    #[test]
    fn only_super_admins_change_roles() {
        let (client, db) = setup();
        let user = register_user(&db, "user@example.ma", "secret", Role::User);
        register_user(&db, "root@example.ma", "secret", Role::SuperAdmin);
        signed_in_admin(&client, &db);

        let change_role = |client: &Client| {
            client
                .post(format!("/api/users/{}/role", user.id))
                .header(ContentType::JSON)
                .body(r#"{"role":"admin"}"#)
                .dispatch()
                .status()
        };
        assert_eq!(Status::Forbidden, change_role(&client));

        login(&client, "root@example.ma", "secret");
        assert_eq!(Status::Ok, change_role(&client));
        let stored = db.shared().unwrap().get_user(user.id.as_str()).unwrap();
        assert_eq!(Role::Admin, stored.role);

        let response = client.delete(format!("/api/users/{}", user.id)).dispatch();
        assert_eq!(Status::Ok, response.status());
        assert_eq!(2, db.shared().unwrap().count_users().unwrap());
    }

    fn access(client: &Client, view: &str) -> json::AccessDecision {
        client
            .get(format!("/api/dashboard/access?view={view}"))
            .dispatch()
            .into_json()
            .unwrap()
    }

    #[test]
    fn dashboard_access() {
        let (client, db) = setup();
        assert_eq!(json::AccessDecision::RedirectToLogin, access(&client, "admin"));

        register_user(&db, "user@example.ma", "secret", Role::User);
        login(&client, "user@example.ma", "secret");
        assert_eq!(json::AccessDecision::RedirectToHome, access(&client, "admin"));

        signed_in_admin(&client, &db);
        assert_eq!(json::AccessDecision::Render, access(&client, "admin"));
        assert_eq!(
            json::AccessDecision::RedirectToHome,
            access(&client, "super-admin")
        );

        let response = client.get("/api/dashboard/access?view=unknown").dispatch();
        assert_eq!(Status::BadRequest, response.status());
    }

    #[test]
    fn dashboard_access_without_user_record() {
        let (client, db) = setup();
        let user = register_user(&db, "user@example.ma", "secret", Role::Admin);
        login(&client, "user@example.ma", "secret");
        db.exclusive()
            .unwrap()
            .delete_user(user.id.as_str())
            .unwrap();
        assert_eq!(json::AccessDecision::RedirectToHome, access(&client, "admin"));
    }
}

mod facility_requests {
    use super::*;

    fn post_request<'c>(client: &'c Client, body: &str) -> LocalResponse<'c> {
        client
            .post("/api/facility-requests")
            .header(ContentType::JSON)
            .body(body.to_string())
            .dispatch()
    }

    #[test]
    fn submit_and_approve() {
        let (client, db) = setup();
        register_user(&db, "user@example.ma", "secret", Role::User);
        login(&client, "user@example.ma", "secret");
        let response = post_request(
            &client,
            r#"{"name":"Terrain de quartier","city":"Rabat","attachment_urls":["/uploads/plan.pdf"]}"#,
        );
        assert_eq!(Status::Ok, response.status());
        let request: json::FacilityRequest = response.into_json().unwrap();
        assert_eq!(json::RequestStatus::Pending, request.status);

        let mine: Vec<json::FacilityRequest> = client
            .get("/api/facility-requests/mine")
            .dispatch()
            .into_json()
            .unwrap();
        assert_eq!(1, mine.len());
        assert_eq!(
            Status::Forbidden,
            client.get("/api/facility-requests").dispatch().status()
        );

        signed_in_admin(&client, &db);
        let all: Vec<json::FacilityRequest> = client
            .get("/api/facility-requests")
            .dispatch()
            .into_json()
            .unwrap();
        assert_eq!(1, all.len());

        let response = client
            .post(format!("/api/facility-requests/{}/approve", request.id))
            .dispatch();
        assert_eq!(Status::Ok, response.status());
        let approved: json::ApprovedFacilityRequest = response.into_json().unwrap();
        assert_eq!(json::RequestStatus::Approved, approved.request.status);
        assert_eq!(Some(approved.facility.id.clone()), approved.request.facility_id);
        assert_eq!(Some(34.0209), approved.facility.details.lat);
        assert_eq!(1, db.shared().unwrap().count_facilities().unwrap());

        let response = client
            .post(format!("/api/facility-requests/{}/approve", request.id))
            .dispatch();
        assert_eq!(Status::Conflict, response.status());
        assert_eq!(1, db.shared().unwrap().count_facilities().unwrap());
    }

    #[test]
    fn attachments_of_other_requests_are_rejected() {
        let (client, db) = setup();
        register_user(&db, "alice@example.ma", "secret", Role::User);
        register_user(&db, "mallory@example.ma", "secret", Role::User);
        let body = r#"{"name":"Terrain","attachment_urls":["/uploads/alice-plan.pdf"]}"#;

        login(&client, "alice@example.ma", "secret");
        assert_eq!(Status::Ok, post_request(&client, body).status());

        login(&client, "mallory@example.ma", "secret");
        let response = post_request(&client, body);
        assert_eq!(Status::Conflict, response.status());
        assert_eq!(409, error_status(response));
        assert_eq!(1, db.shared().unwrap().all_facility_requests().unwrap().len());
    }

    #[test]
    fn signed_out_users_cannot_submit() {
        let (client, _) = setup();
        let response = post_request(&client, r#"{"name":"Terrain"}"#);
        assert_eq!(Status::Unauthorized, response.status());
    }

    #[test]
    fn reject_with_reason() {
        let (client, db) = setup();
        let user = register_user(&db, "user@example.ma", "secret", Role::User);
        let request = crate::core::usecases::create_facility_request(
            &db.exclusive().unwrap(),
            &user,
            crate::core::usecases::NewFacilityRequest {
                details: Facility::build().name("Piste").finish().details,
                attachment_urls: vec![],
            },
        )
        .unwrap();
        signed_in_admin(&client, &db);

        let reject = |reason: &str| {
            client
                .post(format!("/api/facility-requests/{}/reject", request.id))
                .header(ContentType::JSON)
                .body(format!(r#"{{"reason":"{reason}"}}"#))
                .dispatch()
        };
        assert_eq!(Status::BadRequest, reject(" ").status());
        let response = reject("Doublon");
        assert_eq!(Status::Ok, response.status());
        let rejected: json::FacilityRequest = response.into_json().unwrap();
        assert_eq!(json::RequestStatus::Rejected, rejected.status);
        assert_eq!(Some("Doublon".to_string()), rejected.rejection_reason);
        assert_eq!(Status::Conflict, reject("Encore").status());
    }

    #[test]
    fn delete_request_with_attachments() {
        let (client, db, storage) = setup_with_storage();
        let user = register_user(&db, "user@example.ma", "secret", Role::User);
        let request = crate::core::usecases::create_facility_request(
            &db.exclusive().unwrap(),
            &user,
            crate::core::usecases::NewFacilityRequest {
                details: Facility::build().name("Dojo").finish().details,
                attachment_urls: vec!["/uploads/a.pdf".into(), "/uploads/b.jpg".into()],
            },
        )
        .unwrap();
        signed_in_admin(&client, &db);
        let response = client
            .delete(format!("/api/facility-requests/{}", request.id))
            .dispatch();
        assert_eq!(Status::Ok, response.status());
        assert_eq!(
            vec!["/uploads/a.pdf".to_string(), "/uploads/b.jpg".to_string()],
            storage.deleted()
        );
        assert!(db
            .shared()
            .unwrap()
            .all_facility_requests()
            .unwrap()
            .is_empty());
    }
}

mod reservations {
    use super::*;

    fn future(hours: i64) -> i64 {
        Timestamp::now().as_millis() + hours * 3_600_000
    }

    fn book<'c>(client: &'c Client, facility_id: &str, start: i64, end: i64) -> LocalResponse<'c> {
        client
            .post("/api/reservations")
            .header(ContentType::JSON)
            .body(format!(
                r#"{{"facility_id":"{facility_id}","start":{start},"end":{end}}}"#
            ))
            .dispatch()
    }

    #[test]
    fn book_a_facility() {
        let (client, db) = setup();
        let facility = create_facility(
            &db,
            Facility::build().name("Court").hourly_rate(Some(100.0)).finish(),
        );
        register_user(&db, "user@example.ma", "secret", Role::User);
        login(&client, "user@example.ma", "secret");

        let start = future(24);
        let response = book(&client, facility.id.as_str(), start, start + 2 * 3_600_000);
        assert_eq!(Status::Ok, response.status());
        let reservation: json::Reservation = response.into_json().unwrap();
        assert_eq!(200.0, reservation.total_cost);
        assert_eq!(json::ReservationStatus::Pending, reservation.status);

        let response = book(&client, facility.id.as_str(), start + 3_600_000, start + 4 * 3_600_000);
        assert_eq!(Status::Conflict, response.status());

        let response = book(&client, facility.id.as_str(), start, start - 1);
        assert_eq!(Status::BadRequest, response.status());

        let mine: Vec<json::Reservation> = client
            .get("/api/reservations/mine")
            .dispatch()
            .into_json()
            .unwrap();
        assert_eq!(1, mine.len());

        let response = client
            .post(format!("/api/reservations/{}/cancel", reservation.id))
            .dispatch();
        assert_eq!(Status::Ok, response.status());
        let cancelled: json::Reservation = response.into_json().unwrap();
        assert_eq!(json::ReservationStatus::Cancelled, cancelled.status);

        let response = book(&client, facility.id.as_str(), start + 3_600_000, start + 4 * 3_600_000);
        assert_eq!(Status::Ok, response.status());
    }

    #[test]
    fn reservations_in_the_past_are_rejected() {
        let (client, db) = setup();
        let facility = create_facility(&db, Facility::build().finish());
        register_user(&db, "user@example.ma", "secret", Role::User);
        login(&client, "user@example.ma", "secret");
        let response = book(&client, facility.id.as_str(), future(-3), future(-2));
        assert_eq!(Status::BadRequest, response.status());
    }

    #[test]
    fn admins_confirm_reservations() {
        let (client, db) = setup();
        let facility = create_facility(&db, Facility::build().finish());
        register_user(&db, "user@example.ma", "secret", Role::User);
        login(&client, "user@example.ma", "secret");
        let reservation: json::Reservation = book(&client, facility.id.as_str(), future(1), future(2))
            .into_json()
            .unwrap();

        let set_status = || {
            client
                .post(format!("/api/reservations/{}/status", reservation.id))
                .header(ContentType::JSON)
                .body(r#"{"status":"confirmed"}"#)
                .dispatch()
        };
        assert_eq!(Status::Forbidden, set_status().status());
        assert_eq!(
            Status::Forbidden,
            client.get("/api/reservations").dispatch().status()
        );

        signed_in_admin(&client, &db);
        let response = set_status();
        assert_eq!(Status::Ok, response.status());
        let confirmed: json::Reservation = response.into_json().unwrap();
        assert_eq!(json::ReservationStatus::Confirmed, confirmed.status);
        let all: Vec<json::Reservation> = client.get("/api/reservations").dispatch().into_json().unwrap();
        assert_eq!(1, all.len());
    }
}

mod equipments {
    use super::*;

    #[test]
    fn manage_equipment() {
        let (client, db) = setup();
        signed_in_admin(&client, &db);
        let create = |name: &str| {
            client
                .post("/api/equipments")
                .header(ContentType::JSON)
                .body(format!(r#"{{"name":"{name}"}}"#))
                .dispatch()
        };
        let response = create("Vestiaires");
        assert_eq!(Status::Ok, response.status());
        let equipment: json::Equipment = response.into_json().unwrap();
        assert_eq!(Status::Conflict, create("vestiaires").status());

        let response = client
            .put(format!("/api/equipments/{}", equipment.id))
            .header(ContentType::JSON)
            .body(r#"{"name":"Vestiaires","description":"Avec douches"}"#)
            .dispatch();
        assert_eq!(Status::Ok, response.status());

        let all: Vec<json::Equipment> = client.get("/api/equipments").dispatch().into_json().unwrap();
        assert_eq!(1, all.len());
        assert_eq!(Some("Avec douches"), all[0].description.as_deref());

        let response = client
            .delete(format!("/api/equipments/{}", equipment.id))
            .dispatch();
        assert_eq!(Status::Ok, response.status());
        assert!(db.shared().unwrap().all_equipment().unwrap().is_empty());
    }
}

mod settings {
    use super::*;

    #[test]
    fn default_settings() {
        let (client, _) = setup();
        let response = client.get("/api/settings").dispatch();
        assert_eq!(Status::Ok, response.status());
        let settings: json::Settings = response.into_json().unwrap();
        assert_eq!("Maroc Sport Hub", settings.site_name);
    }

    #[test]
    fn update_settings() {
        let (client, db) = setup();
        let mut settings: json::Settings = client.get("/api/settings").dispatch().into_json().unwrap();
        settings.hero_title = "Bougez au Maroc".into();
        let body = serde_json::to_string(&settings).unwrap();

        let response = client
            .put("/api/settings")
            .header(ContentType::JSON)
            .body(body.clone())
            .dispatch();
        assert_eq!(Status::Unauthorized, response.status());

        signed_in_admin(&client, &db);
        let response = client
            .put("/api/settings")
            .header(ContentType::JSON)
            .body(body)
            .dispatch();
        assert_eq!(Status::Ok, response.status());
        let stored: json::Settings = client.get("/api/settings").dispatch().into_json().unwrap();
        assert_eq!("Bougez au Maroc", stored.hero_title);

        settings.site_name = " ".into();
        let response = client
            .put("/api/settings")
            .header(ContentType::JSON)
            .body(serde_json::to_string(&settings).unwrap())
            .dispatch();
        assert_eq!(Status::BadRequest, response.status());
    }
}

mod geocode {
    use super::*;

    fn geocode(client: &Client, query: &str) -> json::Coordinate {
        let response = client.get(format!("/api/geocode?{query}")).dispatch();
        assert_eq!(Status::Ok, response.status());
        response.into_json().unwrap()
    }

    #[test]
    fn resolve_known_address() {
        let (client, _) = setup();
        let pos = geocode(&client, "city=Rabat");
        assert_eq!(34.0209, pos.lat);
        assert_eq!(-6.8416, pos.lng);
    }

    #[test]
    fn fall_back_to_casablanca() {
        let (client, _) = setup();
        for query in ["city=Atlantis", "", "address=Unreachable"] {
            let pos = geocode(&client, query);
            assert_eq!(33.5731, pos.lat);
            assert_eq!(-7.5898, pos.lng);
        }
    }
}
