use super::*;

#[post("/facility-requests", format = "application/json", data = "<new_request>")]
pub async fn post_facility_request(
    db: sqlite::Connections,
    account: Account,
    geo: &State<GeoCoding>,
    cfg: &State<Cfg>,
    new_request: JsonResult<'_, json::NewFacilityRequest>,
) -> Result<json::FacilityRequest> {
    let json::NewFacilityRequest {
        details,
        attachment_urls,
    } = new_request?.into_inner();
    let new_request = usecases::NewFacilityRequest {
        details: from_json::try_facility_details(details)?,
        attachment_urls,
    };
    let requester = {
        let db = db.shared()?;
        account.user(&db)?
    };
    let geo = GeoCoding::clone(geo);
    let country = cfg.geocoding_country.clone();
    let request = run_blocking(move || {
        flows::create_facility_request(
            db.pool(),
            &*geo,
            country.as_deref(),
            &requester,
            new_request,
        )
    })
    .await?;
    Ok(Json(request.into()))
}

#[get("/facility-requests/mine")]
pub fn get_own_facility_requests(
    db: sqlite::Connections,
    auth: Auth,
) -> Result<Vec<json::FacilityRequest>> {
    let db = db.shared()?;
    let user = auth.user(&db)?;
    let requests = usecases::facility_requests_of_user(&db, &user)?;
    Ok(Json(requests.into_iter().map(Into::into).collect()))
}

#[get("/facility-requests")]
pub fn get_facility_requests(
    db: sqlite::Connections,
    auth: Auth,
) -> Result<Vec<json::FacilityRequest>> {
    let db = db.shared()?;
    auth.user_with_roles(&db, ADMIN_ROLES)?;
    let requests = db.all_facility_requests()?;
    Ok(Json(requests.into_iter().map(Into::into).collect()))
}

#[post("/facility-requests/<id>/approve")]
pub async fn post_approve(
    db: sqlite::Connections,
    auth: Auth,
    geo: &State<GeoCoding>,
    cfg: &State<Cfg>,
    id: &str,
) -> Result<json::ApprovedFacilityRequest> {
    {
        auth.user_with_roles(&db.shared()?, ADMIN_ROLES)?;
    }
    let geo = GeoCoding::clone(geo);
    let country = cfg.geocoding_country.clone();
    let id = id.to_string();
    let (request, facility) = run_blocking(move || {
        flows::approve_facility_request(db.pool(), &*geo, country.as_deref(), &id)
    })
    .await?;
    Ok(Json(json::ApprovedFacilityRequest {
        request: request.into(),
        facility: facility.into(),
    }))
}

#[post("/facility-requests/<id>/reject", format = "application/json", data = "<data>")]
pub fn post_reject(
    db: sqlite::Connections,
    auth: Auth,
    id: &str,
    data: JsonResult<json::RejectFacilityRequest>,
) -> Result<json::FacilityRequest> {
    auth.user_with_roles(&db.shared()?, ADMIN_ROLES)?;
    let json::RejectFacilityRequest { reason } = data?.into_inner();
    let request = flows::reject_facility_request(db.pool(), id, &reason)?;
    Ok(Json(request.into()))
}

#[delete("/facility-requests/<id>")]
pub fn delete_facility_request(
    db: sqlite::Connections,
    auth: Auth,
    storage: &State<Storage>,
    id: &str,
) -> Result<json::FacilityRequest> {
    auth.user_with_roles(&db.shared()?, ADMIN_ROLES)?;
    let request = flows::delete_facility_request(db.pool(), &*storage.0, id)?;
    Ok(Json(request.into()))
}
