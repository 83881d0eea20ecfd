use rocket::FromForm;

use super::*;

/// Comma separated lists and flags of the catalog search.
#[derive(Debug, Default, FromForm)]
pub struct FacilitySearch {
    sports: Option<String>,
    regions: Option<String>,
    equipment: Option<String>,
    indoor: Option<bool>,
    outdoor: Option<bool>,
    accessible: Option<bool>,
    text: Option<String>,
}

impl FacilitySearch {
    fn into_filter(self) -> crate::core::util::filter::FacilityFilter {
        let Self {
            sports,
            regions,
            equipment,
            indoor,
            outdoor,
            accessible,
            text,
        } = self;
        from_json::facility_filter(
            sports.as_deref(),
            regions.as_deref(),
            equipment.as_deref(),
            indoor.unwrap_or_default(),
            outdoor.unwrap_or_default(),
            accessible.unwrap_or_default(),
            text,
        )
    }
}

#[get("/facilities?<search..>")]
pub fn get_facilities(
    db: sqlite::Connections,
    search: FacilitySearch,
) -> Result<Vec<json::Facility>> {
    let filter = search.into_filter();
    let facilities = usecases::load_facilities(&db.shared()?, &filter)?;
    Ok(Json(facilities.into_iter().map(Into::into).collect()))
}

#[get("/facilities/filter-options")]
pub fn get_filter_options(db: sqlite::Connections) -> Result<json::FilterOptions> {
    let options = usecases::load_filter_options(&db.shared()?)?;
    Ok(Json(to_json::filter_options(options)))
}

#[get("/facilities/<id>", rank = 2)]
pub fn get_facility(db: sqlite::Connections, id: &str) -> Result<json::Facility> {
    let facility = usecases::get_facility(&db.shared()?, id)?;
    Ok(Json(facility.into()))
}

#[post("/facilities", format = "application/json", data = "<details>")]
pub async fn post_facility(
    db: sqlite::Connections,
    auth: Auth,
    geo: &State<GeoCoding>,
    cfg: &State<Cfg>,
    details: JsonResult<'_, json::FacilityDetails>,
) -> Result<json::Facility> {
    {
        auth.user_with_roles(&db.shared()?, ADMIN_ROLES)?;
    }
    let details = from_json::try_facility_details(details?.into_inner())?;
    let geo = GeoCoding::clone(geo);
    let country = cfg.geocoding_country.clone();
    let facility = run_blocking(move || {
        flows::create_facility(db.pool(), &*geo, country.as_deref(), details)
    })
    .await?;
    Ok(Json(facility.into()))
}

#[put("/facilities/<id>", format = "application/json", data = "<details>")]
pub async fn put_facility(
    db: sqlite::Connections,
    auth: Auth,
    geo: &State<GeoCoding>,
    cfg: &State<Cfg>,
    id: &str,
    details: JsonResult<'_, json::FacilityDetails>,
) -> Result<json::Facility> {
    {
        auth.user_with_roles(&db.shared()?, ADMIN_ROLES)?;
    }
    let details = from_json::try_facility_details(details?.into_inner())?;
    let geo = GeoCoding::clone(geo);
    let country = cfg.geocoding_country.clone();
    let id = id.to_string();
    let facility = run_blocking(move || {
        flows::update_facility(db.pool(), &*geo, country.as_deref(), &id, details)
    })
    .await?;
    Ok(Json(facility.into()))
}

#[delete("/facilities/<id>")]
pub fn delete_facility(db: sqlite::Connections, auth: Auth, id: &str) -> Result<()> {
    auth.user_with_roles(&db.shared()?, ADMIN_ROLES)?;
    usecases::delete_facility(&db.exclusive()?, id)?;
    Ok(Json(()))
}

#[post("/facilities/import/headers", format = "application/json", data = "<data>")]
pub fn post_import_headers(
    db: sqlite::Connections,
    auth: Auth,
    data: JsonResult<json::ImportRequest>,
) -> Result<json::ImportHeaders> {
    let data = data?.into_inner();
    auth.user_with_roles(&db.shared()?, ADMIN_ROLES)?;
    let (headers, suggested) = flows::read_import_headers(data.csv.as_bytes())?;
    Ok(Json(to_json::import_headers(headers, &suggested)))
}

#[post("/facilities/import", format = "application/json", data = "<data>")]
pub fn post_import(
    db: sqlite::Connections,
    auth: Auth,
    data: JsonResult<json::ImportRequest>,
) -> Result<json::ImportReport> {
    let json::ImportRequest { csv, mapping } = data?.into_inner();
    let admin = auth.user_with_roles(&db.shared()?, ADMIN_ROLES)?;
    let mapping = if mapping.is_empty() {
        None
    } else {
        Some(from_json::try_column_mapping(&mapping)?)
    };
    info!("Facility import started by {}", admin.email);
    let report = flows::import_facilities(db.pool(), csv.as_bytes(), mapping)?;
    Ok(Json(to_json::import_report(report)))
}
