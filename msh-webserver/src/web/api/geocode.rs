use super::*;
use msh_core::gateways::geocode::GeocodingQuery;

/// Resolves an address for the map preview.
///
/// Always answers with a coordinate, unknown addresses are
/// placed at the fallback location.
#[get("/geocode?<address>&<city>&<region>")]
pub async fn get_geocode(
    geo: &State<GeoCoding>,
    cfg: &State<Cfg>,
    address: Option<String>,
    city: Option<String>,
    region: Option<String>,
) -> Result<json::Coordinate> {
    let mut query = GeocodingQuery {
        address,
        city,
        region,
        country: None,
    };
    // A country alone is no address.
    if !query.is_blank() {
        query.country = cfg.geocoding_country.clone();
    }
    let geo = GeoCoding::clone(geo);
    let pos = run_blocking(move || {
        Ok::<_, AppError>(usecases::resolve_coordinate_or_fallback(&*geo, &query))
    })
    .await?;
    Ok(Json(pos.into()))
}
