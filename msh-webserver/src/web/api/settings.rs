use super::*;

#[get("/settings")]
pub fn get_settings(db: sqlite::Connections) -> Result<json::Settings> {
    let settings = usecases::load_settings(&db.shared()?)?;
    Ok(Json(settings.into()))
}

#[put("/settings", format = "application/json", data = "<data>")]
pub fn put_settings(
    db: sqlite::Connections,
    auth: Auth,
    data: JsonResult<json::Settings>,
) -> Result<json::Settings> {
    auth.user_with_roles(&db.shared()?, ADMIN_ROLES)?;
    let settings = data?.into_inner().into();
    let settings = usecases::update_settings(&db.exclusive()?, settings)?;
    Ok(Json(settings.into()))
}
