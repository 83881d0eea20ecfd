use super::*;

#[get("/equipments")]
pub fn get_equipments(db: sqlite::Connections) -> Result<Vec<json::Equipment>> {
    let equipment = db.shared()?.all_equipment()?;
    Ok(Json(equipment.into_iter().map(Into::into).collect()))
}

#[post("/equipments", format = "application/json", data = "<data>")]
pub fn post_equipment(
    db: sqlite::Connections,
    auth: Auth,
    data: JsonResult<json::NewEquipment>,
) -> Result<json::Equipment> {
    auth.user_with_roles(&db.shared()?, ADMIN_ROLES)?;
    let new_equipment = from_json::new_equipment(data?.into_inner());
    let equipment = usecases::create_equipment(&db.exclusive()?, new_equipment)?;
    Ok(Json(equipment.into()))
}

#[put("/equipments/<id>", format = "application/json", data = "<data>")]
pub fn put_equipment(
    db: sqlite::Connections,
    auth: Auth,
    id: &str,
    data: JsonResult<json::NewEquipment>,
) -> Result<json::Equipment> {
    auth.user_with_roles(&db.shared()?, ADMIN_ROLES)?;
    let new_equipment = from_json::new_equipment(data?.into_inner());
    let equipment = usecases::update_equipment(&db.exclusive()?, id, new_equipment)?;
    Ok(Json(equipment.into()))
}

#[delete("/equipments/<id>")]
pub fn delete_equipment(db: sqlite::Connections, auth: Auth, id: &str) -> Result<()> {
    auth.user_with_roles(&db.shared()?, ADMIN_ROLES)?;
    usecases::delete_equipment(&db.exclusive()?, id)?;
    Ok(Json(()))
}
