use super::*;

impl<'a> EquipmentRepo for DbReadOnly<'a> {
    fn create_equipment(&self, _: &Equipment) -> Result<()> {
        Err(read_only_violation())
    }
    fn update_equipment(&self, _: &Equipment) -> Result<()> {
        Err(read_only_violation())
    }
    fn delete_equipment(&self, _: &str) -> Result<()> {
        Err(read_only_violation())
    }

    fn get_equipment(&self, id: &str) -> Result<Equipment> {
        get_equipment(&mut self.conn.borrow_mut(), id)
    }
    fn all_equipment(&self) -> Result<Vec<Equipment>> {
        all_equipment(&mut self.conn.borrow_mut())
    }
}

impl<'a> EquipmentRepo for DbReadWrite<'a> {
    fn create_equipment(&self, equipment: &Equipment) -> Result<()> {
        create_equipment(&mut self.conn.borrow_mut(), equipment)
    }
    fn update_equipment(&self, equipment: &Equipment) -> Result<()> {
        update_equipment(&mut self.conn.borrow_mut(), equipment)
    }
    fn delete_equipment(&self, id: &str) -> Result<()> {
        delete_equipment(&mut self.conn.borrow_mut(), id)
    }

    fn get_equipment(&self, id: &str) -> Result<Equipment> {
        get_equipment(&mut self.conn.borrow_mut(), id)
    }
    fn all_equipment(&self) -> Result<Vec<Equipment>> {
        all_equipment(&mut self.conn.borrow_mut())
    }
}

impl<'a> EquipmentRepo for DbConnection<'a> {
    fn create_equipment(&self, equipment: &Equipment) -> Result<()> {
        create_equipment(&mut self.conn.borrow_mut(), equipment)
    }
    fn update_equipment(&self, equipment: &Equipment) -> Result<()> {
        update_equipment(&mut self.conn.borrow_mut(), equipment)
    }
    fn delete_equipment(&self, id: &str) -> Result<()> {
        delete_equipment(&mut self.conn.borrow_mut(), id)
    }

    fn get_equipment(&self, id: &str) -> Result<Equipment> {
        get_equipment(&mut self.conn.borrow_mut(), id)
    }
    fn all_equipment(&self) -> Result<Vec<Equipment>> {
        all_equipment(&mut self.conn.borrow_mut())
    }
}

impl From<&Equipment> for models::NewEquipment {
    fn from(e: &Equipment) -> Self {
        Self {
            id: e.id.to_string(),
            name: e.name.clone(),
            description: e.description.clone(),
            created_at: e.created_at.as_millis(),
            updated_at: e.updated_at.as_millis(),
        }
    }
}

impl From<models::EquipmentEntity> for Equipment {
    fn from(from: models::EquipmentEntity) -> Self {
        let models::EquipmentEntity {
            id,
            name,
            description,
            created_at,
            updated_at,
        } = from;
        Self {
            id: id.into(),
            name,
            description,
            created_at: Timestamp::from_millis(created_at),
            updated_at: Timestamp::from_millis(updated_at),
        }
    }
}

fn create_equipment(conn: &mut SqliteConnection, e: &Equipment) -> Result<()> {
    diesel::insert_into(schema::equipments::table)
        .values(&models::NewEquipment::from(e))
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn update_equipment(conn: &mut SqliteConnection, e: &Equipment) -> Result<()> {
    use schema::equipments::dsl;
    let count = diesel::update(dsl::equipments.filter(dsl::id.eq(e.id.as_str())))
        .set(&models::NewEquipment::from(e))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn delete_equipment(conn: &mut SqliteConnection, id: &str) -> Result<()> {
    use schema::equipments::dsl;
    let count = diesel::delete(dsl::equipments.filter(dsl::id.eq(id)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn get_equipment(conn: &mut SqliteConnection, id: &str) -> Result<Equipment> {
    use schema::equipments::dsl;
    Ok(dsl::equipments
        .filter(dsl::id.eq(id))
        .first::<models::EquipmentEntity>(conn)
        .map_err(from_diesel_err)?
        .into())
}

fn all_equipment(conn: &mut SqliteConnection) -> Result<Vec<Equipment>> {
    use schema::equipments::dsl;
    Ok(dsl::equipments
        .order_by(dsl::name)
        .load::<models::EquipmentEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}
