use super::*;

impl<'a> FacilityRepo for DbReadOnly<'a> {
    fn create_facility(&self, _: &Facility) -> Result<()> {
        Err(read_only_violation())
    }
    fn update_facility(&self, _: &Facility) -> Result<()> {
        Err(read_only_violation())
    }
    fn delete_facility(&self, _: &str) -> Result<()> {
        Err(read_only_violation())
    }

    fn get_facility(&self, id: &str) -> Result<Facility> {
        get_facility(&mut self.conn.borrow_mut(), id)
    }
    fn all_facilities(&self) -> Result<Vec<Facility>> {
        all_facilities(&mut self.conn.borrow_mut())
    }
    fn count_facilities(&self) -> Result<usize> {
        count_facilities(&mut self.conn.borrow_mut())
    }
}

impl<'a> FacilityRepo for DbReadWrite<'a> {
    fn create_facility(&self, facility: &Facility) -> Result<()> {
        create_facility(&mut self.conn.borrow_mut(), facility)
    }
    fn update_facility(&self, facility: &Facility) -> Result<()> {
        update_facility(&mut self.conn.borrow_mut(), facility)
    }
    fn delete_facility(&self, id: &str) -> Result<()> {
        delete_facility(&mut self.conn.borrow_mut(), id)
    }

    fn get_facility(&self, id: &str) -> Result<Facility> {
        get_facility(&mut self.conn.borrow_mut(), id)
    }
    fn all_facilities(&self) -> Result<Vec<Facility>> {
        all_facilities(&mut self.conn.borrow_mut())
    }
    fn count_facilities(&self) -> Result<usize> {
        count_facilities(&mut self.conn.borrow_mut())
    }
}

impl<'a> FacilityRepo for DbConnection<'a> {
    fn create_facility(&self, facility: &Facility) -> Result<()> {
        create_facility(&mut self.conn.borrow_mut(), facility)
    }
    fn update_facility(&self, facility: &Facility) -> Result<()> {
        update_facility(&mut self.conn.borrow_mut(), facility)
    }
    fn delete_facility(&self, id: &str) -> Result<()> {
        delete_facility(&mut self.conn.borrow_mut(), id)
    }

    fn get_facility(&self, id: &str) -> Result<Facility> {
        get_facility(&mut self.conn.borrow_mut(), id)
    }
    fn all_facilities(&self) -> Result<Vec<Facility>> {
        all_facilities(&mut self.conn.borrow_mut())
    }
    fn count_facilities(&self) -> Result<usize> {
        count_facilities(&mut self.conn.borrow_mut())
    }
}

fn new_facility(f: &Facility) -> Result<models::NewFacility> {
    let DetailColumns {
        name,
        description,
        street,
        commune,
        city,
        province,
        region,
        lat,
        lng,
        sports,
        equipment,
        facility_type,
        accessible,
        establishment_condition,
        building_condition,
        equipment_condition,
        capacity,
        staff_count,
        surface_area,
        hourly_rate,
    } = DetailColumns::try_from_details(&f.details)?;
    Ok(models::NewFacility {
        id: f.id.to_string(),
        name,
        description,
        street,
        commune,
        city,
        province,
        region,
        lat,
        lng,
        sports,
        equipment,
        facility_type,
        accessible,
        establishment_condition,
        building_condition,
        equipment_condition,
        capacity,
        staff_count,
        surface_area,
        hourly_rate,
        created_at: f.created_at.as_millis(),
        updated_at: f.updated_at.as_millis(),
    })
}

impl TryFrom<models::FacilityEntity> for Facility {
    type Error = repo::Error;
    fn try_from(from: models::FacilityEntity) -> Result<Self> {
        let models::FacilityEntity {
            id,
            name,
            description,
            street,
            commune,
            city,
            province,
            region,
            lat,
            lng,
            sports,
            equipment,
            facility_type,
            accessible,
            establishment_condition,
            building_condition,
            equipment_condition,
            capacity,
            staff_count,
            surface_area,
            hourly_rate,
            created_at,
            updated_at,
        } = from;
        let details = DetailColumns {
            name,
            description,
            street,
            commune,
            city,
            province,
            region,
            lat,
            lng,
            sports,
            equipment,
            facility_type,
            accessible,
            establishment_condition,
            building_condition,
            equipment_condition,
            capacity,
            staff_count,
            surface_area,
            hourly_rate,
        }
        .try_into_details()?;
        Ok(Facility {
            id: id.into(),
            details,
            created_at: Timestamp::from_millis(created_at),
            updated_at: Timestamp::from_millis(updated_at),
        })
    }
}

fn create_facility(conn: &mut SqliteConnection, f: &Facility) -> Result<()> {
    let new_facility = new_facility(f)?;
    diesel::insert_into(schema::facilities::table)
        .values(&new_facility)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn update_facility(conn: &mut SqliteConnection, f: &Facility) -> Result<()> {
    use schema::facilities::dsl;
    let new_facility = new_facility(f)?;
    let count = diesel::update(dsl::facilities.filter(dsl::id.eq(f.id.as_str())))
        .set(&new_facility)
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn delete_facility(conn: &mut SqliteConnection, id: &str) -> Result<()> {
    use schema::facilities::dsl;
    let count = diesel::delete(dsl::facilities.filter(dsl::id.eq(id)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn get_facility(conn: &mut SqliteConnection, id: &str) -> Result<Facility> {
    use schema::facilities::dsl;
    dsl::facilities
        .filter(dsl::id.eq(id))
        .first::<models::FacilityEntity>(conn)
        .map_err(from_diesel_err)?
        .try_into()
}

fn all_facilities(conn: &mut SqliteConnection) -> Result<Vec<Facility>> {
    use schema::facilities::dsl;
    dsl::facilities
        .order_by((dsl::created_at, dsl::name))
        .load::<models::FacilityEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(TryInto::try_into)
        .collect()
}

fn count_facilities(conn: &mut SqliteConnection) -> Result<usize> {
    use schema::facilities::dsl;
    Ok(dsl::facilities
        .select(diesel::dsl::count(dsl::id))
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}
