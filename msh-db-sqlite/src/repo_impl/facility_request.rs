use super::*;

impl<'a> FacilityRequestRepo for DbReadOnly<'a> {
    fn create_facility_request(&self, _: &FacilityRequest) -> Result<()> {
        Err(read_only_violation())
    }
    fn update_facility_request(&self, _: &FacilityRequest) -> Result<()> {
        Err(read_only_violation())
    }
    fn delete_facility_request(&self, _: &str) -> Result<()> {
        Err(read_only_violation())
    }

    fn get_facility_request(&self, id: &str) -> Result<FacilityRequest> {
        get_facility_request(&mut self.conn.borrow_mut(), id)
    }
    fn all_facility_requests(&self) -> Result<Vec<FacilityRequest>> {
        load_facility_requests(&mut self.conn.borrow_mut(), None)
    }
    fn facility_requests_of_user(&self, user_id: &str) -> Result<Vec<FacilityRequest>> {
        load_facility_requests(&mut self.conn.borrow_mut(), Some(user_id))
    }
}

impl<'a> FacilityRequestRepo for DbReadWrite<'a> {
    fn create_facility_request(&self, request: &FacilityRequest) -> Result<()> {
        create_facility_request(&mut self.conn.borrow_mut(), request)
    }
    fn update_facility_request(&self, request: &FacilityRequest) -> Result<()> {
        update_facility_request(&mut self.conn.borrow_mut(), request)
    }
    fn delete_facility_request(&self, id: &str) -> Result<()> {
        delete_facility_request(&mut self.conn.borrow_mut(), id)
    }

    fn get_facility_request(&self, id: &str) -> Result<FacilityRequest> {
        get_facility_request(&mut self.conn.borrow_mut(), id)
    }
    fn all_facility_requests(&self) -> Result<Vec<FacilityRequest>> {
        load_facility_requests(&mut self.conn.borrow_mut(), None)
    }
    fn facility_requests_of_user(&self, user_id: &str) -> Result<Vec<FacilityRequest>> {
        load_facility_requests(&mut self.conn.borrow_mut(), Some(user_id))
    }
}

impl<'a> FacilityRequestRepo for DbConnection<'a> {
    fn create_facility_request(&self, request: &FacilityRequest) -> Result<()> {
        create_facility_request(&mut self.conn.borrow_mut(), request)
    }
    fn update_facility_request(&self, request: &FacilityRequest) -> Result<()> {
        update_facility_request(&mut self.conn.borrow_mut(), request)
    }
    fn delete_facility_request(&self, id: &str) -> Result<()> {
        delete_facility_request(&mut self.conn.borrow_mut(), id)
    }

    fn get_facility_request(&self, id: &str) -> Result<FacilityRequest> {
        get_facility_request(&mut self.conn.borrow_mut(), id)
    }
    fn all_facility_requests(&self) -> Result<Vec<FacilityRequest>> {
        load_facility_requests(&mut self.conn.borrow_mut(), None)
    }
    fn facility_requests_of_user(&self, user_id: &str) -> Result<Vec<FacilityRequest>> {
        load_facility_requests(&mut self.conn.borrow_mut(), Some(user_id))
    }
}

fn new_facility_request(r: &FacilityRequest) -> Result<models::NewFacilityRequest> {
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
    } = DetailColumns::try_from_details(&r.details)?;
    Ok(models::NewFacilityRequest {
        id: r.id.to_string(),
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
        requested_by: r.requested_by.to_string(),
        requester_email: r.requester_email.to_string(),
        status: r.status.to_string(),
        rejection_reason: r.rejection_reason.clone(),
        attachment_urls: to_json(&r.attachment_urls)?,
        facility_id: r.facility_id.as_ref().map(ToString::to_string),
        created_at: r.created_at.as_millis(),
        updated_at: r.updated_at.as_millis(),
    })
}

impl TryFrom<models::FacilityRequestEntity> for FacilityRequest {
    type Error = repo::Error;
    fn try_from(from: models::FacilityRequestEntity) -> Result<Self> {
        let models::FacilityRequestEntity {
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
            requested_by,
            requester_email,
            status,
            rejection_reason,
            attachment_urls,
            facility_id,
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
        Ok(FacilityRequest {
            id: id.into(),
            details,
            requested_by: requested_by.into(),
            requester_email: EmailAddress::new_unchecked(requester_email),
            status: parse_column("request status", &status)?,
            rejection_reason,
            attachment_urls: from_json(&attachment_urls)?,
            facility_id: facility_id.map(Into::into),
            created_at: Timestamp::from_millis(created_at),
            updated_at: Timestamp::from_millis(updated_at),
        })
    }
}

fn create_facility_request(conn: &mut SqliteConnection, r: &FacilityRequest) -> Result<()> {
    let new_request = new_facility_request(r)?;
    diesel::insert_into(schema::facility_requests::table)
        .values(&new_request)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn update_facility_request(conn: &mut SqliteConnection, r: &FacilityRequest) -> Result<()> {
    use schema::facility_requests::dsl;
    let new_request = new_facility_request(r)?;
    let count = diesel::update(dsl::facility_requests.filter(dsl::id.eq(r.id.as_str())))
        .set(&new_request)
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn delete_facility_request(conn: &mut SqliteConnection, id: &str) -> Result<()> {
    use schema::facility_requests::dsl;
    let count = diesel::delete(dsl::facility_requests.filter(dsl::id.eq(id)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn get_facility_request(conn: &mut SqliteConnection, id: &str) -> Result<FacilityRequest> {
    use schema::facility_requests::dsl;
    dsl::facility_requests
        .filter(dsl::id.eq(id))
        .first::<models::FacilityRequestEntity>(conn)
        .map_err(from_diesel_err)?
        .try_into()
}

fn load_facility_requests(
    conn: &mut SqliteConnection,
    requested_by: Option<&str>,
) -> Result<Vec<FacilityRequest>> {
    use schema::facility_requests::dsl;
    let mut query = dsl::facility_requests
        .order_by(dsl::created_at.desc())
        .into_boxed();
    if let Some(user_id) = requested_by {
        query = query.filter(dsl::requested_by.eq(user_id));
    }
    query
        .load::<models::FacilityRequestEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(TryInto::try_into)
        .collect()
}
