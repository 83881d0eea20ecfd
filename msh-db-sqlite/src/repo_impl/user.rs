use super::*;

impl<'a> UserRepo for DbReadOnly<'a> {
    fn create_user(&self, _: &User) -> Result<()> {
        Err(read_only_violation())
    }
    fn update_user(&self, _: &User) -> Result<()> {
        Err(read_only_violation())
    }
    fn delete_user(&self, _: &str) -> Result<()> {
        Err(read_only_violation())
    }

    fn all_users(&self) -> Result<Vec<User>> {
        all_users(&mut self.conn.borrow_mut())
    }
    fn count_users(&self) -> Result<usize> {
        count_users(&mut self.conn.borrow_mut())
    }

    fn get_user(&self, id: &str) -> Result<User> {
        get_user(&mut self.conn.borrow_mut(), id)
    }
    fn get_user_by_email(&self, email: &EmailAddress) -> Result<User> {
        get_user_by_email(&mut self.conn.borrow_mut(), email)
    }
    fn try_get_user_by_email(&self, email: &EmailAddress) -> Result<Option<User>> {
        try_get_user_by_email(&mut self.conn.borrow_mut(), email)
    }
}

impl<'a> UserRepo for DbReadWrite<'a> {
    fn create_user(&self, user: &User) -> Result<()> {
        create_user(&mut self.conn.borrow_mut(), user)
    }
    fn update_user(&self, user: &User) -> Result<()> {
        update_user(&mut self.conn.borrow_mut(), user)
    }
    fn delete_user(&self, id: &str) -> Result<()> {
        delete_user(&mut self.conn.borrow_mut(), id)
    }

    fn all_users(&self) -> Result<Vec<User>> {
        all_users(&mut self.conn.borrow_mut())
    }
    fn count_users(&self) -> Result<usize> {
        count_users(&mut self.conn.borrow_mut())
    }

    fn get_user(&self, id: &str) -> Result<User> {
        get_user(&mut self.conn.borrow_mut(), id)
    }
    fn get_user_by_email(&self, email: &EmailAddress) -> Result<User> {
        get_user_by_email(&mut self.conn.borrow_mut(), email)
    }
    fn try_get_user_by_email(&self, email: &EmailAddress) -> Result<Option<User>> {
        try_get_user_by_email(&mut self.conn.borrow_mut(), email)
    }
}

impl<'a> UserRepo for DbConnection<'a> {
    fn create_user(&self, user: &User) -> Result<()> {
        create_user(&mut self.conn.borrow_mut(), user)
    }
    fn update_user(&self, user: &User) -> Result<()> {
        update_user(&mut self.conn.borrow_mut(), user)
    }
    fn delete_user(&self, id: &str) -> Result<()> {
        delete_user(&mut self.conn.borrow_mut(), id)
    }

    fn all_users(&self) -> Result<Vec<User>> {
        all_users(&mut self.conn.borrow_mut())
    }
    fn count_users(&self) -> Result<usize> {
        count_users(&mut self.conn.borrow_mut())
    }

    fn get_user(&self, id: &str) -> Result<User> {
        get_user(&mut self.conn.borrow_mut(), id)
    }
    fn get_user_by_email(&self, email: &EmailAddress) -> Result<User> {
        get_user_by_email(&mut self.conn.borrow_mut(), email)
    }
    fn try_get_user_by_email(&self, email: &EmailAddress) -> Result<Option<User>> {
        try_get_user_by_email(&mut self.conn.borrow_mut(), email)
    }
}

fn new_user(u: &User) -> Result<models::NewUser> {
    let Profile {
        first_name,
        last_name,
        phone,
        gender,
        birth_date,
        job_title,
        city,
        favorite_sports,
    } = &u.profile;
    Ok(models::NewUser {
        id: u.id.to_string(),
        email: u.email.to_string(),
        password: u.password.as_hash().to_string(),
        role: role_to_column(u.role),
        name: u.name.clone(),
        first_name: first_name.clone(),
        last_name: last_name.clone(),
        phone: phone.clone(),
        gender: gender.map(|g| g.to_string()),
        birth_date: birth_date.clone(),
        job_title: job_title.clone(),
        city: city.clone(),
        favorite_sports: to_json(favorite_sports)?,
        created_at: u.created_at.as_millis(),
        updated_at: u.updated_at.as_millis(),
    })
}

impl TryFrom<models::UserEntity> for User {
    type Error = repo::Error;
    fn try_from(from: models::UserEntity) -> Result<Self> {
        let models::UserEntity {
            id,
            email,
            password,
            role,
            name,
            first_name,
            last_name,
            phone,
            gender,
            birth_date,
            job_title,
            city,
            favorite_sports,
            created_at,
            updated_at,
        } = from;
        Ok(User {
            id: id.into(),
            email: EmailAddress::new_unchecked(email),
            password: Password::from_hash(password),
            role: role_from_column(role)?,
            name,
            profile: Profile {
                first_name,
                last_name,
                phone,
                gender: parse_optional_column("gender", gender)?,
                birth_date,
                job_title,
                city,
                favorite_sports: from_json(&favorite_sports)?,
            },
            created_at: Timestamp::from_millis(created_at),
            updated_at: Timestamp::from_millis(updated_at),
        })
    }
}

fn create_user(conn: &mut SqliteConnection, u: &User) -> Result<()> {
    let new_user = new_user(u)?;
    diesel::insert_into(schema::users::table)
        .values(&new_user)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn update_user(conn: &mut SqliteConnection, u: &User) -> Result<()> {
    use schema::users::dsl;
    let new_user = new_user(u)?;
    let count = diesel::update(dsl::users.filter(dsl::id.eq(u.id.as_str())))
        .set(&new_user)
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn delete_user(conn: &mut SqliteConnection, id: &str) -> Result<()> {
    use schema::users::dsl;
    let count = diesel::delete(dsl::users.filter(dsl::id.eq(id)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn get_user(conn: &mut SqliteConnection, id: &str) -> Result<User> {
    use schema::users::dsl;
    dsl::users
        .filter(dsl::id.eq(id))
        .first::<models::UserEntity>(conn)
        .map_err(from_diesel_err)?
        .try_into()
}

fn get_user_by_email(conn: &mut SqliteConnection, email: &EmailAddress) -> Result<User> {
    try_get_user_by_email(conn, email)?.ok_or(repo::Error::NotFound)
}

fn try_get_user_by_email(conn: &mut SqliteConnection, email: &EmailAddress) -> Result<Option<User>> {
    use schema::users::dsl;
    dsl::users
        .filter(dsl::email.eq(email.as_str()))
        .first::<models::UserEntity>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(TryInto::try_into)
        .transpose()
}

fn all_users(conn: &mut SqliteConnection) -> Result<Vec<User>> {
    use schema::users::dsl;
    dsl::users
        .order_by(dsl::email)
        .load::<models::UserEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(TryInto::try_into)
        .collect()
}

fn count_users(conn: &mut SqliteConnection) -> Result<usize> {
    use schema::users::dsl;
    Ok(dsl::users
        .select(diesel::dsl::count(dsl::id))
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}
