use super::prelude::*;
use crate::util::validate;

#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: EmailAddress,
    pub password: String,
    pub name: String,
}

pub fn create_new_user<R: UserRepo>(repo: &R, u: NewUser) -> Result<User> {
    let password = u.password.parse::<Password>()?;
    if !validate::is_valid_email(u.email.as_str()) {
        return Err(Error::EmailAddress);
    }
    if repo.try_get_user_by_email(&u.email)?.is_some() {
        return Err(Error::UserExists);
    }
    let now = Timestamp::now();
    let new_user = User {
        id: Id::new(),
        email: u.email,
        password,
        role: Role::User,
        name: u.name.trim().to_string(),
        profile: Profile::default(),
        created_at: now,
        updated_at: now,
    };
    log::debug!("Creating new user: email = {}", new_user.email);
    repo.create_user(&new_user)?;
    Ok(new_user)
}

#[cfg(test)]
mod tests {
    use super::{
        super::{tests::MockDb, *},
        *,
    };

    fn new_user(email: &str, password: &str) -> NewUser {
        NewUser {
            email: EmailAddress::new_unchecked(email.into()),
            password: password.into(),
            name: "Yassine".into(),
        }
    }

    #[test]
    fn create_two_users() {
        let db = MockDb::default();
        assert!(create_new_user(&db, new_user("foo@bar.ma", "secret1")).is_ok());
        assert!(create_new_user(&db, new_user("baz@bar.ma", "secret2")).is_ok());
        assert!(db
            .get_user_by_email(&EmailAddress::new_unchecked("foo@bar.ma".into()))
            .is_ok());
        assert!(db
            .try_get_user_by_email(&EmailAddress::new_unchecked("nobody@bar.ma".into()))
            .unwrap()
            .is_none());
    }

    #[test]
    fn new_users_have_the_user_role() {
        let db = MockDb::default();
        let user = create_new_user(&db, new_user("foo@bar.ma", "secret")).unwrap();
        assert_eq!(user.role, Role::User);
    }

    #[test]
    fn create_user_with_invalid_password() {
        let db = MockDb::default();
        assert!(matches!(
            create_new_user(&db, new_user("foo@bar.ma", "hello")),
            Err(Error::Password)
        ));
        assert!(create_new_user(&db, new_user("foo@bar.ma", "valid pass")).is_ok());
    }

    #[test]
    fn create_user_with_invalid_email() {
        let db = MockDb::default();
        assert!(create_new_user(&db, new_user("", "secret")).is_err());
        assert!(create_new_user(&db, new_user("fooo@", "secret")).is_err());
        assert!(create_new_user(&db, new_user("fooo@bar.ma", "secret")).is_ok());
    }

    #[test]
    fn create_user_with_existing_email() {
        let db = MockDb::default();
        assert!(create_new_user(&db, new_user("baz@foo.ma", "secret")).is_ok());
        assert!(matches!(
            create_new_user(&db, new_user("baz@foo.ma", "secret")),
            Err(Error::UserExists)
        ));
    }

    #[test]
    fn encrypt_user_password() {
        let db = MockDb::default();
        assert!(create_new_user(&db, new_user("foo@bar.ma", "secret")).is_ok());
        let users = db.users.borrow();
        assert_ne!(users[0].password.as_hash(), "secret");
        assert!(users[0].password.verify("secret"));
    }
}
