use super::prelude::*;

pub struct Credentials<'a> {
    pub email: &'a EmailAddress,
    pub password: &'a str,
}

pub fn login_with_email<R>(repo: &R, login: &Credentials) -> Result<User>
where
    R: UserRepo,
{
    match repo.try_get_user_by_email(login.email)? {
        Some(user) if user.password.verify(login.password) => Ok(user),
        _ => Err(Error::Credentials),
    }
}
