use super::prelude::*;
use crate::authorization::can_access;

/// Loads the signed-in user and checks the role against the required ones.
///
/// An empty list of required roles only checks that the user exists.
pub fn authorize_user_by_email<R: UserRepo>(
    repo: &R,
    email: &EmailAddress,
    required: &[Role],
) -> Result<User> {
    let user = repo
        .try_get_user_by_email(email)?
        .ok_or(Error::Unauthorized)?;
    if required.is_empty() || can_access(Some(user.role), required) {
        Ok(user)
    } else {
        log::debug!("User {} with role {} has no access", user.email, user.role);
        Err(Error::Forbidden)
    }
}
