use super::prelude::*;
use crate::authorization::{can_access, SUPER_ADMIN_ROLES};

pub fn delete_user<R: UserRepo>(repo: &R, account: &User, user_id: &str) -> Result<()> {
    if !can_access(Some(account.role), SUPER_ADMIN_ROLES) || account.id.as_str() == user_id {
        return Err(Error::Forbidden);
    }
    let user = repo.get_user(user_id)?;
    log::info!("Deleting user {}", user.email);
    Ok(repo.delete_user(user_id)?)
}
