use super::prelude::*;
use crate::authorization::{can_access, SUPER_ADMIN_ROLES};

pub fn change_user_role<R: UserRepo>(repo: &R, account: &User, user_id: &str, role: Role) -> Result<User> {
    if !can_access(Some(account.role), SUPER_ADMIN_ROLES) {
        return Err(Error::Forbidden);
    }
    if account.id.as_str() == user_id {
        log::warn!("{} tried to change the own role", account.email);
        return Err(Error::Forbidden);
    }
    let mut user = repo.get_user(user_id)?;
    log::info!("Changing role of {} from {} to {}", user.email, user.role, role);
    user.role = role;
    user.updated_at = Timestamp::now();
    repo.update_user(&user)?;
    Ok(user)
}
