use super::*;

pub fn change_user_role(
    connections: &sqlite::Connections,
    account: &User,
    user_id: &str,
    role: Role,
) -> Result<User> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::change_user_role(conn, account, user_id, role).map_err(|err| {
            warn!("Failed to change role of user {user_id}: {err}");
            err
        })
    })?)
}

/// Assigns a role without checking the permissions of an account.
///
/// Only intended for bootstrapping administrators from the command line.
pub fn set_user_role(
    connections: &sqlite::Connections,
    email: &EmailAddress,
    role: Role,
) -> Result<User> {
    Ok(connections.exclusive()?.transaction(|conn| {
        let mut user = conn
            .try_get_user_by_email(email)?
            .ok_or(usecases::Error::UserDoesNotExist)?;
        user.role = role;
        user.updated_at = Timestamp::now();
        conn.update_user(&user)?;
        info!("Assigned role {role} to user {email}");
        Ok::<_, usecases::Error>(user)
    })?)
}
