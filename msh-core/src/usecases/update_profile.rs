use super::prelude::*;
use crate::util::validate::AutoCorrect;

#[derive(Debug, Clone)]
pub struct UpdateProfile {
    pub name: String,
    pub profile: Profile,
}

pub fn update_profile<R: UserRepo>(repo: &R, user_id: &str, update: UpdateProfile) -> Result<User> {
    let UpdateProfile { name, profile } = update;
    let name = name.trim();
    if name.is_empty() {
        return Err(Error::Name);
    }
    let mut user = repo.get_user(user_id)?;
    user.name = name.to_string();
    user.profile = profile.auto_correct();
    user.updated_at = Timestamp::now();
    repo.update_user(&user)?;
    Ok(user)
}
