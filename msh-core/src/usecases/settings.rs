use super::prelude::*;
use crate::util::validate::Validate;

/// Returns the stored settings or the defaults if there are none.
pub fn load_settings<R: SettingsRepo>(repo: &R) -> Result<Settings> {
    Ok(repo.load_settings()?.unwrap_or_default())
}

pub fn update_settings<R: SettingsRepo>(repo: &R, mut settings: Settings) -> Result<Settings> {
    settings.site_name = settings.site_name.trim().to_string();
    settings.validate()?;
    settings.updated_at = Some(Timestamp::now());
    repo.save_settings(&settings)?;
    log::info!("Updated site settings");
    Ok(settings)
}
