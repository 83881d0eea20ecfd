use super::*;

impl<'a> SettingsRepo for DbReadOnly<'a> {
    fn load_settings(&self) -> Result<Option<Settings>> {
        load_settings(&mut self.conn.borrow_mut())
    }
    fn save_settings(&self, _: &Settings) -> Result<()> {
        Err(read_only_violation())
    }
}

impl<'a> SettingsRepo for DbReadWrite<'a> {
    fn load_settings(&self) -> Result<Option<Settings>> {
        load_settings(&mut self.conn.borrow_mut())
    }
    fn save_settings(&self, settings: &Settings) -> Result<()> {
        save_settings(&mut self.conn.borrow_mut(), settings)
    }
}

impl<'a> SettingsRepo for DbConnection<'a> {
    fn load_settings(&self) -> Result<Option<Settings>> {
        load_settings(&mut self.conn.borrow_mut())
    }
    fn save_settings(&self, settings: &Settings) -> Result<()> {
        save_settings(&mut self.conn.borrow_mut(), settings)
    }
}

fn new_settings(s: &Settings) -> Result<models::NewSettings> {
    let Settings {
        site_name,
        site_description,
        logo_url,
        contact_email,
        contact_phone,
        contact_address,
        social_links,
        hero_title,
        hero_subtitle,
        footer_links,
        updated_at,
    } = s;
    let footer_links: Vec<_> = footer_links
        .iter()
        .map(|l| FooterLinkJson {
            label: l.label.clone(),
            url: l.url.clone(),
        })
        .collect();
    Ok(models::NewSettings {
        id: Settings::KEY.to_string(),
        site_name: site_name.clone(),
        site_description: site_description.clone(),
        logo_url: logo_url.clone(),
        contact_email: contact_email.clone(),
        contact_phone: contact_phone.clone(),
        contact_address: contact_address.clone(),
        facebook: social_links.facebook.clone(),
        instagram: social_links.instagram.clone(),
        twitter: social_links.twitter.clone(),
        youtube: social_links.youtube.clone(),
        hero_title: hero_title.clone(),
        hero_subtitle: hero_subtitle.clone(),
        footer_links: to_json(&footer_links)?,
        updated_at: updated_at.unwrap_or_else(Timestamp::now).as_millis(),
    })
}

impl TryFrom<models::SettingsEntity> for Settings {
    type Error = repo::Error;
    fn try_from(from: models::SettingsEntity) -> Result<Self> {
        let models::SettingsEntity {
            id: _,
            site_name,
            site_description,
            logo_url,
            contact_email,
            contact_phone,
            contact_address,
            facebook,
            instagram,
            twitter,
            youtube,
            hero_title,
            hero_subtitle,
            footer_links,
            updated_at,
        } = from;
        let footer_links: Vec<FooterLinkJson> = from_json(&footer_links)?;
        Ok(Settings {
            site_name,
            site_description,
            logo_url,
            contact_email,
            contact_phone,
            contact_address,
            social_links: SocialLinks {
                facebook,
                instagram,
                twitter,
                youtube,
            },
            hero_title,
            hero_subtitle,
            footer_links: footer_links
                .into_iter()
                .map(|FooterLinkJson { label, url }| FooterLink { label, url })
                .collect(),
            updated_at: Some(Timestamp::from_millis(updated_at)),
        })
    }
}

fn load_settings(conn: &mut SqliteConnection) -> Result<Option<Settings>> {
    use schema::settings::dsl;
    dsl::settings
        .filter(dsl::id.eq(Settings::KEY))
        .first::<models::SettingsEntity>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(TryInto::try_into)
        .transpose()
}

fn save_settings(conn: &mut SqliteConnection, s: &Settings) -> Result<()> {
    let new_settings = new_settings(s)?;
    diesel::replace_into(schema::settings::table)
        .values(&new_settings)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}
