use crate::time::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterLink {
    pub label: String,
    pub url: String,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SocialLinks {
    pub facebook  : Option<String>,
    pub instagram : Option<String>,
    pub twitter   : Option<String>,
    pub youtube   : Option<String>,
}

/// Site wide settings (singleton).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub site_name: String,
    pub site_description: String,
    pub logo_url: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub contact_address: Option<String>,
    pub social_links: SocialLinks,
    pub hero_title: String,
    pub hero_subtitle: String,
    pub footer_links: Vec<FooterLink>,
    pub updated_at: Option<Timestamp>,
}

impl Settings {
    /// The key of the singleton record.
    pub const KEY: &'static str = "global";
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            site_name: "Maroc Sport Hub".into(),
            site_description: "Find and book sports facilities all over Morocco".into(),
            logo_url: None,
            contact_email: None,
            contact_phone: None,
            contact_address: None,
            social_links: SocialLinks::default(),
            hero_title: "Sports facilities in Morocco".into(),
            hero_subtitle: "Browse the map, filter by sport and book a slot".into(),
            footer_links: vec![],
            updated_at: None,
        }
    }
}
