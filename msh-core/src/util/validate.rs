use crate::{entities::*, util::text::prepare_name_list};
use thiserror::Error;

pub use fast_chemail::is_valid_email;

pub trait Validate {
    type Error;
    fn validate(&self) -> Result<(), Self::Error>;
}

pub trait AutoCorrect {
    fn auto_correct(self) -> Self;
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FacilityInvalidation {
    #[error("Missing name")]
    Name,
    #[error("Invalid position")]
    Position,
    #[error("Invalid equipment")]
    Equipment,
    #[error("Invalid number")]
    Number,
}

fn is_valid_amount(value: Option<f64>) -> bool {
    value.map_or(true, |v| v.is_finite() && v >= 0.0)
}

impl Validate for FacilityDetails {
    type Error = FacilityInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        if self.name.trim().is_empty() {
            return Err(Self::Error::Name);
        }
        if let Some(pos) = self.location {
            if !pos.is_valid() {
                return Err(Self::Error::Position);
            }
        }
        if self.equipment.iter().any(|e| e.name.trim().is_empty()) {
            return Err(Self::Error::Equipment);
        }
        if !is_valid_amount(self.surface_area) || !is_valid_amount(self.hourly_rate) {
            return Err(Self::Error::Number);
        }
        Ok(())
    }
}

fn trim_opt(s: Option<String>) -> Option<String> {
    s.and_then(|s| match s.trim() {
        s if s.is_empty() => None,
        s => Some(s.to_string()),
    })
}

impl AutoCorrect for Address {
    fn auto_correct(self) -> Self {
        let Self {
            street,
            commune,
            city,
            province,
            region,
        } = self;
        Self {
            street: trim_opt(street),
            commune: trim_opt(commune),
            city: trim_opt(city),
            province: trim_opt(province),
            region: trim_opt(region),
        }
    }
}

impl AutoCorrect for FacilityDetails {
    fn auto_correct(mut self) -> Self {
        self.name = self.name.trim().to_string();
        self.description = self.description.trim().to_string();
        self.address = self.address.auto_correct();
        self.sports = prepare_name_list(self.sports.iter().map(String::as_str));
        for item in &mut self.equipment {
            item.name = item.name.trim().to_string();
        }
        self
    }
}

impl AutoCorrect for Profile {
    fn auto_correct(mut self) -> Self {
        self.first_name = trim_opt(self.first_name);
        self.last_name = trim_opt(self.last_name);
        self.phone = trim_opt(self.phone);
        self.birth_date = trim_opt(self.birth_date);
        self.job_title = trim_opt(self.job_title);
        self.city = trim_opt(self.city);
        self.favorite_sports = prepare_name_list(self.favorite_sports.iter().map(String::as_str));
        self
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsInvalidation {
    #[error("Missing site name")]
    SiteName,
    #[error("Invalid contact email")]
    ContactEmail,
    #[error("Invalid footer link")]
    FooterLink,
}

impl Validate for Settings {
    type Error = SettingsInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        if self.site_name.trim().is_empty() {
            return Err(Self::Error::SiteName);
        }
        if let Some(email) = &self.contact_email {
            if !is_valid_email(email) {
                return Err(Self::Error::ContactEmail);
            }
        }
        if self
            .footer_links
            .iter()
            .any(|l| l.label.trim().is_empty() || l.url.trim().is_empty())
        {
            return Err(Self::Error::FooterLink);
        }
        Ok(())
    }
}
