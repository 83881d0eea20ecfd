use super::*;
use msh_entities as e;

/// Only one of both coordinate values has been submitted.
#[derive(Debug, thiserror::Error)]
#[error("Incomplete coordinate: both lat and lng are required")]
pub struct IncompleteCoordinate;

impl From<e::geo::MapPoint> for Coordinate {
    fn from(from: e::geo::MapPoint) -> Self {
        Self {
            lat: from.lat_deg(),
            lng: from.lng_deg(),
        }
    }
}

impl From<Coordinate> for e::geo::MapPoint {
    fn from(from: Coordinate) -> Self {
        Self::from_lat_lng_deg(from.lat, from.lng)
    }
}

impl From<e::facility::FacilityType> for FacilityType {
    fn from(from: e::facility::FacilityType) -> Self {
        use e::facility::FacilityType as E;
        match from {
            E::Indoor => Self::Indoor,
            E::Outdoor => Self::Outdoor,
        }
    }
}

impl From<FacilityType> for e::facility::FacilityType {
    fn from(from: FacilityType) -> Self {
        match from {
            FacilityType::Indoor => Self::Indoor,
            FacilityType::Outdoor => Self::Outdoor,
        }
    }
}

impl From<e::facility::Condition> for Condition {
    fn from(from: e::facility::Condition) -> Self {
        use e::facility::Condition as E;
        match from {
            E::Excellent => Self::Excellent,
            E::Good => Self::Good,
            E::Fair => Self::Fair,
            E::Poor => Self::Poor,
        }
    }
}

impl From<Condition> for e::facility::Condition {
    fn from(from: Condition) -> Self {
        match from {
            Condition::Excellent => Self::Excellent,
            Condition::Good => Self::Good,
            Condition::Fair => Self::Fair,
            Condition::Poor => Self::Poor,
        }
    }
}

impl From<e::facility::EquipmentItem> for EquipmentItem {
    fn from(from: e::facility::EquipmentItem) -> Self {
        let e::facility::EquipmentItem { name, quantity } = from;
        Self { name, quantity }
    }
}

impl From<EquipmentItem> for e::facility::EquipmentItem {
    fn from(from: EquipmentItem) -> Self {
        let EquipmentItem { name, quantity } = from;
        Self { name, quantity }
    }
}

impl From<e::facility::FacilityDetails> for FacilityDetails {
    fn from(from: e::facility::FacilityDetails) -> Self {
        let e::facility::FacilityDetails {
            name,
            description,
            address,
            location,
            sports,
            equipment,
            facility_type,
            accessible,
            establishment_condition,
            building_condition,
            equipment_condition,
            capacity,
            staff_count,
            surface_area,
            hourly_rate,
        } = from;
        let e::address::Address {
            street,
            commune,
            city,
            province,
            region,
        } = address;
        Self {
            name,
            description,
            street,
            commune,
            city,
            province,
            region,
            lat: location.map(e::geo::MapPoint::lat_deg),
            lng: location.map(e::geo::MapPoint::lng_deg),
            sports,
            equipment: equipment.into_iter().map(Into::into).collect(),
            facility_type: Some(facility_type.into()),
            accessible,
            establishment_condition: establishment_condition.map(Into::into),
            building_condition: building_condition.map(Into::into),
            equipment_condition: equipment_condition.map(Into::into),
            capacity,
            staff_count,
            surface_area,
            hourly_rate,
        }
    }
}

impl TryFrom<FacilityDetails> for e::facility::FacilityDetails {
    type Error = IncompleteCoordinate;
    fn try_from(from: FacilityDetails) -> Result<Self, Self::Error> {
        let FacilityDetails {
            name,
            description,
            street,
            commune,
            city,
            province,
            region,
            lat,
            lng,
            sports,
            equipment,
            facility_type,
            accessible,
            establishment_condition,
            building_condition,
            equipment_condition,
            capacity,
            staff_count,
            surface_area,
            hourly_rate,
        } = from;
        let location = match (lat, lng) {
            (Some(lat), Some(lng)) => Some(e::geo::MapPoint::from_lat_lng_deg(lat, lng)),
            (None, None) => None,
            _ => return Err(IncompleteCoordinate),
        };
        Ok(Self {
            name,
            description,
            address: e::address::Address {
                street,
                commune,
                city,
                province,
                region,
            },
            location,
            sports,
            equipment: equipment.into_iter().map(Into::into).collect(),
            facility_type: facility_type.map(Into::into).unwrap_or_default(),
            accessible,
            establishment_condition: establishment_condition.map(Into::into),
            building_condition: building_condition.map(Into::into),
            equipment_condition: equipment_condition.map(Into::into),
            capacity,
            staff_count,
            surface_area,
            hourly_rate,
        })
    }
}

impl From<e::facility::Facility> for Facility {
    fn from(from: e::facility::Facility) -> Self {
        let e::facility::Facility {
            id,
            details,
            created_at,
            updated_at,
        } = from;
        Self {
            id: id.into(),
            details: details.into(),
            created_at: created_at.as_millis(),
            updated_at: updated_at.as_millis(),
        }
    }
}

impl From<e::facility_request::RequestStatus> for RequestStatus {
    fn from(from: e::facility_request::RequestStatus) -> Self {
        use e::facility_request::RequestStatus as E;
        match from {
            E::Pending => Self::Pending,
            E::Approved => Self::Approved,
            E::Rejected => Self::Rejected,
        }
    }
}

impl From<e::facility_request::FacilityRequest> for FacilityRequest {
    fn from(from: e::facility_request::FacilityRequest) -> Self {
        let e::facility_request::FacilityRequest {
            id,
            details,
            requested_by,
            requester_email,
            status,
            rejection_reason,
            attachment_urls,
            facility_id,
            created_at,
            updated_at,
        } = from;
        Self {
            id: id.into(),
            details: details.into(),
            requested_by: requested_by.into(),
            requester_email: requester_email.into_string(),
            status: status.into(),
            rejection_reason,
            attachment_urls,
            facility_id: facility_id.map(Into::into),
            created_at: created_at.as_millis(),
            updated_at: updated_at.as_millis(),
        }
    }
}

impl From<e::user::Role> for UserRole {
    fn from(from: e::user::Role) -> Self {
        use e::user::Role as E;
        match from {
            E::User => Self::User,
            E::Admin => Self::Admin,
            E::SuperAdmin => Self::SuperAdmin,
        }
    }
}

impl From<UserRole> for e::user::Role {
    fn from(from: UserRole) -> Self {
        match from {
            UserRole::User => Self::User,
            UserRole::Admin => Self::Admin,
            UserRole::SuperAdmin => Self::SuperAdmin,
        }
    }
}

impl From<e::user::Gender> for Gender {
    fn from(from: e::user::Gender) -> Self {
        use e::user::Gender as E;
        match from {
            E::Male => Self::Male,
            E::Female => Self::Female,
            E::Other => Self::Other,
        }
    }
}

impl From<Gender> for e::user::Gender {
    fn from(from: Gender) -> Self {
        match from {
            Gender::Male => Self::Male,
            Gender::Female => Self::Female,
            Gender::Other => Self::Other,
        }
    }
}

impl From<e::user::Profile> for Profile {
    fn from(from: e::user::Profile) -> Self {
        let e::user::Profile {
            first_name,
            last_name,
            phone,
            gender,
            birth_date,
            job_title,
            city,
            favorite_sports,
        } = from;
        Self {
            first_name,
            last_name,
            phone,
            gender: gender.map(Into::into),
            birth_date,
            job_title,
            city,
            favorite_sports,
        }
    }
}

impl From<Profile> for e::user::Profile {
    fn from(from: Profile) -> Self {
        let Profile {
            first_name,
            last_name,
            phone,
            gender,
            birth_date,
            job_title,
            city,
            favorite_sports,
        } = from;
        Self {
            first_name,
            last_name,
            phone,
            gender: gender.map(Into::into),
            birth_date,
            job_title,
            city,
            favorite_sports,
        }
    }
}

impl From<e::user::User> for User {
    fn from(from: e::user::User) -> Self {
        let e::user::User {
            id,
            email,
            password: _password,
            role,
            name,
            profile,
            created_at,
            updated_at: _,
        } = from;
        Self {
            id: id.into(),
            email: email.into_string(),
            role: role.into(),
            name,
            profile: profile.into(),
            created_at: created_at.as_millis(),
        }
    }
}

impl From<e::reservation::ReservationStatus> for ReservationStatus {
    fn from(from: e::reservation::ReservationStatus) -> Self {
        use e::reservation::ReservationStatus as E;
        match from {
            E::Pending => Self::Pending,
            E::Confirmed => Self::Confirmed,
            E::Cancelled => Self::Cancelled,
        }
    }
}

impl From<ReservationStatus> for e::reservation::ReservationStatus {
    fn from(from: ReservationStatus) -> Self {
        match from {
            ReservationStatus::Pending => Self::Pending,
            ReservationStatus::Confirmed => Self::Confirmed,
            ReservationStatus::Cancelled => Self::Cancelled,
        }
    }
}

impl From<e::reservation::Reservation> for Reservation {
    fn from(from: e::reservation::Reservation) -> Self {
        let e::reservation::Reservation {
            id,
            user_id,
            user_email,
            facility_id,
            start,
            end,
            status,
            total_cost,
            created_at,
            updated_at,
        } = from;
        Self {
            id: id.into(),
            user_id: user_id.into(),
            user_email: user_email.into_string(),
            facility_id: facility_id.into(),
            start: start.as_millis(),
            end: end.as_millis(),
            status: status.into(),
            total_cost,
            created_at: created_at.as_millis(),
            updated_at: updated_at.as_millis(),
        }
    }
}

impl From<e::equipment::Equipment> for Equipment {
    fn from(from: e::equipment::Equipment) -> Self {
        let e::equipment::Equipment {
            id,
            name,
            description,
            created_at,
            updated_at,
        } = from;
        Self {
            id: id.into(),
            name,
            description,
            created_at: created_at.as_millis(),
            updated_at: updated_at.as_millis(),
        }
    }
}

impl From<e::settings::Settings> for Settings {
    fn from(from: e::settings::Settings) -> Self {
        let e::settings::Settings {
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
        } = from;
        let e::settings::SocialLinks {
            facebook,
            instagram,
            twitter,
            youtube,
        } = social_links;
        Self {
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
                .map(|e::settings::FooterLink { label, url }| FooterLink { label, url })
                .collect(),
            updated_at: updated_at.map(e::time::Timestamp::as_millis),
        }
    }
}

impl From<Settings> for e::settings::Settings {
    fn from(from: Settings) -> Self {
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
        } = from;
        let SocialLinks {
            facebook,
            instagram,
            twitter,
            youtube,
        } = social_links;
        Self {
            site_name,
            site_description,
            logo_url,
            contact_email,
            contact_phone,
            contact_address,
            social_links: e::settings::SocialLinks {
                facebook,
                instagram,
                twitter,
                youtube,
            },
            hero_title,
            hero_subtitle,
            footer_links: footer_links
                .into_iter()
                .map(|FooterLink { label, url }| e::settings::FooterLink { label, url })
                .collect(),
            updated_at: updated_at.map(e::time::Timestamp::from_millis),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reject_incomplete_coordinates() {
        let details = FacilityDetails {
            name: "Stade".into(),
            lat: Some(33.5),
            ..Default::default()
        };
        assert!(e::facility::FacilityDetails::try_from(details).is_err());
    }

    #[test]
    fn default_facility_type_is_outdoor() {
        let details = FacilityDetails {
            name: "Stade".into(),
            lat: Some(33.5),
            lng: Some(-7.5),
            ..Default::default()
        };
        let details = e::facility::FacilityDetails::try_from(details).unwrap();
        assert_eq!(e::facility::FacilityType::Outdoor, details.facility_type);
        assert_eq!(
            Some(e::geo::MapPoint::from_lat_lng_deg(33.5, -7.5)),
            details.location
        );
    }
}
