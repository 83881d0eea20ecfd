pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{facility_builder::*, user_builder::*};

pub mod facility_builder {

    use super::*;
    use crate::{facility::*, geo::*, id::*, time::*};

    #[derive(Debug)]
    pub struct FacilityBuild {
        facility: Facility,
    }

    impl FacilityBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.facility.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.facility.details.name = name.into();
            self
        }
        pub fn description(mut self, desc: &str) -> Self {
            self.facility.details.description = desc.into();
            self
        }
        pub fn pos(mut self, pos: MapPoint) -> Self {
            self.facility.details.location = Some(pos);
            self
        }
        pub fn city(mut self, city: &str) -> Self {
            self.facility.details.address.city = Some(city.into());
            self
        }
        pub fn region(mut self, region: &str) -> Self {
            self.facility.details.address.region = Some(region.into());
            self
        }
        pub fn sports(mut self, sports: Vec<impl Into<String>>) -> Self {
            self.facility.details.sports = sports.into_iter().map(Into::into).collect();
            self
        }
        pub fn equipment(mut self, names: Vec<&str>) -> Self {
            self.facility.details.equipment = names
                .into_iter()
                .map(|name| EquipmentItem {
                    name: name.into(),
                    quantity: 1,
                })
                .collect();
            self
        }
        pub fn facility_type(mut self, facility_type: FacilityType) -> Self {
            self.facility.details.facility_type = facility_type;
            self
        }
        pub fn accessible(mut self, accessible: bool) -> Self {
            self.facility.details.accessible = accessible;
            self
        }
        pub fn hourly_rate(mut self, rate: Option<f64>) -> Self {
            self.facility.details.hourly_rate = rate;
            self
        }
        pub fn finish(self) -> Facility {
            self.facility
        }
    }

    impl Builder for Facility {
        type Build = FacilityBuild;
        fn build() -> FacilityBuild {
            let now = Timestamp::now();
            FacilityBuild {
                facility: Facility {
                    id: Id::new(),
                    details: FacilityDetails {
                        name: "A facility".into(),
                        location: Some(MapPoint::from_lat_lng_deg(33.5731, -7.5898)),
                        ..Default::default()
                    },
                    created_at: now,
                    updated_at: now,
                },
            }
        }
    }
}

pub mod user_builder {

    use super::*;
    use crate::{email::*, id::*, password::*, time::*, user::*};

    #[derive(Debug)]
    pub struct UserBuild {
        user: User,
    }

    impl UserBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.user.id = id.into();
            self
        }
        pub fn email(mut self, email: &str) -> Self {
            self.user.email = EmailAddress::new_unchecked(email.into());
            self
        }
        pub fn password(mut self, password: &str) -> Self {
            self.user.password = password.parse().unwrap();
            self
        }
        pub fn role(mut self, role: Role) -> Self {
            self.user.role = role;
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.user.name = name.into();
            self
        }
        pub fn finish(self) -> User {
            self.user
        }
    }

    impl Builder for User {
        type Build = UserBuild;
        fn build() -> UserBuild {
            let now = Timestamp::now();
            UserBuild {
                user: User {
                    id: Id::new(),
                    email: EmailAddress::new_unchecked("user@example.ma".into()),
                    password: Password::from_hash(String::new()),
                    role: Role::User,
                    name: "A user".into(),
                    profile: Profile::default(),
                    created_at: now,
                    updated_at: now,
                },
            }
        }
    }
}
