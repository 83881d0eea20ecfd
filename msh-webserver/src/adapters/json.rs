pub use msh_boundary::*;

use crate::core::{
    authorization,
    entities as e,
    import::{self, ColumnMapping, ImportField, TypeHint, UnknownImportField},
    usecases::{self, Error as ParameterError},
    util::filter,
};

pub mod from_json {
    //! JSON -> Entity

    use super::*;

    // NOTE:
    // We cannot impl From<T> here, because the JSON structs
    // and the entities both are outside this crate.

    pub fn try_facility_details(
        from: FacilityDetails,
    ) -> Result<e::FacilityDetails, ParameterError> {
        e::FacilityDetails::try_from(from).map_err(|err| {
            log::debug!("Rejecting facility details: {err}");
            ParameterError::InvalidPosition
        })
    }

    pub fn try_new_user(from: NewUser) -> Result<usecases::NewUser, ParameterError> {
        let NewUser {
            email,
            password,
            name,
        } = from;
        Ok(usecases::NewUser {
            email: email.parse()?,
            password,
            name,
        })
    }

    pub fn update_profile(from: UpdateProfile) -> usecases::UpdateProfile {
        let UpdateProfile { name, profile } = from;
        usecases::UpdateProfile {
            name,
            profile: profile.into(),
        }
    }

    pub fn new_reservation(from: NewReservation) -> usecases::NewReservation {
        let NewReservation {
            facility_id,
            start,
            end,
        } = from;
        usecases::NewReservation {
            facility_id: facility_id.into(),
            start: e::Timestamp::from_millis(start),
            end: e::Timestamp::from_millis(end),
        }
    }

    pub fn new_equipment(from: NewEquipment) -> usecases::NewEquipment {
        let NewEquipment { name, description } = from;
        usecases::NewEquipment { name, description }
    }

    /// Fields bound to an empty column are skipped.
    pub fn try_column_mapping<'a>(
        bindings: impl IntoIterator<Item = (&'a String, &'a String)>,
    ) -> Result<ColumnMapping, UnknownImportField> {
        let mut mapping = ColumnMapping::default();
        for (field, column) in bindings {
            let field = field.parse::<ImportField>()?;
            if column.trim().is_empty() {
                mapping.skip(field);
            } else {
                mapping.bind(field, column.as_str());
            }
        }
        Ok(mapping)
    }

    /// Builds a filter from comma separated query parameters.
    pub fn facility_filter(
        sports: Option<&str>,
        regions: Option<&str>,
        equipment: Option<&str>,
        indoor: bool,
        outdoor: bool,
        accessible: bool,
        text: Option<String>,
    ) -> filter::FacilityFilter {
        let list = |s: Option<&str>| {
            s.map(crate::core::util::parse::split_list)
                .unwrap_or_default()
        };
        filter::FacilityFilter {
            sports: list(sports),
            regions: list(regions),
            equipment: list(equipment),
            is_indoor: indoor,
            is_outdoor: outdoor,
            accessible,
            text: text.filter(|t| !t.trim().is_empty()),
        }
    }
}

pub mod to_json {
    //! Entity -> JSON

    use super::*;

    pub fn filter_options(from: filter::FilterOptions) -> FilterOptions {
        let filter::FilterOptions {
            sports,
            regions,
            equipment,
        } = from;
        FilterOptions {
            sports,
            regions,
            equipment,
        }
    }

    pub fn import_report(from: usecases::ImportReport) -> ImportReport {
        let usecases::ImportReport {
            imported,
            skipped_lines,
        } = from;
        ImportReport {
            imported,
            skipped_lines,
        }
    }

    pub fn access_decision(from: authorization::AccessDecision) -> AccessDecision {
        use authorization::AccessDecision as A;
        match from {
            A::Loading => AccessDecision::Loading,
            A::RedirectToLogin => AccessDecision::RedirectToLogin,
            A::RedirectToHome => AccessDecision::RedirectToHome,
            A::Render => AccessDecision::Render,
        }
    }

    fn type_hint(hint: TypeHint) -> &'static str {
        match hint {
            TypeHint::Numeric => "numeric",
            TypeHint::Boolean => "boolean",
            TypeHint::List => "list",
            TypeHint::Text => "text",
        }
    }

    pub fn import_headers(headers: Vec<String>, suggested: &ColumnMapping) -> ImportHeaders {
        let headers = headers
            .into_iter()
            .map(|column| ImportHeader {
                normalized: import::normalize_column_name(&column),
                column,
            })
            .collect();
        let fields = ImportField::ALL
            .into_iter()
            .map(|field| ImportFieldInfo {
                field: field.as_str().to_string(),
                mandatory: field.is_mandatory(),
                type_hint: type_hint(field.type_hint()).to_string(),
                suggested_column: suggested.column(field).map(ToString::to_string),
            })
            .collect();
        ImportHeaders { headers, fields }
    }
}
