use super::{create_new_facility::prepare_facility_details, prelude::*};
use crate::import::{map_rows, ColumnMapping, Row};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub imported: usize,
    pub skipped_lines: Vec<usize>,
}

/// Maps all rows and stores the valid ones.
///
/// Callers must run this within a transaction so that
/// either all records or none are written.
pub fn import_facilities<R: FacilityRepo>(
    repo: &R,
    rows: &[Row],
    mapping: &ColumnMapping,
) -> Result<ImportReport> {
    if let Some(field) = mapping.missing_mandatory_fields().first() {
        return Err(Error::MissingImportField(field.to_string()));
    }
    let mapped = map_rows(rows, mapping);
    if mapped.records.is_empty() {
        log::warn!("None of the {} rows can be imported", rows.len());
        return Err(Error::NoValidRows);
    }
    let now = Timestamp::now();
    for details in mapped.records.iter().cloned() {
        let facility = Facility {
            id: Id::new(),
            details: prepare_facility_details(details)?,
            created_at: now,
            updated_at: now,
        };
        repo.create_facility(&facility)?;
    }
    let report = ImportReport {
        imported: mapped.records.len(),
        skipped_lines: mapped.skipped_lines,
    };
    log::info!(
        "Imported {} facilities, skipped {} rows",
        report.imported,
        report.skipped_lines.len()
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::{
        super::{tests::MockDb, *},
        *,
    };
    use crate::import::ImportField;

    fn mapping() -> ColumnMapping {
        let mut mapping = ColumnMapping::default();
        mapping.bind(ImportField::Name, "Nom");
        mapping.bind(ImportField::Latitude, "Lat");
        mapping.bind(ImportField::Longitude, "Lng");
        mapping
    }

    fn row(name: &str, lat: &str, lng: &str) -> Row {
        [("Nom", name), ("Lat", lat), ("Lng", lng)]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn import_valid_rows() {
        let db = MockDb::default();
        let rows = vec![
            row("Stade A", "33,5", "-7,5"),
            row("", "33", "-7"),
            row("Stade B", "34.0", "-6.8"),
        ];
        let report = import_facilities(&db, &rows, &mapping()).unwrap();
        assert_eq!(
            report,
            ImportReport {
                imported: 2,
                skipped_lines: vec![3],
            }
        );
        let facilities = db.facilities.borrow();
        assert_eq!(facilities.len(), 2);
        assert_eq!(facilities[0].details.name, "Stade A");
        let pos = facilities[0].details.location.unwrap();
        assert_eq!((pos.lat_deg(), pos.lng_deg()), (33.5, -7.5));
    }

    #[test]
    fn nothing_to_import() {
        let db = MockDb::default();
        let rows = vec![row("A", "x", "y"), row("", "1", "2")];
        assert!(matches!(
            import_facilities(&db, &rows, &mapping()),
            Err(Error::NoValidRows)
        ));
        assert!(db.facilities.borrow().is_empty());
    }

    #[test]
    fn mandatory_fields_must_be_mapped() {
        let db = MockDb::default();
        let mut mapping = mapping();
        mapping.skip(ImportField::Latitude);
        assert!(matches!(
            import_facilities(&db, &[row("A", "1", "2")], &mapping),
            Err(Error::MissingImportField(f)) if f == "latitude"
        ));
    }
}
