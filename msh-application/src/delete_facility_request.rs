use super::*;

/// Deletes a request together with its attachments.
///
/// Attachments that are still referenced by other requests are kept.
/// Attachments that cannot be deleted are logged and left behind.
pub fn delete_facility_request(
    connections: &sqlite::Connections,
    storage: &dyn AttachmentStorage,
    id: &str,
) -> Result<FacilityRequest> {
    let (request, orphaned) = connections.exclusive()?.transaction(|conn| {
        let request = usecases::delete_facility_request(conn, id)?;
        let orphaned = usecases::orphaned_attachments(conn, &request)?;
        Ok::<_, usecases::Error>((request, orphaned))
    })?;
    for url in &orphaned {
        if let Err(err) = storage.delete_attachment(url) {
            warn!("Failed to delete attachment '{url}' of facility request {id}: {err}");
        }
    }
    Ok(request)
}
