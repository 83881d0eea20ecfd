use super::prelude::*;

/// Deletes the record and returns it so that the
/// attachments can be removed afterwards.
pub fn delete_facility_request<R: FacilityRequestRepo>(repo: &R, id: &str) -> Result<FacilityRequest> {
    let request = repo.get_facility_request(id)?;
    repo.delete_facility_request(id)?;
    log::info!(
        "Deleted facility request {id} with {} attachment(s)",
        request.attachment_urls.len()
    );
    Ok(request)
}

/// The attachments of a deleted request that no other request refers to.
pub fn orphaned_attachments<R: FacilityRequestRepo>(
    repo: &R,
    deleted: &FacilityRequest,
) -> Result<Vec<String>> {
    let remaining = repo.all_facility_requests()?;
    Ok(deleted
        .attachment_urls
        .iter()
        .filter(|url| {
            !remaining
                .iter()
                .any(|r| r.id != deleted.id && r.attachment_urls.contains(*url))
        })
        .cloned()
        .collect())
}
