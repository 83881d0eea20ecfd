use super::{create_new_facility::prepare_facility_details, prelude::*};

#[derive(Debug, Clone)]
pub struct NewFacilityRequest {
    pub details: FacilityDetails,
    pub attachment_urls: Vec<String>,
}

pub fn create_facility_request<R: FacilityRequestRepo>(
    repo: &R,
    requester: &User,
    new_request: NewFacilityRequest,
) -> Result<FacilityRequest> {
    let NewFacilityRequest {
        details,
        attachment_urls,
    } = new_request;
    let details = prepare_facility_details(details)?;
    let attachment_urls = unclaimed_attachment_urls(repo, attachment_urls)?;
    let now = Timestamp::now();
    let request = FacilityRequest {
        id: Id::new(),
        details,
        requested_by: requester.id.clone(),
        requester_email: requester.email.clone(),
        status: RequestStatus::Pending,
        rejection_reason: None,
        attachment_urls,
        facility_id: None,
        created_at: now,
        updated_at: now,
    };
    log::info!(
        "New facility request {} by {}",
        request.id,
        request.requester_email
    );
    repo.create_facility_request(&request)?;
    Ok(request)
}

/// Attachments are owned by exactly one request.
fn unclaimed_attachment_urls<R: FacilityRequestRepo>(
    repo: &R,
    urls: Vec<String>,
) -> Result<Vec<String>> {
    let mut unclaimed: Vec<String> = Vec::with_capacity(urls.len());
    for url in urls.into_iter().map(|url| url.trim().to_string()) {
        if !url.is_empty() && !unclaimed.contains(&url) {
            unclaimed.push(url);
        }
    }
    if unclaimed.is_empty() {
        return Ok(unclaimed);
    }
    let existing = repo.all_facility_requests()?;
    if let Some(url) = unclaimed
        .iter()
        .find(|url| existing.iter().any(|r| r.attachment_urls.contains(*url)))
    {
        log::warn!("Attachment {url} is already used by another facility request");
        return Err(Error::AttachmentInUse(url.clone()));
    }
    Ok(unclaimed)
}
