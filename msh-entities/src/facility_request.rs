use strum::{AsRefStr, Display, EnumString};

use crate::{email::*, facility::*, id::*, time::*};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
}

impl RequestStatus {
    pub const fn is_pending(self) -> bool {
        matches!(self, Self::Pending)
    }
}

/// A proposal of a user to add a new facility
/// that needs to be reviewed by an administrator.
#[derive(Debug, Clone, PartialEq)]
pub struct FacilityRequest {
    pub id: Id,
    pub details: FacilityDetails,
    pub requested_by: Id,
    pub requester_email: EmailAddress,
    pub status: RequestStatus,
    pub rejection_reason: Option<String>,
    pub attachment_urls: Vec<String>,
    /// The facility that has been created when the request was approved
    pub facility_id: Option<Id>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
