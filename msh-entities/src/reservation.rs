use strum::{AsRefStr, Display, EnumString};

use crate::{email::*, id::*, time::*};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, AsRefStr)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ReservationStatus {
    Pending,
    Confirmed,
    Cancelled,
}

impl ReservationStatus {
    /// Does a reservation with this status occupy its time slot?
    pub const fn is_blocking(self) -> bool {
        !matches!(self, Self::Cancelled)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Reservation {
    pub id: Id,
    pub user_id: Id,
    pub user_email: EmailAddress,
    pub facility_id: Id,
    pub start: Timestamp,
    pub end: Timestamp,
    pub status: ReservationStatus,
    pub total_cost: f64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Reservation {
    /// Checks if the half-open time intervals `[start, end)` overlap.
    pub fn overlaps(&self, start: Timestamp, end: Timestamp) -> bool {
        self.start < end && start < self.end
    }
}
