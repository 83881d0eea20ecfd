#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # msh-entities
//!
//! Reusable, agnostic domain entities for Maroc Sport Hub.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod address;
pub mod email;
pub mod equipment;
pub mod facility;
pub mod facility_request;
pub mod geo;
pub mod id;
pub mod password;
pub mod reservation;
pub mod settings;
pub mod time;
pub mod user;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
