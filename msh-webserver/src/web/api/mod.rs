use std::{fmt::Display, result};

use anyhow::anyhow;
use msh_boundary::Error as JsonErrorResponse;
use rocket::{
    self, delete, get,
    http::{Cookie, CookieJar, Status},
    post, put,
    response::{self, Responder},
    routes,
    serde::json::{Error as JsonError, Json},
    Route, State,
};

use super::guards::*;
use crate::{
    adapters::json::{self, from_json, to_json},
    core::{authorization::*, prelude::*, usecases},
    web::{jwt, sqlite, Cfg},
};
use msh_application::{error::AppError, prelude as flows};

mod equipments;
mod error;
mod facilities;
mod facility_requests;
mod geocode;
mod reservations;
mod settings;
mod users;

pub use self::error::Error as ApiError;

#[cfg(test)]
pub mod tests;

type Result<T> = result::Result<Json<T>, ApiError>;
type JsonResult<'a, T> = result::Result<Json<T>, JsonError<'a>>;

pub fn routes() -> Vec<Route> {
    routes![
        // ---   facilities   --- //
        facilities::get_facilities,
        facilities::get_filter_options,
        facilities::get_facility,
        facilities::post_facility,
        facilities::put_facility,
        facilities::delete_facility,
        facilities::post_import_headers,
        facilities::post_import,
        // ---   facility requests   --- //
        facility_requests::post_facility_request,
        facility_requests::get_own_facility_requests,
        facility_requests::get_facility_requests,
        facility_requests::post_approve,
        facility_requests::post_reject,
        facility_requests::delete_facility_request,
        // ---   users   --- //
        users::post_login,
        users::post_logout,
        users::post_user,
        users::get_current_user,
        users::put_current_user,
        users::get_users,
        users::get_user,
        users::post_user_role,
        users::delete_user,
        users::get_dashboard_access,
        // ---   reservations   --- //
        reservations::post_reservation,
        reservations::get_own_reservations,
        reservations::get_reservations,
        reservations::post_cancel,
        reservations::post_status,
        // ---   equipments   --- //
        equipments::get_equipments,
        equipments::post_equipment,
        equipments::put_equipment,
        equipments::delete_equipment,
        // ---   settings   --- //
        settings::get_settings,
        settings::put_settings,
        // ---   geocoding   --- //
        geocode::get_geocode,
    ]
}

fn json_error_response<'r, 'o: 'r, E: Display>(
    req: &'r rocket::Request<'_>,
    err: &E,
    status: Status,
) -> response::Result<'o> {
    let message = err.to_string();
    let boundary_error = JsonErrorResponse {
        http_status: status.code,
        message,
    };
    Json(boundary_error).respond_to(req).map(|mut res| {
        res.set_status(status);
        res
    })
}

/// Runs a flow that talks to remote services outside of the async executor.
async fn run_blocking<T, F>(f: F) -> result::Result<T, ApiError>
where
    F: FnOnce() -> result::Result<T, AppError> + Send + 'static,
    T: Send + 'static,
{
    rocket::tokio::task::spawn_blocking(f)
        .await
        .map_err(|err| ApiError::Other(anyhow!("Blocking task failed: {err}")))?
        .map_err(ApiError::from)
}
