use std::{fmt::Display, result};

use rocket::serde::json::Json;
use rocket::{
    self, delete, get,
    http::Status,
    post, put,
    response::{self, Responder},
    routes, Route, State,
};
use turfbook_boundary::Error as JsonErrorResponse;

use super::guards::*;
use crate::{
    adapters::json::{self, from_json, to_json},
    core::{prelude::*, usecases},
    web::{sqlite, Cfg},
};
use turfbook_application::{prelude as flows, SharedSettings, SlotLocks};

mod error;
mod operations;
mod payments;
mod reservations;
mod util;
mod venues;

pub use self::error::Error as ApiError;


type Result<T> = result::Result<Json<T>, ApiError>;

pub fn routes() -> Vec<Route> {
    routes![
        // ---   venues   --- //
        venues::post_venue,
        venues::get_venues,
        venues::get_venue,
        venues::get_venue_availability,
        venues::get_venue_slots,
        // ---   reservations   --- //
        reservations::post_reservation,
        reservations::get_reservations,
        reservations::get_reservation,
        reservations::post_payment_order,
        // ---   payments   --- //
        payments::post_payment_callback,
        // ---   owner operations   --- //
        operations::put_venue_active,
        operations::put_venue_today,
        operations::put_emergency_block,
        operations::put_venue_price,
        operations::put_day_availability,
        operations::post_closure,
        operations::delete_closure,
        operations::put_slot_override,
        operations::get_venue_activity,
        // ---   util   --- //
        util::get_version,
    ]
}

pub fn catchers() -> Vec<rocket::Catcher> {
    rocket::catchers![util::default_catcher]
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
