use actix_web::http::StatusCode;
use actix_web::{HttpResponse, Responder, get, post, web};
use log::{error, warn};

use crate::backend::BookingBackend;
use crate::dto::booking::{AvailableSlotsQuery, ErrorBody};
use crate::services::ServiceError;
use crate::services::booking as booking_service;

#[get("/booking")]
pub async fn available_slots(
    web::Query(params): web::Query<Vec<(String, String)>>,
    backend: web::Data<dyn BookingBackend>,
) -> impl Responder {
    let query = AvailableSlotsQuery::from_pairs(params);

    match booking_service::list_available_slots(backend.get_ref(), &query).await {
        Ok(slots) => HttpResponse::Ok().json(slots),
        Err(e) => {
            error!("Error fetching available slots: {e}");
            HttpResponse::InternalServerError()
                .json(ErrorBody::new("Failed to fetch available slots"))
        }
    }
}

#[post("/booking")]
pub async fn lock_available_slot(
    body: web::Bytes,
    backend: web::Data<dyn BookingBackend>,
) -> impl Responder {
    match booking_service::lock_available_slot(backend.get_ref(), &body).await {
        Ok(booking) => HttpResponse::Created().json(booking),
        Err(ServiceError::Form(e)) => {
            HttpResponse::BadRequest().json(ErrorBody::new(e.to_string()))
        }
        Err(ServiceError::Downstream { status, details }) => {
            warn!("Booking service rejected lock request with status {status}");
            let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            HttpResponse::build(status)
                .json(ErrorBody::with_details("Failed to create booking", details))
        }
        Err(e) => {
            error!("Error creating booking: {e}");
            HttpResponse::InternalServerError().json(ErrorBody::new("Internal server error"))
        }
    }
}
