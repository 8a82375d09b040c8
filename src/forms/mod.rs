//! Request body validation for the booking routes.

use thiserror::Error;

pub mod booking;

#[derive(Debug, Error)]
/// Errors that can occur when validating request bodies.
pub enum FormError {
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("services_id must be an array")]
    ServicesNotArray,
}
