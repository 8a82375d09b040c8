//! Domain types shared by the booking proxy and the bridge demo page.

pub mod booking;
pub mod notification;
