//! Routable screens.

pub mod admin;
pub mod data_entry;
pub mod forecasts;
pub mod landing;
pub mod login;
pub mod register;
pub mod reports;
pub mod unauthorized;
