//! Reusable UI components.

pub mod error_banner;
pub mod models_panel;
pub mod nav_bar;
pub mod route_guard;
pub mod training_panel;
pub mod upload_panel;
pub mod users_panel;
