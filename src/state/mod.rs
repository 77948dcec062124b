//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain so screens depend on small focused models.
//! Everything here is plain data and pure rules; the reactive wrappers
//! (`RwSignal` contexts) live in the components that provide them.

pub mod forecasts;
pub mod session;
pub mod training;
pub mod ui;
