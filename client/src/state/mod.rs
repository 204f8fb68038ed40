//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State lives in stores created by the composition root (`app::App`) and is
//! handed to components as props rather than looked up from context.

pub mod auth;
