//! Presentational building blocks for the employee dashboard.
//!
//! Components only emit markup and class names; the stylesheet is linked
//! once by the application.

pub mod components;

pub use components::*;
