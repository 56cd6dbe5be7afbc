//! Client side of the employee dashboard: the employee API interface, its
//! reqwest implementation, configuration loading and the profile view model.

pub mod api;
pub mod config;
pub mod error;
pub mod view_model;

pub use api::{EmployeeApi, HttpEmployeeApi};
pub use error::{ProfileError, GENERIC_FAILURE};
pub use view_model::{Activation, ProfileState, ProfileViewModel};
