pub mod config;
pub mod employee;
pub mod error;
pub mod format;
pub mod profile_view;

pub use config::*;
pub use employee::*;
pub use error::*;
pub use format::*;
pub use profile_view::*;
