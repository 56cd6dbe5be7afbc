//! End-to-end tests: the real HTTP client and view model against an
//! in-process mock of the employee API.

#[cfg(test)]
mod common;

#[cfg(test)]
mod profile_ready_tests;

#[cfg(test)]
mod profile_empty_tests;
