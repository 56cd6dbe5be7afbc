//! Fetch lifecycle of the profile page.
//!
//! A page activation moves the view model from `Loading` to exactly one of
//! `Ready` or `Failed`. Each activation gets a generation number; results
//! that arrive for an older generation are dropped, so a response landing
//! after the page was left or re-entered cannot overwrite newer state.

use crate::{EmployeeApi, ProfileError};
use shared_types::{EmployeeProfile, ProfileView};

/// What the profile page renders.
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileState {
    Loading,
    Ready(ProfileView),
    Failed(String),
}

impl ProfileState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ProfileState::Loading)
    }

    pub fn profile(&self) -> Option<&ProfileView> {
        match self {
            ProfileState::Ready(profile) => Some(profile),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ProfileState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Token identifying one activation; hand it back to [`ProfileViewModel::complete`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Activation(u64);

#[derive(Debug, Clone, PartialEq)]
pub struct ProfileViewModel {
    generation: u64,
    state: ProfileState,
}

impl Default for ProfileViewModel {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileViewModel {
    pub fn new() -> Self {
        Self {
            generation: 0,
            state: ProfileState::Loading,
        }
    }

    pub fn state(&self) -> &ProfileState {
        &self.state
    }

    /// Start a new activation. Any earlier activation becomes stale.
    pub fn activate(&mut self) -> Activation {
        self.generation += 1;
        self.state = ProfileState::Loading;
        tracing::debug!(generation = self.generation, "Profile page activated");
        Activation(self.generation)
    }

    /// The page went away; pending results must not land.
    pub fn deactivate(&mut self) {
        self.generation += 1;
        tracing::debug!(generation = self.generation, "Profile page deactivated");
    }

    /// Whether `activation` is the one results are currently accepted for.
    pub fn is_current(&self, activation: Activation) -> bool {
        activation.0 == self.generation && self.state.is_loading()
    }

    /// Apply the outcome of the fetch started for `activation`.
    ///
    /// Returns `false` and leaves the state untouched when the activation is
    /// stale or has already completed.
    pub fn complete(
        &mut self,
        activation: Activation,
        result: Result<EmployeeProfile, ProfileError>,
    ) -> bool {
        if !self.is_current(activation) {
            tracing::debug!(
                activation = activation.0,
                generation = self.generation,
                "Discarding stale profile result"
            );
            return false;
        }

        self.state = match result {
            Ok(profile) => ProfileState::Ready(ProfileView::from(&profile)),
            Err(err) => {
                tracing::warn!(error = %err, "Profile fetch failed");
                ProfileState::Failed(err.user_message())
            }
        };
        true
    }

    /// Run one full activation: a single fetch, no retry.
    pub async fn load_profile<A: EmployeeApi>(&mut self, api: &A) -> &ProfileState {
        let activation = self.activate();
        let result = api.fetch_self_profile().await;
        self.complete(activation, result);
        &self.state
    }
}
