use client::{EmployeeApi, ProfileError, ProfileViewModel};
use dioxus::prelude::*;
use std::rc::Rc;

/// Drive one activation of the profile page into `view_model`.
///
/// `connect` builds the API once per mount. The fetch is spawned on the
/// calling component's scope, so it is cancelled with the component. The
/// view model's generation guard covers the remaining window: whatever
/// completes after unmount or after a newer activation is dropped.
pub fn use_profile_fetch<A, F>(mut view_model: Signal<ProfileViewModel>, connect: F)
where
    A: EmployeeApi + 'static,
    F: FnOnce() -> Result<A, ProfileError>,
{
    let api = use_hook(|| connect().map(Rc::new));

    use_effect(move || {
        let api = api.clone();
        let activation = view_model.write().activate();
        spawn(async move {
            let result = match api {
                Ok(api) => api.fetch_self_profile().await,
                Err(err) => Err(err),
            };
            match view_model.try_write() {
                Ok(mut vm) => {
                    vm.complete(activation, result);
                }
                Err(_) => tracing::debug!("Profile page gone before the response arrived"),
            }
        });
    });

    use_drop(move || {
        if let Ok(mut vm) = view_model.try_write() {
            vm.deactivate();
        }
    });
}
