use dioxus::prelude::*;

/// Where a successful confirmation sends the user.
pub const HOME_PATH: &str = "/";

/// Requests a view change. Implemented for Dioxus event handlers so the
/// hosting app decides how a path maps onto its own router.
pub trait Navigate {
    fn navigate_to(&self, path: &str);
}

impl<N: Navigate + ?Sized> Navigate for &N {
    fn navigate_to(&self, path: &str) {
        (**self).navigate_to(path)
    }
}

impl Navigate for EventHandler<String> {
    fn navigate_to(&self, path: &str) {
        self.call(path.to_string());
    }
}
