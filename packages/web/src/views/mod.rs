mod confirm;
pub use confirm::{Confirm, ConfirmWithoutToken};

mod home;
pub use home::Home;
