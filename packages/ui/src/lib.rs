//! This crate contains all shared UI for the workspace.

mod confirmation;
pub use confirmation::{use_confirmation, Confirmation, ConfirmationPage};

mod navigation;
pub use navigation::{Navigate, HOME_PATH};

mod notice;
pub use notice::{AlertNotice, FailureNotice, Notify, FAILURE_MESSAGE};

mod transport;
pub use transport::ActivationTransport;
