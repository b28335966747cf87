//! Context-provided stores. Each store is a bundle of signals behind a Copy
//! handle; `App` provides one instance of the session and toast stores, the
//! management screen provides its own wizard store.

pub mod session;
pub mod toast;
pub mod wizard;

pub use session::SessionStore;
pub use toast::ToastStore;
pub use wizard::WizardStore;
