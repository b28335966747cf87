//! The management wizard's tab panels.

pub mod contacts_form;
pub mod final_form;
pub mod office_form;
pub mod processing;
pub mod stock_form;

pub use contacts_form::ContactsTab;
pub use final_form::FinalTab;
pub use office_form::OfficeTab;
pub use processing::ProcessingTabs;
pub use stock_form::StockTab;
