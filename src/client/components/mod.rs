pub mod charts;
pub mod field;
pub mod guard;
pub mod navbar;
pub mod page;
pub mod stage_panel;
pub mod title;
pub mod toast;
pub mod wizard;

pub use charts::{BarChart, DonutChart};
pub use field::{BoundInput, FormField};
pub use guard::{RequireAdmin, RequireUser};
pub use navbar::Navbar;
pub use page::Page;
pub use stage_panel::StagePanel;
pub use title::BrandTitle;
pub use toast::ToastHost;
