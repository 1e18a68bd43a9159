//! View-state core: flags, pagination, status colors, navigation

pub mod error;
pub mod navigation;
pub mod pagination;
pub mod status;
pub mod view_state;

pub use error::ContractViolation;
pub use navigation::{MenuRow, MenuTree, NavigationState, MENU};
pub use pagination::{page_window, paginate, Page, PageSlot, PaginationState};
pub use status::{classify, DisplayCategory, StatusLabel};
pub use view_state::{TransitionTimer, ViewStateChange, ViewStateFlags, ViewStateStore};
