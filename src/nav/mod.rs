//! Sub-page navigation heuristics: section trimming and classification.

mod category;
mod section;
mod subpage;

pub use category::{CategoryDeriver, RouteCategories};
pub use section::{SUB_PAGE_SECTIONS, remove_sub_page_segment};
pub use subpage::SubPageMatcher;
