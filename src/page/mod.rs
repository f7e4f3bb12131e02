//! Page records and the read-only page index.

mod index;
mod record;

pub use index::{IndexError, PageIndex, PageSet};
pub use record::{PageData, PageRecord, PageType};

/// A JSON object map for storing arbitrary metadata fields.
pub type JsonMap = serde_json::Map<String, serde_json::Value>;
