//! Page records from the external content collection.

use serde::{Deserialize, Serialize};

use super::JsonMap;

/// Content-defined page type.
///
/// Open set: type strings this crate does not know about deserialize to
/// [`PageType::Other`] and never match the type-to-parent table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PageType {
    Recipe,
    Tutorial,
    Integration,
    Deploy,
    Cms,
    Backend,
    Other,
}

impl PageType {
    /// Parse a content-defined type string.
    pub fn from_name(name: &str) -> Self {
        match name {
            "recipe" => Self::Recipe,
            "tutorial" => Self::Tutorial,
            "integration" => Self::Integration,
            "deploy" => Self::Deploy,
            "cms" => Self::Cms,
            "backend" => Self::Backend,
            _ => Self::Other,
        }
    }

    /// Canonical type name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Recipe => "recipe",
            Self::Tutorial => "tutorial",
            Self::Integration => "integration",
            Self::Deploy => "deploy",
            Self::Cms => "cms",
            Self::Backend => "backend",
            Self::Other => "other",
        }
    }
}

impl From<String> for PageType {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl From<PageType> for String {
    fn from(page_type: PageType) -> Self {
        page_type.name().to_string()
    }
}

/// A single page entry in the page index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageRecord {
    /// Full slug for the page, language prefix included.
    pub slug: String,
    /// Declared page data.
    #[serde(default)]
    pub data: PageData,
}

/// Page data declared by the content collection.
///
/// Unknown fields are preserved in `extra` so callers with richer schemas
/// can round-trip records through this crate.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PageData {
    pub title: Option<String>,
    /// Content-defined page type (serialized as `type`).
    #[serde(rename = "type")]
    pub page_type: Option<PageType>,
    /// Additional user-defined fields (raw JSON).
    #[serde(flatten)]
    pub extra: JsonMap,
}
