//! Read-only page index.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::PageRecord;

/// Page index loading errors
#[derive(Debug, Error)]
pub enum IndexError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Page index parsing error")]
    Json(#[from] serde_json::Error),
}

/// Read-only lookup into the external page collection.
pub trait PageIndex {
    /// Find a page record by exact slug equality.
    fn find_by_slug(&self, slug: &str) -> Option<&PageRecord>;
}

/// In-memory page index over an ordered collection of records.
///
/// Lookup is a linear scan: the index holds one record per documentation
/// page and is read once per process.
#[derive(Debug, Clone, Default)]
pub struct PageSet {
    records: Vec<PageRecord>,
}

impl PageSet {
    pub fn new(records: Vec<PageRecord>) -> Self {
        Self { records }
    }

    /// Load records from a JSON array file (`pages.json`).
    pub fn from_json_file(path: &Path) -> Result<Self, IndexError> {
        let content =
            fs::read_to_string(path).map_err(|err| IndexError::Io(path.to_path_buf(), err))?;
        Self::from_json(&content)
    }

    /// Parse records from a JSON array string.
    pub fn from_json(content: &str) -> Result<Self, IndexError> {
        let records = serde_json::from_str(content)?;
        Ok(Self { records })
    }

    pub fn iter(&self) -> impl Iterator<Item = &PageRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl PageIndex for PageSet {
    fn find_by_slug(&self, slug: &str) -> Option<&PageRecord> {
        self.records.iter().find(|record| record.slug == slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::{PageData, PageType};

    fn record(slug: &str, title: &str) -> PageRecord {
        PageRecord {
            slug: slug.to_string(),
            data: PageData {
                title: Some(title.to_string()),
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_find_by_slug() {
        let pages = PageSet::new(vec![
            record("en/guides/rss", "RSS"),
            record("en/guides/markdown", "Markdown"),
        ]);

        let found = pages.find_by_slug("en/guides/markdown").unwrap();
        assert_eq!(found.data.title.as_deref(), Some("Markdown"));
        assert!(pages.find_by_slug("en/guides/unknown").is_none());
    }

    #[test]
    fn test_find_returns_first_match() {
        let pages = PageSet::new(vec![
            record("en/guides/rss", "First"),
            record("en/guides/rss", "Second"),
        ]);

        let found = pages.find_by_slug("en/guides/rss").unwrap();
        assert_eq!(found.data.title.as_deref(), Some("First"));
    }

    #[test]
    fn test_from_json() {
        let pages = PageSet::from_json(
            r#"[
                {"slug": "en/guides/docker", "data": {"type": "recipe"}},
                {"slug": "en/guides/rss"}
            ]"#,
        )
        .unwrap();

        assert_eq!(pages.len(), 2);
        let docker = pages.find_by_slug("en/guides/docker").unwrap();
        assert_eq!(docker.data.page_type, Some(PageType::Recipe));
    }

    #[test]
    fn test_from_json_rejects_non_array() {
        assert!(matches!(
            PageSet::from_json(r#"{"slug": "en/guides/rss"}"#),
            Err(IndexError::Json(_))
        ));
    }

    #[test]
    fn test_from_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pages.json");
        std::fs::write(&path, r#"[{"slug": "en/guides/rss"}]"#).unwrap();

        let pages = PageSet::from_json_file(&path).unwrap();
        assert_eq!(pages.len(), 1);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = PageSet::from_json_file(Path::new("/nonexistent/pages.json")).unwrap_err();
        assert!(matches!(err, IndexError::Io(..)));
    }
}
