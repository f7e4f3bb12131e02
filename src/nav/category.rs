//! Page category collaborator.

use std::collections::BTreeMap;

/// Derives the category label for a page pathname.
///
/// Implementations must be pure and deterministic. The pathname always
/// carries leading and trailing slashes, e.g. `/en/guides/rss/`.
pub trait CategoryDeriver {
    /// Category label for `pathname`, or `None` when no category applies.
    fn category_for(&self, pathname: &str) -> Option<&str>;
}

/// Category deriver backed by the `[categories]` table in `docnav.toml`.
///
/// Routes are matched as pathname prefixes. The longest configured route
/// wins, so overlapping routes resolve deterministically.
#[derive(Debug, Clone, Default)]
pub struct RouteCategories {
    /// `(route prefix, label)` pairs, longest route first.
    routes: Vec<(String, String)>,
}

impl RouteCategories {
    /// Build from the configured route -> label table.
    pub fn from_config(categories: &BTreeMap<String, String>) -> Self {
        let mut routes: Vec<(String, String)> = categories
            .iter()
            .map(|(route, label)| (route.clone(), label.clone()))
            .collect();
        routes.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then_with(|| a.0.cmp(&b.0)));
        Self { routes }
    }
}

impl CategoryDeriver for RouteCategories {
    fn category_for(&self, pathname: &str) -> Option<&str> {
        self.routes
            .iter()
            .find(|(route, _)| pathname.starts_with(route.as_str()))
            .map(|(_, label)| label.as_str())
    }
}
