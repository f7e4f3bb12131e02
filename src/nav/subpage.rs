//! Sub-page classification rules.
//!
//! Four checks run in a fixed order and short-circuit: the top-level
//! exception list, the shared trimmed base, the category-to-parent table,
//! and the type-to-parent table. Reordering them changes observable
//! results.

use std::sync::LazyLock;

use rustc_hash::FxHashMap;

use super::CategoryDeriver;
use super::section::remove_sub_page_segment;
use crate::page::{PageIndex, PageType};

/// Known parent slug for each page type.
///
/// Partial: types without an entry never match the type rule.
static TYPE_PARENTS: LazyLock<FxHashMap<PageType, &'static str>> =
    LazyLock::new(|| FxHashMap::from_iter([(PageType::Recipe, "recipes")]));

/// Known parent slug for each page category. Partial, like [`TYPE_PARENTS`].
static CATEGORY_PARENTS: LazyLock<FxHashMap<&'static str, &'static str>> =
    LazyLock::new(|| FxHashMap::from_iter([("Error Reference", "reference/error-reference")]));

/// Slugs of pages that appear at the top level even though they are in a
/// sub-category.
const TOP_LEVEL_EXCEPTIONS: &[&str] = &["recipes/studio"];

/// Sub-page classifier over an injected page index and category deriver.
///
/// Both collaborators are read-only; the matcher holds no state of its own
/// and is safe to share across threads.
pub struct SubPageMatcher<'a> {
    index: &'a dyn PageIndex,
    categories: &'a dyn CategoryDeriver,
}

impl<'a> SubPageMatcher<'a> {
    pub fn new(index: &'a dyn PageIndex, categories: &'a dyn CategoryDeriver) -> Self {
        Self { index, categories }
    }

    /// Test if `current_page` is considered a sub-page of `parent_slug`.
    ///
    /// `current_page` is the full slug for the current page, e.g.
    /// `en/guides/rss`; `parent_slug` is the language-less slug for the
    /// parent to test against, e.g. `guides/content-collections`.
    pub fn is_sub_page(&self, current_page: &str, parent_slug: &str) -> bool {
        // Test 1: is this page a known, top-level page? Don't match its parent.
        for slug in TOP_LEVEL_EXCEPTIONS {
            let current_is_exception = current_page
                .strip_suffix(slug)
                .is_some_and(|prefix| prefix.ends_with('/'));
            let parent_is_exception = parent_slug == *slug;
            if current_is_exception != parent_is_exception {
                return false;
            }
        }

        // Test 2: do the two pages share a base URL segment?
        if remove_sub_page_segment(current_page).ends_with(remove_sub_page_segment(parent_slug)) {
            return true;
        }

        // Test 3: is there a known parent page for this page category?
        let pathname = format!("/{current_page}/");
        if let Some(category) = self.categories.category_for(&pathname)
            && CATEGORY_PARENTS.get(category).copied() == Some(parent_slug)
        {
            return true;
        }

        // Test 4: is there a known parent page for this page type?
        if let Some(page_type) = self
            .index
            .find_by_slug(current_page)
            .and_then(|record| record.data.page_type)
            && TYPE_PARENTS.get(&page_type).copied() == Some(parent_slug)
        {
            return true;
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::nav::RouteCategories;
    use crate::page::{PageData, PageRecord, PageSet};

    fn page(slug: &str, page_type: Option<PageType>) -> PageRecord {
        PageRecord {
            slug: slug.to_string(),
            data: PageData {
                page_type,
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_language_prefixed_page_matches_parent_base() {
        let pages = PageSet::default();
        let categories = RouteCategories::default();
        let matcher = SubPageMatcher::new(&pages, &categories);

        assert!(matcher.is_sub_page(
            "en/guides/content-collections",
            "guides/content-collections"
        ));
        // deep sub-pages share the trimmed base
        assert!(matcher.is_sub_page("en/guides/deploy/netlify", "guides/deploy"));
        assert!(matcher.is_sub_page("en/install/auto", "install"));
    }

    #[test]
    fn test_unrelated_pages_do_not_match() {
        let pages = PageSet::default();
        let categories = RouteCategories::default();
        let matcher = SubPageMatcher::new(&pages, &categories);

        assert!(!matcher.is_sub_page("en/guides/rss", "guides/content-collections"));
        assert!(!matcher.is_sub_page("en/reference/cli-reference", "guides"));
    }

    #[test]
    fn test_exception_page_is_not_a_sub_page_of_its_section() {
        let pages = PageSet::default();
        let categories = RouteCategories::default();
        let matcher = SubPageMatcher::new(&pages, &categories);

        // current is the exception page, parent is not the exception slug
        assert!(!matcher.is_sub_page("en/recipes/studio", "recipes"));
        // parent is the exception slug, current is some other page
        assert!(!matcher.is_sub_page("en/recipes/rss", "recipes/studio"));
    }

    #[test]
    fn test_exception_page_matches_itself() {
        let pages = PageSet::default();
        let categories = RouteCategories::default();
        let matcher = SubPageMatcher::new(&pages, &categories);

        // both exception flags hold, so the check falls through and the
        // shared trimmed base decides
        assert!(matcher.is_sub_page("en/recipes/studio", "recipes/studio"));
    }

    #[test]
    fn test_category_table_links_page_to_parent() {
        let pages = PageSet::default();
        let categories = RouteCategories::from_config(&BTreeMap::from([(
            "/en/reference/errors/".to_string(),
            "Error Reference".to_string(),
        )]));
        let matcher = SubPageMatcher::new(&pages, &categories);

        assert!(matcher.is_sub_page("en/reference/errors/astro-errors", "reference/error-reference"));
        // the table maps the category to exactly one parent
        assert!(!matcher.is_sub_page("en/reference/errors/astro-errors", "reference"));
    }

    #[test]
    fn test_type_table_links_page_to_parent() {
        let pages = PageSet::new(vec![
            page("en/guides/docker", Some(PageType::Recipe)),
            page("en/guides/0-introduction", Some(PageType::Tutorial)),
            page("en/guides/no-type", None),
        ]);
        let categories = RouteCategories::default();
        let matcher = SubPageMatcher::new(&pages, &categories);

        assert!(matcher.is_sub_page("en/guides/docker", "recipes"));
        // `tutorial` has no entry in the type table
        assert!(!matcher.is_sub_page("en/guides/0-introduction", "recipes"));
        // no declared type
        assert!(!matcher.is_sub_page("en/guides/no-type", "recipes"));
        // pages absent from the index fall through to false
        assert!(!matcher.is_sub_page("en/guides/unknown", "recipes"));
    }

    #[test]
    fn test_type_rule_requires_exact_parent() {
        let pages = PageSet::new(vec![page("en/guides/docker", Some(PageType::Recipe))]);
        let categories = RouteCategories::default();
        let matcher = SubPageMatcher::new(&pages, &categories);

        assert!(!matcher.is_sub_page("en/guides/docker", "guides/content-collections"));
    }
}
