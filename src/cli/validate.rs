//! Page index validation command.
//!
//! Data-quality checks over `pages.json`: duplicate slugs and malformed
//! slugs. These checks do not change classifier behavior - `is_sub_page`
//! tolerates bad slugs by returning `false`.

use std::sync::LazyLock;

use anyhow::{Context, Result};
use regex::Regex;
use rustc_hash::FxHashSet;

use crate::cli::args::ValidateArgs;
use crate::config::NavConfig;
use crate::log;
use crate::page::PageSet;

/// Valid slug shape: lowercase alphanumeric segments (`-`, `_` and `.`
/// allowed) separated by single slashes, no leading or trailing slash.
static RE_VALID_SLUG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9][a-z0-9._-]*(?:/[a-z0-9][a-z0-9._-]*)*$").unwrap()
});

/// Validate the configured page index
pub fn validate_index(args: &ValidateArgs, config: &NavConfig) -> Result<()> {
    let index_path = config.index_path();
    let pages = PageSet::from_json_file(&index_path)
        .with_context(|| format!("failed to load page index `{}`", index_path.display()))?;

    if pages.is_empty() {
        log!("validate"; "page index is empty");
        return Ok(());
    }

    log!("validate"; "checking {} page{}", pages.len(), plural_s(pages.len()));

    let duplicates = find_duplicate_slugs(&pages);
    let malformed = find_malformed_slugs(&pages);

    if duplicates.is_empty() {
        log!("validate"; "no duplicate slugs");
    } else {
        log!("validate"; "found {} duplicate slug{}", duplicates.len(), plural_s(duplicates.len()));
        for slug in &duplicates {
            eprintln!("- {}", slug);
        }
    }

    if malformed.is_empty() {
        log!("validate"; "all slugs well-formed");
    } else {
        log!("validate"; "found {} malformed slug{}", malformed.len(), plural_s(malformed.len()));
        for slug in &malformed {
            eprintln!("- {}", slug);
        }
    }

    let issues = duplicates.len() + malformed.len();
    if issues > 0 && !args.warn_only {
        anyhow::bail!("validation failed: {} issue{}", issues, plural_s(issues));
    }
    Ok(())
}

/// Return "s" suffix for plural counts
fn plural_s(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// Slugs that appear more than once, in first-seen order.
fn find_duplicate_slugs(pages: &PageSet) -> Vec<String> {
    let mut seen = FxHashSet::default();
    let mut reported = FxHashSet::default();
    let mut duplicates = Vec::new();
    for record in pages.iter() {
        if !seen.insert(record.slug.as_str()) && reported.insert(record.slug.as_str()) {
            duplicates.push(record.slug.clone());
        }
    }
    duplicates
}

/// Slugs that do not match the expected shape, in index order.
fn find_malformed_slugs(pages: &PageSet) -> Vec<String> {
    pages
        .iter()
        .filter(|record| !RE_VALID_SLUG.is_match(&record.slug))
        .map(|record| record.slug.clone())
        .collect()
}
