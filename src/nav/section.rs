//! Sub-section path trimming.

/// Path segments that introduce a sub-page hierarchy.
///
/// Include new pages with sub-pages as part of this list.
pub const SUB_PAGE_SECTIONS: &[&str] = &[
    "install",
    "deploy",
    "integrations-guide",
    "tutorial",
    "migrate-to-astro",
    "recipes",
    "cms",
    "backend",
];

/// Remove the sub-page segment of a URL string.
///
/// Cuts the path at the separator that follows the earliest section
/// occurrence: `en/guides/deploy/netlify` -> `en/guides/deploy`. Paths
/// without a section segment are returned unchanged.
pub fn remove_sub_page_segment(path: &str) -> &str {
    let Some(start) = SUB_PAGE_SECTIONS
        .iter()
        .filter_map(|&section| find_section(path, section))
        .min()
    else {
        return path;
    };

    // A section only matches when followed by `/`, so a separator always
    // exists at or after `start`.
    match path[start..].find('/') {
        Some(offset) => &path[..start + offset],
        None => path,
    }
}

/// Earliest occurrence of `section` immediately followed by `/`.
///
/// Plain substring search: occurrences inside a longer segment also match.
fn find_section(path: &str, section: &str) -> Option<usize> {
    path.match_indices(section)
        .find(|&(start, matched)| path[start + matched.len()..].starts_with('/'))
        .map(|(start, _)| start)
}
