//! Query command implementation.
//!
//! Runs sub-page and trim queries against the configured page index and
//! prints JSON results, one object per query.

use std::io::BufRead;

use anyhow::{Context, Result};
use serde_json::{Map, Value as JsonValue};

use crate::cli::args::{QueryArgs, QueryCommand};
use crate::config::NavConfig;
use crate::debug;
use crate::nav::{RouteCategories, SubPageMatcher, remove_sub_page_segment};
use crate::page::PageSet;

/// Execute query command
pub fn run_query(args: &QueryArgs, config: &NavConfig) -> Result<()> {
    match &args.command {
        QueryCommand::SubPage {
            current,
            parent,
            pretty,
        } => query_sub_page(current, parent, *pretty, config),
        QueryCommand::Trim { paths, pretty } => query_trim(paths, *pretty),
    }
}

fn query_sub_page(current: &str, parent: &str, pretty: bool, config: &NavConfig) -> Result<()> {
    let index_path = config.index_path();
    let pages = PageSet::from_json_file(&index_path)
        .with_context(|| format!("failed to load page index `{}`", index_path.display()))?;
    debug!("query"; "loaded {} page{} from {}",
        pages.len(), if pages.len() == 1 { "" } else { "s" }, index_path.display());

    let categories = RouteCategories::from_config(&config.categories);
    let matcher = SubPageMatcher::new(&pages, &categories);

    let mut result = Map::new();
    result.insert(
        "current".to_string(),
        JsonValue::String(current.to_string()),
    );
    result.insert("parent".to_string(), JsonValue::String(parent.to_string()));
    result.insert(
        "sub-page".to_string(),
        JsonValue::Bool(matcher.is_sub_page(current, parent)),
    );

    print_json(&JsonValue::Object(result), pretty)
}

fn query_trim(paths: &[String], pretty: bool) -> Result<()> {
    let paths = expand_stdin_paths(paths)?;

    let results: Vec<JsonValue> = paths
        .iter()
        .map(|path| {
            let mut obj = Map::new();
            obj.insert("path".to_string(), JsonValue::String(path.clone()));
            obj.insert(
                "trimmed".to_string(),
                JsonValue::String(remove_sub_page_segment(path).to_string()),
            );
            JsonValue::Object(obj)
        })
        .collect();

    print_json(&JsonValue::Array(results), pretty)
}

/// Replace a lone `-` argument with slugs read from stdin, one per line.
fn expand_stdin_paths(paths: &[String]) -> Result<Vec<String>> {
    if paths.len() != 1 || paths[0] != "-" {
        return Ok(paths.to_vec());
    }

    let stdin = std::io::stdin();
    let mut collected = Vec::new();
    for line in stdin.lock().lines() {
        let line = line.context("failed to read slugs from stdin")?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            collected.push(trimmed.to_string());
        }
    }
    Ok(collected)
}

fn print_json(value: &JsonValue, pretty: bool) -> Result<()> {
    let formatted = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", formatted);
    Ok(())
}
