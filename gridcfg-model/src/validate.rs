//! Semantic checks run after a configuration has been deserialized.

use std::collections::HashSet;

use gridcfg_core::is_identifier;
use miette::SourceSpan;

use crate::{ClusterConfig, Result, SourceContext};

/// Find every quoted occurrence of `value` in the source.
///
/// TOML and JSON both quote string values, so `"orders"` finds the cache
/// named `orders` without matching keys or substrings of other names.
pub(crate) fn find_quoted_spans(src: &str, value: &str) -> Vec<SourceSpan> {
    let pattern = format!("\"{value}\"");
    src.match_indices(&pattern)
        // +1 to skip the opening quote
        .map(|(pos, _)| SourceSpan::from((pos + 1, value.len())))
        .collect()
}

/// Find the span of a string value, falling back to any occurrence.
pub(crate) fn find_name_span(src: &str, name: &str) -> Option<SourceSpan> {
    if name.is_empty() {
        return None;
    }
    if let Some(span) = find_quoted_spans(src, name).into_iter().next() {
        return Some(span);
    }
    src.find(name)
        .map(|pos| SourceSpan::from((pos, name.len())))
}

/// Find the span of a key such as `name` in `name = ""` or `"name": ""`.
fn find_key_span(src: &str, key: &str) -> Option<SourceSpan> {
    let patterns = [format!("\"{key}\""), format!("{key} ="), format!("{key}=")];
    patterns.iter().find_map(|pattern| {
        src.find(pattern.as_str()).map(|pos| {
            let start = if pattern.starts_with('"') { pos + 1 } else { pos };
            SourceSpan::from((start, key.len()))
        })
    })
}

/// Validate a configuration against its source document.
pub(crate) fn validate_config(config: &ClusterConfig, ctx: &SourceContext) -> Result<()> {
    let src = ctx.src();

    if config.name.trim().is_empty() {
        return Err(ctx.validation_error("cluster name cannot be empty", find_key_span(src, "name")));
    }

    let mut cache_names: HashSet<&str> = HashSet::new();
    for cache in &config.caches {
        if cache.name.trim().is_empty() {
            return Err(ctx.validation_error("cache name cannot be empty", None));
        }
        if !cache_names.insert(&cache.name) {
            let spans = find_quoted_spans(src, &cache.name);
            return Err(match spans.as_slice() {
                [first, second, ..] => ctx.duplicate_cache_error(&cache.name, *first, *second),
                _ => ctx.validation_error(
                    format!("duplicate cache name '{}'", cache.name),
                    spans.first().copied(),
                ),
            });
        }

        if let Some(store) = &cache.store
            && let Some(bean_id) = store.data_source_bean()
        {
            let span = find_name_span(src, bean_id);
            if !is_identifier(bean_id) {
                return Err(ctx.invalid_identifier_error(bean_id, "data source bean id", span));
            }
            if store.database.is_none() {
                return Err(ctx.missing_database_error(&cache.name, bean_id, span));
            }
        }
    }

    let mut igfs_names: HashSet<&str> = HashSet::new();
    for igfs in &config.igfs {
        if igfs.name.trim().is_empty() {
            return Err(ctx.validation_error("file system name cannot be empty", None));
        }
        if !igfs_names.insert(&igfs.name) {
            return Err(ctx.validation_error(
                format!("duplicate file system name '{}'", igfs.name),
                find_quoted_spans(src, &igfs.name).get(1).copied(),
            ));
        }
        for companion in [igfs.data_cache_name(), igfs.meta_cache_name()] {
            if cache_names.contains(companion.as_str()) {
                return Err(ctx.companion_cache_error(
                    &companion,
                    &igfs.name,
                    find_name_span(src, &companion),
                ));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_quoted_spans() {
        let src = r#"name = "a"
[[caches]]
name = "orders"
[[caches]]
name = "orders""#;
        let spans = find_quoted_spans(src, "orders");
        assert_eq!(spans.len(), 2);
        assert_eq!(&src[spans[0].offset()..spans[0].offset() + 6], "orders");
    }

    #[test]
    fn test_find_quoted_spans_ignores_substrings() {
        let src = r#"name = "orders-archive""#;
        assert!(find_quoted_spans(src, "orders").is_empty());
        assert!(find_name_span(src, "orders").is_some());
    }

    #[test]
    fn test_find_key_span() {
        let toml = "name = \"\"";
        assert_eq!(find_key_span(toml, "name").map(|s| s.offset()), Some(0));

        let json = "{\"name\": \"\"}";
        assert_eq!(find_key_span(json, "name").map(|s| s.offset()), Some(2));
    }
}
