//! Dot-notation path resolution
//!
//! `about.items`, `compare.columns.left`, `works.projects.0.title`.
//! Resolution never fails: the first absent segment short-circuits to `None`,
//! which is the null sentinel every binding rule checks before writing.

use serde_json::Value;

/// Walk `path` down from `root`.
///
/// Objects are walked by key, arrays by numeric index. JSON `null` counts as
/// absent, so a present-but-null leaf resolves to `None` as well. An unset
/// document (`root == None`) resolves every path to `None`.
pub fn resolve<'a>(root: Option<&'a Value>, path: &str) -> Option<&'a Value> {
    path.split('.')
        .try_fold(root?, |current, segment| step(current, segment))
}

fn step<'a>(current: &'a Value, segment: &str) -> Option<&'a Value> {
    let next = match current {
        Value::Object(map) => map.get(segment),
        Value::Array(arr) => segment.parse::<usize>().ok().and_then(|i| arr.get(i)),
        _ => None,
    }?;

    if next.is_null() {
        None
    } else {
        Some(next)
    }
}
