//! Dot-path navigation over a JSON object tree

use serde_json::{Map, Value};

/// Split `a.b.c` into (`Some("a.b")`, `"c"`)
fn split_leaf(key: &str) -> (Option<&str>, &str) {
    match key.rsplit_once('.') {
        Some((parents, leaf)) => (Some(parents), leaf),
        None => (None, key),
    }
}

/// Coerce a node into an object, discarding any scalar it held
fn ensure_object(node: &mut Value) -> &mut Map<String, Value> {
    if !node.is_object() {
        *node = Value::Object(Map::new());
    }
    match node {
        Value::Object(map) => map,
        _ => unreachable!("node was just replaced with an object"),
    }
}

pub(crate) fn get_path<'a>(root: &'a Value, key: &str) -> Option<&'a Value> {
    key.split('.').try_fold(root, |node, segment| node.get(segment))
}

pub(crate) fn set_path(root: &mut Value, key: &str, value: Value) {
    let (parents, leaf) = split_leaf(key);
    let mut node = root;
    for segment in parents.into_iter().flat_map(|p| p.split('.')) {
        node = ensure_object(node)
            .entry(segment.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
    }
    ensure_object(node).insert(leaf.to_string(), value);
}

/// Remove the value at `key`. Returns whether anything was removed.
pub(crate) fn delete_path(root: &mut Value, key: &str) -> bool {
    let (parents, leaf) = split_leaf(key);
    let mut node = root;
    for segment in parents.into_iter().flat_map(|p| p.split('.')) {
        match node.get_mut(segment) {
            Some(next) => node = next,
            None => return false,
        }
    }
    node.as_object_mut()
        .map(|map| map.remove(leaf).is_some())
        .unwrap_or(false)
}
