use urlencoding::encode;

use crate::unread::application::domain::entities::RawQuery;

/// `key=value&…` with percent-encoded parts. BTreeMap ordering makes the
/// output deterministic for a given mapping.
pub fn stringify(query: &RawQuery) -> String {
    query
        .iter()
        .map(|(k, v)| format!("{}={}", encode(k), encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Stringify the query with `page` forced to `page`. Used for pagination
/// links and for the corrected-page redirect.
pub fn page_query(query: &RawQuery, page: u32) -> String {
    let mut q = query.clone();
    q.insert("page".to_string(), page.to_string());
    stringify(&q)
}

/// Query suffix for a link that switches scope: `key` is rewritten to
/// `value` (dropped when `value` is empty) and `page` is dropped so the new
/// scope never starts on a stale page. Returns `""` or `"?…"`.
pub fn build_query_string(query: &RawQuery, key: &str, value: &str) -> String {
    let mut q = query.clone();
    if value.is_empty() {
        q.remove(key);
    } else {
        q.insert(key.to_string(), value.to_string());
    }
    q.remove("page");

    let qs = stringify(&q);
    if qs.is_empty() {
        String::new()
    } else {
        format!("?{qs}")
    }
}
