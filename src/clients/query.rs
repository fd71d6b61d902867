//! Query parameter building for side-loading and collection iteration.

use std::collections::HashMap;

/// The collection-iterator keys accepted from caller-supplied parameters.
///
/// Any other key is silently dropped before the query string is built. The
/// whitelist is a deliberate boundary: arbitrary caller parameters never
/// reach the wire through this path.
pub const ITERATOR_KEYS: [&str; 5] = ["per_page", "page", "sort_order", "sort_by", "external_id"];

/// Builds query parameters from a side-load list and iterator options.
///
/// - `sideload` present → the `include` parameter is set to the comma-joined
///   resource names.
/// - `iterators` present → only the keys in [`ITERATOR_KEYS`] are copied.
///
/// Pure and idempotent; missing inputs yield an empty map.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use zendesk_api::prepare_query_params;
///
/// let sideload = vec!["users".to_string(), "groups".to_string()];
/// let mut iterators = HashMap::new();
/// iterators.insert("per_page".to_string(), "50".to_string());
/// iterators.insert("favorite_color".to_string(), "purple".to_string());
///
/// let params = prepare_query_params(Some(&sideload), Some(&iterators));
/// assert_eq!(params.get("include").unwrap(), "users,groups");
/// assert_eq!(params.get("per_page").unwrap(), "50");
/// assert!(params.get("favorite_color").is_none());
/// ```
#[must_use]
pub fn prepare_query_params(
    sideload: Option<&[String]>,
    iterators: Option<&HashMap<String, String>>,
) -> HashMap<String, String> {
    let mut params = HashMap::new();

    if let Some(sideload) = sideload {
        params.insert("include".to_string(), sideload.join(","));
    }

    if let Some(iterators) = iterators {
        for (key, value) in iterators {
            if ITERATOR_KEYS.contains(&key.as_str()) {
                params.insert(key.clone(), value.clone());
            }
        }
    }

    params
}
