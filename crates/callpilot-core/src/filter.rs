//! Case-insensitive substring filtering shared by the list views.

/// Returns true if `query` occurs, ignoring case, in any of `fields`.
///
/// An empty query matches everything.
pub fn matches_query(query: &str, fields: &[&str]) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    fields
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Indices of `items` accepted by `pred`, in original order.
pub fn filtered_indices<T>(items: &[T], pred: impl Fn(&T) -> bool) -> Vec<usize> {
    items
        .iter()
        .enumerate()
        .filter(|(_, item)| pred(item))
        .map(|(idx, _)| idx)
        .collect()
}
