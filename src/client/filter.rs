//! Derived views over the mirrored collection.

use crate::bookmark::Bookmark;

/// Category filter value matching every bookmark.
pub const ALL_CATEGORIES: &str = "All";

/// Bookmarks matching `search_term` and `category`, in collection order.
///
/// The search term matches case-insensitively against title, description or
/// url; an empty term matches everything. `category` must match exactly
/// unless it is [`ALL_CATEGORIES`].
pub fn visible_bookmarks<'a>(
    collection: &'a [Bookmark],
    search_term: &str,
    category: &str,
) -> Vec<&'a Bookmark> {
    let needle = search_term.to_lowercase();
    collection
        .iter()
        .filter(|b| {
            needle.is_empty()
                || b.title.to_lowercase().contains(&needle)
                || b.description.to_lowercase().contains(&needle)
                || b.url.to_lowercase().contains(&needle)
        })
        .filter(|b| category == ALL_CATEGORIES || b.category == category)
        .collect()
}

/// `"All"` followed by each distinct non-empty category, first-seen order.
pub fn category_options(collection: &[Bookmark]) -> Vec<String> {
    let mut options = vec![ALL_CATEGORIES.to_string()];
    for bookmark in collection {
        if !bookmark.category.is_empty() && !options[1..].contains(&bookmark.category) {
            options.push(bookmark.category.clone());
        }
    }
    options
}
