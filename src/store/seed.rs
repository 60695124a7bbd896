use crate::bookmark::{Bookmark, BookmarkId};

/// Sample collection written when no document exists yet.
pub fn seed_bookmarks() -> Vec<Bookmark> {
    [
        (
            1,
            "The Rust Programming Language",
            "https://doc.rust-lang.org/book/",
            "Development",
            "The official book on the Rust programming language",
        ),
        (
            2,
            "MDN Web Docs",
            "https://developer.mozilla.org",
            "Development",
            "Documentation for web technologies",
        ),
        (
            3,
            "Hacker News",
            "https://news.ycombinator.com",
            "News",
            "Social news website focusing on computer science",
        ),
        (
            4,
            "Wikipedia",
            "https://www.wikipedia.org",
            "Reference",
            "The free encyclopedia",
        ),
    ]
    .into_iter()
    .map(|(id, title, url, category, description)| Bookmark {
        id: BookmarkId(id),
        title: title.to_string(),
        url: url.to_string(),
        category: category.to_string(),
        description: description.to_string(),
        date_added: "2024-01-15".to_string(),
    })
    .collect()
}
