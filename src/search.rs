//! Search redirect
//!
//! Builds a web-search URL from the search box. No request is made.

/// Search engine endpoint; the encoded query is appended
pub const SEARCH_ENDPOINT: &str = "https://www.google.com/search?q=";

/// URL for `query`, or `None` if it is blank
pub fn search_url(query: &str) -> Option<String> {
    let query = query.trim();
    if query.is_empty() {
        return None;
    }
    Some(format!("{}{}", SEARCH_ENDPOINT, urlencoding::encode(query)))
}
