use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

pub const SHOPPING_SEARCH_URL: &str = "https://www.google.com/search?tbm=shop&q=";

/// Characters left as-is by JavaScript's `encodeURIComponent`.
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Shopping search URL for a product topic.
///
/// Returns `None` unless the topic is a product with a non-blank search term.
pub fn shopping_link(is_product: bool, search_term: &str) -> Option<String> {
    let term = search_term.trim();
    if !is_product || term.is_empty() {
        return None;
    }
    Some(format!(
        "{SHOPPING_SEARCH_URL}{}",
        utf8_percent_encode(term, QUERY_COMPONENT)
    ))
}
