//! Low-level URL assembly: path joining, separator choice and query encoding.

use url::form_urlencoded;

/// Joins a base URL and a path with exactly one `/` between them.
///
/// Every trailing `/` is stripped from `base` and every leading `/` from
/// `path`. An empty `path` leaves the trimmed base as-is.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(join_path("https://example.com/", "/page"), "https://example.com/page");
/// assert_eq!(join_path("https://example.com/", ""), "https://example.com");
/// ```
pub fn join_path(base: &str, path: &str) -> String {
    let mut url = base.trim_end_matches('/').to_string();

    if !path.is_empty() {
        url.push('/');
        url.push_str(path.trim_start_matches('/'));
    }

    url
}

/// Picks `?` for a URL without a query string, `&` otherwise.
pub fn query_separator(url: &str) -> char {
    if url.contains('?') { '&' } else { '?' }
}

/// Serializes pairs as `application/x-www-form-urlencoded`.
///
/// Spaces become `+`; everything outside `[A-Za-z0-9*-._]` is percent-encoded.
/// `*` is left as-is, following the WHATWG form-urlencoded serializer, so
/// `a*b` is written `a*b` rather than `a%2Ab`.
pub fn encode_query<'a, I>(pairs: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish()
}

/// Appends an encoded query to `url`, choosing the separator.
///
/// An empty query leaves the URL unchanged.
pub fn append_query(mut url: String, query: &str) -> String {
    if query.is_empty() {
        return url;
    }

    url.push(query_separator(&url));
    url.push_str(query);
    url
}
