use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Path and query key of the movie lookup endpoint; the encoded title follows.
pub const MOVIE_LOOKUP_PATH: &str = "/movie?t=";

/// Everything except the URI component unreserved marks.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode `value` as a URI component: UTF-8 bytes outside the
/// unreserved set become uppercase `%XX`, space included (`%20`).
pub fn encode_uri_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

/// Relative url of the lookup request for a raw title.
pub fn movie_lookup_url(title: &str) -> String {
    format!("{MOVIE_LOOKUP_PATH}{}", encode_uri_component(title))
}
