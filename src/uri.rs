//! Percent-encoding for URIs and URI path components
//!
//! Bytes outside the unreserved set (`A-Z a-z 0-9 - _ . ~`) are encoded as
//! `%XX` with upper-case hex digits.
//!
//! Path components are encoded twice. Web servers and proxies commonly
//! decode a request path once before routing it, which would turn an encoded
//! `%2F` back into a segment separator. After one intermediary decode pass a
//! double-encoded component still carries its slash as `%2F`, and
//! [`unescape_uri_path_component`] recovers the original text.

/// Escape a string for use anywhere in a URI
///
/// Reserved delimiters, spaces and `+` are encoded; `/` is left as-is so the
/// result can still be used as a full path.
///
/// # Examples
///
/// ```
/// use reinhardt_markup::escape_uri;
///
/// assert_eq!(escape_uri("+/ ?#&:!xyz%"), "%2B/%20%3F%23%26%3A%21xyz%25");
/// assert_eq!(escape_uri("/search/rust lang"), "/search/rust%20lang");
/// ```
pub fn escape_uri(input: &str) -> String {
	urlencoding::encode(input).replace("%2F", "/")
}

/// Escape a string for use as a single URI path segment
///
/// The result survives one generic percent-decode by an intermediary
/// without introducing new segment boundaries.
///
/// # Examples
///
/// ```
/// use reinhardt_markup::{escape_uri_path_component, unescape_uri_path_component};
///
/// let encoded = escape_uri_path_component("a/b");
/// assert_eq!(encoded, "a%252Fb");
///
/// // What the application sees after the web server decoded the path once
/// let routed = urlencoding::decode(&encoded).unwrap();
/// assert_eq!(routed, "a%2Fb");
/// assert_eq!(unescape_uri_path_component(&routed), "a/b");
/// ```
pub fn escape_uri_path_component(input: &str) -> String {
	escape_uri_path_component_bytes(input.as_bytes())
}

/// Escape arbitrary bytes for use as a single URI path segment
///
/// # Examples
///
/// ```
/// use reinhardt_markup::escape_uri_path_component_bytes;
///
/// assert_eq!(escape_uri_path_component_bytes(&[0xff, b'/']), "%25FF%252F");
/// ```
pub fn escape_uri_path_component_bytes(input: &[u8]) -> String {
	let once = urlencoding::encode_binary(input);
	urlencoding::encode(&once).into_owned()
}

/// Recover a path segment encoded by [`escape_uri_path_component`]
///
/// Expects the value after the intermediary's decode pass, so only one
/// layer of encoding remains. Decoded bytes that are not valid UTF-8 are
/// replaced with U+FFFD; use [`unescape_uri_path_component_bytes`] when the
/// original was not text.
///
/// # Examples
///
/// ```
/// use reinhardt_markup::unescape_uri_path_component;
///
/// assert_eq!(unescape_uri_path_component("a%2Fb"), "a/b");
/// assert_eq!(unescape_uri_path_component("caf%C3%A9"), "café");
/// ```
pub fn unescape_uri_path_component(input: &str) -> String {
	String::from_utf8_lossy(&unescape_uri_path_component_bytes(input.as_bytes())).into_owned()
}

/// Recover the raw bytes of a path segment encoded by
/// [`escape_uri_path_component_bytes`]
///
/// # Examples
///
/// ```
/// use reinhardt_markup::unescape_uri_path_component_bytes;
///
/// assert_eq!(unescape_uri_path_component_bytes(b"%FF%2F"), vec![0xff, b'/']);
/// ```
pub fn unescape_uri_path_component_bytes(input: &[u8]) -> Vec<u8> {
	decode_uri(input)
}

/// Decode one layer of percent-encoding
///
/// This is the generic decode an intermediary such as a web server applies
/// to a request path. A `%` that is not followed by two hex digits is kept
/// literally.
///
/// # Examples
///
/// ```
/// use reinhardt_markup::decode_uri;
///
/// assert_eq!(decode_uri(b"a%252Fb"), b"a%2Fb".to_vec());
/// assert_eq!(decode_uri(b"100%"), b"100%".to_vec());
/// ```
pub fn decode_uri(input: &[u8]) -> Vec<u8> {
	urlencoding::decode_binary(input).into_owned()
}
