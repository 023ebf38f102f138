//! Protocol guard for URI-valued attributes
//!
//! Escaping keeps an attribute value inside its quotes, but a browser still
//! executes `<a href="javascript:...">` when the link is followed. Attributes
//! listed in [`URI_ATTRIBUTES`] are therefore checked against
//! [`DANGEROUS_PROTOCOLS`] before a tag is rendered.
//!
//! ## Normalization
//!
//! Before the comparison the value is:
//! 1. trimmed of leading whitespace,
//! 2. stripped of ASCII control and whitespace characters (browsers ignore
//!    them inside a scheme, so `java\tscript:` still runs),
//! 3. lower-cased.

use crate::attrs::AttributeValue;
use crate::error::{MarkupError, Result};

/// Attribute names whose values are navigated to or fetched as URIs
///
/// Matched ASCII case-insensitively.
pub const URI_ATTRIBUTES: &[&str] = &["href", "src", "action", "formaction", "xlink:href"];

/// Protocol prefixes rejected in URI-valued attributes
pub const DANGEROUS_PROTOCOLS: &[&str] = &["javascript:", "vbscript:"];

/// A structured URI that can render itself as a string
///
/// Attribute values given as a handle are stringified first and then go
/// through exactly the same guard and escaping as plain strings.
pub trait UriHandle {
	/// Render the URI in its string form
	fn to_uri_string(&self) -> String;
}

impl<T: UriHandle + ?Sized> UriHandle for &T {
	fn to_uri_string(&self) -> String {
		(**self).to_uri_string()
	}
}

#[cfg(feature = "url")]
impl UriHandle for url::Url {
	fn to_uri_string(&self) -> String {
		self.as_str().to_string()
	}
}

#[cfg(feature = "http")]
impl UriHandle for http::Uri {
	fn to_uri_string(&self) -> String {
		self.to_string()
	}
}

/// Returns `true` if `name` is an attribute the guard applies to
///
/// # Examples
///
/// ```
/// use reinhardt_markup::is_uri_attribute;
///
/// assert!(is_uri_attribute("href"));
/// assert!(is_uri_attribute("HREF"));
/// assert!(is_uri_attribute("src"));
/// assert!(!is_uri_attribute("title"));
/// ```
pub fn is_uri_attribute(name: &str) -> bool {
	URI_ATTRIBUTES
		.iter()
		.any(|attribute| attribute.eq_ignore_ascii_case(name))
}

/// Check a string value for attribute `attribute`
///
/// Values of attributes outside [`URI_ATTRIBUTES`] are always accepted.
///
/// # Examples
///
/// ```
/// use reinhardt_markup::{check_uri, MarkupError};
///
/// assert!(check_uri("href", "/path/to/stuff/").is_ok());
/// assert!(check_uri("href", "http://example.com/").is_ok());
/// assert!(check_uri("href", "#").is_ok());
/// assert!(check_uri("href", "").is_ok());
///
/// assert!(matches!(
///     check_uri("href", "   JavaScript:alert(1)"),
///     Err(MarkupError::DangerousProtocol { protocol: "javascript:", .. })
/// ));
///
/// // Not a URI-valued attribute
/// assert!(check_uri("title", "javascript:alert(1)").is_ok());
/// ```
pub fn check_uri(attribute: &str, value: &str) -> Result<()> {
	if !is_uri_attribute(attribute) {
		return Ok(());
	}

	match dangerous_protocol(value) {
		Some(protocol) => {
			tracing::warn!(
				attribute,
				protocol,
				"Rejected URI attribute with dangerous protocol"
			);
			Err(MarkupError::DangerousProtocol {
				attribute: attribute.to_string(),
				protocol,
			})
		}
		None => Ok(()),
	}
}

/// Check an attribute value for attribute `attribute`
///
/// Null values are never rendered and always pass.
///
/// # Examples
///
/// ```
/// use reinhardt_markup::{check_uri_attribute, AttributeValue};
///
/// # #[cfg(feature = "url")]
/// # {
/// let url = url::Url::parse("javascript:alert(1)").unwrap();
/// assert!(check_uri_attribute("href", &AttributeValue::uri(&url)).is_err());
/// # }
/// assert!(check_uri_attribute("href", &AttributeValue::Null).is_ok());
/// ```
pub fn check_uri_attribute(attribute: &str, value: &AttributeValue) -> Result<()> {
	match value.as_str() {
		Some(value) => check_uri(attribute, value),
		None => Ok(()),
	}
}

/// Returns the dangerous protocol `value` starts with, if any
///
/// Compares character by character and stops at the first mismatch.
fn dangerous_protocol(value: &str) -> Option<&'static str> {
	let value = value.trim_start();
	DANGEROUS_PROTOCOLS.iter().copied().find(|protocol| {
		let mut scheme = value
			.chars()
			.filter(|ch| !ch.is_ascii_control() && !ch.is_ascii_whitespace());
		protocol
			.chars()
			.all(|expected| scheme.next().is_some_and(|ch| ch.eq_ignore_ascii_case(&expected)))
	})
}
