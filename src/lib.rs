//! # Reinhardt Markup
//!
//! Safe HTML construction for Reinhardt.
//!
//! Markup is built from untrusted text without string concatenation: raw
//! text is escaped on the way in, and markup produced by this crate travels
//! as [`SafeHtml`], which is never escaped a second time. URI-valued
//! attributes such as `href` are checked for `javascript:`-style protocols
//! before a tag is rendered.
//!
//! ## Building blocks
//!
//! - [`escape_html`] - escape text for character data and attribute values
//! - [`escape_uri`], [`escape_uri_path_component`] - percent-encoding
//! - [`check_uri`] - the protocol guard for URI-valued attributes
//! - [`SafeHtml`] - markup that is already safe; append, join, concatenate
//! - [`flatten`] / [`content!`] - reduce nested [`Content`] to markup
//! - [`tag`] / [`Tag`] - render one element
//! - [`format_html`] / [`format_html!`] - `%s` templates with escaping
//!
//! ## Feature Flags
//!
//! - `url` (default) - [`UriHandle`] for `url::Url`
//! - `http` - [`UriHandle`] for `http::Uri`
//! - `serde` - serialize [`SafeHtml`] as its string content
//!
//! ## Example
//!
//! ```
//! use reinhardt_markup::{content, format_html, tag, Attributes};
//!
//! let user_name = "<script>alert(1)</script>";
//! let link = tag(
//!     "a",
//!     &Attributes::from([("href", "/users/42"), ("class", "user")]),
//!     Some(user_name.into()),
//! )?;
//! let item = format_html!("<li>%s</li>", link);
//! assert_eq!(
//!     item.as_str(),
//!     r#"<li><a href="/users/42" class="user">&lt;script&gt;alert(1)&lt;/script&gt;</a></li>"#
//! );
//!
//! let bad = Attributes::from([("href", " javascript:alert(1)")]);
//! assert!(tag("a", &bad, Some(content!["click"])).is_err());
//! # Ok::<(), reinhardt_markup::MarkupError>(())
//! ```

pub mod attrs;
pub mod content;
pub mod error;
pub mod escape;
pub mod format;
pub mod guard;
pub mod safe;
pub mod tag;
pub mod uri;

pub use attrs::{AttributeValue, Attributes};
pub use content::{flatten, Content};
pub use error::{MarkupError, Result};
pub use escape::{escape_html, escape_html_into};
pub use format::format_html;
pub use guard::{
	check_uri, check_uri_attribute, is_uri_attribute, UriHandle, DANGEROUS_PROTOCOLS,
	URI_ATTRIBUTES,
};
pub use safe::{join, SafeHtml, ToSafeHtml};
pub use tag::{tag, tag_empty, Tag};
pub use uri::{
	decode_uri, escape_uri, escape_uri_path_component, escape_uri_path_component_bytes,
	unescape_uri_path_component, unescape_uri_path_component_bytes,
};
