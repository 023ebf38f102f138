//! The `SafeHtml` markup type
//!
//! `SafeHtml` holds HTML that is safe to emit verbatim. Values come from the
//! escaper, the tag builder, the template interpolator, concatenation of
//! other `SafeHtml` values, or [`SafeHtml::from_trusted`] for literals the
//! caller vouches for. There is deliberately no `From<String>` conversion.

use crate::content::Content;
use crate::escape::escape_html_into;
use std::fmt;
use std::ops::{Add, AddAssign};

/// HTML content that must not be escaped again
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SafeHtml(String);

impl SafeHtml {
	/// Create empty markup
	pub fn new() -> Self {
		Self::default()
	}

	/// Wrap a string the caller asserts is already safe HTML
	///
	/// Only use this for markup that is compiled into the program, never for
	/// text derived from input.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_markup::SafeHtml;
	///
	/// let safe = SafeHtml::from_trusted("<b>Bold</b>");
	/// assert_eq!(safe.as_str(), "<b>Bold</b>");
	/// ```
	pub fn from_trusted(html: impl Into<String>) -> Self {
		Self(html.into())
	}

	/// Escape raw text into markup
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_markup::SafeHtml;
	///
	/// assert_eq!(SafeHtml::escape("<3").as_str(), "&lt;3");
	/// ```
	pub fn escape(raw: &str) -> Self {
		let mut html = Self::new();
		html.push_text(raw);
		html
	}

	pub(crate) fn from_escaped(html: String) -> Self {
		Self(html)
	}

	/// Append any number of items in order
	///
	/// `SafeHtml` items are appended verbatim, raw text is escaped first and
	/// nested lists are flattened. See also [`append_html!`](crate::append_html)
	/// for mixing item types without building `Content` values by hand.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_markup::{tag_empty, Content};
	///
	/// let mut html = tag_empty("span");
	/// html.append([Content::from(tag_empty("em")), Content::from("<evil>")]);
	/// assert_eq!(html.as_str(), "<span /><em />&lt;evil&gt;");
	/// ```
	pub fn append<I>(&mut self, items: I)
	where
		I: IntoIterator,
		I::Item: Into<Content>,
	{
		for item in items {
			item.into().write_to(&mut self.0);
		}
	}

	/// Append markup verbatim
	pub fn push_html(&mut self, html: &SafeHtml) {
		self.0.push_str(&html.0);
	}

	/// Escape raw text and append it
	pub fn push_text(&mut self, raw: &str) {
		escape_html_into(raw, &mut self.0);
	}

	/// Returns the markup
	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Convert into the underlying string
	pub fn into_string(self) -> String {
		self.0
	}

	/// Length of the markup in bytes
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns `true` if there is no markup
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl fmt::Display for SafeHtml {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl AsRef<str> for SafeHtml {
	fn as_ref(&self) -> &str {
		&self.0
	}
}

impl From<SafeHtml> for String {
	fn from(html: SafeHtml) -> Self {
		html.0
	}
}

impl AddAssign<&SafeHtml> for SafeHtml {
	fn add_assign(&mut self, rhs: &SafeHtml) {
		self.push_html(rhs);
	}
}

impl AddAssign for SafeHtml {
	fn add_assign(&mut self, rhs: SafeHtml) {
		self.push_html(&rhs);
	}
}

impl Add<&SafeHtml> for SafeHtml {
	type Output = SafeHtml;

	fn add(mut self, rhs: &SafeHtml) -> SafeHtml {
		self += rhs;
		self
	}
}

impl Add for SafeHtml {
	type Output = SafeHtml;

	fn add(mut self, rhs: SafeHtml) -> SafeHtml {
		self += &rhs;
		self
	}
}

impl Extend<SafeHtml> for SafeHtml {
	fn extend<I: IntoIterator<Item = SafeHtml>>(&mut self, iter: I) {
		for html in iter {
			self.push_html(&html);
		}
	}
}

impl FromIterator<SafeHtml> for SafeHtml {
	fn from_iter<I: IntoIterator<Item = SafeHtml>>(iter: I) -> Self {
		let mut html = Self::new();
		html.extend(iter);
		html
	}
}

#[cfg(feature = "serde")]
impl serde::Serialize for SafeHtml {
	fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_str(&self.0)
	}
}

/// Types that render themselves as safe markup
///
/// Implement this for view objects and widgets so they can be passed
/// wherever content is accepted via [`Content::from_producer`].
///
/// # Examples
///
/// ```
/// use reinhardt_markup::{flatten, tag, Attributes, Content, SafeHtml, ToSafeHtml};
///
/// struct Badge {
///     label: String,
/// }
///
/// impl ToSafeHtml for Badge {
///     fn to_safe_html(&self) -> SafeHtml {
///         let attrs = Attributes::from([("class", "badge")]);
///         tag("span", &attrs, Some(self.label.as_str().into()))
///             .expect("span has no URI attributes")
///     }
/// }
///
/// let badge = Badge { label: "<new>".to_string() };
/// let html = flatten(Content::from_producer(&badge));
/// assert_eq!(html.as_str(), r#"<span class="badge">&lt;new&gt;</span>"#);
/// ```
pub trait ToSafeHtml {
	/// Render as safe markup
	fn to_safe_html(&self) -> SafeHtml;
}

impl ToSafeHtml for SafeHtml {
	fn to_safe_html(&self) -> SafeHtml {
		self.clone()
	}
}

impl<T: ToSafeHtml + ?Sized> ToSafeHtml for &T {
	fn to_safe_html(&self) -> SafeHtml {
		(**self).to_safe_html()
	}
}

/// Join items with `glue` between them
///
/// The glue and the items are escaped unless they are already `SafeHtml`.
///
/// # Examples
///
/// ```
/// use reinhardt_markup::{join, tag_empty, SafeHtml};
///
/// let html = join(SafeHtml::from_trusted("<br />"), ["a<b", "c"]);
/// assert_eq!(html.as_str(), "a&lt;b<br />c");
///
/// let html = join(", ", [tag_empty("x"), tag_empty("y")]);
/// assert_eq!(html.as_str(), "<x />, <y />");
/// ```
pub fn join<G, I>(glue: G, items: I) -> SafeHtml
where
	G: Into<Content>,
	I: IntoIterator,
	I::Item: Into<Content>,
{
	let glue = crate::content::flatten(glue);
	let mut html = SafeHtml::new();
	for (index, item) in items.into_iter().enumerate() {
		if index > 0 {
			html.push_html(&glue);
		}
		item.into().write_to(&mut html.0);
	}
	html
}
