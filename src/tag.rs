//! Tag builder
//!
//! Renders one element as [`SafeHtml`]:
//!
//! - attribute values are escaped, null attributes are left out, and
//!   URI-valued attributes pass the protocol guard first;
//! - missing content (`None` or [`Content::Empty`]) renders a self-closing
//!   `<name />`; any other content, even an empty string or an empty list,
//!   renders `<name></name>` around the flattened content.
//!
//! Tag and attribute names are emitted as given. They are expected to come
//! from the program, not from input.

use crate::attrs::{AttributeValue, Attributes};
use crate::content::Content;
use crate::error::Result;
use crate::escape::escape_html_into;
use crate::guard::{check_uri, UriHandle};
use crate::safe::SafeHtml;

/// Render an element
///
/// Fails with [`MarkupError::DangerousProtocol`](crate::MarkupError::DangerousProtocol)
/// if a URI-valued attribute uses a dangerous protocol. Nothing is rendered
/// in that case.
///
/// # Examples
///
/// ```
/// use reinhardt_markup::{tag, Attributes, Content};
///
/// let attrs = Attributes::from([("u", "v")]);
/// assert_eq!(tag("x", &attrs, Some("y".into())).unwrap().as_str(), r#"<x u="v">y</x>"#);
/// assert_eq!(tag("x", &attrs, None).unwrap().as_str(), r#"<x u="v" />"#);
/// assert_eq!(tag("x", &Attributes::new(), Some("".into())).unwrap().as_str(), "<x></x>");
///
/// let link = Attributes::from([("href", "javascript:alert(1)")]);
/// assert!(tag("a", &link, Some("click".into())).is_err());
/// ```
pub fn tag(name: &str, attributes: &Attributes, content: Option<Content>) -> Result<SafeHtml> {
	render(name, attributes, content.as_ref())
}

/// Render an element with no attributes and no content
///
/// # Examples
///
/// ```
/// use reinhardt_markup::tag_empty;
///
/// assert_eq!(tag_empty("br").as_str(), "<br />");
/// ```
pub fn tag_empty(name: &str) -> SafeHtml {
	let mut output = String::with_capacity(name.len() + 4);
	output.push('<');
	output.push_str(name);
	output.push_str(" />");
	SafeHtml::from_escaped(output)
}

fn render(name: &str, attributes: &Attributes, content: Option<&Content>) -> Result<SafeHtml> {
	let mut output = String::new();
	output.push('<');
	output.push_str(name);

	for (attribute, value) in attributes.iter() {
		let Some(value) = value.as_str() else {
			continue;
		};
		check_uri(attribute, value)?;

		output.push(' ');
		output.push_str(attribute);
		output.push_str("=\"");
		escape_html_into(value, &mut output);
		output.push('"');
	}

	match content {
		None | Some(Content::Empty) => output.push_str(" />"),
		Some(content) => {
			output.push('>');
			content.write_to(&mut output);
			output.push_str("</");
			output.push_str(name);
			output.push('>');
		}
	}

	tracing::trace!(tag = name, len = output.len(), "Rendered tag");
	Ok(SafeHtml::from_escaped(output))
}

/// Builder for a single element
///
/// # Examples
///
/// ```
/// use reinhardt_markup::{Tag, tag_empty};
///
/// let html = Tag::new("a")
///     .attr("href", "/search?q=a&b")
///     .attr("title", None::<&str>)
///     .child("Results for ")
///     .child(tag_empty("wbr"))
///     .build()
///     .unwrap();
/// assert_eq!(
///     html.as_str(),
///     r#"<a href="/search?q=a&amp;b">Results for <wbr /></a>"#
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tag {
	name: String,
	attributes: Attributes,
	content: Option<Content>,
}

impl Tag {
	/// Start an element with no attributes and no content
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			..Self::default()
		}
	}

	/// Set an attribute
	pub fn attr(mut self, name: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
		self.attributes.set(name, value);
		self
	}

	/// Set an attribute from a structured URI
	pub fn uri_attr<U: UriHandle + ?Sized>(mut self, name: impl Into<String>, uri: &U) -> Self {
		self.attributes.set(name, AttributeValue::uri(uri));
		self
	}

	/// Replace all attributes
	pub fn attributes(mut self, attributes: Attributes) -> Self {
		self.attributes = attributes;
		self
	}

	/// Replace the content
	///
	/// [`Content::Empty`] keeps the element self-closing. An empty string or
	/// an empty list renders an open and close tag.
	pub fn content(mut self, content: impl Into<Content>) -> Self {
		self.content = Some(content.into());
		self
	}

	/// Append to the content
	pub fn child(mut self, child: impl Into<Content>) -> Self {
		let child = child.into();
		self.content = Some(match self.content.take() {
			None => child,
			Some(Content::List(mut children)) => {
				children.push(child);
				Content::List(children)
			}
			Some(existing) => Content::List(vec![existing, child]),
		});
		self
	}

	/// Returns the tag name
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Render the element
	pub fn build(&self) -> Result<SafeHtml> {
		render(&self.name, &self.attributes, self.content.as_ref())
	}
}
