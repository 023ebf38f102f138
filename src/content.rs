//! Nested content and flattening
//!
//! [`Content`] is the closed set of things that can appear inside a tag or
//! be appended to markup: nothing, raw text, safe markup, or an ordered list
//! of further content. [`flatten`] reduces any tree of it to one
//! [`SafeHtml`] value, escaping text and passing markup through untouched.

use crate::escape::escape_html_into;
use crate::safe::{SafeHtml, ToSafeHtml};

/// Content of a tag or an append operation
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Content {
	/// Contributes nothing
	#[default]
	Empty,
	/// Raw text, escaped when flattened
	Text(String),
	/// Safe markup, emitted verbatim
	Html(SafeHtml),
	/// Ordered sequence, flattened depth-first left to right
	List(Vec<Content>),
}

impl Content {
	/// Create raw text content
	pub fn text(text: impl Into<String>) -> Self {
		Self::Text(text.into())
	}

	/// Render a [`ToSafeHtml`] producer into markup content
	pub fn from_producer<P: ToSafeHtml + ?Sized>(producer: &P) -> Self {
		Self::Html(producer.to_safe_html())
	}

	/// Flatten into `output`
	pub(crate) fn write_to(&self, output: &mut String) {
		match self {
			Content::Empty => {}
			Content::Text(text) => escape_html_into(text, output),
			Content::Html(html) => output.push_str(html.as_str()),
			Content::List(children) => {
				for child in children {
					child.write_to(output);
				}
			}
		}
	}
}

/// Flatten nested content into a single markup value
///
/// # Examples
///
/// ```
/// use reinhardt_markup::{content, flatten, SafeHtml};
///
/// let html = flatten(content![
///     SafeHtml::from_trusted("<div>"),
///     content![content!["<", content!["d", SafeHtml::from_trusted("i"), "v"]], ">"],
///     SafeHtml::from_trusted("</div>"),
/// ]);
/// assert_eq!(html.as_str(), "<div>&lt;div&gt;</div>");
/// ```
pub fn flatten(node: impl Into<Content>) -> SafeHtml {
	let mut output = String::new();
	node.into().write_to(&mut output);
	SafeHtml::from_escaped(output)
}

impl From<&str> for Content {
	fn from(text: &str) -> Self {
		Self::Text(text.to_string())
	}
}

impl From<String> for Content {
	fn from(text: String) -> Self {
		Self::Text(text)
	}
}

impl From<&String> for Content {
	fn from(text: &String) -> Self {
		Self::Text(text.clone())
	}
}

impl From<char> for Content {
	fn from(ch: char) -> Self {
		Self::Text(ch.to_string())
	}
}

impl From<SafeHtml> for Content {
	fn from(html: SafeHtml) -> Self {
		Self::Html(html)
	}
}

impl From<&SafeHtml> for Content {
	fn from(html: &SafeHtml) -> Self {
		Self::Html(html.clone())
	}
}

impl<T: Into<Content>> From<Option<T>> for Content {
	fn from(value: Option<T>) -> Self {
		value.map_or(Self::Empty, Into::into)
	}
}

impl<T: Into<Content>> From<Vec<T>> for Content {
	fn from(items: Vec<T>) -> Self {
		Self::List(items.into_iter().map(Into::into).collect())
	}
}

impl<T: Into<Content>, const N: usize> From<[T; N]> for Content {
	fn from(items: [T; N]) -> Self {
		Self::List(items.into_iter().map(Into::into).collect())
	}
}

impl<T: Into<Content>> FromIterator<T> for Content {
	fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
		Self::List(iter.into_iter().map(Into::into).collect())
	}
}

macro_rules! impl_from_display {
	($($ty:ty),* $(,)?) => {
		$(
			impl From<$ty> for Content {
				fn from(value: $ty) -> Self {
					Self::Text(value.to_string())
				}
			}
		)*
	};
}

impl_from_display!(
	i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool
);

/// Build a [`Content::List`] from heterogeneous items
///
/// Each item is converted with `Content::from`, so strings, numbers,
/// `SafeHtml` values, options and nested `content![...]` lists can be mixed.
///
/// # Examples
///
/// ```
/// use reinhardt_markup::{content, flatten, tag_empty};
///
/// let html = flatten(content!["a < b", 42, tag_empty("br"), None::<&str>]);
/// assert_eq!(html.as_str(), "a &lt; b42<br />");
/// ```
#[macro_export]
macro_rules! content {
	($($item:expr),* $(,)?) => {
		$crate::Content::List(::std::vec![$($crate::Content::from($item)),*])
	};
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_empty_contributes_nothing() {
		assert!(flatten(Content::Empty).is_empty());
		assert!(flatten(None::<&str>).is_empty());
		assert!(flatten(Vec::<Content>::new()).is_empty());
	}

	#[rstest]
	fn test_text_is_escaped_and_html_is_not() {
		assert_eq!(flatten("<b>").as_str(), "&lt;b&gt;");
		assert_eq!(flatten(SafeHtml::from_trusted("<b>")).as_str(), "<b>");
	}

	#[rstest]
	fn test_numbers_and_bools() {
		assert_eq!(flatten(content![1, -2, 3.5, true]).as_str(), "1-23.5true");
	}

	#[rstest]
	fn test_repetition_is_preserved() {
		let item = SafeHtml::from_trusted("<i />");
		assert_eq!(
			flatten(content![&item, "x", &item, "x"]).as_str(),
			"<i />x<i />x"
		);
	}

	#[rstest]
	fn test_deep_nesting() {
		let mut node = Content::from("<leaf>");
		for _ in 0..200 {
			node = Content::List(vec![node]);
		}
		assert_eq!(flatten(node).as_str(), "&lt;leaf&gt;");
	}

	#[rstest]
	fn test_from_iterator() {
		let node: Content = (1..=3).map(|n| format!("<{n}>")).collect();
		assert_eq!(flatten(node).as_str(), "&lt;1&gt;&lt;2&gt;&lt;3&gt;");
	}

	#[rstest]
	fn test_from_producer() {
		struct Rule;

		impl ToSafeHtml for Rule {
			fn to_safe_html(&self) -> SafeHtml {
				SafeHtml::from_trusted("<hr />")
			}
		}

		assert_eq!(flatten(content!["a", Content::from_producer(&Rule)]).as_str(), "a<hr />");
	}
}
