//! Attribute mappings for the tag builder

use crate::guard::UriHandle;

/// Value of a single HTML attribute
///
/// `Null` and an empty `Text` are different: a null attribute is not
/// rendered at all, an empty one renders as `name=""`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum AttributeValue {
	/// Omit the attribute
	#[default]
	Null,
	/// Plain text, escaped when rendered
	Text(String),
	/// The string form of a structured URI, escaped when rendered
	Uri(String),
}

impl AttributeValue {
	/// Create a value from a structured URI handle
	///
	/// The handle is rendered to a string immediately; the protocol guard and
	/// the escaper see exactly that string.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_markup::AttributeValue;
	///
	/// # #[cfg(feature = "url")]
	/// # {
	/// let url = url::Url::parse("https://example.com/a?b=c").unwrap();
	/// let value = AttributeValue::uri(&url);
	/// assert_eq!(value.as_str(), Some("https://example.com/a?b=c"));
	/// # }
	/// ```
	pub fn uri<U: UriHandle + ?Sized>(handle: &U) -> Self {
		Self::Uri(handle.to_uri_string())
	}

	/// Returns the string to render, or `None` for a null value
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::Null => None,
			Self::Text(text) | Self::Uri(text) => Some(text.as_str()),
		}
	}

	/// Returns `true` if the attribute is omitted when rendering
	pub fn is_null(&self) -> bool {
		matches!(self, Self::Null)
	}
}

impl From<&str> for AttributeValue {
	fn from(value: &str) -> Self {
		Self::Text(value.to_string())
	}
}

impl From<String> for AttributeValue {
	fn from(value: String) -> Self {
		Self::Text(value)
	}
}

impl From<&String> for AttributeValue {
	fn from(value: &String) -> Self {
		Self::Text(value.clone())
	}
}

impl<T: Into<AttributeValue>> From<Option<T>> for AttributeValue {
	fn from(value: Option<T>) -> Self {
		value.map_or(Self::Null, Into::into)
	}
}

#[cfg(feature = "url")]
impl From<url::Url> for AttributeValue {
	fn from(value: url::Url) -> Self {
		Self::uri(&value)
	}
}

#[cfg(feature = "url")]
impl From<&url::Url> for AttributeValue {
	fn from(value: &url::Url) -> Self {
		Self::uri(value)
	}
}

#[cfg(feature = "http")]
impl From<http::Uri> for AttributeValue {
	fn from(value: http::Uri) -> Self {
		Self::uri(&value)
	}
}

/// Ordered mapping from attribute name to value
///
/// Attributes render in insertion order. Setting a name that is already
/// present replaces its value and keeps its position.
///
/// # Examples
///
/// ```
/// use reinhardt_markup::{AttributeValue, Attributes};
///
/// let attrs = Attributes::new()
///     .with("class", "nav")
///     .with("id", "main")
///     .with("title", None::<&str>)
///     .with("class", "nav active");
///
/// let names: Vec<&str> = attrs.iter().map(|(name, _)| name).collect();
/// assert_eq!(names, ["class", "id", "title"]);
/// assert_eq!(attrs.get("class"), Some(&AttributeValue::from("nav active")));
/// assert!(attrs.get("title").unwrap().is_null());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
	entries: Vec<(String, AttributeValue)>,
}

impl Attributes {
	/// Create an empty mapping
	pub fn new() -> Self {
		Self::default()
	}

	/// Set an attribute, builder style
	pub fn with(mut self, name: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
		self.set(name, value);
		self
	}

	/// Set an attribute, replacing any existing value for the same name
	pub fn set(&mut self, name: impl Into<String>, value: impl Into<AttributeValue>) -> &mut Self {
		let name = name.into();
		let value = value.into();
		match self.entries.iter().position(|(existing, _)| *existing == name) {
			Some(index) => self.entries[index].1 = value,
			None => self.entries.push((name, value)),
		}
		self
	}

	/// Look up the value for `name`
	pub fn get(&self, name: &str) -> Option<&AttributeValue> {
		self.entries
			.iter()
			.find(|(existing, _)| existing == name)
			.map(|(_, value)| value)
	}

	/// Remove `name`, returning its value if it was present
	pub fn remove(&mut self, name: &str) -> Option<AttributeValue> {
		let index = self.entries.iter().position(|(existing, _)| existing == name)?;
		Some(self.entries.remove(index).1)
	}

	/// Number of entries, null values included
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns `true` if there are no entries
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Iterate over entries in insertion order, null values included
	pub fn iter(&self) -> impl Iterator<Item = (&str, &AttributeValue)> {
		self.entries
			.iter()
			.map(|(name, value)| (name.as_str(), value))
	}
}

impl<K, V> FromIterator<(K, V)> for Attributes
where
	K: Into<String>,
	V: Into<AttributeValue>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut attrs = Self::new();
		for (name, value) in iter {
			attrs.set(name, value);
		}
		attrs
	}
}

impl<K, V, const N: usize> From<[(K, V); N]> for Attributes
where
	K: Into<String>,
	V: Into<AttributeValue>,
{
	fn from(entries: [(K, V); N]) -> Self {
		entries.into_iter().collect()
	}
}
