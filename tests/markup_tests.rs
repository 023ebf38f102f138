//! Markup construction tests
//!
//! End-to-end behavior of tags, escaping, templates and appends through the
//! public API.

use reinhardt_markup::{
	append_html, content, decode_uri, escape_uri, escape_uri_path_component,
	escape_uri_path_component_bytes, flatten, format_html, tag, tag_empty,
	unescape_uri_path_component, unescape_uri_path_component_bytes, AttributeValue, Attributes,
	Content, MarkupError, SafeHtml, Tag, UriHandle,
};
use rstest::rstest;

/// Minimal structured URI used to exercise handle-typed attribute values
struct TestUri(String);

impl TestUri {
	fn new(uri: &str) -> Self {
		Self(uri.to_string())
	}
}

impl UriHandle for TestUri {
	fn to_uri_string(&self) -> String {
		self.0.clone()
	}
}

fn no_attrs() -> Attributes {
	Attributes::new()
}

#[rstest]
fn test_tag_defaults() {
	// Test: Omitted attributes and content match explicit empty/None
	let bare = tag_empty("x");
	let explicit = tag("x", &no_attrs(), None).unwrap();
	assert_eq!(bare.to_string(), explicit.to_string());
	assert_eq!(explicit.as_str(), "<x />");
	assert_eq!(Tag::new("x").build().unwrap(), explicit);
}

#[rstest]
fn test_tag_null_vs_empty_content() {
	assert_eq!(tag("x", &no_attrs(), None).unwrap().as_str(), "<x />");
	assert_eq!(tag("x", &no_attrs(), Some("".into())).unwrap().as_str(), "<x></x>");
}

#[rstest]
fn test_tag_missing_optional_content_self_closes() {
	// Test: An absent optional value converts to null content
	let missing: Option<&str> = None;
	assert_eq!(tag("x", &no_attrs(), Some(missing.into())).unwrap().as_str(), "<x />");
	assert_eq!(tag("x", &no_attrs(), Some(Some("y").into())).unwrap().as_str(), "<x>y</x>");
}

#[rstest]
fn test_tag_basics() {
	assert_eq!(tag("x", &no_attrs(), Some("y".into())).unwrap().as_str(), "<x>y</x>");
}

#[rstest]
fn test_tag_attributes() {
	let attrs = Attributes::from([("u", "v")]);
	assert_eq!(
		tag("x", &attrs, Some("y".into())).unwrap().as_str(),
		r#"<x u="v">y</x>"#
	);
	assert_eq!(tag("x", &attrs, None).unwrap().as_str(), r#"<x u="v" />"#);
}

#[rstest]
fn test_tag_escapes() {
	let attrs = Attributes::from([("u", "<")]);
	assert_eq!(tag("x", &attrs, None).unwrap().as_str(), r#"<x u="&lt;" />"#);

	let inner = tag_empty("y");
	assert_eq!(
		tag("x", &no_attrs(), Some(inner.into())).unwrap().as_str(),
		"<x><y /></x>"
	);
}

#[rstest]
fn test_tag_null_attribute() {
	let attrs = Attributes::from([("y", AttributeValue::Null)]);
	assert_eq!(tag("x", &attrs, None).unwrap().as_str(), "<x />");
}

#[rstest]
fn test_tag_content_is_escaped_once() {
	let html = tag("p", &no_attrs(), Some("a & b".into())).unwrap();
	let wrapped = tag("div", &no_attrs(), Some(html.into())).unwrap();
	assert_eq!(wrapped.as_str(), "<div><p>a &amp; b</p></div>");
}

#[rstest]
#[case("javascript:alert(1)", true)]
#[case("JAVASCRIPT:alert(1)", true)]
#[case("     javascript:alert(1)", true)]
#[case("/", false)]
#[case("/path/to/stuff/", false)]
#[case("", false)]
#[case("http://example.com/", false)]
#[case("#", false)]
fn test_tag_javascript_protocol_rejection(#[case] href: &str, #[case] rejected: bool) {
	let as_text = Attributes::from([("href", href)]);
	let as_handle = Attributes::from([("href", AttributeValue::uri(&TestUri::new(href)))]);

	for attrs in [as_text, as_handle] {
		let result = tag("a", &attrs, Some("click for candy".into()));
		assert_eq!(
			matches!(result, Err(MarkupError::DangerousProtocol { .. })),
			rejected,
			"href: {href:?}"
		);
	}
}

#[cfg(feature = "url")]
#[rstest]
#[case("javascript:alert(1)", true)]
#[case("JAVASCRIPT:alert(1)", true)]
#[case("     javascript:alert(1)", true)]
#[case("http://example.com/", false)]
fn test_tag_rejects_url_handles(#[case] href: &str, #[case] rejected: bool) {
	let url = url::Url::parse(href).unwrap();
	let attrs = Attributes::from([("href", &url)]);
	assert_eq!(
		tag("a", &attrs, Some("click for candy".into())).is_err(),
		rejected
	);
}

#[rstest]
fn test_uri_escape() {
	assert_eq!(escape_uri("+/ ?#&:!xyz%"), "%2B/%20%3F%23%26%3A%21xyz%25");
}

#[rstest]
fn test_uri_path_component_escape() {
	assert_eq!(escape_uri_path_component("a/b"), "a%252Fb");
}

#[rstest]
fn test_uri_path_component_round_trip_all_bytes() {
	// Test: Every byte value survives escape, one webserver decode, unescape
	let bytes: Vec<u8> = (0..=255u8).collect();
	let routed = decode_uri(escape_uri_path_component_bytes(&bytes).as_bytes());
	assert_eq!(unescape_uri_path_component_bytes(&routed), bytes);

	let text: String = (0..=255u8).map(char::from).collect();
	let routed = decode_uri(escape_uri_path_component(&text).as_bytes());
	let routed = String::from_utf8(routed).unwrap();
	assert_eq!(unescape_uri_path_component(&routed), text);
}

#[rstest]
fn test_format_html() {
	assert_eq!(format_html!("<div>%s</div>", "<3").as_str(), "<div>&lt;3</div>");
}

#[rstest]
fn test_append_html() {
	let mut html = tag_empty("span");
	append_html!(html, tag_empty("em"), "<evil>");
	assert_eq!(html.as_str(), "<span /><em />&lt;evil&gt;");
}

#[rstest]
fn test_append_with_content_values() {
	let mut html = tag_empty("span");
	html.append([Content::from(tag_empty("em")), Content::from("<evil>")]);
	assert_eq!(html.as_str(), "<span /><em />&lt;evil&gt;");
}

#[rstest]
fn test_array_escaping() {
	let nested = content![
		format_html!("<div>"),
		content![content![
			"<",
			content!["d", content![content![format_html!("i")], "v"]],
			content![content![">"]],
		]],
		format_html!("</div>"),
	];
	assert_eq!(flatten(nested).as_str(), "<div>&lt;div&gt;</div>");
}

#[rstest]
fn test_array_escaping_matches_flat_sequence() {
	let nested = content![
		SafeHtml::from_trusted("<div>"),
		content![content![content![
			"<",
			content!["d", content![content![SafeHtml::from_trusted("i")], "v"]],
			content![content![">"]],
		]]],
		SafeHtml::from_trusted("</div>"),
	];
	let flat = content![
		SafeHtml::from_trusted("<div>"),
		"<",
		"d",
		SafeHtml::from_trusted("i"),
		"v",
		">",
		SafeHtml::from_trusted("</div>"),
	];
	assert_eq!(flatten(nested), flatten(flat));
}

#[rstest]
fn test_nested_tags_as_content() {
	let html = tag(
		"div",
		&no_attrs(),
		Some(content![content![content![
			tag_empty("x"),
			content![tag_empty("y")],
			tag_empty("z"),
		]]]),
	)
	.unwrap();
	assert_eq!(html.as_str(), "<div><x /><y /><z /></div>");
}
