//! HTML text escaping
//!
//! Escaped characters:
//! - `&` → `&amp;`
//! - `<` → `&lt;`
//! - `>` → `&gt;`
//! - `"` → `&quot;`
//! - `'` → `&#x27;`
//!
//! The same escaping is used for character data and for double-quoted
//! attribute values. Escaping is not idempotent: escaping escaped text
//! escapes it again, which is why already-safe markup travels as
//! [`SafeHtml`](crate::SafeHtml) instead of as a plain string.

/// Escape HTML special characters
///
/// # Examples
///
/// ```
/// use reinhardt_markup::escape_html;
///
/// assert_eq!(escape_html("Hello, World!"), "Hello, World!");
/// assert_eq!(escape_html("<script>alert('XSS')</script>"),
///            "&lt;script&gt;alert(&#x27;XSS&#x27;)&lt;/script&gt;");
/// assert_eq!(escape_html("5 < 10 & 10 > 5"), "5 &lt; 10 &amp; 10 &gt; 5");
///
/// // Escaping twice escapes the entities themselves
/// assert_eq!(escape_html(&escape_html("<")), "&amp;lt;");
/// ```
pub fn escape_html(input: &str) -> String {
	let mut result = String::with_capacity(input.len() + 10);
	escape_html_into(input, &mut result);
	result
}

/// Escape HTML special characters, appending the result to `output`
///
/// # Examples
///
/// ```
/// use reinhardt_markup::escape_html_into;
///
/// let mut output = String::from("<p>");
/// escape_html_into("Tom & Jerry", &mut output);
/// assert_eq!(output, "<p>Tom &amp; Jerry");
/// ```
pub fn escape_html_into(input: &str, output: &mut String) {
	// Most text has nothing to escape
	if !input.contains(['&', '<', '>', '"', '\'']) {
		output.push_str(input);
		return;
	}

	for ch in input.chars() {
		match ch {
			'&' => output.push_str("&amp;"),
			'<' => output.push_str("&lt;"),
			'>' => output.push_str("&gt;"),
			'"' => output.push_str("&quot;"),
			'\'' => output.push_str("&#x27;"),
			_ => output.push(ch),
		}
	}
}
