//! Template interpolation
//!
//! `%s` placeholders in a trusted template are replaced left to right by
//! the arguments. `SafeHtml` arguments are spliced in verbatim, everything
//! else is escaped. `%%` produces a literal `%`.

use crate::content::Content;
use crate::safe::SafeHtml;

/// Interpolate `args` into `template`
///
/// The template itself is not escaped and must be a literal from the
/// program. See [`format_html!`](crate::format_html!) for the macro form,
/// which accepts mixed argument types.
///
/// # Panics
///
/// Panics if the number of `%s` placeholders differs from the number of
/// arguments, or if the template contains a `%` directive other than `%s`
/// and `%%`. Both are programming errors at the call site.
///
/// # Examples
///
/// ```
/// use reinhardt_markup::{format_html, Content, SafeHtml};
///
/// let html = format_html("<div>%s</div>", &[Content::from("<3")]);
/// assert_eq!(html.as_str(), "<div>&lt;3</div>");
///
/// let html = format_html(
///     "<p>%s: %s (100%%)</p>",
///     &[Content::from(SafeHtml::from_trusted("<b>Score</b>")), Content::from(7)],
/// );
/// assert_eq!(html.as_str(), "<p><b>Score</b>: 7 (100%)</p>");
/// ```
pub fn format_html(template: &str, args: &[Content]) -> SafeHtml {
	let mut output = String::with_capacity(template.len());
	let mut remaining = args.iter();
	let mut rest = template;

	while let Some(pos) = rest.find('%') {
		output.push_str(&rest[..pos]);
		match rest[pos + 1..].chars().next() {
			Some('s') => match remaining.next() {
				Some(arg) => arg.write_to(&mut output),
				None => panic!(
					"HTML template {template:?} has more placeholders than the {} arguments given",
					args.len()
				),
			},
			Some('%') => output.push('%'),
			Some(other) => {
				panic!("HTML template {template:?} uses unsupported directive '%{other}'")
			}
			None => panic!("HTML template {template:?} ends with a lone '%'"),
		}
		rest = &rest[pos + 2..];
	}
	output.push_str(rest);

	if remaining.len() > 0 {
		panic!(
			"HTML template {template:?} has fewer placeholders than the {} arguments given",
			args.len()
		);
	}

	SafeHtml::from_escaped(output)
}

/// Interpolate mixed arguments into a template
///
/// Each argument is converted with `Content::from`.
///
/// # Examples
///
/// ```
/// use reinhardt_markup::{format_html, tag_empty};
///
/// let html = format_html!("<div>%s</div>", "<3");
/// assert_eq!(html.as_str(), "<div>&lt;3</div>");
///
/// let html = format_html!("<li>%s %s</li>", tag_empty("hr"), 42);
/// assert_eq!(html.as_str(), "<li><hr /> 42</li>");
/// ```
#[macro_export]
macro_rules! format_html {
	($template:expr $(, $arg:expr)* $(,)?) => {
		$crate::format_html($template, &[$($crate::Content::from($arg)),*])
	};
}

/// Append mixed items to a `SafeHtml` value
///
/// Markup items are appended verbatim, everything else is escaped.
///
/// # Examples
///
/// ```
/// use reinhardt_markup::{append_html, tag_empty};
///
/// let mut html = tag_empty("span");
/// append_html!(html, tag_empty("em"), "<evil>");
/// assert_eq!(html.as_str(), "<span /><em />&lt;evil&gt;");
/// ```
#[macro_export]
macro_rules! append_html {
	($target:expr $(, $item:expr)+ $(,)?) => {
		$target.append([$($crate::Content::from($item)),*])
	};
}
