//! Error types for markup construction

/// Result type for markup operations
pub type Result<T, E = MarkupError> = std::result::Result<T, E>;

/// Errors raised while building markup
///
/// Escaping, flattening and template interpolation are total. The only
/// recoverable failure is a URI-valued attribute whose protocol can execute
/// script, which aborts tag construction as a whole.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MarkupError {
	/// A URI-valued attribute starts with a protocol from the dangerous set
	#[error("Attribute '{attribute}' uses dangerous protocol '{protocol}'")]
	DangerousProtocol {
		/// Name of the rejected attribute, as passed by the caller
		attribute: String,
		/// The matched protocol prefix (lower-case, including the colon)
		protocol: &'static str,
	},
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_dangerous_protocol_display() {
		let err = MarkupError::DangerousProtocol {
			attribute: "href".to_string(),
			protocol: "javascript:",
		};
		assert_eq!(
			err.to_string(),
			"Attribute 'href' uses dangerous protocol 'javascript:'"
		);
	}
}
