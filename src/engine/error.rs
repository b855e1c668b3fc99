use thiserror::Error;

/// Errors raised while accepting a self map document.
///
/// The layout and styling functions never fail; everything here is raised at
/// the ingestion boundary, before data reaches the engine.
#[derive(Error, Debug)]
pub enum SelfMapError {
	/// Text is not JSON.
	#[error("invalid JSON: {0}")]
	Json(#[from] serde_json::Error),

	/// Document is JSON but not an object.
	#[error("document must be a JSON object")]
	NotAnObject,

	/// Required top-level field is absent.
	#[error("missing required field `{0}`")]
	MissingField(&'static str),

	/// Top-level field is present but not an array.
	#[error("field `{0}` must be an array")]
	NotAnArray(&'static str),

	/// An element of `entries` does not have the entry shape.
	#[error("entry #{index} is malformed: {reason}")]
	MalformedEntry {
		/// Position in `entries`.
		index: usize,
		/// Deserializer message.
		reason: String,
	},

	/// An element of `associations` does not have the association shape.
	#[error("association #{index} is malformed: {reason}")]
	MalformedAssociation {
		/// Position in `associations`.
		index: usize,
		/// Deserializer message.
		reason: String,
	},

	/// Two entries share a label.
	#[error("duplicate entry label `{0}`")]
	DuplicateLabel(String),

	/// Association endpoint names no entry (strict policy only).
	#[error("association #{index} references unknown label `{label}`")]
	DanglingReference {
		/// Position in `associations`.
		index: usize,
		/// Unresolved label.
		label: String,
	},
}

/// Result alias for ingestion.
pub type SelfMapResult<T> = Result<T, SelfMapError>;
