//! Boundary between untrusted documents and the engine.
//!
//! A document either passes every check and replaces the current dataset, or
//! is rejected whole. Nothing partial gets through.

use std::collections::HashSet;

use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::{SelfMapError, SelfMapResult};
use super::types::{Association, Entry, SelfMapData};

/// What to do with an association whose endpoint names no entry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DanglingPolicy {
	/// Keep it; the layout skips its edge and degree contribution.
	#[default]
	Lenient,
	/// Reject the document.
	Strict,
}

/// Ingestion settings.
#[derive(Clone, Copy, Debug, Default)]
pub struct IngestOptions {
	/// Dangling reference handling.
	pub dangling: DanglingPolicy,
}

/// Parses and validates a JSON self map document.
pub fn parse_document(text: &str, options: &IngestOptions) -> SelfMapResult<SelfMapData> {
	let value: Value = serde_json::from_str(text)?;
	let Value::Object(root) = value else {
		return Err(SelfMapError::NotAnObject);
	};

	let raw_entries = array_field(&root, "entries")?;
	let raw_associations = array_field(&root, "associations")?;

	let entries = decode_all::<Entry>(raw_entries, |index, reason| {
		SelfMapError::MalformedEntry { index, reason }
	})?;
	let associations = decode_all::<Association>(raw_associations, |index, reason| {
		SelfMapError::MalformedAssociation { index, reason }
	})?;

	let data = SelfMapData {
		entries,
		associations,
	};
	validate(&data, options)?;
	debug!(
		"accepted document with {} entries, {} associations",
		data.entries.len(),
		data.associations.len()
	);
	Ok(data)
}

/// Checks label uniqueness and, under [`DanglingPolicy::Strict`], that every
/// association endpoint names an entry.
pub fn validate(data: &SelfMapData, options: &IngestOptions) -> SelfMapResult<()> {
	let mut labels = HashSet::with_capacity(data.entries.len());
	for entry in &data.entries {
		if !labels.insert(entry.label.as_str()) {
			return Err(SelfMapError::DuplicateLabel(entry.label.clone()));
		}
	}

	for (index, label) in dangling_references(data, &labels) {
		match options.dangling {
			DanglingPolicy::Strict => {
				return Err(SelfMapError::DanglingReference {
					index,
					label: label.to_string(),
				});
			}
			DanglingPolicy::Lenient => {
				warn!("association #{index} references unknown label `{label}`; it will not be drawn");
			}
		}
	}
	Ok(())
}

fn dangling_references<'a>(
	data: &'a SelfMapData,
	labels: &HashSet<&str>,
) -> Vec<(usize, &'a str)> {
	data.associations
		.iter()
		.enumerate()
		.flat_map(|(i, a)| [(i, a.src.as_str()), (i, a.dst.as_str())])
		.filter(|(_, label)| !labels.contains(label))
		.collect()
}

fn array_field<'a>(
	root: &'a serde_json::Map<String, Value>,
	name: &'static str,
) -> SelfMapResult<&'a Vec<Value>> {
	match root.get(name) {
		None => Err(SelfMapError::MissingField(name)),
		Some(Value::Array(items)) => Ok(items),
		Some(_) => Err(SelfMapError::NotAnArray(name)),
	}
}

fn decode_all<T: DeserializeOwned>(
	items: &[Value],
	on_error: impl Fn(usize, String) -> SelfMapError,
) -> SelfMapResult<Vec<T>> {
	items
		.iter()
		.enumerate()
		.map(|(i, item)| T::deserialize(item).map_err(|e| on_error(i, e.to_string())))
		.collect()
}
