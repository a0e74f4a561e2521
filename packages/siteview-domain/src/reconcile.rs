use std::collections::HashSet;

use crate::identifier::{normalize_identifier, normalize_identifiers};

/// Merges the name-ordered candidate list with the set of prioritized (configured) identifiers.
///
/// The result is `[reserved?] + [prioritized, in candidate order] + [rest, in candidate order]`:
///
/// - `reserved` leads the list exactly once if it occurs anywhere in `ordered`, whether or not it
///   is prioritized. It never appears otherwise.
/// - Every other identifier keeps its relative position inside its partition. `ordered` is never
///   re-sorted.
///
/// Both sides are compared lowercased and the output is lowercased. `prioritized` is expected to be
/// a subset of `ordered`; members that are not candidates are ignored.
pub fn reconcile(ordered: &[String], prioritized: &HashSet<String>, reserved: &str) -> Vec<String> {
	let prioritized = normalize_identifiers(prioritized);
	let reserved = normalize_identifier(reserved);
	let mut leading = Vec::with_capacity(prioritized.len().min(ordered.len()));
	let mut trailing = Vec::with_capacity(ordered.len());
	let mut reserved_found = false;

	for identifier in ordered {
		let identifier = normalize_identifier(identifier);

		if identifier == reserved {
			reserved_found = true;

			continue;
		}

		if prioritized.contains(&identifier) {
			leading.push(identifier);
		} else {
			trailing.push(identifier);
		}
	}

	let mut merged = Vec::with_capacity(leading.len() + trailing.len() + 1);

	if reserved_found {
		merged.push(reserved);
	}

	merged.extend(leading);
	merged.extend(trailing);

	merged
}

#[cfg(test)]
mod tests {
	use super::*;

	const RESERVED: &str = "system_host";

	fn ids(values: &[&str]) -> Vec<String> {
		values.iter().map(|value| value.to_string()).collect()
	}

	fn set(values: &[&str]) -> HashSet<String> {
		values.iter().map(|value| value.to_string()).collect()
	}

	#[test]
	fn reserved_leads_then_configured_then_rest() {
		// Candidates arrive sorted by display name: alpha, beta, gamma, system.
		let ordered = ids(&["a", "b", "c", "system_host"]);
		let merged = reconcile(&ordered, &set(&["c"]), RESERVED);

		assert_eq!(merged, ids(&["system_host", "c", "a", "b"]));
	}

	#[test]
	fn configured_reserved_is_not_duplicated() {
		let ordered = ids(&["a", "system_host", "b"]);
		let merged = reconcile(&ordered, &set(&["system_host", "b"]), RESERVED);

		assert_eq!(merged, ids(&["system_host", "b", "a"]));
	}

	#[test]
	fn absent_reserved_never_appears() {
		let ordered = ids(&["a", "b"]);
		let merged = reconcile(&ordered, &set(&["system_host", "b"]), RESERVED);

		assert_eq!(merged, ids(&["b", "a"]));
	}

	#[test]
	fn empty_prioritized_keeps_candidate_order() {
		let ordered = ids(&["c", "a", "b"]);

		assert_eq!(reconcile(&ordered, &HashSet::new(), RESERVED), ordered);
	}

	#[test]
	fn empty_candidates_yield_empty_list() {
		assert!(reconcile(&[], &set(&["a", "system_host"]), RESERVED).is_empty());
	}

	#[test]
	fn matching_ignores_case_on_both_sides() {
		let ordered = ids(&["A", "SYSTEM_HOST", "b"]);
		let merged = reconcile(&ordered, &set(&["B"]), "System_Host");

		assert_eq!(merged, ids(&["system_host", "b", "a"]));
	}
}
