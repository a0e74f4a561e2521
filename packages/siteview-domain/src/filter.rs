/// Returns the lowercased filter, or `None` when the caller supplied nothing usable.
pub fn normalize_filter(filter: Option<&str>) -> Option<String> {
	let filter = filter?.trim();

	if filter.is_empty() {
		return None;
	}

	Some(filter.to_lowercase())
}

/// `filter` must already be normalized.
pub fn name_matches(name: &str, filter: Option<&str>) -> bool {
	match filter {
		Some(filter) => name.to_lowercase().contains(filter),
		None => true,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn blank_filter_is_ignored() {
		assert_eq!(normalize_filter(None), None);
		assert_eq!(normalize_filter(Some("")), None);
		assert_eq!(normalize_filter(Some("   ")), None);
	}

	#[test]
	fn match_is_case_insensitive_substring() {
		let filter = normalize_filter(Some(" Demo ")).expect("Filter must survive trimming.");

		assert!(name_matches("my.DEMO.example.com", Some(&filter)));
		assert!(!name_matches("shop.example.com", Some(&filter)));
		assert!(name_matches("anything", None));
	}

	#[test]
	fn filter_text_is_literal() {
		let filter = normalize_filter(Some("a.c")).expect("Filter must survive trimming.");

		assert!(name_matches("a.c.example", Some(&filter)));
		assert!(!name_matches("abc.example", Some(&filter)));
	}
}
