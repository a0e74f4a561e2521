use std::collections::HashSet;

pub fn normalize_identifier(identifier: &str) -> String {
	identifier.to_lowercase()
}

pub fn normalize_identifiers<'a, I>(identifiers: I) -> HashSet<String>
where
	I: IntoIterator<Item = &'a String>,
{
	identifiers.into_iter().map(|identifier| normalize_identifier(identifier)).collect()
}
