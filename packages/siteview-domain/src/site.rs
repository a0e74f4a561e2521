use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Site identifier -> secret name -> warnings raised for that secret.
pub type WarningsBySite = HashMap<String, HashMap<String, Vec<String>>>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Site {
	pub identifier: String,
	pub name: Option<String>,
	#[serde(default)]
	pub archived: bool,
}
impl Site {
	pub fn new(identifier: impl Into<String>, name: impl Into<String>) -> Self {
		Self { identifier: identifier.into(), name: Some(name.into()), archived: false }
	}

	/// The display name, when present and non-blank.
	pub fn display_name(&self) -> Option<&str> {
		self.name.as_deref().filter(|name| !name.trim().is_empty())
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Caller {
	pub user_id: String,
}
impl Caller {
	pub fn new(user_id: impl Into<String>) -> Self {
		Self { user_id: user_id.into() }
	}
}
