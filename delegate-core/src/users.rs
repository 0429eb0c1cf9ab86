//! User registry: name → role.
//!
//! Names are the unique key. Registering a name twice overwrites the role.

use std::collections::BTreeMap;

use crate::error::ValidationError;

/// In-memory mapping from user name to role.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserRegistry {
    roles: BTreeMap<String, String>,
}

impl UserRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite `name → role`.
    ///
    /// Both fields are trimmed and must be non-empty afterwards; otherwise
    /// [`ValidationError::EmptyUserField`] is returned and nothing changes.
    pub fn add_user(&mut self, name: &str, role: &str) -> Result<(), ValidationError> {
        let name = name.trim();
        let role = role.trim();
        if name.is_empty() || role.is_empty() {
            tracing::debug!(name, role, "rejected user with empty field");
            return Err(ValidationError::EmptyUserField);
        }

        match self.roles.insert(name.to_owned(), role.to_owned()) {
            Some(previous) => {
                tracing::info!(name, role, previous = %previous, "user role overwritten")
            }
            None => tracing::info!(name, role, "user added"),
        }
        Ok(())
    }

    /// Role registered for `name`, if any. Lookup is exact.
    pub fn role(&self, name: &str) -> Option<&str> {
        self.roles.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.roles.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    /// `(name, role)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.roles.iter().map(|(n, r)| (n.as_str(), r.as_str()))
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_then_lookup() {
        let mut users = UserRegistry::new();
        users.add_user("Alice", "Engineer").expect("add");
        assert_eq!(users.role("Alice"), Some("Engineer"));
        assert!(users.contains("Alice"));
        assert_eq!(users.len(), 1);
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let mut users = UserRegistry::new();
        users.add_user("  Bob ", "\tManager\n").expect("add");
        assert_eq!(users.role("Bob"), Some("Manager"));
        assert!(!users.contains("  Bob "));
    }

    #[test]
    fn blank_fields_are_rejected() {
        let mut users = UserRegistry::new();
        for (name, role) in [("", "Engineer"), ("Alice", ""), ("   ", "Engineer"), ("Alice", " ")] {
            let err = users.add_user(name, role).unwrap_err();
            assert_eq!(err, ValidationError::EmptyUserField);
        }
        assert!(users.is_empty());
    }

    #[test]
    fn duplicate_name_overwrites_role() {
        let mut users = UserRegistry::new();
        users.add_user("Alice", "Engineer").expect("first");
        users.add_user("Alice", "Lead").expect("second");
        assert_eq!(users.len(), 1);
        assert_eq!(users.role("Alice"), Some("Lead"));
    }

    #[test]
    fn iteration_is_name_ordered() {
        let mut users = UserRegistry::new();
        users.add_user("carol", "QA").expect("add");
        users.add_user("alice", "Dev").expect("add");
        let names: Vec<&str> = users.iter().map(|(n, _)| n).collect();
        assert_eq!(names, ["alice", "carol"]);
    }
}
