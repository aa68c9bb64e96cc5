use std::collections::HashMap;

/// The set of variables defined by assignments, keyed by name.
///
/// Each entry records, as its placeholder value, the token index of the
/// assignment target in the sentence that defined it. Values are never
/// computed. The validator only adds entries; concurrent analyses must use
/// separate environments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariableEnvironment {
    variables: HashMap<String, usize>,
}

impl VariableEnvironment {
    /// Creates an environment with no variables defined.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `name` as defined at token index `position`.
    ///
    /// Redefinition replaces the recorded position and returns the previous
    /// one.
    pub fn define(&mut self, name: impl Into<String>, position: usize) -> Option<usize> {
        self.variables.insert(name.into(), position)
    }

    /// Returns `true` if an assignment to `name` has been seen.
    #[must_use]
    pub fn is_defined(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// Token index at which `name` was last defined.
    #[must_use]
    pub fn definition(&self, name: &str) -> Option<usize> {
        self.variables.get(name).copied()
    }

    /// Number of defined variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Returns `true` if nothing has been defined yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Names of the defined variables, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.variables.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
