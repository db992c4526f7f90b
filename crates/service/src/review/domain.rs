use serde::{Deserialize, Serialize};

/// Caller-supplied review fields for create and update.
///
/// Both fields are optional at this layer; the service decides which
/// combinations are acceptable per operation. Empty strings are treated the
/// same as absent fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReviewFields {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl ReviewFields {
    /// `name`, with empty strings normalized to `None`.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref().filter(|s| !s.is_empty())
    }

    /// `description`, with empty strings normalized to `None`.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref().filter(|s| !s.is_empty())
    }
}
