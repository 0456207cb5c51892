use serde::{Deserialize, Serialize};

use crate::types::{Capability, CapabilityMode, GranteeType};

/// The principal a permission rule applies to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grantee {
    /// User or group.
    pub kind: GranteeType,
    /// Principal id.
    pub id: String,
}

impl Grantee {
    /// A user grantee.
    pub fn user(id: impl Into<String>) -> Self {
        Self {
            kind: GranteeType::User,
            id: id.into(),
        }
    }

    /// A group grantee.
    pub fn group(id: impl Into<String>) -> Self {
        Self {
            kind: GranteeType::Group,
            id: id.into(),
        }
    }
}

/// Capabilities granted to or denied from one grantee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionsRule {
    /// Who the rule applies to.
    pub grantee: Grantee,
    /// Capability modes in insertion order. Each capability appears once.
    #[serde(default)]
    pub capabilities: Vec<(Capability, CapabilityMode)>,
}

impl PermissionsRule {
    /// An empty rule for `grantee`.
    #[must_use]
    pub fn new(grantee: Grantee) -> Self {
        Self {
            grantee,
            capabilities: Vec::new(),
        }
    }

    /// Set the mode of `capability`, replacing any earlier mode in place.
    #[must_use]
    pub fn with(mut self, capability: Capability, mode: CapabilityMode) -> Self {
        match self.capabilities.iter_mut().find(|(c, _)| *c == capability) {
            Some(entry) => entry.1 = mode,
            None => self.capabilities.push((capability, mode)),
        }
        self
    }
}
