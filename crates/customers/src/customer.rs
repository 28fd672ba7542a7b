use serde::{Deserialize, Serialize};

use minicrm_core::{CustomerId, Entity};

/// Customer record: identity plus display name and email.
///
/// The identity is assigned inside the constructor and never reassigned.
/// There are no mutation operations; "updating" a customer means building a
/// new record and saving it over the old entry. Name and email are plain
/// unvalidated text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    id: CustomerId,
    name: String,
    email: String,
}

impl Customer {
    /// Construct a customer with a freshly assigned identity.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self::with_id(CustomerId::new(), name, email)
    }

    /// Construct a customer with an explicit identity.
    ///
    /// Intended for tests and rehydration paths where the id must be
    /// deterministic.
    pub fn with_id(id: CustomerId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }

    pub fn id_typed(&self) -> CustomerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

impl Entity for Customer {
    type Id = CustomerId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl core::fmt::Display for Customer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Customer(name={}, email={})", self.name, self.email)
    }
}
