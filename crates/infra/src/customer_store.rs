use std::collections::HashMap;

use minicrm_core::{CustomerId, Entity};
use minicrm_customers::Customer;

/// Keyed store abstraction for customer records.
///
/// Lookup misses are signalled with `None`, never an error. Removal of an
/// absent key is a no-op. Callers run on a single logical thread of
/// control, so mutation goes through `&mut self` rather than interior
/// locking.
pub trait CustomerRepository {
    /// Insert or overwrite the entry keyed by the customer's identity.
    /// The later write wins.
    fn save(&mut self, customer: Customer);

    /// Return the customer stored under `id`, or `None` if no such key
    /// exists.
    fn get_by_id(&self, id: CustomerId) -> Option<Customer>;

    /// Delete the entry if present; ignore absent keys.
    fn remove(&mut self, id: CustomerId);
}

/// In-memory repository backed by a plain `HashMap`.
///
/// Entries live until they are removed or the process exits. Every stored
/// value's id equals its key because `save` keys by the entity id.
#[derive(Debug, Default)]
pub struct InMemoryCustomerRepository {
    customers: HashMap<CustomerId, Customer>,
}

impl InMemoryCustomerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }
}

impl CustomerRepository for InMemoryCustomerRepository {
    fn save(&mut self, customer: Customer) {
        let id = *customer.id();
        tracing::debug!(%id, "saving customer");
        self.customers.insert(id, customer);
    }

    fn get_by_id(&self, id: CustomerId) -> Option<Customer> {
        self.customers.get(&id).cloned()
    }

    fn remove(&mut self, id: CustomerId) {
        if self.customers.remove(&id).is_some() {
            tracing::debug!(%id, "removed customer");
        }
    }
}
