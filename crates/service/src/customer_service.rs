use minicrm_core::CustomerId;
use minicrm_customers::Customer;
use minicrm_infra::CustomerRepository;

/// Façade exposing customer operations over a repository.
///
/// The repository instance is exclusively owned by the service (constructor
/// injection); whichever scope constructs the service hands the store over
/// and interacts with customers only through it.
pub struct CustomerService<R> {
    repository: R,
}

impl<R: CustomerRepository> CustomerService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Construct a customer and store it, returning the assigned identity.
    ///
    /// The identity is the only handle for later retrieval, so it is handed
    /// back to the caller instead of being discarded.
    pub fn add_customer(
        &mut self,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> CustomerId {
        let customer = Customer::new(name, email);
        let id = customer.id_typed();
        tracing::info!(%id, "adding customer");
        self.repository.save(customer);
        id
    }

    /// Look up a customer by identity; `None` when unknown.
    pub fn get_customer(&self, id: CustomerId) -> Option<Customer> {
        self.repository.get_by_id(id)
    }

    /// Remove a customer by identity; unknown identities are ignored.
    pub fn remove_customer(&mut self, id: CustomerId) {
        tracing::info!(%id, "removing customer");
        self.repository.remove(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use minicrm_infra::InMemoryCustomerRepository;
    use proptest::prelude::*;

    fn test_service() -> CustomerService<InMemoryCustomerRepository> {
        CustomerService::new(InMemoryCustomerRepository::new())
    }

    #[test]
    fn add_then_get_returns_matching_record() {
        let mut service = test_service();

        let id = service.add_customer("Test Customer", "test@example.com");

        let customer = service.get_customer(id).unwrap();
        assert_eq!(customer.id_typed(), id);
        assert_eq!(customer.name(), "Test Customer");
        assert_eq!(customer.email(), "test@example.com");
    }

    #[test]
    fn get_of_never_assigned_identity_is_none() {
        let mut service = test_service();
        service.add_customer("Test Customer", "test@example.com");

        assert_eq!(service.get_customer(CustomerId::new()), None);
    }

    #[test]
    fn added_customers_get_distinct_identities() {
        let mut service = test_service();

        let ids: Vec<CustomerId> = (0..100)
            .map(|i| service.add_customer(format!("Customer {i}"), format!("c{i}@example.com")))
            .collect();

        for (i, a) in ids.iter().enumerate() {
            for b in &ids[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn remove_then_get_is_none() {
        let mut service = test_service();
        let id = service.add_customer("Test Customer", "test@example.com");

        service.remove_customer(id);

        assert_eq!(service.get_customer(id), None);
    }

    #[test]
    fn remove_of_unknown_identity_is_a_no_op() {
        let mut service = test_service();
        let kept = service.add_customer("Test Customer", "test@example.com");

        service.remove_customer(CustomerId::new());

        assert!(service.get_customer(kept).is_some());
    }

    proptest! {
        #[test]
        fn add_then_get_round_trips_any_name_and_email(name in ".*", email in ".*") {
            let mut service = test_service();

            let id = service.add_customer(name.clone(), email.clone());

            let customer = service.get_customer(id).unwrap();
            prop_assert_eq!(customer.name(), name.as_str());
            prop_assert_eq!(customer.email(), email.as_str());
        }
    }
}
