//! Process-local storage adapters for the customer domain.

pub mod customer_store;

pub use customer_store::{CustomerRepository, InMemoryCustomerRepository};
