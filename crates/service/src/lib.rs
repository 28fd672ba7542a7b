//! Business-facing façade over customer storage.

pub mod customer_service;

pub use customer_service::CustomerService;
