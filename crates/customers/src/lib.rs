//! Customers domain module.
//!
//! This crate contains the customer record itself, implemented purely as
//! domain data (no IO, no storage).

pub mod customer;

pub use customer::Customer;
