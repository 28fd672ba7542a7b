//! Demonstration entry point: wire a repository and a service, add two
//! customers, then show a lookup hit and a lookup miss.

use minicrm_core::CustomerId;
use minicrm_infra::{CustomerRepository, InMemoryCustomerRepository};
use minicrm_service::CustomerService;

fn main() {
    minicrm_observability::init();

    let repository = InMemoryCustomerRepository::new();
    let mut service = CustomerService::new(repository);

    let john = service.add_customer("John Doe", "john.doe@example.com");
    service.add_customer("Jane Smith", "jane.smith@example.com");

    // Hit: the identity handed back at creation.
    print_lookup(&service, john);

    // Miss: an identity that was never assigned to any record.
    print_lookup(&service, CustomerId::new());
}

fn print_lookup<R: CustomerRepository>(service: &CustomerService<R>, id: CustomerId) {
    match service.get_customer(id) {
        Some(customer) => println!("{customer}"),
        None => println!("Customer not found."),
    }
}
