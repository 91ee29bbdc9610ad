//! Customers resource

use crate::context::Context;
use crate::dispatch::Call;
use crate::models::{Customer, CustomerResponse};
use crate::operation::{Operation, Resource};
use crate::transport::Method;

const GET: Operation = Operation::new(Resource::Customers, "get", Method::Get);
const CREATE: Operation = Operation::new(Resource::Customers, "create", Method::Post);
const UPDATE: Operation = Operation::new(Resource::Customers, "update", Method::Put);
const DELETE: Operation = Operation::new(Resource::Customers, "delete", Method::Delete);

/// `/customers`
#[derive(Debug, Clone)]
pub struct Customers {
    ctx: Context,
}

impl Customers {
    pub(crate) fn new(ctx: Context) -> Self {
        Self { ctx }
    }

    /// Get a customer
    pub fn get(&self, id: &str) -> Call<CustomerResponse> {
        let id = id.to_owned();
        self.ctx
            .object(GET, move || Ok(GET.request(["customers", id.as_str()])))
    }

    /// Create a customer
    pub fn create(&self, customer: Customer) -> Call<CustomerResponse> {
        self.ctx
            .object(CREATE, move || CREATE.request(["customers"]).json(&customer))
    }

    /// Update the customer with the given id
    pub fn update(&self, id: &str, customer: Customer) -> Call<CustomerResponse> {
        let id = id.to_owned();
        self.ctx.object(UPDATE, move || {
            UPDATE.request(["customers", id.as_str()]).json(&customer)
        })
    }

    /// Delete a customer
    pub fn delete(&self, id: &str) -> Call<()> {
        let id = id.to_owned();
        self.ctx
            .empty(DELETE, move || Ok(DELETE.request(["customers", id.as_str()])))
    }
}
