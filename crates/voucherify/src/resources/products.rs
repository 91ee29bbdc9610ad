//! Products resource

use crate::context::Context;
use crate::dispatch::Call;
use crate::models::{Product, ProductResponse, ProductsFilter, ProductsResponse};
use crate::operation::{Operation, Resource};
use crate::transport::Method;

const CREATE: Operation = Operation::new(Resource::Products, "create", Method::Post);
const GET: Operation = Operation::new(Resource::Products, "get", Method::Get);
const UPDATE: Operation = Operation::new(Resource::Products, "update", Method::Put);
const DELETE: Operation = Operation::new(Resource::Products, "delete", Method::Delete);
const LIST: Operation = Operation::new(Resource::Products, "list", Method::Get);

/// `/products`
#[derive(Debug, Clone)]
pub struct Products {
    ctx: Context,
}

impl Products {
    pub(crate) fn new(ctx: Context) -> Self {
        Self { ctx }
    }

    /// Create a product
    pub fn create(&self, product: Product) -> Call<ProductResponse> {
        self.ctx
            .object(CREATE, move || CREATE.request(["products"]).json(&product))
    }

    /// Get a product by id or source id
    pub fn get(&self, id: &str) -> Call<ProductResponse> {
        let id = id.to_owned();
        self.ctx
            .object(GET, move || Ok(GET.request(["products", id.as_str()])))
    }

    /// Update a product
    pub fn update(&self, id: &str, product: Product) -> Call<ProductResponse> {
        let id = id.to_owned();
        self.ctx.object(UPDATE, move || {
            UPDATE.request(["products", id.as_str()]).json(&product)
        })
    }

    /// Delete a product
    pub fn delete(&self, id: &str, force: bool) -> Call<()> {
        let id = id.to_owned();
        self.ctx.empty(DELETE, move || {
            Ok(DELETE
                .request(["products", id.as_str()])
                .with_query_pair("force", force.to_string()))
        })
    }

    /// List products
    pub fn list(&self, filter: ProductsFilter) -> Call<ProductsResponse> {
        self.ctx
            .object(LIST, move || LIST.request(["products"]).with_filter(&filter))
    }
}
