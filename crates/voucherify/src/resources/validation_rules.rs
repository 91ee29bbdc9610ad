//! Validation rules resource

use crate::context::Context;
use crate::dispatch::Call;
use crate::models::{ValidationRule, ValidationRuleResponse};
use crate::operation::{Operation, Resource};
use crate::transport::Method;

const CREATE: Operation = Operation::new(Resource::ValidationRules, "create", Method::Post);
const GET: Operation = Operation::new(Resource::ValidationRules, "get", Method::Get);
const UPDATE: Operation = Operation::new(Resource::ValidationRules, "update", Method::Put);
const DELETE: Operation = Operation::new(Resource::ValidationRules, "delete", Method::Delete);

/// `/validation-rules`
#[derive(Debug, Clone)]
pub struct ValidationRules {
    ctx: Context,
}

impl ValidationRules {
    pub(crate) fn new(ctx: Context) -> Self {
        Self { ctx }
    }

    /// Create a rule
    pub fn create(&self, rule: ValidationRule) -> Call<ValidationRuleResponse> {
        self.ctx.object(CREATE, move || {
            CREATE.request(["validation-rules"]).json(&rule)
        })
    }

    /// Get a rule
    pub fn get(&self, id: &str) -> Call<ValidationRuleResponse> {
        let id = id.to_owned();
        self.ctx.object(GET, move || {
            Ok(GET.request(["validation-rules", id.as_str()]))
        })
    }

    /// Update a rule
    pub fn update(&self, id: &str, rule: ValidationRule) -> Call<ValidationRuleResponse> {
        let id = id.to_owned();
        self.ctx.object(UPDATE, move || {
            UPDATE.request(["validation-rules", id.as_str()]).json(&rule)
        })
    }

    /// Delete a rule
    pub fn delete(&self, id: &str) -> Call<()> {
        let id = id.to_owned();
        self.ctx.empty(DELETE, move || {
            Ok(DELETE.request(["validation-rules", id.as_str()]))
        })
    }
}
