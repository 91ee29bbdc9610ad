//! Segments resource

use crate::context::Context;
use crate::dispatch::Call;
use crate::models::{Segment, SegmentResponse};
use crate::operation::{Operation, Resource};
use crate::transport::Method;

const CREATE: Operation = Operation::new(Resource::Segments, "create", Method::Post);
const GET: Operation = Operation::new(Resource::Segments, "get", Method::Get);
const DELETE: Operation = Operation::new(Resource::Segments, "delete", Method::Delete);

/// `/segments`
#[derive(Debug, Clone)]
pub struct Segments {
    ctx: Context,
}

impl Segments {
    pub(crate) fn new(ctx: Context) -> Self {
        Self { ctx }
    }

    /// Create a segment
    pub fn create(&self, segment: Segment) -> Call<SegmentResponse> {
        self.ctx
            .object(CREATE, move || CREATE.request(["segments"]).json(&segment))
    }

    /// Get a segment
    pub fn get(&self, id: &str) -> Call<SegmentResponse> {
        let id = id.to_owned();
        self.ctx
            .object(GET, move || Ok(GET.request(["segments", id.as_str()])))
    }

    /// Delete a segment
    pub fn delete(&self, id: &str) -> Call<()> {
        let id = id.to_owned();
        self.ctx
            .empty(DELETE, move || Ok(DELETE.request(["segments", id.as_str()])))
    }
}
