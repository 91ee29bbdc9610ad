//! Customer segment types

use serde::{Deserialize, Serialize};

/// How segment membership is computed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SegmentType {
    /// Fixed list of customers
    #[serde(rename = "static")]
    Static,
    /// Recomputed from the filter
    #[serde(rename = "auto-update")]
    AutoUpdate,
}

/// Segment definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Name
    pub name: String,
    /// Membership type
    #[serde(rename = "type")]
    pub kind: SegmentType,
    /// Filter, for auto-update segments
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<serde_json::Value>,
    /// Customer ids, for static segments
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub customers: Vec<String>,
}

/// Segment as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentResponse {
    /// Segment id
    pub id: String,
    /// Name
    pub name: String,
    /// Membership type
    #[serde(rename = "type")]
    pub kind: SegmentType,
    /// Filter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<serde_json::Value>,
    /// Creation time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}
