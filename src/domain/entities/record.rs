//! Structured snapshot of a builder.

use super::param_map::ParamMap;
use super::query_value::QueryValue;
use serde::Serialize;

/// Plain-data view of a link builder at one point in time.
///
/// Produced by [`crate::domain::link_builder::LinkBuilder::to_record`]; it is
/// detached from the builder and unaffected by later mutations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinkRecord {
    pub url: String,
    pub base_url: String,
    pub path: String,
    pub tracking_params: ParamMap<String>,
    pub extra_params: ParamMap<QueryValue>,
}
