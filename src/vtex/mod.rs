// VTEX search pipeline: persisted-query URL construction, response
// normalization and the per-request fan-out orchestration.

pub mod normalize;
pub mod query;
pub mod search;
