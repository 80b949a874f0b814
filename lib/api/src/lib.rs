pub mod explain;
pub mod rest;

pub use explain::{explain, Recommendation, RecommendationResponse};
pub use rest::{configure, ApiError, AppState, RestApi, DEFAULT_TOP_N};
