//! HTTP boundary for feedmix: parses `GET /?count=&offset=`, resolves the feed and
//! encodes it as a JSON array.

pub mod config;
pub mod errors;
pub mod request;
pub mod routes;
pub mod state;

pub use routes::build_router;
pub use state::AppState;
