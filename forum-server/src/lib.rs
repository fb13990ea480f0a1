// Library exports for forum-server
// The binary and the integration tests both build on these modules

pub mod api;
pub mod config;
pub mod db;
pub mod router;
pub mod state;
pub mod validation;

pub use router::router;
