//! DepViz HTTP server
//!
//! Thin axum boundary over `depviz-core`: one analysis endpoint plus a
//! liveness probe. The core does all the work; this crate only maps the
//! request/response shapes and status codes.

pub mod config;
pub mod error;
pub mod handlers;
pub mod server;

pub use config::ServerConfig;
pub use server::Server;
