// API module for the juguetron-api HTTP server
// Search proxy + mock backends, designed for AI agent callers

pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod server;

pub use server::ApiServer;
