/*
 * Responsibility
 * - public entry point for the route table (routes() re-export)
 */
pub mod handlers;
mod routes;

pub use routes::routes;
