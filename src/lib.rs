/*
 * Responsibility
 * - module wiring, re-exported as a library so integration tests can
 *   drive the Router in-process
 */
pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod services;
pub mod state;
