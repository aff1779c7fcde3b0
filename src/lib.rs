pub mod app;
pub mod common;
pub mod config;
pub mod docs;
pub mod modules;
pub mod routes;
pub mod state;
pub mod store;
