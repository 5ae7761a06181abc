pub mod classifier;
pub mod config;
pub mod errors;
pub mod models;
pub mod presentation;
pub mod routes;
pub mod screening;
pub mod state;
