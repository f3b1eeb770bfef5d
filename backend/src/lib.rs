// src/lib.rs

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod state;
pub mod store;
pub mod utils;
pub mod verifier;

pub use routes::create_router;
