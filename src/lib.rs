pub mod adapters;
pub mod config;
pub mod engine;
pub mod models;
