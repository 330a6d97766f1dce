pub mod config;
pub mod datasets;
pub mod errors;
pub mod models;
pub mod web;
