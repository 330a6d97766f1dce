//! HTTP request handlers organized by domain
//!
//! Handlers are thin: they log the request, call the matching store
//! operation and serialize whatever it returns.

pub mod health;
pub mod postal;
pub mod suggestions;
