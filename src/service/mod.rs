//! Service layer for call dispatch.
//!
//! Orchestrates the domain layer and handles I/O operations.

mod adapter;
mod call_service;

pub use adapter::CallAdapter;
pub use call_service::CallService;
