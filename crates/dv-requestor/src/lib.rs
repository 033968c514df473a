//! A minimal consumer of the registry: posts requests on behalf of its callers
//! and keeps every result the registry delivers back to it.

pub mod contract;
mod error;
pub mod msg;
pub mod state;

pub use crate::error::RequestorError;

pub mod testing;
