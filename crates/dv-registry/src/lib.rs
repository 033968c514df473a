pub mod contract;
mod error;
pub mod msg;
pub mod state;

/// Per-request access checks, ownership is handled by [dv_library::ownership].
pub mod auth;
pub mod callback;
pub mod escrow;
pub mod events;

pub use crate::error::ContractError;

pub mod testing;
