pub mod testing;

/// This module contains the implementation of the `ownership` module.
/// - `set_owner` records the owner during instantiation, no checks are done.
/// - `transfer_ownership` only allows the current owner to transfer ownership to a new owner.
/// - `assert_owner` checks if the current message sender is the owner.
pub mod ownership;

/// Envelope shared by every indexed notification: `{standard, version, event, data}`.
pub mod events;

pub mod time;
