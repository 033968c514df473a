use cosmwasm_std::{Addr, Event, MessageInfo, Response, StdError, StdResult, Storage};
use cw_storage_plus::Item;

const OWNER: Item<Addr> = Item::new("_owner");

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum OwnershipError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Unauthorized")]
    Unauthorized,
}

/// Set the [OWNER] of the contract (this is internal, no checks are done).
/// Called once from `instantiate()` with the instantiating principal.
pub fn set_owner(storage: &mut dyn Storage, owner: &Addr) -> Result<(), OwnershipError> {
    OWNER.save(storage, owner)?;
    Ok(())
}

/// Get the owner of the contract.
/// If [set_owner] has not been called, it will return an [StdError::NotFound]
pub fn get_owner(storage: &dyn Storage) -> StdResult<Addr> {
    OWNER.may_load(storage)?.ok_or(StdError::not_found("owner"))
}

/// Hand a DV contract over to `new_owner`, answering `SetOwner` on the registry.
/// Only the current owner may call it. Requests, escrow and callbacks are untouched:
/// the owner has no say over a request, that belongs to its requestor and oracle.
/// Emits `TransferredOwnership` with the old and new owner.
pub fn transfer_ownership(
    storage: &mut dyn Storage,
    info: MessageInfo,
    new_owner: Addr,
) -> Result<Response, OwnershipError> {
    assert_owner(storage, &info)?;

    let old_owner = OWNER.load(storage)?;
    OWNER.save(storage, &new_owner)?;
    Ok(Response::new()
        .add_attribute("method", "set_owner")
        .add_event(
            Event::new("TransferredOwnership")
                .add_attribute("old_owner", old_owner.as_str())
                .add_attribute("new_owner", new_owner.as_str()),
        ))
}

/// Asserts that the sender of the message is the owner of the contract
pub fn assert_owner(storage: &dyn Storage, info: &MessageInfo) -> Result<(), OwnershipError> {
    let owner = OWNER.load(storage)?;
    if info.sender != owner {
        return Err(OwnershipError::Unauthorized);
    }
    Ok(())
}
