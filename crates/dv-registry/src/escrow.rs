use crate::error::ContractError;
use cosmwasm_std::{Addr, BankMsg, Coin, CosmosMsg, MessageInfo, StdResult, Storage, Uint128};
use cw_storage_plus::Item;

/// Bank denom bounties are escrowed in, set once at instantiation.
const DENOM: Item<String> = Item::new("denom");

/// Set the denom of the contract during instantiation
pub fn set_denom(storage: &mut dyn Storage, denom: impl Into<String>) -> StdResult<()> {
    DENOM.save(storage, &denom.into())
}

/// Get the denom of the contract from storage
pub fn get_denom(storage: &dyn Storage) -> StdResult<String> {
    DENOM.load(storage)
}

/// Lock the attached funds as the bounty of a new request.
/// Funds are already in the contract balance when `execute` runs,
/// this only checks that exactly `bounty` of the escrow denom was attached.
/// No funds counts as zero, any other denom is rejected.
pub fn lock(
    storage: &dyn Storage,
    info: &MessageInfo,
    bounty: Uint128,
) -> Result<(), ContractError> {
    let denom = DENOM.load(storage)?;
    let paid = cw_utils::may_pay(info, &denom)
        .map_err(|err| ContractError::invalid_bounty(err.to_string()))?;

    if paid != bounty {
        return Err(ContractError::invalid_bounty(format!(
            "attached {}{} does not match bounty {}{}",
            paid, denom, bounty, denom
        )));
    }
    Ok(())
}

/// Create a [BankMsg::Send] releasing `amount` of escrow to `recipient`.
/// Returns `None` for a zero amount, the bank module rejects empty sends.
pub fn release(
    storage: &dyn Storage,
    recipient: &Addr,
    amount: Uint128,
) -> StdResult<Option<CosmosMsg>> {
    if amount.is_zero() {
        return Ok(None);
    }

    let denom = DENOM.load(storage)?;
    let msg = BankMsg::Send {
        to_address: recipient.to_string(),
        amount: vec![Coin { denom, amount }],
    };
    Ok(Some(msg.into()))
}
