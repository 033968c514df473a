use crate::error::ContractError;
use crate::state::Request;
use cosmwasm_std::{Env, MessageInfo};

/// Only the principal that created (and funded) the request may cancel it.
pub fn assert_requestor(request: &Request, info: &MessageInfo) -> Result<(), ContractError> {
    if info.sender != request.requestor {
        return Err(ContractError::Unauthorized {});
    }
    Ok(())
}

/// Only the oracle named on the request may fill it, there is no global oracle list.
pub fn assert_oracle(request: &Request, info: &MessageInfo) -> Result<(), ContractError> {
    if info.sender != request.oracle {
        return Err(ContractError::Unauthorized {});
    }
    Ok(())
}

/// A request resolves exactly once, cancelled or filled.
pub fn assert_active(request: &Request) -> Result<(), ContractError> {
    if !request.active {
        return Err(ContractError::Inactive {});
    }
    Ok(())
}

/// `expires` must be strictly after the current block time.
pub fn assert_not_expired(request: &Request, env: &Env) -> Result<(), ContractError> {
    if request.is_expired(&env.block.time) {
        return Err(ContractError::Expired {});
    }
    Ok(())
}
