use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Ownership(#[from] dv_library::ownership::OwnershipError),

    #[error("Unauthorized")]
    Unauthorized {},

    #[error("Invalid bounty: {msg}")]
    InvalidBounty { msg: String },

    #[error("Expired request")]
    Expired {},

    #[error("Request not found")]
    NotFound {},

    #[error("Request is not active")]
    Inactive {},

    #[error("Request already exists")]
    RequestExists {},
}

impl ContractError {
    pub fn invalid_bounty(msg: impl Into<String>) -> Self {
        ContractError::InvalidBounty { msg: msg.into() }
    }
}
