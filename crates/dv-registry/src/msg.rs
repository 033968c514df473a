use crate::state::Request;
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Api, StdResult, Uint128, Uint64};

#[cw_serde]
pub struct InstantiateMsg {
    /// Bank denom that bounties are escrowed in.
    /// The instantiating sender becomes the owner of the registry.
    pub denom: String,
}

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub enum ExecuteMsg {
    /// ExecuteMsg NewRequest posts a data request with its bounty attached.
    /// The attached funds must be exactly `bounty` of the escrow denom.
    /// Returns the request key as the response data.
    NewRequest(NewRequestMsg),
    /// ExecuteMsg CancelRequest refunds the bounty to the requestor.
    /// Only the requestor can cancel, at any time while the request is active.
    CancelRequest { key: String },
    /// ExecuteMsg FillRequest delivers `result` to the request's callback.
    /// Only the request's oracle can fill, and only before it expires.
    FillRequest { key: String, result: String },
    SetOwner {
        /// See [`dv_library::ownership::transfer_ownership`] for more information on this field
        new_owner: String,
    },
}

#[cw_serde]
pub struct NewRequestMsg {
    /// Opaque query the oracle is expected to answer.
    pub input: String,
    /// The only principal allowed to fill this request.
    pub oracle: String,
    pub bounty: Uint128,
    /// Lifetime of the request in nanoseconds, added to the current block time.
    pub expires_in: Uint64,
    /// Contract that receives [CallbackMsg::OnRequestFilled] once filled.
    pub callback: String,
}

impl NewRequestMsg {
    /// Validate the `oracle` and `callback` principals.
    pub fn validate(&self, api: &dyn Api) -> StdResult<(Addr, Addr)> {
        let oracle = api.addr_validate(&self.oracle)?;
        let callback = api.addr_validate(&self.callback)?;
        Ok((oracle, callback))
    }
}

/// The notification a callback contract must accept from the registry.
/// Callback contracts should include a variant with the same shape in their own `ExecuteMsg`
/// and authenticate that the sender is the registry.
#[cw_serde]
pub enum CallbackMsg {
    OnRequestFilled {
        /// The key returned by [ExecuteMsg::NewRequest].
        request: String,
        result: String,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(OwnerResponse)]
    GetOwner {},

    /// QueryMsg GetRequest returns `null` when no request is stored under `key`.
    #[returns(Option<Request>)]
    GetRequest { key: String },

    /// QueryMsg ListRequests pages through all requests in ascending key order.
    #[returns(RequestsResponse)]
    ListRequests {
        start_after: Option<String>,
        limit: Option<u32>,
    },

    #[returns(DenomResponse)]
    Denom {},
}

#[cw_serde]
pub struct OwnerResponse(pub String);

#[cw_serde]
pub struct DenomResponse(pub String);

#[cw_serde]
pub struct RequestItem {
    pub key: String,
    pub request: Request,
}

#[cw_serde]
pub struct RequestsResponse(pub Vec<RequestItem>);
