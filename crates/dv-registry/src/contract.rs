#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;

use crate::callback;
use crate::error::ContractError;
use crate::escrow;
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use cosmwasm_std::{
    to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Reply, Response, StdError, StdResult,
};
use cw2::set_contract_version;
use dv_library::ownership;

const CONTRACT_NAME: &str = concat!("crates.io:", env!("CARGO_PKG_NAME"));
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    if msg.denom.is_empty() {
        return Err(StdError::generic_err("denom cannot be empty").into());
    }
    escrow::set_denom(deps.storage, &msg.denom)?;
    ownership::set_owner(deps.storage, &info.sender)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("owner", info.sender)
        .add_attribute("denom", msg.denom))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::NewRequest(msg) => {
            let (oracle, callback) = msg.validate(deps.api)?;
            execute::new_request(deps, env, info, msg, oracle, callback)
        }
        ExecuteMsg::CancelRequest { key } => execute::cancel_request(deps, info, key),
        ExecuteMsg::FillRequest { key, result } => {
            execute::fill_request(deps, env, info, key, result)
        }
        ExecuteMsg::SetOwner { new_owner } => {
            let new_owner = deps.api.addr_validate(&new_owner)?;
            ownership::transfer_ownership(deps.storage, info, new_owner)
                .map_err(ContractError::Ownership)
        }
    }
}

pub mod execute {
    use super::*;
    use crate::msg::NewRequestMsg;
    use crate::state::{self, Request};
    use crate::{auth, events};
    use cosmwasm_std::Addr;

    /// Escrow the attached bounty and record a new active request.
    /// Nothing is scheduled, the funds stay in the registry balance.
    pub fn new_request(
        deps: DepsMut,
        env: Env,
        info: MessageInfo,
        msg: NewRequestMsg,
        oracle: Addr,
        callback: Addr,
    ) -> Result<Response, ContractError> {
        escrow::lock(deps.storage, &info, msg.bounty)?;

        let request = Request::new(
            msg.input,
            oracle,
            info.sender,
            callback,
            msg.bounty,
            env.block.time,
            msg.expires_in,
        )?;
        let key = state::create_request(deps.storage, &request)?;

        Ok(Response::new()
            .add_attribute("method", "new_request")
            .add_event(events::new_request(&key, &request))
            .set_data(to_json_binary(&key)?))
    }

    /// Close the request and refund the bounty to the requestor.
    pub fn cancel_request(
        deps: DepsMut,
        info: MessageInfo,
        key: String,
    ) -> Result<Response, ContractError> {
        let mut request = state::load_request(deps.storage, &key)?;
        auth::assert_requestor(&request, &info)?;
        auth::assert_active(&request)?;

        let refund = request.close();
        state::update_request(deps.storage, &key, &request)?;

        let response = Response::new()
            .add_attribute("method", "cancel_request")
            .add_event(events::cancel_request(&key, &request, refund))
            .set_data(to_json_binary(&key)?);

        match escrow::release(deps.storage, &request.requestor, refund)? {
            Some(transfer) => Ok(response.add_message(transfer)),
            None => Ok(response),
        }
    }

    /// Close the request, notify its callback with `result` and release the bounty.
    ///
    /// All checks happen before the request is closed,
    /// the callback and the transfer are only scheduled once state is written.
    /// The bounty goes back to the requestor, not to the oracle.
    pub fn fill_request(
        deps: DepsMut,
        env: Env,
        info: MessageInfo,
        key: String,
        result: String,
    ) -> Result<Response, ContractError> {
        let mut request = state::load_request(deps.storage, &key)?;
        auth::assert_oracle(&request, &info)?;
        auth::assert_active(&request)?;
        auth::assert_not_expired(&request, &env)?;

        let refund = request.close();
        state::update_request(deps.storage, &key, &request)?;

        let notify = callback::dispatch(&request.callback, &key, &result)?;
        let response = Response::new()
            .add_attribute("method", "fill_request")
            .add_submessage(notify)
            .add_event(events::fill_request(&key, &request, &result, refund))
            .set_data(to_json_binary(&key)?);

        match escrow::release(deps.storage, &request.requestor, refund)? {
            Some(transfer) => Ok(response.add_message(transfer)),
            None => Ok(response),
        }
    }
}

/// Only the callback dispatched by [execute::fill_request] replies, and only when it failed.
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(_deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    match msg.id {
        callback::CALLBACK_REPLY_ID => Ok(Response::new()
            .add_attribute("method", "reply")
            .add_events(callback::on_reply(&msg))),
        id => Err(StdError::generic_err(format!("Unknown reply id: {}", id)).into()),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::GetOwner {} => to_json_binary(&query::owner(deps)?),
        QueryMsg::GetRequest { key } => to_json_binary(&query::request(deps, key)?),
        QueryMsg::ListRequests { start_after, limit } => {
            to_json_binary(&query::list_requests(deps, start_after, limit)?)
        }
        QueryMsg::Denom {} => to_json_binary(&query::denom(deps)?),
    }
}

pub mod query {
    use super::*;
    use crate::msg::{DenomResponse, OwnerResponse, RequestItem, RequestsResponse};
    use crate::state::{self, Request, REQUESTS};
    use cosmwasm_std::Order;
    use cw_storage_plus::Bound;

    const DEFAULT_LIMIT: u32 = 10;
    const MAX_LIMIT: u32 = 30;

    pub fn owner(deps: Deps) -> StdResult<OwnerResponse> {
        let owner = ownership::get_owner(deps.storage)?;
        Ok(OwnerResponse(owner.to_string()))
    }

    pub fn request(deps: Deps, key: String) -> StdResult<Option<Request>> {
        state::get_request(deps.storage, &key)
    }

    /// List requests in ascending key order, starting after `start_after` if given.
    pub fn list_requests(
        deps: Deps,
        start_after: Option<String>,
        limit: Option<u32>,
    ) -> StdResult<RequestsResponse> {
        let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
        let start = start_after.as_deref().map(Bound::exclusive);

        let requests = REQUESTS
            .range(deps.storage, start, None, Order::Ascending)
            .take(limit)
            .map(|item| {
                let (key, request) = item?;
                Ok(RequestItem { key, request })
            })
            .collect::<StdResult<_>>()?;

        Ok(RequestsResponse(requests))
    }

    pub fn denom(deps: Deps) -> StdResult<DenomResponse> {
        let denom = escrow::get_denom(deps.storage)?;
        Ok(DenomResponse(denom))
    }
}

/// This can only be called by the contract ADMIN, enforced by `wasmd` separate from cosmwasm.
/// See https://github.com/CosmWasm/cosmwasm/issues/926#issuecomment-851259818
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    cw2::ensure_from_older_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::new().add_attribute("method", "migrate"))
}
