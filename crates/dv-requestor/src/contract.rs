#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;

use crate::error::RequestorError;
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::state::REGISTRY;
use cosmwasm_std::{to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult};
use cw2::set_contract_version;

const CONTRACT_NAME: &str = concat!("crates.io:", env!("CARGO_PKG_NAME"));
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, RequestorError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let registry = deps.api.addr_validate(&msg.registry)?;
    REGISTRY.save(deps.storage, &registry)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("registry", registry))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, RequestorError> {
    match msg {
        ExecuteMsg::RequestData {
            oracle,
            input,
            bounty,
        } => execute::request_data(deps, env, info, oracle, input, bounty),
        ExecuteMsg::OnRequestFilled { request, result } => {
            execute::on_request_filled(deps, info, request, result)
        }
    }
}

pub mod execute {
    use super::*;
    use crate::state::{self, Delivery};
    use cosmwasm_std::{Uint128, Uint64, WasmMsg};
    use dv_library::events::standard_event;
    use dv_library::time::DAYS;
    use dv_registry::msg::{ExecuteMsg as RegistryExecuteMsg, NewRequestMsg};

    /// How long requests posted through this contract stay fillable.
    pub const REQUEST_LIFETIME: u64 = DAYS;

    /// Forward a new request to the registry, passing the attached funds through as bounty.
    /// The registry checks the funds, this contract never holds them.
    pub fn request_data(
        deps: DepsMut,
        env: Env,
        info: MessageInfo,
        oracle: String,
        input: String,
        bounty: Uint128,
    ) -> Result<Response, RequestorError> {
        let registry = REGISTRY.load(deps.storage)?;

        let msg = RegistryExecuteMsg::NewRequest(NewRequestMsg {
            input,
            oracle,
            bounty,
            expires_in: Uint64::new(REQUEST_LIFETIME),
            callback: env.contract.address.to_string(),
        });

        Ok(Response::new()
            .add_message(WasmMsg::Execute {
                contract_addr: registry.to_string(),
                msg: to_json_binary(&msg)?,
                funds: info.funds,
            })
            .add_attribute("method", "request_data")
            .add_attribute("sender", info.sender))
    }

    /// Record a delivered result, only the registry can deliver.
    pub fn on_request_filled(
        deps: DepsMut,
        info: MessageInfo,
        request: String,
        result: String,
    ) -> Result<Response, RequestorError> {
        let registry = REGISTRY.load(deps.storage)?;
        if info.sender != registry {
            return Err(RequestorError::Unauthorized {});
        }

        let length = state::push_result(
            deps.storage,
            &Delivery {
                request: request.clone(),
                result: result.clone(),
            },
        )?;

        Ok(Response::new()
            .add_attribute("method", "on_request_filled")
            .add_event(
                standard_event("result", result)
                    .add_attribute("request", request.as_str())
                    .add_attribute("length", length.to_string()),
            )
            .set_data(to_json_binary(&request)?))
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::GetResults { index } => to_json_binary(&query::results(deps, index)?),
        QueryMsg::Registry {} => to_json_binary(&query::registry(deps)?),
    }
}

pub mod query {
    use super::*;
    use crate::msg::{RegistryResponse, ResultsResponse};
    use crate::state;

    /// The delivery at `index`, with the current log length.
    /// An index past the end yields the length with neither request nor result.
    pub fn results(deps: Deps, index: u64) -> StdResult<ResultsResponse> {
        let length = state::results_len(deps.storage)?;
        let delivery = state::get_result(deps.storage, index)?;

        Ok(ResultsResponse {
            length,
            request: delivery.as_ref().map(|d| d.request.clone()),
            result: delivery.map(|d| d.result),
        })
    }

    pub fn registry(deps: Deps) -> StdResult<RegistryResponse> {
        let registry = REGISTRY.load(deps.storage)?;
        Ok(RegistryResponse(registry.to_string()))
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, RequestorError> {
    cw2::ensure_from_older_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::new().add_attribute("method", "migrate"))
}
