//! Notifications for each request transition, for off-chain indexers.
//! Every event carries the [dv_library::events::standard_event] envelope
//! with the request key as `data`.

use crate::state::Request;
use cosmwasm_std::{Event, Uint128};
use dv_library::events::standard_event;

pub fn new_request(key: &str, request: &Request) -> Event {
    standard_event("new_request", key)
        .add_attribute("requestor", request.requestor.as_str())
        .add_attribute("oracle", request.oracle.as_str())
        .add_attribute("callback", request.callback.as_str())
        .add_attribute("bounty", request.bounty.to_string())
        .add_attribute("expires", request.expires.nanos().to_string())
}

/// `refund` is the bounty released to the requestor, taken before the request was closed.
pub fn cancel_request(key: &str, request: &Request, refund: Uint128) -> Event {
    standard_event("cancel_request", key)
        .add_attribute("requestor", request.requestor.as_str())
        .add_attribute("refund", refund.to_string())
}

pub fn fill_request(key: &str, request: &Request, result: &str, refund: Uint128) -> Event {
    standard_event("fill_request", key)
        .add_attribute("oracle", request.oracle.as_str())
        .add_attribute("callback", request.callback.as_str())
        .add_attribute("result", result)
        .add_attribute("refund", refund.to_string())
}
