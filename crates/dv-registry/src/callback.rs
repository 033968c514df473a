use crate::msg::CallbackMsg;
use cosmwasm_std::{to_json_binary, Addr, Event, Reply, StdResult, SubMsg, SubMsgResult, WasmMsg};

/// Reply id of [dispatch], the only submessage the registry sends.
pub const CALLBACK_REPLY_ID: u64 = 1;

/// Gas allowance for the callback contract, fixed for every request.
pub const CALLBACK_GAS_LIMIT: u64 = 1_000_000;

/// Build the [CallbackMsg::OnRequestFilled] notification to `callback`.
///
/// The call is fire-and-forget: it only gets a reply on error,
/// so a failing callback reverts its own writes but not the fill that scheduled it.
/// The request key travels as the reply payload for [on_reply].
pub fn dispatch(callback: &Addr, key: &str, result: &str) -> StdResult<SubMsg> {
    let msg = WasmMsg::Execute {
        contract_addr: callback.to_string(),
        msg: to_json_binary(&CallbackMsg::OnRequestFilled {
            request: key.to_string(),
            result: result.to_string(),
        })?,
        funds: vec![],
    };

    Ok(SubMsg::reply_on_error(msg, CALLBACK_REPLY_ID)
        .with_gas_limit(CALLBACK_GAS_LIMIT)
        .with_payload(key.as_bytes().to_vec()))
}

/// Turn a callback failure into a `callback_failed` event, nothing else.
/// The request stays filled and the refund already went out.
pub fn on_reply(reply: &Reply) -> Option<Event> {
    match &reply.result {
        SubMsgResult::Ok(_) => None,
        SubMsgResult::Err(err) => {
            let key = String::from_utf8_lossy(reply.payload.as_slice());
            Some(
                dv_library::events::standard_event("callback_failed", key)
                    .add_attribute("error", err),
            )
        }
    }
}
