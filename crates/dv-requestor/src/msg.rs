use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Uint128;

#[cw_serde]
pub struct InstantiateMsg {
    /// The registry requests are posted to, and the only sender of results.
    pub registry: String,
}

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub enum ExecuteMsg {
    /// ExecuteMsg RequestData posts a request to the registry with this contract as callback.
    /// The attached funds are forwarded as the bounty, the request expires after a day.
    RequestData {
        oracle: String,
        input: String,
        bounty: Uint128,
    },
    /// ExecuteMsg OnRequestFilled is called by the registry when a request is filled.
    /// Same shape as [dv_registry::msg::CallbackMsg::OnRequestFilled].
    OnRequestFilled { request: String, result: String },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// QueryMsg GetResults returns the delivery at `index` and the total number of deliveries.
    #[returns(ResultsResponse)]
    GetResults { index: u64 },

    #[returns(RegistryResponse)]
    Registry {},
}

#[cw_serde]
pub struct ResultsResponse {
    pub length: u64,
    /// `None` when `index` is past the end of the log.
    pub request: Option<String>,
    pub result: Option<String>,
}

#[cw_serde]
pub struct RegistryResponse(pub String);
