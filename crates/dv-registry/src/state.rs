use crate::error::ContractError;
use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, StdError, StdResult, Storage, Timestamp, Uint128, Uint64};
use cw_storage_plus::Map;

type Key = str;

/// A data request, stored under the key derived at creation.
/// Only `bounty` and `active` ever change, and they change together exactly once.
#[cw_serde]
pub struct Request {
    pub input: String,
    pub oracle: Addr,
    pub requestor: Addr,
    pub callback: Addr,
    /// Escrowed amount, zero once cancelled or filled.
    pub bounty: Uint128,
    pub timestamp: Timestamp,
    pub expires: Timestamp,
    pub active: bool,
}

impl Request {
    /// Create a new active request at ledger time `now`, expiring `expires_in` nanoseconds later.
    pub fn new(
        input: String,
        oracle: Addr,
        requestor: Addr,
        callback: Addr,
        bounty: Uint128,
        now: Timestamp,
        expires_in: Uint64,
    ) -> StdResult<Self> {
        let expires = Uint64::new(now.nanos())
            .checked_add(expires_in)
            .map_err(StdError::from)?;

        Ok(Self {
            input,
            oracle,
            requestor,
            callback,
            bounty,
            timestamp: now,
            expires: Timestamp::from_nanos(expires.u64()),
            active: true,
        })
    }

    /// The lookup key: timestamp (nanos), input, bounty and requestor concatenated.
    /// Must be derived before [Request::close], the bounty is part of it.
    pub fn key(&self) -> String {
        format!(
            "{}{}{}{}",
            self.timestamp.nanos(),
            self.input,
            self.bounty,
            self.requestor
        )
    }

    /// Mark the request as resolved and zero the bounty.
    /// Returns the bounty held before closing, which is what must be released.
    pub fn close(&mut self) -> Uint128 {
        let bounty = self.bounty;
        self.active = false;
        self.bounty = Uint128::zero();
        bounty
    }

    /// Whether `now` is at or past the deadline.
    pub fn is_expired(&self, now: &Timestamp) -> bool {
        self.expires <= *now
    }
}

/// Ledger of all requests ever created.
/// Keys are never removed, values are only updated through [update_request].
pub(crate) const REQUESTS: Map<&Key, Request> = Map::new("requests");

/// Store a new request under its key, refusing to overwrite an existing one.
pub fn create_request(
    store: &mut dyn Storage,
    request: &Request,
) -> Result<String, ContractError> {
    let key = request.key();
    if REQUESTS.has(store, &key) {
        return Err(ContractError::RequestExists {});
    }

    REQUESTS.save(store, &key, request)?;
    Ok(key)
}

/// Load the request stored under `key`, [ContractError::NotFound] if there is none.
pub fn load_request(store: &dyn Storage, key: &str) -> Result<Request, ContractError> {
    REQUESTS
        .may_load(store, key)?
        .ok_or(ContractError::NotFound {})
}

/// Load the request stored under `key` if any, for read-only queries.
pub fn get_request(store: &dyn Storage, key: &str) -> StdResult<Option<Request>> {
    REQUESTS.may_load(store, key)
}

/// Write back a request previously loaded with [load_request].
pub fn update_request(
    store: &mut dyn Storage,
    key: &str,
    request: &Request,
) -> Result<(), ContractError> {
    REQUESTS.save(store, key, request)?;
    Ok(())
}
