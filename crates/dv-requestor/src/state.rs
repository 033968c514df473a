use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, StdResult, Storage};
use cw_storage_plus::{Item, Map};

/// The only registry allowed to deliver results.
pub const REGISTRY: Item<Addr> = Item::new("registry");

/// Delivered results in arrival order, indexed from 0.
const RESULTS: Map<u64, Delivery> = Map::new("results");

/// Number of entries in [RESULTS], also the index of the next delivery.
const RESULTS_LEN: Item<u64> = Item::new("results_len");

#[cw_serde]
pub struct Delivery {
    /// Key of the fulfilled request, as returned by the registry.
    pub request: String,
    pub result: String,
}

/// Append a delivery to the log, returns the new length.
pub fn push_result(store: &mut dyn Storage, delivery: &Delivery) -> StdResult<u64> {
    let index = results_len(store)?;
    RESULTS.save(store, index, delivery)?;

    let len = index + 1;
    RESULTS_LEN.save(store, &len)?;
    Ok(len)
}

pub fn get_result(store: &dyn Storage, index: u64) -> StdResult<Option<Delivery>> {
    RESULTS.may_load(store, index)
}

pub fn results_len(store: &dyn Storage) -> StdResult<u64> {
    Ok(RESULTS_LEN.may_load(store)?.unwrap_or_default())
}
