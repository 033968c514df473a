//! Ledger time is [cosmwasm_std::Timestamp], counted in nanoseconds.
//! These helpers express durations in the same unit,
//! so they can be added with [cosmwasm_std::Timestamp::plus_nanos] directly.

pub const NANOSECOND: u64 = 1;
pub const SECOND: u64 = 1_000_000_000 * NANOSECOND;
pub const MINUTES: u64 = 60 * SECOND;
pub const HOURS: u64 = 60 * MINUTES;
pub const DAYS: u64 = 24 * HOURS;
