use cosmwasm_std::Event;

/// Name of the event standard every DV contract emits under.
pub const EVENT_STANDARD: &str = "dv";

/// Version of the [EVENT_STANDARD] envelope.
pub const EVENT_VERSION: &str = "1.0.0";

/// Create an [Event] of type `kind` carrying the standard envelope,
/// `standard`, `version` and `data` attributes in that order.
/// Callers append their payload attributes after the envelope.
///
/// Indexers see the type prefixed with `wasm-`, e.g. `wasm-new_request`.
pub fn standard_event(kind: impl Into<String>, data: impl Into<String>) -> Event {
    Event::new(kind)
        .add_attribute("standard", EVENT_STANDARD)
        .add_attribute("version", EVENT_VERSION)
        .add_attribute("data", data)
}
