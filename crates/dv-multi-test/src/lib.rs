#![cfg(not(target_arch = "wasm32"))]
// Only exposed on unit and integration testing, not compiled to Wasm.

use cosmwasm_std::{Addr, Env};
use cw_multi_test::App;
pub use dv_library::testing::TestingContract;
pub use dv_registry::testing::RegistryContract;
pub use dv_requestor::testing::RequestorContract;

pub struct DvMultiTest {
    pub registry: RegistryContract,
    pub requestor: RequestorContract,
}

pub struct DvMultiTestBuilder {
    app: App,
    env: Env,
}

/// [DvMultiTest] provides a convenient way to bootstrap a registry
/// and a requestor bound to it, for testing oracles and callback contracts.
impl DvMultiTestBuilder {
    /// Creates a new instance of [DvMultiTestBuilder] with the given [App] and [Env].
    pub fn new(app: App, env: Env) -> Self {
        Self { app, env }
    }

    /// Builds the [DvMultiTest] instance, returning the [App] it was deployed to.
    /// The [RegistryContract] escrows in `denom` and the [RequestorContract] is bound to it.
    pub fn build(mut self) -> (App, DvMultiTest) {
        let registry = RegistryContract::new(&mut self.app, &self.env, None);
        let requestor = RequestorContract::new(&mut self.app, &self.env, None);

        (
            self.app,
            DvMultiTest {
                registry,
                requestor,
            },
        )
    }

    /// Deploys another [RequestorContract] bound to `registry`,
    /// which can be any address, including one that is not a registry.
    pub fn deploy_requestor(app: &mut App, env: &Env, registry: &Addr) -> RequestorContract {
        let init_msg = dv_requestor::msg::InstantiateMsg {
            registry: registry.to_string(),
        };
        RequestorContract::new(app, env, Some(init_msg))
    }
}
