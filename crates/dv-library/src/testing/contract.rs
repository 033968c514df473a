use cosmwasm_std::{Addr, Coin, Empty, Env, StdResult, Storage};
use cw_multi_test::error::AnyResult;
use cw_multi_test::{App, AppResponse, Contract, Executor};
use serde::de::DeserializeOwned;

/// TestingContract is a trait that provides a common interface for setting up testing contracts.
/// `MM` is the `MigrateMsg` of the contract, contracts without one can leave it as [Empty].
pub trait TestingContract<IM, EM, QM, MM = Empty>
where
    IM: serde::Serialize,
    EM: serde::Serialize + std::fmt::Debug,
    QM: serde::Serialize,
    MM: serde::Serialize,
{
    fn wrapper() -> Box<dyn Contract<Empty>>;

    fn default_init(app: &mut App, env: &Env) -> IM;

    fn new(app: &mut App, env: &Env, msg: Option<IM>) -> Self;

    fn store_code(app: &mut App) -> u64 {
        app.store_code(Self::wrapper())
    }

    /// Instantiate from `sender`, which the contract records as its owner.
    fn instantiate(app: &mut App, code_id: u64, label: &str, msg: &IM) -> Addr {
        let admin = app.api().addr_make("admin");
        let addr = app
            .instantiate_contract(
                code_id,
                app.api().addr_make("owner"),
                msg,
                &[],
                label,
                Some(admin.to_string()),
            )
            .unwrap();
        Self::set_contract_addr(app, label, &addr);
        addr
    }

    /// Set the contract address in the storage for the given label.
    /// Using the storage system for easy orchestration of contract addresses for testing.
    fn set_contract_addr(app: &mut App, label: &str, addr: &Addr) {
        let key = format!("CONTRACT:{}", label);
        let value = String::from_utf8(addr.as_bytes().to_vec()).unwrap();
        app.storage_mut().set(key.as_bytes(), value.as_bytes());
    }

    /// Get the contract address in the storage for the given label.
    fn get_contract_addr(app: &App, label: &str) -> Addr {
        let key = format!("CONTRACT:{}", label);
        let value = app.storage().get(key.as_bytes()).unwrap();
        Addr::unchecked(String::from_utf8(value).unwrap())
    }

    fn addr(&self) -> &Addr;

    fn execute(&self, app: &mut App, sender: &Addr, msg: &EM) -> AnyResult<AppResponse> {
        self.execute_with_funds(app, sender, msg, vec![])
    }

    /// Execute `msg` with `funds` attached, the bank transfer happens before the contract runs.
    /// `data` of the response is what the contract set with `Response::set_data`.
    fn execute_with_funds(
        &self,
        app: &mut App,
        sender: &Addr,
        msg: &EM,
        funds: Vec<Coin>,
    ) -> AnyResult<AppResponse> {
        app.execute_contract(sender.clone(), self.addr().clone(), msg, &funds)
    }

    fn query<T: DeserializeOwned>(&self, app: &App, msg: &QM) -> StdResult<T> {
        app.wrap().query_wasm_smart(self.addr(), &msg)
    }

    /// Migrate to a freshly stored copy of [TestingContract::wrapper], signed by the admin.
    fn migrate(&self, app: &mut App, msg: &MM) -> AnyResult<AppResponse> {
        let admin = app.api().addr_make("admin");
        let code_id = Self::store_code(app);
        app.migrate_contract(admin, self.addr().clone(), msg, code_id)
    }
}
