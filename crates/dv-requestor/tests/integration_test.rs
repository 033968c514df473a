use cosmwasm_std::testing::mock_env;
use cosmwasm_std::{coins, from_json, Addr, Event, Uint128, Uint64};
use cw_multi_test::App;
use dv_library::testing::TestingContract;
use dv_library::time::DAYS;
use dv_registry::msg::{
    ExecuteMsg as RegistryExecuteMsg, NewRequestMsg, QueryMsg as RegistryQueryMsg,
    RequestsResponse,
};
use dv_registry::state::Request;
use dv_registry::testing::RegistryContract;
use dv_requestor::msg::{ExecuteMsg, InstantiateMsg, QueryMsg, RegistryResponse, ResultsResponse};
use dv_requestor::testing::RequestorContract;

fn instantiate() -> (App, RegistryContract, RequestorContract) {
    let mut app = App::new(|router, api, storage| {
        let alice = api.addr_make("alice");
        router
            .bank
            .init_balance(storage, &alice, coins(1_000_000, "denom"))
            .unwrap();
    });
    let env = mock_env();

    let registry = RegistryContract::new(&mut app, &env, None);
    let requestor = RequestorContract::new(&mut app, &env, None);

    (app, registry, requestor)
}

fn balance(app: &App, addr: &Addr) -> Uint128 {
    app.wrap().query_balance(addr, "denom").unwrap().amount
}

/// Ask `requestor` for data on behalf of alice, returns the registry key of the request.
fn request_data(
    app: &mut App,
    registry: &RegistryContract,
    requestor: &RequestorContract,
    bounty: u128,
) -> String {
    let alice = app.api().addr_make("alice");
    let oracle = app.api().addr_make("oracle");

    let msg = ExecuteMsg::RequestData {
        oracle: oracle.to_string(),
        input: "http://example/test".to_string(),
        bounty: Uint128::new(bounty),
    };
    requestor
        .execute_with_funds(app, &alice, &msg, coins(bounty, "denom"))
        .unwrap();

    let RequestsResponse(requests) = registry
        .query(
            app,
            &RegistryQueryMsg::ListRequests {
                start_after: None,
                limit: None,
            },
        )
        .unwrap();
    let item = requests
        .into_iter()
        .filter(|item| item.request.requestor == requestor.addr && item.request.active)
        .filter(|item| item.request.bounty == Uint128::new(bounty))
        .last()
        .unwrap();
    item.key
}

fn get(app: &App, registry: &RegistryContract, key: &str) -> Request {
    registry
        .query::<Option<Request>>(
            app,
            &RegistryQueryMsg::GetRequest {
                key: key.to_string(),
            },
        )
        .unwrap()
        .unwrap()
}

fn fill(app: &mut App, registry: &RegistryContract, key: &str, result: &str) -> Vec<Event> {
    let oracle = app.api().addr_make("oracle");
    registry
        .execute(
            app,
            &oracle,
            &RegistryExecuteMsg::FillRequest {
                key: key.to_string(),
                result: result.to_string(),
            },
        )
        .unwrap()
        .events
}

#[test]
fn test_registry() {
    let (app, registry, requestor) = instantiate();

    let RegistryResponse(queried) = requestor.query(&app, &QueryMsg::Registry {}).unwrap();
    assert_eq!(queried, registry.addr.to_string());
}

#[test]
fn test_request_data() {
    let (mut app, registry, requestor) = instantiate();
    let alice = app.api().addr_make("alice");

    let key = request_data(&mut app, &registry, &requestor, 10_000);

    let request = get(&app, &registry, &key);
    assert!(request.active);
    assert_eq!(request.bounty, Uint128::new(10_000));
    assert_eq!(request.requestor, requestor.addr);
    assert_eq!(request.callback, requestor.addr);
    assert_eq!(request.oracle, app.api().addr_make("oracle"));
    assert_eq!(request.expires, request.timestamp.plus_nanos(DAYS));

    assert_eq!(balance(&app, &alice), Uint128::new(990_000));
    assert_eq!(balance(&app, &registry.addr), Uint128::new(10_000));
    assert_eq!(balance(&app, &requestor.addr), Uint128::zero());
}

#[test]
fn test_request_data_underpaid() {
    let (mut app, registry, requestor) = instantiate();
    let alice = app.api().addr_make("alice");
    let oracle = app.api().addr_make("oracle");

    let err = requestor
        .execute_with_funds(
            &mut app,
            &alice,
            &ExecuteMsg::RequestData {
                oracle: oracle.to_string(),
                input: "http://example/test".to_string(),
                bounty: Uint128::new(10_000),
            },
            coins(1, "denom"),
        )
        .unwrap_err();

    assert_eq!(
        err.root_cause().to_string(),
        "Invalid bounty: attached 1denom does not match bounty 10000denom"
    );
    assert_eq!(balance(&app, &alice), Uint128::new(1_000_000));
    assert_eq!(balance(&app, &registry.addr), Uint128::zero());
}

#[test]
fn test_fill_delivers_result() {
    let (mut app, registry, requestor) = instantiate();
    let key = request_data(&mut app, &registry, &requestor, 10_000);

    let events = fill(&mut app, &registry, &key, "httpbin.org");
    assert!(events.iter().any(|event| event.ty == "wasm-result"));
    assert!(!events.iter().any(|event| event.ty == "wasm-callback_failed"));

    assert!(!get(&app, &registry, &key).active);

    let results: ResultsResponse = requestor
        .query(&app, &QueryMsg::GetResults { index: 0 })
        .unwrap();
    assert_eq!(
        results,
        ResultsResponse {
            length: 1,
            request: Some(key),
            result: Some("httpbin.org".to_string()),
        }
    );

    // the bounty is refunded to the requestor contract, the oracle is not paid
    assert_eq!(balance(&app, &requestor.addr), Uint128::new(10_000));
    assert_eq!(balance(&app, &app.api().addr_make("oracle")), Uint128::zero());
    assert_eq!(balance(&app, &registry.addr), Uint128::zero());
}

#[test]
fn test_results_in_fill_order() {
    let (mut app, registry, requestor) = instantiate();
    let first = request_data(&mut app, &registry, &requestor, 100);
    app.update_block(|block| block.time = block.time.plus_seconds(5));
    let second = request_data(&mut app, &registry, &requestor, 200);

    fill(&mut app, &registry, &second, "two");
    fill(&mut app, &registry, &first, "one");

    let results: ResultsResponse = requestor
        .query(&app, &QueryMsg::GetResults { index: 0 })
        .unwrap();
    assert_eq!(results.length, 2);
    assert_eq!(results.request, Some(second));
    assert_eq!(results.result, Some("two".to_string()));

    let results: ResultsResponse = requestor
        .query(&app, &QueryMsg::GetResults { index: 1 })
        .unwrap();
    assert_eq!(results.request, Some(first));
    assert_eq!(results.result, Some("one".to_string()));
}

#[test]
fn test_on_request_filled_not_registry() {
    let (mut app, _registry, requestor) = instantiate();
    let alice = app.api().addr_make("alice");

    let err = requestor
        .execute(
            &mut app,
            &alice,
            &ExecuteMsg::OnRequestFilled {
                request: "key".to_string(),
                result: "forged".to_string(),
            },
        )
        .unwrap_err();
    assert_eq!(err.root_cause().to_string(), "Unauthorized");

    let results: ResultsResponse = requestor
        .query(&app, &QueryMsg::GetResults { index: 0 })
        .unwrap();
    assert_eq!(results.length, 0);
    assert_eq!(results.request, None);
}

#[test]
fn test_failing_callback_keeps_fill() {
    let (mut app, registry, _) = instantiate();
    let env = mock_env();

    // bound to another registry, so every delivery from this one is rejected
    let other = app.api().addr_make("other");
    let stranger = RequestorContract::new(
        &mut app,
        &env,
        Some(InstantiateMsg {
            registry: other.to_string(),
        }),
    );

    // posted straight to the registry, with the stranger as callback
    let alice = app.api().addr_make("alice");
    let msg = RegistryExecuteMsg::NewRequest(NewRequestMsg {
        input: "http://example/test".to_string(),
        oracle: app.api().addr_make("oracle").to_string(),
        bounty: Uint128::new(10_000),
        expires_in: Uint64::new(DAYS),
        callback: stranger.addr.to_string(),
    });
    let res = registry
        .execute_with_funds(&mut app, &alice, &msg, coins(10_000, "denom"))
        .unwrap();
    let key: String = from_json(res.data.unwrap()).unwrap();
    assert_eq!(balance(&app, &alice), Uint128::new(990_000));

    let events = fill(&mut app, &registry, &key, "httpbin.org");
    let failed = events
        .iter()
        .find(|event| event.ty == "wasm-callback_failed")
        .unwrap();
    assert!(failed
        .attributes
        .iter()
        .any(|attr| attr.key == "data" && attr.value == key));
    assert!(!events.iter().any(|event| event.ty == "wasm-result"));

    // the fill and the refund to alice stand, only the delivery was reverted
    assert!(!get(&app, &registry, &key).active);
    assert_eq!(balance(&app, &alice), Uint128::new(1_000_000));
    assert_eq!(balance(&app, &registry.addr), Uint128::zero());
    assert_eq!(balance(&app, &stranger.addr), Uint128::zero());

    let results: ResultsResponse = stranger
        .query(&app, &QueryMsg::GetResults { index: 0 })
        .unwrap();
    assert_eq!(results.length, 0);
}

#[test]
fn test_unrelated_cancel() {
    let (mut app, registry, requestor) = instantiate();
    let alice = app.api().addr_make("alice");
    let key = request_data(&mut app, &registry, &requestor, 10_000);

    // alice paid, but the requestor contract posted the request
    let err = registry
        .execute(
            &mut app,
            &alice,
            &RegistryExecuteMsg::CancelRequest { key: key.clone() },
        )
        .unwrap_err();
    assert!(err.root_cause().to_string().contains("Unauthorized"));
    assert!(get(&app, &registry, &key).active);
}
