//! Tests for administration: role management authorization and the
//! two-step timelocked ownership transfer.

use cosmwasm_std::{Addr, Uint128};
use cw_multi_test::{App, ContractWrapper, Executor};

use token::msg::{ExecuteMsg, InstantiateMsg, OwnerResponse, PendingOwnerResponse, QueryMsg};
use token::state::OWNER_TIMELOCK_DURATION;

// ============================================================================
// Test Setup
// ============================================================================

const OWNER: &str = "terra1owner";
const NEW_OWNER: &str = "terra1newowner";
const ALICE: &str = "terra1alice";
const BRIDGE: &str = "terra1bridge";
const CHILD_CHAIN_MANAGER: &str = "terra1childmanager";
const GATEWAY: &str = "terra1gateway";
const ORIGIN_TOKEN: &str = "0x45f6e2781ca9a2c1c03b1e0e31b1d37b16b4d1c9";

fn contract_token() -> Box<dyn cw_multi_test::Contract<cosmwasm_std::Empty>> {
    let contract = ContractWrapper::new(
        token::contract::execute,
        token::contract::instantiate,
        token::contract::query,
    );
    Box::new(contract)
}

fn setup() -> (App, Addr) {
    let mut app = App::default();
    let code_id = app.store_code(contract_token());
    let contract_addr = app
        .instantiate_contract(
            code_id,
            Addr::unchecked(OWNER),
            &InstantiateMsg {
                name: "Pegged Token".to_string(),
                symbol: "PEG".to_string(),
                decimals: 6,
                initial_balances: vec![],
                owner: OWNER.to_string(),
                origin_token: ORIGIN_TOKEN.to_string(),
                child_chain_manager: CHILD_CHAIN_MANAGER.to_string(),
                gateway: GATEWAY.to_string(),
            },
            &[],
            "peg-token",
            Some(OWNER.to_string()),
        )
        .unwrap();
    (app, contract_addr)
}

fn owner_of(app: &App, contract_addr: &Addr) -> String {
    let res: OwnerResponse = app
        .wrap()
        .query_wasm_smart(contract_addr, &QueryMsg::Owner {})
        .unwrap();
    res.owner
}

fn advance_time(app: &mut App, seconds: u64) {
    app.update_block(|block| {
        block.time = block.time.plus_seconds(seconds);
        block.height += seconds / 6;
    });
}

// ============================================================================
// Role Administration
// ============================================================================

#[test]
fn test_role_management_requires_owner() {
    let (mut app, contract_addr) = setup();

    let res = app.execute_contract(
        Addr::unchecked(ALICE),
        contract_addr.clone(),
        &ExecuteMsg::GrantRole {
            role: "depositor".to_string(),
            account: ALICE.to_string(),
        },
        &[],
    );
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(err_str.contains("only owner"));

    let res = app.execute_contract(
        Addr::unchecked(ALICE),
        contract_addr,
        &ExecuteMsg::RevokeRole {
            role: "depositor".to_string(),
            account: CHILD_CHAIN_MANAGER.to_string(),
        },
        &[],
    );
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(err_str.contains("only owner"));
}

// ============================================================================
// Ownership Transfer
// ============================================================================

#[test]
fn test_propose_owner_requires_owner() {
    let (mut app, contract_addr) = setup();

    let res = app.execute_contract(
        Addr::unchecked(ALICE),
        contract_addr,
        &ExecuteMsg::ProposeOwner {
            new_owner: ALICE.to_string(),
        },
        &[],
    );
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(err_str.contains("only owner"));
}

#[test]
fn test_ownership_transfer_full_flow() {
    let (mut app, contract_addr) = setup();

    app.execute_contract(
        Addr::unchecked(OWNER),
        contract_addr.clone(),
        &ExecuteMsg::ProposeOwner {
            new_owner: NEW_OWNER.to_string(),
        },
        &[],
    )
    .unwrap();

    let pending: PendingOwnerResponse = app
        .wrap()
        .query_wasm_smart(&contract_addr, &QueryMsg::PendingOwner {})
        .unwrap();
    assert_eq!(pending.pending_owner, Some(NEW_OWNER.to_string()));

    // Too early
    let res = app.execute_contract(
        Addr::unchecked(NEW_OWNER),
        contract_addr.clone(),
        &ExecuteMsg::AcceptOwner {},
        &[],
    );
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(err_str.contains("Timelock not expired"));

    // Wrong account
    advance_time(&mut app, OWNER_TIMELOCK_DURATION + 1);
    let res = app.execute_contract(
        Addr::unchecked(ALICE),
        contract_addr.clone(),
        &ExecuteMsg::AcceptOwner {},
        &[],
    );
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(err_str.contains("only pending owner"));

    // Accepted after the timelock
    app.execute_contract(
        Addr::unchecked(NEW_OWNER),
        contract_addr.clone(),
        &ExecuteMsg::AcceptOwner {},
        &[],
    )
    .unwrap();
    assert_eq!(owner_of(&app, &contract_addr), NEW_OWNER);

    // Authority moved with it
    let res = app.execute_contract(
        Addr::unchecked(OWNER),
        contract_addr.clone(),
        &ExecuteMsg::UpdateBridgeCap {
            bridge: BRIDGE.to_string(),
            cap: Uint128::new(1_000),
        },
        &[],
    );
    assert!(res.is_err());

    app.execute_contract(
        Addr::unchecked(NEW_OWNER),
        contract_addr,
        &ExecuteMsg::UpdateBridgeCap {
            bridge: BRIDGE.to_string(),
            cap: Uint128::new(1_000),
        },
        &[],
    )
    .unwrap();
}

#[test]
fn test_cancel_owner_proposal() {
    let (mut app, contract_addr) = setup();

    app.execute_contract(
        Addr::unchecked(OWNER),
        contract_addr.clone(),
        &ExecuteMsg::ProposeOwner {
            new_owner: NEW_OWNER.to_string(),
        },
        &[],
    )
    .unwrap();

    app.execute_contract(
        Addr::unchecked(OWNER),
        contract_addr.clone(),
        &ExecuteMsg::CancelOwnerProposal {},
        &[],
    )
    .unwrap();

    advance_time(&mut app, OWNER_TIMELOCK_DURATION + 1);
    let res = app.execute_contract(
        Addr::unchecked(NEW_OWNER),
        contract_addr.clone(),
        &ExecuteMsg::AcceptOwner {},
        &[],
    );
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(err_str.contains("No pending ownership transfer"));

    assert_eq!(owner_of(&app, &contract_addr), OWNER);
}

#[test]
fn test_accept_without_proposal_fails() {
    let (mut app, contract_addr) = setup();

    let res = app.execute_contract(
        Addr::unchecked(ALICE),
        contract_addr,
        &ExecuteMsg::AcceptOwner {},
        &[],
    );
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(err_str.contains("No pending ownership transfer"));
}
