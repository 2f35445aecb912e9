//! Role registry tests: grant, revoke, renounce and membership queries.

use cosmwasm_std::{Addr, Empty};
use cw_multi_test::{App, ContractWrapper, Executor};

use bridge::msg::{ExecuteMsg, HasRoleResponse, InstantiateMsg, QueryMsg, RoleMembersResponse};
use common::{DEFAULT_ADMIN_ROLE, ORACLE_ROLE};

fn contract_bridge() -> Box<dyn cw_multi_test::Contract<Empty>> {
    let contract = ContractWrapper::new(
        bridge::contract::execute,
        bridge::contract::instantiate,
        bridge::contract::query,
    )
    .with_reply(bridge::contract::reply);
    Box::new(contract)
}

fn setup() -> (App, Addr, Addr) {
    let mut app = App::default();
    let deployer = Addr::unchecked("deployer");

    let code_id = app.store_code(contract_bridge());
    let bridge = app
        .instantiate_contract(
            code_id,
            deployer.clone(),
            &InstantiateMsg {
                asset_ledger: "ledger".to_string(),
                gateway: "gateway".to_string(),
                destination_token: "0x49d25DD6a5BC2993c1A4762F826065940909Ee5F".to_string(),
                destination_bridge: "0x976EA74026E726554dB657fA54763abd0C3a0aa9".to_string(),
                fee_denom: None,
                execution_fee: None,
            },
            &[],
            "nft-bridge",
            None,
        )
        .unwrap();

    (app, bridge, deployer)
}

fn has_role(app: &App, bridge: &Addr, role: &str, address: &str) -> bool {
    let res: HasRoleResponse = app
        .wrap()
        .query_wasm_smart(
            bridge,
            &QueryMsg::HasRole {
                role: role.to_string(),
                address: address.to_string(),
            },
        )
        .unwrap();
    res.has_role
}

fn grant(app: &mut App, bridge: &Addr, sender: &Addr, role: &str, address: &str) {
    app.execute_contract(
        sender.clone(),
        bridge.clone(),
        &ExecuteMsg::GrantRole {
            role: role.to_string(),
            address: address.to_string(),
        },
        &[],
    )
    .unwrap();
}

#[test]
fn test_deployer_is_admin() {
    let (app, bridge, _) = setup();

    assert!(has_role(&app, &bridge, DEFAULT_ADMIN_ROLE, "deployer"));
    assert!(!has_role(&app, &bridge, ORACLE_ROLE, "deployer"));

    let members: RoleMembersResponse = app
        .wrap()
        .query_wasm_smart(
            &bridge,
            &QueryMsg::RoleMembers {
                role: DEFAULT_ADMIN_ROLE.to_string(),
                start_after: None,
                limit: None,
            },
        )
        .unwrap();
    assert_eq!(members.members, vec![Addr::unchecked("deployer")]);
}

#[test]
fn test_grant_oracle() {
    let (mut app, bridge, deployer) = setup();

    let res = app
        .execute_contract(
            deployer.clone(),
            bridge.clone(),
            &ExecuteMsg::GrantRole {
                role: ORACLE_ROLE.to_string(),
                address: "oracle".to_string(),
            },
            &[],
        )
        .unwrap();
    let granted = res.events.iter().find(|e| e.ty == "wasm-role_granted");
    assert!(granted.is_some());
    assert!(has_role(&app, &bridge, ORACLE_ROLE, "oracle"));

    // Granting again is accepted but changes nothing
    let res = app
        .execute_contract(
            deployer,
            bridge.clone(),
            &ExecuteMsg::GrantRole {
                role: ORACLE_ROLE.to_string(),
                address: "oracle".to_string(),
            },
            &[],
        )
        .unwrap();
    assert!(!res.events.iter().any(|e| e.ty == "wasm-role_granted"));
}

#[test]
fn test_non_admin_cannot_grant() {
    let (mut app, bridge, _) = setup();

    let res = app.execute_contract(
        Addr::unchecked("mallory"),
        bridge.clone(),
        &ExecuteMsg::GrantRole {
            role: ORACLE_ROLE.to_string(),
            address: "mallory".to_string(),
        },
        &[],
    );
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(err_str.contains("Unauthorized"), "got: {}", err_str);
    assert!(!has_role(&app, &bridge, ORACLE_ROLE, "mallory"));
}

#[test]
fn test_oracle_cannot_grant() {
    let (mut app, bridge, deployer) = setup();
    grant(&mut app, &bridge, &deployer, ORACLE_ROLE, "oracle");

    let res = app.execute_contract(
        Addr::unchecked("oracle"),
        bridge.clone(),
        &ExecuteMsg::GrantRole {
            role: ORACLE_ROLE.to_string(),
            address: "friend".to_string(),
        },
        &[],
    );
    assert!(res.is_err());
    assert!(!has_role(&app, &bridge, ORACLE_ROLE, "friend"));
}

#[test]
fn test_unknown_role_rejected() {
    let (mut app, bridge, deployer) = setup();

    let res = app.execute_contract(
        deployer,
        bridge,
        &ExecuteMsg::GrantRole {
            role: "MINTER_ROLE".to_string(),
            address: "oracle".to_string(),
        },
        &[],
    );
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(err_str.contains("Unknown role: MINTER_ROLE"), "got: {}", err_str);
}

#[test]
fn test_revoke_oracle() {
    let (mut app, bridge, deployer) = setup();
    grant(&mut app, &bridge, &deployer, ORACLE_ROLE, "oracle");

    let res = app
        .execute_contract(
            deployer,
            bridge.clone(),
            &ExecuteMsg::RevokeRole {
                role: ORACLE_ROLE.to_string(),
                address: "oracle".to_string(),
            },
            &[],
        )
        .unwrap();
    assert!(res.events.iter().any(|e| e.ty == "wasm-role_revoked"));
    assert!(!has_role(&app, &bridge, ORACLE_ROLE, "oracle"));
}

#[test]
fn test_renounce_oracle() {
    let (mut app, bridge, deployer) = setup();
    grant(&mut app, &bridge, &deployer, ORACLE_ROLE, "oracle");

    app.execute_contract(
        Addr::unchecked("oracle"),
        bridge.clone(),
        &ExecuteMsg::RenounceRole {
            role: ORACLE_ROLE.to_string(),
        },
        &[],
    )
    .unwrap();
    assert!(!has_role(&app, &bridge, ORACLE_ROLE, "oracle"));
}

#[test]
fn test_admin_handover() {
    let (mut app, bridge, deployer) = setup();

    // The sole admin cannot step down
    let res = app.execute_contract(
        deployer.clone(),
        bridge.clone(),
        &ExecuteMsg::RenounceRole {
            role: DEFAULT_ADMIN_ROLE.to_string(),
        },
        &[],
    );
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(
        err_str.contains("Cannot remove the last holder"),
        "got: {}",
        err_str
    );

    grant(&mut app, &bridge, &deployer, DEFAULT_ADMIN_ROLE, "successor");
    app.execute_contract(
        deployer,
        bridge.clone(),
        &ExecuteMsg::RenounceRole {
            role: DEFAULT_ADMIN_ROLE.to_string(),
        },
        &[],
    )
    .unwrap();

    assert!(!has_role(&app, &bridge, DEFAULT_ADMIN_ROLE, "deployer"));
    assert!(has_role(&app, &bridge, DEFAULT_ADMIN_ROLE, "successor"));

    // New admin governs the registry
    grant(
        &mut app,
        &bridge,
        &Addr::unchecked("successor"),
        ORACLE_ROLE,
        "oracle",
    );
    assert!(has_role(&app, &bridge, ORACLE_ROLE, "oracle"));
}

#[test]
fn test_role_members_pagination() {
    let (mut app, bridge, deployer) = setup();
    for oracle in ["oracle_a", "oracle_b", "oracle_c"] {
        grant(&mut app, &bridge, &deployer, ORACLE_ROLE, oracle);
    }

    let page: RoleMembersResponse = app
        .wrap()
        .query_wasm_smart(
            &bridge,
            &QueryMsg::RoleMembers {
                role: ORACLE_ROLE.to_string(),
                start_after: Some("oracle_a".to_string()),
                limit: Some(1),
            },
        )
        .unwrap();
    assert_eq!(page.role, ORACLE_ROLE);
    assert_eq!(page.members, vec![Addr::unchecked("oracle_b")]);
}
