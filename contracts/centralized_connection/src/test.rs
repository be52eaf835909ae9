#![cfg(test)]
#![allow(clippy::unwrap_used)]

use soroban_sdk::{
    contract, contractimpl, symbol_short,
    testutils::{Address as _, Events},
    token, Address, Bytes, Env, String, Symbol, TryFromVal,
};

use crate::{
    CentralizedConnection, CentralizedConnectionClient, ContractError, MessageEvent, NetworkFee,
};

// ==================== Helpers ====================

/// Stands in for xCall and remembers what the connection forwarded.
#[contract]
struct RecordingXcall;

#[contractimpl]
impl RecordingXcall {
    pub fn handle_message(env: Env, sender: Address, from_nid: String, msg: Bytes, sn: u128) {
        sender.require_auth();
        env.storage()
            .instance()
            .set(&symbol_short!("msg"), &(from_nid, msg, sn));
    }

    pub fn handle_error(env: Env, sender: Address, sn: u128) {
        sender.require_auth();
        env.storage().instance().set(&symbol_short!("err"), &sn);
    }

    pub fn last_message(env: Env) -> Option<(String, Bytes, u128)> {
        env.storage().instance().get(&symbol_short!("msg"))
    }

    pub fn last_error(env: Env) -> Option<u128> {
        env.storage().instance().get(&symbol_short!("err"))
    }
}

struct Setup<'a> {
    client: CentralizedConnectionClient<'a>,
    xcall: RecordingXcallClient<'a>,
    token: token::Client<'a>,
    admin: Address,
    user: Address,
}

fn setup(env: &Env) -> Setup<'_> {
    // fees are pulled from tx_origin inside send_message, below the root call
    env.mock_all_auths_allowing_non_root_auth();

    let admin = Address::generate(env);
    let user = Address::generate(env);
    let token_id = env
        .register_stellar_asset_contract_v2(admin.clone())
        .address();
    token::StellarAssetClient::new(env, &token_id).mint(&user, &10_000_000);

    let xcall_id = env.register_contract(None, RecordingXcall);
    let contract_id = env.register_contract(None, CentralizedConnection);
    let client = CentralizedConnectionClient::new(env, &contract_id);
    client.initialize(&admin, &xcall_id, &token_id);

    Setup {
        client,
        xcall: RecordingXcallClient::new(env, &xcall_id),
        token: token::Client::new(env, &token_id),
        admin,
        user,
    }
}

fn s(env: &Env, text: &str) -> String {
    String::from_str(env, text)
}

fn last_message_event(env: &Env, connection: &Address) -> Option<MessageEvent> {
    let topic = Symbol::new(env, "Message");
    let mut found = None;
    for (contract, topics, data) in env.events().all().iter() {
        if contract != *connection || topics.is_empty() {
            continue;
        }
        let Ok(name) = Symbol::try_from_val(env, &topics.get(0).unwrap()) else {
            continue;
        };
        if name == topic {
            found = Some(MessageEvent::try_from_val(env, &data).unwrap());
        }
    }
    found
}

// ==================== Lifecycle ====================

#[test]
fn test_initialize_stores_parties() {
    let env = Env::default();
    let t = setup(&env);
    assert_eq!(t.client.get_admin(), t.admin);
    assert_eq!(t.client.get_xcall(), t.xcall.address);
    assert_eq!(t.client.get_conn_sn(), 0);
}

#[test]
fn test_double_initialize_fails() {
    let env = Env::default();
    let t = setup(&env);
    assert_eq!(
        t.client
            .try_initialize(&t.admin, &t.xcall.address, &t.token.address),
        Err(Ok(ContractError::AlreadyInitialized))
    );
}

// ==================== Fees ====================

#[test]
fn test_fee_with_and_without_response() {
    let env = Env::default();
    let t = setup(&env);
    t.client
        .set_fee(&t.admin, &s(&env, "icon"), &1_000_000, &500_000);

    assert_eq!(t.client.get_fee(&s(&env, "icon"), &false), 1_000_000);
    assert_eq!(t.client.get_fee(&s(&env, "icon"), &true), 1_500_000);
    assert_eq!(t.client.get_fee(&s(&env, "evm"), &true), 0);
    assert_eq!(
        t.client.get_network_fee(&s(&env, "icon")),
        NetworkFee {
            message_fee: 1_000_000,
            response_fee: 500_000
        }
    );
}

#[test]
fn test_set_fee_requires_admin() {
    let env = Env::default();
    let t = setup(&env);
    assert_eq!(
        t.client.try_set_fee(&t.user, &s(&env, "icon"), &1, &1),
        Err(Ok(ContractError::OnlyAdmin))
    );
}

#[test]
fn test_send_message_charges_by_direction() {
    let env = Env::default();
    let t = setup(&env);
    let icon = s(&env, "icon");
    t.client.set_fee(&t.admin, &icon, &1_000_000, &500_000);
    let msg = Bytes::from_slice(&env, b"payload");

    // rollback-capable request pays both legs
    assert_eq!(t.client.send_message(&t.user, &icon, &7, &msg), 1);
    assert_eq!(t.token.balance(&t.user), 8_500_000);

    // one-way request pays the message fee only
    assert_eq!(t.client.send_message(&t.user, &icon, &0, &msg), 2);
    assert_eq!(t.token.balance(&t.user), 7_500_000);

    // response leg is free
    assert_eq!(t.client.send_message(&t.user, &icon, &-7, &msg), 3);
    assert_eq!(t.token.balance(&t.user), 7_500_000);
    assert_eq!(t.token.balance(&t.client.address), 2_500_000);

    let event = last_message_event(&env, &t.client.address).unwrap();
    assert_eq!(event.to, icon);
    assert_eq!(event.sn, 3);
    assert_eq!(event.msg, msg);
}

#[test]
fn test_claim_fees_moves_balance_to_admin() {
    let env = Env::default();
    let t = setup(&env);
    let icon = s(&env, "icon");
    t.client.set_fee(&t.admin, &icon, &250, &0);
    t.client
        .send_message(&t.user, &icon, &0, &Bytes::new(&env));

    assert_eq!(t.client.claim_fees(&t.admin), 250);
    assert_eq!(t.token.balance(&t.admin), 250);
    assert_eq!(t.token.balance(&t.client.address), 0);
    assert_eq!(
        t.client.try_claim_fees(&t.user),
        Err(Ok(ContractError::OnlyAdmin))
    );
}

// ==================== Delivery ====================

#[test]
fn test_recv_message_forwards_to_xcall() {
    let env = Env::default();
    let t = setup(&env);
    let msg = Bytes::from_slice(&env, b"cs-message");

    t.client
        .recv_message(&t.admin, &s(&env, "icon"), &11, &msg, &3);

    assert!(t.client.get_receipt(&s(&env, "icon"), &11));
    assert!(!t.client.get_receipt(&s(&env, "evm"), &11));
    assert_eq!(t.xcall.last_message(), Some((s(&env, "icon"), msg, 3)));
}

#[test]
fn test_duplicate_delivery_is_rejected() {
    let env = Env::default();
    let t = setup(&env);
    let msg = Bytes::from_slice(&env, b"cs-message");
    t.client
        .recv_message(&t.admin, &s(&env, "icon"), &1, &msg, &1);

    let other = Bytes::from_slice(&env, b"other");
    assert_eq!(
        t.client
            .try_recv_message(&t.admin, &s(&env, "icon"), &1, &other, &2),
        Err(Ok(ContractError::DuplicateMessage))
    );
    assert_eq!(t.xcall.last_message(), Some((s(&env, "icon"), msg.clone(), 1)));

    // the same connection sn from another network is a different message
    t.client
        .recv_message(&t.admin, &s(&env, "evm"), &1, &msg, &1);
}

#[test]
fn test_recv_message_requires_admin() {
    let env = Env::default();
    let t = setup(&env);
    assert_eq!(
        t.client.try_recv_message(
            &t.user,
            &s(&env, "icon"),
            &1,
            &Bytes::new(&env),
            &1
        ),
        Err(Ok(ContractError::OnlyAdmin))
    );
    assert!(!t.client.get_receipt(&s(&env, "icon"), &1));
}

#[test]
fn test_revert_message_reaches_xcall() {
    let env = Env::default();
    let t = setup(&env);
    t.client.revert_message(&t.admin, &9);
    assert_eq!(t.xcall.last_error(), Some(9));
    assert_eq!(
        t.client.try_revert_message(&t.user, &9),
        Err(Ok(ContractError::OnlyAdmin))
    );
}

#[test]
fn test_set_admin_hands_over_control() {
    let env = Env::default();
    let t = setup(&env);
    t.client.set_admin(&t.admin, &t.user);
    assert_eq!(t.client.get_admin(), t.user);
    assert_eq!(
        t.client.try_set_admin(&t.admin, &t.admin),
        Err(Ok(ContractError::OnlyAdmin))
    );
}
