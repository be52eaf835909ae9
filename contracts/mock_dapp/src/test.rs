#![cfg(test)]
#![allow(clippy::unwrap_used)]

use soroban_sdk::{testutils::Address as _, vec, Address, Bytes, Env, String};

use crate::{ContractError, MockDapp, MockDappClient, ReceivedCall, FAILING_PAYLOAD};

fn setup(env: &Env) -> (MockDappClient<'_>, Address) {
    env.mock_all_auths();
    let xcall = Address::generate(env);
    let contract_id = env.register_contract(None, MockDapp);
    let client = MockDappClient::new(env, &contract_id);
    client.initialize(&xcall);
    (client, xcall)
}

#[test]
fn test_double_initialize_fails() {
    let env = Env::default();
    let (client, xcall) = setup(&env);
    assert_eq!(
        client.try_initialize(&xcall),
        Err(Ok(ContractError::AlreadyInitialized))
    );
}

#[test]
fn test_records_received_calls() {
    let env = Env::default();
    let (client, _) = setup(&env);
    let from = String::from_str(&env, "icon/hx1");
    let data = Bytes::from_slice(&env, b"hello");
    let protocols = vec![&env, String::from_str(&env, "cx1")];

    client.handle_call_message(&from, &data, &protocols);

    assert_eq!(client.call_count(), 1);
    assert_eq!(
        client.last_call(),
        Some(ReceivedCall {
            from,
            data,
            protocols
        })
    );
}

#[test]
fn test_failing_payload_reverts() {
    let env = Env::default();
    let (client, _) = setup(&env);
    let result = client.try_handle_call_message(
        &String::from_str(&env, "icon/hx1"),
        &Bytes::from_slice(&env, FAILING_PAYLOAD),
        &vec![&env],
    );
    assert_eq!(result, Err(Ok(ContractError::RevertFromDapp)));
    assert_eq!(client.call_count(), 0);
    assert_eq!(client.last_call(), None);
}

#[test]
fn test_collects_rollbacks() {
    let env = Env::default();
    let (client, _) = setup(&env);
    client.handle_rollback(&Bytes::from_slice(&env, b"undo-1"));
    client.handle_rollback(&Bytes::from_slice(&env, b"undo-2"));
    assert_eq!(
        client.rollbacks(),
        vec![
            &env,
            Bytes::from_slice(&env, b"undo-1"),
            Bytes::from_slice(&env, b"undo-2")
        ]
    );
}
