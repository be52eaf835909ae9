#![allow(dead_code)]

use centralized_connection::{CentralizedConnection, CentralizedConnectionClient, MessageEvent};
use mock_dapp::{MockDapp, MockDappClient};
use soroban_sdk::{
    testutils::{Address as _, Events},
    token, Address, Env, String, Symbol, TryFromVal,
};
use xcall::{XcallContract, XcallContractClient};
use xcall_lib::NetworkAddress;

pub const STARTING_BALANCE: i128 = 100_000_000;

/// One side of a cross-chain setup, all living in the same `Env`.
pub struct Chain<'a> {
    pub nid: String,
    pub xcall: XcallContractClient<'a>,
    pub connection: CentralizedConnectionClient<'a>,
    pub dapp: MockDappClient<'a>,
}

pub struct Bridge<'a> {
    pub env: &'a Env,
    pub admin: Address,
    pub user: Address,
    pub token: token::Client<'a>,
    pub stellar: Chain<'a>,
    pub icon: Chain<'a>,
}

fn deploy_chain<'a>(env: &'a Env, admin: &Address, token: &Address, nid: &str) -> Chain<'a> {
    let nid = String::from_str(env, nid);

    let xcall = XcallContractClient::new(env, &env.register_contract(None, XcallContract));
    xcall.initialize(admin, &nid, token);

    let connection = CentralizedConnectionClient::new(
        env,
        &env.register_contract(None, CentralizedConnection),
    );
    connection.initialize(admin, &xcall.address, token);

    let dapp = MockDappClient::new(env, &env.register_contract(None, MockDapp));
    dapp.initialize(&xcall.address);

    Chain {
        nid,
        xcall,
        connection,
        dapp,
    }
}

/// Deploys "stellar" and "icon", each routing to the other through its own
/// centralized connection. The admin doubles as relayer on both sides.
pub fn setup_bridge(env: &Env) -> Bridge<'_> {
    env.mock_all_auths();

    let admin = Address::generate(env);
    let user = Address::generate(env);
    let token_id = env
        .register_stellar_asset_contract_v2(admin.clone())
        .address();
    token::StellarAssetClient::new(env, &token_id).mint(&user, &STARTING_BALANCE);

    let stellar = deploy_chain(env, &admin, &token_id, "stellar");
    let icon = deploy_chain(env, &admin, &token_id, "icon");
    stellar
        .xcall
        .set_default_connection(&admin, &icon.nid, &stellar.connection.address);
    icon.xcall
        .set_default_connection(&admin, &stellar.nid, &icon.connection.address);

    Bridge {
        env,
        admin,
        user,
        token: token::Client::new(env, &token_id),
        stellar,
        icon,
    }
}

pub fn network_address(env: &Env, chain: &Chain, account: &Address) -> String {
    NetworkAddress::new(env, &chain.nid, &account.to_string())
        .unwrap()
        .as_string()
        .clone()
}

/// The most recent message `connection` published in the last invocation.
pub fn last_message(env: &Env, connection: &Address) -> MessageEvent {
    let topic = Symbol::new(env, "Message");
    let mut found = None;
    for (contract, topics, data) in env.events().all().iter() {
        if contract != *connection || topics.is_empty() {
            continue;
        }
        if let Ok(name) = Symbol::try_from_val(env, &topics.get(0).unwrap()) {
            if name == topic {
                found = Some(MessageEvent::try_from_val(env, &data).unwrap());
            }
        }
    }
    found.expect("no Message event published")
}

/// Plays the relayer: carries the last message `from` published to `to`,
/// claiming xCall sequence number `sn`.
pub fn relay(env: &Env, admin: &Address, from: &Chain, to: &Chain, sn: u128) -> MessageEvent {
    let event = last_message(env, &from.connection.address);
    to.connection
        .recv_message(admin, &from.nid, &event.sn, &event.msg, &sn);
    event
}
