use soroban_sdk::{contracttype, Bytes, Env, String, Symbol};

/// Outbound message for relayers to carry to `to`.
#[derive(Clone)]
#[contracttype]
pub struct MessageEvent {
    pub to: String,
    pub sn: u128,
    pub msg: Bytes,
}

pub fn message(env: &Env, to: String, sn: u128, msg: Bytes) {
    env.events()
        .publish((Symbol::new(env, "Message"),), MessageEvent { to, sn, msg });
}
