use soroban_sdk::{contracttype, Address, Bytes, Env, String, Symbol};

// ==================== Event Payload Structs ====================
// Relayers and indexers subscribe by the single topic symbol of each event.

#[derive(Clone)]
#[contracttype]
pub struct CallMessageSentEvent {
    pub from: Address,
    pub to: String,
    pub sn: u128,
}

#[derive(Clone)]
#[contracttype]
pub struct CallMessageEvent {
    /// Origin network address.
    pub from: String,
    pub to: String,
    pub sn: u128,
    pub req_id: u128,
    pub data: Bytes,
}

#[derive(Clone)]
#[contracttype]
pub struct CallExecutedEvent {
    pub req_id: u128,
    /// CSResponseType repr value.
    pub code: u32,
    pub msg: String,
}

#[derive(Clone)]
#[contracttype]
pub struct ResponseMessageEvent {
    pub sn: u128,
    pub code: u32,
}

#[derive(Clone)]
#[contracttype]
pub struct RollbackMessageEvent {
    pub sn: u128,
}

#[derive(Clone)]
#[contracttype]
pub struct RollbackExecutedEvent {
    pub sn: u128,
}

// ==================== Emitters ====================

pub fn call_message_sent(env: &Env, from: Address, to: String, sn: u128) {
    env.events().publish(
        (Symbol::new(env, "CallMessageSent"),),
        CallMessageSentEvent { from, to, sn },
    );
}

pub fn call_message(env: &Env, from: String, to: String, sn: u128, req_id: u128, data: Bytes) {
    env.events().publish(
        (Symbol::new(env, "CallMessage"),),
        CallMessageEvent {
            from,
            to,
            sn,
            req_id,
            data,
        },
    );
}

pub fn call_executed(env: &Env, req_id: u128, code: u32, msg: String) {
    env.events().publish(
        (Symbol::new(env, "CallExecuted"),),
        CallExecutedEvent { req_id, code, msg },
    );
}

pub fn response_message(env: &Env, sn: u128, code: u32) {
    env.events().publish(
        (Symbol::new(env, "ResponseMessage"),),
        ResponseMessageEvent { sn, code },
    );
}

pub fn rollback_message(env: &Env, sn: u128) {
    env.events().publish(
        (Symbol::new(env, "RollbackMessage"),),
        RollbackMessageEvent { sn },
    );
}

pub fn rollback_executed(env: &Env, sn: u128) {
    env.events().publish(
        (Symbol::new(env, "RollbackExecuted"),),
        RollbackExecutedEvent { sn },
    );
}
