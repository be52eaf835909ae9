mod call_message;
mod call_message_persisted;
mod call_message_rollback;
mod envelope;

pub use call_message::CallMessage;
pub use call_message_persisted::CallMessagePersisted;
pub use call_message_rollback::CallMessageWithRollback;
pub use envelope::Envelope;

use soroban_sdk::{contracttype, Bytes, Env};

use crate::errors::LibError;

#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum MessageType {
    CallMessage = 0,
    CallMessageWithRollback = 1,
    CallMessagePersisted = 2,
}

impl MessageType {
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    pub fn is_rollback(self) -> bool {
        self == MessageType::CallMessageWithRollback
    }
}

impl TryFrom<u8> for MessageType {
    type Error = LibError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(MessageType::CallMessage),
            1 => Ok(MessageType::CallMessageWithRollback),
            2 => Ok(MessageType::CallMessagePersisted),
            _ => Err(LibError::InvalidMessageType),
        }
    }
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AnyMessage {
    CallMessage(CallMessage),
    CallMessageWithRollback(CallMessageWithRollback),
    CallMessagePersisted(CallMessagePersisted),
}

impl AnyMessage {
    pub fn message_type(&self) -> MessageType {
        match self {
            AnyMessage::CallMessage(_) => MessageType::CallMessage,
            AnyMessage::CallMessageWithRollback(_) => MessageType::CallMessageWithRollback,
            AnyMessage::CallMessagePersisted(_) => MessageType::CallMessagePersisted,
        }
    }

    pub fn data(&self) -> Bytes {
        match self {
            AnyMessage::CallMessage(msg) => msg.data.clone(),
            AnyMessage::CallMessageWithRollback(msg) => msg.data.clone(),
            AnyMessage::CallMessagePersisted(msg) => msg.data.clone(),
        }
    }

    pub fn rollback(&self) -> Option<Bytes> {
        match self {
            AnyMessage::CallMessageWithRollback(msg) => Some(msg.rollback.clone()),
            _ => None,
        }
    }

    pub fn encode(&self, env: &Env) -> Bytes {
        match self {
            AnyMessage::CallMessage(msg) => msg.encode(env),
            AnyMessage::CallMessageWithRollback(msg) => msg.encode(env),
            AnyMessage::CallMessagePersisted(msg) => msg.encode(env),
        }
    }

    pub fn decode(env: &Env, msg_type: MessageType, encoded: &Bytes) -> Result<Self, LibError> {
        Ok(match msg_type {
            MessageType::CallMessage => AnyMessage::CallMessage(CallMessage::decode(env, encoded)?),
            MessageType::CallMessageWithRollback => {
                AnyMessage::CallMessageWithRollback(CallMessageWithRollback::decode(env, encoded)?)
            }
            MessageType::CallMessagePersisted => {
                AnyMessage::CallMessagePersisted(CallMessagePersisted::decode(env, encoded)?)
            }
        })
    }
}
