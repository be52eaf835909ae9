mod message;
mod records;
mod request;
mod result;

pub use message::{CSMessage, CSMessageType};
pub use records::{Config, ProxyRequest, RollbackRecord};
pub use request::CSMessageRequest;
pub use result::{CSMessageResult, CSResponseType};
