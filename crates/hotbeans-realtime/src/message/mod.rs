//! Chat frame types and inbound validation.

pub mod types;
pub mod validator;

pub use types::OutboundMessage;
pub use self::validator::parse_chat_payload;
