pub mod message_builder;
pub mod resinfo_acquirer;
pub mod response_parser;
pub mod transport;

pub use message_builder::MessageBuilder;
pub use resinfo_acquirer::UdpResinfoAcquirer;
pub use response_parser::{DnsResponse, ResponseParser};
