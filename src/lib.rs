//! Typed Rust client for the legacy SMS.RU plain-text HTTP API.
//!
//! The legacy API answers every request with a newline-delimited text body
//! whose first line is a gateway status code (`"100"` means success). This
//! crate keeps the design split in three layers: a domain layer of strong
//! types, a transport layer for the line-based wire format, and a small
//! client layer orchestrating GET requests.
//!
//! ```rust,no_run
//! use smsru_legacy::{
//!     ApiId, MessageText, RawPhoneNumber, Reply, SendOptions, SendSms, SmsMessage, SmsRuClient,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), smsru_legacy::SmsRuError> {
//!     let client = SmsRuClient::new(ApiId::new("...")?);
//!     let message = SmsMessage::new(
//!         RawPhoneNumber::new("+79251234567")?,
//!         MessageText::new("hello")?,
//!     );
//!     let request = SendSms::single(message, SendOptions::default());
//!     match client.send_sms(request).await? {
//!         Reply::Success(report) => println!("balance after send: {}", report.balance),
//!         Reply::Failure(code) => println!("gateway refused: {}", code.as_str()),
//!         Reply::Malformed(raw) => println!("unreadable body: {raw:?}"),
//!     }
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{SmsRuClient, SmsRuClientBuilder, SmsRuError};
pub use domain::{
    AccountBalance, AddStoplistEntry, ApiId, AssignedSmsId, CheckCost, CheckStatus, CostEstimate,
    DayLimit, KnownStatusCode, MessageText, PhoneNumber, RawPhoneNumber, RemoveStoplistEntry,
    Reply, SEND_SMS_MAX_PER_REQUEST, SendOptions, SendReport, SendSms, SenderId, SenderList,
    SmsId, SmsMessage, StatusCode, Stoplist, StoplistEntry, StoplistText, UnixTimestamp,
    ValidationError,
};
