use crate::domain::value::{RawPhoneNumber, SmsId, StatusCode};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Decoded form of a legacy plain-text response body.
///
/// Every endpoint shares the same first line (a [`StatusCode`]); the payload
/// shape behind it differs per endpoint. A reply is never an `Err` at the
/// client level: gateway refusals and unreadable bodies are data, not
/// exceptions.
pub enum Reply<T> {
    /// The status line was `"100"` and the payload decoded.
    Success(T),
    /// The gateway answered with a non-success code. No payload fields follow;
    /// interpreting the code (e.g. via [`StatusCode::known`]) is the caller's
    /// concern.
    Failure(StatusCode),
    /// The body was empty or too short for the endpoint's shape. Carries the
    /// raw body unchanged so callers can log or inspect it.
    Malformed(String),
}

impl<T> Reply<T> {
    /// Returns `true` for [`Reply::Success`].
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Extract the payload, discarding failure details.
    pub fn success(self) -> Option<T> {
        match self {
            Self::Success(payload) => Some(payload),
            _ => None,
        }
    }

    /// The non-success status code, if that is what the gateway answered.
    pub fn failure_code(&self) -> Option<&StatusCode> {
        match self {
            Self::Failure(code) => Some(code),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Outcome of `sms/send`: the ids assigned to each message plus the account
/// balance the gateway reported after the send.
pub struct SendReport {
    pub balance: String,
    pub sms_ids: Vec<AssignedSmsId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// The id the gateway assigned to one message of a send request.
pub struct AssignedSmsId {
    pub number: RawPhoneNumber,
    pub id: SmsId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Outcome of `sms/cost`.
pub struct CostEstimate {
    /// Price for the whole text, as reported.
    pub sms_cost: String,
    /// Number of physical messages the text splits into.
    pub sms_length: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Outcome of `my/balance`.
pub struct AccountBalance {
    pub balance: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Outcome of `my/limit`.
pub struct DayLimit {
    pub day_limit: String,
    pub send_today: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Outcome of `my/senders`: every sender number enabled for the account.
pub struct SenderList {
    pub senders: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Outcome of `stoplist/get`.
pub struct Stoplist {
    pub entries: Vec<StoplistEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One stoplisted number and the note stored with it.
///
/// Both fields are kept as the gateway sent them; a line without a note
/// decodes with a single blank space as the notice.
pub struct StoplistEntry {
    pub number: String,
    pub notice: String,
}
