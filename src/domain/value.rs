use crate::domain::validation::ValidationError;

use phonenumber::country;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// SMS.RU `api_id` token.
///
/// Invariant: non-empty after trimming.
pub struct ApiId(String);

impl ApiId {
    /// Query field name used by SMS.RU (`api_id`).
    pub const FIELD: &'static str = "api_id";

    /// Create a validated [`ApiId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated token.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Sender id shown to the recipient (`from`).
///
/// Invariant: non-empty after trimming. The value must be enabled in your SMS.RU account.
pub struct SenderId(String);

impl SenderId {
    /// Query field name used by SMS.RU (`from`).
    pub const FIELD: &'static str = "from";

    /// Create a validated [`SenderId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated sender id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// SMS message text (`text`).
///
/// Invariant: non-empty after trimming. The original value (including whitespace) is preserved.
pub struct MessageText(String);

impl MessageText {
    /// Query field name used by SMS.RU (`text`).
    pub const FIELD: &'static str = "text";

    /// Create validated message text.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the message text as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Message id assigned by the gateway (`id`), as returned by `sms/send`.
///
/// Invariant: non-empty after trimming.
pub struct SmsId(String);

impl SmsId {
    /// Query field name used by SMS.RU (`id`).
    pub const FIELD: &'static str = "id";

    /// Create a validated [`SmsId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated sms id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Note stored next to a stoplisted number (`stoplist_text`).
///
/// Invariant: non-empty after trimming.
pub struct StoplistText(String);

impl StoplistText {
    /// Query field name used by SMS.RU (`stoplist_text`).
    pub const FIELD: &'static str = "stoplist_text";

    /// Create a validated [`StoplistText`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated note.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Unvalidated phone number as sent to SMS.RU (`to`).
///
/// Invariant: non-empty after trimming. This type does not normalize; if you want E.164
/// normalization, parse into [`PhoneNumber`] and convert it into [`RawPhoneNumber`].
pub struct RawPhoneNumber(String);

impl RawPhoneNumber {
    /// Query field name used by SMS.RU (`to`).
    pub const FIELD: &'static str = "to";

    /// Create a validated (non-empty) raw phone number.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Raw (trimmed) value as sent to SMS.RU.
    pub fn raw(&self) -> &str {
        &self.0
    }
}

impl From<PhoneNumber> for RawPhoneNumber {
    /// Convert an already-parsed phone number to a normalized raw value (E.164).
    fn from(value: PhoneNumber) -> Self {
        Self(value.e164)
    }
}

#[derive(Debug, Clone)]
/// Parsed phone number with an E.164 representation.
///
/// Equality, ordering, and hashing are based on the E.164 form.
pub struct PhoneNumber {
    raw: String,
    e164: String,
    parsed: phonenumber::PhoneNumber,
}

impl PhoneNumber {
    /// Query field name used by SMS.RU (`to`).
    pub const FIELD: &'static str = "to";

    /// Parse and normalize a phone number into E.164.
    ///
    /// `default_region` is used when the input does not contain an explicit country prefix.
    pub fn parse(
        default_region: Option<country::Id>,
        input: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let input = input.into();
        let raw = input.trim().to_owned();
        if raw.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }

        let parsed = phonenumber::parse(default_region, &raw)
            .map_err(|_| ValidationError::InvalidPhoneNumber { input: raw.clone() })?;

        let e164 = phonenumber::format(&parsed)
            .mode(phonenumber::Mode::E164)
            .to_string();

        Ok(Self { raw, e164, parsed })
    }

    /// Raw input after trimming.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Normalized E.164 representation.
    pub fn e164(&self) -> &str {
        &self.e164
    }

    /// The parsed phone number from the `phonenumber` crate.
    pub fn parsed(&self) -> &phonenumber::PhoneNumber {
        &self.parsed
    }
}

impl PartialEq for PhoneNumber {
    fn eq(&self, other: &Self) -> bool {
        self.e164 == other.e164
    }
}

impl Eq for PhoneNumber {}

impl std::hash::Hash for PhoneNumber {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.e164.hash(state);
    }
}

impl std::cmp::PartialOrd for PhoneNumber {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl std::cmp::Ord for PhoneNumber {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.e164.cmp(&other.e164)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Unix timestamp in seconds (`time`).
///
/// Used for scheduled sends. The gateway rejects values more than 7 days ahead;
/// no range validation is performed locally.
pub struct UnixTimestamp(u64);

impl UnixTimestamp {
    /// Query field name used by SMS.RU (`time`).
    pub const FIELD: &'static str = "time";

    /// Create a timestamp value.
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Get the underlying timestamp in seconds.
    pub fn value(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Gateway status code, kept in its literal string form.
///
/// The legacy API transmits the code as the first line of every response body.
/// It is never converted to an integer for storage, so unusual or future codes
/// round-trip untouched.
pub struct StatusCode(String);

impl StatusCode {
    /// The code every endpoint uses for a successful request.
    pub const SUCCESS: &'static str = "100";

    /// Construct a status code from its literal line.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// The code exactly as the gateway sent it.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` for the shared success code `"100"`.
    pub fn is_success(&self) -> bool {
        self.0 == Self::SUCCESS
    }

    /// Map this code to a known status code variant, if one exists.
    pub fn known(&self) -> Option<KnownStatusCode> {
        self.0
            .trim()
            .parse::<i32>()
            .ok()
            .and_then(KnownStatusCode::from_code)
    }

    /// Returns `true` if this status code is considered retryable by the crate.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self.known(),
            Some(kind) if kind.is_retryable()
        )
    }

    /// Returns `true` if this status code represents an authentication/authorization error.
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self.known(),
            Some(kind) if kind.is_auth_error()
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
/// Status codes documented for the legacy SMS.RU API.
///
/// Unknown codes are preserved as [`StatusCode`] and return `None` from
/// [`KnownStatusCode::from_code`].
pub enum KnownStatusCode {
    MessageNotFound,
    RequestOkOrQueued,
    BeingDeliveredToOperator,
    SentInTransit,
    Delivered,
    NotDeliveredExpired,
    NotDeliveredDeletedByOperator,
    NotDeliveredPhoneFailure,
    NotDeliveredUnknown,
    NotDeliveredRejected,
    Read,
    NotDeliveredNoRoute,
    InvalidApiId,
    InsufficientFunds,
    InvalidRecipientOrNoRoute,
    EmptyMessageText,
    SenderNotEnabled,
    MessageTooLong,
    DailyLimitExceeded,
    NoDeliveryRoute,
    InvalidTime,
    RecipientInStopList,
    UsedGetInsteadOfPost,
    MethodNotFound,
    MessageNotUtf8,
    TooManyNumbers,
    RecipientAbroadBlocked,
    RecipientInGlobalStopList,
    ForbiddenWordInText,
    MissingDisclaimerPhrase,
    ServiceTemporarilyUnavailable,
    SenderMustMatchBrand,
    ExceededDailyLimitToNumber,
    ExceededIdenticalPerMinute,
    ExceededIdenticalPerDay,
    ExceededRepeatSendLimit,
    InvalidToken,
    InvalidAuth,
    AccountNotConfirmed,
}

impl KnownStatusCode {
    /// Convert a raw SMS.RU integer code into a known variant.
    pub fn from_code(code: i32) -> Option<Self> {
        Some(match code {
            -1 => Self::MessageNotFound,
            100 => Self::RequestOkOrQueued,
            101 => Self::BeingDeliveredToOperator,
            102 => Self::SentInTransit,
            103 => Self::Delivered,
            104 => Self::NotDeliveredExpired,
            105 => Self::NotDeliveredDeletedByOperator,
            106 => Self::NotDeliveredPhoneFailure,
            107 => Self::NotDeliveredUnknown,
            108 => Self::NotDeliveredRejected,
            110 => Self::Read,
            150 => Self::NotDeliveredNoRoute,
            200 => Self::InvalidApiId,
            201 => Self::InsufficientFunds,
            202 => Self::InvalidRecipientOrNoRoute,
            203 => Self::EmptyMessageText,
            204 => Self::SenderNotEnabled,
            205 => Self::MessageTooLong,
            206 => Self::DailyLimitExceeded,
            207 => Self::NoDeliveryRoute,
            208 => Self::InvalidTime,
            209 => Self::RecipientInStopList,
            210 => Self::UsedGetInsteadOfPost,
            211 => Self::MethodNotFound,
            212 => Self::MessageNotUtf8,
            213 => Self::TooManyNumbers,
            214 => Self::RecipientAbroadBlocked,
            215 => Self::RecipientInGlobalStopList,
            216 => Self::ForbiddenWordInText,
            217 => Self::MissingDisclaimerPhrase,
            220 => Self::ServiceTemporarilyUnavailable,
            221 => Self::SenderMustMatchBrand,
            230 => Self::ExceededDailyLimitToNumber,
            231 => Self::ExceededIdenticalPerMinute,
            232 => Self::ExceededIdenticalPerDay,
            233 => Self::ExceededRepeatSendLimit,
            300 => Self::InvalidToken,
            301 => Self::InvalidAuth,
            302 => Self::AccountNotConfirmed,
            _ => return None,
        })
    }

    /// Whether this status is likely transient and can be retried.
    pub fn is_retryable(self) -> bool {
        matches!(self, Self::ServiceTemporarilyUnavailable)
    }

    /// Whether this status indicates invalid/expired credentials.
    pub fn is_auth_error(self) -> bool {
        matches!(
            self,
            Self::InvalidApiId | Self::InvalidToken | Self::InvalidAuth | Self::AccountNotConfirmed
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_newtypes_trim_or_validate() {
        let api_id = ApiId::new("  key ").unwrap();
        assert_eq!(api_id.as_str(), "key");
        assert!(ApiId::new("  ").is_err());

        let sender = SenderId::new(" sender ").unwrap();
        assert_eq!(sender.as_str(), "sender");
        assert!(SenderId::new("").is_err());

        let msg = MessageText::new(" hi ").unwrap();
        assert_eq!(msg.as_str(), " hi ");
        assert!(MessageText::new("  ").is_err());

        let sms_id = SmsId::new(" 201318-205295 ").unwrap();
        assert_eq!(sms_id.as_str(), "201318-205295");
        assert!(SmsId::new("  ").is_err());

        let note = StoplistText::new(" spam ").unwrap();
        assert_eq!(note.as_str(), "spam");
        assert!(StoplistText::new("  ").is_err());
    }

    #[test]
    fn raw_phone_number_trims_and_exposes_raw() {
        let raw = RawPhoneNumber::new(" +79251234567 ").unwrap();
        assert_eq!(raw.raw(), "+79251234567");
        assert!(RawPhoneNumber::new("").is_err());
    }

    #[test]
    fn phone_number_parsing_and_equality_use_e164() {
        let p1 = PhoneNumber::parse(None, "+79251234567").unwrap();
        let p2 = PhoneNumber::parse(None, "+7 925 123-45-67").unwrap();
        assert_eq!(p1, p2);
        assert_eq!(p1.e164(), "+79251234567");
        assert_eq!(p1.raw(), "+79251234567");

        let raw: RawPhoneNumber = p1.clone().into();
        assert_eq!(raw.raw(), "+79251234567");
        assert!(PhoneNumber::parse(None, "not-a-number").is_err());
    }

    #[test]
    fn status_code_keeps_literal_form() {
        let code = StatusCode::new("100");
        assert!(code.is_success());
        assert_eq!(code.as_str(), "100");

        let transit = StatusCode::new("102");
        assert!(!transit.is_success());
        assert_eq!(transit.known(), Some(KnownStatusCode::SentInTransit));

        let odd = StatusCode::new("007");
        assert_eq!(odd.as_str(), "007");
        assert_eq!(odd.known(), None);

        let garbage = StatusCode::new("balance=0");
        assert_eq!(garbage.known(), None);
    }

    #[test]
    fn status_code_knows_retryable_and_auth_errors() {
        let retryable = StatusCode::new("220");
        assert!(retryable.is_retryable());
        assert!(!retryable.is_auth_error());

        let auth = StatusCode::new("301");
        assert!(auth.is_auth_error());
        assert!(!auth.is_retryable());

        let unknown = StatusCode::new("9999");
        assert!(unknown.known().is_none());
        assert!(!unknown.is_retryable());
        assert!(!unknown.is_auth_error());
    }
}
