use crate::domain::validation::ValidationError;
use crate::domain::value::{
    MessageText, RawPhoneNumber, SenderId, SmsId, StoplistText, UnixTimestamp,
};

/// The gateway accepts at most this many messages per physical `sms/send` request.
/// Larger batches are split by the client into successive requests of this size.
pub const SEND_SMS_MAX_PER_REQUEST: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
/// One phone number and the text destined for it.
pub struct SmsMessage {
    number: RawPhoneNumber,
    text: MessageText,
}

impl SmsMessage {
    /// Pair a validated number with validated text.
    pub fn new(number: RawPhoneNumber, text: MessageText) -> Self {
        Self { number, text }
    }

    pub fn number(&self) -> &RawPhoneNumber {
        &self.number
    }

    pub fn text(&self) -> &MessageText {
        &self.text
    }
}

#[derive(Debug, Clone, Default)]
/// Optional send parameters shared by single and batch sends.
///
/// `translit`, `time`, and `test` are always present on the wire (`0` when unset);
/// `from` is sent only when provided.
pub struct SendOptions {
    pub from: Option<SenderId>,
    pub time: Option<UnixTimestamp>,
    pub translit: bool,
    pub test: bool,
}

#[derive(Debug, Clone)]
/// A send request in one of the two wire shapes the gateway understands.
pub enum SendSms {
    /// One message, encoded as `to`/`text`.
    Single(SingleSms),
    /// An ordered batch, encoded as one `multi[<number>]=<text>` pair per message.
    Batch(BatchSms),
}

#[derive(Debug, Clone)]
pub struct SingleSms {
    message: SmsMessage,
    options: SendOptions,
}

#[derive(Debug, Clone)]
pub struct BatchSms {
    messages: Vec<SmsMessage>,
    options: SendOptions,
}

impl SendSms {
    /// Send one message via the `to`/`text` form.
    pub fn single(message: SmsMessage, options: SendOptions) -> Self {
        Self::Single(SingleSms { message, options })
    }

    /// Send an ordered batch via the `multi[...]` form.
    ///
    /// The batch may exceed [`SEND_SMS_MAX_PER_REQUEST`]; the client splits it
    /// into successive physical requests. An empty batch is rejected.
    pub fn batch(messages: Vec<SmsMessage>, options: SendOptions) -> Result<Self, ValidationError> {
        if messages.is_empty() {
            return Err(ValidationError::Empty {
                field: RawPhoneNumber::FIELD,
            });
        }
        Ok(Self::Batch(BatchSms { messages, options }))
    }

    /// All messages of the request, regardless of wire shape.
    pub fn messages(&self) -> &[SmsMessage] {
        match self {
            Self::Single(single) => std::slice::from_ref(&single.message),
            Self::Batch(batch) => &batch.messages,
        }
    }

    pub fn options(&self) -> &SendOptions {
        match self {
            Self::Single(single) => &single.options,
            Self::Batch(batch) => &batch.options,
        }
    }
}

impl SingleSms {
    pub fn message(&self) -> &SmsMessage {
        &self.message
    }

    pub fn options(&self) -> &SendOptions {
        &self.options
    }
}

impl BatchSms {
    pub fn messages(&self) -> &[SmsMessage] {
        &self.messages
    }

    pub fn options(&self) -> &SendOptions {
        &self.options
    }
}

#[derive(Debug, Clone)]
/// Ask the gateway what one message to one number would cost.
pub struct CheckCost {
    to: RawPhoneNumber,
    text: MessageText,
}

impl CheckCost {
    pub fn new(to: RawPhoneNumber, text: MessageText) -> Self {
        Self { to, text }
    }

    pub fn to(&self) -> &RawPhoneNumber {
        &self.to
    }

    pub fn text(&self) -> &MessageText {
        &self.text
    }
}

#[derive(Debug, Clone)]
/// Ask for the delivery state of an already sent message.
pub struct CheckStatus {
    id: SmsId,
}

impl CheckStatus {
    pub fn new(id: SmsId) -> Self {
        Self { id }
    }

    pub fn id(&self) -> &SmsId {
        &self.id
    }
}

#[derive(Debug, Clone)]
/// Block a number from receiving messages, with a note explaining why.
pub struct AddStoplistEntry {
    phone: RawPhoneNumber,
    text: StoplistText,
}

impl AddStoplistEntry {
    pub fn new(phone: RawPhoneNumber, text: StoplistText) -> Self {
        Self { phone, text }
    }

    pub fn phone(&self) -> &RawPhoneNumber {
        &self.phone
    }

    pub fn text(&self) -> &StoplistText {
        &self.text
    }
}

#[derive(Debug, Clone)]
/// Unblock a previously stoplisted number.
pub struct RemoveStoplistEntry {
    phone: RawPhoneNumber,
}

impl RemoveStoplistEntry {
    pub fn new(phone: RawPhoneNumber) -> Self {
        Self { phone }
    }

    pub fn phone(&self) -> &RawPhoneNumber {
        &self.phone
    }
}
