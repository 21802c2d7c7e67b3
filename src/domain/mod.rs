//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{
    AddStoplistEntry, BatchSms, CheckCost, CheckStatus, RemoveStoplistEntry,
    SEND_SMS_MAX_PER_REQUEST, SendOptions, SendSms, SingleSms, SmsMessage,
};
pub use response::{
    AccountBalance, AssignedSmsId, CostEstimate, DayLimit, Reply, SendReport, SenderList, Stoplist,
    StoplistEntry,
};
pub use validation::ValidationError;
pub use value::{
    ApiId, KnownStatusCode, MessageText, PhoneNumber, RawPhoneNumber, SenderId, SmsId, StatusCode,
    StoplistText, UnixTimestamp,
};

#[cfg(test)]
mod tests {
    use super::*;

    fn message(number: &str, text: &str) -> SmsMessage {
        SmsMessage::new(
            RawPhoneNumber::new(number).unwrap(),
            MessageText::new(text).unwrap(),
        )
    }

    #[test]
    fn api_id_rejects_empty() {
        assert!(matches!(
            ApiId::new("   "),
            Err(ValidationError::Empty {
                field: ApiId::FIELD
            })
        ));
    }

    #[test]
    fn phone_number_parses_with_region_and_trims() {
        let pn = PhoneNumber::parse(Some(phonenumber::country::Id::RU), " 79251234567 ").unwrap();
        assert_eq!(pn.raw(), "79251234567");
    }

    #[test]
    fn raw_phone_number_from_phone_number_uses_e164() {
        let pn = PhoneNumber::parse(Some(phonenumber::country::Id::RU), "79251234567").unwrap();
        let raw: RawPhoneNumber = pn.into();
        assert_eq!(raw.raw(), "+79251234567");
    }

    #[test]
    fn batch_requires_at_least_one_message() {
        let err = SendSms::batch(Vec::new(), SendOptions::default()).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::Empty {
                field: RawPhoneNumber::FIELD
            }
        ));
    }

    #[test]
    fn batch_may_exceed_the_per_request_cap() {
        let messages = (0..150)
            .map(|idx| message(&format!("7925000{idx:04}"), "hi"))
            .collect::<Vec<_>>();
        let request = SendSms::batch(messages, SendOptions::default()).unwrap();
        assert_eq!(request.messages().len(), 150);
    }

    #[test]
    fn send_sms_exposes_messages_for_both_shapes() {
        let single = SendSms::single(message("79251234567", "hello"), SendOptions::default());
        assert_eq!(single.messages().len(), 1);

        let batch = SendSms::batch(
            vec![message("79251234567", "a"), message("79251234568", "b")],
            SendOptions::default(),
        )
        .unwrap();
        assert_eq!(batch.messages().len(), 2);
        assert_eq!(batch.messages()[1].number().raw(), "79251234568");
    }

    #[test]
    fn reply_helpers_expose_variant_contents() {
        let ok: Reply<u8> = Reply::Success(7);
        assert!(ok.is_success());
        assert_eq!(ok.success(), Some(7));

        let failed: Reply<u8> = Reply::Failure(StatusCode::new("201"));
        assert!(!failed.is_success());
        assert_eq!(failed.failure_code().map(StatusCode::as_str), Some("201"));
        assert_eq!(failed.success(), None);

        let raw: Reply<u8> = Reply::Malformed(String::new());
        assert_eq!(raw.failure_code(), None);
    }

    #[test]
    fn status_code_known_mapping() {
        let code = StatusCode::new("100");
        assert_eq!(code.known(), Some(KnownStatusCode::RequestOkOrQueued));

        let unknown = StatusCode::new("999999");
        assert_eq!(unknown.known(), None);
    }
}
