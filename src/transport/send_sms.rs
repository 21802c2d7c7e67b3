use crate::domain::{
    AssignedSmsId, MessageText, RawPhoneNumber, Reply, SendOptions, SendReport, SenderId,
    SingleSms, SmsId, SmsMessage, UnixTimestamp,
};

use super::lines::decode_reply;

pub fn encode_single_send_query(request: &SingleSms) -> Vec<(String, String)> {
    let mut params = vec![
        (
            RawPhoneNumber::FIELD.to_owned(),
            request.message().number().raw().to_owned(),
        ),
        (
            MessageText::FIELD.to_owned(),
            request.message().text().as_str().to_owned(),
        ),
    ];
    push_options(&mut params, request.options());
    params
}

/// Encode one physical request of a batch send. `messages` must already be
/// capped at the gateway's per-request limit; the client does the chunking.
pub fn encode_batch_send_query(
    messages: &[SmsMessage],
    options: &SendOptions,
) -> Vec<(String, String)> {
    let mut params = messages
        .iter()
        .map(|message| {
            (
                format!("multi[{}]", message.number().raw()),
                message.text().as_str().to_owned(),
            )
        })
        .collect::<Vec<_>>();
    push_options(&mut params, options);
    params
}

fn push_options(params: &mut Vec<(String, String)>, options: &SendOptions) {
    if let Some(from) = options.from.as_ref() {
        params.push((SenderId::FIELD.to_owned(), from.as_str().to_owned()));
    }
    params.push((
        "translit".to_owned(),
        if options.translit { "1" } else { "0" }.to_owned(),
    ));
    params.push((
        UnixTimestamp::FIELD.to_owned(),
        options
            .time
            .map(|time| time.value().to_string())
            .unwrap_or_else(|| "0".to_owned()),
    ));
    params.push((
        "test".to_owned(),
        if options.test { "1" } else { "0" }.to_owned(),
    ));
}

/// Decode one physical send response.
///
/// The tail holds one id line per message of this request followed by the
/// balance line; ids are matched to `messages` positionally, in order.
pub fn decode_send_sms_reply(messages: &[SmsMessage], body: &str) -> Reply<SendReport> {
    decode_reply(body, |tail| {
        let (balance, id_lines) = tail.split_last()?;
        if id_lines.is_empty() {
            return None;
        }

        let sms_ids = messages
            .iter()
            .zip(id_lines.iter())
            .map(|(message, line)| {
                let id = SmsId::new(*line).ok()?;
                Some(AssignedSmsId {
                    number: message.number().clone(),
                    id,
                })
            })
            .collect::<Option<Vec<_>>>()?;

        Some(SendReport {
            balance: (*balance).to_owned(),
            sms_ids,
        })
    })
}

#[cfg(test)]
mod tests {
    use crate::domain::{SendSms, StatusCode};

    use super::*;

    fn message(number: &str, text: &str) -> SmsMessage {
        SmsMessage::new(
            RawPhoneNumber::new(number).unwrap(),
            MessageText::new(text).unwrap(),
        )
    }

    #[test]
    fn encode_single_query_params() {
        let options = SendOptions {
            from: Some(SenderId::new("MySender").unwrap()),
            time: Some(UnixTimestamp::new(1_700_000_000)),
            translit: true,
            test: true,
        };
        let request = SendSms::single(message("+79251234567", "hello"), options);
        let SendSms::Single(single) = request else {
            unreachable!()
        };

        assert_eq!(
            encode_single_send_query(&single),
            vec![
                ("to".to_owned(), "+79251234567".to_owned()),
                ("text".to_owned(), "hello".to_owned()),
                ("from".to_owned(), "MySender".to_owned()),
                ("translit".to_owned(), "1".to_owned()),
                ("time".to_owned(), "1700000000".to_owned()),
                ("test".to_owned(), "1".to_owned()),
            ]
        );
    }

    #[test]
    fn encode_single_query_defaults_to_zeroed_flags() {
        let request = SendSms::single(message("+79251234567", "hello"), SendOptions::default());
        let SendSms::Single(single) = request else {
            unreachable!()
        };

        assert_eq!(
            encode_single_send_query(&single),
            vec![
                ("to".to_owned(), "+79251234567".to_owned()),
                ("text".to_owned(), "hello".to_owned()),
                ("translit".to_owned(), "0".to_owned()),
                ("time".to_owned(), "0".to_owned()),
                ("test".to_owned(), "0".to_owned()),
            ]
        );
    }

    #[test]
    fn encode_batch_query_emits_one_multi_pair_per_message() {
        let messages = vec![
            message("375336006060", "hello"),
            message("375336006062", "hello2"),
        ];

        let params = encode_batch_send_query(&messages, &SendOptions::default());
        assert_eq!(
            params,
            vec![
                ("multi[375336006060]".to_owned(), "hello".to_owned()),
                ("multi[375336006062]".to_owned(), "hello2".to_owned()),
                ("translit".to_owned(), "0".to_owned()),
                ("time".to_owned(), "0".to_owned()),
                ("test".to_owned(), "0".to_owned()),
            ]
        );
    }

    #[test]
    fn decode_assigns_ids_positionally_in_input_order() {
        let messages = vec![
            message("375336006060", "hello"),
            message("375336006062", "hello2"),
        ];

        let reply = decode_send_sms_reply(&messages, "100\n201318-205295\n201318-205296\n250.5");
        let report = reply.success().unwrap();
        assert_eq!(report.balance, "250.5");
        assert_eq!(report.sms_ids.len(), 2);
        assert_eq!(report.sms_ids[0].number.raw(), "375336006060");
        assert_eq!(report.sms_ids[0].id.as_str(), "201318-205295");
        assert_eq!(report.sms_ids[1].number.raw(), "375336006062");
        assert_eq!(report.sms_ids[1].id.as_str(), "201318-205296");
    }

    #[test]
    fn decode_maps_non_success_status_to_failure() {
        let messages = vec![message("375336006060", "hello")];
        assert_eq!(
            decode_send_sms_reply(&messages, "201"),
            Reply::Failure(StatusCode::new("201"))
        );
    }

    #[test]
    fn decode_requires_id_and_balance_lines() {
        let messages = vec![message("375336006060", "hello")];

        // status + balance but no id line
        assert_eq!(
            decode_send_sms_reply(&messages, "100\n250.5"),
            Reply::Malformed("100\n250.5".to_owned())
        );
        assert_eq!(
            decode_send_sms_reply(&messages, "100"),
            Reply::Malformed("100".to_owned())
        );
    }

    #[test]
    fn decode_rejects_blank_id_lines() {
        let messages = vec![message("375336006060", "hello")];
        assert_eq!(
            decode_send_sms_reply(&messages, "100\n \n250.5"),
            Reply::Malformed("100\n \n250.5".to_owned())
        );
    }

    #[test]
    fn decode_passes_empty_body_through() {
        let messages = vec![message("375336006060", "hello")];
        assert_eq!(
            decode_send_sms_reply(&messages, ""),
            Reply::Malformed(String::new())
        );
    }
}
