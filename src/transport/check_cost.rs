use crate::domain::{CheckCost, CostEstimate, MessageText, RawPhoneNumber, Reply};

use super::lines::decode_reply;

pub fn encode_check_cost_query(request: &CheckCost) -> Vec<(String, String)> {
    vec![
        (RawPhoneNumber::FIELD.to_owned(), request.to().raw().to_owned()),
        (
            MessageText::FIELD.to_owned(),
            request.text().as_str().to_owned(),
        ),
    ]
}

/// Decode the `sms/cost` pair tail: line 1 is the price, line 2 the number of
/// physical messages the text splits into.
pub fn decode_check_cost_reply(body: &str) -> Reply<CostEstimate> {
    decode_reply(body, |tail| match tail {
        [cost, length, ..] => Some(CostEstimate {
            sms_cost: (*cost).to_owned(),
            sms_length: (*length).to_owned(),
        }),
        _ => None,
    })
}
