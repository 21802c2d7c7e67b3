use crate::domain::{AccountBalance, DayLimit, Reply, SenderList};

use super::lines::decode_reply;

/// Decode the `my/balance` single-value tail.
pub fn decode_balance_reply(body: &str) -> Reply<AccountBalance> {
    decode_reply(body, |tail| {
        tail.first().map(|line| AccountBalance {
            balance: (*line).to_owned(),
        })
    })
}

/// Decode the `my/limit` pair tail: the daily cap, then what was sent today.
pub fn decode_limit_reply(body: &str) -> Reply<DayLimit> {
    decode_reply(body, |tail| match tail {
        [day_limit, send_today, ..] => Some(DayLimit {
            day_limit: (*day_limit).to_owned(),
            send_today: (*send_today).to_owned(),
        }),
        _ => None,
    })
}

/// Decode the `my/senders` list tail: every remaining line is one sender number.
pub fn decode_senders_reply(body: &str) -> Reply<SenderList> {
    decode_reply(body, |tail| {
        Some(SenderList {
            senders: tail.iter().map(|line| (*line).to_owned()).collect(),
        })
    })
}
