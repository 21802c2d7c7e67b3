use crate::domain::{
    AddStoplistEntry, RemoveStoplistEntry, Reply, Stoplist, StoplistEntry, StoplistText,
};

use super::lines::decode_reply;

pub fn encode_add_stoplist_query(request: &AddStoplistEntry) -> Vec<(String, String)> {
    vec![
        (
            "stoplist_phone".to_owned(),
            request.phone().raw().to_owned(),
        ),
        (
            StoplistText::FIELD.to_owned(),
            request.text().as_str().to_owned(),
        ),
    ]
}

pub fn encode_remove_stoplist_query(request: &RemoveStoplistEntry) -> Vec<(String, String)> {
    vec![(
        "stoplist_phone".to_owned(),
        request.phone().raw().to_owned(),
    )]
}

/// Decode the `stoplist/get` record tail. Each remaining line is
/// `<number>;<notice>`; a line without `;` gets a single blank space as the
/// notice, and no remaining lines means an empty (but present) list.
pub fn decode_stoplist_reply(body: &str) -> Reply<Stoplist> {
    decode_reply(body, |tail| {
        let entries = tail
            .iter()
            .map(|line| match line.split_once(';') {
                Some((number, notice)) => StoplistEntry {
                    number: number.to_owned(),
                    notice: notice.to_owned(),
                },
                None => StoplistEntry {
                    number: (*line).to_owned(),
                    notice: " ".to_owned(),
                },
            })
            .collect();
        Some(Stoplist { entries })
    })
}
