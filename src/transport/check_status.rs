use crate::domain::{CheckStatus, SmsId};

pub use super::lines::decode_status_only_reply;

pub fn encode_check_status_query(request: &CheckStatus) -> Vec<(String, String)> {
    vec![(SmsId::FIELD.to_owned(), request.id().as_str().to_owned())]
}

#[cfg(test)]
mod tests {
    use crate::domain::{Reply, StatusCode};

    use super::*;

    #[test]
    fn encode_check_status_query_params() {
        let request = CheckStatus::new(SmsId::new("201318-205295").unwrap());
        assert_eq!(
            encode_check_status_query(&request),
            vec![("id".to_owned(), "201318-205295".to_owned())]
        );
    }

    #[test]
    fn delivery_states_come_back_as_the_bare_code() {
        // 102 means the message is in transit; the code line is the whole answer.
        assert_eq!(
            decode_status_only_reply("102"),
            Reply::Failure(StatusCode::new("102"))
        );
        assert_eq!(decode_status_only_reply("100"), Reply::Success(()));
    }
}
