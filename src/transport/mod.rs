//! Transport layer: query-string encoding and the line-based wire format.

mod account;
mod check_cost;
mod check_status;
mod lines;
mod send_sms;
mod stoplist;

pub use account::{decode_balance_reply, decode_limit_reply, decode_senders_reply};
pub use check_cost::{decode_check_cost_reply, encode_check_cost_query};
pub use check_status::{decode_status_only_reply, encode_check_status_query};
pub use send_sms::{decode_send_sms_reply, encode_batch_send_query, encode_single_send_query};
pub use stoplist::{decode_stoplist_reply, encode_add_stoplist_query, encode_remove_stoplist_query};
