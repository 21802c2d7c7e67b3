//! Shared pieces of the legacy line protocol.
//!
//! Every response body starts with a status-code line; only the tail behind it
//! differs per endpoint. Decoders go through [`decode_reply`] so the splitting
//! and status handling exist exactly once.

use crate::domain::{Reply, StatusCode};

/// Split a body into lines, dropping trailing empty segments (a body ending in
/// `\n` has no extra empty line). Returns `None` when nothing is left.
fn reply_lines(body: &str) -> Option<Vec<&str>> {
    let mut lines: Vec<&str> = body.split('\n').collect();
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    if lines.is_empty() { None } else { Some(lines) }
}

/// Run the shared status-line step, then hand the remaining lines to `tail`.
///
/// - empty body → [`Reply::Malformed`] carrying the raw body,
/// - status line ≠ `"100"` → [`Reply::Failure`],
/// - `tail` returning `None` (too few lines for the endpoint's shape) →
///   [`Reply::Malformed`].
pub(crate) fn decode_reply<T>(body: &str, tail: impl FnOnce(&[&str]) -> Option<T>) -> Reply<T> {
    let Some(lines) = reply_lines(body) else {
        return Reply::Malformed(body.to_owned());
    };

    let status = StatusCode::new(lines[0]);
    if !status.is_success() {
        return Reply::Failure(status);
    }

    match tail(&lines[1..]) {
        Some(payload) => Reply::Success(payload),
        None => Reply::Malformed(body.to_owned()),
    }
}

/// Decoder for endpoints whose entire answer is the status line
/// (`sms/status`, `stoplist/add`, `stoplist/del`).
pub fn decode_status_only_reply(body: &str) -> Reply<()> {
    decode_reply(body, |_| Some(()))
}
