use std::io;

use smsru_legacy::{AddStoplistEntry, ApiId, RawPhoneNumber, Reply, SmsRuClient, StoplistText};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api_id = std::env::var("SMSRU_API_ID").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SMSRU_API_ID environment variable is required",
        )
    })?;
    let phone = std::env::var("SMSRU_PHONE").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SMSRU_PHONE environment variable is required",
        )
    })?;
    let note =
        std::env::var("SMSRU_STOPLIST_TEXT").unwrap_or_else(|_| "added from demo".to_owned());

    let client = SmsRuClient::new(ApiId::new(api_id)?);
    let request = AddStoplistEntry::new(RawPhoneNumber::new(phone)?, StoplistText::new(note)?);

    match client.add_to_stoplist(request).await? {
        Reply::Success(()) => println!("added"),
        Reply::Failure(code) => println!("gateway refused: {}", code.as_str()),
        Reply::Malformed(raw) => println!("unreadable body: {raw:?}"),
    }

    Ok(())
}
