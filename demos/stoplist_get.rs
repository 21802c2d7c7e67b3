use std::io;

use smsru_legacy::{ApiId, Reply, SmsRuClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api_id = std::env::var("SMSRU_API_ID").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SMSRU_API_ID environment variable is required",
        )
    })?;

    let client = SmsRuClient::new(ApiId::new(api_id)?);

    match client.stoplist().await? {
        Reply::Success(stoplist) => {
            for entry in &stoplist.entries {
                println!("{}: {}", entry.number, entry.notice);
            }
            println!("{} entries", stoplist.entries.len());
        }
        Reply::Failure(code) => println!("gateway refused: {}", code.as_str()),
        Reply::Malformed(raw) => println!("unreadable body: {raw:?}"),
    }

    Ok(())
}
