use std::io;

use smsru_legacy::{ApiId, CheckStatus, Reply, SmsId, SmsRuClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api_id = std::env::var("SMSRU_API_ID").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SMSRU_API_ID environment variable is required",
        )
    })?;
    let sms_id = std::env::var("SMSRU_SMS_ID").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SMSRU_SMS_ID environment variable is required",
        )
    })?;

    let client = SmsRuClient::new(ApiId::new(api_id)?);
    let request = CheckStatus::new(SmsId::new(sms_id)?);

    match client.check_status(request).await? {
        Reply::Success(()) => println!("status: 100 (queued)"),
        Reply::Failure(code) => {
            println!("status: {} ({:?})", code.as_str(), code.known());
        }
        Reply::Malformed(raw) => println!("unreadable body: {raw:?}"),
    }

    Ok(())
}
