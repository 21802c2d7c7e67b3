use std::io;

use smsru_legacy::{
    ApiId, MessageText, RawPhoneNumber, Reply, SendOptions, SendSms, SmsMessage, SmsRuClient,
};

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
    let text = std::env::var("SMSRU_MESSAGE")
        .unwrap_or_else(|_| "Hello from the smsru-legacy demo.".to_owned());

    let client = SmsRuClient::new(ApiId::new(api_id)?);
    let message = SmsMessage::new(RawPhoneNumber::new(phone)?, MessageText::new(text)?);
    let request = SendSms::single(message, SendOptions::default());

    match client.send_sms(request).await? {
        Reply::Success(report) => {
            for assigned in &report.sms_ids {
                println!("{} -> {}", assigned.number.raw(), assigned.id.as_str());
            }
            println!("balance: {}", report.balance);
        }
        Reply::Failure(code) => println!("gateway refused: {}", code.as_str()),
        Reply::Malformed(raw) => println!("unreadable body: {raw:?}"),
    }

    Ok(())
}
