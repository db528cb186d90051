use std::io;
use std::time::Duration;

use goyyamobile::{GoyyaClient, Message, MessageType};
use tracing_subscriber::EnvFilter;

fn required_env(name: &str) -> Result<String, io::Error> {
    std::env::var(name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{name} environment variable is required"),
        )
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let account_id = required_env("GOYYA_ACCOUNT_ID")?;
    let password = required_env("GOYYA_PASSWORD")?;
    let receiver = required_env("GOYYA_RECEIVER")?;
    let sender = std::env::var("GOYYA_SENDER").unwrap_or_else(|_| "Demo".to_owned());
    let text = std::env::var("GOYYA_MESSAGE")
        .unwrap_or_else(|_| "Hello from the goyyamobile demo.".to_owned());
    // gateway validates without sending unless GOYYA_LIVE=1
    let live = std::env::var("GOYYA_LIVE").is_ok_and(|value| value == "1");

    let client = GoyyaClient::builder()
        .timeout(Duration::from_secs(10))
        .build()?;

    let mut message = Message::new();
    message
        .set_account_id(account_id)
        .set_account_password(password)
        .set_debug_mode(!live)
        .set_message_type(MessageType::Overlong)
        .set_receiver(receiver)?
        .set_sender(sender)?
        .set_message(text)?;

    let receipt = message.submit_with(&client)?;
    println!(
        "message_id: {}, message_count: {}",
        receipt.message_id, receipt.message_count
    );

    Ok(())
}
