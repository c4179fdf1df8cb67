//! Formlink Contact - command line entry point.
//!
//! Commands:
//! - `submit` (default): read the raw form fields as JSON from stdin and run one submission
//! - `info`: print the "Other Ways to Reach Us" contact methods as JSON
//! - `schema`: print the JSON Schema of the form payload

use anyhow::{bail, Context, Result};
use formlink_contact::models::contact_methods;
use formlink_contact::{
    form_schema, Config, ContactFormFields, ContactSender, FormSubmissionController,
    SubmitOutcome, WebhookClient, WebhookSender,
};
use std::io::Read;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load configuration first so LOG_LEVEL can seed the filter
    let config = Config::from_env().context("Failed to load configuration")?;

    // Logs go to stderr, stdout carries JSON output only
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let command = std::env::args().nth(1).unwrap_or_else(|| "submit".to_string());
    match command.as_str() {
        "submit" => submit(&config).await,
        "info" => print_json(&contact_methods()),
        "schema" => print_json(&form_schema()),
        other => bail!("Unknown command: {} (expected submit, info or schema)", other),
    }
}

async fn submit(config: &Config) -> Result<()> {
    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("Failed to read form fields from stdin")?;
    let fields: ContactFormFields =
        serde_json::from_str(&input).context("Form fields must be a JSON object")?;

    let sender = WebhookClient::from_config(config).map(|client| {
        info!("Delivering to webhook {}", client.url());
        Arc::new(WebhookSender::new(client)) as Arc<dyn ContactSender>
    });
    if sender.is_none() {
        info!("No webhook configured, using simulated delivery");
    }

    let controller = FormSubmissionController::from_config(config, sender);
    controller.fill(fields);

    let outcome = match controller.handle_submit().await {
        Ok(outcome) => outcome,
        Err(errors) => {
            print_json(&errors)?;
            bail!("Form has {} invalid field(s)", errors.len());
        }
    };

    info!("Submission metrics: {}", controller.metrics().summary());

    match outcome {
        SubmitOutcome::Sent => print_json(&controller.view()),
        SubmitOutcome::Failed(e) => {
            error!("Submission failed: {}", e);
            Err(e.into())
        }
        SubmitOutcome::Ignored => bail!("Submission was ignored"),
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}
