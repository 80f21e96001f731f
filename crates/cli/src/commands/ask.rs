//! Ask command handler.
//!
//! Sends one question through the gateway and prints the settled answer.

use clap::Args;
use policyqa_client::GatewayClient;
use policyqa_console::{
    run_submission, templates, AskSession, Painter, RequestState, View, GENERIC_FAILURE,
};
use policyqa_core::{config::AppConfig, AppError, AppResult};

use super::use_color;

/// Ask one question and print the answer
#[derive(Args, Debug)]
pub struct AskCommand {
    /// The question to ask
    #[arg(required_unless_present = "template", conflicts_with = "template")]
    pub question: Vec<String>,

    /// Ask a quick-action preset instead (key, number or label)
    #[arg(long)]
    pub template: Option<String>,

    /// Print the answer and citations as JSON
    #[arg(long)]
    pub json: bool,
}

impl AskCommand {
    /// Execute the ask command.
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing ask command");
        tracing::debug!("Ask command options: {:?}", self);

        let transport = GatewayClient::with_base_url(config.gateway_url.clone());
        let mut session = AskSession::new();

        let submission = match &self.template {
            Some(query) => {
                let action = templates::find(query).ok_or_else(|| {
                    AppError::Console(format!(
                        "Unknown quick action '{}'. Run `policyqa templates` to list them.",
                        query
                    ))
                })?;
                session.run_template(action)
            }
            None => session.submit_question(self.question.join(" ")),
        };

        run_submission(&mut session, submission, &transport, config.ask_timeout()).await;

        match session.state() {
            RequestState::Settled(response) => {
                if self.json {
                    let json = serde_json::to_string_pretty(response)?;
                    println!("{}", json);
                } else {
                    print!("{}", Painter::new(use_color(config)).view(&View::of(&session)));
                }
                Ok(())
            }
            RequestState::Failed(message) => Err(AppError::Console(message.clone())),
            RequestState::Idle | RequestState::Pending(_) => {
                let message = session
                    .notice()
                    .map(|notice| notice.message())
                    .unwrap_or(GENERIC_FAILURE);
                Err(AppError::Console(message.to_string()))
            }
        }
    }
}
