//! Console command handler.
//!
//! Interactive loop over stdin. Asks run on spawned tasks and report back
//! over a channel, so the prompt keeps responding while one is pending.

use std::io::Write;
use std::sync::Arc;

use clap::Args;
use colored::Colorize;
use policyqa_client::{AskTransport, GatewayClient};
use policyqa_console::{Console, Painter, Step};
use policyqa_core::{config::AppConfig, AppResult};
use tokio::io::{AsyncBufReadExt, BufReader};

use super::use_color;

/// Interactive ask console
#[derive(Args, Debug)]
pub struct ConsoleCommand {
    /// Ask this question as soon as the console opens
    #[arg(short, long)]
    pub question: Option<String>,
}

impl ConsoleCommand {
    /// Execute the console command.
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!(gateway = %config.gateway_url, "Opening ask console");

        let transport: Arc<dyn AskTransport> =
            Arc::new(GatewayClient::with_base_url(config.gateway_url.clone()));
        let (mut console, mut completions) = Console::new(
            transport,
            config.ask_timeout(),
            Painter::new(use_color(config)),
        );
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        println!("{} {}", "PolicyQA".bold(), "ask console".dimmed());
        println!("Asking through {}. Type /help for commands.\n", config.gateway_url);

        match &self.question {
            Some(question) => print!("{}", console.ask(question.clone())),
            None => print!("{}", console.render()),
        }
        prompt();

        loop {
            tokio::select! {
                line = lines.next_line() => {
                    let Some(line) = line? else {
                        tracing::debug!("stdin closed");
                        break;
                    };

                    match console.handle_line(&line) {
                        Step::Print(output) => print!("{}", output),
                        Step::Quit => break,
                    }
                    prompt();
                }
                Some((ticket, completion)) = completions.recv() => {
                    if let Some(output) = console.handle_completion(ticket, completion) {
                        println!();
                        print!("{}", output);
                        prompt();
                    }
                }
            }
        }

        tracing::info!("Console closed");
        Ok(())
    }
}

fn prompt() {
    print!("{} ", "?".cyan().bold());
    std::io::stdout().flush().ok();
}
