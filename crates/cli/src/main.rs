//! PolicyQA CLI
//!
//! Main entry point for the policyqa command-line tool.
//! Runs the ask gateway, or asks questions through it from the terminal.

mod commands;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{AskCommand, ConsoleCommand};
use policyqa_core::{config::AppConfig, logging, AppResult};

/// PolicyQA - ask questions about institutional policy documents
#[derive(Parser, Debug)]
#[command(name = "policyqa")]
#[command(about = "Ask questions about policy documents through the PolicyQA gateway", long_about = None)]
#[command(version)]
struct Cli {
    /// Answering-service base address (the gateway appends /ask)
    #[arg(long, global = true, env = "POLICYQA_API_BASE")]
    api_base: Option<String>,

    /// Address the gateway listens on
    #[arg(long, global = true, env = "POLICYQA_LISTEN")]
    listen: Option<String>,

    /// Gateway base URL used by `ask` and `console`
    #[arg(short, long, global = true, env = "POLICYQA_GATEWAY_URL")]
    gateway: Option<String>,

    /// Give up on an ask after this many seconds
    #[arg(short, long, global = true)]
    timeout: Option<u64>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, env = "RUST_LOG")]
    log_level: Option<String>,

    /// Enable verbose output (sets log level to debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(
        long,
        global = true,
        env = "NO_COLOR",
        action = clap::ArgAction::SetTrue,
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the ask gateway in front of the answering service
    Serve,

    /// Ask one question and print the answer
    Ask(AskCommand),

    /// Interactive ask console
    Console(ConsoleCommand),

    /// List the quick-action presets
    Templates,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> AppResult<()> {
    // Load base configuration from environment
    let config = AppConfig::load()?;

    // Apply CLI overrides
    let config = config.with_overrides(
        cli.api_base,
        cli.listen,
        cli.gateway,
        cli.timeout,
        cli.log_level,
        cli.verbose,
        cli.no_color,
    );

    logging::init_logging(config.log_level.as_deref(), config.no_color)?;
    colored::control::set_override(commands::use_color(&config));

    config.validate()?;

    tracing::debug!("Backend: {}", config.api_base);
    tracing::debug!("Gateway: {}", config.gateway_url);

    let command_name = match &cli.command {
        Commands::Serve => "serve",
        Commands::Ask(_) => "ask",
        Commands::Console(_) => "console",
        Commands::Templates => "templates",
    };
    let _span = tracing::info_span!("command", name = command_name).entered();

    let result = match cli.command {
        Commands::Serve => commands::serve::execute(&config).await,
        Commands::Ask(cmd) => cmd.execute(&config).await,
        Commands::Console(cmd) => cmd.execute(&config).await,
        Commands::Templates => commands::templates::execute(&config),
    };

    match &result {
        Ok(_) => tracing::debug!("Command completed successfully"),
        Err(e) => tracing::debug!("Command failed: {}", e),
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_color_env_accepts_conventional_values() {
        std::env::set_var("NO_COLOR", "1");
        let parsed = Cli::try_parse_from(["policyqa", "templates"]);
        std::env::remove_var("NO_COLOR");

        let cli = parsed.unwrap();
        assert!(cli.no_color);
        assert!(matches!(cli.command, Commands::Templates));
    }

    #[test]
    fn test_no_color_flag_without_value() {
        let cli =
            Cli::try_parse_from(["policyqa", "--no-color", "ask", "What is probation?"]).unwrap();
        assert!(cli.no_color);
    }
}
