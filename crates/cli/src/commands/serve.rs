//! Serve command handler.
//!
//! Binds the listen address and forwards `POST /api/ask` to the answering
//! service until Ctrl-C.

use policyqa_core::{config::AppConfig, AppResult};
use policyqa_gateway::GatewayConfig;

pub async fn execute(config: &AppConfig) -> AppResult<()> {
    let addr = config.listen_addr()?;
    let gateway = GatewayConfig::from(config);

    tracing::info!(%addr, upstream = %gateway.ask_url(), "Starting ask gateway");
    eprintln!("Gateway listening on http://{}", addr);

    policyqa_gateway::serve(gateway, addr).await
}
