//! Client-side wire types and transport for PolicyQA.
//!
//! This crate owns the answer payload model shared by the console and the
//! CLI, and the transport seam the console uses to reach the gateway.
//!
//! # Example
//! ```no_run
//! use policyqa_client::{AskRequest, AskTransport, GatewayClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GatewayClient::with_base_url("http://127.0.0.1:3000");
//! let reply = client.ask(&AskRequest::new("What is the attendance policy?")).await?;
//! println!("{} {}", reply.status, reply.body);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod providers;
pub mod types;

// Re-export main types
pub use client::{AskTransport, TransportReply};
pub use providers::GatewayClient;
pub use types::{AskRequest, AskResponse, Citation, PageRef};
