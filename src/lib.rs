//! # kequtech-api
//!
//! Typed client for the Kequtech API: message parsing, routing, response
//! drafting, summarization and character generation.
//!
//! ## Overview
//!
//! Every call goes through the same parameter pipeline before anything is
//! sent:
//!
//! 1. **Catalog lookup** resolves a versioned path such as `/v1/message-parser`
//!    to its parameter schema, response schema, token cost and default rate limit.
//! 2. **Truncation** shortens over-length strings middle-out (lead and tail kept).
//! 3. **Validation** checks the shaped parameters; the first failure becomes a
//!    422 response and no request is made.
//! 4. **Request building** adds the credential and the optional per-actor
//!    rate-limit directive.
//! 5. **Normalization** turns the HTTP response into an [`ApiResponse`] that
//!    holds either the payload or an [`ApiError`], plus rate-limit telemetry.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use kequtech_api::catalog::v1::{summarize_text::SummarizeTextParameters, SummarizeText};
//! use kequtech_api::{ActorLimits, CallOptions, KequtechClient};
//!
//! #[tokio::main]
//! async fn main() -> kequtech_api::Result<()> {
//!     let client = KequtechClient::builder().api_key("your-api-key").build()?;
//!
//!     let params = SummarizeTextParameters {
//!         text: "A long article body ...".into(),
//!         ..Default::default()
//!     };
//!     let options = CallOptions::new().actor(ActorLimits::new("user-42").max(10.0).seconds(60.0));
//!     let response = client.call::<SummarizeText>(&params, options).await?;
//!
//!     match response.into_result() {
//!         Ok(summary) => println!("{}", summary.blurb),
//!         Err(error) => eprintln!("{}", error),
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`catalog`] | Products, versions, versioned path resolution |
//! | [`schema`] | Constraint trees and truncation |
//! | [`validation`] | Validator capability, default engine, per-path cache |
//! | [`client`] | Client facade, request building, response normalization |
//! | [`transport`] | HTTP capability and the reqwest implementation |

pub mod catalog;
pub mod client;
pub mod schema;
pub mod transport;
pub mod validation;

pub use catalog::{Catalog, CatalogError, Endpoint};
pub use client::{
    ActorLimits, ApiError, ApiResponse, CallOptions, KequtechClient, KequtechClientBuilder,
    RateLimitTelemetry,
};
pub use validation::{ValidationFailure, ValidatorEngine};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext};
