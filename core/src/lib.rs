//! Core components for signing API requests.
//!
//! This crate provides the foundational types and traits for the s3auth
//! ecosystem: the abstractions a protocol crate needs to turn an
//! `http::request::Parts` into a signed request.
//!
//! ## Overview
//!
//! The crate is built around a few key concepts:
//!
//! - [`SigningRequest`]: a mutable, canonicalization-friendly view of a
//!   request, built from and applied back to `http::request::Parts`
//! - [`SignRequest`] / [`ProvideCredential`]: the seams a protocol crate
//!   implements
//! - [`Signer`]: the orchestrator that caches credentials and signs
//!
//! All signing operations are synchronous, in-memory computations: nothing
//! here performs network or disk I/O.
//!
//! ## Example
//!
//! ```no_run
//! use s3auth_core::{ProvideCredential, Result, SignRequest, Signer, SigningCredential};
//! use std::time::Duration;
//!
//! // Define your credential type
//! #[derive(Clone, Debug)]
//! struct MyCredential {
//!     key: String,
//!     secret: String,
//! }
//!
//! impl SigningCredential for MyCredential {
//!     fn is_valid(&self) -> bool {
//!         !self.key.is_empty() && !self.secret.is_empty()
//!     }
//! }
//!
//! // Implement credential provider
//! #[derive(Debug)]
//! struct MyProvider;
//!
//! impl ProvideCredential for MyProvider {
//!     type Credential = MyCredential;
//!
//!     fn provide_credential(&self) -> Result<Option<Self::Credential>> {
//!         Ok(Some(MyCredential {
//!             key: "my-access-key".to_string(),
//!             secret: "my-secret-key".to_string(),
//!         }))
//!     }
//! }
//!
//! // Implement request signer
//! #[derive(Debug)]
//! struct MySigner;
//!
//! impl SignRequest for MySigner {
//!     type Credential = MyCredential;
//!
//!     fn sign_request(
//!         &self,
//!         _req: &mut http::request::Parts,
//!         _credential: Option<&Self::Credential>,
//!         _expires_in: Option<Duration>,
//!     ) -> Result<()> {
//!         // Canonicalize and sign here
//!         todo!()
//!     }
//! }
//!
//! # fn example() -> Result<()> {
//! let signer = Signer::new(MyProvider, MySigner);
//!
//! let mut parts = http::Request::builder()
//!     .method("GET")
//!     .uri("https://example.com")
//!     .body(())
//!     .expect("request must be valid")
//!     .into_parts()
//!     .0;
//!
//! signer.sign(&mut parts, None)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Utilities
//!
//! - [`hash`]: SHA-256 / HMAC helpers shared by the protocol crates
//! - [`time`]: fixed UTC timestamp formats used on the wire

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;

mod error;
pub use error::{Error, ErrorKind, Result};

mod api;
pub use api::{ProvideCredential, SignRequest, SigningCredential};
mod request;
pub use request::{SigningMethod, SigningRequest};
mod signer;
pub use signer::Signer;
