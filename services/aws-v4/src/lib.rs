//! AWS SigV4 signing for S3-compatible services.
//!
//! This crate turns an `http::request::Parts` into a signed request using
//! the canonicalization, key derivation, and signing rules of AWS Signature
//! Version 4:
//!
//! - [`RequestSigner`] signs with an `Authorization` header, or produces a
//!   presigned URL when an expiry is given
//! - [`RequestSigner::sign_chunked_stream`] opens a [`ChunkSession`] whose
//!   chained signatures frame an `aws-chunked` streaming upload
//! - [`LegacyRequestSigner`] covers the pre-SigV4 HMAC-SHA1 scheme some
//!   compatible endpoints still require
//!
//! All of it is synchronous, in-memory computation; transmitting the signed
//! request is the caller's business.
//!
//! ## Example
//!
//! ```no_run
//! use s3auth_aws_v4::{Credential, RequestSigner};
//! use s3auth_core::SignRequest;
//!
//! # fn example() -> s3auth_core::Result<()> {
//! let signer = RequestSigner::new("s3", "us-east-1");
//! let cred = Credential::new("access_key_id", "secret_access_key");
//!
//! let mut parts = http::Request::builder()
//!     .method("PUT")
//!     .uri("https://s3.us-east-1.amazonaws.com/bucket/object")
//!     .body(())
//!     .expect("request must be valid")
//!     .into_parts()
//!     .0;
//!
//! signer.sign_request(&mut parts, Some(&cred), None)?;
//! // parts now carries host, x-amz-date, x-amz-content-sha256 and
//! // Authorization; transmit them as is.
//! # Ok(())
//! # }
//! ```

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

mod constants;

mod credential;
pub use credential::Credential;

mod provide_credential;
pub use provide_credential::StaticCredentialProvider;

mod sign_request;
pub use sign_request::RequestSigner;

mod chunked;
pub use chunked::{chunked_content_length, ChunkSession, MIN_CHUNK_SIZE};

mod legacy;
pub use legacy::LegacyRequestSigner;
