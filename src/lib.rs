//! Autholas - a login client for the Autholas licensing API
//!
//! The crate is split into a few small pieces:
//!
//! - [`hardware`] derives the device fingerprint (HWID) sent with every login.
//! - [`client`] builds the login request, performs the single network round
//!   trip and classifies the outcome into an [`client::AuthResult`].
//! - [`config`], [`logging`] and [`prompt`] carry the ambient concerns of the
//!   `autholas_client` binary.
//!
//! # Example
//!
//! ```rust,no_run
//! use autholas::client::{AuthClient, Credentials};
//! use autholas::config::ApiConfig;
//! use autholas::hardware::compute_fingerprint;
//!
//! # async fn run() -> autholas::errors::AutholasResult<()> {
//! let api = ApiConfig {
//!     key: "my-api-key".to_string(),
//!     ..ApiConfig::default()
//! };
//! let client = AuthClient::new(api)?;
//! let credentials = Credentials::new("alice", "hunter2", compute_fingerprint());
//!
//! let result = client.authenticate(&credentials).await;
//! if let Some(token) = result.session_token() {
//!     println!("logged in, token {token}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod errors;
pub mod hardware;
pub mod logging;
pub mod prompt;

pub mod client {
    pub mod auth;
    pub mod errors;
    pub mod report;
    pub mod responses;
    pub mod transport;

    pub use auth::AuthClient;
    pub use errors::{classify, classify_code, AuthErrorCode, ErrorCategory};
    pub use responses::{AuthRequest, AuthResult, Credentials, FailureKind};
    pub use transport::{HttpTransport, Transport, TransportError, TransportResponse};
}
