//! Authentication gate for the administrative surface.
//!
//! There is exactly one administrator identity, configured through the
//! environment. A successful login mints a signed, short-lived JWT carried
//! in an HTTP-only cookie; verification is stateless, so logout clears the
//! cookie without revoking the token itself (an issued token stays
//! cryptographically valid until expiry).
//!
//! ## Pieces
//!
//! - [`Admin`] — The configured credential pair
//! - [`Crypto`] — JWT signing and verification
//! - [`Claims`] — JWT payload structure
//! - [`Auth`] — Request extractor enforcing the gate
//! - [`login`] / [`logout`] — The cookie-issuing handlers

mod admin;
mod claims;
mod cookie;
mod crypto;
mod dto;
mod handlers;
mod middleware;

pub use admin::*;
pub use claims::*;
pub use cookie::*;
pub use crypto::*;
pub use dto::*;
pub use handlers::*;
pub use middleware::*;
