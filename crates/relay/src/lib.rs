//! Outbound third-party adapters.
//!
//! Everything here is an asynchronous, fallible, externally-owned call:
//! the contact-form relay, the payment provider, and the receipt notice
//! contract. Each adapter owns its HTTP client and none of them is ever
//! on the path of a registry operation.

mod form;
mod handlers;
mod notice;
mod payments;

pub use form::*;
pub use handlers::*;
pub use notice::*;
pub use payments::*;
