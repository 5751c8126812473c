//! Ancillary read-mostly content served without authentication.
//!
//! Quotes, calendar events, quiz questions, brochures, songs, books, and
//! the locally synced video catalog. None of these relate to the member
//! registry beyond living in the same store.
//!
//! The daily quote follows one deterministic policy: quotes rotate in id
//! order, one per calendar day, wrapping when the set is exhausted.

mod book;
mod brochure;
mod event;
mod handlers;
mod quiz;
mod quote;
mod repository;
mod rotation;
mod song;
mod video;

pub use book::*;
pub use brochure::*;
pub use event::*;
pub use handlers::*;
pub use quiz::*;
pub use quote::*;
pub use repository::*;
pub use rotation::*;
pub use song::*;
pub use video::*;
