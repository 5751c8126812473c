//! Member registry: the administrative CRUD service.
//!
//! Every mutating and listing operation sits behind the [`tpr_auth::Auth`]
//! gate. Sort columns come from a fixed allow-list and search input is
//! passed as a bound parameter, so nothing user-supplied ever reaches the
//! SQL text.
//!
//! ## Pieces
//!
//! - [`Member`] — The stored record, id assigned by the database
//! - [`MemberDraft`] — Incoming fields, validated into [`NewMember`] or
//!   [`MemberPatch`]
//! - [`SortColumn`] / [`SortDirection`] — Allow-listed ordering
//! - [`MemberRepository`] — SQL behind a trait over `Arc<Client>`

mod draft;
mod handlers;
mod member;
mod query;
mod repository;

pub use draft::*;
pub use handlers::*;
pub use member::*;
pub use query::*;
pub use repository::*;
