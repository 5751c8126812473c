//! PostgreSQL connectivity and schema provisioning.
//!
//! ## Connectivity
//!
//! - [`db()`] — Establishes a database connection from `DB_URL`
//!
//! ## Schema
//!
//! - [`Schema`] — Table metadata and DDL generation
//! - [`provision()`] — Idempotent table + index creation at startup
//!
//! ## Table Names
//!
//! Constants for all persistent entities: members, quotes, events, quiz
//! questions, brochures, songs, books, and videos. Table names are baked
//! into SQL at compile time via [`const_format::concatcp!`] in the domain
//! crates; nothing user-supplied is ever interpolated into a statement.

use std::sync::Arc;
use tokio_postgres::Client;

/// Establishes a database connection.
///
/// Connects to PostgreSQL using the `DB_URL` environment variable.
/// Returns an `Arc<Client>` suitable for sharing across async tasks.
///
/// # Panics
///
/// Panics if `DB_URL` is not set or if connection fails.
pub async fn db() -> Arc<Client> {
    log::info!("connecting to database");
    let tls = tokio_postgres::tls::NoTls;
    let ref url = std::env::var("DB_URL").expect("DB_URL must be set");
    let (client, connection) = tokio_postgres::connect(url, tls)
        .await
        .expect("database connection failed");
    tokio::spawn(connection);
    client
        .execute("SET client_min_messages TO WARNING", &[])
        .await
        .expect("set client_min_messages");
    Arc::new(client)
}

/// PostgreSQL error type alias.
pub type PgErr = tokio_postgres::Error;

/// Table for registered members of the congregation.
#[rustfmt::skip]
pub const MEMBERS:        &str = "members";
/// Table for daily-quote rotation entries.
#[rustfmt::skip]
pub const QUOTES:         &str = "quotes";
/// Table for calendar events.
#[rustfmt::skip]
pub const EVENTS:         &str = "events";
/// Table for youth quiz questions.
#[rustfmt::skip]
pub const QUIZ_QUESTIONS: &str = "quiz_questions";
/// Table for downloadable brochures.
#[rustfmt::skip]
pub const BROCHURES:      &str = "brochures";
/// Table for hymn and worship song references.
#[rustfmt::skip]
pub const SONGS:          &str = "songs";
/// Table for library book references.
#[rustfmt::skip]
pub const BOOKS:          &str = "books";
/// Table for the locally synced video catalog.
#[rustfmt::skip]
pub const VIDEOS:         &str = "videos";

/// Schema metadata for PostgreSQL tables.
///
/// This trait contains no I/O operations — it purely describes table
/// structure. Actual statements run through [`provision`].
pub trait Schema {
    /// Returns the table name in the database.
    fn name() -> &'static str;
    /// Returns `CREATE TABLE IF NOT EXISTS` DDL statement.
    fn creates() -> &'static str;
    /// Returns `CREATE INDEX IF NOT EXISTS` statements for all indices.
    fn indices() -> &'static str;
}

/// Creates the table and indices for one entity, if absent.
pub async fn provision<S: Schema>(client: &Client) -> Result<(), PgErr> {
    log::debug!("provisioning table {}", S::name());
    client.batch_execute(S::creates()).await?;
    client.batch_execute(S::indices()).await?;
    Ok(())
}

/// Wraps a search term into an ILIKE pattern, escaping the LIKE
/// metacharacters so the term is matched literally.
pub fn like_pattern(term: &str) -> String {
    let escaped = term
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{}%", escaped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metacharacters_escaped() {
        assert!(like_pattern("50%_a") == "%50\\%\\_a%");
    }

    #[test]
    fn plain_term_wrapped() {
        assert!(like_pattern("mar") == "%mar%");
    }
}
