//! Shared foundation for the TPR site backend.
//!
//! Provides the typed identifier wrapper used by every persistent entity
//! and the process-wide logger initialization.

use std::cmp::Ordering;
use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::Formatter;
use std::hash::Hash;
use std::hash::Hasher;
use std::marker::PhantomData;

/// Unique identifier trait for domain entities.
pub trait Unique<T = Self> {
    fn id(&self) -> ID<T>;
}

/// Generic ID wrapper providing compile-time type safety over the
/// store-generated numeric key. An `ID<Member>` can never be passed where
/// an `ID<Quote>` is expected, even though both are i64 underneath.
///
/// Ids are assigned by the database (BIGSERIAL); there is no way to mint
/// a fresh one in-process.
pub struct ID<T> {
    inner: i64,
    marker: PhantomData<T>,
}

impl<T> ID<T> {
    pub fn inner(&self) -> i64 {
        self.inner
    }
    /// Cast ID<T> to ID<U> while preserving the underlying key.
    pub fn cast<U>(self) -> ID<U> {
        ID {
            inner: self.inner,
            marker: PhantomData,
        }
    }
}

impl<T> From<ID<T>> for i64 {
    fn from(id: ID<T>) -> Self {
        id.inner()
    }
}
impl<T> From<i64> for ID<T> {
    fn from(inner: i64) -> Self {
        Self {
            inner,
            marker: PhantomData,
        }
    }
}

impl<T> Copy for ID<T> {}
impl<T> Clone for ID<T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T> Eq for ID<T> {}
impl<T> PartialEq for ID<T> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}
impl<T> Ord for ID<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.inner.cmp(&other.inner)
    }
}
impl<T> PartialOrd for ID<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<T> Hash for ID<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.hash(state);
    }
}
impl<T> Debug for ID<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "ID({})", self.inner)
    }
}
impl<T> Display for ID<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl<T> serde::Serialize for ID<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.inner)
    }
}
impl<'de, T> serde::Deserialize<'de> for ID<T> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        i64::deserialize(deserializer).map(Self::from)
    }
}

/// Initialize combined terminal + file logging.
///
/// Writes Debug-level logs to `logs/<unix-time>.log` and Info-level logs
/// to the terminal.
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Marker;

    #[test]
    fn bijective_i64() {
        let id = ID::<Marker>::from(42);
        assert!(i64::from(id) == 42);
    }

    #[test]
    fn cast_preserves_key() {
        struct Other;
        let id = ID::<Marker>::from(7);
        assert!(id.cast::<Other>().inner() == 7);
    }

    #[test]
    fn serde_transparent() {
        let id = ID::<Marker>::from(13);
        assert!(serde_json::to_string(&id).unwrap() == "13");
    }
}
