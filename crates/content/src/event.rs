use tpr_core::ID;
use tpr_core::Unique;

/// A calendar event. Dates are ISO-8601 text so lexical order is
/// chronological order.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Event {
    pub id: ID<Self>,
    pub title: String,
    pub date: String,
    pub location: Option<String>,
    pub description: Option<String>,
}

impl Unique for Event {
    fn id(&self) -> ID<Self> {
        self.id
    }
}

mod schema {
    use super::*;
    use tpr_pg::*;

    impl Schema for Event {
        fn name() -> &'static str {
            EVENTS
        }
        fn creates() -> &'static str {
            const_format::concatcp!(
                "CREATE TABLE IF NOT EXISTS ",
                EVENTS,
                " (
                    id          BIGSERIAL PRIMARY KEY,
                    title       TEXT NOT NULL,
                    date        TEXT NOT NULL,
                    location    TEXT,
                    description TEXT
                );"
            )
        }
        fn indices() -> &'static str {
            const_format::concatcp!(
                "CREATE INDEX IF NOT EXISTS idx_events_date ON ",
                EVENTS,
                " (date);"
            )
        }
    }
}
