use tpr_core::ID;
use tpr_core::Unique;

/// A library book reference.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Book {
    pub id: ID<Self>,
    pub title: String,
    pub author: Option<String>,
    pub url: Option<String>,
}

impl Unique for Book {
    fn id(&self) -> ID<Self> {
        self.id
    }
}

mod schema {
    use super::*;
    use tpr_pg::*;

    impl Schema for Book {
        fn name() -> &'static str {
            BOOKS
        }
        fn creates() -> &'static str {
            const_format::concatcp!(
                "CREATE TABLE IF NOT EXISTS ",
                BOOKS,
                " (
                    id          BIGSERIAL PRIMARY KEY,
                    title       TEXT NOT NULL,
                    author      TEXT,
                    url         TEXT
                );"
            )
        }
        fn indices() -> &'static str {
            ""
        }
    }
}
