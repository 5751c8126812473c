use tpr_core::ID;
use tpr_core::Unique;

/// A hymn or worship song reference.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Song {
    pub id: ID<Self>,
    pub title: String,
    pub author: Option<String>,
    pub lyrics: Option<String>,
}

impl Unique for Song {
    fn id(&self) -> ID<Self> {
        self.id
    }
}

mod schema {
    use super::*;
    use tpr_pg::*;

    impl Schema for Song {
        fn name() -> &'static str {
            SONGS
        }
        fn creates() -> &'static str {
            const_format::concatcp!(
                "CREATE TABLE IF NOT EXISTS ",
                SONGS,
                " (
                    id          BIGSERIAL PRIMARY KEY,
                    title       TEXT NOT NULL,
                    author      TEXT,
                    lyrics      TEXT
                );"
            )
        }
        fn indices() -> &'static str {
            ""
        }
    }
}
