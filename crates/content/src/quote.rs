use tpr_core::ID;
use tpr_core::Unique;

/// One entry of the daily-quote rotation. The `reference` is the scripture
/// citation shown under the text, when there is one.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Quote {
    pub id: ID<Self>,
    pub quote_text: String,
    pub reference: Option<String>,
}

impl Unique for Quote {
    fn id(&self) -> ID<Self> {
        self.id
    }
}

mod schema {
    use super::*;
    use tpr_pg::*;

    impl Schema for Quote {
        fn name() -> &'static str {
            QUOTES
        }
        fn creates() -> &'static str {
            const_format::concatcp!(
                "CREATE TABLE IF NOT EXISTS ",
                QUOTES,
                " (
                    id          BIGSERIAL PRIMARY KEY,
                    quote_text  TEXT NOT NULL,
                    reference   TEXT
                );"
            )
        }
        fn indices() -> &'static str {
            ""
        }
    }
}
