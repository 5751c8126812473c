use tpr_core::ID;
use tpr_core::Unique;

/// A downloadable brochure listed in the library page.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Brochure {
    pub id: ID<Self>,
    pub title: String,
    pub url: String,
    pub category: Option<String>,
}

impl Unique for Brochure {
    fn id(&self) -> ID<Self> {
        self.id
    }
}

mod schema {
    use super::*;
    use tpr_pg::*;

    impl Schema for Brochure {
        fn name() -> &'static str {
            BROCHURES
        }
        fn creates() -> &'static str {
            const_format::concatcp!(
                "CREATE TABLE IF NOT EXISTS ",
                BROCHURES,
                " (
                    id          BIGSERIAL PRIMARY KEY,
                    title       TEXT NOT NULL,
                    url         TEXT NOT NULL,
                    category    TEXT
                );"
            )
        }
        fn indices() -> &'static str {
            ""
        }
    }
}
