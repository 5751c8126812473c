use tpr_core::ID;
use tpr_core::Unique;

/// A youth-quiz question with its candidate answers.
#[derive(Debug, Clone, serde::Serialize)]
pub struct QuizQuestion {
    pub id: ID<Self>,
    pub question: String,
    pub options: Vec<String>,
    pub answer: String,
}

impl Unique for QuizQuestion {
    fn id(&self) -> ID<Self> {
        self.id
    }
}

mod schema {
    use super::*;
    use tpr_pg::*;

    impl Schema for QuizQuestion {
        fn name() -> &'static str {
            QUIZ_QUESTIONS
        }
        fn creates() -> &'static str {
            const_format::concatcp!(
                "CREATE TABLE IF NOT EXISTS ",
                QUIZ_QUESTIONS,
                " (
                    id          BIGSERIAL PRIMARY KEY,
                    question    TEXT NOT NULL,
                    options     TEXT[] NOT NULL,
                    answer      TEXT NOT NULL
                );"
            )
        }
        fn indices() -> &'static str {
            ""
        }
    }
}
