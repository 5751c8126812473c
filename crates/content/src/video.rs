use tpr_core::ID;
use tpr_core::Unique;

/// One entry of the locally synced video catalog, keyed by the external
/// platform's video identifier. The periodic pull job upserts on
/// `video_id`; this crate only reads.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Video {
    pub id: ID<Self>,
    pub video_id: String,
    pub title: String,
    pub thumbnail_url: Option<String>,
    pub view_count: i64,
    pub published_at: String,
}

impl Unique for Video {
    fn id(&self) -> ID<Self> {
        self.id
    }
}

mod schema {
    use super::*;
    use tpr_pg::*;

    impl Schema for Video {
        fn name() -> &'static str {
            VIDEOS
        }
        fn creates() -> &'static str {
            const_format::concatcp!(
                "CREATE TABLE IF NOT EXISTS ",
                VIDEOS,
                " (
                    id              BIGSERIAL PRIMARY KEY,
                    video_id        TEXT UNIQUE NOT NULL,
                    title           TEXT NOT NULL,
                    thumbnail_url   TEXT,
                    view_count      BIGINT NOT NULL DEFAULT 0,
                    published_at    TEXT NOT NULL
                );"
            )
        }
        fn indices() -> &'static str {
            const_format::concatcp!(
                "CREATE INDEX IF NOT EXISTS idx_videos_published ON ",
                VIDEOS,
                " (published_at DESC);"
            )
        }
    }
}
