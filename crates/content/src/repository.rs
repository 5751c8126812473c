use super::*;
use std::sync::Arc;
use tokio_postgres::Client;
use tokio_postgres::Row;
use tpr_core::ID;
use tpr_pg::*;

/// Videos returned per page of the public catalog.
pub const VIDEO_PAGE_SIZE: i64 = 12;

/// Row offset for a 1-based page number. Pages below 1 read as the
/// first page; arithmetic saturates so an absurd page cannot overflow.
fn video_offset(page: i64) -> i64 {
    page.max(1).saturating_sub(1).saturating_mul(VIDEO_PAGE_SIZE)
}

/// Repository trait for the read-mostly content tables.
#[allow(async_fn_in_trait)]
pub trait ContentRepository {
    async fn events(&self) -> Result<Vec<Event>, PgErr>;
    async fn quiz_questions(&self) -> Result<Vec<QuizQuestion>, PgErr>;
    async fn brochures(&self) -> Result<Vec<Brochure>, PgErr>;
    async fn songs(&self) -> Result<Vec<Song>, PgErr>;
    async fn books(&self) -> Result<Vec<Book>, PgErr>;
    async fn videos(&self, search: Option<&str>, page: i64) -> Result<(Vec<Video>, i64), PgErr>;
    async fn quote_count(&self) -> Result<i64, PgErr>;
    async fn quote_at(&self, offset: i64) -> Result<Option<Quote>, PgErr>;
}

fn event(row: &Row) -> Event {
    Event {
        id: ID::from(row.get::<_, i64>(0)),
        title: row.get(1),
        date: row.get(2),
        location: row.get(3),
        description: row.get(4),
    }
}

fn quiz_question(row: &Row) -> QuizQuestion {
    QuizQuestion {
        id: ID::from(row.get::<_, i64>(0)),
        question: row.get(1),
        options: row.get(2),
        answer: row.get(3),
    }
}

fn brochure(row: &Row) -> Brochure {
    Brochure {
        id: ID::from(row.get::<_, i64>(0)),
        title: row.get(1),
        url: row.get(2),
        category: row.get(3),
    }
}

fn song(row: &Row) -> Song {
    Song {
        id: ID::from(row.get::<_, i64>(0)),
        title: row.get(1),
        author: row.get(2),
        lyrics: row.get(3),
    }
}

fn book(row: &Row) -> Book {
    Book {
        id: ID::from(row.get::<_, i64>(0)),
        title: row.get(1),
        author: row.get(2),
        url: row.get(3),
    }
}

fn video(row: &Row) -> Video {
    Video {
        id: ID::from(row.get::<_, i64>(0)),
        video_id: row.get(1),
        title: row.get(2),
        thumbnail_url: row.get(3),
        view_count: row.get(4),
        published_at: row.get(5),
    }
}

fn quote(row: &Row) -> Quote {
    Quote {
        id: ID::from(row.get::<_, i64>(0)),
        quote_text: row.get(1),
        reference: row.get(2),
    }
}

impl ContentRepository for Arc<Client> {
    async fn events(&self) -> Result<Vec<Event>, PgErr> {
        self.query(
            const_format::concatcp!(
                "SELECT id, title, date, location, description FROM ",
                EVENTS,
                " ORDER BY date ASC, id ASC"
            ),
            &[],
        )
        .await
        .map(|rows| rows.iter().map(event).collect())
    }

    async fn quiz_questions(&self) -> Result<Vec<QuizQuestion>, PgErr> {
        self.query(
            const_format::concatcp!(
                "SELECT id, question, options, answer FROM ",
                QUIZ_QUESTIONS,
                " ORDER BY id ASC"
            ),
            &[],
        )
        .await
        .map(|rows| rows.iter().map(quiz_question).collect())
    }

    async fn brochures(&self) -> Result<Vec<Brochure>, PgErr> {
        self.query(
            const_format::concatcp!(
                "SELECT id, title, url, category FROM ",
                BROCHURES,
                " ORDER BY title ASC, id ASC"
            ),
            &[],
        )
        .await
        .map(|rows| rows.iter().map(brochure).collect())
    }

    async fn songs(&self) -> Result<Vec<Song>, PgErr> {
        self.query(
            const_format::concatcp!(
                "SELECT id, title, author, lyrics FROM ",
                SONGS,
                " ORDER BY title ASC, id ASC"
            ),
            &[],
        )
        .await
        .map(|rows| rows.iter().map(song).collect())
    }

    async fn books(&self) -> Result<Vec<Book>, PgErr> {
        self.query(
            const_format::concatcp!(
                "SELECT id, title, author, url FROM ",
                BOOKS,
                " ORDER BY title ASC, id ASC"
            ),
            &[],
        )
        .await
        .map(|rows| rows.iter().map(book).collect())
    }

    async fn videos(&self, search: Option<&str>, page: i64) -> Result<(Vec<Video>, i64), PgErr> {
        let pattern = search.map(like_pattern).unwrap_or_else(|| "%".to_string());
        let offset = video_offset(page);
        let total: i64 = self
            .query_one(
                const_format::concatcp!(
                    "SELECT count(*) FROM ",
                    VIDEOS,
                    " WHERE title ILIKE $1"
                ),
                &[&pattern],
            )
            .await?
            .get(0);
        let items = self
            .query(
                const_format::concatcp!(
                    "SELECT id, video_id, title, thumbnail_url, view_count, published_at FROM ",
                    VIDEOS,
                    " WHERE title ILIKE $1 ORDER BY published_at DESC, id DESC \
                     LIMIT $2 OFFSET $3"
                ),
                &[&pattern, &VIDEO_PAGE_SIZE, &offset],
            )
            .await?
            .iter()
            .map(video)
            .collect();
        Ok((items, total))
    }

    async fn quote_count(&self) -> Result<i64, PgErr> {
        self.query_one(
            const_format::concatcp!("SELECT count(*) FROM ", QUOTES),
            &[],
        )
        .await
        .map(|row| row.get(0))
    }

    async fn quote_at(&self, offset: i64) -> Result<Option<Quote>, PgErr> {
        self.query_opt(
            const_format::concatcp!(
                "SELECT id, quote_text, reference FROM ",
                QUOTES,
                " ORDER BY id ASC LIMIT 1 OFFSET $1"
            ),
            &[&offset],
        )
        .await
        .map(|opt| opt.as_ref().map(quote))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_starts_at_zero() {
        assert!(video_offset(1) == 0);
        assert!(video_offset(0) == 0);
        assert!(video_offset(-7) == 0);
    }

    #[test]
    fn later_pages_step_by_page_size() {
        assert!(video_offset(2) == VIDEO_PAGE_SIZE);
        assert!(video_offset(5) == 4 * VIDEO_PAGE_SIZE);
    }

    #[test]
    fn extreme_page_saturates_instead_of_wrapping() {
        assert!(video_offset(i64::MAX) == i64::MAX);
    }
}
