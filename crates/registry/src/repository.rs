use super::*;
use std::sync::Arc;
use tokio_postgres::Client;
use tokio_postgres::Row;
use tpr_core::ID;
use tpr_pg::*;

/// Column list shared by every statement so hydration stays in one place.
const COLUMNS: &str =
    "id, name, first_names, neighborhood, age_group, profession, statut, phone, email";

/// Repository trait for member registry database operations.
/// Abstracts SQL from the handler module.
#[allow(async_fn_in_trait)]
pub trait MemberRepository {
    async fn list(
        &self,
        sort: SortColumn,
        direction: SortDirection,
        search: Option<&str>,
    ) -> Result<Vec<Member>, PgErr>;
    async fn create(&self, member: &NewMember) -> Result<Member, PgErr>;
    async fn update(&self, id: ID<Member>, patch: &MemberPatch) -> Result<Option<Member>, PgErr>;
    async fn delete(&self, id: ID<Member>) -> Result<bool, PgErr>;
}

/// Assembles the listing statement. Sort column and direction come from
/// closed enums; the only bound parameter is the escaped search pattern.
fn list_statement(sort: SortColumn, direction: SortDirection) -> String {
    format!(
        "SELECT {COLUMNS} FROM {MEMBERS} \
         WHERE (name ILIKE $1 OR first_names ILIKE $1) \
         ORDER BY {} {}, id ASC",
        sort.column(),
        direction.sql(),
    )
}

fn hydrate(row: &Row) -> Member {
    Member {
        id: ID::from(row.get::<_, i64>(0)),
        name: row.get(1),
        first_names: row.get(2),
        neighborhood: row.get(3),
        age_group: row.get(4),
        profession: row.get(5),
        statut: row.get(6),
        phone: row.get(7),
        email: row.get(8),
    }
}

impl MemberRepository for Arc<Client> {
    async fn list(
        &self,
        sort: SortColumn,
        direction: SortDirection,
        search: Option<&str>,
    ) -> Result<Vec<Member>, PgErr> {
        let pattern = search.map(like_pattern).unwrap_or_else(|| "%".to_string());
        let statement = list_statement(sort, direction);
        self.query(&statement, &[&pattern])
            .await
            .map(|rows| rows.iter().map(hydrate).collect())
    }

    async fn create(&self, member: &NewMember) -> Result<Member, PgErr> {
        self.query_one(
            const_format::concatcp!(
                "INSERT INTO ",
                MEMBERS,
                " (name, first_names, neighborhood, age_group, profession, statut, phone, email) \
                 VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING ",
                COLUMNS
            ),
            &[
                &member.name,
                &member.first_names,
                &member.neighborhood,
                &member.age_group.as_str(),
                &member.profession,
                &member.statut,
                &member.phone,
                &member.email,
            ],
        )
        .await
        .map(|ref row| hydrate(row))
    }

    async fn update(&self, id: ID<Member>, patch: &MemberPatch) -> Result<Option<Member>, PgErr> {
        self.query_opt(
            const_format::concatcp!(
                "UPDATE ",
                MEMBERS,
                " SET name         = COALESCE($2, name), \
                      first_names  = COALESCE($3, first_names), \
                      neighborhood = COALESCE($4, neighborhood), \
                      age_group    = COALESCE($5, age_group), \
                      profession   = COALESCE($6, profession), \
                      statut       = COALESCE($7, statut), \
                      phone        = COALESCE($8, phone), \
                      email        = COALESCE($9, email) \
                 WHERE id = $1 RETURNING ",
                COLUMNS
            ),
            &[
                &id.inner(),
                &patch.name,
                &patch.first_names,
                &patch.neighborhood,
                &patch.age_group.map(|group| group.as_str()),
                &patch.profession,
                &patch.statut,
                &patch.phone,
                &patch.email,
            ],
        )
        .await
        .map(|opt| opt.as_ref().map(hydrate))
    }

    async fn delete(&self, id: ID<Member>) -> Result<bool, PgErr> {
        self.execute(
            const_format::concatcp!("DELETE FROM ", MEMBERS, " WHERE id = $1"),
            &[&id.inner()],
        )
        .await
        .map(|rows| rows > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_orders_by_requested_column_and_direction() {
        let statement = list_statement(SortColumn::Neighborhood, SortDirection::Desc);
        assert!(statement.ends_with("ORDER BY neighborhood DESC, id ASC"));
    }

    #[test]
    fn listing_defaults_follow_the_parsers() {
        let statement = list_statement(
            SortColumn::parse(Some("id; DROP TABLE members")),
            SortDirection::parse(None),
        );
        assert!(statement.ends_with("ORDER BY name ASC, id ASC"));
        assert!(!statement.contains("DROP"));
    }

    #[test]
    fn search_term_stays_a_bound_parameter() {
        let statement = list_statement(SortColumn::Name, SortDirection::Asc);
        assert!(statement.contains("name ILIKE $1 OR first_names ILIKE $1"));
        assert!(!statement.contains("$2"));
    }
}
