use tpr_core::ID;
use tpr_core::Unique;

/// A registered individual tracked by the church administration.
///
/// Duplicate names are permitted; only the id is unique. The age group is
/// enforced against [`AgeGroup`] at the write boundary and stored as text.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Member {
    pub id: ID<Self>,
    pub name: String,
    pub first_names: String,
    pub neighborhood: Option<String>,
    pub age_group: String,
    pub profession: String,
    pub statut: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl Unique for Member {
    fn id(&self) -> ID<Self> {
        self.id
    }
}

/// The fixed age-group enumeration. Free-text age input is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeGroup {
    Child,
    Teen,
    YoungAdult,
    Adult,
    Mature,
    Senior,
}

impl AgeGroup {
    pub const ALL: [Self; 6] = [
        Self::Child,
        Self::Teen,
        Self::YoungAdult,
        Self::Adult,
        Self::Mature,
        Self::Senior,
    ];
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Child => "0-12",
            Self::Teen => "13-17",
            Self::YoungAdult => "18-25",
            Self::Adult => "26-35",
            Self::Mature => "36-50",
            Self::Senior => "51+",
        }
    }
}

impl TryFrom<&str> for AgeGroup {
    type Error = ();
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|group| group.as_str() == s)
            .ok_or(())
    }
}

impl std::fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

mod schema {
    use super::*;
    use tpr_pg::*;

    impl Schema for Member {
        fn name() -> &'static str {
            MEMBERS
        }
        fn creates() -> &'static str {
            const_format::concatcp!(
                "CREATE TABLE IF NOT EXISTS ",
                MEMBERS,
                " (
                    id              BIGSERIAL PRIMARY KEY,
                    name            TEXT NOT NULL,
                    first_names     TEXT NOT NULL,
                    neighborhood    TEXT,
                    age_group       TEXT NOT NULL,
                    profession      TEXT NOT NULL,
                    statut          TEXT,
                    phone           TEXT,
                    email           TEXT
                );"
            )
        }
        fn indices() -> &'static str {
            const_format::concatcp!(
                "CREATE INDEX IF NOT EXISTS idx_members_name ON ",
                MEMBERS,
                " (name);
                 CREATE INDEX IF NOT EXISTS idx_members_first_names ON ",
                MEMBERS,
                " (first_names);"
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_labels() {
        for group in AgeGroup::ALL {
            assert!(AgeGroup::try_from(group.as_str()) == Ok(group));
        }
    }

    #[test]
    fn rejects_free_text() {
        assert!(AgeGroup::try_from("twenties").is_err());
        assert!(AgeGroup::try_from("").is_err());
    }
}
