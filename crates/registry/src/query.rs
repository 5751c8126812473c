/// Allow-listed sort columns for the member listing. Anything not on the
/// list silently falls back to the default rather than reaching the SQL
/// text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Name,
    FirstNames,
    Neighborhood,
    AgeGroup,
    Profession,
    Statut,
}

impl SortColumn {
    pub fn column(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::FirstNames => "first_names",
            Self::Neighborhood => "neighborhood",
            Self::AgeGroup => "age_group",
            Self::Profession => "profession",
            Self::Statut => "statut",
        }
    }
    pub fn parse(input: Option<&str>) -> Self {
        match input {
            Some("first_names") => Self::FirstNames,
            Some("neighborhood") => Self::Neighborhood,
            Some("age_group") => Self::AgeGroup,
            Some("profession") => Self::Profession,
            Some("statut") => Self::Statut,
            _ => Self::Name,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn sql(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
    pub fn parse(input: Option<&str>) -> Self {
        match input {
            Some("desc") => Self::Desc,
            _ => Self::Asc,
        }
    }
}

/// Query parameters of GET /api/admin/members, named as the dashboard
/// front-end sends them.
#[derive(Debug, Default, serde::Deserialize)]
pub struct ListParams {
    #[serde(rename = "sortColumn")]
    pub sort_column: Option<String>,
    #[serde(rename = "sortDirection")]
    pub sort_direction: Option<String>,
    #[serde(rename = "searchQuery")]
    pub search_query: Option<String>,
}

impl ListParams {
    pub fn sort(&self) -> SortColumn {
        SortColumn::parse(self.sort_column.as_deref())
    }
    pub fn direction(&self) -> SortDirection {
        SortDirection::parse(self.sort_direction.as_deref())
    }
    /// An empty or whitespace query means no filter at all.
    pub fn search(&self) -> Option<&str> {
        self.search_query
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_column_falls_back_to_name() {
        assert!(SortColumn::parse(Some("id; DROP TABLE members")) == SortColumn::Name);
        assert!(SortColumn::parse(None) == SortColumn::Name);
    }

    #[test]
    fn direction_defaults_to_asc() {
        assert!(SortDirection::parse(Some("desc")) == SortDirection::Desc);
        assert!(SortDirection::parse(Some("sideways")) == SortDirection::Asc);
    }

    #[test]
    fn blank_search_is_no_filter() {
        let params = ListParams {
            search_query: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(params.search().is_none());
    }
}
