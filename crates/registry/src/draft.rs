use super::*;

/// Incoming member fields, straight off the wire. Nothing is trusted
/// until [`MemberDraft::validate`] or [`MemberDraft::patch`] has run.
#[derive(Debug, Default, serde::Deserialize)]
pub struct MemberDraft {
    pub name: Option<String>,
    pub first_names: Option<String>,
    pub neighborhood: Option<String>,
    pub age_group: Option<String>,
    pub profession: Option<String>,
    pub statut: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

/// A fully validated insert: required fields present and non-blank,
/// age group within the enumeration, neighborhood title-cased.
#[derive(Debug)]
pub struct NewMember {
    pub name: String,
    pub first_names: String,
    pub neighborhood: Option<String>,
    pub age_group: AgeGroup,
    pub profession: String,
    pub statut: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

/// A validated partial update. Absent fields keep their stored values.
#[derive(Debug, Default)]
pub struct MemberPatch {
    pub name: Option<String>,
    pub first_names: Option<String>,
    pub neighborhood: Option<String>,
    pub age_group: Option<AgeGroup>,
    pub profession: Option<String>,
    pub statut: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

fn required(field: Option<&String>, message: &'static str) -> Result<String, &'static str> {
    field
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .ok_or(message)
}

fn optional(field: Option<&String>) -> Option<String> {
    field
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn age_group(label: &str) -> Result<AgeGroup, &'static str> {
    AgeGroup::try_from(label.trim()).map_err(|_| "age_group is not a recognized bracket")
}

impl MemberDraft {
    /// Validates a create. Every required field must survive trimming.
    pub fn validate(&self) -> Result<NewMember, &'static str> {
        Ok(NewMember {
            name: required(self.name.as_ref(), "name is required")?,
            first_names: required(self.first_names.as_ref(), "first_names is required")?,
            neighborhood: optional(self.neighborhood.as_ref()).map(|n| title_case(&n)),
            age_group: age_group(&required(self.age_group.as_ref(), "age_group is required")?)?,
            profession: required(self.profession.as_ref(), "profession is required")?,
            statut: optional(self.statut.as_ref()),
            phone: optional(self.phone.as_ref()),
            email: optional(self.email.as_ref()),
        })
    }

    /// Validates an update. Provided required fields must still be
    /// non-blank; fields left out remain untouched.
    pub fn patch(&self) -> Result<MemberPatch, &'static str> {
        Ok(MemberPatch {
            name: self
                .name
                .as_ref()
                .map(|_| required(self.name.as_ref(), "name must not be blank"))
                .transpose()?,
            first_names: self
                .first_names
                .as_ref()
                .map(|_| required(self.first_names.as_ref(), "first_names must not be blank"))
                .transpose()?,
            neighborhood: optional(self.neighborhood.as_ref()).map(|n| title_case(&n)),
            age_group: self
                .age_group
                .as_ref()
                .map(|label| age_group(label))
                .transpose()?,
            profession: self
                .profession
                .as_ref()
                .map(|_| required(self.profession.as_ref(), "profession must not be blank"))
                .transpose()?,
            statut: optional(self.statut.as_ref()),
            phone: optional(self.phone.as_ref()),
            email: optional(self.email.as_ref()),
        })
    }
}

/// Normalizes a neighborhood to title case, keeping hyphenated and
/// apostrophized compounds intact ("haie vive" -> "Haie Vive").
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut boundary = true;
    for c in input.trim().chars() {
        if c.is_whitespace() || c == '-' || c == '\'' {
            boundary = true;
            out.push(c);
        } else if boundary {
            out.extend(c.to_uppercase());
            boundary = false;
        } else {
            out.extend(c.to_lowercase());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full() -> MemberDraft {
        MemberDraft {
            name: Some("Doe".to_string()),
            first_names: Some("Jane".to_string()),
            neighborhood: Some("haie vive".to_string()),
            age_group: Some("18-25".to_string()),
            profession: Some("Teacher".to_string()),
            statut: None,
            phone: Some("  ".to_string()),
            email: Some("jane@example.org".to_string()),
        }
    }

    #[test]
    fn valid_draft_passes() {
        let member = full().validate().unwrap();
        assert!(member.name == "Doe");
        assert!(member.neighborhood.as_deref() == Some("Haie Vive"));
        assert!(member.age_group == AgeGroup::YoungAdult);
        assert!(member.phone.is_none());
    }

    #[test]
    fn blank_surname_rejected() {
        let mut draft = full();
        draft.name = Some("   ".to_string());
        assert!(draft.validate().is_err());
    }

    #[test]
    fn missing_profession_rejected() {
        let mut draft = full();
        draft.profession = None;
        assert!(draft.validate().is_err());
    }

    #[test]
    fn unknown_age_group_rejected() {
        let mut draft = full();
        draft.age_group = Some("adultish".to_string());
        assert!(draft.validate().is_err());
    }

    #[test]
    fn patch_keeps_absent_fields() {
        let draft = MemberDraft {
            profession: Some("Nurse".to_string()),
            ..Default::default()
        };
        let patch = draft.patch().unwrap();
        assert!(patch.name.is_none());
        assert!(patch.profession.as_deref() == Some("Nurse"));
    }

    #[test]
    fn patch_rejects_blank_required_field() {
        let draft = MemberDraft {
            name: Some("".to_string()),
            ..Default::default()
        };
        assert!(draft.patch().is_err());
    }

    #[test]
    fn title_case_compounds() {
        assert!(title_case("saint-jean d'arc") == "Saint-Jean D'Arc");
        assert!(title_case("  AKPAKPA ") == "Akpakpa");
    }
}
