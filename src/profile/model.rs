//! Profile record types.
//!
//! `ProfileDraft` mirrors the persisted JSON where any key may be missing or
//! `null`. `ProfileRecord` is what the renderer consumes: required fields are
//! guaranteed present once a draft has been converted.

use super::error::ProfileError;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileRecord {
    pub name: String,
    pub headline: String,
    pub summary: String,
    pub contact: Contact,
    pub specialties: Vec<String>,
    pub experience: Vec<ExperienceEntry>,
    pub closing: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub email: String,
    pub phone: String,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperienceEntry {
    pub role: String,
    pub company: String,
    pub period: String,
    pub location: Option<String>,
    pub details: String,
}

impl ProfileRecord {
    /// Parses and validates a JSON document held in memory.
    pub fn from_json_str(data: &str) -> Result<Self, ProfileError> {
        parse_profile(data.as_bytes(), "<inline>")
    }
}

impl ExperienceEntry {
    pub fn location_or_empty(&self) -> &str {
        self.location.as_deref().unwrap_or_default()
    }
}

pub(crate) fn parse_profile(data: &[u8], origin: &str) -> Result<ProfileRecord, ProfileError> {
    let draft: ProfileDraft =
        serde_json::from_slice(data).map_err(|source| ProfileError::Malformed {
            origin: origin.to_string(),
            source,
        })?;
    ProfileRecord::try_from(draft)
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileDraft {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub headline: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub contact: Option<ContactDraft>,
    #[serde(default)]
    pub specialties: Option<Vec<String>>,
    #[serde(default)]
    pub experience: Option<Vec<ExperienceDraft>>,
    #[serde(default)]
    pub closing: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactDraft {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExperienceDraft {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub period: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
}

fn required(value: Option<String>, field: &str) -> Result<String, ProfileError> {
    value.ok_or_else(|| ProfileError::missing(field))
}

impl TryFrom<ProfileDraft> for ProfileRecord {
    type Error = ProfileError;

    fn try_from(draft: ProfileDraft) -> Result<Self, Self::Error> {
        let name = required(draft.name, "name")?;
        let headline = required(draft.headline, "headline")?;
        let summary = required(draft.summary, "summary")?;
        let contact = draft.contact.unwrap_or_default();
        let contact = Contact {
            email: required(contact.email, "contact.email")?,
            phone: required(contact.phone, "contact.phone")?,
            location: required(contact.location, "contact.location")?,
        };
        let experience = draft
            .experience
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .map(|(index, entry)| entry.into_entry(index))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            name,
            headline,
            summary,
            contact,
            specialties: draft.specialties.unwrap_or_default(),
            experience,
            closing: draft.closing,
        })
    }
}

impl ExperienceDraft {
    fn into_entry(self, index: usize) -> Result<ExperienceEntry, ProfileError> {
        let field = |name: &str| format!("experience[{index}].{name}");
        Ok(ExperienceEntry {
            role: required(self.role, &field("role"))?,
            company: required(self.company, &field("company"))?,
            period: required(self.period, &field("period"))?,
            location: self.location,
            details: required(self.details, &field("details"))?,
        })
    }
}
