use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
    constants::{COPY_TITLE_SUFFIX, DEFAULT_RESUME_TITLE, DRAFT_ID_PREFIX},
    entities::{education::Education, experience::Experience, project::Project, skill::Skill},
    utils::id::generate_id,
};

// ───── Constants ──────────────────────────────────────────────────────
const MIN_TITLE_LENGTH: u64 = 1;

// ───── Persisted Models ──────────────────────────────────────────────

/// Contact block of a résumé. `linkedin` and `website` are optional and
/// excluded from completion scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    pub summary: String,
}

impl Default for PersonalInfo {
    fn default() -> Self {
        PersonalInfo {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone: String::new(),
            address: String::new(),
            linkedin: None,
            website: None,
            summary: String::new(),
        }
    }
}

/// Rendering template, persisted as its lowercase name
/// ("modern" | "classic" | "minimal" | "creative").
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum ResumeTemplate {
    #[default]
    #[display("modern")]
    Modern,
    #[display("classic")]
    Classic,
    #[display("minimal")]
    Minimal,
    #[display("creative")]
    Creative,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resume {
    pub id: String,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub template: ResumeTemplate,
    pub personal_info: PersonalInfo,
    pub education: Vec<Education>,
    pub experience: Vec<Experience>,
    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
}

impl Resume {
    /// Fresh unsaved skeleton with a client-only `temp-` id. Becomes
    /// persisted only through an explicit create.
    pub fn draft() -> Self {
        let now = Utc::now();
        Resume {
            id: format!("{}{}", DRAFT_ID_PREFIX, generate_id()),
            title: DEFAULT_RESUME_TITLE.to_string(),
            created_at: now,
            updated_at: now,
            template: ResumeTemplate::default(),
            personal_info: PersonalInfo::default(),
            education: Vec::new(),
            experience: Vec::new(),
            skills: Vec::new(),
            projects: Vec::new(),
        }
    }

    pub fn is_draft(&self) -> bool {
        self.id.starts_with(DRAFT_ID_PREFIX)
    }

    /// Shallow-merges a patch over this record and refreshes `updated_at`.
    /// `id` and `created_at` are not representable in the patch, so they
    /// cannot change here.
    pub fn apply_patch(&mut self, patch: ResumePatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(template) = patch.template {
            self.template = template;
        }
        if let Some(personal_info) = patch.personal_info {
            self.personal_info = personal_info;
        }
        if let Some(education) = patch.education {
            self.education = education;
        }
        if let Some(experience) = patch.experience {
            self.experience = experience;
        }
        if let Some(skills) = patch.skills {
            self.skills = skills;
        }
        if let Some(projects) = patch.projects {
            self.projects = projects;
        }
        self.updated_at = Utc::now();
    }

    /// Deep copy with a new id, fresh timestamps and a " (Copy)" title.
    /// Child entries keep their ids, matching the persisted-data format
    /// produced by earlier versions.
    pub fn duplicated(&self) -> Self {
        let now = Utc::now();
        Resume {
            id: generate_id(),
            title: format!("{}{}", self.title, COPY_TITLE_SUFFIX),
            created_at: now,
            updated_at: now,
            ..self.clone()
        }
    }
}

// ───── Request Models ────────────────────────────────────────────────

/// Create payload: a résumé minus the store-assigned id and timestamps.
///
/// `validate()` is an opt-in check for form-level callers; the store itself
/// persists payloads as given.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewResume {
    #[validate(length(min = MIN_TITLE_LENGTH))]
    pub title: String,
    #[serde(default)]
    pub template: ResumeTemplate,
    #[serde(default)]
    pub personal_info: PersonalInfo,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub projects: Vec<Project>,
}

impl NewResume {
    pub fn prepare_for_insert(self) -> Resume {
        let now = Utc::now();
        Resume {
            id: generate_id(),
            title: self.title,
            created_at: now,
            updated_at: now,
            template: self.template,
            personal_info: self.personal_info,
            education: self.education,
            experience: self.experience,
            skills: self.skills,
            projects: self.projects,
        }
    }
}

/// Partial-update payload. Absent fields keep their stored values; nested
/// sections are replaced wholesale when present. Unknown keys in incoming
/// JSON (including "id" and "createdAt") are dropped by serde.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ResumePatch {
    #[validate(length(min = MIN_TITLE_LENGTH))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<ResumeTemplate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personal_info: Option<PersonalInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub education: Option<Vec<Education>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<Vec<Experience>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<Skill>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projects: Option<Vec<Project>>,
}

impl ResumePatch {
    pub fn title(title: impl Into<String>) -> Self {
        ResumePatch {
            title: Some(title.into()),
            ..ResumePatch::default()
        }
    }
}
