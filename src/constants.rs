use crate::entities::resume::ResumeTemplate;

/// File name of the single-key collection store.
pub const STORE_FILE_NAME: &str = "resume_builder_data.json";

/// Id prefix for a client-only draft that has not been persisted yet.
pub const DRAFT_ID_PREFIX: &str = "temp-";

/// Title given to a fresh draft résumé.
pub const DEFAULT_RESUME_TITLE: &str = "Untitled Resume";

/// Suffix appended to the title of a duplicated résumé.
pub const COPY_TITLE_SUFFIX: &str = " (Copy)";

#[derive(Debug, Clone, Copy)]
pub struct TemplateInfo {
    pub id: ResumeTemplate,
    pub name: &'static str,
    pub description: &'static str,
}

/// Catalog shown by the template picker.
pub const RESUME_TEMPLATES: [TemplateInfo; 4] = [
    TemplateInfo {
        id: ResumeTemplate::Modern,
        name: "Modern",
        description: "Clean and contemporary design with a focus on readability",
    },
    TemplateInfo {
        id: ResumeTemplate::Classic,
        name: "Classic",
        description: "Traditional resume layout favored by established industries",
    },
    TemplateInfo {
        id: ResumeTemplate::Minimal,
        name: "Minimal",
        description: "Simplified design that puts content first",
    },
    TemplateInfo {
        id: ResumeTemplate::Creative,
        name: "Creative",
        description: "Bold design for creative industries and positions",
    },
];
