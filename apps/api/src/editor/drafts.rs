use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::editor::collection::{Collection, Record};
use crate::editor::tags::{TagChange, TagList};
use crate::models::education::{CertificationEntry, EducationEntry};
use crate::models::profile::{AboutInfo, PersonalInfo};
use crate::models::project::{Project, ProjectStatus, ProjectTab, Technology};
use crate::notify::Notification;
use crate::validation::{schemas, validate, FieldErrors, Schema, ValidatedForm};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DraftPhase {
    Empty,
    Editing,
}

/// A form bound to a schema. `check` must pass before `build` is called.
pub trait FormDraft: Default + PartialEq {
    type Record;
    /// Extra input that is not part of the form, e.g. the active tab.
    type Target: Copy;

    const SCHEMA: Schema;

    fn fields(&self) -> Vec<(&'static str, &str)>;

    fn check(&self) -> Result<ValidatedForm, FieldErrors> {
        validate(&Self::SCHEMA, self.fields())
    }

    fn build(&self, form: &ValidatedForm, target: Self::Target) -> Self::Record;

    fn success(target: Self::Target) -> Notification;

    fn phase(&self) -> DraftPhase {
        if *self == Self::default() {
            DraftPhase::Empty
        } else {
            DraftPhase::Editing
        }
    }
}

/// The pending draft for one collection-backed form.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CollectionEditor<D> {
    draft: D,
}

impl<D> CollectionEditor<D>
where
    D: FormDraft,
    D::Record: Clone,
{
    pub fn draft(&self) -> &D {
        &self.draft
    }

    pub fn edit(&mut self, draft: D) {
        self.draft = draft;
    }

    pub fn phase(&self) -> DraftPhase {
        self.draft.phase()
    }

    /// Validates the draft and, on success, appends the built record and
    /// resets the draft. On failure neither the draft nor `collection` change.
    pub fn submit_draft(
        &mut self,
        target: D::Target,
        collection: &mut Collection<D::Record>,
    ) -> Result<(D::Record, Notification), FieldErrors>
    where
        D::Record: Record,
    {
        let form = self.draft.check()?;
        let record = self.draft.build(&form, target);
        collection.push(record.clone());
        self.draft = D::default();
        Ok((record, D::success(target)))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Profile forms
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalInfoDraft {
    pub name: String,
    pub title: String,
    pub description: String,
    pub location: String,
    pub age: String,
    pub email: String,
    pub phone: String,
    pub github: String,
    pub linkedin: String,
}

impl FormDraft for PersonalInfoDraft {
    type Record = PersonalInfo;
    type Target = ();

    const SCHEMA: Schema = schemas::PERSONAL_INFO;

    fn fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("name", self.name.as_str()),
            ("title", self.title.as_str()),
            ("description", self.description.as_str()),
            ("location", self.location.as_str()),
            ("age", self.age.as_str()),
            ("email", self.email.as_str()),
            ("phone", self.phone.as_str()),
            ("github", self.github.as_str()),
            ("linkedin", self.linkedin.as_str()),
        ]
    }

    fn build(&self, form: &ValidatedForm, _: ()) -> PersonalInfo {
        PersonalInfo::from_form(form)
    }

    fn success(_: ()) -> Notification {
        Notification::success(
            "Personal Information Updated",
            "Your personal information has been successfully updated.",
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AboutDraft {
    pub bio: String,
    pub gpa: String,
    pub projects_completed: String,
}

impl FormDraft for AboutDraft {
    type Record = AboutInfo;
    type Target = ();

    const SCHEMA: Schema = schemas::ABOUT;

    fn fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("bio", self.bio.as_str()),
            ("gpa", self.gpa.as_str()),
            ("projects_completed", self.projects_completed.as_str()),
        ]
    }

    fn build(&self, form: &ValidatedForm, _: ()) -> AboutInfo {
        AboutInfo::from_form(form)
    }

    fn success(_: ()) -> Notification {
        Notification::success(
            "About Section Updated",
            "Your about section has been successfully updated.",
        )
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Projects
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechnologyLink {
    pub label: String,
    pub link: String,
}

/// Technologies arrive either as comma-separated text ("Go, gRPC") or as the
/// add-project screen's label/link pairs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TechnologiesInput {
    Text(String),
    Linked(Vec<TechnologyLink>),
}

impl Default for TechnologiesInput {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl TechnologiesInput {
    fn check(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();
        if let Self::Linked(pairs) = self {
            for (i, pair) in pairs.iter().enumerate() {
                let fields = [("label", pair.label.as_str()), ("link", pair.link.as_str())];
                if let Err(e) = validate(&schemas::TECHNOLOGY_LINK, fields) {
                    for (field, message) in e.0 {
                        errors.0.insert(format!("technologies.{i}.{field}"), message);
                    }
                }
            }
        }
        if self.resolve().is_empty() {
            errors.0.insert(
                "technologies".to_string(),
                "At least one technology is required".to_string(),
            );
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Trimmed, blank-free, unique by label; first occurrence wins.
    pub fn resolve(&self) -> Vec<Technology> {
        match self {
            Self::Text(text) => text
                .split(',')
                .collect::<TagList>()
                .into_vec()
                .into_iter()
                .map(|label| Technology { label, link: None })
                .collect(),
            Self::Linked(pairs) => {
                let mut labels = TagList::new();
                pairs
                    .iter()
                    .filter(|p| labels.add(&p.label) == TagChange::Added)
                    .map(|p| Technology {
                        label: p.label.trim().to_string(),
                        link: Some(p.link.trim().to_string()),
                    })
                    .collect()
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub technologies: TechnologiesInput,
    pub category: String,
    pub date: String,
    pub github_url: String,
    pub live_url: String,
    pub read_more_url: String,
    /// Empty means the tab's default status.
    pub status: String,
}

impl FormDraft for ProjectDraft {
    type Record = Project;
    type Target = ProjectTab;

    const SCHEMA: Schema = schemas::PROJECT;

    fn fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("title", self.title.as_str()),
            ("description", self.description.as_str()),
            ("category", self.category.as_str()),
            ("date", self.date.as_str()),
            ("github_url", self.github_url.as_str()),
            ("live_url", self.live_url.as_str()),
            ("read_more_url", self.read_more_url.as_str()),
            ("status", self.status.as_str()),
        ]
    }

    fn check(&self) -> Result<ValidatedForm, FieldErrors> {
        let form = validate(&Self::SCHEMA, self.fields());
        match (form, self.technologies.check()) {
            (Ok(form), Ok(())) => Ok(form),
            (Err(mut a), Err(b)) => {
                a.0.extend(b.0);
                Err(a)
            }
            (Err(e), _) | (_, Err(e)) => Err(e),
        }
    }

    fn build(&self, form: &ValidatedForm, tab: ProjectTab) -> Project {
        let status = form
            .optional("status")
            .and_then(|s| ProjectStatus::parse(&s))
            .unwrap_or_else(|| tab.default_status());
        Project {
            id: Uuid::new_v4(),
            title: form.value("title"),
            description: form.value("description"),
            technologies: self.technologies.resolve(),
            category: form.optional("category"),
            date: form.optional("date"),
            github_url: form.optional("github_url"),
            live_url: form.optional("live_url"),
            read_more_url: form.optional("read_more_url"),
            status,
            created_at: Utc::now(),
        }
    }

    fn success(tab: ProjectTab) -> Notification {
        let description = match tab {
            ProjectTab::Featured => "Project added successfully!",
            ProjectTab::Upcoming => "Upcoming project added successfully!",
        };
        Notification::success("Success", description)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Education & certifications
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationDraft {
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub start_year: String,
    pub end_year: String,
    pub gpa: String,
    pub description: String,
    pub achievements: Vec<String>,
}

impl FormDraft for EducationDraft {
    type Record = EducationEntry;
    type Target = ();

    const SCHEMA: Schema = schemas::EDUCATION;

    fn fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("institution", self.institution.as_str()),
            ("degree", self.degree.as_str()),
            ("field", self.field.as_str()),
            ("start_year", self.start_year.as_str()),
            ("end_year", self.end_year.as_str()),
            ("gpa", self.gpa.as_str()),
            ("description", self.description.as_str()),
        ]
    }

    fn build(&self, form: &ValidatedForm, _: ()) -> EducationEntry {
        EducationEntry {
            id: Uuid::new_v4(),
            institution: form.value("institution"),
            degree: form.value("degree"),
            field: form.value("field"),
            start_year: form.value("start_year"),
            end_year: form.value("end_year"),
            gpa: form.optional("gpa"),
            description: form.optional("description"),
            achievements: self.achievements.iter().collect::<TagList>().into_vec(),
            created_at: Utc::now(),
        }
    }

    fn success(_: ()) -> Notification {
        Notification::success(
            "Education Added",
            "Your education entry has been successfully added.",
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CertificationDraft {
    pub name: String,
    pub issuer: String,
    pub issue_date: String,
    pub expiry_date: String,
    pub credential_id: String,
    pub url: String,
}

impl FormDraft for CertificationDraft {
    type Record = CertificationEntry;
    type Target = ();

    const SCHEMA: Schema = schemas::CERTIFICATION;

    fn fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("name", self.name.as_str()),
            ("issuer", self.issuer.as_str()),
            ("issue_date", self.issue_date.as_str()),
            ("expiry_date", self.expiry_date.as_str()),
            ("credential_id", self.credential_id.as_str()),
            ("url", self.url.as_str()),
        ]
    }

    fn build(&self, form: &ValidatedForm, _: ()) -> CertificationEntry {
        CertificationEntry {
            id: Uuid::new_v4(),
            name: form.value("name"),
            issuer: form.value("issuer"),
            issue_date: form.value("issue_date"),
            expiry_date: form.optional("expiry_date"),
            credential_id: form.optional("credential_id"),
            url: form.optional("url"),
            created_at: Utc::now(),
        }
    }

    fn success(_: ()) -> Notification {
        Notification::success(
            "Certification Added",
            "Your certification has been successfully added.",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(title: &str, technologies: TechnologiesInput) -> ProjectDraft {
        ProjectDraft {
            title: title.to_string(),
            description: "A description with at least twenty chars".to_string(),
            technologies,
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_project_commits_and_resets_draft() {
        let mut editor = CollectionEditor::<ProjectDraft>::default();
        let mut featured = Collection::new();
        editor.edit(project("Test", TechnologiesInput::Text("Go".to_string())));
        assert_eq!(editor.phase(), DraftPhase::Editing);

        let (record, note) = editor
            .submit_draft(ProjectTab::Featured, &mut featured)
            .unwrap();

        assert_eq!(featured.len(), 1);
        assert_eq!(record.title, "Test");
        assert_eq!(record.status, ProjectStatus::Completed);
        assert_eq!(
            record.technologies,
            vec![Technology {
                label: "Go".to_string(),
                link: None
            }]
        );
        assert_eq!(note.description, "Project added successfully!");
        assert_eq!(*editor.draft(), ProjectDraft::default());
        assert_eq!(editor.phase(), DraftPhase::Empty);
    }

    #[test]
    fn test_invalid_project_keeps_draft_and_collection() {
        let mut editor = CollectionEditor::<ProjectDraft>::default();
        let mut featured = Collection::new();
        let draft = project("Go", TechnologiesInput::default());
        editor.edit(draft.clone());

        let errs = editor
            .submit_draft(ProjectTab::Featured, &mut featured)
            .unwrap_err();

        assert_eq!(errs.get("title"), Some("Title must be at least 3 characters"));
        assert!(featured.is_empty());
        assert_eq!(*editor.draft(), draft);
    }

    #[test]
    fn test_upcoming_project_defaults_to_planning() {
        let mut editor = CollectionEditor::<ProjectDraft>::default();
        let mut upcoming = Collection::new();
        editor.edit(project("LLM Agent", TechnologiesInput::Text("Go".to_string())));
        let (record, _) = editor.submit_draft(ProjectTab::Upcoming, &mut upcoming).unwrap();
        assert_eq!(record.status, ProjectStatus::Planning);
    }

    #[test]
    fn test_explicit_status_wins() {
        let mut draft = project("LLM Agent", TechnologiesInput::Text("Go".to_string()));
        draft.status = "on_hold".to_string();
        let form = draft.check().unwrap();
        assert_eq!(draft.build(&form, ProjectTab::Upcoming).status, ProjectStatus::OnHold);
    }

    #[test]
    fn test_project_requires_a_technology() {
        let mut editor = CollectionEditor::<ProjectDraft>::default();
        let mut featured = Collection::new();
        for technologies in [
            TechnologiesInput::default(),
            TechnologiesInput::Text(" , ,".to_string()),
            TechnologiesInput::Linked(Vec::new()),
        ] {
            editor.edit(project("Test", technologies));
            let errs = editor
                .submit_draft(ProjectTab::Featured, &mut featured)
                .unwrap_err();
            assert_eq!(
                errs.get("technologies"),
                Some("At least one technology is required")
            );
            assert_eq!(errs.len(), 1);
        }
        assert!(featured.is_empty());
    }

    #[test]
    fn test_text_technologies_split_and_dedupe() {
        let input = TechnologiesInput::Text("Python, Pandas,, Python ,XGBoost".to_string());
        let labels: Vec<_> = input.resolve().into_iter().map(|t| t.label).collect();
        assert_eq!(labels, vec!["Python", "Pandas", "XGBoost"]);
    }

    #[test]
    fn test_linked_technologies_require_valid_links() {
        let draft = project(
            "Neural Network Visualization Tool",
            TechnologiesInput::Linked(vec![
                TechnologyLink {
                    label: "React".to_string(),
                    link: "https://react.dev".to_string(),
                },
                TechnologyLink {
                    label: "D3.js".to_string(),
                    link: "d3js".to_string(),
                },
            ]),
        );
        let errs = draft.check().unwrap_err();
        assert_eq!(
            errs.get("technologies.1.link"),
            Some("Technology link must be a valid URL")
        );
        assert_eq!(errs.len(), 1);
    }

    #[test]
    fn test_project_errors_merge_schema_and_technologies() {
        let draft = ProjectDraft {
            technologies: TechnologiesInput::Linked(vec![TechnologyLink {
                label: " ".to_string(),
                link: "https://react.dev".to_string(),
            }]),
            ..Default::default()
        };
        let errs = draft.check().unwrap_err();
        assert!(errs.get("title").is_some());
        assert!(errs.get("description").is_some());
        assert!(errs.get("technologies.0.label").is_some());
    }

    #[test]
    fn test_technologies_deserialize_both_shapes() {
        let text: ProjectDraft =
            serde_json::from_str(r#"{"title":"Test","technologies":"Go"}"#).unwrap();
        assert_eq!(text.technologies, TechnologiesInput::Text("Go".to_string()));

        let linked: ProjectDraft = serde_json::from_str(
            r#"{"technologies":[{"label":"React","link":"https://react.dev"}]}"#,
        )
        .unwrap();
        assert!(matches!(linked.technologies, TechnologiesInput::Linked(ref v) if v.len() == 1));
    }

    #[test]
    fn test_education_years_round_trip_verbatim() {
        let mut editor = CollectionEditor::<EducationDraft>::default();
        let mut education = Collection::new();
        editor.edit(EducationDraft {
            institution: "University of California, Berkeley".to_string(),
            degree: "Bachelor of Engineering".to_string(),
            field: "Data Science".to_string(),
            start_year: "2022".to_string(),
            end_year: "2026".to_string(),
            achievements: vec![
                "Dean's List".to_string(),
                " ".to_string(),
                "Dean's List".to_string(),
            ],
            ..Default::default()
        });

        let (entry, _) = editor.submit_draft((), &mut education).unwrap();

        assert_eq!(entry.start_year, "2022");
        assert_eq!(entry.end_year, "2026");
        assert_eq!(entry.gpa, None);
        assert_eq!(entry.achievements, vec!["Dean's List".to_string()]);
    }

    #[test]
    fn test_education_short_year_rejected() {
        let draft = EducationDraft {
            institution: "MIT".to_string(),
            degree: "BSc".to_string(),
            field: "Math".to_string(),
            start_year: "22".to_string(),
            end_year: "2026".to_string(),
            ..Default::default()
        };
        let errs = draft.check().unwrap_err();
        assert_eq!(
            errs.get("start_year"),
            Some("Start year must be at least 4 characters")
        );
    }

    #[test]
    fn test_education_non_digit_years_rejected() {
        let draft = EducationDraft {
            institution: "MIT".to_string(),
            degree: "BSc".to_string(),
            field: "Math".to_string(),
            start_year: "abcd".to_string(),
            end_year: "20xx".to_string(),
            ..Default::default()
        };
        let errs = draft.check().unwrap_err();
        assert_eq!(errs.get("start_year"), Some("Start year must be a year"));
        assert_eq!(errs.get("end_year"), Some("End year must be a year"));
        assert_eq!(errs.len(), 2);
    }

    #[test]
    fn test_certification_builds_optional_fields() {
        let draft = CertificationDraft {
            name: "AWS Cloud Practitioner".to_string(),
            issuer: "Amazon Web Services".to_string(),
            issue_date: "June 2024".to_string(),
            url: "https://aws.amazon.com/certification/".to_string(),
            ..Default::default()
        };
        let form = draft.check().unwrap();
        let cert = draft.build(&form, ());
        assert_eq!(cert.expiry_date, None);
        assert_eq!(
            cert.url.as_deref(),
            Some("https://aws.amazon.com/certification/")
        );
    }
}
