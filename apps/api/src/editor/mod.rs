//! Profile editor: the in-memory form state behind the editing screens.
//!
//! Every mutation is synchronous. A submission either validates in full and
//! commits, or is rejected with per-field messages and changes nothing.

pub mod collection;
pub mod drafts;
pub mod error;
pub mod handlers;
pub mod tags;

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info};
use uuid::Uuid;

use crate::editor::collection::Collection;
use crate::editor::drafts::{
    AboutDraft, CertificationDraft, CollectionEditor, DraftPhase, EducationDraft, FormDraft,
    PersonalInfoDraft, ProjectDraft,
};
use crate::editor::error::EditorError;
use crate::editor::tags::{TagChange, TagKind, TagList};
use crate::models::education::{CertificationEntry, EducationEntry};
use crate::models::profile::{AboutInfo, PersonalInfo};
use crate::models::project::{Project, ProjectTab};
use crate::notify::{Notification, NotificationSink};

/// A committed change plus the toast announcing it.
#[derive(Debug, Clone, Serialize)]
pub struct Outcome<T> {
    pub value: T,
    pub notification: Notification,
}

#[derive(Debug, Clone, Serialize)]
pub struct TagLists {
    pub skills: Vec<String>,
    pub interests: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PendingDraft<D> {
    pub phase: DraftPhase,
    pub draft: D,
}

#[derive(Debug, Clone, Serialize)]
pub struct PendingDrafts {
    pub project: PendingDraft<ProjectDraft>,
    pub education: PendingDraft<EducationDraft>,
    pub certification: PendingDraft<CertificationDraft>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProfileSnapshot {
    pub personal: PersonalInfo,
    pub about: AboutInfo,
    pub skills: TagList,
    pub interests: TagList,
    pub featured_projects: Collection<Project>,
    pub upcoming_projects: Collection<Project>,
    pub education: Collection<EducationEntry>,
    pub certifications: Collection<CertificationEntry>,
    pub drafts: PendingDrafts,
}

pub struct PortfolioEditor {
    personal: PersonalInfo,
    about: AboutInfo,
    skills: TagList,
    interests: TagList,
    featured: Collection<Project>,
    upcoming: Collection<Project>,
    education: Collection<EducationEntry>,
    certifications: Collection<CertificationEntry>,
    project_draft: CollectionEditor<ProjectDraft>,
    education_draft: CollectionEditor<EducationDraft>,
    certification_draft: CollectionEditor<CertificationDraft>,
    sink: Arc<dyn NotificationSink>,
    toast_duration_ms: u64,
}

impl PortfolioEditor {
    pub fn empty(sink: Arc<dyn NotificationSink>) -> Self {
        Self {
            personal: PersonalInfo::default(),
            about: AboutInfo::default(),
            skills: TagList::new(),
            interests: TagList::new(),
            featured: Collection::new(),
            upcoming: Collection::new(),
            education: Collection::new(),
            certifications: Collection::new(),
            project_draft: CollectionEditor::default(),
            education_draft: CollectionEditor::default(),
            certification_draft: CollectionEditor::default(),
            sink,
            toast_duration_ms: Notification::DEFAULT_DURATION_MS,
        }
    }

    /// Starts from the demo profile the editing screen ships with.
    pub fn seeded(sink: Arc<dyn NotificationSink>) -> Self {
        let mut editor = Self::empty(sink);
        editor.personal = PersonalInfo {
            name: "Alex Chen".to_string(),
            title: "Data Science Student & Machine Learning Enthusiast".to_string(),
            description: "Third-year Computer Science Engineering student specializing in \
                Data Science. Passionate about turning data into insights and building \
                intelligent systems that solve real-world problems."
                .to_string(),
            location: "San Francisco, CA".to_string(),
            age: "21".to_string(),
            email: "alex.chen@email.com".to_string(),
            phone: Some("+1 (555) 123-4567".to_string()),
            github: Some("https://github.com/alexchen".to_string()),
            linkedin: Some("https://linkedin.com/in/alexchen".to_string()),
        };
        editor.about = AboutInfo {
            bio: "I'm a third-year Computer Science Engineering student with a specialization \
                in Data Science. My journey began with a curiosity about how data shapes our \
                world, and it has evolved into a passion for machine learning, statistical \
                analysis, and building predictive models."
                .to_string(),
            gpa: "3.8".to_string(),
            projects_completed: "15".to_string(),
        };
        editor.skills = ["Python", "R", "SQL", "Machine Learning"].into_iter().collect();
        editor.interests = ["Machine Learning", "Data Visualization", "Deep Learning"]
            .into_iter()
            .collect();
        editor
    }

    pub fn with_toast_duration(mut self, duration_ms: u64) -> Self {
        self.toast_duration_ms = duration_ms;
        self
    }

    fn announce(&self, notification: Notification) -> Notification {
        let notification = notification.with_duration(self.toast_duration_ms);
        self.sink.notify(&notification);
        notification
    }

    fn reject(&self, form: &'static str, errors: crate::validation::FieldErrors) -> EditorError {
        debug!(form, ?errors, "Submission rejected");
        let notification = self.announce(Notification::error("Please fix the highlighted fields"));
        EditorError::Invalid {
            form,
            errors,
            notification,
        }
    }

    // ── Single-record forms ────────────────────────────────────────────────

    pub fn update_personal(
        &mut self,
        draft: PersonalInfoDraft,
    ) -> Result<Outcome<PersonalInfo>, EditorError> {
        let form = draft
            .check()
            .map_err(|e| self.reject(PersonalInfoDraft::SCHEMA.form, e))?;
        self.personal = draft.build(&form, ());
        info!(name = %self.personal.name, "Personal info updated");
        Ok(Outcome {
            value: self.personal.clone(),
            notification: self.announce(PersonalInfoDraft::success(())),
        })
    }

    pub fn update_about(&mut self, draft: AboutDraft) -> Result<Outcome<AboutInfo>, EditorError> {
        let form = draft
            .check()
            .map_err(|e| self.reject(AboutDraft::SCHEMA.form, e))?;
        self.about = draft.build(&form, ());
        info!(gpa = %self.about.gpa, "About info updated");
        Ok(Outcome {
            value: self.about.clone(),
            notification: self.announce(AboutDraft::success(())),
        })
    }

    // ── Tag lists ──────────────────────────────────────────────────────────

    fn tags_mut(&mut self, kind: TagKind) -> &mut TagList {
        match kind {
            TagKind::Skills => &mut self.skills,
            TagKind::Interests => &mut self.interests,
        }
    }

    /// Blank and duplicate values are ignored without a notification.
    pub fn add_tag(&mut self, kind: TagKind, value: &str) -> TagChange {
        let change = self.tags_mut(kind).add(value);
        debug!(?kind, ?change, "Tag add");
        change
    }

    pub fn remove_tag(&mut self, kind: TagKind, value: &str) -> bool {
        self.tags_mut(kind).remove(value)
    }

    pub fn save_tags(&self) -> Outcome<TagLists> {
        let lists = self.tag_lists();
        info!(skills = ?lists.skills, interests = ?lists.interests, "Skills and interests saved");
        Outcome {
            value: lists,
            notification: self.announce(Notification::success(
                "Skills & Interests Updated",
                "Your skills and interests have been successfully updated.",
            )),
        }
    }

    pub fn tag_lists(&self) -> TagLists {
        TagLists {
            skills: self.skills.as_slice().to_vec(),
            interests: self.interests.as_slice().to_vec(),
        }
    }

    // ── Projects ───────────────────────────────────────────────────────────

    fn projects_mut(&mut self, tab: ProjectTab) -> &mut Collection<Project> {
        match tab {
            ProjectTab::Featured => &mut self.featured,
            ProjectTab::Upcoming => &mut self.upcoming,
        }
    }

    pub fn submit_project(
        &mut self,
        tab: ProjectTab,
        draft: ProjectDraft,
    ) -> Result<Outcome<Project>, EditorError> {
        self.project_draft.edit(draft);
        let collection = match tab {
            ProjectTab::Featured => &mut self.featured,
            ProjectTab::Upcoming => &mut self.upcoming,
        };
        match self.project_draft.submit_draft(tab, collection) {
            Ok((project, notification)) => {
                info!(project_id = %project.id, ?tab, title = %project.title, "Project added");
                Ok(Outcome {
                    value: project,
                    notification: self.announce(notification),
                })
            }
            Err(e) => Err(self.reject(ProjectDraft::SCHEMA.form, e)),
        }
    }

    pub fn remove_project_at(
        &mut self,
        tab: ProjectTab,
        index: usize,
    ) -> Result<Project, EditorError> {
        let removed = self
            .projects_mut(tab)
            .remove_at(index)
            .ok_or_else(|| EditorError::NotFound(format!("No {tab:?} project at position {index}")))?;
        info!(project_id = %removed.id, ?tab, index, "Project removed");
        Ok(removed)
    }

    pub fn remove_project(&mut self, tab: ProjectTab, id: Uuid) -> Result<Project, EditorError> {
        let removed = self
            .projects_mut(tab)
            .remove(id)
            .ok_or_else(|| EditorError::NotFound(format!("Project {id} not found")))?;
        info!(project_id = %id, ?tab, "Project removed");
        Ok(removed)
    }

    // ── Education & certifications ─────────────────────────────────────────

    pub fn submit_education(
        &mut self,
        draft: EducationDraft,
    ) -> Result<Outcome<EducationEntry>, EditorError> {
        self.education_draft.edit(draft);
        match self.education_draft.submit_draft((), &mut self.education) {
            Ok((entry, notification)) => {
                info!(entry_id = %entry.id, institution = %entry.institution, "Education added");
                Ok(Outcome {
                    value: entry,
                    notification: self.announce(notification),
                })
            }
            Err(e) => Err(self.reject(EducationDraft::SCHEMA.form, e)),
        }
    }

    pub fn remove_education_at(&mut self, index: usize) -> Result<EducationEntry, EditorError> {
        self.education
            .remove_at(index)
            .ok_or_else(|| EditorError::NotFound(format!("No education entry at position {index}")))
    }

    pub fn remove_education(&mut self, id: Uuid) -> Result<EducationEntry, EditorError> {
        self.education
            .remove(id)
            .ok_or_else(|| EditorError::NotFound(format!("Education entry {id} not found")))
    }

    pub fn submit_certification(
        &mut self,
        draft: CertificationDraft,
    ) -> Result<Outcome<CertificationEntry>, EditorError> {
        self.certification_draft.edit(draft);
        match self
            .certification_draft
            .submit_draft((), &mut self.certifications)
        {
            Ok((cert, notification)) => {
                info!(cert_id = %cert.id, name = %cert.name, "Certification added");
                Ok(Outcome {
                    value: cert,
                    notification: self.announce(notification),
                })
            }
            Err(e) => Err(self.reject(CertificationDraft::SCHEMA.form, e)),
        }
    }

    pub fn remove_certification_at(
        &mut self,
        index: usize,
    ) -> Result<CertificationEntry, EditorError> {
        self.certifications
            .remove_at(index)
            .ok_or_else(|| EditorError::NotFound(format!("No certification at position {index}")))
    }

    pub fn remove_certification(&mut self, id: Uuid) -> Result<CertificationEntry, EditorError> {
        self.certifications
            .remove(id)
            .ok_or_else(|| EditorError::NotFound(format!("Certification {id} not found")))
    }

    pub fn snapshot(&self) -> ProfileSnapshot {
        ProfileSnapshot {
            personal: self.personal.clone(),
            about: self.about.clone(),
            skills: self.skills.clone(),
            interests: self.interests.clone(),
            featured_projects: self.featured.clone(),
            upcoming_projects: self.upcoming.clone(),
            education: self.education.clone(),
            certifications: self.certifications.clone(),
            drafts: PendingDrafts {
                project: pending(&self.project_draft),
                education: pending(&self.education_draft),
                certification: pending(&self.certification_draft),
            },
        }
    }
}

fn pending<D>(editor: &CollectionEditor<D>) -> PendingDraft<D>
where
    D: FormDraft + Clone,
    D::Record: Clone,
{
    PendingDraft {
        phase: editor.phase(),
        draft: editor.draft().clone(),
    }
}
