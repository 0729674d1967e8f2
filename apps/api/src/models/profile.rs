use serde::{Deserialize, Serialize};

use crate::validation::ValidatedForm;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    pub description: String,
    pub location: String,
    pub age: String,
    pub email: String,
    pub phone: Option<String>,
    pub github: Option<String>,
    pub linkedin: Option<String>,
}

impl PersonalInfo {
    pub fn from_form(form: &ValidatedForm) -> Self {
        Self {
            name: form.value("name"),
            title: form.value("title"),
            description: form.value("description"),
            location: form.value("location"),
            age: form.value("age"),
            email: form.value("email"),
            phone: form.optional("phone"),
            github: form.optional("github"),
            linkedin: form.optional("linkedin"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AboutInfo {
    pub bio: String,
    pub gpa: String,
    /// Kept as the submitted digit string.
    pub projects_completed: String,
}

impl AboutInfo {
    pub fn from_form(form: &ValidatedForm) -> Self {
        Self {
            bio: form.value("bio"),
            gpa: form.value("gpa"),
            projects_completed: form.value("projects_completed"),
        }
    }
}
