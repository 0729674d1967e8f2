use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    Completed,
    Planning,
    InProgress,
    OnHold,
}

impl ProjectStatus {
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "completed" => Some(Self::Completed),
            "planning" => Some(Self::Planning),
            "in_progress" => Some(Self::InProgress),
            "on_hold" => Some(Self::OnHold),
            _ => None,
        }
    }
}

/// Which project collection a draft targets: the add-project screen's tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectTab {
    Featured,
    Upcoming,
}

impl ProjectTab {
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "featured" => Some(Self::Featured),
            "upcoming" => Some(Self::Upcoming),
            _ => None,
        }
    }

    pub fn default_status(&self) -> ProjectStatus {
        match self {
            Self::Featured => ProjectStatus::Completed,
            Self::Upcoming => ProjectStatus::Planning,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Technology {
    pub label: String,
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub technologies: Vec<Technology>,
    pub category: Option<String>,
    pub date: Option<String>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub read_more_url: Option<String>,
    pub status: ProjectStatus,
    pub created_at: DateTime<Utc>,
}
