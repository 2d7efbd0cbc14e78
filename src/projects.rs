//! Portfolio projects. Read-only: the bundled list is the only source.

use serde::{Deserialize, Serialize};

use crate::search::{self, SearchQuery, TagFilter};

const BUNDLED_PROJECTS: &str = include_str!("../data/projects.json");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub image: String,
    pub category: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub live: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

pub fn bundled_projects() -> Vec<Project> {
    match serde_json::from_str(BUNDLED_PROJECTS) {
        Ok(projects) => projects,
        Err(e) => {
            log::error!("bundled projects dataset is malformed: {e}");
            Vec::new()
        }
    }
}

/// `"All"` plus each distinct category in first-seen order.
pub fn project_categories(projects: &[Project]) -> Vec<String> {
    search::categories(projects)
}

/// Exact category match; `All` keeps everything.
pub fn filter_projects<'a>(projects: &'a [Project], category: &TagFilter) -> Vec<&'a Project> {
    search::filter(projects, category, &SearchQuery::default())
}

pub fn featured_projects(projects: &[Project]) -> Vec<&Project> {
    projects.iter().filter(|p| p.featured).collect()
}
