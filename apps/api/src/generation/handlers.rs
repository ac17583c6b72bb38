//! Axum route handlers for the generation API.

use std::collections::BTreeMap;

use axum::Json;
use serde::Serialize;
use tracing::info;

use crate::generation::catalog::{ProjectType, SkillTier};
use crate::generation::resolver::{resolve, ProjectParams, Recommendation};
use crate::routes::json::ApiJson;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectTypeSummary {
    pub id: ProjectType,
    pub cost_ranges: BTreeMap<&'static str, &'static str>,
    pub learning_outcomes: &'static [&'static str],
}

/// POST /api/generate-project
///
/// Resolves the parameters against the catalog. Unknown project types and
/// skill levels fall back to defaults, so a well-formed body always succeeds.
pub async fn handle_generate_project(
    ApiJson(params): ApiJson<ProjectParams>,
) -> Json<Recommendation> {
    info!(
        project_type = %params.project_type,
        skill_level = %params.skill_level,
        "Generating project"
    );

    let project = resolve(&params, &mut rand::thread_rng());

    info!(title = %project.title, "Generated project");
    Json(project)
}

/// GET /api/project-types
///
/// Lists the catalog buckets with their per-tier cost ranges.
pub async fn handle_list_project_types() -> Json<Vec<ProjectTypeSummary>> {
    let summaries = ProjectType::ALL
        .into_iter()
        .map(|project_type| {
            let bucket = project_type.bucket();
            ProjectTypeSummary {
                id: project_type,
                cost_ranges: SkillTier::ALL
                    .into_iter()
                    .map(|tier| (tier.as_str(), bucket.cost_range(tier)))
                    .collect(),
                learning_outcomes: bucket.learning_outcomes,
            }
        })
        .collect();

    Json(summaries)
}
