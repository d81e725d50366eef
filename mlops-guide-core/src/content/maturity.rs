//! Maturity Models page: two published models, each a list of stages

use super::ImageRef;
use crate::error::CoreResult;
use crate::types::{DetailKind, TopicCatalog, TopicRecord};
use crate::utils::text::{excerpt, EXCERPT_CHARS};

pub const TITLE: &str = "MLOps Maturity Models";

pub const MODEL_IMAGE: ImageRef = ImageRef::new("MLOps Maturity Models", "mlops_mat_model.png");

type Stage = (&'static str, &'static str);

const MODELS: &[(&str, &[Stage])] = &[
    (
        "Google MLOps Maturity Model",
        &[
            (
                "Stage 0: Manual Process",
                "Reflects a traditional approach in data science, heavily relying on manual, \
                script-driven, and interactive processes. All steps from data analysis to \
                model validation are performed manually.",
            ),
            (
                "Stage 1: ML Pipeline Automation",
                "Focus on automating the ML pipeline. This marks a fundamental transformation \
                from manual to a systematic approach. Continuous Training (CT) is \
                implemented, creating the foundation for rapid and iterative development \
                cycles.",
            ),
            (
                "Stage 2: CI/CD Pipeline Automation",
                "Encompasses full automation of CI/CD processes. This stage marks the \
                transition to a highly developed MLOps approach, where the entire ML \
                pipeline from development through testing to production is automated.",
            ),
        ],
    ),
    (
        "Microsoft MLOps Maturity Model",
        &[
            (
                "Stage 0: No MLOps",
                "No specialized data science teams. ML projects are rare and not integrated \
                into the general business strategy. Data processing occurs in isolated \
                silos, and there's a lack of integration of required data for ML.",
            ),
            (
                "Stage 1: DevOps but no MLOps",
                "Companies use automated DevOps pipelines to support software development. \
                However, the ML model is still manually managed within applications.",
            ),
            (
                "Stage 2: Automated Training",
                "Establishment of centralized model management and automated training \
                pipelines improves consistency and reuse of models. There's beginning \
                coordination between data science and engineering teams.",
            ),
            (
                "Stage 3: Automated Model Deployment",
                "Model tests are automated and deployment to the production environment is \
                enabled. This achieves closer integration between the ML model lifecycle and \
                production processes.",
            ),
            (
                "Stage 4: Full MLOps Automated Operations",
                "All operations around ML models are fully automated. This includes initial \
                and repeated training, deployment, and monitoring. Advanced monitoring \
                mechanisms continuously check model performance.",
            ),
        ],
    ),
];

/// Stage record: the full description is the detail, the tile text is cut
/// from it by [`stage_excerpt`].
pub fn stage(name: &str, description: &str) -> TopicRecord {
    TopicRecord::text(name, description)
}

/// Tile text of a stage: its description cut to 100 characters plus `...`.
///
/// Computed from the detail rather than stored, so override stages get the
/// same tile text as built-in ones. Non-text stages fall back to the summary.
pub fn stage_excerpt(record: &TopicRecord) -> String {
    match &record.detail {
        DetailKind::PlainText { text } => excerpt(text, EXCERPT_CHARS),
        _ => excerpt(&record.summary, EXCERPT_CHARS),
    }
}

/// One record per model, its stages nested as a stage list.
pub fn maturity_models() -> CoreResult<TopicCatalog> {
    TopicCatalog::from_records(
        MODELS
            .iter()
            .map(|(model, stages)| {
                let stages = stages.iter().map(|(name, text)| stage(name, text)).collect();
                TopicRecord::new(*model, DetailKind::StageList { stages })
            })
            .collect(),
    )
}
