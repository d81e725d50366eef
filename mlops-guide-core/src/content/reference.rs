//! Reference Architecture page: overview, implementation phases, components and actors

use super::ImageRef;
use crate::error::CoreResult;
use crate::types::{DetailKind, TopicCatalog, TopicRecord};

pub const TITLE: &str = "MLOps Reference Architecture";

pub const OVERVIEW: [&str; 2] = [
    "This MLOps Reference Architecture provides a structured framework for \
    managing the entire machine learning (ML) project lifecycle. It encompasses \
    key phases, from project initiation and data management to automated \
    workflow pipelines, ensuring efficiency, reproducibility, and collaboration.",
    "The architecture integrates essential MLOps components such as Git \
    repository, feature store, model registry, model serving, model monitoring, \
    and workflow orchestration.",
];

pub const NOTE: &str = "Note: The \"Central Data Repository\" is not explicitly detailed in this \
    architecture. The specific approach to data management will depend on your \
    organization's needs, technology stack, and existing infrastructure.";

pub const DIAGRAM_IMAGE: ImageRef = ImageRef::new("MLOps Lifecycle", "referenzarchitektur.jpg");

pub const CONCLUSION: &str = "This MLOps reference architecture provides a robust framework for \
    organizations to build successful, scalable, and efficient ML projects. By \
    embracing a systematic and collaborative approach, it empowers teams to \
    overcome common challenges, enhance reproducibility, and achieve sustainable \
    business outcomes.";

pub const TECHNICAL_COLUMNS: [&str; 3] = ["Activity", "Component", "Description"];

const TECHNICAL_ROWS: &[[&str; 3]] = &[
    [
        "MO1",
        "Setup of the Git Repository",
        "Establishment of a centralized version control system for collaboration and \
        code management.",
    ],
    [
        "MO2",
        "Setup of a Data Repository",
        "Establishment of robust data management practices for data integrity and \
        security.",
    ],
    [
        "MO3",
        "Configuration of the Feature Store",
        "Implementation of a storage solution for ML features to promote reusability \
        and consistency.",
    ],
    [
        "MO4",
        "Setup of the Model Registry",
        "Creation of a solution for managing and versioning ML models.",
    ],
    [
        "MO5",
        "Integration of the Experiment Tracking System",
        "Setup of a platform for tracking and analyzing model experiments.",
    ],
    [
        "MO6",
        "Orchestration of the ML Pipeline",
        "Integration of workflow orchestration to automate and optimize the ML \
        pipeline.",
    ],
    [
        "DO1",
        "Configuration of the CI/CD Component",
        "Implementation of automated workflows for efficient and reliable model \
        deployment.",
    ],
    [
        "MODO1",
        "Establishment of the Model Serving Component",
        "Provision of a system for hosting and serving ML models.",
    ],
    [
        "MODO2",
        "Activation of Model Monitoring",
        "Setup of monitoring tools for continuous assessment of model performance.",
    ],
];

pub const KEY_COMPONENT_COLUMNS: [&str; 2] = ["Component", "Description"];

pub const KEY_COMPONENTS: &[[&str; 2]] = &[
    [
        "Git Repository",
        "Version control for code and artifacts, ensuring transparency and \
        collaborative development.",
    ],
    [
        "Feature Store",
        "Centralized storage for features used in model training and prediction, \
        enabling efficient feature reuse and consistency.",
    ],
    [
        "Model Registry",
        "Tracks and manages trained models, providing version control, metadata, and \
        streamlined deployment.",
    ],
    [
        "Model Serving",
        "Deploys models for real-time predictions and batch inference, ensuring \
        scalability and accessibility for various applications.",
    ],
    [
        "Model Monitoring",
        "Tracks model performance and data quality, enabling proactive maintenance \
        and ensuring model stability.",
    ],
    [
        "Workflow Orchestration",
        "Automates the ML workflow pipeline, streamlining processes and promoting \
        efficient execution of complex tasks.",
    ],
];

pub const ACTOR_COLUMNS: [&str; 2] = ["Actor", "Description"];

pub const ACTORS: &[[&str; 2]] = &[
    [
        "Business Stakeholder (BS)",
        "Define business problems and KPIs, aligning ML projects with business goals.",
    ],
    [
        "MLOps Engineers (MO)",
        "Responsible for MLOps infrastructure, automation, and the end-to-end ML \
        lifecycle.",
    ],
    [
        "Data Engineers (DE)",
        "Create and maintain data infrastructure for ML projects, ensuring data \
        accessibility and quality.",
    ],
    [
        "Data Scientists (DS)",
        "Develop ML models, conduct experiments, and validate model performance.",
    ],
    [
        "DevOps Engineers (DO)",
        "Support MLOps and data engineering teams with infrastructure and CI/CD \
        pipelines, ensuring smooth integration and deployment.",
    ],
];

enum PhaseBody {
    Steps(&'static [&'static str]),
    Table,
}

struct Phase {
    title: &'static str,
    body: PhaseBody,
}

const PHASES: &[Phase] = &[
    Phase {
        title: "1. Analysis and Planning",
        body: PhaseBody::Steps(&[
            "Requirements Workshop: A comprehensive workshop with representatives from \
            all involved disciplines to define the problem statement and project \
            objectives.",
            "Vision and KPI Definition: Establish a clear project vision and develop \
            measurable Key Performance Indicators (KPIs) for success.",
            "ML Lifecycle Analysis: Thoroughly analyze each phase of the ML lifecycle, \
            identifying challenges and areas requiring targeted support.",
            "Data Investigation: Conduct an intensive analysis of selected data examples \
            to understand key features and potential challenges.",
            "Assignment of Roles and Responsibilities: Clearly define roles and \
            responsibilities within the team to ensure efficient collaboration.",
            "Consideration of Legal Frameworks: Carefully consider security aspects, data \
            protection regulations, and governance requirements for legal compliance.",
        ]),
    },
    Phase {
        title: "2. Requirements Analysis, Conception, and Technology Stack Selection",
        body: PhaseBody::Steps(&[
            "Requirements Analysis: Delve into the organizational needs for ML projects, \
            covering both technical and business requirements.",
            "Conception: Develop a detailed conceptual design for the MLOps architecture, \
            outlining the workflow structure and specifying governance and collaboration \
            frameworks.",
            "Technology Stack Selection: Select tools and platforms that meet the \
            project's current needs and remain adaptable for future requirements, \
            considering factors like compatibility, community support, and integration \
            capabilities.",
        ]),
    },
    Phase {
        title: "3. Implementation of Technical Components",
        body: PhaseBody::Table,
    },
    Phase {
        title: "4. Prototyping, Validation, and Iteration",
        body: PhaseBody::Steps(&[
            "Create an initial prototype to test and validate the functionality and \
            effectiveness of the architecture.",
            "Based on the prototyping results, make necessary adjustments and \
            improvements.",
            "Iterate continuously to incorporate feedback from users and stakeholders.",
        ]),
    },
    Phase {
        title: "5. Final Documentation and Training",
        body: PhaseBody::Steps(&[
            "Thoroughly document the final architecture and implementation strategy for \
            clarity and ease of use.",
            "Train all affected teams on the new technologies, processes, and best \
            practices to ensure knowledge transfer.",
        ]),
    },
];

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

/// Accordion panels of the implementation strategy.
pub fn implementation_phases() -> CoreResult<TopicCatalog> {
    TopicCatalog::from_records(
        PHASES
            .iter()
            .map(|phase| {
                let detail = match phase.body {
                    PhaseBody::Steps(steps) => DetailKind::Steps {
                        steps: owned(steps),
                    },
                    PhaseBody::Table => DetailKind::Table {
                        columns: owned(&TECHNICAL_COLUMNS),
                        rows: TECHNICAL_ROWS.iter().map(|row| owned(row)).collect(),
                    },
                };
                TopicRecord::new(phase.title, detail)
            })
            .collect(),
    )
}
