//! Stack Builder page: the MLOps stack as a node diagram

use crate::diagram::{Anchor, Diagram, DiagramNode, Edge, GridCell, NodeKind};
use crate::error::CoreResult;
use crate::types::{TopicCatalog, TopicRecord};

pub const TITLE: &str = "MLOps Stack";

struct StackNode {
    name: &'static str,
    kind: NodeKind,
    cell: GridCell,
    description: &'static str,
}

const NODES: &[StackNode] = &[
    StackNode {
        name: "Data Analysis",
        kind: NodeKind::Process,
        cell: GridCell::new(0, 0),
        description: "Data Analysis is the process of inspecting, cleansing, transforming, and \
            modeling data to discover useful information, inform conclusions, and \
            support decision-making. This involves using statistical, computational, and \
            analytical techniques to identify patterns, trends, and relationships within \
            data. Data analysis is critical across various domains, including business, \
            science, engineering, and social sciences, enabling stakeholders to make \
            data-driven decisions. The process can range from simple descriptive \
            statistics to complex machine learning or data mining techniques. Effective \
            data analysis helps organizations understand their environment, evaluate \
            performance, and predict future trends, thereby facilitating strategic \
            planning and operational efficiency.",
    },
    StackNode {
        name: "Experimentation",
        kind: NodeKind::Process,
        cell: GridCell::new(0, 1),
        description: "Experimentation involves designing experiments, collecting data, analyzing \
            results, and drawing conclusions to advance knowledge or solve specific \
            problems. In business and product development, experimentation can refer to \
            A/B testing or multivariate testing, where different versions of a product \
            are presented to users to determine which one performs better based on \
            defined metrics. Effective experimentation allows for data-driven \
            decision-making, innovation, and continuous improvement in various fields, \
            from scientific research to marketing strategies.",
    },
    StackNode {
        name: "Feature Store",
        kind: NodeKind::Storage,
        cell: GridCell::new(1, 0),
        description: "A Feature Store is a centralized repository designed to store, manage, and \
            serve features for machine learning models. It acts as a bridge between data \
            engineering and machine learning teams, ensuring that features used for \
            training models are consistent with those used in production environments. \
            This system enables the reuse of features across different models, improves \
            collaboration, and accelerates the development of machine learning projects. \
            By maintaining a catalog of feature definitions and metadata, the feature \
            store ensures data consistency, versioning, and governance. Additionally, it \
            supports real-time and batch data processing, facilitating efficient feature \
            engineering and serving for a variety of machine learning applications.",
    },
    StackNode {
        name: "Code Repository",
        kind: NodeKind::Storage,
        cell: GridCell::new(1, 1),
        description: "A Code Repository is a central location where developers store, manage, and \
            track their source code. It is an essential tool for version control, \
            allowing multiple developers to work on the same project without conflicts. \
            Code repositories support the tracking of changes, collaboration, and the \
            maintenance of different versions of code, making it easier to revert to \
            previous states if needed. They facilitate continuous integration and \
            delivery by enabling automated builds and tests. Commonly used in software \
            development and engineering practices, code repositories play a crucial role \
            in project management, code review, and deployment processes.",
    },
    StackNode {
        name: "ML pipeline",
        kind: NodeKind::Process,
        cell: GridCell::new(2, 1),
        description: "An ML pipeline is a sequence of steps designed to automate the process of \
            data preparation, model training, evaluation, and deployment in machine \
            learning projects. Each step in the pipeline corresponds to a particular \
            phase of the machine learning lifecycle, including data collection, \
            preprocessing, feature extraction, model fitting, and prediction serving. \
            Pipelines ensure that the workflow is reproducible, scalable, and \
            maintainable. They enable data scientists and engineers to streamline model \
            development and deployment, reduce manual errors, and facilitate continuous \
            integration and delivery of machine learning models. Additionally, ML \
            pipelines support version control and collaboration, allowing teams to \
            efficiently manage and update models as data and requirements change.",
    },
    StackNode {
        name: "Model Registry",
        kind: NodeKind::Storage,
        cell: GridCell::new(2, 2),
        description: "A Model Registry is a centralized repository where machine learning models \
            are stored, versioned, and managed throughout their lifecycle. It serves as \
            a single source of truth for an organization's machine learning assets, \
            allowing data scientists and engineers to collaboratively manage, track, and \
            audit models. The registry typically supports version control, model \
            metadata documentation, and stage transitions (e.g., from development to \
            staging to production). This enables consistent deployment, monitoring, and \
            governance of models, ensuring that only approved and vetted models are \
            deployed in production environments.",
    },
    StackNode {
        name: "Model Serving",
        kind: NodeKind::Process,
        cell: GridCell::new(2, 3),
        description: "Model Serving refers to the process of deploying and making a machine \
            learning model available for use in a production environment. This involves \
            hosting the model in a way that it can receive input data, perform \
            predictions or analyses, and return the results. Model serving can be \
            implemented in various ways, including through RESTful APIs, batch \
            processing, or streaming data pipelines. The choice of serving method \
            depends on the requirements for latency, throughput, and scalability. \
            Effective model serving ensures that models are accessible, reliable, and \
            efficient, enabling real-time decision making and automation in \
            applications.",
    },
    StackNode {
        name: "experiment Tracking",
        kind: NodeKind::Storage,
        cell: GridCell::new(3, 0),
        description: "Experiment tracking, often coupled with a metadata store, is a crucial \
            component of the machine learning lifecycle. It involves recording and \
            organizing data about each experiment run, including parameters, metrics, \
            and outcomes. This systematic logging enables data scientists and ML \
            engineers to compare different models, understand changes over time, and \
            reproduce results. A metadata store, on the other hand, is a repository \
            where this experiment-related data is kept. It contains details about the \
            experiments, models, datasets, and their versions. Together, experiment \
            tracking and metadata storage provide a structured framework for managing \
            machine learning workflows, facilitating analysis and collaboration, and \
            ensuring that ML projects are transparent, reproducible, and scalable.",
    },
    StackNode {
        name: "Model Monitoring",
        kind: NodeKind::Process,
        cell: GridCell::new(3, 3),
        description: "Model monitoring refers to the continuous oversight of machine learning \
            models in production to ensure they perform as expected over time. This \
            involves tracking various metrics such as model accuracy, prediction drift, \
            and response times, as well as monitoring the quality of input data to \
            detect anomalies or shifts in data distribution. Effective model monitoring \
            helps identify performance degradation, data drift, or operational issues, \
            enabling timely interventions such as model retraining, updating, or \
            rollback. This process is critical for maintaining the reliability and \
            effectiveness of machine learning models in real-world applications, \
            ensuring they continue to deliver value and make accurate predictions as \
            conditions change.",
    },
];

/// `(source, source_anchor, target, target_anchor)`
const EDGES: &[(&str, Anchor, &str, Anchor)] = &[
    ("Data Analysis", Anchor::Right, "Experimentation", Anchor::Left),
    ("Data Analysis", Anchor::Bottom, "Feature Store", Anchor::Top),
    ("Experimentation", Anchor::Bottom, "Code Repository", Anchor::Top),
    ("Feature Store", Anchor::Top, "Data Analysis", Anchor::Bottom),
    ("Feature Store", Anchor::Bottom, "ML pipeline", Anchor::Top),
    ("Feature Store", Anchor::Bottom, "Model Serving", Anchor::Top),
    ("Code Repository", Anchor::Bottom, "ML pipeline", Anchor::Top),
    ("ML pipeline", Anchor::Right, "Model Registry", Anchor::Left),
    ("ML pipeline", Anchor::Bottom, "experiment Tracking", Anchor::Top),
    ("Model Registry", Anchor::Right, "Model Serving", Anchor::Left),
    ("Model Serving", Anchor::Bottom, "Model Monitoring", Anchor::Top),
    ("Model Monitoring", Anchor::Left, "ML pipeline", Anchor::Bottom),
];

/// Diagram plus the catalog its nodes open in the overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackDiagram {
    pub diagram: Diagram,
    pub catalog: TopicCatalog,
}

impl StackDiagram {
    pub fn builtin() -> CoreResult<Self> {
        let diagram = Diagram::new(
            NODES
                .iter()
                .map(|n| DiagramNode::new(n.name, n.kind, n.cell))
                .collect(),
            EDGES
                .iter()
                .map(|(s, sa, t, ta)| Edge::new(*s, *sa, *t, *ta))
                .collect(),
        )?;
        let catalog = TopicCatalog::from_records(
            NODES
                .iter()
                .map(|n| TopicRecord::text(n.name, n.description))
                .collect(),
        )?;
        Ok(Self { diagram, catalog })
    }
}
