//! Home page: introduction, history cards and the principle tiles

use super::ImageRef;
use crate::error::CoreResult;
use crate::types::{TopicCatalog, TopicRecord};

pub const TITLE: &str = "Welcome to MLOps";

pub const WHAT_IS_MLOPS: &str = "MLOps (Machine Learning Operations) is a set of practices that aims to \
    deploy and maintain machine learning models in production reliably and \
    efficiently. It combines machine learning, DevOps, and data engineering to \
    streamline the machine learning lifecycle.";

pub const LIFECYCLE_IMAGE: ImageRef = ImageRef::new("MLOps Lifecycle", "mlops_lifecycle.png");

pub const LOGOS: [ImageRef; 2] = [
    ImageRef::new("Sprinteins Logo", "sprinteins_logo_tra.png"),
    ImageRef::new("Reutlingen Hochschule Logo", "reutlingen_hochschule_logo.png"),
];

pub const HISTORY_INTRO: &str = "The evolution from traditional software development to MLOps has been driven \
    by the unique challenges posed by machine learning systems.";

/// Static (non-activatable) history cards: `(title, text)`.
pub const HISTORY_CARDS: [(&str, &str); 3] = [
    (
        "ML Challenges",
        "ML systems face unique challenges such as data dependencies, experiment tracking, and model decay.",
    ),
    (
        "DevOps Limitations",
        "While DevOps improved software development, it didn't address ML-specific \
        issues like data versioning and model monitoring.",
    ),
    (
        "Birth of MLOps",
        "MLOps emerged as a solution, combining ML, DevOps, and data engineering \
        practices to address these challenges.",
    ),
];

pub const PRINCIPLES_INTRO: &str = "MLOps is guided by several key principles that ensure efficient and reliable \
    machine learning operations:";

const PRINCIPLES: &[(&str, &str)] = &[
    (
        "Reproducibility",
        "Reproducibility is at the core of MLOps. It refers to the ability to repeat \
        ML experiments or ML models under the same conditions with identical \
        results. This is crucial for ensuring the reliability and fairness of ML \
        systems. Reproducibility is achieved through consistent versioning and \
        careful experiment management, facilitating debugging, model performance \
        evaluation, and the transfer of models into production. A reproducible ML \
        system promotes confidence in the results and in the decisions made based on \
        these models. Furthermore, reproducibility forms the basis for scaling and \
        automating workflows throughout the lifecycle of ML models.",
    ),
    (
        "Versioning",
        "Versioning plays a crucial role in ML, ensuring the traceability and \
        reliability of ML systems. Within MLOps practices, versioning refers to the \
        careful documentation and management of changes in data, models, and code. \
        This practice allows teams to effectively organize, track, and evaluate \
        different iterations of datasets, model configurations, and algorithms. The \
        goal is to create a reliable foundation for reproducibility and ensure a \
        transparent development history. This makes it possible to easily revert to \
        previous versions and clearly analyze and understand changes and their \
        effects over time.",
    ),
    (
        "Experiment Management",
        "Experiment management is a central process in MLOps. It ensures the \
        methodical execution and documentation of ML experiments. This process is \
        closely linked to versioning, as it facilitates the management and tracking \
        of experiments. Details about the data used, the hyperparameters set, and \
        the results achieved are recorded. Through the structured capture of this \
        information, data scientists and ML engineers can specifically test \
        hypotheses and develop models more precisely. Additionally, effective \
        experiment management provides a clear overview of all experiments conducted \
        and their results.",
    ),
    (
        "ML Pipelines",
        "MLOps emphasizes the importance of transforming often unstructured ML code \
        in notebooks into systematically structured ML pipelines. This \
        transformation allows ML code to be effectively reproduced, validated, and \
        monitored. By embedding the code in ML pipelines, a methodical and \
        controllable environment is created in which data processing, feature \
        extraction, model training, evaluation, and model deployment can run \
        automatically. This systematic conversion not only promotes clarity and \
        maintainability of the code but also ensures its reproducibility and \
        scalability. This is essential for the reliable development and deployment \
        of ML models.",
    ),
    (
        "Automation and Orchestration",
        "MLOps increases the efficiency and reliability of ML processes through the \
        automation and orchestration of specific ML pipelines, such as data \
        acquisition, data processing, and model training. Automation minimizes \
        manual errors and improves the speed of recurring processes, particularly \
        increasing the efficiency of data acquisition, processing, and training \
        pipelines. Orchestration ensures the correct sequence and integration of \
        automated steps. It controls relationships and dependencies between tasks \
        within the pipelines and ensures dynamic resource allocation. Through these \
        combined approaches, scalable, repeatable, and maintainable ML workflows can \
        be created that support rapid iterations and consistent results across the \
        entire ML pipeline.",
    ),
    (
        "Collaboration",
        "MLOps promotes collaboration and integration of various disciplines by \
        providing common methods, tools, and platforms. This enables improved \
        communication and coordination between key roles. The unification of \
        workflows and the use of shared best practices increase transparency \
        throughout the entire ML lifecycle. This ensures that all participants are \
        synchronized, leading to accelerated development and increased quality of ML \
        projects. The collaborative environment created by MLOps also facilitates \
        the identification and resolution of challenges in real-time and supports \
        continuous improvement of the development process.",
    ),
    (
        "CI/CD in MLOps",
        "In MLOps, CI/CD are essential components that go beyond traditional code \
        integration. They encompass end-to-end integration and validation that \
        consider changes to both data and ML models and their dependencies. This \
        holistic approach ensures continuous and automatic verification of each \
        change to immediately identify inconsistencies or errors and promote the \
        stability of the codebase. This involves extensive validation processes such \
        as dataset checks, model validation tests, and code quality checks. This \
        ensures that each innovation is technically correct, of high quality, and \
        can be seamlessly integrated into the existing system. Thus, the integrity \
        and performance of ML systems are continuously maintained. The integration \
        of CI/CD in MLOps promotes a culture of continuous improvement and \
        optimization. This is essential for the agile development and operation of \
        ML models. Teams can react faster to changes, increase the efficiency of the \
        development process, and continuously improve the reliability and \
        performance of models deployed in production.",
    ),
    (
        "Continuous Training",
        "Continuous Training is a fundamental aspect of MLOps. It ensures that ML \
        models remain current and efficient. It is the automated process where ML \
        models are regularly retrained with new or changed datasets to maintain \
        their predictive accuracy and relevance. This practice is essential to \
        proactively respond to changes such as data drift or changing market \
        conditions. Through continuous adaptation of models to current data, steady \
        optimization and ongoing improvement of model performance can be ensured. \
        This is crucial for maintaining the validity and effectiveness of ML \
        applications over time.",
    ),
    (
        "Continuous Monitoring",
        "Continuous Monitoring is an essential component of MLOps. It involves the \
        ongoing monitoring of model performance as well as the quality of incoming \
        data. The purpose of this process is to ensure the continued functionality \
        and effectiveness of ML systems. Monitoring plays a key role in the early \
        detection of anomalies such as data drift. This lays the foundation for \
        timely and automatic retraining of the model. Through continuous assessment \
        of both the performance indicators of the models and the data quality, \
        Continuous Monitoring enables teams to efficiently diagnose and immediately \
        address any deterioration. This significantly contributes to maintaining the \
        reliability, accuracy, and general performance of ML solutions in \
        production.",
    ),
];

/// The nine principle tiles.
pub fn principles() -> CoreResult<TopicCatalog> {
    TopicCatalog::from_records(
        PRINCIPLES
            .iter()
            .map(|(key, text)| TopicRecord::text(*key, *text))
            .collect(),
    )
}
