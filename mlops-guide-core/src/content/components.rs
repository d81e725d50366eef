//! Components page: the technical building blocks of an MLOps stack

use super::ImageRef;
use crate::error::CoreResult;
use crate::types::{TopicCatalog, TopicRecord};

pub const TITLE: &str = "MLOps Components";

pub const STACK_IMAGE: ImageRef = ImageRef::new("MLOps Components", "mlops stack.png");

/// `(name, icon, description)`
const COMPONENTS: &[(&str, &str, &str)] = &[
    (
        "Data Versioning",
        "▤",
        "Data versioning is a crucial technical component in MLOps, dealing with the \
        systematic management of different versions of datasets. Similar to version \
        control systems in software development (e.g., Git), data versioning allows \
        for structured tracking, logging, and management of data changes. This \
        enables exact reproducibility of ML experiments and maintains data integrity \
        over time. By implementing data versioning tools like DVC (Data Version \
        Control), teams can revert to previous data states, track changes, and \
        ensure all team members work with consistent and accurate datasets.",
    ),
    (
        "Central Data Repositories",
        "{}",
        "Central data repositories play a crucial role in MLOps as they serve as \
        primary repositories or starting points from which data for ML projects is \
        sourced. They encompass a variety of sources, including internal databases, \
        cloud storage platforms, APIs, and external datasets. A well-organized and \
        reliable data source is crucial for the quality and efficiency of ML models, \
        as the accuracy and relevance of the data used directly impacts the \
        performance of the final model. Therefore, it is of utmost importance that \
        the data sources are not only diverse and comprehensive but also accessible, \
        secure, and compliant with data protection guidelines.",
    ),
    (
        "Data Analysis",
        "∿",
        "In the MLOps landscape, data analysis is a fundamental step that \
        significantly influences the quality and efficiency of machine learning. \
        This phase involves careful examination, cleansing, and transformation of \
        raw data to create a reliable basis for model training. In addition to data \
        preparation, the analysis phase allows for the filtering of patterns and \
        anomalies, which in turn supports informed model construction and feature \
        selection. Tools like Jupyter Notebooks provide an interactive environment \
        where data scientists can visualize, analyze, and gain initial insights to \
        ensure that the datasets used correctly represent the problem to be solved.",
    ),
    (
        "Experiment Management",
        "⚗",
        "Experimenting with various ML algorithms and data is a central aspect of the \
        development process for ML models. MLOps facilitates this process by \
        introducing a dedicated experiment management component that enables \
        systematic planning, execution, and monitoring of experiments. This is \
        crucial for evaluating the effectiveness of different model approaches, \
        hyperparameters, and datasets. By providing a central repository, e.g., \
        through tools like MLFlow, experiments and results are stored in a versioned \
        manner, ensuring reproducibility and transparency. Experiment management \
        plays a crucial role in documenting all experiments and systematically \
        identifying the best approaches.",
    ),
    (
        "Feature Store",
        "◫",
        "Feature engineering is a critical step in the ML process, where raw data is \
        transformed into usable input vectors that can be directly fed into ML \
        algorithms. The use of feature stores within the MLOps architecture \
        revolutionizes this process by serving as a central repository that enables \
        the storage, management, and systematic provision of feature datasets. This \
        promotes consistent use of features across different ML models and teams, \
        thereby improving model quality and performance. Feature stores not only \
        facilitate the reuse and sharing of features but also support logging and \
        version control, which are crucial for the traceability and reproducibility \
        of ML experiments.",
    ),
    (
        "Code Repository",
        "</>",
        "In the world of MLOps, code repositories serve not only as central \
        collection points for source code used for the development and training of \
        ML models, but also for the storage and versioning of ML pipeline code. \
        These repositories contribute significantly to the automation of the ML \
        workflow by enabling the storage, versioning, and reuse of code required for \
        pipeline management. They ensure that ML pipeline code is tested, validated, \
        and prepared for production along with the model code. Furthermore, code \
        repositories provide a structured development environment where different \
        branches can be used to test different models, algorithms, or functions.",
    ),
    (
        "Model Registry",
        "⑂",
        "The Model Registry serves as a central repository for managing the developed \
        ML models. It enables seamless tracking of a model's development process and \
        provides the ability to easily access previous model versions. This \
        facilitates the integration of models into CI/CD pipelines for automated \
        testing and deployment. Additionally, it supports the structured cataloging \
        of models and their metadata to simplify model search and monitoring.",
    ),
    (
        "ML Pipeline Orchestration",
        "◈",
        "Within the MLOps structure, the orchestration of ML pipelines represents a \
        critical technical component. It is responsible for the execution, \
        automation, and coordination of the developed ML pipelines. The overarching \
        coordination encompasses all phases of the ML workflow, starting from data \
        collection and preprocessing through feature extraction to model training. \
        The core component of this orchestration are the DAGs (Directed Acyclic \
        Graphs). These are crucial for precisely defining the execution order of \
        individual tasks in the ML pipelines while simultaneously clarifying their \
        mutual dependencies.",
    ),
    (
        "Model Serving",
        "☁",
        "Model serving is a critical phase in the ML pipeline where trained ML models \
        are integrated into a production environment to provide predictions or \
        analyses based on new, real-world data inputs. This phase can be realized \
        through various mechanisms such as API endpoints, microservices, or batch \
        processing processes, depending on the use case and requirements. Efficient \
        model serving ensures fast and reliable model responses, which is crucial \
        for user experience and the practical applicability of the ML solution. \
        Furthermore, model serving is not limited to just providing predictions, but \
        also includes managing the model lifecycle, including updates and A/B \
        testing of different model versions to enable continuous improvements and \
        adjustments.",
    ),
    (
        "Model Monitoring",
        "♥",
        "Model monitoring, an essential component of MLOps practice, is crucial for \
        maintaining the accuracy, performance, and reliability of ML models in the \
        production environment over the long term. It involves far more than just \
        monitoring performance indicators; it includes a comprehensive assessment of \
        the model state through continuous tracking of metrics such as accuracy, \
        precision, recall, and F1-score. It also includes the detection of data \
        deviations (data drift) and model deteriorations (model drift), which \
        indicate that models are no longer functioning as expected with current \
        data. Effective model monitoring identifies issues such as sudden \
        deterioration in model performance (model drift) or changes in underlying \
        data (data drift) and enables quick adjustments or retraining to keep models \
        current and relevant.",
    ),
];

pub fn components() -> CoreResult<TopicCatalog> {
    TopicCatalog::from_records(
        COMPONENTS
            .iter()
            .map(|(key, icon, text)| TopicRecord::text(*key, *text).with_icon(*icon))
            .collect(),
    )
}
