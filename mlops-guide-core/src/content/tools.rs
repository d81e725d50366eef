//! Tools page: categories of MLOps tooling with their trade-offs

use super::ImageRef;
use crate::error::CoreResult;
use crate::types::{DetailKind, TopicCatalog, TopicRecord};

pub const TITLE: &str = "MLOps Tools";

pub const TOOLS_IMAGE: ImageRef = ImageRef::new("MLOps Tools", "mlops_tools.png");

struct ToolCategory {
    name: &'static str,
    description: &'static str,
    advantages: &'static [&'static str],
    disadvantages: &'static [&'static str],
}

const CATEGORIES: &[ToolCategory] = &[
    ToolCategory {
        name: "Specialized Open-Source MLOps Tools",
        description: "These tools focus on specific functions within the ML lifecycle. While they \
            don't offer the breadth of functionality that end-to-end platforms do, they \
            are often more powerful in their specialized areas.",
        advantages: &[
            "Flexibility and modularity",
            "Open-source cost efficiency",
            "Customization and transparency",
            "Active developer community support",
        ],
        disadvantages: &[
            "Limited MLOps coverage",
            "Integration complexity",
            "Potential stability issues",
            "Higher maintenance and scalability challenges",
        ],
    },
    ToolCategory {
        name: "Open-Source End-to-End MLOps Platforms",
        description: "These platforms offer a comprehensive solution for managing the entire ML \
            lifecycle, consolidating numerous MLOps functions under one roof.",
        advantages: &[
            "Comprehensive MLOps coverage",
            "Open-source cost efficiency",
            "Flexibility and modularity",
            "Potential for on-premises hosting",
        ],
        disadvantages: &[
            "Potential reliability and stability issues",
            "Steeper learning curve",
            "Higher initial configuration complexity",
            "Dependency on a single platform",
        ],
    },
    ToolCategory {
        name: "Commercial End-to-End MLOps Platforms",
        description: "These platforms offer a comprehensive, cloud-based solution covering all \
            aspects of the MLOps lifecycle, simplifying the process of developing, \
            deploying, and scaling ML models.",
        advantages: &[
            "Comprehensive MLOps coverage",
            "High reliability and stability",
            "Professional support and SLAs",
            "Lower maintenance overhead and easier scalability",
        ],
        disadvantages: &[
            "Higher costs compared to open-source solutions",
            "Potential vendor lock-in",
            "Limited flexibility for customization",
            "Potential data security concerns with cloud-based solutions",
        ],
    },
];

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

/// Category tiles showing their description; the overlay carries the pros/cons tabs.
pub fn tools() -> CoreResult<TopicCatalog> {
    TopicCatalog::from_records(
        CATEGORIES
            .iter()
            .map(|c| {
                TopicRecord::new(
                    c.name,
                    DetailKind::ProsCons {
                        advantages: owned(c.advantages),
                        disadvantages: owned(c.disadvantages),
                    },
                )
                .with_summary(c.description)
            })
            .collect(),
    )
}
