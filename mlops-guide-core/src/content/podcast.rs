//! Podcast page: a single episode and its credit

pub const TITLE: &str = "MLOps Podcast";

pub const EPISODE_TITLE: &str = "MLOps-Thesis-Ahmad_Salah-podcast.wav";

/// Audio file, relative to the assets directory.
pub const EPISODE_FILE: &str = "MLOps-Thesis-Ahmad_Salah-podcast.wav";

pub const CREDIT_PREFIX: &str = "Created with";
pub const CREDIT_NAME: &str = "NotebookLM";
pub const CREDIT_URL: &str = "https://notebooklm.google/";
