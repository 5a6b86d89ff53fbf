//! Topic configuration: what is tracked, where it comes from, and which
//! handler turns it into a [`TopicResult`].
//!
//! Every topic carries a [`TopicKind`] tag so the collector can dispatch on
//! the tag instead of comparing identifiers.

mod catalog;
mod manual;

pub use catalog::TOPICS;
pub use manual::ManualSeries;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Where a topic's data comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceKind {
    /// Fetched from the remote grapher CSV export.
    #[serde(rename = "owid")]
    External,
    /// Filled in from built-in literal data.
    #[serde(rename = "manual")]
    Manual,
}

/// Which direction of change counts as progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Polarity {
    #[serde(rename = "up")]
    Increasing,
    #[serde(rename = "down")]
    Decreasing,
}

/// Extra score awarded to columns whose name contains any of `needles`.
#[derive(Debug, Clone, Copy)]
pub struct ColumnBoost {
    pub needles: &'static [&'static str],
    pub bonus: i32,
}

/// Routes a topic to one of the three collector handlers.
#[derive(Debug, Clone, Copy)]
pub enum TopicKind {
    /// Single value column chosen by the scoring heuristic.
    Fetched { boost: Option<ColumnBoost> },
    /// Sum of several sub-series. Each entry of `parts` lists the name
    /// variants of one contributing column.
    FetchedComposite {
        parts: &'static [&'static [&'static str]],
        label: &'static str,
    },
    /// Literal data shipped with the binary; `None` emits a placeholder.
    ManualLiteral(Option<&'static ManualSeries>),
}

/// Static description of one tracked statistic.
#[derive(Debug, Clone, Copy)]
pub struct TopicConfig {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub source: SourceKind,
    pub slug: Option<&'static str>,
    pub direction: Polarity,
    pub kind: TopicKind,
}

/// A single observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub year: i32,
    pub value: f64,
}

/// The persisted per-topic output unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicResult {
    pub id: String,
    pub title: String,
    pub description: String,
    pub source: SourceKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    pub direction: Polarity,
    pub year: i32,
    pub value: Option<f64>,
    pub value_column: String,
    pub data_points: Vec<DataPoint>,
    pub last_updated: DateTime<Utc>,
}

impl TopicResult {
    /// Builds a result from a topic and its series.
    ///
    /// `latest` is the maximum-year observation taken before downsampling.
    pub fn new(
        topic: &TopicConfig,
        latest: DataPoint,
        value_column: impl Into<String>,
        data_points: Vec<DataPoint>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: topic.id.to_string(),
            title: topic.title.to_string(),
            description: topic.description.to_string(),
            source: topic.source,
            slug: topic.slug.map(str::to_string),
            direction: topic.direction,
            year: latest.year,
            value: Some(latest.value),
            value_column: value_column.into(),
            data_points,
            last_updated: now,
        }
    }
}
