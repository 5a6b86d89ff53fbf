//! The collector: fetch every external topic concurrently, then add the
//! manual topics.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex, PoisonError};

use chrono::{DateTime, Datelike, Utc};
use tracing::{Instrument, error, info, warn};

use crate::config::FetchConfig;
use crate::error::{Result, TopicError};
use crate::fetch::{HttpClient, RateLimiter, Shutdown, fetch_table, resolve_url};
use crate::select::{locate_parts, select_value_column};
use crate::series::{ObservedSeries, build_series, build_summed_series};
use crate::table::{AggregateRows, RawTable, aggregate_rows};
use crate::topics::{ColumnBoost, TopicConfig, TopicKind, TopicResult};

/// Label recorded for topics that have no data yet.
pub const PLACEHOLDER_COLUMN: &str = "Manual Data Required";

fn single_column(
    table: &RawTable,
    agg: &AggregateRows<'_>,
    boost: Option<ColumnBoost>,
) -> Result<(ObservedSeries, String)> {
    let col = select_value_column(&table.headers, agg.entity_col, agg.year_col, boost)?;
    let series = build_series(&agg.rows, agg.year_col, col)?;
    Ok((series, table.headers[col].clone()))
}

/// Turns a fetched table into a result for `topic`.
///
/// Composite topics sum their contributing columns and never go through
/// column scoring.
///
/// # Errors
///
/// Any [`TopicError`] from row filtering, column selection or series
/// building. A composite topic with none of its contributing columns, and
/// any manual topic, is rejected with [`TopicError::NoValueColumn`].
pub fn process_table(
    table: &RawTable,
    topic: &TopicConfig,
    now: DateTime<Utc>,
) -> Result<TopicResult> {
    let agg = aggregate_rows(table)?;

    let (series, column) = match topic.kind {
        TopicKind::Fetched { boost } => single_column(table, &agg, boost)?,
        TopicKind::FetchedComposite { parts, label } => {
            let cols: Vec<usize> = locate_parts(&table.headers, parts)
                .into_iter()
                .flatten()
                .collect();
            if cols.is_empty() {
                return Err(TopicError::NoValueColumn);
            }
            let series = build_summed_series(&agg.rows, agg.year_col, &cols)?;
            (series, label.to_string())
        }
        TopicKind::ManualLiteral(_) => return Err(TopicError::NoValueColumn),
    };

    Ok(TopicResult::new(
        topic,
        series.latest,
        column,
        series.points,
        now,
    ))
}

/// Builds the result for a manual topic from its literal data, or a
/// placeholder with no value when it has none.
pub fn manual_result(topic: &TopicConfig, now: DateTime<Utc>) -> TopicResult {
    let literal = match topic.kind {
        TopicKind::ManualLiteral(Some(series)) => series.points.last().map(|&p| (series, p)),
        _ => None,
    };

    match literal {
        Some((series, latest)) => {
            let mut result = TopicResult::new(
                topic,
                latest,
                series.value_column,
                series.points.to_vec(),
                now,
            );
            result.description = series.description.to_string();
            result
        }
        None => TopicResult {
            id: topic.id.to_string(),
            title: topic.title.to_string(),
            description: topic.description.to_string(),
            source: topic.source,
            slug: topic.slug.map(str::to_string),
            direction: topic.direction,
            year: now.year(),
            value: None,
            value_column: PLACEHOLDER_COLUMN.to_string(),
            data_points: Vec::new(),
            last_updated: now,
        },
    }
}

fn is_fetched(topic: &TopicConfig) -> bool {
    matches!(
        topic.kind,
        TopicKind::Fetched { .. } | TopicKind::FetchedComposite { .. }
    )
}

/// Fetches and processes every fetched topic concurrently.
///
/// Each topic runs in its own task; request starts are throttled by one
/// shared [`RateLimiter`]. A failing topic is logged and left out. Returns
/// once every task has finished.
#[tracing::instrument(skip_all, fields(base_url = %config.base_url))]
pub async fn collect_external<C: HttpClient + 'static>(
    topics: &[TopicConfig],
    client: Arc<C>,
    config: &FetchConfig,
    shutdown: Shutdown,
) -> HashMap<String, TopicResult> {
    let limiter = Arc::new(RateLimiter::new(config.rate_interval));
    let results: Arc<Mutex<HashMap<String, TopicResult>>> = Arc::default();

    let mut tasks = vec![];

    for topic in topics.iter().filter(|t| is_fetched(t)).copied() {
        let Some(slug) = topic.slug else {
            warn!(topic = topic.id, "Fetched topic has no slug, skipping");
            continue;
        };
        let url = resolve_url(&config.base_url, slug);

        let client = client.clone();
        let limiter = limiter.clone();
        let results = results.clone();
        let mut shutdown = shutdown.clone();

        let topic_span = tracing::info_span!("process_topic", topic = topic.id, url = %url);

        let task = tokio::spawn(
            async move {
                let outcome = fetch_table(client.as_ref(), &limiter, &url, &mut shutdown)
                    .await
                    .and_then(|table| process_table(&table, &topic, Utc::now()));

                match outcome {
                    Ok(result) => {
                        info!(
                            year = result.year,
                            column = %result.value_column,
                            points = result.data_points.len(),
                            "Processed {}",
                            topic.title
                        );
                        results
                            .lock()
                            .unwrap_or_else(PoisonError::into_inner)
                            .insert(topic.id.to_string(), result);
                    }
                    Err(TopicError::Cancelled) => warn!("Topic cancelled"),
                    Err(e) => error!(error = %e, "Topic failed"),
                }
            }
            .instrument(topic_span),
        );

        tasks.push(task);
    }

    for task in tasks {
        if let Err(e) = task.await {
            error!(error = %e, "Topic task aborted");
        }
    }

    let mut guard = results.lock().unwrap_or_else(PoisonError::into_inner);
    std::mem::take(&mut *guard)
}

/// Runs the fetch phase, then adds every manual topic. Keys are topic IDs.
pub async fn collect_all<C: HttpClient + 'static>(
    topics: &[TopicConfig],
    client: Arc<C>,
    config: &FetchConfig,
    shutdown: Shutdown,
) -> BTreeMap<String, TopicResult> {
    let mut dataset: BTreeMap<String, TopicResult> =
        collect_external(topics, client, config, shutdown)
            .await
            .into_iter()
            .collect();

    let now = Utc::now();
    for topic in topics.iter().filter(|t| !is_fetched(t)) {
        dataset.insert(topic.id.to_string(), manual_result(topic, now));
    }

    info!(
        processed = dataset.len(),
        configured = topics.len(),
        "Collection finished"
    );
    dataset
}
