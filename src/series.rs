//! Series construction and downsampling.

use std::collections::BTreeMap;

use crate::error::{Result, TopicError};
use crate::topics::DataPoint;

/// Series longer than this are thinned out.
pub const MAX_POINTS: usize = 20;

/// A deduplicated, ascending series and its latest observation.
#[derive(Debug, Clone, PartialEq)]
pub struct ObservedSeries {
    pub latest: DataPoint,
    pub points: Vec<DataPoint>,
}

fn parse_cell<T: std::str::FromStr>(row: &[String], col: usize) -> Option<T> {
    row.get(col)?.parse().ok()
}

/// Like [`parse_cell`], but `NaN` and infinities count as unparseable.
fn parse_value(row: &[String], col: usize) -> Option<f64> {
    parse_cell::<f64>(row, col).filter(|v| v.is_finite())
}

/// Finishes a year-keyed map into an [`ObservedSeries`].
fn finish(by_year: BTreeMap<i32, f64>) -> Result<ObservedSeries> {
    let points: Vec<DataPoint> = by_year
        .into_iter()
        .map(|(year, value)| DataPoint { year, value })
        .collect();

    let latest = *points.last().ok_or(TopicError::NoValidDataPoints)?;
    Ok(ObservedSeries {
        latest,
        points: downsample(points),
    })
}

/// Builds the series from one year column and one value column.
///
/// Rows whose year or value does not parse, or whose value is not finite,
/// are skipped. When a year repeats,
/// the last row wins.
///
/// # Errors
///
/// Returns [`TopicError::NoValidDataPoints`] when no row parses.
pub fn build_series(rows: &[&[String]], year_col: usize, value_col: usize) -> Result<ObservedSeries> {
    let mut by_year = BTreeMap::new();
    for row in rows {
        let (Some(year), Some(value)) = (parse_cell::<i32>(row, year_col), parse_value(row, value_col))
        else {
            continue;
        };
        by_year.insert(year, value);
    }
    finish(by_year)
}

/// Builds a series whose value for each year is the sum of whichever of
/// `value_cols` parse to a finite number in that row. Rows where none parse are skipped.
///
/// # Errors
///
/// Returns [`TopicError::NoValidDataPoints`] when no row contributes.
pub fn build_summed_series(
    rows: &[&[String]],
    year_col: usize,
    value_cols: &[usize],
) -> Result<ObservedSeries> {
    let mut by_year = BTreeMap::new();
    for row in rows {
        let Some(year) = parse_cell::<i32>(row, year_col) else {
            continue;
        };
        let values: Vec<f64> = value_cols
            .iter()
            .filter_map(|&col| parse_value(row, col))
            .collect();
        if values.is_empty() {
            continue;
        }
        by_year.insert(year, values.iter().sum());
    }
    finish(by_year)
}

/// Keeps every `len / MAX_POINTS`-th point of an ascending series longer than
/// [`MAX_POINTS`], always ending on the latest point.
pub fn downsample(points: Vec<DataPoint>) -> Vec<DataPoint> {
    if points.len() <= MAX_POINTS {
        return points;
    }

    let stride = (points.len() / MAX_POINTS).max(1);
    let mut sampled: Vec<DataPoint> = points.iter().step_by(stride).copied().collect();

    if let Some(&latest) = points.last() {
        if sampled.last().map(|p| p.year) != Some(latest.year) {
            sampled.push(latest);
        }
    }
    sampled
}
