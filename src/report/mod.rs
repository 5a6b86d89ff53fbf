//! The composer: renders the dataset as a Markdown post for the site.
//!
//! The post body references each topic through a `{{< chart id="…" >}}`
//! shortcode; the site resolves those into charts using the mirrored
//! dataset.

mod format;

pub use format::{NOT_AVAILABLE, format_value};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::fmt::Write;
use std::fs;
use std::path::Path;
use tracing::info;

use crate::output::{ensure_parent_dir, read_dataset, write_dataset};
use crate::topics::{Polarity, TopicResult};

const TAGS: &str = r#"["progress", "data", "optimism"]"#;
const DESCRIPTION: &str = "Data-driven evidence that humanity is making remarkable progress across health, education, technology, and human rights.";

/// Topics split by which direction counts as progress.
#[derive(Debug, Default)]
pub struct Grouped<'a> {
    pub decreasing: Vec<&'a TopicResult>,
    pub increasing: Vec<&'a TopicResult>,
}

/// Partitions results by polarity, keeping iteration order within a group.
pub fn group_by_polarity<'a>(results: impl IntoIterator<Item = &'a TopicResult>) -> Grouped<'a> {
    let mut grouped = Grouped::default();
    for result in results {
        match result.direction {
            Polarity::Decreasing => grouped.decreasing.push(result),
            Polarity::Increasing => grouped.increasing.push(result),
        }
    }
    grouped
}

/// One `###` block: title, description, optional latest value and the chart
/// shortcode.
pub fn render_topic(out: &mut String, result: &TopicResult) {
    let latest = match result.value {
        Some(_) => format!(
            " Latest data ({}): {}",
            result.year,
            format_value(result.value, &result.value_column)
        ),
        None => String::new(),
    };

    let _ = write!(
        out,
        "\n### {}\n\n{}{}\n\n{{{{< chart id=\"{}\" >}}}}\n",
        result.title, result.description, latest, result.id
    );
}

/// Renders the complete post with front matter dated `date`.
pub fn render_report<'a>(
    results: impl IntoIterator<Item = &'a TopicResult>,
    date: NaiveDate,
) -> String {
    let grouped = group_by_polarity(results);
    let total = grouped.decreasing.len() + grouped.increasing.len();
    let date = date.format("%Y-%m-%d");

    let mut post = String::new();
    let _ = write!(
        post,
        "---
title: \"{total} Optimistic Charts: The World is Getting Better\"
date: {date}
tags: {TAGS}
description: \"{DESCRIPTION}\"
draft: false
---

The world often feels like it's falling apart, but the data tells a different story. Here are {total} charts showing measurable human progress across health, education, technology, environment, and human rights.

*Last updated: {date}*

## {} Bad Things That Are Decreasing
",
        grouped.decreasing.len()
    );

    for result in &grouped.decreasing {
        render_topic(&mut post, result);
    }

    let _ = write!(
        post,
        "\n## {} Good Things That Are Increasing\n\n",
        grouped.increasing.len()
    );

    for result in &grouped.increasing {
        render_topic(&mut post, result);
    }

    post.push_str(
        "
## The Big Picture

These charts represent decades of human effort, innovation, and cooperation. While challenges remain, the trajectory is clear: by most measures that matter for human wellbeing, we are making remarkable progress.

The data comes primarily from [Our World in Data](https://ourworldindata.org/), with additional sources including Gapminder, WHO, IMDb, and Discogs.

---

*This post is automatically updated monthly with the latest available data.*
",
    );

    post
}

/// Reads the dataset at `input`, writes the post to `post_path` and mirrors
/// the dataset to `shortcode_data` for the site's chart shortcodes.
///
/// Returns the number of topics rendered.
#[tracing::instrument(fields(input = %input.display()), skip_all)]
pub fn compose(input: &Path, post_path: &Path, shortcode_data: &Path, date: NaiveDate) -> Result<usize> {
    let dataset = read_dataset(input)?;

    let post = render_report(dataset.values(), date);
    ensure_parent_dir(post_path)?;
    fs::write(post_path, post).with_context(|| format!("Writing post {}", post_path.display()))?;
    info!(path = %post_path.display(), "Generated post");

    write_dataset(shortcode_data, &dataset)?;
    info!(path = %shortcode_data.display(), "Generated data file for shortcodes");

    Ok(dataset.len())
}
