use chrono::{NaiveDate, Utc};
use progress_charts::collect::{manual_result, process_table};
use progress_charts::output::read_dataset;
use progress_charts::report::compose;
use progress_charts::table::RawTable;
use progress_charts::topics::{DataPoint, TOPICS, TopicConfig};
use std::collections::BTreeMap;
use std::fs;

fn topic(id: &str) -> &'static TopicConfig {
    TOPICS.iter().find(|t| t.id == id).expect("unknown topic")
}

#[test]
fn test_full_pipeline() {
    let csv = "Entity,Code,Year,Life expectancy at birth,Countries without data\n\
France,FRA,2000,79.0,0\n\
World,OWID_WRL,2000,66.5,12\n\
World,OWID_WRL,2021,71.0,3\n\
World,OWID_WRL,2023,73.16,2\n";
    let table = RawTable::from_csv(csv.as_bytes()).expect("Failed to parse CSV");
    let life = process_table(&table, topic("life-expectancy"), Utc::now()).unwrap();

    assert_eq!(life.value_column, "Life expectancy at birth");
    assert_eq!(life.year, 2023);
    assert_eq!(life.data_points.last(), Some(&DataPoint { year: 2023, value: 73.16 }));

    let smallpox = manual_result(topic("smallpox"), Utc::now());

    let dir = std::env::temp_dir().join("progress_charts_pipeline");
    let input = dir.join("chart-data.json");
    let post = dir.join("content/post.md");
    let mirror = dir.join("optimistic_charts.json");

    let dataset = BTreeMap::from([
        (life.id.clone(), life.clone()),
        (smallpox.id.clone(), smallpox),
    ]);
    progress_charts::output::write_dataset(&input, &dataset).unwrap();

    let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
    let count = compose(&input, &post, &mirror, date).unwrap();
    assert_eq!(count, 2);

    let text = fs::read_to_string(&post).unwrap();
    assert!(text.contains("## 1 Bad Things That Are Decreasing"));
    assert!(text.contains("## 1 Good Things That Are Increasing"));
    assert!(text.contains("Latest data (2023): 73.2 years"));
    assert!(text.contains("{{< chart id=\"life-expectancy\" >}}"));
    assert!(text.contains("{{< chart id=\"smallpox\" >}}"));

    assert_eq!(read_dataset(&mirror).unwrap(), dataset);

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_compose_fails_without_dataset() {
    let dir = std::env::temp_dir().join("progress_charts_missing");
    let res = compose(
        &dir.join("nope.json"),
        &dir.join("post.md"),
        &dir.join("mirror.json"),
        NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
    );
    assert!(res.is_err());
    assert!(!dir.join("post.md").exists());
}
