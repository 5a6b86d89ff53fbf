//! HTTP retrieval of grapher CSV exports.

mod basic;
mod client;
mod limiter;
mod shutdown;

pub use basic::BasicClient;
pub use client::HttpClient;
pub use limiter::RateLimiter;
pub use shutdown::Shutdown;

use crate::error::{Result, TopicError};
use crate::table::RawTable;
use tracing::debug;

/// Turns a topic locator into a retrieval URL.
///
/// Full URLs are used verbatim, locators that already carry a query string or
/// a `.csv` extension are appended to `base`, and bare slugs get `.csv` added.
pub fn resolve_url(base: &str, slug: &str) -> String {
    if slug.starts_with("http://") || slug.starts_with("https://") {
        slug.to_string()
    } else if slug.contains(".csv") || slug.contains('?') {
        format!("{base}{slug}")
    } else {
        format!("{base}{slug}.csv")
    }
}

/// Issues a GET and returns the body of a successful response.
///
/// # Errors
///
/// Fails on an unparseable URL, a transport error, or a non-2xx status.
pub async fn fetch_bytes<C: HttpClient + ?Sized>(client: &C, url: &str) -> Result<Vec<u8>> {
    let parsed = url.parse().map_err(|_| TopicError::Url(url.to_string()))?;
    let req = reqwest::Request::new(reqwest::Method::GET, parsed);

    let resp = client.execute(req).await?;
    let status = resp.status();
    if !status.is_success() {
        return Err(TopicError::Status(status));
    }
    Ok(resp.bytes().await?.to_vec())
}

/// Waits for a rate-limit slot, downloads `url` and decodes it as CSV.
///
/// Cancellation is observed both while waiting for the slot and while the
/// request is in flight.
pub async fn fetch_table<C: HttpClient + ?Sized>(
    client: &C,
    limiter: &RateLimiter,
    url: &str,
    shutdown: &mut Shutdown,
) -> Result<RawTable> {
    limiter.acquire(shutdown).await?;

    let bytes = tokio::select! {
        res = fetch_bytes(client, url) => res?,
        _ = shutdown.cancelled() => return Err(TopicError::Cancelled),
    };
    debug!(bytes = bytes.len(), "CSV received, decoding");

    RawTable::from_csv(&bytes)
}


#[cfg(test)]
mod tests {
    use super::testing::FakeClient;
    use super::*;
    use std::time::Duration;

    const BASE: &str = "https://ourworldindata.org/grapher/";

    #[test]
    fn test_resolve_url_bare_slug() {
        assert_eq!(
            resolve_url(BASE, "life-expectancy"),
            "https://ourworldindata.org/grapher/life-expectancy.csv"
        );
    }

    #[test]
    fn test_resolve_url_with_query() {
        assert_eq!(
            resolve_url(BASE, "democracies.csv?v=1&csvType=full"),
            "https://ourworldindata.org/grapher/democracies.csv?v=1&csvType=full"
        );
        assert_eq!(
            resolve_url(BASE, "democracies?v=1"),
            "https://ourworldindata.org/grapher/democracies?v=1"
        );
    }

    #[test]
    fn test_resolve_url_verbatim() {
        let url = "http://example.org/data.csv";
        assert_eq!(resolve_url(BASE, url), url);
    }

    #[tokio::test]
    async fn test_fetch_bytes_success() {
        let client = FakeClient::default().route("http://example.org/a.csv", 200, "x,y\n");
        let bytes = fetch_bytes(&client, "http://example.org/a.csv").await.unwrap();
        assert_eq!(bytes, b"x,y\n");
    }

    #[tokio::test]
    async fn test_fetch_bytes_non_success_status() {
        let client = FakeClient::default().route("http://example.org/a.csv", 500, "oops");
        let err = fetch_bytes(&client, "http://example.org/a.csv").await.unwrap_err();
        assert!(matches!(err, TopicError::Status(s) if s.as_u16() == 500));
    }

    #[tokio::test]
    async fn test_fetch_bytes_bad_url() {
        let client = FakeClient::default();
        let err = fetch_bytes(&client, "not a url").await.unwrap_err();
        assert!(matches!(err, TopicError::Url(_)));
    }

    #[tokio::test]
    async fn test_fetch_table_decodes_csv() {
        let client = FakeClient::default().route(
            "http://example.org/a.csv",
            200,
            "Entity,Year,Share\nWorld,2000,1\n",
        );
        let limiter = RateLimiter::new(Duration::from_millis(1));
        let mut shutdown = Shutdown::never();
        let table = fetch_table(&client, &limiter, "http://example.org/a.csv", &mut shutdown)
            .await
            .unwrap();
        assert_eq!(table.headers.len(), 3);
        assert_eq!(table.rows.len(), 1);
    }

    #[tokio::test]
    async fn test_fetch_table_cancels_in_flight_request() {
        let client = FakeClient {
            delay: Some(Duration::from_secs(60)),
            ..FakeClient::default()
        };
        let limiter = RateLimiter::new(Duration::from_millis(1));
        let (tx, mut shutdown) = Shutdown::new();

        let task = tokio::spawn(async move {
            fetch_table(&client, &limiter, "http://example.org/a.csv", &mut shutdown).await
        });
        tokio::time::sleep(Duration::from_millis(20)).await;
        tx.send(true).unwrap();

        let res = tokio::time::timeout(Duration::from_secs(1), task)
            .await
            .expect("in-flight request should be abandoned")
            .unwrap();
        assert!(matches!(res, Err(TopicError::Cancelled)));
    }
}
