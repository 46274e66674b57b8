use std::time::Duration;

use permits_lib::{Client, ResultsView, SearchParams, SearchPipeline, NO_RESULTS};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const RESOURCE: &str = "/resource/it4w-cpf4.json";
const SINGLE: &str = include_str!("../../permits_api/tests/fixtures/permits_single.json");
const PAIR: &str = include_str!("../../permits_api/tests/fixtures/permits.json");

fn pipeline(server: &MockServer) -> SearchPipeline {
    SearchPipeline::new(Client::with_base_url(&server.uri()))
}

#[tokio::test]
async fn search_success_renders_blocks() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(RESOURCE))
        .and(query_param("$order", "issue_date desc"))
        .and(query_param("$where", "lower(permit_type) like '%housing%'"))
        .and(query_param("$limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_string(SINGLE))
        .expect(1)
        .mount(&mock_server)
        .await;

    let pipeline = pipeline(&mock_server);
    let report = pipeline
        .search(&SearchParams::new("Housing", "desc", "10"))
        .await;
    assert!(report.applied);
    assert!(!report.failed);
    assert_eq!(report.count, 1);

    let view = pipeline.view();
    assert_eq!(view.blocks().len(), 1);
    let block = view.block("BP-2022-10001").unwrap();
    assert_eq!(block.issue_date, "2022-11-30T00:00:00.000");
    assert_eq!(block.permit_type, "Housing Renovation");
    assert_eq!(block.work_type, "Interior Alteration");
    assert_eq!(block.neighbourhood_name, "RIVER HEIGHTS");
    assert_eq!(block.community, "RIVER HEIGHTS - FORT GARRY");
    assert_eq!(block.status, "Finaled");
    assert_eq!(block.final_date, "2023-02-15T00:00:00.000");
}

#[tokio::test]
async fn server_error_clears_results() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(RESOURCE))
        .and(query_param("$limit", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_string(PAIR))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path(RESOURCE))
        .and(query_param("$limit", "6"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .mount(&mock_server)
        .await;

    let pipeline = pipeline(&mock_server);
    pipeline.search(&SearchParams::new("", "asc", "5")).await;
    assert_eq!(pipeline.results().len(), 2);

    let report = pipeline.search(&SearchParams::new("", "asc", "6")).await;
    assert!(report.failed);
    assert!(report.applied);
    assert!(pipeline.results().is_empty());
    assert_eq!(pipeline.view().to_string(), NO_RESULTS);
}

#[tokio::test]
async fn empty_success_matches_failure_display() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(RESOURCE))
        .and(query_param("$where", "lower(permit_type) like '%nothing%'"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path(RESOURCE))
        .and(query_param("$where", "lower(permit_type) like '%broken%'"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&mock_server)
        .await;

    let pipeline = pipeline(&mock_server);

    let empty = pipeline.search(&SearchParams::new("nothing", "asc", "")).await;
    assert!(!empty.failed);
    let empty_view = pipeline.view();

    let broken = pipeline.search(&SearchParams::new("broken", "asc", "")).await;
    assert!(broken.failed);
    let failed_view = pipeline.view();

    assert_eq!(empty_view, ResultsView::NoResults);
    assert_eq!(empty_view, failed_view);
    assert_eq!(failed_view.to_string(), "No results found.");
}

#[tokio::test]
async fn invalid_order_fails_without_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(SINGLE))
        .expect(0)
        .mount(&mock_server)
        .await;

    let pipeline = pipeline(&mock_server);
    let report = pipeline
        .search(&SearchParams::new("housing", "upward", "10"))
        .await;
    assert!(report.failed);
    assert!(pipeline.view().is_empty());
}

#[tokio::test]
async fn unreachable_host_yields_empty_list() {
    let pipeline = SearchPipeline::new(Client::with_base_url("http://127.0.0.1:9"));
    let report = pipeline.search(&SearchParams::default()).await;
    assert!(report.failed);
    assert_eq!(report.count, 0);
    assert!(pipeline.results().is_empty());
}

#[tokio::test]
async fn slow_older_response_is_discarded() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(RESOURCE))
        .and(query_param("$limit", "1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(PAIR)
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path(RESOURCE))
        .and(query_param("$limit", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_string(SINGLE))
        .mount(&mock_server)
        .await;

    let pipeline = pipeline(&mock_server);
    let older = SearchParams::new("", "asc", "1");
    let newer = SearchParams::new("", "asc", "2");
    let (first, second) = tokio::join!(pipeline.search(&older), pipeline.search(&newer));

    assert!(first.ticket < second.ticket);
    assert!(second.applied);
    assert!(!first.applied);
    assert_eq!(first.count, 2);

    let results = pipeline.results();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].key(), "BP-2022-10001");

    let (shown, view) = pipeline.current();
    assert_eq!(shown, Some(second.ticket));
    assert_eq!(view.blocks().len(), 1);
    assert!(view.block("BP-2022-10001").is_some());
}

#[tokio::test]
async fn in_order_responses_all_apply() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(RESOURCE))
        .and(query_param("$limit", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(PAIR))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path(RESOURCE))
        .and(query_param("$limit", "2"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(SINGLE)
                .set_delay(Duration::from_millis(300)),
        )
        .mount(&mock_server)
        .await;

    let pipeline = pipeline(&mock_server);
    let older = SearchParams::new("", "asc", "1");
    let newer = SearchParams::new("", "asc", "2");
    let (first, second) = tokio::join!(pipeline.search(&older), pipeline.search(&newer));

    assert!(first.applied);
    assert!(second.applied);
    assert_eq!(pipeline.results().len(), 1);
}

#[tokio::test]
async fn url_matches_request() {
    let pipeline = SearchPipeline::new(Client::with_base_url("https://example.com"));
    let url = pipeline
        .url(&SearchParams::new("housing", "desc", "10"))
        .unwrap();
    assert_eq!(
        url.as_str(),
        "https://example.com/resource/it4w-cpf4.json?%24order=issue_date+desc&%24where=lower%28permit_type%29+like+%27%25housing%25%27&%24limit=10"
    );
    assert!(pipeline
        .url(&SearchParams::new("housing", "sideways", "10"))
        .is_err());
}
