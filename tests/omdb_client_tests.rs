use marquee::omdb::{OmdbClient, OmdbError};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Helper Functions
// ============================================================================

/// Client pointed at the mock server with the standard test key.
fn client(server: &MockServer) -> OmdbClient {
    OmdbClient::new("test-key".to_string(), Some(server.uri()))
}

const SEARCH_BODY: &str = r#"{
  "Search": [
    {"Title": "Blade Runner", "Year": "1982", "imdbID": "tt0083658", "Type": "movie", "Poster": "https://m.media-amazon.com/images/M/br.jpg"},
    {"Title": "Blade Runner 2049", "Year": "2017", "imdbID": "tt1856101", "Type": "movie", "Poster": "N/A"}
  ],
  "totalResults": "35",
  "Response": "True"
}"#;

const DETAIL_BODY: &str = r#"{
  "Title": "Blade Runner",
  "Year": "1982",
  "Rated": "R",
  "Released": "25 Jun 1982",
  "Runtime": "117 min",
  "Genre": "Action, Drama, Sci-Fi",
  "Director": "Ridley Scott",
  "Writer": "Hampton Fancher, David Webb Peoples, Philip K. Dick",
  "Actors": "Harrison Ford, Rutger Hauer, Sean Young",
  "Plot": "A blade runner must pursue and terminate four replicants who stole a ship in space and have returned to Earth to find their creator.",
  "Language": "English, German, Cantonese, Japanese, Hungarian, Arabic, Korean",
  "Country": "United States, United Kingdom",
  "Awards": "Nominated for 2 Oscars. 13 wins & 22 nominations total",
  "Poster": "https://m.media-amazon.com/images/M/br-full.jpg",
  "imdbRating": "8.1",
  "imdbVotes": "832,648",
  "imdbID": "tt0083658",
  "Type": "movie",
  "BoxOffice": "$32,914,489",
  "Response": "True"
}"#;

// ============================================================================
// Search Tests
// ============================================================================

#[tokio::test]
async fn test_search_success_builds_expected_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .and(query_param("apikey", "test-key"))
        .and(query_param("s", "blade runner"))
        .and(query_param("type", "movie"))
        .respond_with(ResponseTemplate::new(200).set_body_string(SEARCH_BODY))
        .expect(1)
        .mount(&mock_server)
        .await;

    let page = client(&mock_server).search("blade runner").await.unwrap();

    assert_eq!(page.total_results, "35");
    assert_eq!(page.movies.len(), 2);
    assert_eq!(page.movies[0].imdb_id, "tt0083658");
    assert_eq!(page.movies[0].title, "Blade Runner");
    assert_eq!(page.movies[1].imdb_id, "tt1856101");
    assert_eq!(page.movies[1].poster, "N/A");
}

#[tokio::test]
async fn test_search_no_results_is_a_provider_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"{"Response":"False","Error":"Movie not found!"}"#),
        )
        .mount(&mock_server)
        .await;

    let result = client(&mock_server).search("zzzzzz").await;

    assert!(matches!(
        result,
        Err(OmdbError::Provider { message: Some(ref m) }) if m == "Movie not found!"
    ));
}

#[tokio::test]
async fn test_search_refusal_without_message_still_maps_to_provider() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"Response":"False"}"#))
        .mount(&mock_server)
        .await;

    let result = client(&mock_server).search("anything").await;

    assert!(matches!(result, Err(OmdbError::Provider { message: None })));
}

#[tokio::test]
async fn test_search_success_without_search_field_yields_empty_page() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"{"Response":"True","totalResults":"0"}"#),
        )
        .mount(&mock_server)
        .await;

    let page = client(&mock_server).search("edge case").await.unwrap();

    assert!(page.movies.is_empty());
    assert_eq!(page.total_results, "0");
}

// ============================================================================
// Details Tests
// ============================================================================

#[tokio::test]
async fn test_details_success_requests_full_plot() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .and(query_param("apikey", "test-key"))
        .and(query_param("i", "tt0083658"))
        .and(query_param("plot", "full"))
        .respond_with(ResponseTemplate::new(200).set_body_string(DETAIL_BODY))
        .expect(1)
        .mount(&mock_server)
        .await;

    let detail = client(&mock_server).details("tt0083658").await.unwrap();

    assert_eq!(detail.title, "Blade Runner");
    assert_eq!(detail.director, "Ridley Scott");
    assert_eq!(detail.imdb_rating, "8.1");
    assert_eq!(detail.box_office.as_deref(), Some("$32,914,489"));
    assert!(detail.plot.contains("replicants"));
}

#[tokio::test]
async fn test_details_failure_is_a_provider_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"{"Response":"False","Error":"Incorrect IMDb ID."}"#),
        )
        .mount(&mock_server)
        .await;

    let result = client(&mock_server).details("tt0000000").await;

    assert!(matches!(
        result,
        Err(OmdbError::Provider { message: Some(ref m) }) if m == "Incorrect IMDb ID."
    ));
}

// ============================================================================
// Error Classification Tests
// ============================================================================

#[tokio::test]
async fn test_malformed_success_body_is_a_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
        .mount(&mock_server)
        .await;

    let result = client(&mock_server).search("anything").await;

    assert!(matches!(result, Err(OmdbError::Parse(_))));
}

#[tokio::test]
async fn test_http_error_without_envelope_is_an_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&mock_server)
        .await;

    let result = client(&mock_server).search("anything").await;

    assert!(matches!(result, Err(OmdbError::Api { status: 502, .. })));
}

#[tokio::test]
async fn test_http_error_with_envelope_still_reads_the_envelope() {
    let mock_server = MockServer::start().await;

    // OMDb sends 401 for bad keys, but the body is still a regular refusal
    // envelope, so it surfaces with the provider's own message
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_string(r#"{"Response":"False","Error":"Invalid API key!"}"#),
        )
        .mount(&mock_server)
        .await;

    let result = client(&mock_server).search("anything").await;

    assert!(matches!(
        result,
        Err(OmdbError::Provider { message: Some(ref m) }) if m == "Invalid API key!"
    ));
}

#[tokio::test]
async fn test_connection_failure_is_a_network_error() {
    // Nothing listens on port 1
    let omdb = OmdbClient::new("test-key".to_string(), Some("http://127.0.0.1:1/".to_string()));

    let result = omdb.search("anything").await;

    assert!(matches!(result, Err(OmdbError::Network(_))));
}

// ============================================================================
// Poster Download Tests
// ============================================================================

#[tokio::test]
async fn test_poster_download_returns_raw_bytes() {
    let mock_server = MockServer::start().await;

    let jpeg_bytes: Vec<u8> = vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10];
    Mock::given(method("GET"))
        .and(path("/poster.jpg"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(jpeg_bytes.clone()))
        .mount(&mock_server)
        .await;

    let url = format!("{}/poster.jpg", mock_server.uri());
    let bytes = client(&mock_server).fetch_poster(&url).await.unwrap();

    assert_eq!(bytes, jpeg_bytes);
}

#[tokio::test]
async fn test_poster_http_error_is_an_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/poster.jpg"))
        .respond_with(ResponseTemplate::new(404).set_body_string("gone"))
        .mount(&mock_server)
        .await;

    let url = format!("{}/poster.jpg", mock_server.uri());
    let result = client(&mock_server).fetch_poster(&url).await;

    assert!(matches!(result, Err(OmdbError::Api { status: 404, .. })));
}
