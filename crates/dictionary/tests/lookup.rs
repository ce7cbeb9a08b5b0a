use dictionary::{Dictionary, DictionaryConfig, ResponseParseError};
use serde_json::Value;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

const IMPLEMENT: &str = include_str!("fixtures/implement.json");

const IMPLEMENT_REPORT: &str = "implement

Pronunciations:
   /ˈɪmplɪmənt/
   /ˈɪmplɪmənt/ (American)
   /ˈɪmplɪmɛnt/ (British)

1. Noun
   1. A tool or instrument for working with.
   2. (chiefly in the plural) Equipment, utensils, or accessories.
   Synonyms: tool, utensil

1. Verb
   1. To bring about; to put into practice.
      Example: \"We will implement the new policy next month.\"
   2. To fulfill or complete.
   Synonyms: carry out, enact, execute
   Antonyms: abandon";

const NOT_FOUND: &str = r#"{"title":"No Definitions Found","message":"Sorry pal, we couldn't find definitions for the word you were looking for.","resolution":"You can try the search again at later time or head to the web instead."}"#;

/// Serves a single HTTP response and yields the request line it received.
async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request: Vec<u8> = Vec::new();
        let mut buffer = [0u8; 1024];
        while !request.windows(4).any(|window| window == b"\r\n\r\n") {
            let read = socket.read(&mut buffer).await.unwrap();
            if read == 0 {
                break;
            }
            request.extend_from_slice(&buffer[..read]);
        }
        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.unwrap();
        let request = String::from_utf8_lossy(&request).into_owned();
        request.lines().next().unwrap_or_default().to_owned()
    });
    (format!("http://{address}/api/v2/entries"), handle)
}

fn client(api_url: String) -> Dictionary {
    let config = DictionaryConfig {
        api_url,
        timeout_seconds: Some(5),
        ..Default::default()
    };
    Dictionary::with_config(&config).unwrap()
}

#[test]
fn fixture_renders_full_report() {
    let response: Value = serde_json::from_str(IMPLEMENT).unwrap();
    assert_eq!(dictionary::format_report(&response), IMPLEMENT_REPORT);
}

#[tokio::test]
async fn defines_word_from_api() {
    let (api_url, request) = serve_once("200 OK", IMPLEMENT).await;
    let report = client(api_url).define("implement", "en").await.unwrap();
    assert_eq!(report, IMPLEMENT_REPORT);
    assert_eq!(request.await.unwrap(), "GET /api/v2/entries/en/implement HTTP/1.1");
}

#[tokio::test]
async fn encodes_word_in_request_path() {
    let (api_url, request) = serve_once("200 OK", "[]").await;
    let report = client(api_url).define("ice cream", "en").await.unwrap();
    assert_eq!(report, "No entries found.");
    assert_eq!(request.await.unwrap(), "GET /api/v2/entries/en/ice%20cream HTTP/1.1");
}

#[tokio::test]
async fn unknown_word_renders_placeholder() {
    let (api_url, _) = serve_once("404 Not Found", NOT_FOUND).await;
    let dictionary = client(api_url);
    let report = dictionary.define("qwertyuiop", "en").await.unwrap();
    assert_eq!(report, "No entries found.");
}

#[tokio::test]
async fn unknown_word_passes_error_object_through() {
    let (api_url, _) = serve_once("404 Not Found", NOT_FOUND).await;
    let response = client(api_url).fetch("qwertyuiop", "en").await.unwrap();
    assert_eq!(response["title"], "No Definitions Found");
}

#[tokio::test]
async fn non_json_body_is_a_parse_error() {
    let (api_url, _) = serve_once("502 Bad Gateway", "<html>bad gateway</html>").await;
    let error = client(api_url).define("cat", "en").await.unwrap_err();
    assert_eq!(error, ResponseParseError);
    assert_eq!(error.to_string(), "Response Parse Error");
}

#[tokio::test]
async fn connection_failure_is_a_parse_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    drop(listener);
    let api_url = format!("http://{address}/api/v2/entries");
    let error = client(api_url).define("cat", "en").await.unwrap_err();
    assert_eq!(error.to_string(), "Response Parse Error");
}

#[tokio::test]
async fn structured_lookup_uses_first_entry() {
    let (api_url, _) = serve_once("200 OK", IMPLEMENT).await;
    let structured = client(api_url)
        .define_structured("implement", "en")
        .await
        .unwrap();
    assert_eq!(structured.pronunciations.len(), 1);
    assert_eq!(structured.pronunciations[0].region, "us");
    assert_eq!(structured.explanations[0].part_of_speech, "noun");
    assert_eq!(structured.associations, vec!["tool", "utensil"]);
    assert!(structured.sentence.is_empty());
}

#[tokio::test]
async fn structured_lookup_of_unknown_word_fails() {
    let (api_url, _) = serve_once("404 Not Found", NOT_FOUND).await;
    let error = client(api_url)
        .define_structured("qwertyuiop", "en")
        .await
        .unwrap_err();
    assert_eq!(error, ResponseParseError);
}
