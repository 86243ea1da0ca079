//! Tests for the HTTP provider against a one-shot local server.

use ignore_core::{Document, Error, TemplateProvider};
use ignore_provider::{HttpTemplateProvider, ProviderConfig};
use pretty_assertions::assert_eq;
use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};

/// Serve a single response and hand back the request line.
fn serve_once(status_line: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base_url = format!("http://{}/api/", listener.local_addr().unwrap());

    let handle = thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream.try_clone().unwrap());

        let mut request_line = String::new();
        reader.read_line(&mut request_line).unwrap();
        loop {
            let mut header = String::new();
            reader.read_line(&mut header).unwrap();
            if header == "\r\n" || header.is_empty() {
                break;
            }
        }

        let mut stream = stream;
        write!(
            stream,
            "HTTP/1.1 {}\r\nContent-Type: text/plain\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        )
        .unwrap();
        stream.flush().unwrap();

        request_line.trim_end().to_string()
    });

    (base_url, handle)
}

fn provider(base_url: String) -> HttpTemplateProvider {
    HttpTemplateProvider::new(ProviderConfig {
        base_url,
        timeout_secs: 5,
        use_system_proxy: false,
    })
    .unwrap()
}

#[test]
fn test_fetch_returns_body_and_requests_joined_tokens() {
    let (base_url, server) = serve_once("200 OK", "*.pyc\n");

    let body = provider(base_url).fetch(&["python", "rust"]).unwrap();
    assert_eq!(body, "*.pyc\n");

    let request_line = server.join().unwrap();
    assert_eq!(request_line, "GET /api/python,rust HTTP/1.1");
}

#[test]
fn test_non_200_status_is_provider_error() {
    let (base_url, server) = serve_once("404 Not Found", "unknown token");

    let err = provider(base_url).fetch(&["nope"]).unwrap_err();
    match err {
        Error::ProviderStatus { url, status } => {
            assert_eq!(status, 404);
            assert!(url.ends_with("/api/nope"));
        }
        other => panic!("unexpected error: {other}"),
    }
    server.join().unwrap();
}

#[test]
fn test_other_success_status_is_still_an_error() {
    let (base_url, server) = serve_once("204 No Content", "");

    let err = provider(base_url).fetch(&["python"]).unwrap_err();
    assert!(matches!(err, Error::ProviderStatus { status: 204, .. }));
    server.join().unwrap();
}

#[test]
fn test_connection_failure_is_request_error() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base_url = format!("http://{}/api/", listener.local_addr().unwrap());
    drop(listener);

    let err = provider(base_url).fetch(&["python"]).unwrap_err();
    assert!(matches!(err, Error::ProviderRequest { .. }));
    assert!(err.is_provider_error());
}

#[test]
fn test_refresh_through_http_provider() {
    let (base_url, server) = serve_once("200 OK", "*.pyc\r\n__pycache__/\r\n");

    let mut doc = Document::new();
    doc.refresh(&provider(base_url), &["python"], &["/extra"]).unwrap();
    server.join().unwrap();

    assert!(doc.generated_content.contains("*.pyc\n__pycache__/\n"));
    assert!(doc.check_generation_parameters(&["python"], &["/extra"]));
}
