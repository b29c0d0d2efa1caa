// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Lookup tests against a one-shot local HTTP responder.

#![cfg(not(target_arch = "wasm32"))]

use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;

use broadcast_room_client::{GeoClient, GeoError};
use broadcast_room_client::broadcast_room_types::GeoInfo;

/// Serve exactly one HTTP response and return the URL to hit.
fn serve_once(status_line: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let mut buf = [0u8; 4096];
            let mut request = Vec::new();
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                match stream.read(&mut buf) {
                    Ok(0) | Err(_) => break,
                    Ok(n) => request.extend_from_slice(&buf[..n]),
                }
            }
            let response = format!(
                "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = stream.write_all(response.as_bytes());
        }
    });
    format!("http://{addr}/json/")
}

#[tokio::test]
async fn successful_lookup() {
    let url = serve_once(
        "200 OK",
        r#"{"ip":"172.16.0.25","city":"Cairo","country_name":"Egypt","country_code":"EG"}"#,
    );
    let geo = GeoClient::new(&url).lookup().await.unwrap();
    assert_eq!(geo.city, "Cairo");
    assert_eq!(geo.country_code, "EG");
}

#[tokio::test]
async fn non_2xx_is_a_status_error() {
    let url = serve_once("429 Too Many Requests", r#"{"error":true}"#);
    let err = GeoClient::new(&url).lookup().await.unwrap_err();
    assert!(matches!(err, GeoError::Status { status: 429 }));
}

#[tokio::test]
async fn any_2xx_is_accepted() {
    let url = serve_once(
        "203 Non-Authoritative Information",
        r#"{"ip":"172.16.0.25","city":"Amman","country_name":"Jordan","country_code":"JO"}"#,
    );
    let geo = GeoClient::new(&url).lookup().await.unwrap();
    assert_eq!(geo.country_code, "JO");
}

#[tokio::test]
async fn shape_mismatch_falls_back_to_unknown() {
    let url = serve_once("200 OK", r#"{"ip":"1.2.3.4"}"#);
    let geo = GeoClient::new(&url).lookup_or_unknown().await;
    assert_eq!(geo, GeoInfo::unknown());
}

#[tokio::test]
async fn unreachable_service_falls_back_to_unknown() {
    // Bind then drop so the port is very likely closed.
    let port = TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let client = GeoClient::new(&format!("http://127.0.0.1:{port}/json/"));
    assert!(matches!(client.lookup().await, Err(GeoError::Network(_))));
    assert!(client.lookup_or_unknown().await.is_unknown());
}
