//! One-shot local HTTP server standing in for the weather API in tests.

use crate::weather::client::WeatherClient;
use reqwest::blocking::Client;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};

/// Serves exactly one HTTP response on a local port. Returns the URL to
/// request and a handle yielding the raw request the server received.
pub(crate) fn serve_once(status_line: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut buf = [0u8; 8192];
        let n = stream.read(&mut buf).unwrap();
        let request = String::from_utf8_lossy(&buf[..n]).to_string();
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        stream.write_all(response.as_bytes()).unwrap();
        stream.flush().unwrap();
        request
    });
    (format!("http://{}/data/2.5/weather", addr), handle)
}

/// A client pointed at `url`, bypassing any proxy configured in the environment.
pub(crate) fn client_for(url: String) -> WeatherClient {
    let http = Client::builder().no_proxy().build().unwrap();
    WeatherClient::builder().base_url(url).http_client(http).build()
}
