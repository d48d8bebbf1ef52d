// src/net.rs
//
// Blocking HTTP GET. One request at a time; no timeout, no retry.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::config::consts::USER_AGENT;
use crate::error::{Error, Result};

fn client(url: &str) -> Result<Client> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Option::<Duration>::None) // blocking client otherwise stops at 30s
        .build()
        .map_err(|source| Error::Fetch { url: s!(url), source })
}

/// GET `url` and return the body. Non-2xx is an error.
pub fn http_get_bytes(url: &str) -> Result<Vec<u8>> {
    let fail = |source: reqwest::Error| Error::Fetch { url: s!(url), source };

    tracing::debug!(url, "GET");
    let resp = client(url)?
        .get(url)
        .send()
        .and_then(|r| r.error_for_status())
        .map_err(fail)?;
    let body = resp.bytes().map_err(fail)?;
    tracing::debug!(url, bytes = body.len(), "GET done");
    Ok(body.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    /// Answer exactly one request with `response`; returns a URL on that server.
    fn serve_once(response: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut buf = [0u8; 4096];
            let _ = stream.read(&mut buf);
            stream.write_all(response.as_bytes()).unwrap();
        });
        format!("http://{addr}/games.csv")
    }

    #[test]
    fn body_of_a_200() {
        let url = serve_once("HTTP/1.1 200 OK\r\nContent-Length: 12\r\nConnection: close\r\n\r\nseason\n2020\n");
        assert_eq!(http_get_bytes(&url).unwrap(), b"season\n2020\n");
    }

    #[test]
    fn http_status_errors_carry_the_url() {
        let url = serve_once("HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n");
        match http_get_bytes(&url) {
            Err(Error::Fetch { url: failed, .. }) => assert_eq!(failed, url),
            other => panic!("expected Fetch error, got {other:?}"),
        }
    }

    #[test]
    fn refused_connection_is_a_fetch_error() {
        let addr = TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap();
        let url = format!("http://{addr}/games.csv");
        assert!(matches!(http_get_bytes(&url), Err(Error::Fetch { .. })));
    }
}
