//! This module contains common utilities for simplifying the writing of
//! integration tests for this library.

#![cfg(test)]

use std::{
    io,
    io::{Read, Write},
    net::TcpListener,
    thread,
    thread::JoinHandle,
};

use solc_version_inference::{
    release::{Config, HttpCatalogFetcher},
    Bytecode,
};

/// A published list of releases, trimmed down to a handful of entries.
#[allow(unused)] // It is actually
pub const LIST_JSON: &str = r#"{
    "builds": [
        {
            "path": "soljson-v0.8.4+commit.c7e474f2.js",
            "version": "0.8.4",
            "build": "commit.c7e474f2",
            "longVersion": "0.8.4+commit.c7e474f2"
        }
    ],
    "releases": {
        "0.8.9": "soljson-v0.8.9+commit.e5eed63a.js",
        "0.8.4": "soljson-v0.8.4+commit.c7e474f2.js",
        "0.5.11": "soljson-v0.5.11+commit.c082d0b4.js",
        "0.4.26": "soljson-v0.4.26+commit.4563c3fc.js"
    },
    "latestRelease": "0.8.9"
}"#;

/// Gets the bytecode from the provided hex-encoded string `code`.
///
/// This hex-encoded string may or may not start with the `0x` prefix. Both
/// cases will be handled.
#[allow(unused)] // It is actually
pub fn get_bytecode_from_string(code: impl AsRef<str>) -> anyhow::Result<Bytecode> {
    Ok(Bytecode::from_hex(code.as_ref())?)
}

/// Starts a server on a local port that answers exactly one HTTP request with
/// the given `status` line (e.g. `200 OK`) and `body`.
///
/// Returns the URL to request and the handle of the thread serving it. Joining
/// the handle yields any I/O error the server hit while answering.
#[allow(unused)] // It is actually
pub fn serve_once(
    status: &str,
    body: &str,
) -> anyhow::Result<(String, JoinHandle<io::Result<()>>)> {
    let listener = TcpListener::bind("127.0.0.1:0")?;
    let address = listener.local_addr()?;
    let response = format!(
        "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: \
         close\r\n\r\n{body}",
        body.len()
    );

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept()?;

        // Read the request head before answering so the client is not reset.
        let mut request = vec![];
        let mut buffer = [0u8; 1024];
        while !request.windows(4).any(|window| window == b"\r\n\r\n") {
            match stream.read(&mut buffer)? {
                0 => break,
                read => request.extend_from_slice(&buffer[..read]),
            }
        }

        stream.write_all(response.as_bytes())?;
        stream.flush()
    });

    Ok((format!("http://{address}/bin/list.json"), handle))
}

/// Gets a URL on a local port where nothing is listening.
#[allow(unused)] // It is actually
pub fn unreachable_url() -> anyhow::Result<String> {
    let listener = TcpListener::bind("127.0.0.1:0")?;
    let address = listener.local_addr()?;
    drop(listener);

    Ok(format!("http://{address}/bin/list.json"))
}

/// Constructs a fetcher for the list of releases at `url`, using the default
/// configuration otherwise.
#[allow(unused)] // It is actually
pub fn fetcher_for(url: impl Into<String>) -> HttpCatalogFetcher {
    HttpCatalogFetcher::new(Config::default().with_list_url(url))
}
