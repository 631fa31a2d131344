//! curl source.
//!
//! Fetches a URL with a blocking GET request, yielding the body line by line.
//! The request is sent on the first pull.
use std::io::{BufRead, BufReader, Lines};

use reqwest::blocking::{Client, Response};
use reqwest::Url;

use crate::error::Error;

enum State {
    Pending(String),
    Streaming(Lines<BufReader<Response>>),
    Done,
}

/// Line iterator over the body of an HTTP response.
pub struct Curl {
    client: Option<Client>,
    state: State,
}

impl Curl {
    /// Fetch `url` with a default client.
    pub fn new(url: &str) -> Self {
        Self {
            client: None,
            state: State::Pending(url.to_string()),
        }
    }

    /// Fetch `url` with a configured client (timeouts, user agent...).
    pub fn with_client(url: &str, client: Client) -> Self {
        Self {
            client: Some(client),
            state: State::Pending(url.to_string()),
        }
    }

    /// Send the request and check the response status.
    fn fetch(&mut self, url: &str) -> Result<Response, Error> {
        let url = Url::parse(url)?;
        let client = self.client.take().unwrap_or_else(Client::new);
        info!("fetching {}", url);
        let response = client.get(url).send()?.error_for_status()?;
        debug!("got {} from {}", response.status(), response.url());
        Ok(response)
    }
}

impl Iterator for Curl {
    type Item = Result<String, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match std::mem::replace(&mut self.state, State::Done) {
                State::Pending(url) => match self.fetch(&url) {
                    Ok(response) => {
                        self.state = State::Streaming(BufReader::new(response).lines());
                    }
                    Err(e) => {
                        error!("could not fetch {}: {}", url, e);
                        return Some(Err(e));
                    }
                },
                State::Streaming(mut lines) => {
                    let line = lines.next()?;
                    self.state = State::Streaming(lines);
                    return Some(line.map_err(Error::from));
                }
                State::Done => return None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread::JoinHandle;

    use super::*;
    use crate::pipeline::{IntoPipeline, Pipeline};
    use crate::stages::{curl, grep};

    /// proxy settings from the environment must not get in the way of local requests.
    fn fetch(url: &str) -> Pipeline<Curl> {
        let client = Client::builder().no_proxy().build().unwrap();
        Curl::with_client(url, client).into_pipeline()
    }

    /// Serve a single response on a local port, returning the url to fetch.
    fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<()>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}/UNLICENSE", listener.local_addr().unwrap());
        let handle = std::thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();

            // read until the end of the request headers
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }

            write!(
                stream,
                "HTTP/1.1 {}\r\nContent-Type: text/plain\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            )
            .unwrap();
        });
        (url, handle)
    }

    #[test]
    fn fetch_lines() {
        let (url, server) = serve_once(
            "200 OK",
            "This is free and unencumbered software\r\nreleased into the public domain.\n",
        );
        let lines: Vec<_> = fetch(&url).map(Result::unwrap).collect();
        server.join().unwrap();
        assert_eq!(
            lines,
            vec![
                "This is free and unencumbered software",
                "released into the public domain."
            ]
        );
    }

    #[test]
    fn chained() {
        let (url, server) = serve_once("200 OK", "alpha\nbeta\ngamma\n");
        let lines: Vec<_> = (fetch(&url) | grep("^[ab]").unwrap())
            .map(Result::unwrap)
            .collect();
        server.join().unwrap();
        assert_eq!(lines, vec!["alpha", "beta"]);
    }

    #[test]
    fn error_status() {
        let (url, server) = serve_once("404 Not Found", "nope");
        let items: Vec<_> = fetch(&url).collect();
        server.join().unwrap();
        assert_eq!(items.len(), 1);
        assert!(matches!(items[0], Err(Error::Http(_))));
    }

    #[test]
    fn invalid_url() {
        let items: Vec<_> = Curl::new("not a url").collect();
        assert_eq!(items.len(), 1);
        assert!(matches!(items[0], Err(Error::Url(_))));
    }

    #[test]
    fn lazy_request() {
        // nothing listens there, but nothing is sent either
        let pipeline = curl("http://127.0.0.1:9/") | grep("x").unwrap();
        assert_eq!(pipeline.name(), "curl | grep");
    }
}
