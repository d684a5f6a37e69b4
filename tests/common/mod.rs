#![allow(dead_code)]

use std::{
    io,
    sync::{Arc, Mutex},
    thread,
};

use tiny_http::{Header, Response, Server};
use tracing_subscriber::fmt::MakeWriter;
use webipmon::logging::AddressLog;

pub const LOOKUP_PAGE: &str = r#"<!doctype html>
<html>
  <head><title>IP lookup</title></head>
  <body>
    <div class="info">
      <div>Country:</div><div>Testland</div>
      <div>IP:</div>
      <div>
        10.0.0.5
      </div>
    </div>
  </body>
</html>"#;

#[derive(Debug, Clone, PartialEq)]
pub struct Hit {
    pub path: String,
    pub user_agent: Option<String>,
}

/// Serves fixed (path, status, body) routes on a random local port from a background thread.
pub struct CannedServer {
    base_url: String,
    hits: Arc<Mutex<Vec<Hit>>>,
}

impl CannedServer {
    pub fn start(routes: &[(&str, u16, &str)]) -> Self {
        let server = Server::http("127.0.0.1:0").expect("bind canned server");
        let addr = server.server_addr().to_ip().expect("tcp listen addr");

        let routes: Vec<(String, u16, String)> = routes
            .iter()
            .map(|(path, status, body)| (path.to_string(), *status, body.to_string()))
            .collect();
        let hits = Arc::new(Mutex::new(vec![]));

        let thread_hits = hits.clone();
        thread::spawn(move || {
            for request in server.incoming_requests() {
                let user_agent = request
                    .headers()
                    .iter()
                    .find(|h| h.field.equiv("User-Agent"))
                    .map(|h| h.value.to_string());
                thread_hits.lock().unwrap().push(Hit {
                    path: request.url().to_string(),
                    user_agent,
                });

                let response = match routes.iter().find(|(path, _, _)| path == request.url()) {
                    Some((_, status, body)) => {
                        Response::from_string(body.as_str()).with_status_code(*status)
                    }
                    None => Response::from_string("Requested path not found").with_status_code(404),
                };
                let response = response.with_header(
                    Header::from_bytes(&b"Content-Type"[..], &b"text/html"[..]).unwrap(),
                );

                let _ = request.respond(response);
            }
        });

        Self {
            base_url: format!("http://{}", addr),
            hits,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn hits(&self) -> Vec<Hit> {
        self.hits.lock().unwrap().clone()
    }

    pub fn paths(&self) -> Vec<String> {
        self.hits().into_iter().map(|h| h.path).collect()
    }
}

/// A url on localhost that refuses connections.
pub fn refused_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/ip", addr)
}

/// Collects formatted log output in memory.
#[derive(Clone, Default)]
pub struct LogCapture(Arc<Mutex<Vec<u8>>>);

impl LogCapture {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).to_string()
    }

    /// root stream subscriber for the current thread
    pub fn set_default(&self) -> tracing::subscriber::DefaultGuard {
        let subscriber = tracing_subscriber::fmt()
            .with_writer(self.clone())
            .with_ansi(false)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }
}

impl io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogCapture {
    type Writer = LogCapture;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// AddressLog that just remembers what it was told.
#[derive(Clone, Default)]
pub struct RecordingLog(Arc<Mutex<Vec<(String, String)>>>);

impl RecordingLog {
    pub fn entries(&self) -> Vec<(String, String)> {
        self.0.lock().unwrap().clone()
    }
}

impl AddressLog for RecordingLog {
    fn address_found(&self, url: &str, address: &str) {
        self.0
            .lock()
            .unwrap()
            .push((url.to_string(), address.to_string()));
    }
}
