//! Local HTTP server for tests, backed by tiny_http on an ephemeral port

use std::sync::{Arc, Mutex};
use std::time::Duration;
use tiny_http::{Header, Response, Server};
use url::Url;

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub content_type: Option<String>,
    pub cookie: Option<String>,
    pub body: String,
}

/// Canned reply: status, body, extra headers
pub struct Reply {
    pub status: u16,
    pub body: String,
    pub headers: Vec<(String, String)>,
    pub delay: Duration,
}

impl Reply {
    pub fn json(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
            headers: vec![("Content-Type".to_string(), "application/json".to_string())],
            delay: Duration::ZERO,
        }
    }

    pub fn html(body: &str) -> Self {
        Self {
            status: 200,
            body: body.to_string(),
            headers: vec![("Content-Type".to_string(), "text/html; charset=utf-8".to_string())],
            delay: Duration::ZERO,
        }
    }

    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    pub fn status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    pub fn after(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

pub struct TestServer {
    pub base_url: Url,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl TestServer {
    /// Start a server answering every request with `route(method, path)`.
    /// Each request is answered on its own thread so slow replies don't serialize.
    pub fn start<F>(route: F) -> Self
    where
        F: Fn(&str, &str) -> Reply + Send + Sync + 'static,
    {
        let server = Server::http("127.0.0.1:0").expect("bind test server");
        let addr = server
            .server_addr()
            .to_ip()
            .expect("test server listens on an ip address");
        let base_url = Url::parse(&format!("http://{}/", addr)).expect("valid base url");

        let requests = Arc::new(Mutex::new(Vec::new()));
        let recorded = Arc::clone(&requests);
        let route = Arc::new(route);

        std::thread::spawn(move || {
            for mut request in server.incoming_requests() {
                let header = |name: &'static str| {
                    request
                        .headers()
                        .iter()
                        .find(|h| h.field.equiv(name))
                        .map(|h| h.value.as_str().to_string())
                };
                let method = request.method().to_string();
                let path = request.url().to_string();
                let content_type = header("Content-Type");
                let cookie = header("Cookie");

                let mut body = String::new();
                let _ = request.as_reader().read_to_string(&mut body);

                recorded.lock().unwrap().push(RecordedRequest {
                    method: method.clone(),
                    path: path.clone(),
                    content_type,
                    cookie,
                    body,
                });

                let route = Arc::clone(&route);
                std::thread::spawn(move || {
                    let reply = route(&method, &path);
                    if !reply.delay.is_zero() {
                        std::thread::sleep(reply.delay);
                    }
                    let mut response =
                        Response::from_data(reply.body.into_bytes()).with_status_code(reply.status);
                    for (name, value) in &reply.headers {
                        let header = Header::from_bytes(name.as_bytes(), value.as_bytes())
                            .expect("valid header");
                        response = response.with_header(header);
                    }
                    let _ = request.respond(response);
                });
            }
        });

        Self { base_url, requests }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}
