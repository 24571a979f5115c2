use reqwest::cookie::Jar;
use std::sync::Arc;
use std::time::Duration;

/// Transport settings shared by every request the app makes
///
/// Each background task builds its own client (one runtime per task, and
/// pooled connections must not outlive the runtime that opened them). The
/// cookie jar is shared so the server session set by the page request is
/// sent along with every toggle.
#[derive(Clone, Default)]
pub struct HttpSettings {
    pub timeout: Option<Duration>,
    pub cookies: Arc<Jar>,
}

impl HttpSettings {
    pub fn new(timeout: Option<Duration>) -> Self {
        Self {
            timeout,
            cookies: Arc::new(Jar::default()),
        }
    }

    pub fn client(&self) -> Result<reqwest::Client, reqwest::Error> {
        let mut builder = reqwest::Client::builder()
            .cookie_provider(Arc::clone(&self.cookies))
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")));

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        builder.build()
    }
}

impl std::fmt::Debug for HttpSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpSettings")
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}
