// Like endpoints of the reading-room web app
use crate::constants::TOGGLE_LIKE_PATH;
use crate::models::{ReflectionId, ToggleResponse, ToggleState};
use crate::utils::{HttpSettings, LikeError};
use reqwest::header::CONTENT_TYPE;
use url::Url;

/// `{base}toggle_like/{id}`, with the id encoded as a single path segment
pub fn toggle_url(base: &Url, id: &ReflectionId) -> Result<Url, LikeError> {
    let mut url = base.join(TOGGLE_LIKE_PATH)?;
    url.path_segments_mut()
        .map_err(|_| LikeError::Url(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
        .push(id.as_str());
    Ok(url)
}

/// Page path resolved under the base URL (an absolute URL replaces the base)
pub fn page_url(base: &Url, path: &str) -> Result<Url, LikeError> {
    Ok(base.join(path.trim_start_matches('/'))?)
}

/// Flip the liked state of a reflection for the current session
///
/// Sends `POST /toggle_like/{id}` with a JSON content type and no body.
/// Non-2xx statuses and unreadable bodies are transport errors; a body that
/// reports failure (or omits `likes`/`liked`) is an application error.
pub async fn toggle_like(
    settings: &HttpSettings,
    base: &Url,
    id: &ReflectionId,
) -> Result<ToggleState, LikeError> {
    let url = toggle_url(base, id)?;
    log::debug!("[Likes] POST {}", url);

    let response = settings
        .client()?
        .post(url)
        .header(CONTENT_TYPE, "application/json")
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(LikeError::Status(status));
    }

    let body = response.bytes().await?;
    let parsed: ToggleResponse = serde_json::from_slice(&body)?;
    parsed.into_state()
}

/// Fetch the rendered page that lists the reflections
pub async fn fetch_page(settings: &HttpSettings, base: &Url, path: &str) -> Result<String, LikeError> {
    let url = page_url(base, path)?;
    log::debug!("[Page] GET {}", url);

    let response = settings.client()?.get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(LikeError::Status(status));
    }

    Ok(response.text().await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::test_server::{Reply, TestServer};
    use crate::utils::ErrorKind;

    fn id(raw: &str) -> ReflectionId {
        ReflectionId::parse(raw).unwrap()
    }

    #[test]
    fn toggle_url_keeps_base_path_and_encodes_id() {
        let base = Url::parse("http://library.local/app/").unwrap();
        assert_eq!(
            toggle_url(&base, &id("42")).unwrap().as_str(),
            "http://library.local/app/toggle_like/42"
        );
        assert_eq!(
            toggle_url(&base, &id("a/b c")).unwrap().as_str(),
            "http://library.local/app/toggle_like/a%2Fb%20c"
        );
    }

    #[test]
    fn page_url_joins_relative_and_absolute_paths() {
        let base = Url::parse("http://library.local/").unwrap();
        assert_eq!(
            page_url(&base, "/reflections").unwrap().as_str(),
            "http://library.local/reflections"
        );
        assert_eq!(
            page_url(&base, "http://other.local/my_page").unwrap().as_str(),
            "http://other.local/my_page"
        );
    }

    #[tokio::test]
    async fn toggle_posts_json_without_body() {
        let server = TestServer::start(|_, _| {
            Reply::json(200, r#"{"success": true, "likes": 42, "liked": true}"#)
        });

        let state = toggle_like(&HttpSettings::default(), &server.base_url, &id("9"))
            .await
            .unwrap();
        assert_eq!(state, ToggleState { likes: 42, liked: true });

        let requests = server.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, "POST");
        assert_eq!(requests[0].path, "/toggle_like/9");
        assert_eq!(requests[0].content_type.as_deref(), Some("application/json"));
        assert!(requests[0].body.is_empty());
    }

    #[tokio::test]
    async fn non_success_status_is_transport_error() {
        let server = TestServer::start(|_, _| Reply::json(500, r#"{"success": true}"#));

        let err = toggle_like(&HttpSettings::default(), &server.base_url, &id("9"))
            .await
            .unwrap_err();
        assert!(matches!(err, LikeError::Status(s) if s.as_u16() == 500));
        assert_eq!(err.kind(), ErrorKind::Transport);
    }

    #[tokio::test]
    async fn garbage_body_is_transport_error() {
        let server = TestServer::start(|_, _| Reply::html("<h1>Login required</h1>"));

        let err = toggle_like(&HttpSettings::default(), &server.base_url, &id("9"))
            .await
            .unwrap_err();
        assert!(matches!(err, LikeError::Decode(_)));
        assert_eq!(err.kind(), ErrorKind::Transport);
    }

    #[tokio::test]
    async fn rejected_toggle_is_application_error() {
        let server = TestServer::start(|_, _| {
            Reply::json(200, r#"{"success": false, "error": "already processed"}"#)
        });

        let err = toggle_like(&HttpSettings::default(), &server.base_url, &id("9"))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Application);
        assert!(err.user_message().contains("already processed"));
    }

    #[tokio::test]
    async fn body_without_success_flag_is_application_error() {
        let server = TestServer::start(|_, _| Reply::json(200, r#"{"error": "not logged in"}"#));

        let err = toggle_like(&HttpSettings::default(), &server.base_url, &id("9"))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Application);
        assert_eq!(err.user_message(), "Operation failed: not logged in");
    }

    #[tokio::test]
    async fn unreachable_server_is_transport_error() {
        // Bind then drop a listener to get a port nothing listens on
        let port = std::net::TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();
        let base = Url::parse(&format!("http://127.0.0.1:{}/", port)).unwrap();

        let err = toggle_like(&HttpSettings::default(), &base, &id("9"))
            .await
            .unwrap_err();
        assert!(matches!(err, LikeError::Request(_)));
        assert_eq!(err.kind(), ErrorKind::Transport);
    }

    #[tokio::test]
    async fn session_cookie_from_page_is_sent_with_toggle() {
        let server = TestServer::start(|method, _| {
            if method == "GET" {
                Reply::html("<p>page</p>").with_header("Set-Cookie", "session=abc123; Path=/")
            } else {
                Reply::json(200, r#"{"success": true, "likes": 1, "liked": true}"#)
            }
        });
        let settings = HttpSettings::default();

        let html = fetch_page(&settings, &server.base_url, "/reflections").await.unwrap();
        assert_eq!(html, "<p>page</p>");
        toggle_like(&settings, &server.base_url, &id("3")).await.unwrap();

        let requests = server.requests();
        assert_eq!(requests[0].path, "/reflections");
        assert_eq!(requests[1].cookie.as_deref(), Some("session=abc123"));
    }

    #[tokio::test]
    async fn fetch_page_reports_bad_status() {
        let server = TestServer::start(|_, _| Reply::html("missing").status(404));

        let err = fetch_page(&HttpSettings::default(), &server.base_url, "/reflections")
            .await
            .unwrap_err();
        assert!(matches!(err, LikeError::Status(s) if s.as_u16() == 404));
    }
}
