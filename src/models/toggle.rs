use crate::utils::LikeError;
use serde::Deserialize;

/// Raw body returned by `POST /toggle_like/{id}`
///
/// Every field is optional on the wire and a missing `success` reads as
/// `false`; use [`ToggleResponse::into_state`] before touching the page.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ToggleResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub likes: Option<u64>,
    #[serde(default)]
    pub liked: Option<bool>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Validated outcome of a successful toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleState {
    pub likes: u64,
    pub liked: bool,
}

impl ToggleResponse {
    pub fn into_state(self) -> Result<ToggleState, LikeError> {
        if !self.success {
            return Err(LikeError::Rejected(self.error));
        }

        let likes = self.likes.ok_or(LikeError::Incomplete("likes"))?;
        let liked = self.liked.ok_or(LikeError::Incomplete("liked"))?;
        Ok(ToggleState { likes, liked })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> Result<ToggleState, LikeError> {
        serde_json::from_str::<ToggleResponse>(body)
            .expect("valid json")
            .into_state()
    }

    #[test]
    fn success_yields_state() {
        let state = parse(r#"{"success": true, "likes": 42, "liked": true}"#).unwrap();
        assert_eq!(state, ToggleState { likes: 42, liked: true });
    }

    #[test]
    fn failure_carries_server_error() {
        let err = parse(r#"{"success": false, "error": "already processed"}"#).unwrap_err();
        assert!(matches!(err, LikeError::Rejected(Some(ref e)) if e == "already processed"));
    }

    #[test]
    fn failure_without_error_text() {
        let err = parse(r#"{"success": false}"#).unwrap_err();
        assert!(matches!(err, LikeError::Rejected(None)));
    }

    #[test]
    fn success_missing_fields_is_incomplete() {
        let err = parse(r#"{"success": true, "liked": false}"#).unwrap_err();
        assert!(matches!(err, LikeError::Incomplete("likes")));

        let err = parse(r#"{"success": true, "likes": 3}"#).unwrap_err();
        assert!(matches!(err, LikeError::Incomplete("liked")));
    }

    #[test]
    fn explicit_null_counts_as_missing() {
        let err = parse(r#"{"success": true, "likes": null, "liked": true}"#).unwrap_err();
        assert!(matches!(err, LikeError::Incomplete("likes")));
    }

    #[test]
    fn missing_success_flag_is_a_rejection() {
        let err = parse("{}").unwrap_err();
        assert!(matches!(err, LikeError::Rejected(None)));

        let err = parse(r#"{"error": "not logged in"}"#).unwrap_err();
        assert!(matches!(err, LikeError::Rejected(Some(ref e)) if e == "not logged in"));

        let err = parse(r#"{"likes": 1, "liked": true}"#).unwrap_err();
        assert!(matches!(err, LikeError::Rejected(None)));
    }
}
