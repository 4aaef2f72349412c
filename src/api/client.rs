//! Activities API Client
//!
//! Typed calls for every endpoint the client consumes. URLs are built here,
//! with path segments and query values percent-encoded.

use serde::de::DeserializeOwned;
use std::rc::Rc;

use super::dto::{ActivityCatalog, AuthStatusResponse, LoginResponse, MessageResponse};
use super::error::ApiError;
use super::transport::{ApiRequest, Transport};
use crate::roster::Activity;

/// Client for the activities service
pub struct ActivitiesClient {
    transport: Rc<dyn Transport>,
    base_url: String,
}

impl ActivitiesClient {
    /// Create a client. An empty base URL means same-origin relative paths.
    pub fn new(transport: Rc<dyn Transport>, base_url: &str) -> Self {
        Self {
            transport,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send a request and decode a 2xx body as `T`
    async fn exchange<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T, ApiError> {
        tracing::debug!("{} {}", request.method.as_str(), request.url);

        let response = self.transport.send(request).await?;
        if !response.is_success() {
            return Err(ApiError::rejected(&response));
        }

        Ok(serde_json::from_str(&response.body)?)
    }

    /// Check whether the held token is still valid
    pub async fn auth_status(&self, authorization: Option<String>) -> Result<bool, ApiError> {
        let request = ApiRequest::get(self.url("/auth/status")).authorization(authorization);
        let status: AuthStatusResponse = self.exchange(request).await?;
        Ok(status.authenticated)
    }

    /// Exchange credentials for a bearer token
    pub async fn login(&self, username: &str, password: &str) -> Result<String, ApiError> {
        let url = self.url(&format!(
            "/auth/login?username={}&password={}",
            urlencoding::encode(username),
            urlencoding::encode(password)
        ));
        let response: LoginResponse = self.exchange(ApiRequest::post(url)).await?;
        Ok(response.token)
    }

    /// Tell the server to drop the session. The response body is ignored.
    pub async fn logout(&self, authorization: Option<String>) -> Result<(), ApiError> {
        let request = ApiRequest::post(self.url("/auth/logout")).authorization(authorization);
        tracing::debug!("{} {}", request.method.as_str(), request.url);

        let response = self.transport.send(request).await?;
        if response.is_success() {
            Ok(())
        } else {
            Err(ApiError::rejected(&response))
        }
    }

    /// Fetch the full catalog, preserving server order
    pub async fn activities(&self) -> Result<Vec<Activity>, ApiError> {
        let catalog: ActivityCatalog = self.exchange(ApiRequest::get(self.url("/activities"))).await?;

        Ok(catalog
            .into_iter()
            .map(|(name, details)| Activity {
                name,
                description: details.description,
                schedule: details.schedule,
                max_participants: details.max_participants,
                participants: details.participants,
            })
            .collect())
    }

    /// Register `email` for `activity`; returns the server's message
    pub async fn signup(
        &self,
        activity: &str,
        email: &str,
        authorization: Option<String>,
    ) -> Result<String, ApiError> {
        let url = self.url(&format!(
            "/activities/{}/signup?email={}",
            urlencoding::encode(activity),
            urlencoding::encode(email)
        ));
        let response: MessageResponse = self
            .exchange(ApiRequest::post(url).authorization(authorization))
            .await?;
        Ok(response.message)
    }

    /// Remove `email` from `activity`; returns the server's message
    pub async fn unregister(
        &self,
        activity: &str,
        email: &str,
        authorization: Option<String>,
    ) -> Result<String, ApiError> {
        let url = self.url(&format!(
            "/activities/{}/unregister?email={}",
            urlencoding::encode(activity),
            urlencoding::encode(email)
        ));
        let response: MessageResponse = self
            .exchange(ApiRequest::delete(url).authorization(authorization))
            .await?;
        Ok(response.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Method;
    use crate::testing::ScriptedTransport;

    fn client(transport: &Rc<ScriptedTransport>, base: &str) -> ActivitiesClient {
        ActivitiesClient::new(transport.clone(), base)
    }

    #[tokio::test]
    async fn test_signup_url_is_percent_encoded() {
        let transport = ScriptedTransport::new();
        transport.reply(200, r#"{"message":"Signed up a@b.com for Chess Club"}"#);

        let message = client(&transport, "")
            .signup("Chess Club", "a@b.com", Some("Bearer t0k".to_string()))
            .await
            .unwrap();

        assert_eq!(message, "Signed up a@b.com for Chess Club");
        let sent = transport.requests();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].method, Method::Post);
        assert_eq!(sent[0].url, "/activities/Chess%20Club/signup?email=a%40b.com");
        assert_eq!(sent[0].authorization.as_deref(), Some("Bearer t0k"));
    }

    #[tokio::test]
    async fn test_unregister_uses_delete() {
        let transport = ScriptedTransport::new();
        transport.reply(200, r#"{"message":"Unregistered"}"#);

        client(&transport, "http://school.test/")
            .unregister("Art Club", "x+y@b.com", None)
            .await
            .unwrap();

        let sent = transport.requests();
        assert_eq!(sent[0].method, Method::Delete);
        assert_eq!(
            sent[0].url,
            "http://school.test/activities/Art%20Club/unregister?email=x%2By%40b.com"
        );
        assert_eq!(sent[0].authorization, None);
    }

    #[tokio::test]
    async fn test_activities_preserve_server_order() {
        let transport = ScriptedTransport::new();
        transport.reply(
            200,
            r#"{
                "Programming Class": {"description": "Code", "schedule": "Tue", "max_participants": 20, "participants": []},
                "Chess Club": {"description": "Chess", "schedule": "Fri", "max_participants": 12, "participants": ["a@b.com"]},
                "Art Club": {"description": "Paint", "schedule": "Wed", "max_participants": 15, "participants": []}
            }"#,
        );

        let activities = client(&transport, "").activities().await.unwrap();
        let names: Vec<&str> = activities.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Programming Class", "Chess Club", "Art Club"]);
        assert_eq!(activities[1].participants, vec!["a@b.com".to_string()]);
    }

    #[tokio::test]
    async fn test_login_rejection_carries_detail() {
        let transport = ScriptedTransport::new();
        transport.reply(401, r#"{"detail":"Invalid credentials"}"#);

        let err = client(&transport, "").login("teacher", "p&ss").await.unwrap_err();
        assert_eq!(err.detail(), Some("Invalid credentials"));
        assert_eq!(
            transport.requests()[0].url,
            "/auth/login?username=teacher&password=p%26ss"
        );
    }

    #[tokio::test]
    async fn test_ok_with_malformed_body_is_decode_error() {
        let transport = ScriptedTransport::new();
        transport.reply(200, r#"{"ok":true}"#);

        let err = client(&transport, "")
            .auth_status(Some("Bearer t".to_string()))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
