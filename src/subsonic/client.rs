use std::time::Duration;

use reqwest::{Client, Url};

use crate::{
    config,
    error::{Error, Result},
    subsonic::StreamUrlBuilder,
    types::{Credentials, SubsonicEnvelope, SubsonicResponse},
    utils,
};

const SALT_LENGTH: usize = 12;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for a single Subsonic server and account.
pub struct SubsonicClient {
    http: Client,
    rest_base: Url,
    credentials: Credentials,
}

impl SubsonicClient {
    /// Creates a client for the server at `credentials.url`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Connection`] if the URL is not an absolute `http` or
    /// `https` URL, or if the HTTP client cannot be built.
    pub fn new(credentials: Credentials) -> Result<Self> {
        let base = format!("{}/rest/", credentials.url.trim().trim_end_matches('/'));
        let rest_base = Url::parse(&base).map_err(|e| {
            Error::Connection(format!("invalid server URL {}: {}", credentials.url, e))
        })?;
        if !matches!(rest_base.scheme(), "http" | "https") {
            return Err(Error::Connection(format!(
                "invalid server URL {}: expected http or https",
                credentials.url
            )));
        }

        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(format!(
                "{}/{}",
                config::CLIENT_NAME,
                env!("CARGO_PKG_VERSION")
            ))
            .build()?;

        Ok(Self {
            http,
            rest_base,
            credentials,
        })
    }

    fn auth_params(&self) -> Vec<(&'static str, String)> {
        let salt = utils::generate_salt(SALT_LENGTH);
        let token = format!(
            "{:x}",
            md5::compute(format!("{}{}", self.credentials.password, salt))
        );
        vec![
            ("u", self.credentials.username.clone()),
            ("t", token),
            ("s", salt),
            ("v", config::API_VERSION.to_string()),
            ("c", config::CLIENT_NAME.to_string()),
        ]
    }

    fn endpoint(&self, method: &str) -> Url {
        let mut url = self.rest_base.clone();
        let path = format!("{}{}.view", self.rest_base.path(), method);
        url.set_path(&path);
        url
    }

    /// Calls `method` and returns the decoded response body.
    ///
    /// Fails with [`Error::Api`] when the server answers with a status other
    /// than `ok`.
    pub(crate) async fn request(
        &self,
        method: &str,
        params: &[(&str, String)],
    ) -> Result<SubsonicResponse> {
        let response = self
            .http
            .get(self.endpoint(method))
            .query(&self.auth_params())
            .query(&[("f", "json")])
            .query(params)
            .send()
            .await?
            .error_for_status()?;

        let envelope = response.json::<SubsonicEnvelope>().await?;
        let body = envelope.response;
        if body.status != "ok" {
            return Err(match body.error {
                Some(err) => Error::Api {
                    code: err.code,
                    message: err.message,
                },
                None => Error::Api {
                    code: 0,
                    message: format!("{method} returned status {}", body.status),
                },
            });
        }

        Ok(body)
    }
}

impl StreamUrlBuilder for SubsonicClient {
    fn stream_url(&self, track_id: &str) -> String {
        let mut url = self.endpoint("stream");
        url.query_pairs_mut()
            .append_pair("id", track_id)
            .extend_pairs(self.auth_params());
        url.to_string()
    }
}
