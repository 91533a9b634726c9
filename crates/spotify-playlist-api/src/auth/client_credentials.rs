use crate::bearer_token::BearerToken;
use crate::credentials::ClientCredentials;
use crate::endpoints::SpotifyEndpoints;
use crate::fetch::decode;
use eyre::Result;
use eyre::WrapErr;
use reqwest::header::AUTHORIZATION;
use serde::Deserialize;
use serde::Serialize;
use tracing::debug;

/// Exchange the application's own credentials for an access token.
///
/// No user is involved and nothing is cached: every call performs a fresh
/// exchange against the token endpoint.
pub async fn get_bearer_token_via_client_credentials(
    client: &reqwest::Client,
    endpoints: &SpotifyEndpoints,
    credentials: &ClientCredentials,
) -> Result<BearerToken> {
    let url = endpoints.token_url();
    debug!("Requesting client credentials token from {}", url);

    let body = client
        .post(&url)
        .header(
            AUTHORIZATION,
            format!("Basic {}", credentials.basic_auth_value()),
        )
        .form(&[("grant_type", "client_credentials")])
        .send()
        .await?
        .error_for_status()
        .wrap_err("Token request was rejected")?
        .text()
        .await?;

    let resp: TokenResponse =
        decode(&body).wrap_err("Token response did not contain an access token")?;

    debug!("Access Token: len={}", resp.access_token.len());
    if let Some(token_type) = &resp.token_type {
        debug!("Token type: {}", token_type);
    }
    if let Some(expires_in) = resp.expires_in {
        debug!("Expires in: {}s", expires_in);
    }

    Ok(BearerToken(resp.access_token))
}

#[derive(Debug, Deserialize, Serialize)]
struct TokenResponse {
    access_token: String,
    token_type: Option<String>,
    expires_in: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::TokenResponse;
    use crate::fetch::decode;

    #[test]
    fn token_response_needs_only_access_token() {
        let resp: TokenResponse = decode(r#"{"access_token":"abc"}"#).unwrap();
        assert_eq!(resp.access_token, "abc");
        assert_eq!(resp.expires_in, None);
    }

    #[test]
    fn missing_access_token_is_an_error() {
        let err = decode::<TokenResponse>(r#"{"error":"invalid_client"}"#).unwrap_err();
        assert!(format!("{:?}", err).contains("invalid_client"));
    }
}
