use crate::bearer_token::BearerToken;
use tracing::debug;

/// GET `url` with the bearer token and decode the JSON body as `T`.
pub async fn fetch<T>(client: &reqwest::Client, url: &str, bearer: &BearerToken) -> eyre::Result<T>
where
    T: serde::de::DeserializeOwned,
{
    debug!("GET {}", url);
    let res = client
        .get(url)
        .bearer_auth(&bearer.0)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;

    decode(&res)
}

/// Decode a JSON body, keeping the raw text in the error for diagnosis.
pub fn decode<T>(body: &str) -> eyre::Result<T>
where
    T: serde::de::DeserializeOwned,
{
    match serde_json::from_str(body) {
        Ok(x) => Ok(x),
        Err(e) => Err(eyre::Error::new(e).wrap_err(format!("Failed to deserialize:\n{}", body))),
    }
}
