use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Voices offered by the server (edge-tts identifiers). First entry is the
/// server-side default.
pub const VOICES: &[&str] = &[
    "en-US-ChristopherNeural",
    "en-US-JennyNeural",
    "en-GB-RyanNeural",
    "uk-UA-OstapNeural",
    "uk-UA-PolinaNeural",
];

/// Text models offered by the server. Anything with "grok" in the name is
/// routed to Grok server-side; everything else goes to Gemini.
pub const MODELS: &[&str] = &["gemini-2.0-flash", "grok-2-latest"];

/// Body of `POST /generate`.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateRequest {
    pub text: String,
    pub voice: String,
    pub model: String,
    pub instruction: String,
}

#[derive(Deserialize)]
struct GenerateResponse {
    filename: String,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: String,
}

/// Why a generation attempt failed. The two arms get different user-facing
/// treatment: server messages are shown verbatim, transport problems get a
/// generic connectivity notice.
#[derive(Debug)]
pub enum GenerateError {
    /// The server answered with a non-success status and a message.
    Server(String),
    /// The request never completed, or the response body was unreadable.
    Transport(String),
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateError::Server(msg) => write!(f, "server error: {msg}"),
            GenerateError::Transport(msg) => write!(f, "connection error: {msg}"),
        }
    }
}

impl std::error::Error for GenerateError {}

/// Submit a story for generation and return the artifact filename.
pub async fn generate(
    server_url: &str,
    request: &GenerateRequest,
) -> Result<String, GenerateError> {
    let url = format!("{}/generate", server_url.trim_end_matches('/'));
    log::info!(
        "POST {url} (voice={}, model={}, {} chars)",
        request.voice,
        request.model,
        request.text.chars().count()
    );

    let client = reqwest::Client::new();
    let resp = client
        .post(&url)
        .json(request)
        .send()
        .await
        .map_err(|e| GenerateError::Transport(e.to_string()))?;

    let status = resp.status();
    if !status.is_success() {
        let msg = match resp.json::<ErrorResponse>().await {
            Ok(body) => body.error,
            Err(_) => format!("HTTP {status}"),
        };
        return Err(GenerateError::Server(msg));
    }

    let body: GenerateResponse = resp
        .json()
        .await
        .map_err(|e| GenerateError::Transport(e.to_string()))?;
    Ok(body.filename)
}

/// URL of the artifact on the file-serving endpoint.
pub fn download_url(server_url: &str, filename: &str) -> String {
    format!("{}/download/{filename}", server_url.trim_end_matches('/'))
}

/// Stream the generated artifact into `dest_dir`, returning the saved path.
pub async fn download(
    server_url: &str,
    filename: &str,
    dest_dir: &Path,
) -> Result<PathBuf, Box<dyn std::error::Error + Send + Sync>> {
    use futures_util::StreamExt;
    use tokio::io::AsyncWriteExt;

    let url = download_url(server_url, filename);
    log::info!("GET {url}");

    let response = reqwest::get(&url).await?;
    let status = response.status();
    if !status.is_success() {
        return Err(format!("download failed: HTTP {status}").into());
    }

    tokio::fs::create_dir_all(dest_dir).await?;
    let path = dest_dir.join(filename);
    let mut file = tokio::fs::File::create(&path).await?;
    let mut stream = response.bytes_stream();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        file.write_all(&chunk).await?;
    }

    file.flush().await?;
    log::info!("Saved {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_request_body_shape() {
        let request = GenerateRequest {
            text: "Hello world".into(),
            voice: "alice".into(),
            model: "v1".into(),
            instruction: "".into(),
        };
        let body = serde_json::to_string(&request).unwrap();
        assert_eq!(
            body,
            r#"{"text":"Hello world","voice":"alice","model":"v1","instruction":""}"#
        );
    }

    #[test]
    fn success_response_carries_filename() {
        let body: GenerateResponse =
            serde_json::from_str(r#"{"filename":"story123.mp3"}"#).unwrap();
        assert_eq!(body.filename, "story123.mp3");
    }

    #[test]
    fn error_response_carries_message() {
        let body: ErrorResponse =
            serde_json::from_str(r#"{"error":"bad voice"}"#).unwrap();
        assert_eq!(body.error, "bad voice");
    }

    #[test]
    fn download_url_is_parameterized_by_filename() {
        assert_eq!(
            download_url("http://127.0.0.1:5000", "story123.mp3"),
            "http://127.0.0.1:5000/download/story123.mp3"
        );
        // Trailing slash on the configured base must not double up
        assert_eq!(
            download_url("http://127.0.0.1:5000/", "x.mp3"),
            "http://127.0.0.1:5000/download/x.mp3"
        );
    }
}
