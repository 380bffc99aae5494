use std::time::Duration;

use anyhow::Context;
use clap::Subcommand;
use serde::Deserialize;
use serde_json::{json, Value};
use url::Url;

use crate::cli::utils::{output_error, output_success};
use crate::cli::OutputFormat;

const DEFAULT_SERVER_URL: &str = "http://localhost:3000";

#[derive(Subcommand)]
pub enum AuthCommands {
    #[command(about = "Register a new account")]
    Register {
        #[arg(help = "Email")]
        email: String,
        #[arg(long, help = "Password")]
        password: String,
        #[arg(long, default_value = DEFAULT_SERVER_URL, help = "Server base URL")]
        url: String,
    },

    #[command(about = "Log in and print a session token")]
    Login {
        #[arg(help = "Email")]
        email: String,
        #[arg(long, help = "Password")]
        password: String,
        #[arg(long, default_value = DEFAULT_SERVER_URL, help = "Server base URL")]
        url: String,
    },
}

/// Error body returned by the API.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
    code: Option<String>,
}

pub async fn handle(cmd: AuthCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    match cmd {
        AuthCommands::Register { email, password, url } => {
            let endpoint = endpoint(&url, "/api/register")?;
            let data = post_credentials(&endpoint, &email, &password, &output_format).await?;
            output_success(&output_format, &format!("Registered {}", email), Some(data))
        }
        AuthCommands::Login { email, password, url } => {
            let endpoint = endpoint(&url, "/api/login")?;
            let data = post_credentials(&endpoint, &email, &password, &output_format).await?;

            if output_format == OutputFormat::Text {
                if let Some(token) = data.get("token").and_then(Value::as_str) {
                    println!("{}", token);
                }
            }
            output_success(&output_format, &format!("Logged in as {}", email), Some(data))
        }
    }
}

fn endpoint(base: &str, path: &str) -> anyhow::Result<Url> {
    let base = Url::parse(base).with_context(|| format!("invalid server URL '{}'", base))?;
    Ok(base.join(path)?)
}

async fn post_credentials(
    endpoint: &Url,
    email: &str,
    password: &str,
    output_format: &OutputFormat,
) -> anyhow::Result<Value> {
    let client = reqwest::Client::new();
    let response = client
        .post(endpoint.clone())
        .timeout(Duration::from_secs(10))
        .json(&json!({ "email": email, "password": password }))
        .send()
        .await
        .with_context(|| format!("failed to reach {}", endpoint))?;

    let status = response.status();
    if status.is_success() {
        return Ok(response.json().await?);
    }

    let body: Option<ErrorBody> = response.json().await.ok();
    let (message, code) = match body {
        Some(body) => (body.error, body.code),
        None => (format!("Request failed with status {}", status), None),
    };
    if *output_format == OutputFormat::Json {
        output_error(output_format, &message, code.as_deref())?;
    }
    anyhow::bail!("{} ({})", message, status)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_join_onto_the_base_url() {
        let url = endpoint("http://localhost:3000", "/api/login").unwrap();
        assert_eq!(url.as_str(), "http://localhost:3000/api/login");

        let url = endpoint("https://kariera.example.com/ignored/", "/api/register").unwrap();
        assert_eq!(url.as_str(), "https://kariera.example.com/api/register");
    }

    #[test]
    fn invalid_base_urls_are_rejected() {
        assert!(endpoint("localhost", "/api/login").is_err());
    }
}
