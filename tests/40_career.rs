mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::Value;

async fn career(server: &common::TestServer, token: &str, query: &str) -> Result<reqwest::Response> {
    Ok(server
        .client
        .get(server.url(&format!("/api/career{}", query)))
        .bearer_auth(token)
        .send()
        .await?)
}

#[tokio::test]
async fn career_requires_a_token() -> Result<()> {
    let server = common::TestServer::spawn().await?;

    let res = server.client.get(server.url("/api/career")).send().await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let res = career(&server, "not.a.token", "").await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn career_defaults_to_polish_and_sorts_months() -> Result<()> {
    let server = common::TestServer::spawn().await?;
    let token = server.token_for("ola@example.com", "tajne-haslo").await?;

    let res = career(&server, &token, "").await?;
    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = res.json().await?;
    assert_eq!(body["chart"]["locale"], "pl-PL");

    let labels: Vec<&str> = body["points"]
        .as_array()
        .expect("points array")
        .iter()
        .filter_map(|p| p["monthLabel"].as_str())
        .collect();
    // The unparseable label sorts first at the epoch.
    assert_eq!(labels, vec!["sty 1970", "gru 2022", "sty 2023", "lut 2023"]);
    Ok(())
}

#[tokio::test]
async fn career_merges_months_and_derives_layers() -> Result<()> {
    let server = common::TestServer::spawn().await?;
    let token = server.token_for("ola@example.com", "tajne-haslo").await?;

    let body: Value = career(&server, &token, "?locale=en-US").await?.json().await?;
    let points = body["points"].as_array().expect("points array");

    let december = &points[1];
    assert_eq!(december["monthLabel"], "Dec 2022");
    assert_eq!(december["gross"], 14500.0);
    assert_eq!(december["net"], 10500.0);
    assert_eq!(december["gna"], 6800.0);
    assert_eq!(december["type"], "Bonus");
    assert_eq!(december["bonusOverlay"], 10500.0);

    let january = &points[2];
    assert!(january["grossLayer"].is_null());
    assert!(january["bonusOverlay"].is_null());
    assert_eq!(january["tooltip"]["lines"][0]["kind"], "net");
    Ok(())
}

#[tokio::test]
async fn unknown_locale_is_a_bad_request() -> Result<()> {
    let server = common::TestServer::spawn().await?;
    let token = server.token_for("ola@example.com", "tajne-haslo").await?;

    let res = career(&server, &token, "?locale=de-DE").await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body: Value = res.json().await?;
    assert!(body["field_errors"]["locale"].is_string());
    Ok(())
}

#[tokio::test]
async fn whoami_echoes_the_token_identity() -> Result<()> {
    let server = common::TestServer::spawn().await?;
    let token = server.token_for("ola@example.com", "tajne-haslo").await?;

    let res = server
        .client
        .get(server.url("/api/auth/whoami"))
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = res.json().await?;
    assert_eq!(body["email"], "ola@example.com");
    assert!(body["userId"].is_string());
    assert!(body["expiresAt"].is_string());
    Ok(())
}
