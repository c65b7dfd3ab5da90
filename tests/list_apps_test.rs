use anyhow::Result;
use apimctl::app::{list_apps, CommandContext};
use apimctl::config::cli::{EnvironmentArgs, ListAppsArgs};
use apimctl::core::render::OutputFormat;
use apimctl::{CliError, MainConfig};
use httpmock::prelude::*;

fn context(store_endpoint: &str, application_list_endpoint: Option<&str>) -> CommandContext {
    let list_line = application_list_endpoint
        .map(|e| format!("application_list_endpoint = \"{}\"", e))
        .unwrap_or_default();
    let config = MainConfig::from_toml_str(&format!(
        r#"
[environments.dev]
store_endpoint = "{}"
{}
access_token = "dev-token"
"#,
        store_endpoint, list_line
    ))
    .unwrap();
    CommandContext::new(config, false)
}

fn args(query: Option<&str>, format: OutputFormat) -> ListAppsArgs {
    ListAppsArgs {
        env: EnvironmentArgs {
            environment: "dev".to_string(),
            username: None,
            token: None,
        },
        query: query.map(str::to_string),
        format,
    }
}

fn sample_body() -> serde_json::Value {
    serde_json::json!({
        "count": 2,
        "next": "",
        "previous": "",
        "list": [
            {
                "applicationId": "9f6affe2-4c97-4817-bded-717f8b01eee8",
                "name": "SampleApp",
                "subscriber": "admin",
                "throttlingTier": "Unlimited",
                "description": "",
                "status": "APPROVED",
                "groupId": ""
            },
            {
                "applicationId": "7bc2b94e-c6d2-4d4f-beb1-cdccb08cd87f",
                "name": "DefaultApplication",
                "subscriber": "admin",
                "throttlingTier": "Gold",
                "status": "CREATED"
            }
        ]
    })
}

#[tokio::test]
async fn test_list_apps_prints_table() -> Result<()> {
    let server = MockServer::start_async().await;
    let api_mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/store/applications")
                .header("authorization", "Bearer dev-token");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(sample_body());
        })
        .await;

    let ctx = context(&server.url("/store"), None);
    let mut out = Vec::new();
    list_apps::execute(&ctx, &args(None, OutputFormat::Table), &mut out).await?;

    api_mock.assert_async().await;
    let output = String::from_utf8(out)?;
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines[0], "Environment: dev");
    assert_eq!(lines[1], "No. of Applications: 2");
    assert!(lines[3].contains("SUBSCRIBER"));
    assert!(output.contains("| 9f6affe2-4c97-4817-bded-717f8b01eee8 | SampleApp"));
    assert!(output.contains("DefaultApplication"));
    Ok(())
}

#[tokio::test]
async fn test_list_apps_forwards_query_to_custom_endpoint() -> Result<()> {
    let server = MockServer::start_async().await;
    let api_mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/custom/apps")
                .query_param("query", "name:SampleApp");
            then.status(200).json_body(serde_json::json!({"count": 0, "list": []}));
        })
        .await;

    let ctx = context(&server.url("/store"), Some(&server.url("/custom/apps")));
    let mut out = Vec::new();
    list_apps::execute(
        &ctx,
        &args(Some("name:SampleApp"), OutputFormat::Table),
        &mut out,
    )
    .await?;

    api_mock.assert_async().await;
    let output = String::from_utf8(out)?;
    assert_eq!(output, "Environment: dev\nNo. of Applications: 0\n");
    Ok(())
}

#[tokio::test]
async fn test_list_apps_json_format() -> Result<()> {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/store/applications");
            then.status(200).json_body(sample_body());
        })
        .await;

    let ctx = context(&server.url("/store"), None);
    let mut out = Vec::new();
    list_apps::execute(&ctx, &args(None, OutputFormat::Json), &mut out).await?;

    let value: serde_json::Value = serde_json::from_slice(&out)?;
    assert_eq!(value["count"], 2);
    assert_eq!(value["list"][1]["name"], "DefaultApplication");
    Ok(())
}

#[tokio::test]
async fn test_list_apps_non_ok_status() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/store/applications");
            then.status(401);
        })
        .await;

    let ctx = context(&server.url("/store"), None);
    let mut out = Vec::new();
    let err = list_apps::execute(&ctx, &args(None, OutputFormat::Table), &mut out)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        CliError::UnexpectedStatusError { ref operation, status: 401 } if operation == "list applications"
    ));
    assert!(out.is_empty());
}

#[tokio::test]
async fn test_list_apps_invalid_json() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/store/applications");
            then.status(200).body("<html>login</html>");
        })
        .await;

    let ctx = context(&server.url("/store"), None);
    let mut out = Vec::new();
    let err = list_apps::execute(&ctx, &args(None, OutputFormat::Table), &mut out)
        .await
        .unwrap_err();

    assert!(matches!(err, CliError::InvalidResponseError { .. }));
}

#[tokio::test]
async fn test_list_apps_unreachable_endpoint() {
    let ctx = context("http://127.0.0.1:1/store", None);
    let mut out = Vec::new();
    let err = list_apps::execute(&ctx, &args(None, OutputFormat::Table), &mut out)
        .await
        .unwrap_err();

    assert!(matches!(err, CliError::ConnectionError { .. }));
}

#[tokio::test]
async fn test_list_apps_unknown_environment() {
    let ctx = context("http://localhost:9763/store", None);
    let mut list_args = args(None, OutputFormat::Table);
    list_args.env.environment = "staging".to_string();

    let mut out = Vec::new();
    let err = list_apps::execute(&ctx, &list_args, &mut out)
        .await
        .unwrap_err();

    assert!(matches!(err, CliError::EnvironmentNotFoundError { .. }));
}
