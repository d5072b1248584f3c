use std::path::Path;

use core_server::ServerConfig;
use fra_core::config::core_config::AppConfig;
use sql_data_provider::DbConn;

#[derive(Debug, Default)]
pub struct TestingConfigParams {
    /// Base url of a mocked insight API, insights are disabled without it
    pub insight_url: Option<String>,
    pub frontend_dir: Option<String>,
}

pub fn create_config(
    upload_dir: &Path,
    params: Option<TestingConfigParams>,
) -> AppConfig<ServerConfig> {
    let params = params.unwrap_or_default();

    let frontend_config = params
        .frontend_dir
        .map(|dir| format!("    frontendDir: '{dir}'\n"))
        .unwrap_or_default();

    let base_config = indoc::formatdoc! {"
        auth:
            tokenSecret: 'integration-test-secret'
            tokenLifetime: 3600
        app:
            databaseUrl: 'sqlite::memory:'
            uploadDir: '{upload_dir}'
            hideErrorResponseCause: false
    ", upload_dir = upload_dir.display()};

    let mut configs = vec![base_config + &frontend_config];
    if let Some(url) = params.insight_url {
        configs.push(indoc::formatdoc! {"
            insight:
                apiKey: 'test-key'
                baseUrl: '{url}'
                timeout: 5
        "});
    }

    AppConfig::from_yaml(configs).unwrap()
}

pub async fn create_db(config: &AppConfig<ServerConfig>) -> DbConn {
    sql_data_provider::db_conn(&config.app.database_url)
        .await
        .unwrap()
}
