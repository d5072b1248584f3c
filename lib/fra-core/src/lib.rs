use std::sync::Arc;

use thiserror::Error;

use crate::config::core_config::CoreConfig;
use crate::provider::document_storage::DocumentStorage;
use crate::provider::insight::gemini::GeminiInsightProvider;
use crate::provider::insight::{InsightError, InsightProvider};
use crate::provider::password::Argon2PasswordHasher;
use crate::provider::token::JwtTokenProvider;
use crate::repository::DataRepository;
use crate::service::auth::AuthService;
use crate::service::claim::ClaimService;
use crate::service::dashboard::DashboardService;
use crate::service::report::ReportService;

pub mod config;
pub mod model;
pub mod provider;
pub mod repository;
pub mod service;

#[derive(Debug, Error)]
pub enum FraCoreBuildError {
    #[error("Insight provider initialization failed: `{0}`")]
    InsightProvider(#[from] InsightError),
}

#[derive(Clone)]
pub struct FraCore {
    pub auth_service: AuthService,
    pub claim_service: ClaimService,
    pub dashboard_service: DashboardService,
    pub report_service: ReportService,
}

impl FraCore {
    pub fn new(
        data_repository: Arc<dyn DataRepository>,
        config: CoreConfig,
        document_storage: Arc<dyn DocumentStorage>,
    ) -> Result<Self, FraCoreBuildError> {
        let insight_provider = GeminiInsightProvider::from_config(&config.insight)?
            .map(|provider| Arc::new(provider) as Arc<dyn InsightProvider>);
        if insight_provider.is_none() {
            tracing::info!("No insight API key configured, AI insights disabled");
        }

        Ok(Self::new_with_providers(
            data_repository,
            config,
            document_storage,
            insight_provider,
        ))
    }

    pub fn new_with_providers(
        data_repository: Arc<dyn DataRepository>,
        config: CoreConfig,
        document_storage: Arc<dyn DocumentStorage>,
        insight_provider: Option<Arc<dyn InsightProvider>>,
    ) -> Self {
        let claim_repository = data_repository.get_claim_repository();

        let token_provider = Arc::new(JwtTokenProvider::new(
            &config.auth.token_secret,
            config.auth.token_lifetime,
        ));

        Self {
            auth_service: AuthService::new(
                data_repository.get_user_repository(),
                Arc::new(Argon2PasswordHasher::default()),
                token_provider,
                Arc::new(config.auth),
            ),
            claim_service: ClaimService::new(
                claim_repository.clone(),
                data_repository.get_claim_history_repository(),
                document_storage,
                insight_provider.clone(),
            ),
            dashboard_service: DashboardService::new(claim_repository.clone(), insight_provider),
            report_service: ReportService::new(claim_repository),
        }
    }
}
