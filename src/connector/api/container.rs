use std::sync::Arc;

use anyhow::{anyhow, Result};
use tracing::debug;

use crate::application::{
    AdapterSettings, AstroForecastUseCase, CalculateNatalChartUseCase, ChatClient,
    IcebreakerUseCase, MatchCompatibilityUseCase, ProfileRepository,
};
use crate::connector::{AnthropicClient, GeminiClient, JsonProfileRepository, MockChatClient};

/// Which model backend answers adapter requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Provider {
    #[default]
    Gemini,
    Anthropic,
    /// Offline fixtures; no network access.
    Mock,
}

pub struct ContainerConfig {
    pub data_dir: String,
    pub provider: Provider,
}

/// Composition root: one chat client, one profile store, and the adapter
/// operations wired to them.
///
/// The profile store never depends on the chat client, so a missing API key
/// only fails the operations that call the model.
pub struct Container {
    client: Option<Arc<dyn ChatClient>>,
    settings: AdapterSettings,
    profile_repo: Arc<dyn ProfileRepository>,
    config: ContainerConfig,
}

impl Container {
    pub fn new(config: ContainerConfig) -> Result<Self> {
        let (client, settings): (Option<Arc<dyn ChatClient>>, AdapterSettings) =
            match config.provider {
                Provider::Gemini => {
                    debug!("Using Gemini generateContent client");
                    let client = GeminiClient::from_env()
                        .map(|c| Arc::new(c) as Arc<dyn ChatClient>);
                    if client.is_none() {
                        debug!("GEMINI_API_KEY is not set; model operations are unavailable");
                    }
                    (client, AdapterSettings::gemini())
                }
                Provider::Anthropic => {
                    debug!("Using Anthropic Messages client");
                    (
                        Some(Arc::new(AnthropicClient::from_env()) as Arc<dyn ChatClient>),
                        AdapterSettings::anthropic(),
                    )
                }
                Provider::Mock => {
                    debug!("Using mock chat client");
                    (
                        Some(Arc::new(MockChatClient::new()) as Arc<dyn ChatClient>),
                        AdapterSettings::gemini().without_thinking(),
                    )
                }
            };

        Ok(Self::wire(config, client, settings.with_env_overrides()))
    }

    /// Wires an explicit client, bypassing provider selection.
    pub fn with_client(
        config: ContainerConfig,
        client: Arc<dyn ChatClient>,
        settings: AdapterSettings,
    ) -> Self {
        Self::wire(config, Some(client), settings)
    }

    fn wire(
        config: ContainerConfig,
        client: Option<Arc<dyn ChatClient>>,
        settings: AdapterSettings,
    ) -> Self {
        let profile_repo = Arc::new(JsonProfileRepository::new(&config.data_dir));
        Self {
            client,
            settings,
            profile_repo,
            config,
        }
    }

    pub fn natal_chart_use_case(&self) -> Result<CalculateNatalChartUseCase> {
        Ok(CalculateNatalChartUseCase::new(self.chat_client()?, &self.settings))
    }

    pub fn compatibility_use_case(&self) -> Result<MatchCompatibilityUseCase> {
        Ok(MatchCompatibilityUseCase::new(self.chat_client()?, &self.settings))
    }

    pub fn icebreaker_use_case(&self) -> Result<IcebreakerUseCase> {
        Ok(IcebreakerUseCase::new(self.chat_client()?, &self.settings))
    }

    pub fn forecast_use_case(&self) -> Result<AstroForecastUseCase> {
        Ok(AstroForecastUseCase::new(self.chat_client()?, &self.settings))
    }

    fn chat_client(&self) -> Result<Arc<dyn ChatClient>> {
        self.client.clone().ok_or_else(|| match self.config.provider {
            Provider::Gemini => {
                anyhow!("GEMINI_API_KEY is not set (use --provider mock for offline runs)")
            }
            provider => anyhow!("no chat client configured for {provider:?}"),
        })
    }

    pub fn profile_repository(&self) -> Arc<dyn ProfileRepository> {
        self.profile_repo.clone()
    }

    pub fn settings(&self) -> &AdapterSettings {
        &self.settings
    }

    pub fn data_dir(&self) -> &str {
        &self.config.data_dir
    }

    pub fn provider(&self) -> Provider {
        self.config.provider
    }
}
