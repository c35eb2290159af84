pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;

pub use application::{
    AdapterSettings, AstroForecastUseCase, CalculateNatalChartUseCase, ChatClient,
    CompletionRequest, IcebreakerUseCase, MatchCompatibilityUseCase, ProfileRepository,
    FALLBACK_ICEBREAKER,
};

pub use connector::{
    AnthropicClient, Container, ContainerConfig, GeminiClient, JsonProfileRepository,
    MockChatClient, Provider, RecordedRequest,
};

pub use domain::{
    AspectHighlight, AspectType, ChartAspect, ChartRequest, ChartSubject, CompatibilityResult,
    ConnectionType, Dignity, DomainError, Element, ForecastEntry, ForecastKind, NatalChart,
    PlanetaryPosition, UserProfile, ZodiacSign,
};
