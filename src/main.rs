//! Wiring & DI. Entry point: load config, build the provider once, inject into services, run UI.
//! No business logic here.

use dotenv::dotenv;
use health_desk::adapters::ai::{GeminiAdapter, MockAiAdapter, OpenAiAdapter, build_http_client};
use health_desk::adapters::documents::FileTextExtractor;
use health_desk::adapters::ui::tui::TuiInputPort;
use health_desk::ports::{DocumentExtractorPort, InputPort, TextGenerationPort};
use health_desk::shared::config::{AppConfig, ProviderKind};
use health_desk::usecases::AssessmentService;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!(cwd = %cwd.display(), "no .env found (check CWD)"),
    }

    let cfg = AppConfig::load().map_err(|e| anyhow::anyhow!("invalid configuration: {}", e))?;

    health_desk::adapters::ui::init_ui();

    let provider = build_provider(&cfg)?;
    let assessment = Arc::new(AssessmentService::new(provider));
    let extractor: Arc<dyn DocumentExtractorPort> = Arc::new(FileTextExtractor::new());

    let input_port: Arc<dyn InputPort> = Arc::new(TuiInputPort::new(
        assessment,
        extractor,
        cfg.max_upload_bytes_or_default(),
    ));

    input_port
        .run()
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    Ok(())
}

/// Construct the text-generation provider once; it is shared read-only for the whole session.
fn build_provider(cfg: &AppConfig) -> anyhow::Result<Arc<dyn TextGenerationPort>> {
    let kind = cfg.provider_kind().map_err(|e| anyhow::anyhow!(e))?;
    let client = build_http_client(cfg.request_timeout()).map_err(|e| anyhow::anyhow!("{}", e))?;
    let model = cfg.ai_model_or_default(kind);
    let url = cfg.ai_api_url_or_default(kind);
    let temperature = cfg.ai_temperature_or_default();

    let provider: Arc<dyn TextGenerationPort> = match kind {
        ProviderKind::Gemini => {
            let Some(key) = cfg.ai_api_key() else {
                anyhow::bail!("Set HEALTH_DESK_AI_API_KEY or GEMINI_API_KEY (env or .env) for the Gemini provider");
            };
            info!(model = %model, url = %url, "using Gemini provider");
            Arc::new(GeminiAdapter::new(url, key, model, temperature).with_client(client))
        }
        ProviderKind::OpenAi => {
            info!(model = %model, url = %url, "using OpenAI-compatible provider");
            Arc::new(
                OpenAiAdapter::new(url, cfg.ai_api_key().unwrap_or_default(), model, temperature)
                    .with_client(client),
            )
        }
        ProviderKind::Mock => {
            warn!("no AI API key configured, using mock provider");
            Arc::new(MockAiAdapter::new())
        }
    };
    Ok(provider)
}
