mod schedule;

use std::path::PathBuf;

use chrono::{Datelike, Local, Utc};
use clap::Parser;
use nb_collect::{collect, GoogleNewsSource};
use nb_core::config::ModelConfig;
use nb_core::{AppConfig, Briefing, Error, Result};
use nb_inference::{BriefingModel, DummyModel, GeminiModel};
use nb_mailer::{render_report, Mailer};
use tracing::{info, warn};

use crate::schedule::{lookback_for, Lookback};

#[derive(Parser, Debug)]
#[command(
    name = "nb",
    about = "Collects Korean construction-market news and mails an AI briefing"
)]
struct Cli {
    /// Path to a JSON config file; built-in defaults are used when omitted.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Run even on a weekend.
    #[arg(long)]
    force: bool,
    /// Override the recency window in hours.
    #[arg(long)]
    lookback_hours: Option<i64>,
    /// Write the rendered report to this file instead of sending mail.
    #[arg(long)]
    dry_run: Option<PathBuf>,
    /// Briefing model. Available models: gemini (default), dummy.
    #[arg(long, default_value = "gemini")]
    model: String,
}

fn create_model(name: &str, config: &ModelConfig) -> Result<Box<dyn BriefingModel>> {
    match name {
        "dummy" => Ok(Box::new(DummyModel::new())),
        "gemini" => {
            let api_key = std::env::var("GEMINI_API_KEY")
                .map_err(|_| Error::Config("GEMINI_API_KEY is not set".to_string()))?;
            Ok(Box::new(GeminiModel::new(config.clone(), api_key)?))
        }
        other => Err(Error::Config(format!("unknown model: {}", other))),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };

    let today = Local::now();
    let lookback = match lookback_for(today.weekday()) {
        Some(lookback) => lookback,
        None if cli.force => Lookback::DAILY,
        None => {
            info!("💤 Weekend, skipping this run (use --force to override)");
            return Ok(());
        }
    };
    config.collector.lookback_hours = cli.lookback_hours.unwrap_or(lookback.hours);
    config.collector.lookback_days = match cli.lookback_hours {
        // Round the freshness directive up to whole days.
        Some(hours) => ((hours.max(1) + 23) / 24) as u32,
        None => lookback.days,
    };

    info!(
        "🔎 Collecting news ({}h window, {} keyword(s))",
        config.collector.lookback_hours,
        config.collector.keywords.len()
    );
    let source = GoogleNewsSource::new();
    let outcome = collect(&source, &config.collector, Utc::now()).await;
    if !outcome.failed_keywords.is_empty() {
        warn!(
            "⚠️ {} keyword(s) failed: {}",
            outcome.failed_keywords.len(),
            outcome.failed_keywords.join(", ")
        );
    }
    if outcome.items.is_empty() {
        info!("📭 No items collected, skipping briefing and mail");
        return Ok(());
    }

    let model = create_model(&cli.model, &config.model)?;
    info!("🧠 Requesting briefing from {}", model.name());
    let briefing = match model.brief(&outcome.items).await {
        Ok(briefing) => {
            info!("✨ Briefing ready with {} pick(s)", briefing.picks.len());
            briefing
        }
        Err(e) => {
            warn!("🤖 Briefing model failed ({}), sending headlines only", e);
            Briefing {
                weather: "오늘은 AI 요약 없이 주요 헤드라인만 전달드립니다.".to_string(),
                picks: Vec::new(),
            }
        }
    };

    let date_label = today.format("%Y년 %m월 %d일").to_string();
    let category_order: Vec<String> = config
        .collector
        .categories
        .iter()
        .map(|c| c.label.clone())
        .collect();
    let html = render_report(&date_label, &briefing, &outcome.items, &category_order);

    if let Some(path) = &cli.dry_run {
        std::fs::write(path, &html)?;
        info!("📝 Report written to {}", path.display());
        return Ok(());
    }

    if config.mail.recipients.is_empty() {
        warn!("📭 No recipients configured, nothing to send");
        return Ok(());
    }
    let username = std::env::var("SMTP_USERNAME")
        .map_err(|_| Error::Config("SMTP_USERNAME is not set".to_string()))?;
    let password = std::env::var("SMTP_PASSWORD")
        .map_err(|_| Error::Config("SMTP_PASSWORD is not set".to_string()))?;
    let mailer = Mailer::new(config.mail.clone(), &username, &password)?;
    let subject = format!("{} {}", config.mail.subject_prefix, date_label);
    let sent = mailer.send_report(&subject, &html).await?;
    info!("✅ Briefing delivered to {} recipient(s)", sent);

    Ok(())
}
