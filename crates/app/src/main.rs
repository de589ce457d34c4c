use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use hedge_core::TickSchedule;
use hedge_core::model::{Category, HedgeOption, StatsCounters, TickOutcome};
use services::{AppServices, HedgeConfig, RewardSource, SharedShell, TickHandle};
use tokio::sync::Mutex;
use ui::{App, UiApp, build_app_context};

#[derive(Parser, Debug)]
#[command(name = "hedge", version, about = "文章被拒 · 风险对冲机器")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// TOML config file
    #[arg(long, global = true, env = "HEDGE_CONFIG")]
    config: Option<PathBuf>,

    /// Milliseconds between progress ticks (overrides the config file)
    #[arg(long, global = true)]
    tick_ms: Option<u64>,

    /// Progress added per tick (overrides the config file)
    #[arg(long, global = true)]
    step: Option<u8>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Launch the desktop window (default)
    Ui,
    /// Run complete sessions without a window
    Run {
        /// emotional, practical, community or gamified (default from `[run]`)
        #[arg(long)]
        category: Option<Category>,

        /// Number of sessions to play (default from `[run]`)
        #[arg(long)]
        sessions: Option<u32>,
    },
}

struct DesktopApp {
    services: AppServices,
}

impl UiApp for DesktopApp {
    fn schedule(&self) -> TickSchedule {
        self.services.schedule()
    }

    fn initial_counters(&self) -> StatsCounters {
        self.services.initial_counters()
    }

    fn rewards(&self) -> Arc<dyn RewardSource> {
        self.services.rewards()
    }
}

fn load_config(cli: &Cli) -> Result<HedgeConfig> {
    let mut config = match &cli.config {
        Some(path) => HedgeConfig::load(path)?,
        None => HedgeConfig::default(),
    };
    if let Some(tick_ms) = cli.tick_ms {
        config.ticker.interval_ms = tick_ms;
    }
    if let Some(step) = cli.step {
        config.ticker.step = step;
    }
    config.validate()?;
    Ok(config)
}

fn launch_ui(services: AppServices) {
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp { services });
    let context = build_app_context(&app);

    // Some dev setups default the window to always-on-top.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("文章被拒 · 风险对冲机器")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
}

async fn run_headless(services: &AppServices, category: Category, sessions: u32) -> Result<()> {
    let shell: SharedShell = Arc::new(Mutex::new(services.new_shell()));
    let option = HedgeOption::for_category(category);
    let eta = services.schedule().time_to_complete();

    for round in 1..=sessions {
        let token = shell.lock().await.open(option);
        tracing::info!(round, category = %category, ?eta, "session started");

        let outcome = TickHandle::spawn(Arc::clone(&shell), token)
            .finished()
            .await?;
        if outcome != TickOutcome::Completed {
            anyhow::bail!("session {round} ended without completing: {outcome:?}");
        }

        let receipt = shell.lock().await.collect()?;
        tracing::info!(
            round,
            points = receipt.points.value(),
            "{} {}",
            receipt.toast.title,
            receipt.toast.description
        );
    }

    let shell = shell.lock().await;
    let counters = shell.counters();
    let view = shell.stats_view();
    println!("等级        Lv.{} ({}/100)", view.level, view.level_progress);
    println!("治愈积分    {}", counters.total_points());
    println!("对冲次数    {}", counters.hedges_used());
    println!("情绪稳定度  {}%", counters.emotional_stability());
    println!("抗挫折能力  {}%", counters.resilience());
    println!("{}", view.advisory.message());
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    let config = load_config(&cli).context("loading configuration")?;
    let services = AppServices::from_config(&config)?;
    tracing::debug!(
        interval = ?services.schedule().interval(),
        step = services.schedule().step(),
        "configuration loaded"
    );

    match cli.command.unwrap_or(Command::Ui) {
        Command::Ui => launch_ui(services),
        Command::Run { category, sessions } => {
            let category = category.unwrap_or(config.run.category);
            let sessions = sessions.unwrap_or(config.run.sessions);
            run_headless(&services, category, sessions).await?;
        }
    }
    Ok(())
}

