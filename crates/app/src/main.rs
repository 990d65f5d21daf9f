use std::sync::Arc;

use clap::Parser;
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{
    ApiConfig, AppServices, AuthService, CourseService, DEFAULT_BASE_URL, DocumentService,
    WorkspaceService,
};
use study_core::model::Language;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use ui::{App, UiApp, build_app_context};
use url::Url;

/// Desktop study client for the LearnSync backend.
#[derive(Parser, Debug)]
#[command(name = "learnsync")]
#[command(about = "Desktop study client: courses, documents, quizzes and flashcards")]
struct Args {
    /// Backend base URL
    #[arg(long, env = "STUDY_API_BASE_URL", default_value = DEFAULT_BASE_URL)]
    api_url: String,

    /// Interface language on launch (en or ar)
    #[arg(long, env = "STUDY_LANG", default_value = "en")]
    lang: Language,
}

struct DesktopApp {
    language: Language,
    services: AppServices,
}

impl UiApp for DesktopApp {
    fn initial_language(&self) -> Language {
        self.language
    }

    fn api_base_url(&self) -> Url {
        self.services.config().base_url().clone()
    }

    fn auth(&self) -> Arc<AuthService> {
        self.services.auth()
    }

    fn courses(&self) -> Arc<CourseService> {
        self.services.courses()
    }

    fn documents(&self) -> Arc<DocumentService> {
        self.services.documents()
    }

    fn workspace(&self) -> Arc<WorkspaceService> {
        self.services.workspace()
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = ApiConfig::new(&args.api_url)?;
    tracing::info!(api = %config.base_url(), lang = %args.lang, "starting study client");
    let services = AppServices::new_http(config)?;

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        language: args.lang,
        services,
    });
    let context = build_app_context(&app);

    // Some tao setups default to always-on-top; keep the window ordinary.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("LearnSync AI")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    init_tracing();
    let args = Args::parse();
    if let Err(err) = run(args) {
        tracing::error!(error = %err, "failed to start");
        eprintln!("{err}");
        std::process::exit(2);
    }
}
