use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use log::info;
use planner_core::Clock;
use services::{ApiConfig, HttpPlannerApi, SessionService, SubjectService};
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidApiUrl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidApiUrl { raw } => write!(f, "invalid --api-url value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    subjects: Arc<SubjectService>,
    sessions: Arc<SessionService>,
    clock: Clock,
}

impl UiApp for DesktopApp {
    fn subjects(&self) -> Arc<SubjectService> {
        Arc::clone(&self.subjects)
    }

    fn sessions(&self) -> Arc<SessionService> {
        Arc::clone(&self.sessions)
    }

    fn clock(&self) -> Clock {
        self.clock
    }
}

struct Args {
    api: ApiConfig,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--api-url <url>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --api-url {}", services::config::DEFAULT_API_URL);
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  PLANNER_API_URL");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut api = ApiConfig::from_env();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--api-url" => {
                    let value = require_value(args, "--api-url")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidApiUrl { raw: value });
                    }
                    api = ApiConfig::new(value);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self { api })
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    info!("using API at {}", parsed.api.base_url());

    let api = Arc::new(HttpPlannerApi::new(parsed.api));
    let subjects = Arc::new(SubjectService::new(Arc::clone(&api) as _));
    let sessions = Arc::new(SessionService::new(api as _));

    let app = DesktopApp {
        subjects,
        sessions,
        clock: Clock::default_clock(),
    };

    let context = build_app_context(&(Arc::new(app) as Arc<dyn UiApp>));

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("StudyPlanner")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    env_logger::init();

    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
