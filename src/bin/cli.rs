//! Activity Signup CLI
//!
//! Terminal front end for the activities service:
//! - List activities and participants
//! - Log in / out as a teacher (token kept between runs)
//! - Register or unregister students

use activity_signup::config::{generate_default_config, DEFAULT_NATIVE_API_URL};
use activity_signup::{
    ActionOutcome, ClientConfig, Feedback, FeedbackKind, FileTokenStore, ReqwestTransport,
    RosterView, SignupApp, Surface, Timer,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "activity-signup")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Manage school activity signups from the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Activities service URL
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Config file (default: ~/.config/activity-signup/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(flatten)]
    Action(Action),

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Commands that talk to the activities service
#[derive(Subcommand)]
pub enum Action {
    /// List activities and their participants
    List,

    /// Show whether the stored session is still valid
    Status,

    /// Log in as a teacher
    Login {
        username: String,
        #[arg(short, long)]
        password: String,
    },

    /// Log out and forget the stored token
    Logout,

    /// Register a student for an activity
    Signup {
        /// Activity name, e.g. "Chess Club"
        activity: String,
        /// Student email
        email: String,
    },

    /// Remove a student from an activity
    Unregister {
        /// Activity name
        activity: String,
        /// Student email
        email: String,
    },
}

/// Prints everything the core paints
struct Terminal;

impl Surface for Terminal {
    fn paint_auth(&self, authenticated: bool) {
        tracing::debug!("authenticated = {}", authenticated);
    }

    fn paint_roster(&self, roster: &RosterView) {
        print_roster(roster);
    }

    fn paint_roster_failure(&self, message: &str) {
        eprintln!("{}", message);
    }

    fn paint_feedback(&self, feedback: Option<&Feedback>) {
        match feedback {
            Some(Feedback { text, kind: FeedbackKind::Success }) => println!("✓ {}", text),
            Some(Feedback { text, kind: FeedbackKind::Error }) => eprintln!("✕ {}", text),
            None => {}
        }
    }

    fn reset_signup_form(&self) {}

    fn close_login_form(&self) {}
}

/// The process exits long before any feedback window closes
struct NoopTimer;

impl Timer for NoopTimer {
    fn schedule(&self, _delay: Duration, _task: Box<dyn FnOnce()>) {}
}

fn print_roster(roster: &RosterView) {
    for card in &roster.cards {
        println!("{}", card.name);
        println!("  {}", card.description);
        println!("  Schedule:     {}", card.schedule);
        println!("  Availability: {} spots left", card.spots_left);
        if card.participants.is_empty() {
            println!("  No participants yet");
        } else {
            println!("  Participants:");
            for row in &card.participants {
                println!("    - {}", row.email);
            }
        }
        println!();
    }
}

fn init_logging(config: &ClientConfig) {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG")
            .unwrap_or_else(|_| format!("activity_signup={}", config.logging.level)),
    );

    let registry = tracing_subscriber::registry().with(filter);
    if config.logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => ClientConfig::load_with_env(path)?,
        None => ClientConfig::load_default(),
    };
    if let Some(url) = cli.api_url {
        config.api.base_url = url;
    }
    if config.api.base_url.is_empty() {
        config.api.base_url = DEFAULT_NATIVE_API_URL.to_string();
    }

    init_logging(&config);

    let action = match cli.command {
        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)?;
                    println!("Config written to {}", path.display());
                }
                None => print!("{}", content),
            }
            return Ok(());
        }
        Commands::Action(action) => action,
    };

    let terminal = Rc::new(Terminal);
    let transport = ReqwestTransport::new()?;
    let app = SignupApp::new(
        &config,
        Rc::new(transport),
        Box::new(FileTokenStore::new(config.token_path())),
        terminal,
        Rc::new(NoopTimer),
    );

    app.session.restore();
    let outcome = match action {
        Action::List => {
            app.session.validate().await;
            if app.roster.refresh().await {
                ActionOutcome::Completed
            } else {
                ActionOutcome::Failed
            }
        }
        Action::Status => {
            let authenticated = app.session.validate().await;
            println!(
                "{} ({})",
                if authenticated { "Logged in" } else { "Logged out" },
                config.api.base_url
            );
            ActionOutcome::Completed
        }
        Action::Login { username, password } => app.dispatcher.login(&username, &password).await,
        Action::Logout => app.dispatcher.logout().await,
        Action::Signup { activity, email } => {
            app.session.validate().await;
            app.dispatcher.signup(&activity, &email).await
        }
        Action::Unregister { activity, email } => {
            app.session.validate().await;
            app.dispatcher.unregister(&activity, &email).await
        }
    };

    if !outcome.is_completed() {
        std::process::exit(1);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_config_is_separate_from_service_actions() {
        let cli = Cli::try_parse_from(["activity-signup", "config", "-o", "out.toml"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Config { output: Some(ref path) } if path == &PathBuf::from("out.toml")
        ));

        let cli =
            Cli::try_parse_from(["activity-signup", "signup", "Chess Club", "a@b.com"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Action(Action::Signup { ref activity, ref email })
                if activity == "Chess Club" && email == "a@b.com"
        ));

        let cli = Cli::try_parse_from([
            "activity-signup",
            "--api-url",
            "http://school.test",
            "login",
            "teacher",
            "-p",
            "pw",
        ])
        .unwrap();
        assert_eq!(cli.api_url.as_deref(), Some("http://school.test"));
        assert!(matches!(cli.command, Commands::Action(Action::Login { .. })));
    }
}
