use clap::Parser;
use clap_complete::Shell;
use std::path::PathBuf;

/// CLI arguments for nomadchat
#[derive(Parser, Debug)]
#[command(name = "nomadchat")]
#[command(about = "Digital Nomad Travel Assistant - quick, excited travel answers")]
#[command(version = "0.1.0")]
#[command(after_help = "Examples:
  nomadchat \"What's the internet speed in Lisbon?\"
  nomadchat \"Tell me about digital nomad visas for Portugal\"
  nomadchat                    # Interactive mode
  nomadchat --web              # Serve the chat widget and /api")]
pub struct Cli {
    /// Your travel question (starts interactive mode when omitted)
    pub question: Option<String>,

    /// Run the HTTP API and chat widget server
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub web: bool,

    /// Web server port
    #[arg(long, default_value = "8000", env = "NOMADCHAT_WEB_PORT")]
    pub web_port: u16,

    /// Web server bind address
    #[arg(long, default_value = "0.0.0.0", env = "NOMADCHAT_WEB_BIND")]
    pub web_bind: String,

    /// Directory holding index.html and the widget bundle
    #[arg(long, value_name = "DIR", default_value = "static", env = "NOMADCHAT_STATIC_DIR")]
    pub static_dir: PathBuf,

    /// Deployment label reported by /api/health
    /// (default: "vercel" when VERCEL is set, otherwise "local")
    #[arg(long, value_name = "NAME", env = "NOMADCHAT_ENVIRONMENT")]
    pub environment: Option<String>,

    /// Override the Perplexity model (default: sonar)
    #[arg(long, value_name = "MODEL", env = "PERPLEXITY_MODEL")]
    pub model: Option<String>,

    /// Override the Perplexity chat completions URL
    #[arg(long, value_name = "URL", env = "PERPLEXITY_API_URL")]
    pub api_url: Option<String>,

    /// Generate shell completions
    #[arg(long, value_enum)]
    pub generate: Option<Shell>,

    /// Enable verbose debug output
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

/// Set by the Vercel runtime
const VERCEL_ENV: &str = "VERCEL";

impl Cli {
    /// Deployment label for /api/health
    pub fn deployment_environment(&self) -> String {
        resolve_environment(
            self.environment.as_deref(),
            std::env::var_os(VERCEL_ENV).is_some(),
        )
    }
}

fn resolve_environment(explicit: Option<&str>, on_vercel: bool) -> String {
    match explicit {
        Some(name) if !name.trim().is_empty() => name.to_string(),
        _ if on_vercel => "vercel".to_string(),
        _ => "local".to_string(),
    }
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
    fn test_question_is_positional() {
        let cli = Cli::try_parse_from(["nomadchat", "Visa for Georgia?"]).unwrap();
        assert_eq!(cli.question.as_deref(), Some("Visa for Georgia?"));
        assert!(!cli.web);
    }

    #[test]
    fn test_web_flags() {
        let cli = Cli::try_parse_from([
            "nomadchat",
            "--web",
            "--web-port",
            "9000",
            "--web-bind",
            "127.0.0.1",
            "--static-dir",
            "public",
        ])
        .unwrap();
        assert!(cli.web);
        assert_eq!(cli.web_port, 9000);
        assert_eq!(cli.web_bind, "127.0.0.1");
        assert_eq!(cli.static_dir, PathBuf::from("public"));
        assert_eq!(cli.question, None);
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        assert!(Cli::try_parse_from(["nomadchat", "--web-port", "not-a-port"]).is_err());
    }

    #[test]
    fn test_environment_defaults() {
        assert_eq!(resolve_environment(None, false), "local");
        assert_eq!(resolve_environment(None, true), "vercel");
        assert_eq!(resolve_environment(Some(""), true), "vercel");
    }

    #[test]
    fn test_explicit_environment_wins() {
        let cli = Cli::try_parse_from(["nomadchat", "--web", "--environment", "staging"]).unwrap();
        assert_eq!(cli.environment.as_deref(), Some("staging"));
        assert_eq!(resolve_environment(cli.environment.as_deref(), true), "staging");
        assert_eq!(cli.deployment_environment(), "staging");
    }
}
