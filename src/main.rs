use std::net::{IpAddr, Ipv4Addr};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use prokontra::connector::api::Router;
use prokontra::connector::DEFAULT_KEY_FILE;
use prokontra::{run_server, Commands, Container, ContainerConfig, ServerConfig};

#[derive(Parser)]
#[command(name = "prokontra")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use the deterministic mock model instead of Gemini
    #[arg(long, global = true)]
    mock_ai: bool,

    /// Key file read when GEMINI_API_KEY is not set (line format: `api_key: <key>`)
    #[arg(long, global = true, default_value = DEFAULT_KEY_FILE)]
    key_file: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let container = Container::new(ContainerConfig {
        key_file: cli.key_file,
        mock_ai: cli.mock_ai,
    });

    if let Commands::Serve {
        port,
        public,
        static_dir,
    } = cli.command
    {
        let host = if public {
            IpAddr::V4(Ipv4Addr::UNSPECIFIED)
        } else {
            IpAddr::V4(Ipv4Addr::LOCALHOST)
        };
        let config = ServerConfig {
            host,
            port,
            static_dir,
        };
        return run_server(container.app_state(), &config).await;
    }

    let router = Router::new(&container);
    let output = router.route(cli.command).await?;
    println!("{}", output);

    Ok(())
}

#[cfg(test)]
mod cli_tests {
    use super::*;
    use prokontra::Language;

    #[test]
    fn analyze_parses_language_code() {
        let cli = Cli::try_parse_from(["prokontra", "analyze", "Buy a car", "-l", "en"]).unwrap();
        match cli.command {
            Commands::Analyze { topic, language } => {
                assert_eq!(topic, "Buy a car");
                assert_eq!(language, Language::English);
            }
            _ => panic!("expected analyze"),
        }
    }

    #[test]
    fn unknown_language_is_rejected() {
        let res = Cli::try_parse_from(["prokontra", "analyze", "kopi", "--language", "fr"]);
        assert!(res.is_err());
    }

    #[test]
    fn serve_defaults() {
        let cli = Cli::try_parse_from(["prokontra", "serve"]).unwrap();
        match cli.command {
            Commands::Serve {
                port,
                public,
                static_dir,
            } => {
                assert_eq!(port, 3000);
                assert!(!public);
                assert_eq!(static_dir, PathBuf::from("public"));
            }
            _ => panic!("expected serve"),
        }
        assert_eq!(cli.key_file, PathBuf::from("apikey.txt"));
    }
}
