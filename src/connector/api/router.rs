use anyhow::{bail, Result};

use crate::Commands;

use super::container::Container;
use super::controller::{AnalyzeController, AskController};

/// Routes one-shot CLI commands to their controllers.
pub struct Router<'a> {
    analyze_controller: AnalyzeController<'a>,
    ask_controller: AskController<'a>,
}

impl<'a> Router<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self {
            analyze_controller: AnalyzeController::new(container),
            ask_controller: AskController::new(container),
        }
    }

    pub async fn route(&self, command: Commands) -> Result<String> {
        match command {
            Commands::Analyze { topic, language } => {
                self.analyze_controller.analyze(topic, language).await
            }
            Commands::Ask {
                topic,
                language,
                server,
            } => self.ask_controller.ask(topic, language, server).await,
            Commands::Serve { .. } => bail!("serve runs the HTTP server and is not routed here"),
        }
    }
}
