use anyhow::Result;
use tracing::debug;

use crate::domain::Language;
use crate::presentation::Session;

use super::super::Container;
use super::finish;

/// Sends the topic to a running server's `/generate` and renders the view.
pub struct AskController<'a> {
    container: &'a Container,
}

impl<'a> AskController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn ask(&self, topic: String, language: Language, server: String) -> Result<String> {
        let gateway = self.container.http_gateway(&server);
        debug!("Asking {}", gateway.url());

        let mut session = Session::new(language);
        session.submit(&gateway, &topic).await;

        finish(&session)
    }
}
