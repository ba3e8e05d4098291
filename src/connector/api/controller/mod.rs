pub mod analyze_controller;
pub mod ask_controller;

pub use analyze_controller::AnalyzeController;
pub use ask_controller::AskController;

use anyhow::{bail, Result};

use crate::presentation::{render_session, Session, ViewState};

/// Render a finished session. An error view is printed before failing so the
/// process exits non-zero with the rendered page still on stdout.
fn finish(session: &Session) -> Result<String> {
    let output = render_session(session);
    if let ViewState::Error(message) = session.state() {
        println!("{output}");
        bail!("{message}");
    }
    Ok(output)
}
