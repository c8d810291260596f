//! Interactive dashboard: search box, category scores, question preview, release slider
mod app;
mod events;
mod layout;
mod rendering;
mod terminal;

use std::io;

use anyhow::Result;
pub use app::{App, Focus};
use ratatui::backend::CrosstermBackend;

use self::terminal::{CrosstermScreen, TerminalSession};
use crate::dashboard::{Dashboard, DataSource};

/// Take over the terminal and run the dashboard until the user quits
pub fn run_dashboard<S: DataSource>(dashboard: Dashboard<S>) -> Result<()> {
    let session = TerminalSession::start(CrosstermBackend::new(io::stdout()), CrosstermScreen)?;
    let mut app = App::new(dashboard);

    session.run(|terminal| app.run(terminal))
}
