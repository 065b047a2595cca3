//! typeahead TUI — ratatui front-end over a [`Session`].

pub mod app;
pub mod event;
pub mod theme;
pub mod widgets;

pub use app::App;

use std::sync::Arc;
use typeahead_core::{config::Config, Machine, Session, Source};

/// Start the TUI against `source`.
///
/// Searches run on a dedicated multi-threaded tokio runtime while the render
/// loop blocks on the terminal from the calling thread.
pub fn run(config: Config, source: Arc<dyn Source>) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("typeahead-search")
        .build()?;

    let theme = theme::Theme::by_name(&config.ui.theme).unwrap_or_else(|e| {
        tracing::warn!(theme = %config.ui.theme, error = %e, "falling back to default theme");
        theme::Theme::load_default()
    });

    let machine = Machine::new(config.search.stale_results);
    let session = Session::new(machine, source, runtime.handle().clone());
    let result = App::new(session, config, theme).run();

    // Searches still in flight are not worth waiting for.
    runtime.shutdown_background();
    result
}
