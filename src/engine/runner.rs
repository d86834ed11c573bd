use std::path::Path;

use thiserror::Error;

use crate::{
    adapters::{
        csv_parser::{ParseError, read_distribution},
        window::{DisplayError, show_figure},
    },
    config::{FIGURE_HEIGHT, FIGURE_WIDTH, WINDOW_TITLE},
    engine::figure::{PlotError, render_figure},
};

/// Anything that stops a run after the command line was accepted.
#[derive(Error, Debug)]
pub enum RunError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Plot(#[from] PlotError),

    #[error(transparent)]
    Display(#[from] DisplayError),
}

/// Parse the distribution file, render it, and block until the window is closed.
///
/// Nothing is drawn or shown unless the whole file parsed.
pub fn run(path: &Path) -> Result<(), RunError> {
    let distribution = read_distribution(path)?;

    let figure = render_figure(&distribution, FIGURE_WIDTH, FIGURE_HEIGHT)?;

    show_figure(&figure, WINDOW_TITLE)?;

    Ok(())
}
