use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use diff_report::{Report, ReportSide, ReportTheme, Stylesheet};
use log::{info, warn};
use row_diff::{Comparator, DirectionView, RowCounts, SimilarDiffer};

use crate::config::Config;
use crate::input::{display_name, read_lines};

/// What a finished comparison produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// The report file
    pub output: PathBuf,

    /// The stylesheet file, if one was written
    pub stylesheet: Option<PathBuf>,

    /// Row counts of the original view, `None` if it failed
    pub original: Option<RowCounts>,

    /// Row counts of the revised view, `None` if it failed
    pub revised: Option<RowCounts>,
}

/// Compare the two files and write the report
///
/// Returns `Ok(None)` when either file does not exist, in which case no
/// comparison is made and nothing is written.
pub fn run(config: &Config, original_path: &Path, revised_path: &Path) -> Result<Option<Summary>> {
    let original_lines = read_lines(original_path)?;
    let revised_lines = read_lines(revised_path)?;
    let (Some(original_lines), Some(revised_lines)) = (original_lines, revised_lines) else {
        return Ok(None);
    };

    let differ = SimilarDiffer::new(config.algorithm).with_timeout(config.timeout());
    let comparator = Comparator::new(differ).parallel(config.parallel);
    info!(
        "Comparing {} with {} lines using {}",
        original_lines.len(),
        revised_lines.len(),
        comparator.differ().algorithm()
    );
    let view = comparator.compare(&original_lines, &revised_lines);

    let original_name = display_name(original_path);
    let revised_name = display_name(revised_path);
    let theme = ReportTheme::of(config.theme);

    let stylesheet = if config.inline_style {
        Stylesheet::Inline(theme.stylesheet())
    } else {
        Stylesheet::Link(config.stylesheet.clone())
    };

    let html = Report::new(
        ReportSide::new(&original_name, &original_lines, &view.original),
        ReportSide::new(&revised_name, &revised_lines, &view.revised),
    )
    .stylesheet(stylesheet)
    .show_originals(config.show_originals)
    .render_to_string();

    fs::write(&config.output, html)
        .with_context(|| format!("Failed to write report {}", config.output.display()))?;
    info!("Wrote report to {}", config.output.display());

    let stylesheet = if config.write_stylesheet {
        write_stylesheet(config, &theme)?
    } else {
        None
    };

    let summary = Summary {
        output: config.output.clone(),
        stylesheet,
        original: counts(&view.original),
        revised: counts(&view.revised),
    };
    log_view(&original_name, &view.original);
    log_view(&revised_name, &view.revised);

    Ok(Some(summary))
}

/// Write the theme's stylesheet where the report's link points
fn write_stylesheet(config: &Config, theme: &ReportTheme) -> Result<Option<PathBuf>> {
    if config.inline_style {
        warn!("Stylesheet is inlined in the report, not writing a separate file");
        return Ok(None);
    }

    let Some(file_name) = Path::new(&config.stylesheet).file_name() else {
        warn!("Stylesheet href {} has no file name, not writing it", config.stylesheet);
        return Ok(None);
    };
    let path = config
        .output
        .parent()
        .map(|dir| dir.join(file_name))
        .unwrap_or_else(|| PathBuf::from(file_name));

    fs::write(&path, theme.stylesheet())
        .with_context(|| format!("Failed to write stylesheet {}", path.display()))?;
    info!("Wrote stylesheet to {}", path.display());

    Ok(Some(path))
}

fn counts(view: &DirectionView) -> Option<RowCounts> {
    view.as_ref().ok().map(|rows| RowCounts::of(rows))
}

fn log_view(name: &str, view: &DirectionView) {
    match view {
        Ok(rows) => info!("{}: {}", name, RowCounts::of(rows)),
        Err(err) => warn!("{}: {}", name, err),
    }
}
