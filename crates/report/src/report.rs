//! HTML report for a side-by-side comparison
//!
//! The report shows the plain content of both files, the annotated view of
//! each file and a legend for the status colors.

use log::debug;
use maud::{html, Markup, PreEscaped, DOCTYPE};
use row_diff::{AnnotatedRow, DirectionView, LineSequence, RowStatus};

/// Placeholder shown in a diff table whose direction could not be annotated
pub const DIFF_ERROR_MESSAGE: &str = "ERROR OCCURRED WHILE CALCULATING DIFF";

/// How the report pulls in its stylesheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stylesheet {
    /// Reference an external stylesheet
    Link(String),

    /// Embed the stylesheet in a `<style>` element
    Inline(String),
}

impl Default for Stylesheet {
    fn default() -> Self {
        Self::Link("style.css".to_string())
    }
}

/// One compared file: its name, its lines and its annotated view
#[derive(Debug, Clone, Copy)]
pub struct ReportSide<'a> {
    pub name: &'a str,
    pub lines: &'a LineSequence,
    pub view: &'a DirectionView,
}

impl<'a> ReportSide<'a> {
    pub fn new(name: &'a str, lines: &'a LineSequence, view: &'a DirectionView) -> Self {
        Self { name, lines, view }
    }
}

/// Builder for the comparison report
#[derive(Debug, Clone)]
pub struct Report<'a> {
    original: ReportSide<'a>,
    revised: ReportSide<'a>,
    stylesheet: Stylesheet,
    show_originals: bool,
}

impl<'a> Report<'a> {
    /// Create a report for two compared files
    pub fn new(original: ReportSide<'a>, revised: ReportSide<'a>) -> Self {
        Self {
            original,
            revised,
            stylesheet: Stylesheet::default(),
            show_originals: true,
        }
    }

    /// Set how the stylesheet is included
    pub fn stylesheet(mut self, stylesheet: Stylesheet) -> Self {
        self.stylesheet = stylesheet;
        self
    }

    /// Choose whether the plain file tables are shown
    pub fn show_originals(mut self, show: bool) -> Self {
        self.show_originals = show;
        self
    }

    /// Render the full page
    pub fn render(&self) -> Markup {
        debug!(
            "Rendering report for {} and {}",
            self.original.name, self.revised.name
        );

        html! {
            (DOCTYPE)
            html {
                head {
                    meta charset="utf-8";
                    title { (self.original.name) " vs " (self.revised.name) }
                    @match &self.stylesheet {
                        Stylesheet::Link(href) => {
                            link rel="stylesheet" href=(href);
                        },
                        Stylesheet::Inline(css) => {
                            style { (PreEscaped(css)) }
                        },
                    }
                }
                body {
                    div class="report" {
                        @if self.show_originals {
                            (original_table(&format!("Original {}", self.original.name), self.original.lines))
                            (original_table(&format!("Original {}", self.revised.name), self.revised.lines))
                        }
                        (diff_table(self.original.name, self.original.view))
                        (diff_table(self.revised.name, self.revised.view))
                        (legend_table())
                    }
                }
            }
        }
    }

    /// Render the full page to a string
    pub fn render_to_string(&self) -> String {
        self.render().into_string()
    }
}

/// Table with the plain lines of a file
pub fn original_table(caption: &str, lines: &LineSequence) -> Markup {
    html! {
        table {
            caption { (caption) }
            @for line in lines {
                tr { td { (line) } }
            }
        }
    }
}

/// Table with the annotated rows of one direction
///
/// A failed direction renders a single placeholder row instead of its rows.
pub fn diff_table(caption: &str, view: &DirectionView) -> Markup {
    html! {
        table {
            caption { (caption) }
            @match view {
                Ok(rows) => {
                    @for row in rows {
                        (diff_table_row(row))
                    }
                },
                Err(_) => {
                    tr { td class="diffError" { (DIFF_ERROR_MESSAGE) } }
                },
            }
        }
    }
}

fn diff_table_row(row: &AnnotatedRow) -> Markup {
    html! {
        tr { td class=[status_class(row.status)] { (row.text) } }
    }
}

/// Get the CSS class for a row status
pub fn status_class(status: RowStatus) -> Option<&'static str> {
    match status {
        RowStatus::Unchanged => None,
        RowStatus::Changed => Some("diffChanged"),
        RowStatus::Deleted => Some("diffDeleted"),
        RowStatus::Inserted => Some("diffAdded"),
    }
}

/// Legend explaining the status colors
pub fn legend_table() -> Markup {
    let entries = [
        ("Changed", RowStatus::Changed),
        ("Deleted", RowStatus::Deleted),
        ("Added", RowStatus::Inserted),
    ];

    html! {
        table class="legend" {
            caption { "Legend" }
            @for (label, status) in entries {
                tr {
                    td {
                        div class=(format!("rect {}", status_class(status).unwrap_or_default())) {
                            (label)
                        }
                    }
                }
            }
        }
    }
}
