// HTML report rendering for difftable
// This crate turns the annotated views of a comparison into a standalone page

mod report;
mod theme;

pub use report::{
    diff_table, legend_table, original_table, status_class, Report, ReportSide, Stylesheet,
    DIFF_ERROR_MESSAGE,
};
pub use theme::{default_stylesheet, ReportTheme, ThemeKind, UnknownTheme};
