//! Table observer for pretty-printing counters.
//!
//! This module provides [`TableObserver`], which renders a collection of
//! [`BoundedCounter`]s as a formatted table using the `tabled` crate.
//!
//! # Feature Flag
//!
//! This module requires the `table` feature:
//!
//! ```toml
//! [dependencies]
//! limiti = { version = "0.1", features = ["table"] }
//! ```
//!
//! # Examples
//!
//! ```rust
//! use limiti::counters::clamping::ClampingCounter;
//! use limiti::counters::wrapping::WrappingCounter;
//! use limiti::counters::BoundedCounter;
//! use limiti::observers::table::{TableObserver, TableStyle};
//!
//! let oc = WrappingCounter::new(5, 9)?.with_name("overflow");
//! let lc = ClampingCounter::new(0, 5)?.with_name("limited");
//!
//! let counters: Vec<&dyn BoundedCounter> = vec![&oc, &lc];
//! let output = TableObserver::new()
//!     .with_style(TableStyle::Ascii)
//!     .render(counters.into_iter());
//!
//! assert!(output.contains("overflow"));
//! assert!(output.contains("[0, 9]"));
//! // +----------+--------+-------+--------+-----------+
//! // | Name     | Policy | Value | Range  | Listeners |
//! // +----------+--------+-------+--------+-----------+
//! // | overflow | wrap   | 5     | [0, 9] | 0         |
//! // | limited  | clamp  | 0     | [0, 5] | 0         |
//! // +----------+--------+-------+--------+-----------+
//! # Ok::<(), limiti::Error>(())
//! ```

use crate::counters::BoundedCounter;
use tabled::{builder::Builder, settings::Style, Table, Tabled};

/// Available table styles for rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TableStyle {
    /// ASCII table with simple characters: +, -, |
    Ascii,
    /// Modern rounded corners (default)
    #[default]
    Rounded,
    /// Sharp corners with box-drawing characters
    Sharp,
    /// Modern style with clean lines
    Modern,
    /// GitHub-flavored Markdown table
    Markdown,
    /// No borders, just spacing
    Blank,
}

/// Configuration for the table observer.
#[derive(Debug, Clone)]
pub struct TableConfig {
    /// The style to use for rendering.
    pub style: TableStyle,
    /// Whether to show the header row (only in non-compact mode).
    pub show_header: bool,
    /// Custom title printed above the table (optional).
    pub title: Option<String>,
    /// Whether to use compact format (`name: value` in cells).
    pub compact: bool,
    /// Number of columns in compact mode (default: 1).
    pub columns: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            style: TableStyle::default(),
            show_header: true,
            title: None,
            compact: false,
            columns: 1,
        }
    }
}

#[derive(Tabled)]
struct CounterRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Policy")]
    policy: String,
    #[tabled(rename = "Value")]
    value: i64,
    #[tabled(rename = "Range")]
    range: String,
    #[tabled(rename = "Listeners")]
    listeners: usize,
}

fn display_name(counter: &dyn BoundedCounter) -> String {
    if counter.name().is_empty() {
        "(unnamed)".to_string()
    } else {
        counter.name().to_string()
    }
}

/// An observer that renders counters as a formatted table.
///
/// Standard mode prints one row per counter with its policy, value, range and
/// number of subscriptions. Compact mode prints `name: value` cells in a grid.
#[derive(Debug, Clone, Default)]
pub struct TableObserver {
    config: TableConfig,
}

impl TableObserver {
    /// Creates a new table observer with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new table observer with the specified configuration.
    pub fn with_config(config: TableConfig) -> Self {
        Self { config }
    }

    /// Sets the table style.
    pub fn with_style(mut self, style: TableStyle) -> Self {
        self.config.style = style;
        self
    }

    /// Sets whether to show the header row.
    pub fn with_header(mut self, show: bool) -> Self {
        self.config.show_header = show;
        self
    }

    /// Sets a title printed on the line above the table.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.config.title = Some(title.into());
        self
    }

    /// Enables or disables compact mode.
    pub fn compact(mut self, enabled: bool) -> Self {
        self.config.compact = enabled;
        self
    }

    /// Sets the number of columns in compact mode. Values below 1 become 1.
    pub fn columns(mut self, count: usize) -> Self {
        self.config.columns = count.max(1);
        self
    }

    fn apply_style(&self, table: &mut Table) {
        match self.config.style {
            TableStyle::Ascii => {
                table.with(Style::ascii());
            }
            TableStyle::Rounded => {
                table.with(Style::rounded());
            }
            TableStyle::Sharp => {
                table.with(Style::sharp());
            }
            TableStyle::Modern => {
                table.with(Style::modern());
            }
            TableStyle::Markdown => {
                table.with(Style::markdown());
            }
            TableStyle::Blank => {
                table.with(Style::blank());
            }
        }
    }

    fn with_optional_title(&self, table: Table) -> String {
        match self.config.title {
            Some(ref title) => format!("{}\n{}", title, table),
            None => table.to_string(),
        }
    }

    fn render_compact<'a>(&self, counters: impl Iterator<Item = &'a dyn BoundedCounter>) -> String {
        let cells: Vec<String> = counters
            .map(|c| format!("{}: {}", display_name(c), c.value()))
            .collect();

        if cells.is_empty() {
            return String::new();
        }

        let cols = self.config.columns;
        let mut builder = Builder::default();
        for chunk in cells.chunks(cols) {
            let mut row = chunk.to_vec();
            row.resize(cols, String::new());
            builder.push_record(row);
        }

        let mut table = builder.build();
        self.apply_style(&mut table);
        self.with_optional_title(table)
    }

    fn render_standard<'a>(
        &self,
        counters: impl Iterator<Item = &'a dyn BoundedCounter>,
    ) -> String {
        let rows: Vec<CounterRow> = counters
            .map(|c| CounterRow {
                name: display_name(c),
                policy: c.policy().to_string(),
                value: c.value(),
                range: format!("[{}, {}]", c.lower_bound(), c.upper_bound()),
                listeners: c.listener_count(),
            })
            .collect();

        let mut table = Table::new(&rows);
        self.apply_style(&mut table);

        if !self.config.show_header {
            table.with(tabled::settings::Remove::row(
                tabled::settings::object::Rows::first(),
            ));
        }

        self.with_optional_title(table)
    }

    /// Renders the counters as a formatted table string.
    pub fn render<'a>(&self, counters: impl Iterator<Item = &'a dyn BoundedCounter>) -> String {
        if self.config.compact {
            self.render_compact(counters)
        } else {
            self.render_standard(counters)
        }
    }
}
