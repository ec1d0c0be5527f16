//! Output formatting for the CLI.

use crate::batch::DocumentResult;
use crate::config::OutputFormat;
use crate::error::{CliError, Result};
use crate::tabular::{TabularRow, COLUMNS};
use colored::*;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};
use vitae_domain::DegreeLevel;

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format batch results.
    pub fn format_results(&self, results: &[DocumentResult]) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_results_json(results),
            OutputFormat::Csv => self.format_results_csv(results),
            OutputFormat::Table => Ok(self.format_results_table(results)),
            OutputFormat::Quiet => Ok(self.format_results_quiet(results)),
        }
    }

    /// Format results as a JSON array of rows.
    fn format_results_json(&self, results: &[DocumentResult]) -> Result<String> {
        let rows: Vec<TabularRow> = results.iter().map(|r| TabularRow::from_record(&r.record)).collect();
        Ok(serde_json::to_string_pretty(&rows)?)
    }

    /// Format results as CSV: the column header, then one fully quoted row per document.
    fn format_results_csv(&self, results: &[DocumentResult]) -> Result<String> {
        let mut writer = csv::WriterBuilder::new()
            .quote_style(csv::QuoteStyle::Always)
            .from_writer(Vec::new());

        writer.write_record(COLUMNS)?;
        for result in results {
            writer.write_record(TabularRow::from_record(&result.record).values())?;
        }

        let bytes = writer.into_inner().map_err(|e| CliError::Io(e.into_error()))?;
        String::from_utf8(bytes).map_err(|e| CliError::InvalidInput(e.to_string()))
    }

    /// Format results as a table.
    fn format_results_table(&self, results: &[DocumentResult]) -> String {
        if results.is_empty() {
            return self.colorize("No documents processed.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["Name", "File", "PhD", "Master's", "Undergrad", "Notes"]);

        for result in results {
            let record = &result.record;
            let notes = TabularRow::from_record(record)
                .get("notes")
                .unwrap_or_default()
                .to_string();
            builder.push_record([
                record.name.clone(),
                record.source_label.clone(),
                record.format_degrees(DegreeLevel::Phd),
                record.format_degrees(DegreeLevel::Masters),
                record.format_degrees(DegreeLevel::Undergrad),
                notes,
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Format results in quiet mode (label, name, degree count).
    fn format_results_quiet(&self, results: &[DocumentResult]) -> String {
        results
            .iter()
            .map(|r| format!("{}\t{}\t{}", r.record.source_label, r.record.name, r.record.degrees.len()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Format a section heading.
    pub fn heading(&self, text: &str) -> String {
        self.colorize(text, "cyan")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "green" => text.green().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}
