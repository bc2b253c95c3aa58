//! Conversion outcome and the final report

use std::path::PathBuf;

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;

/// A file the tool failed to convert
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFailure {
    pub input: PathBuf,
    pub reason: String,
}

/// Result of a batch run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConversionOutcome {
    /// Output files written by successful conversions, in processing order
    pub converted: Vec<PathBuf>,
    pub failures: Vec<FileFailure>,
}

impl ConversionOutcome {
    pub fn record_success(&mut self, output: PathBuf) {
        self.converted.push(output);
    }

    pub fn record_failure(&mut self, input: PathBuf, reason: String) {
        self.failures.push(FileFailure { input, reason });
    }

    pub fn succeeded(&self) -> usize {
        self.converted.len()
    }

    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    pub fn total(&self) -> usize {
        self.succeeded() + self.failed()
    }

    pub fn display(&self) {
        println!();
        println!(
            "    {} {}",
            style("✨").cyan(),
            style("CONVERSION COMPLETE").white().bold()
        );
        println!("    {}", style("─".repeat(50)).dim());
        println!();

        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec![
            Cell::new("Result").add_attribute(Attribute::Bold),
            Cell::new("Files").add_attribute(Attribute::Bold),
        ]);

        table.add_row(vec![
            Cell::new("✅ Successful"),
            Cell::new(self.succeeded())
                .fg(Color::Green)
                .add_attribute(Attribute::Bold),
        ]);

        if self.failed() > 0 {
            table.add_row(vec![
                Cell::new("❌ Failed"),
                Cell::new(self.failed()).fg(Color::Red),
            ]);
        }

        for line in table.to_string().lines() {
            println!("    {}", line);
        }

        if !self.failures.is_empty() {
            println!();
            println!(
                "      {} {}:",
                style("Failed Files").yellow(),
                style(format!("({})", self.failed())).dim()
            );
            for failure in &self.failures {
                println!(
                    "        {} {} {}",
                    style("•").dim(),
                    failure.input.display(),
                    style(&failure.reason).dim()
                );
            }
        }
        println!();
    }
}
