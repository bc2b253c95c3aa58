//! Terminal styling utilities for the wizard

use console::{measure_text_width, style, Emoji};
use std::path::Path;

use crate::pipeline::ConversionRequest;

// Emoji icons with fallbacks for terminals that don't support them
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "[*] ");
pub static CROSS: Emoji<'_, '_> = Emoji("❌ ", "[x] ");
pub static FILM: Emoji<'_, '_> = Emoji("🎬 ", "");
pub static CLIPBOARD: Emoji<'_, '_> = Emoji("📋 ", "");
pub static FOLDER: Emoji<'_, '_> = Emoji("📂 ", "");
pub static SAVE: Emoji<'_, '_> = Emoji("💾 ", "");
pub static RULER: Emoji<'_, '_> = Emoji("📐 ", "");
pub static PALETTE: Emoji<'_, '_> = Emoji("🎨 ", "");
pub static SPARKLE: Emoji<'_, '_> = Emoji("✨ ", "");
pub static LINK: Emoji<'_, '_> = Emoji("🔗 ", "");

/// Print the application banner
pub fn print_banner(version: &str) {
    println!();
    println!(
        "    {}{}",
        FILM,
        style("FFmpeg CLI Wizard").cyan().bold()
    );
    println!(
        "    {}",
        style("Resize and convert images, one question at a time").dim()
    );
    println!("    {}", style(format!("v{}", version)).dim());
    println!("    {}", style("━".repeat(50)).dim());
    println!();
}

/// Print the summary card shown before the final confirmation
pub fn print_request_summary(request: &ConversionRequest) {
    println!();
    for line in request_summary_lines(request) {
        println!("    {}", line);
    }
    println!();
}

/// Lines of the summary card, each padded to the same display width
pub fn request_summary_lines(request: &ConversionRequest) -> Vec<String> {
    const BOX_WIDTH: usize = 56;
    let inner = BOX_WIDTH - 2;
    let rule = "─".repeat(inner);
    let settings = &request.settings;

    let width = settings
        .width
        .map(|w| w.to_string())
        .unwrap_or_else(|| "auto".to_string());
    let aspect = if settings.keeps_aspect_ratio() {
        "Preserved"
    } else {
        "Custom"
    };

    let field = |icon: &Emoji<'_, '_>, label: &str, value: String| {
        boxed_row(&format!("  {}{:<14}{}", icon, label, value), inner)
    };

    vec![
        format!("┌{}┐", rule),
        boxed_row(
            &format!(" {}{}", CLIPBOARD, style("Conversion Summary").cyan().bold()),
            inner,
        ),
        format!("├{}┤", rule),
        field(&FOLDER, "Input:", truncate_path(request.input.path(), 34)),
        field(&SAVE, "Output:", truncate_path(&request.output_dir, 34)),
        format!("├{}┤", rule),
        field(&RULER, "Dimensions:", format!("{} x {}", width, settings.height)),
        field(
            &PALETTE,
            "Format:",
            settings.format.extension().to_uppercase(),
        ),
        field(&SPARKLE, "Quality:", format!("{}%", settings.quality)),
        field(&LINK, "Aspect Ratio:", aspect.to_string()),
        format!("└{}┘", rule),
    ]
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("    {} {}", style("✓").green().bold(), style(message).green());
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("    {}{}", INFO, message);
}

/// Print an error or abort message
pub fn print_error(message: &str) {
    println!("    {}{}", CROSS, style(message).red());
}

// Helper functions

fn boxed_row(content: &str, inner_width: usize) -> String {
    let padding = inner_width.saturating_sub(measure_text_width(content));
    format!("│{}{}│", content, " ".repeat(padding))
}

fn truncate_path(path: &Path, max_len: usize) -> String {
    let path_str = path.display().to_string();
    truncate_string(&path_str, max_len)
}

fn truncate_string(s: &str, max_len: usize) -> String {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() <= max_len {
        s.to_string()
    } else {
        let tail: String = chars[chars.len() - (max_len - 3)..].iter().collect();
        format!("...{}", tail)
    }
}
