use colored::*;
use comfy_table::{presets::UTF8_FULL, Table};
use premstats_core::{QueryHistory, SuccessResponse, SUGGESTIONS};
use serde_json::Value;

/// Print an answer, optionally followed by the rows behind it
pub fn print_answer(response: &SuccessResponse, show_data: bool) {
    println!("{}: {}", "Answer".blue().bold(), response.message);

    if show_data {
        match render_data_table(response) {
            Some(table) => println!("{}", table),
            None => println!("{}", "No data rows returned.".dimmed()),
        }
    }
}

/// Print the backend reply as pretty JSON
pub fn print_json(response: &SuccessResponse) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(response)?);
    Ok(())
}

pub fn print_failure(message: &str) {
    eprintln!("{}", message.red());
}

/// Render the data rows as a table, or `None` when there are none
pub fn render_data_table(response: &SuccessResponse) -> Option<String> {
    if response.is_empty() {
        return None;
    }

    let columns = response.columns();

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(columns.clone());

    for row in &response.data {
        let cells: Vec<String> = columns
            .iter()
            .map(|column| row.get(*column).map(cell_text).unwrap_or_default())
            .collect();
        table.add_row(cells);
    }

    Some(table.to_string())
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

pub fn print_suggestions() {
    println!("{}", "Try asking:".yellow().bold());
    for (i, suggestion) in SUGGESTIONS.iter().enumerate() {
        println!("  {} {}", format!(":{}", i + 1).cyan(), suggestion);
    }
}

pub fn print_history(history: &QueryHistory) {
    if history.is_empty() {
        println!("{}", "No questions asked yet.".dimmed());
        return;
    }

    println!("{}", "Recent questions:".yellow().bold());
    for (i, query) in history.entries().enumerate() {
        println!("  {} {}", format!("!{}", i + 1).cyan(), query);
    }
}

/// Show usage instructions when no prompt or action is provided
pub fn print_usage_instructions() {
    println!("{}", "Usage:".yellow().bold());
    println!("  {}", "premstats \"your question\"".green().bold());
    println!("    Ask a single question about Premier League stats");
    println!();
    println!("  {}", "premstats -i".green().bold());
    println!("    Start an interactive session");
    println!();
    println!("{}", "Options:".cyan());
    println!("  --backend-url <URL>  Backend origin (or set BACKEND_API_URL)");
    println!("  -d, --show-data      Show the rows behind each answer");
    println!("  --json               Print the raw reply as JSON");
    println!("  --suggestions        List example questions");
    println!("  --save-config        Write the effective config file");
    println!("  --help               Show this help message");
    println!();
}

pub fn print_interactive_help() {
    println!("Type a question, or one of:");
    println!("  {}  list example questions", ":suggest".cyan());
    println!("  {}        ask example question N", ":N".cyan());
    println!("  {}  list recent questions", ":history".cyan());
    println!("  {}        ask recent question N again", "!N".cyan());
    println!("  {}     toggle the data table", ":data".cyan());
    println!("  {}     leave", "exit".cyan());
    println!();
}
