use anyhow::{Context, Result, bail};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use premstats_core::{PremstatsResult, QueryHistory, StatsClient, SuccessResponse, suggestion};
use std::io::{self, Write};
use std::time::Duration;
use tracing::{debug, error, info};

use crate::output::{
    print_answer, print_failure, print_history, print_interactive_help, print_json,
    print_suggestions,
};

/// How each reply should be shown
#[derive(Debug, Clone, Copy)]
pub struct DisplayOptions {
    pub show_data: bool,
    pub json: bool,
}

/// One line of interactive input, interpreted
#[derive(Debug, PartialEq, Eq)]
pub enum ReplCommand {
    Empty,
    Exit,
    Help,
    ListSuggestions,
    ListHistory,
    ToggleData,
    /// One-based index into the suggestion list
    AskSuggestion(usize),
    /// One-based index into the history, most recent first
    AskHistory(usize),
    Ask(String),
}

pub fn parse_command(input: &str) -> ReplCommand {
    let input = input.trim();
    if input.is_empty() {
        return ReplCommand::Empty;
    }

    if input.eq_ignore_ascii_case("exit") || input.eq_ignore_ascii_case("quit") {
        return ReplCommand::Exit;
    }

    match input {
        ":help" | ":h" => return ReplCommand::Help,
        ":suggest" | ":s" => return ReplCommand::ListSuggestions,
        ":history" => return ReplCommand::ListHistory,
        ":data" => return ReplCommand::ToggleData,
        _ => {}
    }

    if let Some(n) = input.strip_prefix(':').and_then(|n| n.parse().ok()) {
        return ReplCommand::AskSuggestion(n);
    }
    if let Some(n) = input.strip_prefix('!').and_then(|n| n.parse().ok()) {
        return ReplCommand::AskHistory(n);
    }

    ReplCommand::Ask(input.to_string())
}

fn spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
            .template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message("Fetching stats...");
    spinner.enable_steady_tick(Duration::from_millis(120));
    spinner
}

/// Send one query while a spinner shows the request is in flight
async fn ask_with_spinner(client: &StatsClient, query: &str) -> PremstatsResult<SuccessResponse> {
    let spinner = spinner();
    let result = client.ask(query).await;
    spinner.finish_and_clear();
    result
}

fn show(response: &SuccessResponse, display: DisplayOptions) -> Result<()> {
    if display.json {
        print_json(response)
    } else {
        print_answer(response, display.show_data);
        Ok(())
    }
}

/// Runs a single query, sending one question to the backend and displaying the answer
pub async fn run_single_query(
    prompt: &str,
    client: &StatsClient,
    display: DisplayOptions,
) -> Result<()> {
    if prompt.trim().is_empty() {
        bail!("Please enter a question");
    }
    info!("Running single query: {}", prompt);

    match ask_with_spinner(client, prompt).await {
        Ok(response) => show(&response, display),
        Err(e) => {
            error!("Stats query failed: {}", e);
            bail!("{}", e.user_message())
        }
    }
}

/// Runs an interactive session against the backend
pub async fn run_interactive(
    client: &StatsClient,
    mut display: DisplayOptions,
    history_limit: usize,
) -> Result<()> {
    let mut history = QueryHistory::new(history_limit);

    println!("Ask about any Premier League statistic up to but not including the current season.");
    println!("Type ':help' for commands, 'exit' or 'quit' to end the session.");
    println!();

    loop {
        print!("{}: ", "You".green().bold());
        io::stdout().flush().context("Failed to flush stdout")?;

        let mut input = String::new();
        let read = io::stdin()
            .read_line(&mut input)
            .context("Failed to read input")?;
        if read == 0 {
            // EOF
            println!();
            break;
        }

        let query = match parse_command(&input) {
            ReplCommand::Empty => continue,
            ReplCommand::Exit => {
                println!("Exiting session.");
                break;
            }
            ReplCommand::Help => {
                print_interactive_help();
                continue;
            }
            ReplCommand::ListSuggestions => {
                print_suggestions();
                continue;
            }
            ReplCommand::ListHistory => {
                print_history(&history);
                continue;
            }
            ReplCommand::ToggleData => {
                display.show_data = !display.show_data;
                let state = if display.show_data { "on" } else { "off" };
                println!("Data table {}.", state);
                continue;
            }
            ReplCommand::AskSuggestion(n) => match n.checked_sub(1).and_then(suggestion) {
                Some(s) => s.to_string(),
                None => {
                    print_failure(&format!("No suggestion numbered {}", n));
                    continue;
                }
            },
            ReplCommand::AskHistory(n) => match n.checked_sub(1).and_then(|i| history.get(i)) {
                Some(q) => q.to_string(),
                None => {
                    print_failure(&format!("No history entry numbered {}", n));
                    continue;
                }
            },
            ReplCommand::Ask(query) => query,
        };

        debug!("Sending query to backend: {}", query);
        match ask_with_spinner(client, &query).await {
            Ok(response) => {
                history.record(&query);
                if let Err(e) = show(&response, display) {
                    error!("Failed to display answer: {}", e);
                }
            }
            Err(e) => {
                error!("Stats query failed: {}", e);
                print_failure(e.user_message());
            }
        }

        println!(); // Add spacing between interactions
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_lines_are_ignored() {
        assert_eq!(parse_command("   \n"), ReplCommand::Empty);
    }

    #[test]
    fn test_exit_words() {
        assert_eq!(parse_command("exit\n"), ReplCommand::Exit);
        assert_eq!(parse_command("QUIT"), ReplCommand::Exit);
    }

    #[test]
    fn test_meta_commands() {
        assert_eq!(parse_command(":suggest"), ReplCommand::ListSuggestions);
        assert_eq!(parse_command(":history"), ReplCommand::ListHistory);
        assert_eq!(parse_command(":data"), ReplCommand::ToggleData);
        assert_eq!(parse_command(":help"), ReplCommand::Help);
    }

    #[test]
    fn test_numbered_recalls() {
        assert_eq!(parse_command(":2"), ReplCommand::AskSuggestion(2));
        assert_eq!(parse_command("!1"), ReplCommand::AskHistory(1));
    }

    #[test]
    fn test_everything_else_is_a_question() {
        assert_eq!(
            parse_command("  How many goals did Arsenal score?  "),
            ReplCommand::Ask("How many goals did Arsenal score?".to_string())
        );
        assert_eq!(parse_command("!!!"), ReplCommand::Ask("!!!".to_string()));
    }

    #[tokio::test]
    async fn test_single_query_rejects_blank_input() {
        // Unroutable origin: the request must never be sent
        let client = StatsClient::with_base_url("http://127.0.0.1:9");
        let display = DisplayOptions {
            show_data: false,
            json: false,
        };
        let err = run_single_query("   ", &client, display).await.unwrap_err();
        assert!(err.to_string().contains("Please enter a question"));
    }
}
