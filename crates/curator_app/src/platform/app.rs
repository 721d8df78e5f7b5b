use std::io::{self, BufRead};
use std::path::Path;
use std::sync::{mpsc, Arc};
use std::thread;

use anyhow::Context;
use curator_client::{ClientSettings, HttpContentApi};
use curator_core::{update, AppState, Msg, Section};
use ui_logging::{ui_info, ui_warn};

use super::effects::EffectRunner;
use super::{logging, preview, ui};

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Everything the main loop consumes: core messages from stdin commands and
/// effect completions, plus the two app-level commands.
pub enum Input {
    Core(Msg),
    Help,
    Quit,
}

pub fn run_app() -> anyhow::Result<()> {
    logging::initialize(logging::LogDestination::File);

    let base_url =
        std::env::var("CURATOR_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
    ui_info!("Using backend at {}", base_url);

    let (msg_tx, msg_rx) = mpsc::channel::<Input>();
    let api = HttpContentApi::new(&base_url, ClientSettings::default())
        .context("building the backend client")?;
    let runner = EffectRunner::new(Arc::new(api), msg_tx.clone());

    spawn_stdin_reader(msg_tx);

    println!("curator — backend {base_url}; type 'help' for commands");
    let mut state = AppState::new();
    render(&mut state);

    for input in msg_rx {
        match input {
            Input::Quit => break,
            Input::Help => print_help(),
            Input::Core(msg) => {
                let (next, effects) = update(std::mem::take(&mut state), msg);
                state = next;
                runner.enqueue(effects);
                render(&mut state);
            }
        }
    }

    Ok(())
}

fn render(state: &mut AppState) {
    if !state.consume_dirty() {
        return;
    }
    let view = state.view();
    println!("{}", ui::render::section_summary(&view));
    match preview::write_preview(Path::new("."), &view) {
        Ok(path) => ui_info!("Preview written to {:?}", path),
        Err(err) => ui_warn!("Failed to write preview: {}", err),
    }
}

fn spawn_stdin_reader(tx: mpsc::Sender<Input>) {
    thread::spawn(move || {
        if let Err(err) = reader_loop(&tx) {
            ui_warn!("stdin reader stopped: {}", err);
        }
        let _ = tx.send(Input::Quit);
    });
}

fn reader_loop(tx: &mpsc::Sender<Input>) -> io::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    while let Some(line) = lines.next() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let (command, rest) = split_command(trimmed);

        let inputs: Vec<Input> = match command {
            "quit" | "exit" => {
                let _ = tx.send(Input::Quit);
                break;
            }
            "help" => vec![Input::Help],
            "open" => match parse_section(rest) {
                Some(section) => vec![Input::Core(Msg::SectionSelected(section))],
                None => {
                    eprintln!("usage: open <process|search|tags>");
                    continue;
                }
            },
            "process" => {
                println!("Enter URLs, one per line; finish with a blank line:");
                let mut buffer = String::new();
                for next in lines.by_ref() {
                    let next = next?;
                    if next.trim().is_empty() {
                        break;
                    }
                    buffer.push_str(&next);
                    buffer.push('\n');
                }
                vec![
                    Input::Core(Msg::SectionSelected(Section::Process)),
                    Input::Core(Msg::ProcessInputChanged(buffer)),
                    Input::Core(Msg::ProcessSubmitted),
                ]
            }
            "search" => vec![
                Input::Core(Msg::SectionSelected(Section::Search)),
                Input::Core(Msg::SearchInputChanged(rest.to_string())),
                Input::Core(Msg::SearchSubmitted),
            ],
            "tag" if !rest.is_empty() => vec![Input::Core(Msg::TagToggled(rest.to_string()))],
            "topic" if !rest.is_empty() => vec![Input::Core(Msg::TopicClicked(rest.to_string()))],
            "clear" => vec![Input::Core(Msg::TagsCleared)],
            _ => {
                eprintln!("unknown command: {trimmed} (try 'help')");
                continue;
            }
        };

        for input in inputs {
            if tx.send(input).is_err() {
                return Ok(());
            }
        }
    }

    Ok(())
}

fn split_command(line: &str) -> (&str, &str) {
    match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    }
}

fn parse_section(name: &str) -> Option<Section> {
    match name {
        "process" => Some(Section::Process),
        "search" => Some(Section::Search),
        "tags" => Some(Section::Tags),
        _ => None,
    }
}

fn print_help() {
    println!(
        "commands:\n  \
         open <process|search|tags>  switch section\n  \
         process                     submit URLs (one per line, blank line ends)\n  \
         search <query>              free-text search\n  \
         tag <name>                  toggle a tag filter\n  \
         topic <name>                jump to the tag view with this topic active\n  \
         clear                       clear all tag filters\n  \
         quit                        exit"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_command_separates_first_word() {
        assert_eq!(split_command("search rust async"), ("search", "rust async"));
        assert_eq!(split_command("clear"), ("clear", ""));
        assert_eq!(split_command("tag  economy "), ("tag", "economy"));
    }

    #[test]
    fn parse_section_accepts_known_names_only() {
        assert_eq!(parse_section("process"), Some(Section::Process));
        assert_eq!(parse_section("search"), Some(Section::Search));
        assert_eq!(parse_section("tags"), Some(Section::Tags));
        assert_eq!(parse_section("settings"), None);
    }
}
