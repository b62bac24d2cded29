use phishguard_core::{AppViewModel, Msg};

/// What one line of terminal input asks for.
#[derive(Debug, Clone, PartialEq)]
pub enum UiCommand {
    /// Messages for the core, applied in order.
    Dispatch(Vec<Msg>),
    ShowHistory,
    ShowHelp,
    Unknown(String),
    Quit,
}

pub const HELP_TEXT: &str = "\
Type a URL and press Enter to scan it.
  :test <url>      fill in <url> and scan it
  :clear           clear the URL field and hide the result
  :again           dismiss the result and start over
  :history         show recent scans
  :clear-history   delete all recent scans (asks first)
  :help            show this help
  :quit            exit";

/// Maps a terminal line to a command.
///
/// While the clear-history prompt is open every line is an answer to it.
pub fn parse_line(line: &str, view: &AppViewModel) -> UiCommand {
    if view.confirm_clear_prompt.is_some() {
        return UiCommand::Dispatch(vec![Msg::ClearHistoryConfirmed(is_yes(line))]);
    }

    let trimmed = line.trim();
    let Some(command) = trimmed.strip_prefix(':') else {
        // Typing into the field then pressing Enter.
        return UiCommand::Dispatch(vec![Msg::InputChanged(line.to_string()), Msg::ScanClicked]);
    };

    let (name, rest) = match command.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (command, ""),
    };
    match name {
        "test" => UiCommand::Dispatch(vec![Msg::TestUrl(rest.to_string())]),
        "clear" => UiCommand::Dispatch(vec![Msg::ClearInputClicked]),
        "again" => UiCommand::Dispatch(vec![Msg::ScanAnotherClicked]),
        "clear-history" => UiCommand::Dispatch(vec![Msg::ClearHistoryClicked]),
        "history" => UiCommand::ShowHistory,
        "help" | "h" | "?" => UiCommand::ShowHelp,
        "quit" | "q" | "exit" => UiCommand::Quit,
        other => UiCommand::Unknown(other.to_string()),
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
