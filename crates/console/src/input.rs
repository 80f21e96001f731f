//! Console line parsing.

/// One line typed at the console prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleInput {
    /// `/ask`: resubmit the current question field.
    Ask,
    /// Plain text: set the field and submit it.
    Question(String),
    /// `/t <key|n>`: run a quick action.
    Template(String),
    /// `/templates`
    Templates,
    /// `/reset` or `/new`
    Reset,
    Help,
    Quit,
    Unknown(String),
}

impl ConsoleInput {
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        // `//text` asks "/text"
        if let Some(escaped) = trimmed.strip_prefix("//") {
            return Self::Question(format!("/{}", escaped));
        }
        let Some(command) = trimmed.strip_prefix('/') else {
            return Self::Question(line.trim_end_matches(['\r', '\n']).to_string());
        };

        let (name, arg) = match command.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (command, ""),
        };

        match name.to_ascii_lowercase().as_str() {
            "ask" => Self::Ask,
            "t" | "template" => Self::Template(arg.to_string()),
            "templates" | "topics" => Self::Templates,
            "reset" | "new" => Self::Reset,
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            _ => Self::Unknown(format!("/{}", name)),
        }
    }
}

pub const HELP: &str = "\
Type a question and press Enter to ask it. To ask a question that
begins with /, start the line with // instead.

Commands:
  /ask           Ask the current question again
  /t <key|n>     Run a quick action (see /templates)
  /templates     List quick actions
  /reset         Start a new question
  /help          Show this help
  /quit          Leave the console
";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_lines_are_questions() {
        assert_eq!(
            ConsoleInput::parse("What is probation?\n"),
            ConsoleInput::Question("What is probation?".to_string())
        );
        assert_eq!(ConsoleInput::parse(""), ConsoleInput::Question(String::new()));
        assert_eq!(
            ConsoleInput::parse("   "),
            ConsoleInput::Question("   ".to_string())
        );
    }

    #[test]
    fn test_double_slash_asks_literal_slash_question() {
        assert_eq!(
            ConsoleInput::parse("//etc policy?\n"),
            ConsoleInput::Question("/etc policy?".to_string())
        );
        assert_eq!(
            ConsoleInput::parse("/etc policy?"),
            ConsoleInput::Unknown("/etc".to_string())
        );
        assert!(HELP.contains("//"));
    }

    #[test]
    fn test_commands() {
        assert_eq!(ConsoleInput::parse("/ask"), ConsoleInput::Ask);
        assert_eq!(
            ConsoleInput::parse("/t  integrity "),
            ConsoleInput::Template("integrity".to_string())
        );
        assert_eq!(ConsoleInput::parse("/t"), ConsoleInput::Template(String::new()));
        assert_eq!(ConsoleInput::parse("/Templates"), ConsoleInput::Templates);
        assert_eq!(ConsoleInput::parse("/new"), ConsoleInput::Reset);
        assert_eq!(ConsoleInput::parse("  /quit"), ConsoleInput::Quit);
        assert_eq!(
            ConsoleInput::parse("/frobnicate now"),
            ConsoleInput::Unknown("/frobnicate".to_string())
        );
    }
}
