//! The simulated shell: command parsing, resolution, and the transcript log.

pub mod history;
pub mod resolver;

/// A parsed command. Dispatch is an exhaustive match over this fixed set of
/// shapes rather than open-ended string branching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Ls,
    Clear,
    Cd(String),
    Cat(String),
    Run(String),
    /// Anything that doesn't fit a known shape; carries the trimmed input.
    Other(String),
}

impl Command {
    /// Parse raw input into a command shape.
    ///
    /// The verb is matched case-insensitively; arguments keep their original
    /// casing (ids are lowercase-normalized by the data source). Empty or
    /// whitespace-only input parses to `None`.
    pub fn parse(raw: &str) -> Option<Command> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }

        let (verb, arg) = match trimmed.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb.to_lowercase(), rest.trim()),
            None => (trimmed.to_lowercase(), ""),
        };

        let command = match (verb.as_str(), arg) {
            ("help", "") => Command::Help,
            ("ls", "") => Command::Ls,
            ("clear", "") => Command::Clear,
            ("cd", arg) if !arg.is_empty() => Command::Cd(arg.to_string()),
            ("cat", arg) if !arg.is_empty() => Command::Cat(arg.to_string()),
            ("run", arg) if !arg.is_empty() => Command::Run(arg.to_string()),
            _ => Command::Other(trimmed.to_string()),
        };
        Some(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_whitespace_input_is_none() {
        assert_eq!(Command::parse(""), None);
        assert_eq!(Command::parse("   "), None);
        assert_eq!(Command::parse("\t \n"), None);
    }

    #[test]
    fn verb_matching_is_case_insensitive() {
        assert_eq!(Command::parse("HELP"), Some(Command::Help));
        assert_eq!(Command::parse("Help"), Some(Command::Help));
        assert_eq!(Command::parse("help"), Some(Command::Help));
        assert_eq!(Command::parse("CD foo"), Some(Command::Cd("foo".to_string())));
    }

    #[test]
    fn arguments_preserve_case() {
        assert_eq!(
            Command::parse("cat README.md"),
            Some(Command::Cat("README.md".to_string()))
        );
    }

    #[test]
    fn bare_cd_is_not_a_cd_command() {
        assert_eq!(Command::parse("cd"), Some(Command::Other("cd".to_string())));
    }

    #[test]
    fn zero_arg_commands_reject_arguments() {
        assert_eq!(
            Command::parse("help me"),
            Some(Command::Other("help me".to_string()))
        );
        assert_eq!(
            Command::parse("clear all"),
            Some(Command::Other("clear all".to_string()))
        );
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        assert_eq!(
            Command::parse("  cd portfolio-site  "),
            Some(Command::Cd("portfolio-site".to_string()))
        );
    }

    #[test]
    fn unknown_input_parses_to_other() {
        assert_eq!(
            Command::parse("frobnicate"),
            Some(Command::Other("frobnicate".to_string()))
        );
    }
}
