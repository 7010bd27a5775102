//! Argument parsing for the CLI.

use heron_fol::config::{Config, EmptyDomainPolicy};

/// The subcommands of the CLI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// `check P₁ … Pₙ C` --- do the premises entail the conclusion?
    Check,

    /// `impl S₁ S₂` --- does the first sentence entail the second?
    Implication,

    /// `equiv S₁ S₂` --- do the sentences entail each other?
    Equivalence,

    /// `neg S₁ S₂` --- is each sentence materially the negation of the other?
    Negation,
}

/// Options of the CLI itself, beside the library configuration.
#[derive(Clone, Copy, Debug, Default)]
pub struct CliConfig {
    /// Print the decoded countermodel of a failed check.
    pub show_model: bool,
}

/// Errors while reading the command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CliError {
    /// No subcommand was given.
    NoCommand,

    /// An unrecognised subcommand.
    UnknownCommand(String),

    /// An unrecognised option.
    UnknownOption(String),

    /// Too few sentences for the subcommand.
    MissingSentences(&'static str),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoCommand => write!(f, "no subcommand; expected check, impl, equiv, or neg"),
            Self::UnknownCommand(cmd) => write!(f, "unknown subcommand: {cmd}"),
            Self::UnknownOption(opt) => write!(f, "unknown option: {opt}"),
            Self::MissingSentences(detail) => write!(f, "{detail}"),
        }
    }
}

/// Reads `args` (without the program name) into a subcommand, its sentences,
/// and any configuration revisions.
pub fn parse_args(
    args: &[String],
    config: &mut Config,
    cli: &mut CliConfig,
) -> Result<(Command, Vec<String>), CliError> {
    let mut command = None;
    let mut sentences = Vec::default();

    for arg in args {
        match arg.as_str() {
            "--no-closure" => config.class_closure = false,

            "--strict-domains" => config.empty_domain = EmptyDomainPolicy::Error,

            "--model" => cli.show_model = true,

            option if option.starts_with("--") => {
                return Err(CliError::UnknownOption(option.to_string()))
            }

            "check" if command.is_none() => command = Some(Command::Check),
            "impl" if command.is_none() => command = Some(Command::Implication),
            "equiv" if command.is_none() => command = Some(Command::Equivalence),
            "neg" if command.is_none() => command = Some(Command::Negation),

            sentence => match command {
                Some(_) => sentences.push(sentence.to_string()),
                None => return Err(CliError::UnknownCommand(sentence.to_string())),
            },
        }
    }

    let command = command.ok_or(CliError::NoCommand)?;

    let enough = match command {
        Command::Check => sentences.len() >= 2,
        _ => sentences.len() == 2,
    };
    match enough {
        true => Ok((command, sentences)),
        false => Err(CliError::MissingSentences(match command {
            Command::Check => "check takes one or more premises then a conclusion",
            Command::Implication => "impl takes exactly two sentences",
            Command::Equivalence => "equiv takes exactly two sentences",
            Command::Negation => "neg takes exactly two sentences",
        })),
    }
}
