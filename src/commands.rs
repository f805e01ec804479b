// File: src/commands.rs
//! Operation scripts: one command per line.
//!
//! ```text
//! S word          search
//! A word freq     add
//! D word          delete
//! AC prefix       autocomplete (no prefix = every word)
//! ```
use crate::core::dictionary::Dictionary;
use crate::core::types::{Frequency, WordFrequency};
use crate::corpus::{fields, parse_entry};
use crate::error::CorpusError;
use serde::Serialize;
use std::fmt;
use std::io::BufRead;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search(String),
    Add(WordFrequency),
    Delete(String),
    Autocomplete(String),
}

fn parse_error(line: usize, reason: impl Into<String>) -> CorpusError {
    CorpusError::Parse {
        line,
        reason: reason.into(),
    }
}

/// Parses one script line. `Ok(None)` for blank and comment lines.
pub fn parse_command(line: &str, line_no: usize) -> Result<Option<Command>, CorpusError> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let (op, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((op, rest)) => (op, rest.trim()),
        None => (trimmed, ""),
    };
    let single_word = |what: &str| -> Result<String, CorpusError> {
        let mut parts = fields(rest);
        match (parts.next(), parts.next()) {
            (Some(word), None) => Ok(word.to_string()),
            _ => Err(parse_error(line_no, format!("{what} takes exactly one word"))),
        }
    };

    let command = match op.to_ascii_uppercase().as_str() {
        "S" => Command::Search(single_word("search")?),
        "D" => Command::Delete(single_word("delete")?),
        "AC" if rest.is_empty() => Command::Autocomplete(String::new()),
        "AC" => Command::Autocomplete(single_word("autocomplete")?),
        "A" => match parse_entry(rest, line_no)? {
            Some(entry) => Command::Add(entry),
            None => return Err(parse_error(line_no, "add takes a word and a frequency")),
        },
        other => return Err(parse_error(line_no, format!("unknown command '{other}'"))),
    };
    Ok(Some(command))
}

pub fn read_commands<R: BufRead>(reader: R) -> Result<Vec<Command>, CorpusError> {
    let mut commands = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        if let Some(command) = parse_command(&line?, idx + 1)? {
            commands.push(command);
        }
    }
    Ok(commands)
}

/// Result of running one command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Outcome {
    Search {
        word: String,
        frequency: Frequency,
    },
    Add {
        word: String,
        frequency: Frequency,
        added: bool,
    },
    Delete {
        word: String,
        deleted: bool,
    },
    Autocomplete {
        prefix: String,
        completions: Vec<WordFrequency>,
    },
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Search { word, frequency: 0 } => write!(f, "Not found '{word}'"),
            Outcome::Search { word, frequency } => {
                write!(f, "Found '{word}' with frequency {frequency}")
            }
            Outcome::Add { word, frequency, added: true } => {
                write!(f, "Added '{word}' with frequency {frequency}")
            }
            Outcome::Add { word, added: false, .. } => write!(f, "Already exists '{word}'"),
            Outcome::Delete { word, deleted: true } => write!(f, "Deleted '{word}'"),
            Outcome::Delete { word, deleted: false } => write!(f, "Not found '{word}'"),
            Outcome::Autocomplete { prefix, completions } => {
                write!(f, "Autocomplete for '{prefix}': [")?;
                for (i, entry) in completions.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{entry}")?;
                }
                f.write_str("]")
            }
        }
    }
}

pub fn execute<D: Dictionary + ?Sized>(dict: &mut D, command: Command) -> Outcome {
    match command {
        Command::Search(word) => {
            let frequency = dict.search(&word);
            Outcome::Search { word, frequency }
        }
        Command::Add(entry) => {
            let added = dict.add_word_frequency(entry.clone());
            let (word, frequency) = entry.into_parts();
            Outcome::Add { word, frequency, added }
        }
        Command::Delete(word) => {
            let deleted = dict.delete_word(&word);
            Outcome::Delete { word, deleted }
        }
        Command::Autocomplete(prefix) => {
            let completions = dict.autocomplete(&prefix);
            Outcome::Autocomplete { prefix, completions }
        }
    }
}

pub fn run_script<D: Dictionary + ?Sized>(dict: &mut D, commands: Vec<Command>) -> Vec<Outcome> {
    commands
        .into_iter()
        .map(|command| execute(dict, command))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::array::OrderedArrayDictionary;
    use std::io::Cursor;

    fn wf(word: &str, frequency: Frequency) -> WordFrequency {
        WordFrequency::new(word, frequency).unwrap()
    }

    #[test]
    fn test_parse_commands() {
        let script = "S apt\nA pear 4\n\n# note\nd bat\nAC ap\nAC\n";
        let commands = read_commands(Cursor::new(script)).unwrap();
        assert_eq!(
            commands,
            vec![
                Command::Search("apt".into()),
                Command::Add(wf("pear", 4)),
                Command::Delete("bat".into()),
                Command::Autocomplete("ap".into()),
                Command::Autocomplete(String::new()),
            ]
        );
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(parse_command("S", 1).is_err());
        assert!(parse_command("S a b", 1).is_err());
        assert!(parse_command("A pear", 1).is_err());
        assert!(parse_command("X pear", 1).is_err());
        match parse_command("A pear many", 3) {
            Err(CorpusError::Parse { line, .. }) => assert_eq!(line, 3),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_run_script_outcomes() {
        let mut dict = OrderedArrayDictionary::new();
        dict.build_dictionary(vec![wf("app", 10), wf("apple", 5), wf("apt", 7), wf("bat", 3)])
            .unwrap();
        let commands = read_commands(Cursor::new("S ap\nA app 99\nD bat\nAC ap\n")).unwrap();
        let outcomes = run_script(&mut dict, commands);
        let text: Vec<String> = outcomes.iter().map(ToString::to_string).collect();
        assert_eq!(
            text,
            [
                "Not found 'ap'",
                "Already exists 'app'",
                "Deleted 'bat'",
                "Autocomplete for 'ap': [app (10), apt (7), apple (5)]",
            ]
        );
    }

    #[test]
    fn test_outcome_json() {
        let outcome = Outcome::Delete { word: "bat".into(), deleted: true };
        assert_eq!(
            serde_json::to_string(&outcome).unwrap(),
            r#"{"op":"delete","word":"bat","deleted":true}"#
        );
    }
}
