//! Free-text command parsing: `add t/TITLE [c/CONTENT]... [tag/TAG]...`,
//! `delete INDEX`, `list`, `find KEYWORD...`, `clear`.
//!
//! The tokenizer splits an argument string on known prefixes (`t/`, `c/`,
//! `tag/`); a prefix only counts when it starts the string or follows
//! whitespace, so titles like "a/b testing" survive intact. Values may
//! contain spaces and run until the next prefix.

use crate::error::{CheatbankError, Result};
use crate::model::{Cheatsheet, Content, Tag, Title};
use std::collections::BTreeSet;

pub const PREFIX_TITLE: &str = "t/";
pub const PREFIX_CONTENT: &str = "c/";
pub const PREFIX_TAG: &str = "tag/";

pub const MESSAGE_UNKNOWN_COMMAND: &str = "Unknown command";
pub const MESSAGE_INVALID_FORMAT: &str = "Invalid command format!";

pub const ADD_USAGE: &str =
    "add: Adds a cheatsheet. Parameters: t/TITLE [c/CONTENT]... [tag/TAG]...\n\
     Example: add t/midterm quiz tag/cs2103t";
pub const DELETE_USAGE: &str =
    "delete: Deletes the cheatsheet identified by the index number used in the \
     displayed cheatsheet list.\nParameters: INDEX (must be a positive integer)\n\
     Example: delete 1";
pub const FIND_USAGE: &str =
    "find: Lists cheatsheets whose titles contain any of the given keywords.\n\
     Parameters: KEYWORD [MORE_KEYWORDS]...\nExample: find quiz exam";

/// A parsed, validated user command ready for execution.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Add(Cheatsheet),
    /// 1-based index into the displayed (filtered) list.
    Delete(usize),
    List,
    Find(Vec<String>),
    Clear,
}

/// Parses one line of user input into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command> {
    let trimmed = line.trim();
    let (word, args) = match trimmed.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest),
        None => (trimmed, ""),
    };

    match word {
        "add" => parse_add(args),
        "delete" => parse_delete(args),
        "list" => Ok(Command::List),
        "find" => parse_find(args),
        "clear" => Ok(Command::Clear),
        _ => Err(CheatbankError::Parse(MESSAGE_UNKNOWN_COMMAND.to_string())),
    }
}

fn parse_add(args: &str) -> Result<Command> {
    let map = tokenize(args, &[PREFIX_TITLE, PREFIX_CONTENT, PREFIX_TAG]);

    let titles = map.values(PREFIX_TITLE);
    let title = match (map.preamble.is_empty(), titles.as_slice()) {
        (true, [title]) => Title::new(*title)?,
        _ => return Err(invalid_format(ADD_USAGE)),
    };

    let contents = map
        .values(PREFIX_CONTENT)
        .iter()
        .map(|v| Content::new(*v))
        .collect::<Result<BTreeSet<_>>>()?;
    let tags = map
        .values(PREFIX_TAG)
        .iter()
        .map(|v| Tag::new(*v))
        .collect::<Result<BTreeSet<_>>>()?;

    Ok(Command::Add(Cheatsheet::new(title, contents, tags)))
}

fn parse_delete(args: &str) -> Result<Command> {
    parse_index(args)
        .map(Command::Delete)
        .ok_or_else(|| invalid_format(DELETE_USAGE))
}

fn parse_find(args: &str) -> Result<Command> {
    let keywords: Vec<String> = args.split_whitespace().map(str::to_string).collect();
    if keywords.is_empty() {
        return Err(invalid_format(FIND_USAGE));
    }
    Ok(Command::Find(keywords))
}

/// Parses a 1-based display index: a positive integer, nothing else.
pub fn parse_index(input: &str) -> Option<usize> {
    let trimmed = input.trim();
    // Reject explicit signs; usize::from_str would accept "+1".
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    match trimmed.parse::<usize>() {
        Ok(0) | Err(_) => None,
        Ok(index) => Some(index),
    }
}

fn invalid_format(usage: &str) -> CheatbankError {
    CheatbankError::Parse(format!("{}\n{}", MESSAGE_INVALID_FORMAT, usage))
}

/// The result of splitting an argument string on prefixes: the text before
/// the first prefix, and each prefix's values in order of appearance.
#[derive(Debug, Default)]
struct ArgMultimap<'a> {
    preamble: &'a str,
    entries: Vec<(&'static str, &'a str)>,
}

impl<'a> ArgMultimap<'a> {
    fn values(&self, prefix: &str) -> Vec<&'a str> {
        self.entries
            .iter()
            .filter(|(p, _)| *p == prefix)
            .map(|(_, v)| *v)
            .collect()
    }
}

fn tokenize<'a>(args: &'a str, prefixes: &[&'static str]) -> ArgMultimap<'a> {
    // Every prefix occurrence that starts the string or follows whitespace,
    // in text order.
    let mut positions: Vec<(usize, &'static str)> = Vec::new();
    for prefix in prefixes {
        for (at, _) in args.match_indices(prefix) {
            let at_word_start = at == 0
                || args[..at]
                    .chars()
                    .next_back()
                    .is_some_and(char::is_whitespace);
            if at_word_start {
                positions.push((at, prefix));
            }
        }
    }
    positions.sort_by_key(|(at, _)| *at);
    positions.dedup_by_key(|(at, _)| *at);

    let preamble_end = positions.first().map_or(args.len(), |(at, _)| *at);
    let mut map = ArgMultimap {
        preamble: args[..preamble_end].trim(),
        entries: Vec::new(),
    };

    for (i, (at, prefix)) in positions.iter().enumerate() {
        let value_start = at + prefix.len();
        let value_end = positions
            .get(i + 1)
            .map_or(args.len(), |(next, _)| *next);
        map.entries.push((prefix, args[value_start..value_end].trim()));
    }
    map
}
