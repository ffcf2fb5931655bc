//! A small script language for driving a knowledge base.
//!
//! A script is a sequence of commands terminated by `;`. Everything after a
//! `#` up to the end of the line is a comment.
//!
//! ```text
//! # wumpus world, two by two
//! tell B0_0 <=> (P0_1 | P1_0);
//! tell ~B0_0;
//! ask ~P0_1;
//! retract ~B0_0;
//! clauses;
//! clear;
//! ```

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use tracing::{info, warn};

use crate::error::{ReasonerError, Result};
use crate::interface::SharedKnowledgeBase;

lazy_static! {
    static ref COMMAND: Regex = Regex::new(r"(?s)^([A-Za-z]+)\b\s*(.*)$").unwrap();
}

/// What a single command did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "command", rename_all = "lowercase")]
pub enum Outcome {
    Tell { sentence: String, clauses: usize },
    Ask { sentence: String, entailed: bool },
    Retract { sentence: String, clauses: usize },
    Clauses { clauses: Vec<String> },
    Clear,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct ScriptResult {
    pub outcomes: Vec<Outcome>,
}

impl ScriptResult {
    /// The answers of every `ask` in the script, in order.
    pub fn answers(&self) -> Vec<bool> {
        self.outcomes
            .iter()
            .filter_map(|outcome| match outcome {
                Outcome::Ask { entailed, .. } => Some(*entailed),
                _ => None,
            })
            .collect()
    }
}

pub struct Engine<'kb> {
    kb: &'kb SharedKnowledgeBase,
}

impl<'kb> Engine<'kb> {
    pub fn new(kb: &'kb SharedKnowledgeBase) -> Self {
        Self { kb }
    }

    /// Runs every command, logging and skipping the ones that fail.
    pub fn execute(&self, script: &str) -> ScriptResult {
        let mut result = ScriptResult::default();
        for command in commands(script) {
            match self.run(&command) {
                Ok(outcome) => result.outcomes.push(outcome),
                Err(e) => warn!(%command, error = %e, "command failed"),
            }
        }
        result
    }

    /// Runs the commands in order and stops at the first failure.
    pub fn execute_collect(&self, script: &str) -> Result<ScriptResult> {
        let mut result = ScriptResult::default();
        for command in commands(script) {
            result.outcomes.push(self.run(&command)?);
        }
        Ok(result)
    }

    fn run(&self, command: &str) -> Result<Outcome> {
        let (keyword, argument) = match COMMAND.captures(command) {
            Some(captures) => (
                captures.get(1).map_or("", |m| m.as_str()),
                captures.get(2).map_or("", |m| m.as_str().trim()),
            ),
            None => {
                return Err(ReasonerError::Script {
                    command: command.to_string(),
                    message: "expected a command keyword".into(),
                });
            }
        };
        let outcome = match keyword {
            "tell" => {
                let added = self.kb.with(|kb| {
                    let before = kb.len();
                    kb.tell(argument)?;
                    Ok(kb.len() - before)
                })?;
                Outcome::Tell { sentence: argument.to_string(), clauses: added }
            }
            "ask" => Outcome::Ask { sentence: argument.to_string(), entailed: self.kb.ask(argument)? },
            "retract" => {
                let removed = self.kb.with(|kb| {
                    let before = kb.len();
                    kb.retract(argument)?;
                    Ok(before - kb.len())
                })?;
                Outcome::Retract { sentence: argument.to_string(), clauses: removed }
            }
            "clauses" if argument.is_empty() => Outcome::Clauses {
                clauses: self.kb.clauses()?.iter().map(ToString::to_string).collect(),
            },
            "clear" if argument.is_empty() => {
                self.kb.clear()?;
                Outcome::Clear
            }
            _ => {
                return Err(ReasonerError::Script {
                    command: command.to_string(),
                    message: format!("unknown command {keyword:?}"),
                });
            }
        };
        info!(?outcome, "executed");
        Ok(outcome)
    }
}

/// Splits a script into trimmed, non-empty commands with comments removed.
/// A command may span several lines.
fn commands(script: &str) -> Vec<String> {
    let stripped = script
        .lines()
        .map(|line| line.split('#').next().unwrap_or(""))
        .collect::<Vec<_>>()
        .join("\n");
    stripped
        .split(';')
        .map(str::trim)
        .filter(|command| !command.is_empty())
        .map(str::to_string)
        .collect()
}
