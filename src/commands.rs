//! The `progressive.*` commands the server executes.

use crate::config::OptionOverrides;
use crate::prelude::*;

use lsp_types::{Range, TextDocumentIdentifier};
use progressive_core::{Direction, Step, StepError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    IncrementBy1,
    IncrementBy10,
    IncrementByInput,
    DecrementBy1,
    DecrementBy10,
    DecrementByInput,
}

impl Command {
    pub const ALL: [Command; 6] = [
        Command::IncrementBy1,
        Command::IncrementBy10,
        Command::IncrementByInput,
        Command::DecrementBy1,
        Command::DecrementBy10,
        Command::DecrementByInput,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Command::IncrementBy1 => "progressive.incrementBy1",
            Command::IncrementBy10 => "progressive.incrementBy10",
            Command::IncrementByInput => "progressive.incrementByInput",
            Command::DecrementBy1 => "progressive.decrementBy1",
            Command::DecrementBy10 => "progressive.decrementBy10",
            Command::DecrementByInput => "progressive.decrementByInput",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|command| command.name() == name)
    }

    pub fn direction(self) -> Direction {
        match self {
            Command::IncrementBy1 | Command::IncrementBy10 | Command::IncrementByInput => {
                Direction::Increment
            }
            Command::DecrementBy1 | Command::DecrementBy10 | Command::DecrementByInput => {
                Direction::Decrement
            }
        }
    }

    /// Step to renumber with. Only the `ByInput` commands read `input`, and
    /// for them a missing value is an error like any other bad input.
    pub fn step(self, input: Option<&StepValue>) -> core::result::Result<Step, StepError> {
        match self {
            Command::IncrementBy1 => Ok(Step::increment(1.0)),
            Command::IncrementBy10 => Ok(Step::increment(10.0)),
            Command::DecrementBy1 => Ok(Step::decrement(1.0)),
            Command::DecrementBy10 => Ok(Step::decrement(10.0)),
            Command::IncrementByInput | Command::DecrementByInput => {
                let input = input.map(StepValue::to_input).unwrap_or_default();
                Step::parse(&input, self.direction())
            }
        }
    }

    pub fn names() -> Vec<String> {
        Self::ALL.iter().map(|c| c.name().to_string()).collect()
    }
}

/// A step value as sent by the client: either a JSON number or free text.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(untagged)]
pub enum StepValue {
    Number(f64),
    Text(String),
}

impl StepValue {
    fn to_input(&self) -> String {
        match self {
            StepValue::Number(n) => n.to_string(),
            StepValue::Text(s) => s.clone(),
        }
    }
}

/// First element of `workspace/executeCommand` arguments.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandArguments {
    pub text_document: TextDocumentIdentifier,
    #[serde(default)]
    pub selections: Vec<Range>,
    #[serde(flatten)]
    pub overrides: OptionOverrides,
    #[serde(default)]
    pub value: Option<StepValue>,
}

impl CommandArguments {
    pub fn from_arguments(arguments: &[serde_json::Value]) -> Result<Self> {
        let first = arguments
            .first()
            .ok_or_else(|| Error::InvalidArguments("missing command arguments".to_string()))?;
        serde_json::from_value(first.clone()).map_err(|e| Error::InvalidArguments(e.to_string()))
    }
}
