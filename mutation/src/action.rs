//! Mass-change actions and vocabularies.

use crate::error::MutationError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// How a submitted value combines with a record's current value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MassAction {
    /// Set the value only where it is currently empty.
    Define,
    /// Overwrite the value.
    Replace,
    /// Insert the submitted text before the current text.
    Prepend,
    /// Insert the submitted text after the current text.
    Append,
    /// Link the submitted records, keeping existing members.
    Add,
}

impl MassAction {
    /// Submitted form code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Define => "define",
            Self::Replace => "replace",
            Self::Prepend => "prepend",
            Self::Append => "append",
            Self::Add => "add",
        }
    }

    /// Human-readable label for the action selector.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Define => "Define (if empty)",
            Self::Replace => "Replace",
            Self::Prepend => "Add before",
            Self::Append => "Add after",
            Self::Add => "Add",
        }
    }
}

impl fmt::Display for MassAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for MassAction {
    type Err = MutationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "define" => Ok(Self::Define),
            "replace" => Ok(Self::Replace),
            "prepend" => Ok(Self::Prepend),
            "append" => Ok(Self::Append),
            "add" => Ok(Self::Add),
            other => Err(MutationError::unknown_action(other)),
        }
    }
}

const TEXT_ACTIONS: &[MassAction] = &[
    MassAction::Define,
    MassAction::Replace,
    MassAction::Prepend,
    MassAction::Append,
];

const MULTI_ACTIONS: &[MassAction] = &[MassAction::Define, MassAction::Replace, MassAction::Add];

/// An ordered set of actions offered for one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionVocabulary {
    /// Define, Replace, Prepend, Append.
    Text,
    /// Define, Replace, Add.
    Multi,
}

impl ActionVocabulary {
    /// The actions, in display order.
    pub fn actions(&self) -> &'static [MassAction] {
        match self {
            Self::Text => TEXT_ACTIONS,
            Self::Multi => MULTI_ACTIONS,
        }
    }

    /// Returns true if the action belongs to this vocabulary.
    pub fn contains(&self, action: MassAction) -> bool {
        self.actions().contains(&action)
    }

    /// The action used when the toggle is checked but none was picked.
    pub fn default_action(&self) -> MassAction {
        self.actions()[0]
    }

    /// `(code, label)` pairs for rendering a selector.
    pub fn choices(&self) -> Vec<(&'static str, &'static str)> {
        self.actions().iter().map(|a| (a.code(), a.label())).collect()
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Multi => "multi",
        }
    }
}

impl fmt::Display for ActionVocabulary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let codes: Vec<_> = self.actions().iter().map(|a| a.code()).collect();
        write!(f, "{}", codes.join("|"))
    }
}
