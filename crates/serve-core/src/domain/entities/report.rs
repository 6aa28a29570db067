use std::path::PathBuf;

use serde::Serialize;
use uuid::Uuid;

use crate::domain::value_objects::{ActionKind, ScaffoldMode};

/// One reported step, e.g. `create  blog_site/public`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Action {
    pub kind: ActionKind,
    pub subject: String,
}

impl Action {
    pub fn new(kind: ActionKind, subject: impl Into<String>) -> Self {
        Self {
            kind,
            subject: subject.into(),
        }
    }
}

/// Everything a `create` or `convert` run did, in order.
#[derive(Debug, Clone, Serialize)]
pub struct ScaffoldReport {
    pub run_id: Uuid,
    pub mode: ScaffoldMode,
    pub location: PathBuf,
    pub actions: Vec<Action>,
}

impl ScaffoldReport {
    pub fn new(mode: ScaffoldMode, location: impl Into<PathBuf>) -> Self {
        Self {
            run_id: Uuid::new_v4(),
            mode,
            location: location.into(),
            actions: Vec::new(),
        }
    }

    pub fn push(&mut self, action: Action) {
        self.actions.push(action);
    }

    pub fn count(&self, kind: ActionKind) -> usize {
        self.actions.iter().filter(|a| a.kind == kind).count()
    }

    /// Subjects reported with `kind`, in order.
    pub fn subjects(&self, kind: ActionKind) -> impl Iterator<Item = &str> {
        self.actions
            .iter()
            .filter(move |a| a.kind == kind)
            .map(|a| a.subject.as_str())
    }

    /// `true` when the run only found things already in place.
    pub fn is_noop(&self) -> bool {
        self.actions.iter().all(|a| a.kind == ActionKind::Exists)
    }
}
