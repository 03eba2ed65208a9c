use crate::fields;
use crate::record::FieldRecord;
use std::fmt;

mod rules;

use rules::PLAN_RULES;

/// The interface action a step expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    UpdateTextField,
    ButtonPressed,
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionKind::UpdateTextField => write!(f, "UpdateTextField"),
            ActionKind::ButtonPressed => write!(f, "ButtonPressed"),
        }
    }
}

/// Who performs a step. Tutor steps are replayed automatically and never graded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Actor {
    Tutor,
    Student,
}

impl fmt::Display for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Actor::Tutor => write!(f, "Tutor (unevaluated)"),
            Actor::Student => write!(f, "Student"),
        }
    }
}

/// One expected action in the linear sequence a document encodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub field: String,
    pub value: String,
    pub action: ActionKind,
    pub actor: Actor,
}

impl Step {
    /// The final "done" button press every document ends with.
    pub fn done() -> Self {
        Self {
            field: fields::DONE.to_string(),
            value: fields::DONE_VALUE.to_string(),
            action: ActionKind::ButtonPressed,
            actor: Actor::Student,
        }
    }

    pub fn is_done(&self) -> bool {
        self.field == fields::DONE
    }
}

/// Turns a record into its ordered step sequence.
///
/// Fields are visited in a fixed category order (context inputs, sentence words
/// from the second on, title options, formality checkbox, first sentence word)
/// and a `done` step is always appended. Fields the rules do not name are ignored.
pub fn plan_steps(record: &FieldRecord) -> Vec<Step> {
    let mut steps: Vec<Step> = PLAN_RULES
        .iter()
        .flat_map(|rule| {
            rule.selector
                .field_names()
                .into_iter()
                .filter_map(move |field| {
                    let value = record.get(&field)?.to_string();
                    Some(Step {
                        field,
                        value,
                        action: ActionKind::UpdateTextField,
                        actor: rule.actor,
                    })
                })
        })
        .collect();

    steps.push(Step::done());
    steps
}
