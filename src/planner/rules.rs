use super::Actor;
use crate::fields;

/// Which record fields a rule visits, in visiting order.
#[derive(Debug, Clone, Copy)]
pub(super) enum FieldSelector {
    Named(&'static str),
    /// `prefix{first}` through `prefix{last}`, ascending. Indices outside the range are never visited.
    Indexed {
        prefix: &'static str,
        first: usize,
        last: usize,
    },
}

impl FieldSelector {
    pub(super) fn field_names(&self) -> Vec<String> {
        match *self {
            FieldSelector::Named(name) => vec![name.to_string()],
            FieldSelector::Indexed {
                prefix,
                first,
                last,
            } => (first..=last).map(|i| fields::indexed(prefix, i)).collect(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub(super) struct PlanRule {
    pub(super) selector: FieldSelector,
    pub(super) actor: Actor,
}

/// The order in which record fields become steps. The terminal `done` step is
/// appended by the planner after these rules.
///
/// `person-a-word-1` is held back until after the tutor-filled fields so the
/// student types the first word last.
pub(super) const PLAN_RULES: &[PlanRule] = &[
    PlanRule {
        selector: FieldSelector::Named(fields::SITUATION),
        actor: Actor::Tutor,
    },
    PlanRule {
        selector: FieldSelector::Named(fields::RELATIONSHIP_A),
        actor: Actor::Tutor,
    },
    PlanRule {
        selector: FieldSelector::Named(fields::RELATIONSHIP_B),
        actor: Actor::Tutor,
    },
    PlanRule {
        selector: FieldSelector::Indexed {
            prefix: fields::PERSON_A_WORD,
            first: 2,
            last: 15,
        },
        actor: Actor::Tutor,
    },
    PlanRule {
        selector: FieldSelector::Indexed {
            prefix: fields::OPTION_WORD,
            first: 1,
            last: 5,
        },
        actor: Actor::Tutor,
    },
    PlanRule {
        selector: FieldSelector::Named(fields::FORMAL_CHECKBOX),
        actor: Actor::Student,
    },
    PlanRule {
        selector: FieldSelector::Named(fields::PERSON_A_FIRST_WORD),
        actor: Actor::Student,
    },
];
