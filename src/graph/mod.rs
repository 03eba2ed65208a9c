use crate::planner::Step;
use std::fmt;
use uuid::Uuid;

mod builder;

pub use builder::GraphBuilder;

/// Layout coordinates of a node in the authoring tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

/// A state of the tutor. The first node of every graph is the empty start state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphNode {
    pub id: u32,
    pub label: String,
    pub position: Position,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatcherKind {
    Exact,
}

impl fmt::Display for MatcherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatcherKind::Exact => write!(f, "ExactMatcher"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matcher {
    pub kind: MatcherKind,
    pub value: String,
}

impl Matcher {
    pub fn exact(value: impl Into<String>) -> Self {
        Self {
            kind: MatcherKind::Exact,
            value: value.into(),
        }
    }
}

/// How a student action is compared against the expected selection, action and input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatcherSet {
    pub selection: Matcher,
    pub action: Matcher,
    pub input: Matcher,
}

/// Everything the tutor knows about one expected action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionLabel {
    pub unique_id: u32,
    pub selection: String,
    pub action: String,
    pub input: String,
    pub hint_message: String,
    pub actor: String,
    pub matchers: MatcherSet,
    pub transaction_id: Uuid,
}

/// A transition from one state to the next, carrying the expected action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphEdge {
    pub source_id: u32,
    pub dest_id: u32,
    pub label: ActionLabel,
}

/// The linear state graph of one problem: `steps + 1` nodes and `steps` edges.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrdGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl BrdGraph {
    /// Builds a fresh graph. Ids always start at 1, however many graphs were built before.
    pub fn from_steps(steps: &[Step]) -> Self {
        GraphBuilder::new().build(steps)
    }
}
