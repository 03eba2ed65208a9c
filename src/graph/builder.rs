use super::{ActionLabel, BrdGraph, GraphEdge, GraphNode, Matcher, MatcherSet, Position};
use crate::planner::Step;
use uuid::Uuid;

const START_NODE_LABEL: &str = "empty";

/// Step nodes zig-zag between these two columns, starting with the second.
const X_POSITIONS: [i32; 2] = [217, -83];
const Y_START: i32 = 25;
const Y_INCREMENT: i32 = 160;

/// Builds the node chain and edge chain for one document.
///
/// Node ids and action-label ids come from two independent counters that both
/// start at 1. A builder is consumed by `build`, so every document gets its own.
pub struct GraphBuilder {
    next_node_id: u32,
    next_label_id: u32,
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self {
            next_node_id: 1,
            next_label_id: 1,
        }
    }

    pub fn build(mut self, steps: &[Step]) -> BrdGraph {
        let mut nodes = Vec::with_capacity(steps.len() + 1);
        nodes.push(self.create_node(
            START_NODE_LABEL.to_string(),
            Position {
                x: X_POSITIONS[0],
                y: Y_START,
            },
        ));

        for i in 1..=steps.len() {
            let position = Position {
                x: X_POSITIONS[i % 2],
                y: Y_START + Y_INCREMENT * i as i32,
            };
            nodes.push(self.create_node(format!("state{}", i + 1), position));
        }

        let edges = steps
            .iter()
            .zip(nodes.windows(2))
            .map(|(step, pair)| GraphEdge {
                source_id: pair[0].id,
                dest_id: pair[1].id,
                label: self.create_action_label(step),
            })
            .collect();

        BrdGraph { nodes, edges }
    }

    fn create_node(&mut self, label: String, position: Position) -> GraphNode {
        let id = self.next_node_id;
        self.next_node_id += 1;
        GraphNode {
            id,
            label,
            position,
        }
    }

    fn create_action_label(&mut self, step: &Step) -> ActionLabel {
        let unique_id = self.next_label_id;
        self.next_label_id += 1;

        let action = step.action.to_string();
        ActionLabel {
            unique_id,
            selection: step.field.clone(),
            action: action.clone(),
            input: step.value.clone(),
            hint_message: hint_message(step),
            actor: step.actor.to_string(),
            matchers: MatcherSet {
                selection: Matcher::exact(&step.field),
                action: Matcher::exact(action),
                input: Matcher::exact(&step.value),
            },
            transaction_id: Uuid::new_v4(),
        }
    }
}

fn hint_message(step: &Step) -> String {
    if step.is_done() {
        "Please click the highlighted button.".to_string()
    } else {
        format!("Please enter \"{}\" in the highlighted field.", step.value)
    }
}
