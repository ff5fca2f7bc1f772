//! # Tree Mutations
//!
//! Structural operations on a screen's component tree.
//!
//! ## Design Principles
//!
//! 1. **Pure**: every operation reads a borrowed tree and returns a new one
//! 2. **Forgiving**: an id that no longer exists makes the operation a no-op,
//!    never an error (commands can race a delete in the same session)
//! 3. **Identity-preserving**: ids never change, except on duplicated copies,
//!    which receive fresh ids for the whole copied subtree
//!
//! ## Mutation Semantics
//!
//! ### Reorder
//! - Only applies when the dragged and target nodes share a parent
//! - Nodes in different parents are left alone (use reparent for that)
//!
//! ### Reparent
//! - Removes the node, then appends it to the root or to a container
//! - Always appends; exact placement is a follow-up reorder
//! - A missing target (including one inside the moved subtree) leaves the
//!   tree unchanged
//!
//! ### Remove
//! - Removes the node and all descendants

use crate::locator::{container_children_mut, find_by_id_mut, index_of};
use screencraft_schema::{ComponentNode, IDGenerator};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Direction for a single-step move within a sibling list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

/// Drop placement relative to a target sibling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DropPosition {
    Before,
    After,
}

/// Structural operations on a component tree
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Mutation {
    /// Append a node at the root (`container_id: None`) or inside a container
    InsertNode {
        node: ComponentNode,
        container_id: Option<String>,
    },

    /// Remove a node and its subtree
    RemoveNode { node_id: String },

    /// Insert a deep copy with fresh ids right after the node
    DuplicateNode { node_id: String },

    /// Swap with the previous or next sibling
    MoveNode {
        node_id: String,
        direction: Direction,
    },

    /// Reposition relative to a sibling in the same parent
    ReorderNode {
        dragged_id: String,
        target_id: String,
        position: DropPosition,
    },

    /// Move to the end of another container, or of the root
    ReparentNode {
        dragged_id: String,
        container_id: Option<String>,
    },

    /// Replace the node with the same id
    UpdateNode { node: ComponentNode },
}

impl Mutation {
    /// Apply to a tree, producing the new tree
    pub fn apply(&self, nodes: &[ComponentNode], ids: &mut IDGenerator) -> Vec<ComponentNode> {
        match self {
            Mutation::InsertNode { node, container_id } => {
                insert(nodes, node.clone(), container_id.as_deref())
            }
            Mutation::RemoveNode { node_id } => remove(nodes, node_id),
            Mutation::DuplicateNode { node_id } => duplicate(nodes, node_id, ids),
            Mutation::MoveNode { node_id, direction } => {
                move_directional(nodes, node_id, *direction)
            }
            Mutation::ReorderNode {
                dragged_id,
                target_id,
                position,
            } => reorder(nodes, dragged_id, target_id, *position),
            Mutation::ReparentNode {
                dragged_id,
                container_id,
            } => reparent(nodes, dragged_id, container_id.as_deref()),
            Mutation::UpdateNode { node } => update(nodes, node.clone()),
        }
    }

    /// Short label shown next to undo/redo
    pub fn label(&self) -> &'static str {
        match self {
            Mutation::InsertNode { .. } => "Add component",
            Mutation::RemoveNode { .. } => "Delete component",
            Mutation::DuplicateNode { .. } => "Duplicate component",
            Mutation::MoveNode { .. } => "Move component",
            Mutation::ReorderNode { .. } => "Reorder component",
            Mutation::ReparentNode { .. } => "Move into container",
            Mutation::UpdateNode { .. } => "Edit component",
        }
    }
}

/// Append `node` at the root, or to the children of `container_id`
pub fn insert(
    nodes: &[ComponentNode],
    node: ComponentNode,
    container_id: Option<&str>,
) -> Vec<ComponentNode> {
    let mut next = nodes.to_vec();

    match container_id {
        None => next.push(node),
        Some(container_id) => match container_children_mut(&mut next, container_id) {
            Some(children) => children.push(node),
            None => debug!(container_id, "Insert target is not a container; skipping"),
        },
    }

    next
}

pub fn remove(nodes: &[ComponentNode], node_id: &str) -> Vec<ComponentNode> {
    let mut next = nodes.to_vec();
    if take_node(&mut next, node_id).is_none() {
        debug!(node_id, "Remove target not found");
    }
    next
}

pub fn duplicate(
    nodes: &[ComponentNode],
    node_id: &str,
    ids: &mut IDGenerator,
) -> Vec<ComponentNode> {
    let mut next = nodes.to_vec();
    if !duplicate_in(&mut next, node_id, ids) {
        debug!(node_id, "Duplicate target not found");
    }
    next
}

pub fn move_directional(
    nodes: &[ComponentNode],
    node_id: &str,
    direction: Direction,
) -> Vec<ComponentNode> {
    let mut next = nodes.to_vec();
    swap_in(&mut next, node_id, direction);
    next
}

pub fn reorder(
    nodes: &[ComponentNode],
    dragged_id: &str,
    target_id: &str,
    position: DropPosition,
) -> Vec<ComponentNode> {
    let mut next = nodes.to_vec();
    if !reorder_in(&mut next, dragged_id, target_id, position) {
        debug!(dragged_id, target_id, "Reorder ids are not siblings; skipping");
    }
    next
}

pub fn reparent(
    nodes: &[ComponentNode],
    dragged_id: &str,
    container_id: Option<&str>,
) -> Vec<ComponentNode> {
    let mut next = nodes.to_vec();

    let Some(dragged) = take_node(&mut next, dragged_id) else {
        debug!(dragged_id, "Reparent source not found");
        return next;
    };

    match container_id {
        None => next.push(dragged),
        Some(container_id) => match container_children_mut(&mut next, container_id) {
            Some(children) => children.push(dragged),
            None => {
                debug!(dragged_id, container_id, "Reparent target missing; keeping tree");
                return nodes.to_vec();
            }
        },
    }

    next
}

pub fn update(nodes: &[ComponentNode], updated: ComponentNode) -> Vec<ComponentNode> {
    let mut next = nodes.to_vec();
    match find_by_id_mut(&mut next, &updated.id) {
        Some(slot) => *slot = updated,
        None => debug!(node_id = %updated.id, "Update target not found"),
    }
    next
}

/// Deep copy of a node where the node and every descendant get fresh ids
pub fn clone_with_fresh_ids(node: &ComponentNode, ids: &mut IDGenerator) -> ComponentNode {
    let mut copy = node.clone();
    assign_fresh_ids(&mut copy, ids);
    copy
}

fn assign_fresh_ids(node: &mut ComponentNode, ids: &mut IDGenerator) {
    node.id = ids.new_id(node.component_type());
    if let Some(children) = node.children_mut() {
        for child in children.iter_mut() {
            assign_fresh_ids(child, ids);
        }
    }
}

/// Remove a node from whichever list holds it and return it
fn take_node(nodes: &mut Vec<ComponentNode>, node_id: &str) -> Option<ComponentNode> {
    if let Some(pos) = index_of(nodes, node_id) {
        return Some(nodes.remove(pos));
    }

    for node in nodes.iter_mut() {
        if let Some(children) = node.children_mut() {
            if let Some(removed) = take_node(children, node_id) {
                return Some(removed);
            }
        }
    }

    None
}

fn duplicate_in(nodes: &mut Vec<ComponentNode>, node_id: &str, ids: &mut IDGenerator) -> bool {
    if let Some(pos) = index_of(nodes, node_id) {
        let copy = clone_with_fresh_ids(&nodes[pos], ids);
        nodes.insert(pos + 1, copy);
        return true;
    }

    nodes
        .iter_mut()
        .filter_map(|node| node.children_mut())
        .any(|children| duplicate_in(children, node_id, ids))
}

fn swap_in(nodes: &mut Vec<ComponentNode>, node_id: &str, direction: Direction) -> bool {
    if let Some(index) = index_of(nodes, node_id) {
        let neighbour = match direction {
            Direction::Up => index.checked_sub(1),
            Direction::Down => Some(index + 1).filter(|i| *i < nodes.len()),
        };

        if let Some(neighbour) = neighbour {
            nodes.swap(index, neighbour);
        }
        return true;
    }

    nodes
        .iter_mut()
        .filter_map(|node| node.children_mut())
        .any(|children| swap_in(children, node_id, direction))
}

fn reorder_in(
    nodes: &mut Vec<ComponentNode>,
    dragged_id: &str,
    target_id: &str,
    position: DropPosition,
) -> bool {
    if let (Some(from), Some(to)) = (index_of(nodes, dragged_id), index_of(nodes, target_id)) {
        if from == to {
            return true;
        }

        let moved = nodes.remove(from);

        // Removing the dragged node shifts later siblings down by one
        let mut insert_index = to;
        if position == DropPosition::After {
            insert_index += 1;
        }
        if from < to {
            insert_index -= 1;
        }

        nodes.insert(insert_index.min(nodes.len()), moved);
        return true;
    }

    nodes
        .iter_mut()
        .filter_map(|node| node.children_mut())
        .any(|children| reorder_in(children, dragged_id, target_id, position))
}
