//! Read-only lookups over a component tree.
//!
//! Searches are pre-order and only descend into `Container` children.

use screencraft_schema::ComponentNode;

/// Find a node anywhere in the tree
pub fn find_by_id<'a>(nodes: &'a [ComponentNode], id: &str) -> Option<&'a ComponentNode> {
    for node in nodes {
        if node.id == id {
            return Some(node);
        }

        if let Some(children) = node.children() {
            if let Some(found) = find_by_id(children, id) {
                return Some(found);
            }
        }
    }

    None
}

pub fn find_by_id_mut<'a>(
    nodes: &'a mut [ComponentNode],
    id: &str,
) -> Option<&'a mut ComponentNode> {
    for node in nodes.iter_mut() {
        if node.id == id {
            return Some(node);
        }

        if let Some(children) = node.children_mut() {
            if let Some(found) = find_by_id_mut(children, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Children of the container with the given id.
///
/// Returns `None` when no node has the id or when that node is not a container.
pub fn container_children_mut<'a>(
    nodes: &'a mut [ComponentNode],
    id: &str,
) -> Option<&'a mut Vec<ComponentNode>> {
    find_by_id_mut(nodes, id).and_then(|node| node.children_mut())
}

/// Position within this sibling list only (no descent)
pub fn index_of(nodes: &[ComponentNode], id: &str) -> Option<usize> {
    nodes.iter().position(|node| node.id == id)
}

/// Index and sibling count of a node within whichever list holds it
pub fn sibling_position(nodes: &[ComponentNode], id: &str) -> Option<(usize, usize)> {
    if let Some(index) = index_of(nodes, id) {
        return Some((index, nodes.len()));
    }

    nodes
        .iter()
        .filter_map(|node| node.children())
        .find_map(|children| sibling_position(children, id))
}

/// Every id in the tree, pre-order
pub fn collect_ids(nodes: &[ComponentNode]) -> Vec<&str> {
    let mut ids = Vec::new();
    collect_into(nodes, &mut ids);
    ids
}

fn collect_into<'a>(nodes: &'a [ComponentNode], out: &mut Vec<&'a str>) {
    for node in nodes {
        out.push(&node.id);
        if let Some(children) = node.children() {
            collect_into(children, out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use screencraft_schema::{ComponentKind, ComponentType};

    fn node(ty: ComponentType, id: &str) -> ComponentNode {
        ComponentNode::with_defaults(ty, id.to_string(), "home")
    }

    fn container(id: &str, children: Vec<ComponentNode>) -> ComponentNode {
        let mut c = node(ComponentType::Container, id);
        c.kind = ComponentKind::Container { children };
        c
    }

    fn sample() -> Vec<ComponentNode> {
        vec![
            node(ComponentType::Text, "a"),
            container(
                "g",
                vec![
                    node(ComponentType::Image, "b"),
                    container("h", vec![node(ComponentType::Button, "c")]),
                ],
            ),
            node(ComponentType::Spacer, "d"),
        ]
    }

    #[test]
    fn test_find_nested() {
        let tree = sample();
        assert_eq!(find_by_id(&tree, "c").unwrap().component_type(), ComponentType::Button);
        assert_eq!(find_by_id(&tree, "h").unwrap().children().unwrap().len(), 1);
        assert!(find_by_id(&tree, "missing").is_none());
    }

    #[test]
    fn test_index_of_is_root_only() {
        let tree = sample();
        assert_eq!(index_of(&tree, "d"), Some(2));
        assert_eq!(index_of(&tree, "b"), None);
    }

    #[test]
    fn test_sibling_position() {
        let tree = sample();
        assert_eq!(sibling_position(&tree, "g"), Some((1, 3)));
        assert_eq!(sibling_position(&tree, "h"), Some((1, 2)));
        assert_eq!(sibling_position(&tree, "c"), Some((0, 1)));
        assert_eq!(sibling_position(&tree, "zzz"), None);
    }

    #[test]
    fn test_container_children_mut_rejects_leaf() {
        let mut tree = sample();
        assert!(container_children_mut(&mut tree, "a").is_none());
        assert!(container_children_mut(&mut tree, "h").is_some());
    }

    #[test]
    fn test_collect_ids_preorder() {
        let tree = sample();
        assert_eq!(collect_ids(&tree), vec!["a", "g", "b", "h", "c", "d"]);
    }
}
