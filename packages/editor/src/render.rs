//! Renderer interface.
//!
//! Rendering proper (canvas, live preview, published output) lives outside
//! the editor. A renderer turns one component node plus the theme into some
//! output, and reports user interaction back as [`RenderEvent`]s, which the
//! session handles with `EditSession::handle_event`.

use screencraft_schema::{ComponentNode, Screen};
use serde_json::Value;

/// Interaction reported by a renderer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderEvent {
    /// A component was clicked
    Select(String),
    /// The empty canvas was clicked
    ClearSelection,
    /// A navigate button was pressed
    Navigate(String),
}

pub trait Renderer {
    type Output;

    fn render(&mut self, node: &ComponentNode, theme: &Value) -> Self::Output;
}

/// Render every root component of a screen in order
pub fn render_screen<R: Renderer>(renderer: &mut R, screen: &Screen, theme: &Value) -> Vec<R::Output> {
    screen
        .components
        .iter()
        .map(|node| renderer.render(node, theme))
        .collect()
}

/// Text outline of a component tree, as shown in the layers panel
#[derive(Debug, Default)]
pub struct OutlineRenderer {
    selected: Option<String>,
    depth: usize,
}

impl OutlineRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the selected node with `*`
    pub fn with_selection(mut self, selected: Option<&str>) -> Self {
        self.selected = selected.map(str::to_string);
        self
    }

    fn write_node(&mut self, node: &ComponentNode, out: &mut String) {
        let marker = if self.selected.as_deref() == Some(node.id.as_str()) {
            "*"
        } else {
            " "
        };

        out.push_str(&format!(
            "{}{}{} [{}] {}\n",
            marker,
            "  ".repeat(self.depth),
            node.component_type(),
            node.id,
            node.summary()
        ));

        if let Some(children) = node.children() {
            self.depth += 1;
            for child in children {
                self.write_node(child, out);
            }
            self.depth -= 1;
        }
    }
}

impl Renderer for OutlineRenderer {
    type Output = String;

    fn render(&mut self, node: &ComponentNode, _theme: &Value) -> String {
        let mut out = String::new();
        self.write_node(node, &mut out);
        out
    }
}
