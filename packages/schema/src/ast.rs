use crate::error::SchemaError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use std::fmt;
use std::str::FromStr;

/// Open style mapping, passed through untouched by the editor
pub type Style = Map<String, Value>;

/// Root application document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    pub app: AppInfo,

    /// Opaque theme reference (theme definitions live with the renderer)
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub theme: Value,

    pub screens: Vec<Screen>,
}

/// Application metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppInfo {
    pub name: String,
    pub package_name: String,
    #[serde(default)]
    pub icon: String,
}

/// A named screen holding a root-level list of components
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Screen {
    pub id: String,
    pub name: String,
    pub components: Vec<ComponentNode>,
}

/// A single node in a screen's component tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentNode {
    pub id: String,

    #[serde(flatten)]
    pub kind: ComponentKind,

    #[serde(default)]
    pub style: Style,
}

/// Variant payloads, tagged by `type` in the document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ComponentKind {
    Text {
        props: TextProps,
    },
    Button {
        props: ButtonProps,
    },
    Image {
        props: ImageProps,
    },
    Spacer {
        props: SpacerProps,
    },
    List {
        props: ListProps,
    },
    Container {
        #[serde(default)]
        children: Vec<ComponentNode>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextProps {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ButtonProps {
    pub label: String,
    pub action: ButtonAction,
}

/// What a button does when pressed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ButtonAction {
    Navigate {
        #[serde(rename = "targetScreenId")]
        target_screen_id: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageProps {
    pub src: String,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpacerProps {
    /// Kept as a JSON number so integer heights export unchanged
    pub height: Number,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListProps {
    pub items: Vec<String>,
}

/// The fixed set of component types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComponentType {
    Text,
    Button,
    Image,
    Spacer,
    List,
    Container,
}

impl ComponentType {
    pub const ALL: [ComponentType; 6] = [
        ComponentType::Text,
        ComponentType::Button,
        ComponentType::Image,
        ComponentType::Spacer,
        ComponentType::List,
        ComponentType::Container,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentType::Text => "Text",
            ComponentType::Button => "Button",
            ComponentType::Image => "Image",
            ComponentType::Spacer => "Spacer",
            ComponentType::List => "List",
            ComponentType::Container => "Container",
        }
    }

    /// Lowercase prefix used when minting ids
    pub fn id_prefix(&self) -> &'static str {
        match self {
            ComponentType::Text => "text",
            ComponentType::Button => "button",
            ComponentType::Image => "image",
            ComponentType::Spacer => "spacer",
            ComponentType::List => "list",
            ComponentType::Container => "container",
        }
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComponentType {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ComponentType::ALL
            .iter()
            .copied()
            .find(|ty| ty.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| SchemaError::UnknownComponentType(s.to_string()))
    }
}

impl ComponentNode {
    /// Build a node of the given type with the builder's default payload.
    ///
    /// Buttons navigate to `current_screen_id` until the user retargets them.
    pub fn with_defaults(ty: ComponentType, id: String, current_screen_id: &str) -> Self {
        let mut style = Style::new();

        let kind = match ty {
            ComponentType::Text => ComponentKind::Text {
                props: TextProps {
                    text: "New Text".to_string(),
                },
            },
            ComponentType::Button => ComponentKind::Button {
                props: ButtonProps {
                    label: "New Button".to_string(),
                    action: ButtonAction::Navigate {
                        target_screen_id: current_screen_id.to_string(),
                    },
                },
            },
            ComponentType::Image => ComponentKind::Image {
                props: ImageProps {
                    src: "https://via.placeholder.com/300x150".to_string(),
                    alt: "Placeholder Image".to_string(),
                },
            },
            ComponentType::Spacer => ComponentKind::Spacer {
                props: SpacerProps {
                    height: Number::from(20),
                },
            },
            ComponentType::List => ComponentKind::List {
                props: ListProps {
                    items: vec![
                        "Item 1".to_string(),
                        "Item 2".to_string(),
                        "Item 3".to_string(),
                    ],
                },
            },
            ComponentType::Container => {
                style.insert("padding".to_string(), Value::from(10));
                style.insert("border".to_string(), Value::from("1px solid #999"));
                ComponentKind::Container {
                    children: Vec::new(),
                }
            }
        };

        Self { id, kind, style }
    }

    pub fn component_type(&self) -> ComponentType {
        match &self.kind {
            ComponentKind::Text { .. } => ComponentType::Text,
            ComponentKind::Button { .. } => ComponentType::Button,
            ComponentKind::Image { .. } => ComponentType::Image,
            ComponentKind::Spacer { .. } => ComponentType::Spacer,
            ComponentKind::List { .. } => ComponentType::List,
            ComponentKind::Container { .. } => ComponentType::Container,
        }
    }

    pub fn is_container(&self) -> bool {
        matches!(self.kind, ComponentKind::Container { .. })
    }

    /// Children of a container; `None` for every other type
    pub fn children(&self) -> Option<&[ComponentNode]> {
        match &self.kind {
            ComponentKind::Container { children } => Some(children),
            _ => None,
        }
    }

    pub fn children_mut(&mut self) -> Option<&mut Vec<ComponentNode>> {
        match &mut self.kind {
            ComponentKind::Container { children } => Some(children),
            _ => None,
        }
    }

    /// Short human-readable summary of the payload (used by outlines)
    pub fn summary(&self) -> String {
        match &self.kind {
            ComponentKind::Text { props } => format!("\"{}\"", props.text),
            ComponentKind::Button { props } => match &props.action {
                ButtonAction::Navigate { target_screen_id } => {
                    format!("\"{}\" -> {}", props.label, target_screen_id)
                }
            },
            ComponentKind::Image { props } => props.src.clone(),
            ComponentKind::Spacer { props } => format!("{}px", props.height),
            ComponentKind::List { props } => format!("{} items", props.items.len()),
            ComponentKind::Container { children } => format!("{} children", children.len()),
        }
    }
}

impl Schema {
    pub fn screen(&self, id: &str) -> Option<&Screen> {
        self.screens.iter().find(|s| s.id == id)
    }

    pub fn screen_mut(&mut self, id: &str) -> Option<&mut Screen> {
        self.screens.iter_mut().find(|s| s.id == id)
    }

    /// Default screen: the first one in document order
    pub fn first_screen_id(&self) -> Option<&str> {
        self.screens.first().map(|s| s.id.as_str())
    }

    /// Every component id in the document, screen by screen, pre-order
    pub fn component_ids(&self) -> Vec<&str> {
        fn walk<'a>(nodes: &'a [ComponentNode], out: &mut Vec<&'a str>) {
            for node in nodes {
                out.push(&node.id);
                if let Some(children) = node.children() {
                    walk(children, out);
                }
            }
        }

        let mut ids = Vec::new();
        for screen in &self.screens {
            walk(&screen.components, &mut ids);
        }
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_type_parsing() {
        assert_eq!("Text".parse::<ComponentType>().unwrap(), ComponentType::Text);
        assert_eq!("container".parse::<ComponentType>().unwrap(), ComponentType::Container);
        assert!("Slider".parse::<ComponentType>().is_err());
    }

    #[test]
    fn test_only_containers_have_children() {
        for ty in ComponentType::ALL {
            let node = ComponentNode::with_defaults(ty, "n".to_string(), "home");
            assert_eq!(node.component_type(), ty);
            assert_eq!(node.children().is_some(), ty == ComponentType::Container);
        }
    }

    #[test]
    fn test_button_defaults_to_current_screen() {
        let node = ComponentNode::with_defaults(ComponentType::Button, "b".to_string(), "settings");
        match node.kind {
            ComponentKind::Button { props } => {
                assert_eq!(props.label, "New Button");
                assert_eq!(
                    props.action,
                    ButtonAction::Navigate {
                        target_screen_id: "settings".to_string()
                    }
                );
            }
            other => panic!("Expected button, got {:?}", other),
        }
    }

    #[test]
    fn test_container_serializes_children_without_props() {
        let node = ComponentNode::with_defaults(ComponentType::Container, "c1".to_string(), "home");
        let json = serde_json::to_value(&node).unwrap();

        assert_eq!(json["type"], "Container");
        assert!(json["children"].is_array());
        assert!(json.get("props").is_none());
        assert_eq!(json["style"]["padding"], 10);
    }

    #[test]
    fn test_spacer_height_stays_integer() {
        let node = ComponentNode::with_defaults(ComponentType::Spacer, "s1".to_string(), "home");
        let json = serde_json::to_string(&node).unwrap();
        assert!(json.contains("\"height\":20"), "got {}", json);
    }

    #[test]
    fn test_text_ignores_stray_children() {
        let json = r#"{"id":"t1","type":"Text","props":{"text":"hi"},"style":{},"children":[]}"#;
        let node: ComponentNode = serde_json::from_str(json).unwrap();
        assert!(node.children().is_none());
    }
}
