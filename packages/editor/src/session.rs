//! # Edit Session Management
//!
//! An EditSession owns one open document: the current schema, the active
//! screen, the selection, the undo/redo history and the id generator.
//!
//! Every structural command is scoped to the active screen and follows the
//! same sequence: record a snapshot, run the tree mutation on the screen's
//! components, publish the new schema. The published schema is an
//! `Arc<Schema>` that is never mutated afterwards, so readers can detect a
//! change with `Arc::ptr_eq`.

use crate::commands::Command;
use crate::errors::EditorError;
use crate::locator::find_by_id;
use crate::mutations::{Direction, DropPosition, Mutation};
use crate::render::RenderEvent;
use crate::undo_stack::{UndoStack, DEFAULT_MAX_LEVELS};
use screencraft_schema::{
    find_duplicate_id, ComponentNode, ComponentType, IDGenerator, Schema, SchemaError, Screen,
};
use serde_json::Value;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info};

/// Tunables for a session
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Maximum undo depth (0 = unlimited)
    pub history_limit: usize,

    /// Fixed id seed; derived from the package name when absent
    pub id_seed: Option<String>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            history_limit: DEFAULT_MAX_LEVELS,
            id_seed: None,
        }
    }
}

/// Editing state for one open document
#[derive(Debug)]
pub struct EditSession {
    schema: Arc<Schema>,
    current_screen_id: String,
    selected_component_id: Option<String>,
    history: UndoStack,
    ids: IDGenerator,
}

impl EditSession {
    /// Open a session with default settings
    pub fn new(schema: Schema) -> Result<Self, EditorError> {
        Self::with_config(schema, SessionConfig::default())
    }

    pub fn with_config(schema: Schema, config: SessionConfig) -> Result<Self, EditorError> {
        schema.validate()?;

        let current_screen_id = first_screen(&schema)?;

        let ids = match config.id_seed {
            Some(seed) => {
                let mut ids = IDGenerator::from_seed(seed);
                ids.reserve_all(&schema);
                ids
            }
            None => IDGenerator::for_schema(&schema),
        };

        Ok(Self {
            schema: Arc::new(schema),
            current_screen_id,
            selected_component_id: None,
            history: UndoStack::with_max_levels(config.history_limit),
            ids,
        })
    }

    /// Current schema handle
    pub fn schema(&self) -> &Arc<Schema> {
        &self.schema
    }

    pub fn current_screen_id(&self) -> &str {
        &self.current_screen_id
    }

    pub fn current_screen(&self) -> Option<&Screen> {
        self.schema.screen(&self.current_screen_id)
    }

    pub fn selected_component_id(&self) -> Option<&str> {
        self.selected_component_id.as_deref()
    }

    /// Resolve the selection on the active screen
    pub fn selected_component(&self) -> Option<&ComponentNode> {
        let id = self.selected_component_id.as_deref()?;
        find_by_id(&self.current_screen()?.components, id)
    }

    pub fn history(&self) -> &UndoStack {
        &self.history
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Switch screens; the selection does not carry over
    pub fn select_screen(&mut self, screen_id: &str) {
        if self.schema.screen(screen_id).is_none() {
            debug!(screen_id, "Unknown screen; ignoring");
            return;
        }

        self.current_screen_id = screen_id.to_string();
        self.selected_component_id = None;
    }

    /// Set or clear the selection (not validated)
    pub fn select(&mut self, component_id: Option<String>) {
        self.selected_component_id = component_id;
    }

    /// Add a default component of the given type.
    ///
    /// Goes inside the selected node when it is a container, otherwise at the
    /// end of the screen root. Returns the new id.
    pub fn add_component(&mut self, ty: ComponentType) -> Option<String> {
        self.current_screen()?;

        let container_id = self
            .selected_component()
            .filter(|node| node.is_container())
            .map(|node| node.id.clone());

        let id = self.ids.new_id(ty);
        let node = ComponentNode::with_defaults(ty, id.clone(), &self.current_screen_id);

        self.commit(Mutation::InsertNode { node, container_id });
        Some(id)
    }

    /// Replace a node wholesale (the caller builds the merged node).
    ///
    /// Ignored when the replacement subtree reuses an id held anywhere else
    /// in the document.
    pub fn update_component(&mut self, updated: ComponentNode) {
        let mut reserved = Vec::new();
        collect_owned_ids(&updated, &mut reserved);

        if let Some(clash) = self.id_clash(&updated.id, &reserved) {
            debug!(node_id = %updated.id, clash, "Replacement reuses an id held elsewhere; ignoring");
            return;
        }

        if self.commit(Mutation::UpdateNode { node: updated }) {
            for id in reserved {
                self.ids.reserve(id);
            }
        }
    }

    pub fn delete_component(&mut self, component_id: &str) {
        if self.commit(Mutation::RemoveNode {
            node_id: component_id.to_string(),
        }) {
            self.drop_stale_selection();
        }
    }

    pub fn duplicate_component(&mut self, component_id: &str) {
        self.commit(Mutation::DuplicateNode {
            node_id: component_id.to_string(),
        });
    }

    pub fn move_component(&mut self, component_id: &str, direction: Direction) {
        self.commit(Mutation::MoveNode {
            node_id: component_id.to_string(),
            direction,
        });
    }

    pub fn reorder_component(&mut self, dragged_id: &str, target_id: &str, position: DropPosition) {
        self.commit(Mutation::ReorderNode {
            dragged_id: dragged_id.to_string(),
            target_id: target_id.to_string(),
            position,
        });
    }

    /// Move a node to the end of a container, or of the screen root for `None`
    pub fn move_into_container(&mut self, dragged_id: &str, container_id: Option<&str>) {
        self.commit(Mutation::ReparentNode {
            dragged_id: dragged_id.to_string(),
            container_id: container_id.map(str::to_string),
        });
    }

    /// Swap the theme reference
    pub fn set_theme(&mut self, theme: Value) {
        self.history.record(&self.schema, Some("Change theme"));

        let mut next = (*self.schema).clone();
        next.theme = theme;
        self.publish(next);
    }

    pub fn undo(&mut self) -> bool {
        match self.history.undo(&self.schema) {
            Some(previous) => {
                self.schema = previous;
                self.reconcile_view();
                true
            }
            None => false,
        }
    }

    pub fn redo(&mut self) -> bool {
        match self.history.redo(&self.schema) {
            Some(next) => {
                self.schema = next;
                self.reconcile_view();
                true
            }
            None => false,
        }
    }

    /// Replace the document with an imported one.
    ///
    /// The import is all-or-nothing: on error the session is unchanged.
    pub fn import_document(&mut self, source: &str) -> Result<(), EditorError> {
        let schema = Schema::from_json(source)?;
        info!(app = %schema.app.name, screens = schema.screens.len(), "Imported document");
        self.install(schema);
        Ok(())
    }

    pub fn export_document(&self) -> Result<String, EditorError> {
        Ok(self.schema.to_json_pretty()?)
    }

    /// Start over from the starter template
    pub fn reset(&mut self) {
        info!("Resetting document to template");
        self.install(Schema::template());
    }

    /// Run a command
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::SelectScreen { screen_id } => self.select_screen(&screen_id),
            Command::Select { component_id } => self.select(component_id),
            Command::AddComponent { component_type } => {
                self.add_component(component_type);
            }
            Command::UpdateComponent { component } => self.update_component(component),
            Command::DeleteComponent { component_id } => self.delete_component(&component_id),
            Command::DuplicateComponent { component_id } => {
                self.duplicate_component(&component_id)
            }
            Command::MoveComponent {
                component_id,
                direction,
            } => self.move_component(&component_id, direction),
            Command::ReorderComponent {
                dragged_id,
                target_id,
                position,
            } => self.reorder_component(&dragged_id, &target_id, position),
            Command::MoveIntoContainer {
                dragged_id,
                container_id,
            } => self.move_into_container(&dragged_id, container_id.as_deref()),
            Command::SetTheme { theme } => self.set_theme(theme),
            Command::Undo => {
                self.undo();
            }
            Command::Redo => {
                self.redo();
            }
        }
    }

    /// React to interaction reported by a renderer
    pub fn handle_event(&mut self, event: RenderEvent) {
        match event {
            RenderEvent::Select(id) => self.select(Some(id)),
            RenderEvent::ClearSelection => self.select(None),
            RenderEvent::Navigate(screen_id) => self.select_screen(&screen_id),
        }
    }

    /// Snapshot, mutate the active screen, publish. Returns false when there
    /// is no active screen.
    fn commit(&mut self, mutation: Mutation) -> bool {
        let Some(screen) = self.schema.screen(&self.current_screen_id) else {
            debug!(screen_id = %self.current_screen_id, "No active screen; ignoring command");
            return false;
        };

        let components = mutation.apply(&screen.components, &mut self.ids);

        self.history.record(&self.schema, Some(mutation.label()));

        let mut next = (*self.schema).clone();
        if let Some(screen) = next.screen_mut(&self.current_screen_id) {
            screen.components = components;
        }

        debug!(mutation = mutation.label(), screen_id = %self.current_screen_id, "Applied mutation");
        self.publish(next);
        true
    }

    /// First incoming id that is duplicated within the replacement or held
    /// outside the subtree it replaces
    fn id_clash<'a>(&self, node_id: &str, incoming: &'a [String]) -> Option<&'a str> {
        let mut replaced = Vec::new();
        if let Some(existing) = self
            .current_screen()
            .and_then(|screen| find_by_id(&screen.components, node_id))
        {
            collect_owned_ids(existing, &mut replaced);
        }

        let held: HashSet<&str> = self
            .schema
            .component_ids()
            .into_iter()
            .filter(|id| !replaced.iter().any(|r| r.as_str() == *id))
            .collect();

        let mut seen = HashSet::new();
        incoming
            .iter()
            .map(String::as_str)
            .find(|id| held.contains(id) || !seen.insert(*id))
    }

    fn publish(&mut self, next: Schema) {
        debug_assert!(
            find_duplicate_id(&next).is_none(),
            "duplicate component id after edit: {:?}",
            find_duplicate_id(&next)
        );
        self.schema = Arc::new(next);
    }

    /// Swap in a whole new (validated) document, resetting view state and history
    fn install(&mut self, schema: Schema) {
        self.current_screen_id = schema
            .first_screen_id()
            .map(str::to_string)
            .unwrap_or_default();

        self.ids.reserve_all(&schema);
        self.schema = Arc::new(schema);
        self.selected_component_id = None;
        self.history.clear();
    }

    /// After the schema changed underneath us, make screen and selection valid again
    fn reconcile_view(&mut self) {
        if self.schema.screen(&self.current_screen_id).is_none() {
            if let Some(first) = self.schema.first_screen_id() {
                self.current_screen_id = first.to_string();
            }
        }
        self.drop_stale_selection();
    }

    fn drop_stale_selection(&mut self) {
        if self.selected_component_id.is_some() && self.selected_component().is_none() {
            self.selected_component_id = None;
        }
    }
}

fn first_screen(schema: &Schema) -> Result<String, EditorError> {
    schema
        .first_screen_id()
        .map(str::to_string)
        .ok_or_else(|| SchemaError::invalid_document("document has no screens").into())
}

fn collect_owned_ids(node: &ComponentNode, out: &mut Vec<String>) {
    out.push(node.id.clone());
    if let Some(children) = node.children() {
        for child in children {
            collect_owned_ids(child, out);
        }
    }
}
