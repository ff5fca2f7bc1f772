//! # Screencraft Schema
//!
//! The application document edited by Screencraft: an app made of screens,
//! each screen a tree of components (text, buttons, images, spacers, lists
//! and nestable containers).
//!
//! Only `Container` nodes carry children. Component ids are unique across
//! the whole document and are minted by [`IDGenerator`].

pub mod ast;
pub mod document;
pub mod error;
pub mod id_generator;

pub use ast::{
    AppInfo, ButtonAction, ButtonProps, ComponentKind, ComponentNode, ComponentType, ImageProps,
    ListProps, Schema, Screen, SpacerProps, Style, TextProps,
};
pub use document::find_duplicate_id;
pub use error::{SchemaError, SchemaResult};
pub use id_generator::{get_schema_seed, IDGenerator};
