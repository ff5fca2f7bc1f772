use crate::ast::{ComponentType, Schema};
use crc32fast::Hasher;
use std::collections::HashSet;

/// Derive a stable id seed from an application package name using CRC32
pub fn get_schema_seed(package_name: &str) -> String {
    let mut hasher = Hasher::new();
    hasher.update(package_name.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Sequential id generator for component nodes.
///
/// Ids look like `text_1a2b3c4d-7`. Every id the generator has seen, either
/// minted or reserved from an existing document, is never handed out again.
#[derive(Debug, Clone)]
pub struct IDGenerator {
    seed: String,
    count: u32,
    taken: HashSet<String>,
}

impl IDGenerator {
    pub fn from_seed(seed: impl Into<String>) -> Self {
        Self {
            seed: seed.into(),
            count: 0,
            taken: HashSet::new(),
        }
    }

    /// Seeded from the app's package name, with all existing ids reserved
    pub fn for_schema(schema: &Schema) -> Self {
        let mut gen = Self::from_seed(get_schema_seed(&schema.app.package_name));
        gen.reserve_all(schema);
        gen
    }

    pub fn reserve(&mut self, id: impl Into<String>) {
        self.taken.insert(id.into());
    }

    pub fn reserve_all(&mut self, schema: &Schema) {
        for id in schema.component_ids() {
            self.taken.insert(id.to_string());
        }
    }

    /// Generate the next unused id for a node of the given type
    pub fn new_id(&mut self, ty: ComponentType) -> String {
        loop {
            self.count += 1;
            let id = format!("{}_{}-{}", ty.id_prefix(), self.seed, self.count);
            if self.taken.insert(id.clone()) {
                return id;
            }
        }
    }
}
