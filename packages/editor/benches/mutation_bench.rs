use criterion::{black_box, criterion_group, criterion_main, Criterion};
use screencraft_editor::mutations::{duplicate, reorder, reparent};
use screencraft_editor::{ComponentNode, ComponentType, DropPosition, EditSession, Schema};
use screencraft_schema::{ComponentKind, IDGenerator};

/// A screen of `width` containers, each holding `width` text nodes
fn wide_tree(width: usize) -> Vec<ComponentNode> {
    (0..width)
        .map(|i| {
            let children = (0..width)
                .map(|j| {
                    ComponentNode::with_defaults(ComponentType::Text, format!("t{}_{}", i, j), "home")
                })
                .collect();
            let mut group =
                ComponentNode::with_defaults(ComponentType::Container, format!("g{}", i), "home");
            group.kind = ComponentKind::Container { children };
            group
        })
        .collect()
}

fn reorder_deep_sibling(c: &mut Criterion) {
    let tree = wide_tree(30);

    c.bench_function("reorder_deep_sibling", |b| {
        b.iter(|| reorder(black_box(&tree), "t29_0", "t29_29", DropPosition::After))
    });
}

fn reparent_across_containers(c: &mut Criterion) {
    let tree = wide_tree(30);

    c.bench_function("reparent_across_containers", |b| {
        b.iter(|| reparent(black_box(&tree), "t0_0", Some("g29")))
    });
}

fn duplicate_container(c: &mut Criterion) {
    let tree = wide_tree(30);
    let mut ids = IDGenerator::from_seed("bench");

    c.bench_function("duplicate_container", |b| {
        b.iter(|| duplicate(black_box(&tree), "g15", &mut ids))
    });
}

fn session_edit_and_undo(c: &mut Criterion) {
    let mut schema = Schema::template();
    schema.screens[0].components = wide_tree(20);
    let mut session = EditSession::new(schema).unwrap();

    c.bench_function("session_edit_and_undo", |b| {
        b.iter(|| {
            session.move_into_container(black_box("t0_0"), Some("g19"));
            session.undo();
        })
    });
}

criterion_group!(
    benches,
    reorder_deep_sibling,
    reparent_across_containers,
    duplicate_container,
    session_edit_and_undo
);
criterion_main!(benches);
