//! Benchmarks for girder extraction and scene building

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use girder_diagrams::pipeline::girder_profiles;
use girder_diagrams::prelude::*;
use std::collections::BTreeMap;

const COMPONENTS: [&str; 4] = ["Mz_i", "Mz_j", "Vy_i", "Vy_j"];

fn create_deck(girders: u32, spans: u32) -> (BridgeModel, ForceDataset, GirderLayout) {
    let mut model = BridgeModel::new();
    let mut layout = BTreeMap::new();
    let mut elements = Vec::new();
    let mut rows = Vec::new();

    for g in 0..girders {
        let node_id = |k: u32| g * (spans + 1) + k + 1;
        for k in 0..=spans {
            model
                .add_node(node_id(k), Node::new(k as f64 * 4.0, 0.0, g as f64 * 2.0))
                .unwrap();
        }

        let mut path = Vec::new();
        for k in 0..spans {
            let id = g * spans + k + 1;
            model.add_member(id, Member::new(node_id(k), node_id(k + 1))).unwrap();
            path.push(id);
            elements.push(id);
            rows.push(vec![k as f64, k as f64 + 1.0, -(k as f64), -(k as f64) - 1.0]);
        }
        layout.insert(g + 1, GirderPath::from_elements(path));
    }

    let forces = ForceDataset::new(elements, COMPONENTS.map(String::from).to_vec(), rows).unwrap();
    let layout = GirderLayout { girders: layout, central: 1 };
    (model, forces, layout)
}

fn benchmark_reference_deck(c: &mut Criterion) {
    let (model, forces, layout) = create_deck(5, 9);
    let options = DiagramOptions::default();
    c.bench_function("deck_5x9_profiles", |b| {
        b.iter(|| {
            let profiles = girder_profiles(&model, &forces, &layout, &options).unwrap();
            black_box(&profiles);
        })
    });
}

fn benchmark_large_deck(c: &mut Criterion) {
    let (model, forces, layout) = create_deck(20, 200);
    let options = DiagramOptions::default();
    c.bench_function("deck_20x200_profiles_and_scene", |b| {
        b.iter(|| {
            let profiles = girder_profiles(&model, &forces, &layout, &options).unwrap();
            let scene = build_scene(&profiles, DiagramKind::Moment, 0.05).unwrap();
            black_box(&scene);
        })
    });
}

criterion_group!(benches, benchmark_reference_deck, benchmark_large_deck);

criterion_main!(benches);
