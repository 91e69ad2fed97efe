use std::path::PathBuf;

use girder_diagrams::io::{load_forces, load_model};
use girder_diagrams::pipeline::{central_diagrams, write_3d};
use girder_diagrams::prelude::*;

fn sample(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/sample").join(name)
}

#[test]
fn sample_bridge_loads_and_is_contiguous() {
    let model = load_model(&sample("nodes.json"), &sample("members.json")).unwrap();
    let forces = load_forces(&sample("forces.json")).unwrap();
    assert_eq!(model.nodes.len(), 50);
    assert_eq!(model.members.len(), 45);
    assert_eq!(forces.shape(), (45, 5));

    let layout = GirderLayout::default();
    for path in layout.girders.values() {
        check_contiguity(&path.elements, &path.nodes, &model).unwrap();
    }

    let options = DiagramOptions {
        strict_contiguity: true,
        ..DiagramOptions::default()
    };
    let diagrams = central_diagrams(&model, &forces, &layout, &options).unwrap();
    assert_eq!(diagrams.moment.len(), 10);
    assert_eq!(diagrams.moment.positions().last().copied(), Some(45.0));
}

#[test]
fn sample_bridge_renders_3d() {
    let model = load_model(&sample("nodes.json"), &sample("members.json")).unwrap();
    let forces = load_forces(&sample("forces.json")).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let options = DiagramOptions {
        output_dir: dir.path().to_path_buf(),
        ..DiagramOptions::default()
    };

    let written = write_3d(&model, &forces, &GirderLayout::default(), &options).unwrap();
    assert_eq!(written.len(), 2);
    assert!(written.iter().all(|p| p.exists()));
}
