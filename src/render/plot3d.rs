//! 3D ribbon diagrams over the bridge deck

use nalgebra::Point3;
use serde_json::{json, Value};

use crate::results::DiagramKind;
use crate::scene::{Ribbon, Scene3d};

/// Page and figure title of a 3D diagram
pub fn title_3d(kind: DiagramKind) -> &'static str {
    match kind {
        DiagramKind::Moment => "3D Bending Moment Diagram (BMD)",
        DiagramKind::Shear => "3D Shear Force Diagram (SFD)",
    }
}

fn coords(points: &[Point3<f64>]) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
    (
        points.iter().map(|p| p.x).collect(),
        points.iter().map(|p| p.y).collect(),
        points.iter().map(|p| p.z).collect(),
    )
}

fn line_trace(points: &[Point3<f64>], color: &str, width: u32) -> Value {
    let (x, y, z) = coords(points);
    json!({
        "type": "scatter3d",
        "x": x, "y": y, "z": z,
        "mode": "lines",
        "line": { "color": color, "width": width },
        "showlegend": false,
        "hoverinfo": "skip",
    })
}

fn ribbon_trace(ribbon: &Ribbon, kind: DiagramKind) -> Value {
    let (x, y, z) = coords(&ribbon.vertices);
    let [t0, t1] = Ribbon::TRIANGLES;
    json!({
        "type": "mesh3d",
        "x": x, "y": y, "z": z,
        "i": [t0[0], t1[0]],
        "j": [t0[1], t1[1]],
        "k": [t0[2], t1[2]],
        "color": ribbon.color.to_string(),
        "opacity": 0.8,
        "showlegend": false,
        "hovertemplate": format!(
            "Girder {}<br>{}: {:.2}<extra></extra>",
            ribbon.girder,
            kind.symbol(),
            ribbon.value
        ),
    })
}

/// Build the 3D figure for a scene
pub fn figure_3d(scene: &Scene3d) -> Value {
    let deck = &scene.deck;
    let mut data = vec![json!({
        "type": "surface",
        "x": deck.grid_x(),
        "y": deck.grid_y(),
        "z": deck.grid_z(),
        "surfacecolor": deck.grid_y(),
        "colorscale": [[0, "lightgray"], [1, "lightgray"]],
        "showscale": false,
        "opacity": 0.3,
        "name": "Bridge Deck",
        "showlegend": false,
        "hoverinfo": "skip",
    })];

    data.extend(deck.grid_lines().iter().map(|line| line_trace(line, "gray", 1)));

    data.extend(scene.ribbons.iter().map(|r| ribbon_trace(r, scene.kind)));

    for outline in &scene.outlines {
        let (x, y, z) = coords(&outline.force);
        data.push(json!({
            "type": "scatter3d",
            "x": x, "y": y, "z": z,
            "mode": "lines",
            "line": { "color": "black", "width": 3 },
            "name": format!("Girder {}", outline.girder),
            "showlegend": true,
        }));
        data.push(line_trace(&outline.deck, "darkblue", 4));
    }

    let axis = |title: String| {
        json!({ "title": { "text": title }, "backgroundcolor": "white", "gridcolor": "lightgray" })
    };

    let layout = json!({
        "title": {
            "text": title_3d(scene.kind),
            "x": 0.5,
            "xanchor": "center",
            "font": { "size": 20 },
        },
        "scene": {
            "xaxis": axis("X (m)".to_string()),
            "yaxis": axis(format!("{} ({})", scene.kind.symbol(), scene.kind.unit())),
            "zaxis": axis("Z (m)".to_string()),
            "aspectmode": "data",
            "camera": { "eye": { "x": 2, "y": 1.5, "z": 1.5 } },
        },
        "height": 900,
        "showlegend": true,
        "legend": { "x": 0.02, "y": 0.98 },
    });

    json!({ "data": data, "layout": layout })
}
