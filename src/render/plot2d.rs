//! Stacked 2D moment and shear diagrams

use serde_json::{json, Value};

use crate::extract::{DiagramSeries, GirderDiagrams};
use crate::results::DiagramKind;

/// Page and figure title of the 2D diagram
pub const TITLE_2D: &str = "Central Longitudinal Girder Analysis";

const VERTICAL_SPACING: f64 = 0.15;

fn panel_title(kind: DiagramKind) -> &'static str {
    match kind {
        DiagramKind::Moment => "Bending Moment Diagram (Mz)",
        DiagramKind::Shear => "Shear Force Diagram (Vy)",
    }
}

fn axis_title(kind: DiagramKind) -> String {
    match kind {
        DiagramKind::Moment => format!("Bending Moment ({})", kind.unit()),
        DiagramKind::Shear => format!("Shear Force ({})", kind.unit()),
    }
}

/// (line color, fill color)
fn colors(kind: DiagramKind) -> (&'static str, &'static str) {
    match kind {
        DiagramKind::Moment => ("blue", "rgba(0, 0, 255, 0.1)"),
        DiagramKind::Shear => ("red", "rgba(255, 0, 0, 0.1)"),
    }
}

fn trace(series: &DiagramSeries, row: usize) -> Value {
    let (line, fill) = colors(series.kind);
    json!({
        "type": "scatter",
        "x": series.positions(),
        "y": series.values(),
        "mode": "lines+markers",
        "name": series.kind.symbol(),
        "line": { "color": line, "width": 3 },
        "marker": { "size": 6 },
        "fill": "tozeroy",
        "fillcolor": fill,
        "xaxis": axis_ref("x", row),
        "yaxis": axis_ref("y", row),
    })
}

/// `x`, `x2`, ... as plotly names subplot axes
fn axis_ref(axis: &str, row: usize) -> String {
    if row == 1 {
        axis.to_string()
    } else {
        format!("{}{}", axis, row)
    }
}

/// Vertical domain of a row in a two-row grid, top row first
fn row_domain(row: usize) -> [f64; 2] {
    let height = (1.0 - VERTICAL_SPACING) / 2.0;
    let top = 1.0 - (row - 1) as f64 * (height + VERTICAL_SPACING);
    [top - height, top]
}

/// Build the stacked moment/shear figure
pub fn figure_2d(diagrams: &GirderDiagrams) -> Value {
    let mut layout = json!({
        "title": { "text": TITLE_2D, "x": 0.5 },
        "height": 900,
        "showlegend": false,
        "paper_bgcolor": "white",
        "plot_bgcolor": "white",
    });

    let mut data = Vec::new();
    let mut shapes = Vec::new();
    let mut annotations = Vec::new();

    for (idx, kind) in DiagramKind::all().into_iter().enumerate() {
        let row = idx + 1;
        let domain = row_domain(row);
        let x_name = if row == 1 { "xaxis".to_string() } else { format!("xaxis{}", row) };
        let y_name = if row == 1 { "yaxis".to_string() } else { format!("yaxis{}", row) };

        data.push(trace(diagrams.series(kind), row));

        layout[x_name] = json!({
            "title": { "text": "Distance along Bridge (m)" },
            "showgrid": true,
            "gridcolor": "#ebf0f8",
            "anchor": axis_ref("y", row),
        });
        layout[y_name] = json!({
            "title": { "text": axis_title(kind) },
            "showgrid": true,
            "gridcolor": "#ebf0f8",
            "zerolinecolor": "#ebf0f8",
            "domain": domain,
            "anchor": axis_ref("x", row),
        });

        // y = 0 reference line across the whole panel
        shapes.push(json!({
            "type": "line",
            "xref": format!("{} domain", axis_ref("x", row)),
            "yref": axis_ref("y", row),
            "x0": 0, "x1": 1, "y0": 0, "y1": 0,
            "line": { "dash": "dash", "color": "black", "width": 1 },
        }));

        annotations.push(json!({
            "text": panel_title(kind),
            "xref": "paper", "yref": "paper",
            "x": 0.5, "y": domain[1],
            "xanchor": "center", "yanchor": "bottom",
            "showarrow": false,
            "font": { "size": 16 },
        }));
    }

    layout["shapes"] = Value::Array(shapes);
    layout["annotations"] = Value::Array(annotations);

    json!({ "data": data, "layout": layout })
}
