//! HTML export of plotly figures

use serde_json::Value;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::GirderResult;

/// plotly.js build loaded by the exported pages
pub const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

/// Render a figure (`{ "data": [...], "layout": {...} }`) as a standalone page
pub fn html_page(title: &str, figure: &Value) -> GirderResult<String> {
    // "</" would close the script element early
    let figure_json = serde_json::to_string(figure)?.replace("</", "<\\/");

    Ok(format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8" />
<title>{title}</title>
<script src="{cdn}"></script>
</head>
<body>
<div id="diagram" style="width:100%;height:100%;"></div>
<script>
const figure = {figure_json};
Plotly.newPlot("diagram", figure.data, figure.layout, {{ responsive: true }});
</script>
</body>
</html>
"#,
        title = escape_text(title),
        cdn = PLOTLY_CDN,
        figure_json = figure_json,
    ))
}

/// Write a figure page to disk
pub fn write_html(path: &Path, title: &str, figure: &Value) -> GirderResult<()> {
    let page = html_page(title, figure)?;
    let mut file = File::create(path)?;
    file.write_all(page.as_bytes())?;
    file.flush()?;
    log::info!("Wrote {}", path.display());
    Ok(())
}

fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
