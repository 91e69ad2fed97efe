//! End-to-end diagram generation: layout in, HTML files out

use std::path::PathBuf;

use crate::config::{DiagramOptions, GirderLayout, GirderPath};
use crate::error::{GirderError, GirderResult};
use crate::extract::{check_contiguity, extract_girder, extract_profile, GirderDiagrams, GirderProfile};
use crate::lookup::{ConnectivityLookup, CoordinateLookup, ForceLookup};
use crate::render::{figure_2d, figure_3d, title_3d, write_html, TITLE_2D};
use crate::results::DiagramKind;
use crate::scene::build_scene;

/// Check a girder's chain; breaks are fatal only in strict mode
pub fn verify_girder<C>(girder: u32, path: &GirderPath, connectivity: &C, strict: bool) -> GirderResult<()>
where
    C: ConnectivityLookup + ?Sized,
{
    match check_contiguity(&path.elements, &path.nodes, connectivity) {
        Ok(()) => Ok(()),
        Err(err @ (GirderError::NonContiguous { .. } | GirderError::NodeSequenceMismatch { .. }))
            if !strict =>
        {
            log::warn!("Girder {}: {}", girder, err);
            Ok(())
        }
        Err(err) => Err(err),
    }
}

/// Moment and shear series of the central girder
pub fn central_diagrams<M, F>(
    model: &M,
    forces: &F,
    layout: &GirderLayout,
    options: &DiagramOptions,
) -> GirderResult<GirderDiagrams>
where
    M: ConnectivityLookup + CoordinateLookup + ?Sized,
    F: ForceLookup + ?Sized,
{
    let path = layout.central_girder()?;
    verify_girder(layout.central, path, model, options.strict_contiguity)?;

    log::info!("Extracting data for elements: {:?}", path.elements);
    let diagrams = extract_girder(&path.elements, model, model, forces)?;
    log_peaks(layout.central, &diagrams);
    Ok(diagrams)
}

/// Stations of every girder in the layout, in girder order
pub fn girder_profiles<M, F>(
    model: &M,
    forces: &F,
    layout: &GirderLayout,
    options: &DiagramOptions,
) -> GirderResult<Vec<GirderProfile>>
where
    M: ConnectivityLookup + CoordinateLookup + ?Sized,
    F: ForceLookup + ?Sized,
{
    layout
        .girders
        .iter()
        .map(|(&id, path)| {
            verify_girder(id, path, model, options.strict_contiguity)?;
            extract_profile(id, &path.elements, model, model, forces)
        })
        .collect()
}

fn log_peaks(girder: u32, diagrams: &GirderDiagrams) {
    for kind in DiagramKind::all() {
        if let Some(peak) = diagrams.series(kind).peak() {
            log::info!(
                "Girder {}: peak |{}| = {:.2} {} at x = {:.2} m",
                girder,
                kind.symbol(),
                peak.value.abs(),
                kind.unit(),
                peak.position
            );
        }
    }
}

/// Extract the central girder and write the stacked 2D diagram
pub fn write_2d<M, F>(
    model: &M,
    forces: &F,
    layout: &GirderLayout,
    options: &DiagramOptions,
) -> GirderResult<PathBuf>
where
    M: ConnectivityLookup + CoordinateLookup + ?Sized,
    F: ForceLookup + ?Sized,
{
    let diagrams = central_diagrams(model, forces, layout, options)?;
    let path = options.output_dir.join(&options.file_2d);
    write_html(&path, TITLE_2D, &figure_2d(&diagrams))?;
    Ok(path)
}

/// Extract every girder and write the 3D moment and shear diagrams.
///
/// Both scenes are built before anything is written.
pub fn write_3d<M, F>(
    model: &M,
    forces: &F,
    layout: &GirderLayout,
    options: &DiagramOptions,
) -> GirderResult<Vec<PathBuf>>
where
    M: ConnectivityLookup + CoordinateLookup + ?Sized,
    F: ForceLookup + ?Sized,
{
    let profiles = girder_profiles(model, forces, layout, options)?;

    let scenes = DiagramKind::all()
        .into_iter()
        .map(|kind| build_scene(&profiles, kind, options.ribbon_scale))
        .collect::<GirderResult<Vec<_>>>()?;

    let mut written = Vec::with_capacity(scenes.len());
    for scene in &scenes {
        log::info!(
            "Creating {} ({} ribbons, range {:.2} .. {:.2})",
            title_3d(scene.kind),
            scene.ribbons.len(),
            scene.range.min,
            scene.range.max
        );
        let file = match scene.kind {
            DiagramKind::Moment => &options.file_3d_moment,
            DiagramKind::Shear => &options.file_3d_shear,
        };
        let path = options.output_dir.join(file);
        write_html(&path, title_3d(scene.kind), &figure_3d(scene))?;
        written.push(path);
    }
    Ok(written)
}
