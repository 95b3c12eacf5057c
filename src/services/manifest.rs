//! Gallery manifest loading and control derivation

use crate::model::{Control, FilterSpec, GalleryEntry, GalleryManifest};
use anyhow::{Context, Result};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

/// Load and parse a gallery manifest. The format is picked by extension:
/// `.yaml` and `.yml` parse as YAML, everything else as JSON.
pub fn load_manifest<P: AsRef<Path>>(path: P) -> Result<GalleryManifest> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    let manifest = match path.extension().and_then(|ext| ext.to_str()) {
        Some("yaml") | Some("yml") => serde_yaml::from_str(&contents)
            .with_context(|| format!("failed to parse {} as YAML", path.display()))?,
        _ => serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse {} as JSON", path.display()))?,
    };

    Ok(manifest)
}

/// Build the control set for a manifest: the authored filters when present,
/// otherwise controls derived from the item tags. Authored tokens are carried
/// as written even when no item matches them.
pub fn build_controls(manifest: &GalleryManifest) -> Vec<Control> {
    match &manifest.filters {
        Some(specs) => specs.iter().map(control_from_spec).collect(),
        None => derive_controls(&manifest.items),
    }
}

fn control_from_spec(spec: &FilterSpec) -> Control {
    Control::new(&spec.label, &spec.token)
}

/// The sentinel control first, then one control per distinct tag in sorted
/// order.
pub fn derive_controls(items: &[GalleryEntry]) -> Vec<Control> {
    let tags: BTreeSet<&str> = items
        .iter()
        .flat_map(|item| item.tags.iter().map(|tag| tag.as_str()))
        .collect();

    let mut controls = vec![Control::select_all()];
    controls.extend(tags.into_iter().map(|tag| Control::new(tag, tag)));
    controls
}
