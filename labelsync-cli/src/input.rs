//! Literal and file input parsing.
//!
//! A `--label`/`--rename` argument is always a literal; `--from-file` is
//! always a path. The distinction is resolved here — the engine only ever
//! sees typed collections.

use std::path::Path;

use anyhow::{bail, Context, Result};

use labelsync_core::{resolver::OneOrMany, Label};
use labelsync_engine::{Recolor, Rename};

/// Parse `NAME:COLOR[:DESCRIPTION]`. The description may itself contain
/// colons; only the first two are separators.
pub fn parse_label(spec: &str) -> Result<Label> {
    let mut parts = spec.splitn(3, ':');
    let (Some(name), Some(color)) = (parts.next(), parts.next()) else {
        bail!("invalid label '{spec}': expected NAME:COLOR[:DESCRIPTION]");
    };
    let description = parts.next().map(str::to_owned);
    Label::new(name, color, description).with_context(|| format!("invalid label '{spec}'"))
}

/// Parse `NAME:COLOR`.
pub fn parse_recolor(spec: &str) -> Result<Recolor> {
    let Some((name, color)) = spec.split_once(':') else {
        bail!("invalid recolor '{spec}': expected NAME:COLOR");
    };
    if name.is_empty() || color.is_empty() {
        bail!("invalid recolor '{spec}': expected NAME:COLOR");
    }
    Ok(Recolor {
        name: name.to_owned(),
        color: color.to_owned(),
    })
}

/// Parse `OLD=NEW`.
pub fn parse_rename(spec: &str) -> Result<Rename> {
    let Some((old, new)) = spec.split_once('=') else {
        bail!("invalid rename '{spec}': expected OLD=NEW");
    };
    if old.is_empty() || new.is_empty() {
        bail!("invalid rename '{spec}': expected OLD=NEW");
    }
    Ok(Rename {
        name: old.to_owned(),
        new_name: new.to_owned(),
    })
}

/// Load a label set from a JSON file — either a single label object or an
/// array, as produced by `labelsync export`. Every entry is validated.
pub fn load_labels(path: &Path) -> Result<Vec<Label>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read {}", path.display()))?;
    let parsed: OneOrMany<Label> = serde_json::from_str(&contents)
        .with_context(|| format!("cannot parse {} as a label set", path.display()))?;
    let labels = parsed.into_vec();
    for label in &labels {
        label
            .validate()
            .with_context(|| format!("invalid label '{}' in {}", label.name, path.display()))?;
    }
    Ok(labels)
}

/// Combine `--from-file` labels (first) with `--label` literals.
pub fn gather_labels(literals: &[String], file: Option<&Path>) -> Result<Vec<Label>> {
    let mut labels = match file {
        Some(path) => load_labels(path)?,
        None => Vec::new(),
    };
    for spec in literals {
        labels.push(parse_label(spec)?);
    }
    if labels.is_empty() {
        bail!("no labels given; use --label or --from-file");
    }
    Ok(labels)
}
