//! `show` and `check` command bodies, kept out of `main` so tests can drive
//! them against an in-memory writer.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{bail, Context};
use emprec_core::config::{Config, ViewStyle};
use emprec_core::Normalizer;
use emprec_formats::{load_path_with, LoadedSource, SourceFormat};

/// Explicit paths, or the configured sample documents when none are given.
pub fn resolve_paths(config: &Config, paths: &[PathBuf]) -> Vec<PathBuf> {
    if paths.is_empty() {
        config.source_paths()
    } else {
        paths.to_vec()
    }
}

fn load_all(
    config: &Config,
    paths: &[PathBuf],
    format: Option<SourceFormat>,
) -> anyhow::Result<Vec<LoadedSource>> {
    let normalizer = Normalizer::new(config.normalize_options());
    resolve_paths(config, paths)
        .iter()
        .map(|path| {
            load_path_with(path, format, &normalizer)
                .with_context(|| format!("failed to load {}", path.display()))
        })
        .collect()
}

/// Load every path and print it. Stops at the first source that fails.
pub fn show<W: Write>(
    out: &mut W,
    config: &Config,
    paths: &[PathBuf],
    format: Option<SourceFormat>,
    style: Option<ViewStyle>,
) -> anyhow::Result<()> {
    let mut view = config.view;
    if let Some(style) = style {
        view.style = style;
    }

    for (i, source) in load_all(config, paths, format)?.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        let title = format!(
            "{} records from {}",
            source.format.to_string().to_uppercase(),
            source.origin
        );
        emprec_view::render(out, &title, &source.records, &view)?;
    }
    Ok(())
}

/// Load every path and require all collections to be identical.
///
/// Writes a one-line verdict per compared source, then fails if any differ.
pub fn check<W: Write>(out: &mut W, config: &Config, paths: &[PathBuf]) -> anyhow::Result<()> {
    let sources = load_all(config, paths, None)?;
    let Some((reference, rest)) = sources.split_first() else {
        bail!("no sources to check");
    };

    let mut mismatches = 0usize;
    for source in rest {
        match reference.records.first_difference(&source.records) {
            None => writeln!(
                out,
                "ok       {} matches {} ({} records)",
                source.origin,
                reference.origin,
                source.records.len()
            )?,
            Some(index) => {
                mismatches += 1;
                tracing::warn!(origin = %source.origin, index, "collection differs");
                writeln!(
                    out,
                    "MISMATCH {} differs from {} at record {index}",
                    source.origin, reference.origin
                )?;
            }
        }
    }

    if mismatches > 0 {
        bail!("{mismatches} of {} sources differ from {}", rest.len(), reference.origin);
    }
    Ok(())
}
