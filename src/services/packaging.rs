use crate::cli::PackageMode;
use crate::domain::models::PackageReport;
use anyhow::{bail, Context};
use regex::RegexSet;
use std::fs;
use std::io;
use std::path::Path;
use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Staging output manifests plus debug-symbol/font/license artifacts.
/// Shipping archives drop these; debug archives keep only these.
const FILTER_PATTERNS: [&str; 4] = [r"^Manifest_.*\.txt", r".*\.pdb", r".*\.tps", r".*\.ttf"];

fn wanted(mode: PackageMode, filter: &RegexSet, file_name: &str) -> bool {
    match mode {
        PackageMode::Debug => filter.is_match(file_name),
        PackageMode::Shipping => !filter.is_match(file_name),
    }
}

/// Archive entry names are relative to the staged directory itself, so the
/// directory being zipped is not a prefix inside the archive.
fn entry_name(source: &Path, path: &Path) -> anyhow::Result<String> {
    let rel = path
        .strip_prefix(source)
        .with_context(|| format!("{} escapes {}", path.display(), source.display()))?;
    Ok(rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/"))
}

/// Zips every file under `source` selected by the mode filter into `output`,
/// deflate-compressed, in sorted walk order.
pub fn zip_tree(source: &Path, output: &Path, mode: PackageMode) -> anyhow::Result<PackageReport> {
    if !source.is_dir() {
        bail!("staging directory not found: {}", source.display());
    }

    let filter = RegexSet::new(FILTER_PATTERNS)?;
    let out_file = fs::File::create(output)
        .with_context(|| format!("unable to create archive {}", output.display()))?;
    let mut writer = ZipWriter::new(out_file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    let mut files = Vec::new();
    for entry in WalkDir::new(source).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        if !wanted(mode, &filter, &name) {
            continue;
        }
        let rel = entry_name(source, entry.path())?;
        writer.start_file(rel.clone(), options)?;
        let mut input = fs::File::open(entry.path())
            .with_context(|| format!("unable to read {}", entry.path().display()))?;
        io::copy(&mut input, &mut writer)?;
        files.push(rel);
    }
    writer.finish()?;

    let count = files.len();
    Ok(PackageReport {
        archive: output.display().to_string(),
        files,
        count,
    })
}
