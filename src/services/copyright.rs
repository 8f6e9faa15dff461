use crate::domain::models::CopyrightReport;
use anyhow::{bail, Context};
use regex::RegexSet;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

const COPYRIGHT_KEY: &str = "CopyrightNotice";
const CONFIG_FILE: &str = "config/DefaultGame.ini";
const SOURCE_DIR: &str = "source";

/// Header, implementation, and build-script sources.
const INCLUDE_PATTERNS: [&str; 3] = [r".*\.h", r".*\.cpp", r".*\.cs"];

/// Reads the canonical notice text from the project configuration.
///
/// The value is returned verbatim; callers split it into lines via
/// [`format_notice_lines`]. Missing file, missing key, or an empty value
/// are fatal so a run never touches sources with a bogus notice.
pub fn load_notice(root: &Path) -> anyhow::Result<String> {
    let config = root.join(CONFIG_FILE);
    let raw = fs::read_to_string(&config)
        .with_context(|| format!("unable to read copyright config {}", config.display()))?;

    let key_prefix = format!("{COPYRIGHT_KEY}=");
    for line in raw.lines() {
        if let Some(value) = line.trim().strip_prefix(&key_prefix) {
            let value = value.trim();
            if value.is_empty() {
                break;
            }
            return Ok(value.to_string());
        }
    }
    bail!(
        "unable to get copyright notice from config in {}",
        config.display()
    );
}

/// Splits the raw notice into lines, each prefixed with the line-comment
/// marker. Shared by the checker and the rewriter so their notion of "the
/// notice" never diverges.
pub fn format_notice_lines(notice: &str) -> Vec<String> {
    notice.lines().map(|l| format!("// {l}")).collect()
}

fn include_filter() -> anyhow::Result<RegexSet> {
    Ok(RegexSet::new(INCLUDE_PATTERNS)?)
}

/// True iff the first N lines of the file equal the N notice lines exactly.
/// False on first mismatch or when the file ends before all notice lines
/// matched. Read-only.
pub fn has_notice(path: &Path, notice_lines: &[String]) -> anyhow::Result<bool> {
    let content =
        fs::read_to_string(path).with_context(|| format!("unable to read {}", path.display()))?;
    let mut file_lines = content.lines();
    for expected in notice_lines {
        match file_lines.next() {
            Some(line) if line == expected => {}
            _ => return Ok(false),
        }
    }
    Ok(true)
}

/// Pure rewrite core: notice lines + old file lines -> new file lines.
///
/// Drops the leading comment block (the maximal run of lines whose trimmed
/// form starts with `//`), then inserts one blank separator line unless the
/// surviving content already begins with a blank line.
pub fn splice_notice(notice_lines: &[String], old_lines: &[String]) -> Vec<String> {
    let first_non_comment = old_lines
        .iter()
        .position(|l| !l.trim_start().starts_with("//"));
    let body: &[String] = match first_non_comment {
        Some(i) => &old_lines[i..],
        None => &[],
    };

    let mut out = notice_lines.to_vec();
    let needs_separator = match body.first() {
        None => true,
        Some(first) => !first.trim().is_empty(),
    };
    if needs_separator {
        out.push(String::new());
    }
    out.extend(body.iter().cloned());
    out
}

/// Overwrites the file with the notice followed by its de-commented content.
/// Not atomic: a crash mid-write can corrupt the file.
pub fn rewrite_file(path: &Path, notice_lines: &[String]) -> anyhow::Result<()> {
    let content =
        fs::read_to_string(path).with_context(|| format!("unable to read {}", path.display()))?;
    let old_lines: Vec<String> = content.lines().map(str::to_string).collect();

    let mut new_content = splice_notice(notice_lines, &old_lines).join("\n");
    new_content.push('\n');
    fs::write(path, new_content)
        .with_context(|| format!("unable to rewrite {}", path.display()))?;
    Ok(())
}

/// Walks `<root>/source`, checks every included file, and rewrites the
/// non-compliant ones (or only records them when `check_only`). Files are
/// visited in sorted walk order so output is deterministic.
pub fn enforce_tree(root: &Path, check_only: bool) -> anyhow::Result<CopyrightReport> {
    let notice = load_notice(root)?;
    let notice_lines = format_notice_lines(&notice);
    let filter = include_filter()?;

    let dir = root.join(SOURCE_DIR);
    let mut updated = Vec::new();

    if dir.is_dir() {
        for entry in WalkDir::new(&dir).sort_by_file_name() {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }
            let name = entry.file_name().to_string_lossy();
            if !filter.is_match(&name) {
                continue;
            }
            if !has_notice(entry.path(), &notice_lines)? {
                if !check_only {
                    rewrite_file(entry.path(), &notice_lines)?;
                }
                updated.push(entry.path().display().to_string());
            }
        }
    }

    let count = updated.len();
    Ok(CopyrightReport {
        root: root.display().to_string(),
        updated,
        count,
        check_only,
    })
}
