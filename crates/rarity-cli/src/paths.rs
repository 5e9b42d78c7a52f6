//! Input resolution and versioned output naming.

use crate::error::{CliError, Result};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Resolve a user-supplied input path.
///
/// Expands a leading `~`, then tries the path as given and finally relative to
/// the parent of the working directory.
pub fn resolve_input(raw: &Path) -> Result<PathBuf> {
    let expanded = expand_home(raw);
    let absolute = std::path::absolute(&expanded)?;
    if absolute.is_file() {
        return Ok(absolute);
    }

    if expanded.is_relative() {
        let cwd = env::current_dir()?;
        if let Some(project_root) = cwd.parent() {
            let candidate = project_root.join(&expanded);
            if candidate.is_file() {
                debug!(path = %candidate.display(), "Resolved input relative to project root");
                return Ok(candidate);
            }
        }
    }

    Err(CliError::FileNotFound(absolute))
}

fn expand_home(path: &Path) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) => match dirs::home_dir() {
            Some(home) => home.join(rest),
            None => path.to_path_buf(),
        },
        Err(_) => path.to_path_buf(),
    }
}

/// Next free version number for files named `<prefix><N><suffix>` in `dir`.
///
/// One past the highest existing `N`, starting at 1.
pub fn next_version(dir: &Path, prefix: &str, suffix: &str) -> Result<u32> {
    if !dir.exists() {
        return Ok(1);
    }

    let mut max_version = 0;
    for entry in fs::read_dir(dir)? {
        let name = entry?.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        let version = name
            .strip_prefix(prefix)
            .and_then(|rest| rest.strip_suffix(suffix))
            .filter(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
            .and_then(|digits| digits.parse::<u32>().ok());
        if let Some(version) = version {
            max_version = max_version.max(version);
        }
    }

    Ok(max_version + 1)
}

/// Where one rank run writes its three artifacts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPlan {
    /// Updated metadata JSON
    pub metadata: PathBuf,
    /// Rankings report
    pub rankings: PathBuf,
    /// Statistics report
    pub statistics: PathBuf,
    /// Version suffix of the metadata file
    pub version: u32,
}

impl OutputPlan {
    /// Pick output paths for `input`, creating the output directories.
    ///
    /// Metadata always gets a fresh `-new<N>` suffix. Reports use a plain name
    /// first and switch to `-new<N>` once the plain name is taken.
    pub fn prepare(input: &Path, metadata_dir: Option<&Path>, reports_dir: &Path) -> Result<Self> {
        let stem = input
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| CliError::InvalidInput(format!("Cannot derive a file name from '{}'", input.display())))?;

        let metadata_dir = match metadata_dir {
            Some(dir) => dir.to_path_buf(),
            None => input.parent().map(Path::to_path_buf).unwrap_or_default(),
        };

        if !metadata_dir.as_os_str().is_empty() {
            fs::create_dir_all(&metadata_dir)?;
        }
        fs::create_dir_all(reports_dir)?;

        let version = next_version(&metadata_dir_or_cwd(&metadata_dir), &format!("{}-new", stem), ".json")?;
        let metadata = metadata_dir.join(format!("{}-new{}.json", stem, version));
        let rankings = report_path(reports_dir, stem, "rankings")?;
        let statistics = report_path(reports_dir, stem, "statistics")?;

        Ok(Self {
            metadata,
            rankings,
            statistics,
            version,
        })
    }
}

fn metadata_dir_or_cwd(dir: &Path) -> PathBuf {
    if dir.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        dir.to_path_buf()
    }
}

fn report_path(reports_dir: &Path, stem: &str, kind: &str) -> Result<PathBuf> {
    let plain = reports_dir.join(format!("{}-rarity-{}.txt", stem, kind));
    if !plain.exists() {
        return Ok(plain);
    }

    let prefix = format!("{}-rarity-{}-new", stem, kind);
    let version = next_version(reports_dir, &prefix, ".txt")?;
    Ok(reports_dir.join(format!("{}{}.txt", prefix, version)))
}
