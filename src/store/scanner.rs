use std::path::{Component, Path, PathBuf};

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::Serialize;
use tracing::{debug, warn};

use crate::errors::CostscopeError;

/// Metadata for one report file, as returned by the listing endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct FileInfo {
    pub name: String,
    pub size: u64,
    pub modified: Option<String>,
    pub path: String,
    pub account: String,
}

/// One account directory under the data root.
#[derive(Debug, Clone, Serialize)]
pub struct AccountInfo {
    pub name: String,
    pub file_count: usize,
    pub path: String,
}

/// Read-only view over the report directory tree.
///
/// Account directories sit directly under the root; the report files inside
/// are named `<type>_<YYYYMMDD_HHMMSS>.json`. The embedded timestamp token is
/// the sole sort key for "latest" selection.
pub struct ReportStore {
    root: PathBuf,
    timestamp_re: Regex,
}

impl ReportStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            // First 8-digit-date + 6-digit-time token per path.
            timestamp_re: Regex::new(r"\d{8}_\d{6}").expect("valid timestamp regex"),
        }
    }

    /// Most recent file matching `pattern`, by the embedded timestamp token.
    /// Files without a token sort lowest and never beat a tokened file.
    ///
    /// Scoped to one account directory when `account` is given, otherwise the
    /// whole tree is searched recursively.
    pub fn find_latest(&self, pattern: &str, account: Option<&str>) -> Option<PathBuf> {
        let search = match account {
            Some(account) => self.root.join(account).join(pattern),
            None => self.root.join("**").join(pattern),
        };
        self.glob_paths(&search)
            .into_iter()
            .max_by_key(|path| self.timestamp_key(path))
    }

    /// All files matching `pattern`, unordered, with per-file metadata.
    /// Searches recursively under the root or one account directory; files
    /// whose metadata cannot be read are skipped.
    pub fn list_matching(&self, pattern: &str, account: Option<&str>) -> Vec<FileInfo> {
        let search = match account {
            Some(account) => self.root.join(account).join("**").join(pattern),
            None => self.root.join("**").join(pattern),
        };
        self.glob_paths(&search)
            .into_iter()
            .filter_map(|path| self.file_info(&path))
            .collect()
    }

    /// Metadata for one file, or `None` when the file cannot be stat'ed.
    pub fn file_info(&self, path: &Path) -> Option<FileInfo> {
        let meta = match std::fs::metadata(path) {
            Ok(meta) => meta,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "Skipping unreadable file");
                return None;
            }
        };

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let account = path
            .parent()
            .and_then(Path::file_name)
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        Some(FileInfo {
            name,
            size: meta.len(),
            modified: meta.modified().ok().map(format_timestamp),
            path: path.to_string_lossy().into_owned(),
            account,
        })
    }

    /// Immediate subdirectories of the root, with a non-recursive count of
    /// the `.json` files directly inside each.
    pub fn list_accounts(&self) -> Result<Vec<AccountInfo>, CostscopeError> {
        let mut accounts = Vec::new();
        for entry in std::fs::read_dir(&self.root)? {
            let entry = entry?;
            let path = entry.path();
            if !path.is_dir() {
                continue;
            }
            accounts.push(AccountInfo {
                name: entry.file_name().to_string_lossy().into_owned(),
                file_count: count_json_files(&path),
                path: path.to_string_lossy().into_owned(),
            });
        }
        accounts.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(accounts)
    }

    /// Names of the account directories under the root, sorted.
    pub fn account_names(&self) -> Result<Vec<String>, CostscopeError> {
        let mut names = Vec::new();
        for entry in std::fs::read_dir(&self.root)? {
            let entry = entry?;
            if entry.path().is_dir() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        names.sort();
        Ok(names)
    }

    /// Resolve `account/filename` to a real path inside the root.
    ///
    /// Traversal is rejected before the existence check, so `..`, absolute
    /// segments, and symlinks escaping the root yield `AccessDenied` whether
    /// or not the target exists.
    pub fn resolve_file(&self, account: &str, filename: &str) -> Result<PathBuf, CostscopeError> {
        if has_traversal(account) || has_traversal(filename) {
            return Err(CostscopeError::AccessDenied);
        }

        let path = self.root.join(account).join(filename);
        if !path.exists() {
            return Err(CostscopeError::NotFound);
        }

        let real = path.canonicalize()?;
        let real_root = self.root.canonicalize()?;
        if !real.starts_with(&real_root) {
            return Err(CostscopeError::AccessDenied);
        }

        Ok(real)
    }

    fn glob_paths(&self, search: &Path) -> Vec<PathBuf> {
        let search = search.to_string_lossy();

        let entries = match glob::glob(&search) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(pattern = %search, error = %e, "Invalid glob pattern");
                return Vec::new();
            }
        };

        entries
            .filter_map(|entry| match entry {
                Ok(path) => Some(path),
                Err(e) => {
                    debug!(error = %e, "Skipping unreadable glob entry");
                    None
                }
            })
            .filter(|path| path.is_file())
            .collect()
    }

    /// Sort key for latest-file selection: the first `YYYYMMDD_HHMMSS` token
    /// in the path, or the empty string when there is none.
    fn timestamp_key(&self, path: &Path) -> String {
        let text = path.to_string_lossy();
        self.timestamp_re
            .find(&text)
            .map(|m| m.as_str().to_string())
            .unwrap_or_default()
    }
}

fn count_json_files(dir: &Path) -> usize {
    match std::fs::read_dir(dir) {
        Ok(entries) => entries
            .filter_map(Result::ok)
            .filter(|e| {
                let path = e.path();
                path.is_file() && path.extension().map_or(false, |ext| ext == "json")
            })
            .count(),
        Err(e) => {
            debug!(path = %dir.display(), error = %e, "Skipping unreadable account directory");
            0
        }
    }
}

fn format_timestamp(time: std::time::SystemTime) -> String {
    DateTime::<Utc>::from(time).to_rfc3339()
}

fn has_traversal(segment: &str) -> bool {
    segment.is_empty()
        || Path::new(segment)
            .components()
            .any(|c| !matches!(c, Component::Normal(_)))
}
