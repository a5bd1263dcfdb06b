//! Page generation: the filesystem side of the site build.
//!
//! Reads markdown and template files, renders pages through
//! [`crate::parsing`], mirrors the content tree into the output directory and
//! copies static assets. Any failure aborts the operation.

use log::{debug, info, warn};
use relative_path::{RelativePath, RelativePathBuf};
use std::fs;
use std::path::{Path, PathBuf};

use crate::parsing::{ParseError, extract_title, markdown_to_html};

/// Placeholder replaced by the page title.
pub const TITLE_PLACEHOLDER: &str = "{{ Title }}";
/// Placeholder replaced by the rendered page body.
pub const CONTENT_PLACEHOLDER: &str = "{{ Content }}";

const MARKDOWN_EXTENSION: &str = "md";
const HTML_EXTENSION: &str = "html";

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("Source not found: {0}")]
    SourceMissing(PathBuf),
    #[error("Failed to read {path}: {source}")]
    ReadFailure {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to write {path}: {source}")]
    WriteFailure {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to render {path}: {source}")]
    Page { path: PathBuf, source: ParseError },
}

impl IoError {
    fn read(path: &Path, source: std::io::Error) -> Self {
        Self::ReadFailure {
            path: path.to_path_buf(),
            source,
        }
    }

    fn write(path: &Path, source: std::io::Error) -> Self {
        Self::WriteFailure {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Read a file and return its content
pub fn read_file(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::SourceMissing(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(|e| IoError::read(path, e))
}

/// Write content to a file, creating parent directories if they don't exist
pub fn write_file(path: &Path, content: &str) -> Result<(), IoError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| IoError::write(parent, e))?;
    }
    fs::write(path, content).map_err(|e| IoError::write(path, e))
}

/// Substitutes the first title and first content placeholder, verbatim.
///
/// The title is substituted first, so a title containing the content
/// placeholder takes the content in its place.
pub fn apply_template(template: &str, title: &str, content: &str) -> String {
    template
        .replacen(TITLE_PLACEHOLDER, title, 1)
        .replacen(CONTENT_PLACEHOLDER, content, 1)
}

/// Render one markdown file into `dest_path` using the template at `template_path`.
pub fn generate_page(
    markdown_path: &Path,
    template_path: &Path,
    dest_path: &Path,
) -> Result<(), IoError> {
    info!(
        "Generating page from {} to {} using {}",
        markdown_path.display(),
        dest_path.display(),
        template_path.display()
    );
    let markdown = read_file(markdown_path)?;
    let template = read_file(template_path)?;
    let page_error = |source| IoError::Page {
        path: markdown_path.to_path_buf(),
        source,
    };
    let html = markdown_to_html(&markdown).map_err(page_error)?;
    let title = extract_title(&markdown).map_err(page_error)?;
    write_file(dest_path, &apply_template(&template, &title, &html))
}

/// Scan for markdown files under `root`, sorted
pub fn scan_markdown_files(root: &Path) -> Result<Vec<PathBuf>, IoError> {
    Ok(scan_relative(root)?
        .iter()
        .map(|rel| rel.to_path(root))
        .collect())
}

/// Render every markdown file under `content_dir` into the same relative
/// location under `dest_dir`, with an `.html` extension.
///
/// Returns the generated paths in source order.
pub fn generate_pages_recursive(
    content_dir: &Path,
    template_path: &Path,
    dest_dir: &Path,
) -> Result<Vec<PathBuf>, IoError> {
    fs::create_dir_all(dest_dir).map_err(|e| IoError::write(dest_dir, e))?;

    let mut generated = Vec::new();
    for rel in scan_relative(content_dir)? {
        let dest = destination_for(&rel, dest_dir);
        generate_page(&rel.to_path(content_dir), template_path, &dest)?;
        generated.push(dest);
    }
    info!("Generated {} pages into {}", generated.len(), dest_dir.display());
    Ok(generated)
}

/// Replace `dest` with a recursive copy of `source`.
///
/// Returns the number of files copied.
pub fn copy_static(source: &Path, dest: &Path) -> Result<usize, IoError> {
    if !source.is_dir() {
        return Err(IoError::SourceMissing(source.to_path_buf()));
    }
    if dest.exists() {
        info!("Cleaning {}", dest.display());
        fs::remove_dir_all(dest).map_err(|e| IoError::write(dest, e))?;
    }
    fs::create_dir_all(dest).map_err(|e| IoError::write(dest, e))?;

    let copied = copy_directory_recursive(source, dest)?;
    info!(
        "Copied {copied} files from {} to {}",
        source.display(),
        dest.display()
    );
    Ok(copied)
}

fn destination_for(rel: &RelativePath, dest_dir: &Path) -> PathBuf {
    rel.with_extension(HTML_EXTENSION).to_path(dest_dir)
}

fn scan_relative(root: &Path) -> Result<Vec<RelativePathBuf>, IoError> {
    if !root.is_dir() {
        return Err(IoError::SourceMissing(root.to_path_buf()));
    }

    let mut files = Vec::new();
    scan_directory_recursive(root, &RelativePathBuf::new(), &mut files)?;
    files.sort();
    Ok(files)
}

fn scan_directory_recursive(
    root: &Path,
    dir: &RelativePath,
    files: &mut Vec<RelativePathBuf>,
) -> Result<(), IoError> {
    let abs = dir.to_path(root);
    for entry in sorted_entries(&abs)? {
        let Some(name) = entry.file_name().and_then(|n| n.to_str()) else {
            warn!("Skipping non UTF-8 path {}", entry.display());
            continue;
        };
        let rel = dir.join(name);

        if entry.is_dir() {
            scan_directory_recursive(root, &rel, files)?;
        } else if rel.extension() == Some(MARKDOWN_EXTENSION) {
            files.push(rel);
        }
    }

    Ok(())
}

fn copy_directory_recursive(source: &Path, dest: &Path) -> Result<usize, IoError> {
    let mut copied = 0;
    for entry in sorted_entries(source)? {
        let Some(name) = entry.file_name() else {
            continue;
        };
        let target = dest.join(name);

        if entry.is_dir() {
            debug!("Creating {}", target.display());
            fs::create_dir(&target).map_err(|e| IoError::write(&target, e))?;
            copied += copy_directory_recursive(&entry, &target)?;
        } else {
            debug!("Copying {} to {}", entry.display(), target.display());
            fs::copy(&entry, &target).map_err(|e| IoError::write(&target, e))?;
            copied += 1;
        }
    }
    Ok(copied)
}

fn sorted_entries(dir: &Path) -> Result<Vec<PathBuf>, IoError> {
    let mut paths = fs::read_dir(dir)
        .map_err(|e| IoError::read(dir, e))?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| IoError::read(dir, e))?;
    paths.sort();
    Ok(paths)
}
