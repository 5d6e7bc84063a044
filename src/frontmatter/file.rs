use std::{fs, path::Path};

use crate::{
    frontmatter::{FrontmatterStore, LocationData},
    prelude::*,
};

/// Stores location data in the note file's own frontmatter block.
///
/// Only the `lat`, `lon` and `address` lines are ever touched; all other
/// metadata lines and the note body are preserved byte-for-byte.
#[must_use]
pub struct FileStore;

impl FrontmatterStore for FileStore {
    fn has_location(&self, path: &Path) -> Result<bool> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read `{}`", path.display()))?;
        let note = Note::parse(&content);
        Ok(note.metadata.iter().any(|line| is_key(line, "lat") || is_key(line, "lon")))
    }

    fn write_location(&self, path: &Path, data: &LocationData) -> Result {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read `{}`", path.display()))?;
        let mut note = Note::parse(&content);
        note.upsert("lat", &data.lat.to_string());
        note.upsert("lon", &data.lon.to_string());
        if let Some(address) = &data.address {
            note.upsert("address", &quote(address));
        }
        fs::write(path, note.render())
            .with_context(|| format!("failed to write `{}`", path.display()))
    }
}

/// Note split into metadata lines and an untouched body.
struct Note<'a> {
    metadata: Vec<String>,
    body: &'a str,
}

impl<'a> Note<'a> {
    fn parse(content: &'a str) -> Self {
        if let Some(rest) = content.strip_prefix("---\n") {
            if rest == "---" {
                return Self { metadata: Vec::new(), body: "" };
            }
            if let Some(body) = rest.strip_prefix("---\n") {
                return Self { metadata: Vec::new(), body };
            }
            if let Some((block, body)) = rest.split_once("\n---\n") {
                return Self { metadata: block.lines().map(str::to_owned).collect(), body };
            }
            if let Some(block) = rest.strip_suffix("\n---") {
                return Self { metadata: block.lines().map(str::to_owned).collect(), body: "" };
            }
        }
        Self { metadata: Vec::new(), body: content }
    }

    /// Replace the value of `key` in place, or append the key at the end of
    /// the block.
    fn upsert(&mut self, key: &str, value: &str) {
        let line = format!("{key}: {value}");
        match self.metadata.iter_mut().find(|existing| is_key(existing, key)) {
            Some(existing) => *existing = line,
            None => self.metadata.push(line),
        }
    }

    fn render(&self) -> String {
        let mut content = String::from("---\n");
        for line in &self.metadata {
            content.push_str(line);
            content.push('\n');
        }
        content.push_str("---\n");
        content.push_str(self.body);
        content
    }
}

/// Whether the metadata line defines `key` at the top level.
fn is_key(line: &str, key: &str) -> bool {
    line.strip_prefix(key).is_some_and(|rest| rest.trim_start().starts_with(':'))
}

/// Double-quoted YAML scalar.
fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
}
