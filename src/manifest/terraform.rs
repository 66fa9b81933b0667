//! Terraform configuration extractor
//!
//! Line-oriented extraction of module and provider declarations:
//! - `module "<name>" { ... }` blocks, taking `source` and `version` from the
//!   block's own attributes
//! - `provider "<name>"` lines, taking `version` only from the same line
//!
//! This is not an HCL parser. Block ends are found by counting braces that
//! appear outside string literals and comments.

use crate::domain::Dependency;
use crate::error::ManifestError;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;
use tracing::{debug, warn};

// module "vpc" {
static MODULE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\bmodule\s+"[^"]+"\s*\{"#).unwrap());

// source = "terraform-aws-modules/vpc/aws"
static SOURCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\bsource\s*=\s*["']([^"']+)["']"#).unwrap());

// version = "5.1.0"
static VERSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\bversion\s*=\s*["']([^"']+)["']"#).unwrap());

// provider "aws"
static PROVIDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\bprovider\s*["']([^"']+)["']"#).unwrap());

/// Extractor for `.tf` files
#[derive(Debug, Clone, Copy, Default)]
pub struct TerraformParser;

/// A module block that has been opened but not yet closed
struct OpenModule {
    depth: i64,
    source: Option<String>,
    version: String,
    line: usize,
}

impl OpenModule {
    /// Capture `source` and `version` from the block's own attributes on a line
    fn capture(&mut self, line: &str) {
        let text = own_attributes(line);
        if let Some(caps) = SOURCE_RE.captures(&text) {
            self.source = Some(caps[1].to_string());
        }
        if let Some(caps) = VERSION_RE.captures(&text) {
            self.version = caps[1].to_string();
        }
    }

    fn finish(self) -> Option<Dependency> {
        match self.source {
            Some(source) => Some(Dependency::module(source, self.version).at_line(self.line)),
            None => {
                debug!("module block at line {} has no source, skipping", self.line);
                None
            }
        }
    }
}

impl TerraformParser {
    /// Extract module and provider declarations from file content
    pub fn parse(&self, content: &str) -> Vec<Dependency> {
        let mut dependencies = Vec::new();
        let mut open: Option<OpenModule> = None;

        for (idx, line) in content.lines().enumerate() {
            let line_no = idx + 1;

            if is_comment_line(line) {
                continue;
            }

            if let Some(module) = open.as_mut() {
                if module.depth == 1 {
                    module.capture(line);
                }
                module.depth += brace_delta(line);
                if module.depth <= 0 {
                    dependencies.extend(open.take().and_then(OpenModule::finish));
                }
                continue;
            }

            if let Some(m) = MODULE_RE.find(line) {
                // The match ends just past the opening brace.
                let rest = &line[m.end()..];
                let mut module = OpenModule {
                    depth: 1 + brace_delta(rest),
                    source: None,
                    version: String::new(),
                    line: line_no,
                };
                module.capture(rest);
                if module.depth <= 0 {
                    dependencies.extend(module.finish());
                } else {
                    open = Some(module);
                }
            } else if let Some(caps) = PROVIDER_RE.captures(line) {
                let version = VERSION_RE
                    .captures(line)
                    .map(|c| c[1].to_string())
                    .unwrap_or_default();
                dependencies.push(Dependency::provider(&caps[1], version).at_line(line_no));
            }
        }

        if let Some(module) = open {
            warn!("module block at line {} is not closed", module.line);
            dependencies.extend(module.finish());
        }

        dependencies
    }

    /// Read a file and extract its declarations
    ///
    /// Bytes that are not valid UTF-8 are replaced rather than rejected.
    pub fn parse_file(&self, path: &Path) -> Result<Vec<Dependency>, ManifestError> {
        let bytes = std::fs::read(path).map_err(|e| ManifestError::read_error(path, e))?;
        let content = String::from_utf8_lossy(&bytes);
        let dependencies = self.parse(&content);

        for dep in &dependencies {
            debug!("{}:{}: found {}", path.display(), dep.line, dep);
        }

        Ok(dependencies)
    }
}

/// Returns true for lines that are entirely a `#` or `//` comment
fn is_comment_line(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.starts_with('#') || trimmed.starts_with("//")
}

/// Text of a line that sits at the line's starting brace depth
///
/// Nested `{ ... }` bodies are replaced by a space and scanning stops at a
/// closing brace of the enclosing block or at a trailing comment.
fn own_attributes(line: &str) -> String {
    let mut text = String::with_capacity(line.len());
    let mut depth = 0usize;
    let mut in_string = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        if in_string {
            if depth == 0 {
                text.push(ch);
            }
            match ch {
                '\\' => {
                    if let Some(escaped) = chars.next() {
                        if depth == 0 {
                            text.push(escaped);
                        }
                    }
                }
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match ch {
            '#' => break,
            '/' if chars.peek() == Some(&'/') => break,
            '{' => {
                if depth == 0 {
                    text.push(' ');
                }
                depth += 1;
            }
            '}' if depth == 0 => break,
            '}' => depth -= 1,
            _ => {
                if ch == '"' {
                    in_string = true;
                }
                if depth == 0 {
                    text.push(ch);
                }
            }
        }
    }

    text
}

/// Net change in brace depth over a line, ignoring strings and trailing comments
fn brace_delta(line: &str) -> i64 {
    let mut delta = 0;
    let mut in_string = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        if in_string {
            match ch {
                '\\' => {
                    chars.next();
                }
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match ch {
            '"' => in_string = true,
            '#' => break,
            '/' if chars.peek() == Some(&'/') => break,
            '{' => delta += 1,
            '}' => delta -= 1,
            _ => {}
        }
    }

    delta
}
