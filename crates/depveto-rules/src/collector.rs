//! POM descriptor scanning: collects declared dependencies with the source
//! line of each declaration.
//!
//! Only the declarations literally present in the file are collected
//! (`<dependencies>` and `<dependencyManagement>`); no parent merging or
//! transitive resolution happens here.

use std::path::Path;

use quick_xml::events::Event;
use quick_xml::Reader;

use depveto_core::dependency::Dependency;
use depveto_util::errors::DepvetoError;

/// A dependency declaration located in a build descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedDependency {
    pub dependency: Dependency,
    /// 1-based line of the `<dependency>` element, when known.
    pub line: Option<u64>,
}

/// Read a `pom.xml` file and collect its dependency declarations.
pub fn scan_pom_file(path: &Path) -> miette::Result<Vec<ScannedDependency>> {
    let xml = std::fs::read_to_string(path).map_err(|e| DepvetoError::Descriptor {
        message: format!("Failed to read {}: {e}", path.display()),
    })?;
    scan_pom(&xml)
}

/// Collect dependency declarations from POM XML text.
///
/// A declaration without a `<version>` element is collected with an empty
/// version string; the matcher is total over it.
pub fn scan_pom(xml: &str) -> miette::Result<Vec<ScannedDependency>> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut collected = Vec::new();
    let mut path: Vec<String> = Vec::new();
    let mut text_buf = String::new();
    let mut current: Option<(Dependency, u64)> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => {
                let tag = String::from_utf8_lossy(e.name().as_ref()).to_string();
                path.push(tag);
                text_buf.clear();

                let ctx = path_context(&path);
                if ctx == "project>dependencies>dependency"
                    || ctx == "project>dependencyManagement>dependencies>dependency"
                {
                    let line = line_at(xml, reader.buffer_position());
                    current = Some((Dependency::new("", "", ""), line));
                }
            }
            Ok(Event::Text(ref e)) => {
                text_buf = e.unescape().unwrap_or_default().to_string();
            }
            Ok(Event::CData(ref e)) => {
                text_buf = String::from_utf8_lossy(e).to_string();
            }
            Ok(Event::End(_)) => {
                let ctx = path_context(&path);

                if let Some((ref mut dep, _)) = current {
                    match path.last().map(|s| s.as_str()) {
                        Some("groupId") if ctx.ends_with(">dependency>groupId") => {
                            dep.group_id = text_buf.clone();
                        }
                        Some("artifactId") if ctx.ends_with(">dependency>artifactId") => {
                            dep.artifact_id = text_buf.clone();
                        }
                        Some("version") if ctx.ends_with(">dependency>version") => {
                            dep.version = text_buf.clone();
                        }
                        _ => {}
                    }

                    if ctx == "project>dependencies>dependency"
                        || ctx == "project>dependencyManagement>dependencies>dependency"
                    {
                        if let Some((dep, line)) = current.take() {
                            if dep.group_id.is_empty() && dep.artifact_id.is_empty() {
                                tracing::debug!(line, "skipping empty <dependency> element");
                            } else {
                                collected.push(ScannedDependency {
                                    dependency: dep,
                                    line: Some(line),
                                });
                            }
                        }
                    }
                }

                path.pop();
                text_buf.clear();
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(DepvetoError::Descriptor {
                    message: format!("Failed to parse POM XML: {e}"),
                }
                .into());
            }
            _ => {}
        }
    }

    Ok(collected)
}

/// Build a context string from the current XML path for matching.
fn path_context(path: &[String]) -> String {
    path.join(">")
}

/// 1-based line for a byte offset into the scanned text.
fn line_at(xml: &str, offset: u64) -> u64 {
    let end = (offset as usize).min(xml.len());
    1 + xml.as_bytes()[..end].iter().filter(|&&b| b == b'\n').count() as u64
}
