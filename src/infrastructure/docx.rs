//! Report template rendering

use crate::domain::ExportPayload;
use crate::error::{BerichtsheftError, Result};
use log::{debug, info};
use regex::{Captures, Regex};
use std::fs;
use std::io::{Cursor, Read, Write};
use std::path::Path;
use std::sync::OnceLock;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

/// Renders a template into a finished document
pub trait DocumentRenderer {
    fn render(&self, template: &[u8], payload: &ExportPayload) -> Result<Vec<u8>>;
}

/// Render the template at `template_path` with the engine matching its extension
pub fn render_document(template_path: &Path, payload: &ExportPayload) -> Result<Vec<u8>> {
    if !template_path.is_file() {
        return Err(BerichtsheftError::TemplateMissing(template_path.to_path_buf()));
    }

    let renderer = renderer_for(template_path)?;
    let template = fs::read(template_path)?;
    info!("rendering {}", template_path.display());
    renderer.render(&template, payload)
}

/// Pick the rendering engine for a template file
pub fn renderer_for(template_path: &Path) -> Result<Box<dyn DocumentRenderer>> {
    let extension = template_path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    match extension.as_str() {
        "docx" => Ok(Box::new(DocxRenderer)),
        _ => Err(BerichtsheftError::TemplateEngineUnavailable(format!(
            "no rendering engine for '{}'",
            template_path.display()
        ))),
    }
}

/// Fills `{{ FIELD }}` placeholders in a DOCX package.
///
/// Body, header and footer parts are rewritten; every other part of the
/// package is copied through unchanged.
#[derive(Debug, Default, Clone, Copy)]
pub struct DocxRenderer;

const DOCUMENT_PART: &str = "word/document.xml";

impl DocumentRenderer for DocxRenderer {
    fn render(&self, template: &[u8], payload: &ExportPayload) -> Result<Vec<u8>> {
        let mut archive = ZipArchive::new(Cursor::new(template))
            .map_err(|e| BerichtsheftError::Template(format!("not a DOCX package: {}", e)))?;

        if archive.by_name(DOCUMENT_PART).is_err() {
            return Err(BerichtsheftError::Template(format!(
                "missing {}",
                DOCUMENT_PART
            )));
        }

        let fields = payload.fields();
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        let options = FileOptions::default().compression_method(CompressionMethod::Deflated);

        for i in 0..archive.len() {
            let mut part = archive.by_index(i)?;
            let name = part.name().to_string();

            if is_text_part(&name) {
                let mut xml = String::new();
                part.read_to_string(&mut xml)?;
                let rendered = fill_placeholders(&xml, &fields);
                writer.start_file(name, options)?;
                writer.write_all(rendered.as_bytes())?;
            } else {
                writer.raw_copy_file(part)?;
            }
        }

        Ok(writer.finish()?.into_inner())
    }
}

fn is_text_part(name: &str) -> bool {
    if name == DOCUMENT_PART {
        return true;
    }
    let Some(leaf) = name.strip_prefix("word/") else {
        return false;
    };
    !leaf.contains('/')
        && leaf.ends_with(".xml")
        && (leaf.starts_with("header") || leaf.starts_with("footer"))
}

/// Matches `{{ ... }}`, tolerating markup the word processor inserted
/// anywhere between the braces, including inside the field name
fn placeholder_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(r"\{(?:<[^>]*>)*\{((?:[^{}<]|<[^>]*>)*?)\}(?:<[^>]*>)*\}").unwrap()
    })
}

fn markup_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"<[^>]*>|\s+").unwrap())
}

/// Field name inside the braces with markup and whitespace removed
fn placeholder_name(inner: &str) -> Option<String> {
    let name = markup_regex().replace_all(inner, "");
    let valid = name
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
    valid.then(|| name.into_owned())
}

/// Substitute known fields; unknown placeholders stay as written
pub fn fill_placeholders(xml: &str, fields: &[(&str, String)]) -> String {
    placeholder_regex()
        .replace_all(xml, |caps: &Captures| {
            let value = placeholder_name(&caps[1]).and_then(|name| {
                let found = fields.iter().find(|(field, _)| *field == name);
                if found.is_none() {
                    debug!("leaving unknown placeholder {} untouched", name);
                }
                found
            });
            match value {
                Some((_, value)) => text_to_xml(value),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

/// Escape text for a `w:t` element, turning newlines into line breaks
fn text_to_xml(text: &str) -> String {
    text.split('\n')
        .map(escape_xml)
        .collect::<Vec<_>>()
        .join("</w:t><w:br/><w:t xml:space=\"preserve\">")
}

fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
