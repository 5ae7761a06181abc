//! Document text extraction. Never fails: anything that cannot be read
//! yields empty text and a warning.

use std::panic::{catch_unwind, AssertUnwindSafe};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

pub const MIME_PDF: &str = "application/pdf";
pub const MIME_DOCX: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
pub const MIME_TEXT: &str = "text/plain";
const MIME_OCTET_STREAM: &str = "application/octet-stream";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Pdf,
    Docx,
    Text,
    Unsupported,
}

impl DocumentKind {
    /// Resolves the kind from the declared media type. When the type is absent
    /// or generic, the file-name extension decides.
    pub fn detect(content_type: Option<&str>, file_name: Option<&str>) -> Self {
        let essence = content_type
            .and_then(|ct| ct.split(';').next())
            .map(|ct| ct.trim().to_ascii_lowercase())
            .filter(|ct| !ct.is_empty());

        match essence.as_deref() {
            Some(MIME_PDF) => DocumentKind::Pdf,
            Some(MIME_DOCX) => DocumentKind::Docx,
            Some(MIME_TEXT) => DocumentKind::Text,
            None | Some(MIME_OCTET_STREAM) => Self::from_extension(file_name),
            Some(_) => DocumentKind::Unsupported,
        }
    }

    fn from_extension(file_name: Option<&str>) -> Self {
        let extension = file_name
            .and_then(|name| std::path::Path::new(name).extension())
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "pdf" => DocumentKind::Pdf,
            "docx" => DocumentKind::Docx,
            "txt" => DocumentKind::Text,
            _ => DocumentKind::Unsupported,
        }
    }
}

/// Extracts raw text from document bytes of the given kind.
pub fn extract_text(kind: DocumentKind, data: &[u8]) -> String {
    let result = match kind {
        DocumentKind::Pdf => extract_pdf_text(data),
        DocumentKind::Docx => extract_docx_text(data),
        DocumentKind::Text => {
            String::from_utf8(data.to_vec()).map_err(|e| format!("Invalid UTF-8 content: {e}"))
        }
        DocumentKind::Unsupported => {
            warn!("Unsupported document type, continuing with empty text");
            return String::new();
        }
    };

    match result {
        Ok(text) => {
            info!("Extracted {} characters from {:?} document", text.len(), kind);
            text
        }
        Err(e) => {
            warn!("Text extraction failed for {:?} document: {e}", kind);
            String::new()
        }
    }
}

/// Page texts concatenated in document order.
fn extract_pdf_text(data: &[u8]) -> Result<String, String> {
    // pdf-extract panics on some malformed inputs instead of returning an error.
    match catch_unwind(AssertUnwindSafe(|| pdf_extract::extract_text_from_mem(data))) {
        Ok(Ok(text)) => Ok(text),
        Ok(Err(e)) => Err(format!("Failed to extract PDF text: {e}")),
        Err(_) => Err("PDF parser panicked on malformed input".to_string()),
    }
}

/// Paragraph texts joined by newlines, including paragraphs nested in tables.
fn extract_docx_text(data: &[u8]) -> Result<String, String> {
    let docx = docx_rs::read_docx(data).map_err(|e| format!("Failed to read DOCX: {e}"))?;

    let mut lines = Vec::new();
    for child in &docx.document.children {
        match child {
            docx_rs::DocumentChild::Paragraph(para) => lines.push(paragraph_text(para)),
            docx_rs::DocumentChild::Table(table) => collect_table_text(table, &mut lines),
            _ => {}
        }
    }

    Ok(lines.join("\n"))
}

/// One line per cell paragraph, rows and cells in document order.
fn collect_table_text(table: &docx_rs::Table, lines: &mut Vec<String>) {
    for docx_rs::TableChild::TableRow(row) in &table.rows {
        for docx_rs::TableRowChild::TableCell(cell) in &row.cells {
            for content in &cell.children {
                match content {
                    docx_rs::TableCellContent::Paragraph(para) => lines.push(paragraph_text(para)),
                    docx_rs::TableCellContent::Table(inner) => collect_table_text(inner, lines),
                    _ => {}
                }
            }
        }
    }
}

fn paragraph_text(para: &docx_rs::Paragraph) -> String {
    let mut text = String::new();
    for child in &para.children {
        append_paragraph_child(child, &mut text);
    }
    text
}

fn append_paragraph_child(child: &docx_rs::ParagraphChild, text: &mut String) {
    match child {
        docx_rs::ParagraphChild::Run(run) => {
            for rc in &run.children {
                if let docx_rs::RunChild::Text(t) = rc {
                    text.push_str(&t.text);
                }
            }
        }
        // link text lives in runs nested under the hyperlink
        docx_rs::ParagraphChild::Hyperlink(link) => {
            for inner in &link.children {
                append_paragraph_child(inner, text);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docx_rs::{Docx, Hyperlink, HyperlinkType, Paragraph, Run, Table, TableCell, TableRow};
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Document, Object, Stream};

    use crate::models::taxonomy::Taxonomy;
    use crate::screening::normalize::clean_text;
    use crate::screening::skills::extract_skills;

    /// One Helvetica text line per page.
    fn build_pdf(pages: &[&str]) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
            "Encoding" => "WinAnsiEncoding",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let mut kids: Vec<Object> = Vec::new();
        for text in pages {
            let content = Content {
                operations: vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 14.into()]),
                    Operation::new("Td", vec![72.into(), 720.into()]),
                    Operation::new("Tj", vec![Object::string_literal(*text)]),
                    Operation::new("ET", vec![]),
                ],
            };
            let content_id =
                doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            kids.push(page_id.into());
        }

        let page_count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => page_count,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut buf = Vec::new();
        doc.save_to(&mut buf).unwrap();
        buf
    }

    fn build_docx(paragraphs: &[&str]) -> Vec<u8> {
        let mut doc = Docx::new();
        for text in paragraphs {
            doc = doc.add_paragraph(Paragraph::new().add_run(Run::new().add_text(*text)));
        }
        let mut buf = std::io::Cursor::new(Vec::new());
        doc.build().pack(&mut buf).unwrap();
        buf.into_inner()
    }

    #[test]
    fn test_detect_by_declared_type() {
        assert_eq!(DocumentKind::detect(Some(MIME_PDF), None), DocumentKind::Pdf);
        assert_eq!(DocumentKind::detect(Some(MIME_DOCX), None), DocumentKind::Docx);
        assert_eq!(
            DocumentKind::detect(Some("Text/Plain; charset=utf-8"), None),
            DocumentKind::Text
        );
    }

    #[test]
    fn test_detect_declared_type_wins_over_extension() {
        assert_eq!(
            DocumentKind::detect(Some("image/png"), Some("resume.pdf")),
            DocumentKind::Unsupported
        );
    }

    #[test]
    fn test_detect_falls_back_to_extension() {
        assert_eq!(DocumentKind::detect(None, Some("CV.PDF")), DocumentKind::Pdf);
        assert_eq!(
            DocumentKind::detect(Some("application/octet-stream"), Some("cv.docx")),
            DocumentKind::Docx
        );
        assert_eq!(DocumentKind::detect(None, Some("cv.txt")), DocumentKind::Text);
        assert_eq!(DocumentKind::detect(None, Some("cv.odt")), DocumentKind::Unsupported);
        assert_eq!(DocumentKind::detect(None, None), DocumentKind::Unsupported);
    }

    #[test]
    fn test_plain_text_utf8() {
        let text = extract_text(DocumentKind::Text, "Python, SQL — café".as_bytes());
        assert_eq!(text, "Python, SQL — café");
    }

    #[test]
    fn test_invalid_utf8_yields_empty_text() {
        assert_eq!(extract_text(DocumentKind::Text, &[0xff, 0xfe, 0x00]), "");
    }

    #[test]
    fn test_unsupported_yields_empty_text() {
        assert_eq!(extract_text(DocumentKind::Unsupported, b"anything"), "");
    }

    #[test]
    fn test_malformed_pdf_yields_empty_text() {
        assert_eq!(extract_text(DocumentKind::Pdf, b"this is not a pdf"), "");
    }

    #[test]
    fn test_multi_page_pdf_text_in_page_order() {
        let data = build_pdf(&["Python developer", "Docker and Kubernetes"]);
        let text = extract_text(DocumentKind::Pdf, &data);

        let first = text.find("Python").expect("page one text");
        let second = text.find("Kubernetes").expect("page two text");
        assert!(first < second);

        let skills = extract_skills(&clean_text(&text), &Taxonomy::builtin());
        for skill in ["python", "docker", "kubernetes"] {
            assert!(skills.contains(skill), "missing {skill} in {text:?}");
        }
    }

    #[test]
    fn test_malformed_docx_yields_empty_text() {
        assert_eq!(extract_text(DocumentKind::Docx, b"PK not really a zip"), "");
    }

    #[test]
    fn test_docx_paragraphs_joined_by_newline() {
        let bytes = build_docx(&["Jane Doe", "Skills: Python, Docker"]);
        let text = extract_text(DocumentKind::Docx, &bytes);
        assert_eq!(text, "Jane Doe\nSkills: Python, Docker");
    }

    #[test]
    fn test_docx_table_cells_are_extracted() {
        let table = Table::new(vec![TableRow::new(vec![
            TableCell::new().add_paragraph(Paragraph::new().add_run(Run::new().add_text("Python"))),
            TableCell::new().add_paragraph(Paragraph::new().add_run(Run::new().add_text("Docker"))),
        ])]);
        let doc = Docx::new()
            .add_paragraph(Paragraph::new().add_run(Run::new().add_text("Jane Doe")))
            .add_table(table);
        let mut buf = std::io::Cursor::new(Vec::new());
        doc.build().pack(&mut buf).unwrap();

        let text = extract_text(DocumentKind::Docx, &buf.into_inner());
        let (name, python, docker) = (
            text.find("Jane Doe").unwrap(),
            text.find("Python").unwrap(),
            text.find("Docker").unwrap(),
        );
        assert!(name < python && python < docker, "got {text:?}");
    }

    #[test]
    fn test_docx_hyperlink_text_is_extracted() {
        let para = Paragraph::new()
            .add_run(Run::new().add_text("Portfolio: "))
            .add_hyperlink(
                Hyperlink::new("projects", HyperlinkType::Anchor)
                    .add_run(Run::new().add_text("Kubernetes demos")),
            );
        let doc = Docx::new().add_paragraph(para);
        let mut buf = std::io::Cursor::new(Vec::new());
        doc.build().pack(&mut buf).unwrap();

        let text = extract_text(DocumentKind::Docx, &buf.into_inner());
        assert!(text.contains("Kubernetes demos"), "got {text:?}");
    }
}
