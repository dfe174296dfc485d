//! Integration tests
//!
//! End-to-end coverage for the loader -> splitter flow over real temporary
//! files, including PDF extraction through the production lopdf backend.

use docsplit_rs::{
    CharacterTextSplitter, ChunkPipeline, Config, DocsplitError, DocumentLoader, PdfFileLoader,
    SplitterConfig, TextFileLoader,
};
use lopdf::content::{Content, Operation};
use lopdf::{Document as PdfDocument, Object, Stream, dictionary};
use std::fs;
use std::path::Path;

/// Build a minimal PDF with one page per text and save it to `path`
fn write_pdf(path: &Path, page_texts: &[&str]) {
    let mut doc = PdfDocument::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut kids: Vec<Object> = Vec::new();
    for text in page_texts {
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 24.into()]),
                Operation::new("Td", vec![100.into(), 600.into()]),
                Operation::new("Tj", vec![Object::string_literal(*text)]),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            content.encode().expect("encode page content"),
        ));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    doc.save(path).expect("save test pdf");
}

#[test]
fn test_text_directory_end_to_end() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    fs::write(dir.path().join("a.txt"), "hello")?;
    fs::create_dir(dir.path().join("b"))?;
    fs::write(dir.path().join("b").join("b.txt"), "world")?;
    fs::write(dir.path().join("skipped.log"), "not loaded")?;

    let config = Config {
        splitter: SplitterConfig {
            chunk_size: 4,
            chunk_overlap: 1,
        },
        ..Config::default()
    };

    let mut pipeline = ChunkPipeline::new(Some(config))?;
    let added = pipeline.add_text_source(dir.path())?;
    assert_eq!(added, 2);

    let (chunks, stats) = pipeline.run();
    assert_eq!(chunks, ["hell", "lo", "worl", "ld"]);
    assert_eq!(stats.total_documents, 2);
    assert_eq!(stats.total_chunks, 4);
    assert_eq!(stats.total_chars, 10);

    Ok(())
}

#[test]
fn test_loader_and_splitter_compose_through_strings() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    fs::write(dir.path().join("one.txt"), "ABCDEFGHIJ")?;

    // The two components meet only at the plain string-list contract
    let loader = TextFileLoader::new(dir.path());
    let documents = loader.load_documents()?;
    let texts: Vec<&str> = documents.iter().map(|d| d.text.as_str()).collect();

    let splitter = CharacterTextSplitter::new(4, 1)?;
    let chunks = splitter.split_texts(&texts);
    assert_eq!(chunks, ["ABCD", "DEFG", "GHIJ", "J"]);

    Ok(())
}

#[test]
fn test_pdf_extraction_round_trip() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let pdf_path = dir.path().join("two_pages.pdf");
    write_pdf(&pdf_path, &["Alpha", "Beta"]);

    let loader = PdfFileLoader::new(&pdf_path);
    let documents = loader.load_documents()?;

    assert_eq!(documents.len(), 1);
    let text = &documents[0].text;

    // Page texts appear in page order within the single document
    let alpha = text.find("Alpha").expect("first page text present");
    let beta = text.find("Beta").expect("second page text present");
    assert!(alpha < beta);
    assert_eq!(documents[0].source.as_deref(), Some(pdf_path.as_path()));

    Ok(())
}

#[test]
fn test_pdf_directory_discovery() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    write_pdf(&dir.path().join("a.pdf"), &["First document"]);
    fs::create_dir(dir.path().join("nested"))?;
    write_pdf(&dir.path().join("nested").join("b.pdf"), &["Second document"]);
    fs::write(dir.path().join("ignored.txt"), "not a pdf")?;

    let loader = PdfFileLoader::new(dir.path());
    let documents = loader.load_documents()?;

    assert_eq!(documents.len(), 2);
    assert!(documents[0].text.contains("First"));
    assert!(documents[1].text.contains("Second"));

    Ok(())
}

#[test]
fn test_mixed_sources_preserve_supply_order() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    fs::write(dir.path().join("notes.txt"), "plain text notes")?;
    let pdf_path = dir.path().join("report.pdf");
    write_pdf(&pdf_path, &["report body"]);

    let mut pipeline = ChunkPipeline::new(None)?;
    pipeline.add_text_source(dir.path().join("notes.txt"))?;
    pipeline.add_pdf_source(&pdf_path)?;

    let documents = pipeline.documents();
    assert_eq!(documents.len(), 2);
    assert_eq!(documents[0].text, "plain text notes");
    assert!(documents[1].text.contains("report"));

    Ok(())
}

#[test]
fn test_invalid_inputs_fail_loud() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing");

    let text_loader = TextFileLoader::new(&missing);
    assert!(matches!(
        text_loader.load_documents(),
        Err(DocsplitError::InvalidInput(_))
    ));

    let pdf_loader = PdfFileLoader::new(&missing);
    assert!(matches!(
        pdf_loader.load_documents(),
        Err(DocsplitError::InvalidInput(_))
    ));
}

#[test]
fn test_directory_loads_are_deterministic() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    for name in ["c.txt", "a.txt", "b.txt"] {
        fs::write(dir.path().join(name), name)?;
    }

    let loader = TextFileLoader::new(dir.path());
    let first = loader.load_documents()?;
    let second = loader.load_documents()?;

    assert_eq!(first, second);

    // Sorted traversal: file-name order, independent of creation order
    let texts: Vec<&str> = first.iter().map(|d| d.text.as_str()).collect();
    assert_eq!(texts, ["a.txt", "b.txt", "c.txt"]);

    Ok(())
}
