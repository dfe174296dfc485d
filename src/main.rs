//! docsplit-rs CLI application
//!
//! Command-line interface for the docsplit-rs library.

use clap::{Parser, Subcommand};
use docsplit_rs::{
    ChunkPipeline, Config, Document, DocumentLoader, PdfFileLoader, TextFileLoader, utils,
};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "docsplit-rs")]
#[command(about = "Load text and PDF documents and split them into fixed-size overlapping chunks")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load documents and split them into chunks
    Split {
        /// Input file(s) or directories to load
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Chunk size in characters
        #[arg(long, default_value = "1000")]
        chunk_size: usize,

        /// Overlap between chunks in characters
        #[arg(long, default_value = "200")]
        overlap: usize,

        /// Text encoding label for .txt sources
        #[arg(long, default_value = "utf-8")]
        encoding: String,

        /// Number of chunks to preview from each end
        #[arg(long, default_value = "2")]
        preview: usize,

        /// Emit statistics and chunks as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Load documents and print per-document statistics
    Stats {
        /// Input file or directory to inspect
        path: PathBuf,

        /// Text encoding label for .txt sources
        #[arg(long, default_value = "utf-8")]
        encoding: String,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Split {
            inputs,
            chunk_size,
            overlap,
            encoding,
            preview,
            json,
        } => {
            split_command(inputs, chunk_size, overlap, encoding, preview, json)?;
        }
        Commands::Stats { path, encoding } => {
            stats_command(path, encoding)?;
        }
    }

    Ok(())
}

fn split_command(
    inputs: Vec<PathBuf>,
    chunk_size: usize,
    overlap: usize,
    encoding: String,
    preview: usize,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = Config::default();
    config.splitter.chunk_size = chunk_size;
    config.splitter.chunk_overlap = overlap;
    config.loader.encoding = encoding;

    let mut pipeline = ChunkPipeline::new(Some(config))?;

    let progress = ProgressBar::new(inputs.len() as u64);
    progress.set_style(ProgressStyle::with_template(
        "{bar:40.cyan/blue} {pos}/{len} {msg}",
    )?);

    for input in &inputs {
        progress.set_message(input.display().to_string());

        if input.is_dir() {
            // Directories may hold both kinds of sources
            pipeline.add_text_source(input)?;
            pipeline.add_pdf_source(input)?;
        } else if utils::has_extension(input, "pdf") {
            pipeline.add_pdf_source(input)?;
        } else if utils::has_extension(input, "txt") {
            pipeline.add_text_source(input)?;
        } else {
            progress.suspend(|| {
                eprintln!("❌ Unsupported input: {}", input.display());
            });
        }

        progress.inc(1);
    }
    progress.finish_and_clear();

    if pipeline.document_count() == 0 {
        eprintln!("❌ No documents were loaded");
        return Ok(());
    }

    let (chunks, stats) = pipeline.run();

    if json {
        let output = serde_json::json!({ "stats": stats, "chunks": chunks });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("✅ Split complete!");
    println!("   📄 Documents: {}", stats.total_documents);
    println!("   📊 Chunks: {}", stats.total_chunks);
    println!("   🔤 Characters: {}", stats.total_chars);
    println!("   ⏱️  Time: {:.3}s", stats.processing_time);
    println!();

    print_previews(&chunks, preview);

    Ok(())
}

/// Print the first and last `preview` chunks, separator-delimited
fn print_previews(chunks: &[String], preview: usize) {
    if preview == 0 || chunks.is_empty() {
        return;
    }

    let head = preview.min(chunks.len());
    for chunk in &chunks[..head] {
        println!("{}", chunk);
        println!("--------");
    }

    let tail_start = chunks.len().saturating_sub(preview).max(head);
    if tail_start > head {
        println!("... {} chunks omitted ...", tail_start - head);
        println!("--------");
    }
    for chunk in &chunks[tail_start..] {
        println!("{}", chunk);
        println!("--------");
    }
}

fn stats_command(path: PathBuf, encoding: String) -> Result<(), Box<dyn std::error::Error>> {
    let documents: Vec<Document> = if path.is_dir() {
        let mut documents = TextFileLoader::with_encoding(&path, &encoding)?.load_documents()?;
        documents.extend(PdfFileLoader::new(&path).load_documents()?);
        documents
    } else if utils::has_extension(&path, "pdf") {
        PdfFileLoader::new(&path).load_documents()?
    } else {
        TextFileLoader::with_encoding(&path, &encoding)?.load_documents()?
    };

    if documents.is_empty() {
        println!("❌ No documents found under {}", path.display());
        return Ok(());
    }

    println!("📋 {} documents:", documents.len());
    let mut total_chars = 0;
    for document in &documents {
        let chars = document.char_count();
        total_chars += chars;

        let label = document
            .source
            .as_ref()
            .map(|s| s.display().to_string())
            .unwrap_or_else(|| "<memory>".to_string());
        println!(
            "   {}: {} chars ({})",
            label,
            chars,
            utils::format_file_size(document.text.len() as u64)
        );
    }

    println!();
    println!("   🔤 Total characters: {}", total_chars);

    Ok(())
}
