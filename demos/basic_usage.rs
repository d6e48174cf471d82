//! Basic usage example: sync a document, ask a question, inspect the
//! transcript.
//!
//! Talks to real hosted services, so it needs credentials:
//!
//! ```bash
//! export SCHOLAR_API_KEY=...        # chat completions (Groq-compatible)
//! export SCHOLAR_EMBED_API_KEY=...  # embeddings (OpenAI-compatible)
//! cargo run --example basic_usage -- /path/to/notes.pdf
//! ```

use std::env;
use std::path::PathBuf;

use tempfile::tempdir;

use scholar_core::{
    ApiEmbedder, AskRequest, ChatClient, ChatConfig, EmbedderConfig, Result, Session, Upload,
    WorkspaceConfig,
};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: cargo run --example basic_usage -- /path/to/notes.pdf");
        return Ok(());
    }
    let chat_config = ChatConfig::from_env();
    if chat_config.api_key.is_none() {
        eprintln!("Set SCHOLAR_API_KEY (and optionally SCHOLAR_EMBED_API_KEY) first.");
        return Ok(());
    }

    let upload_path = PathBuf::from(&args[1]);
    let name = upload_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "notes.pdf".to_string());
    let bytes = std::fs::read(&upload_path)?;

    // Keep the demo's workspace out of the working directory
    let dir = tempdir().expect("failed to create temp dir");

    println!("=== Scholar Core Basic Usage ===\n");

    // ========================================
    // 1. CREATE a session over a workspace
    // ========================================
    let mut session = Session::new(WorkspaceConfig::new(dir.path(), "General"));
    println!("1. Session opened on workspace {:?}", session.workspace().dir());

    // ========================================
    // 2. SYNC the uploaded document
    // ========================================
    let embedder = ApiEmbedder::new(EmbedderConfig::from_env())?;
    let report = session.sync(&[Upload::new(&name, bytes)], &embedder)?;
    println!(
        "2. Synced {} document(s): {} pages, {} chunks in {}ms\n",
        report.documents, report.pages, report.chunks, report.elapsed_ms
    );

    // ========================================
    // 3. ASK a question against the notes
    // ========================================
    let generator = ChatClient::new(chat_config)?;
    let response = session.ask(
        AskRequest::new("Summarize the key idea of these notes."),
        &embedder,
        &generator,
    )?;
    println!("3. Grounded: {}", response.context.is_grounded());
    for passage in response.context.passages() {
        let preview: String = passage.text.chars().take(60).collect();
        println!(
            "   [{}] {} p.{} (score {:.3}): {}...",
            passage.rank, passage.source, passage.page, passage.score, preview
        );
    }
    println!("\n   Answer: {}\n", response.answer);

    // ========================================
    // 4. TRANSCRIPT
    // ========================================
    println!("4. Transcript has {} messages", session.messages().len());
    session.clear();
    println!("   Cleared; workspace still synced: {}", session.has_synced_workspace());

    Ok(())
}
