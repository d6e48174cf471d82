//! Persisted workspace behavior across sessions.

mod common;

use common::{CannedGenerator, FakeEmbedder, make_pdf};
use scholar_core::{
    AskRequest, Embedder, Result, ScholarError, Session, Upload, WorkspaceConfig,
};
use tempfile::tempdir;

#[test]
fn fresh_session_retrieves_verbatim_text_from_persisted_index() {
    let dir = tempdir().expect("tmp");
    let config = WorkspaceConfig::new(dir.path(), "General");

    {
        let mut session = Session::new(config.clone());
        let uploads = vec![
            Upload::new("physics.pdf", make_pdf("Momentum is mass times velocity.")),
            Upload::new("chem.txt", b"Atoms bond by sharing electrons.".to_vec()),
        ];
        session.sync(&uploads, &FakeEmbedder).expect("sync");
    }

    // a brand-new session over the same workspace reads the persisted index
    let mut session = Session::new(config);
    let generator = CannedGenerator::new("answer");
    let response = session
        .ask(
            AskRequest::new("Momentum is mass times velocity."),
            &FakeEmbedder,
            &generator,
        )
        .expect("ask");

    assert!(response.context.is_grounded());
    let top = &response.context.passages()[0];
    assert!(top.text.contains("Momentum"));
    assert_eq!(top.source, "physics.pdf");
    assert_eq!(top.page, 1);
}

#[test]
fn workspaces_are_independent() {
    let dir = tempdir().expect("tmp");
    let generator = CannedGenerator::new("answer");

    let mut biology = Session::new(WorkspaceConfig::new(dir.path(), "Biology"));
    biology
        .sync(
            &[Upload::new("bio.txt", b"Ribosomes build proteins.".to_vec())],
            &FakeEmbedder,
        )
        .expect("sync biology");

    // the History workspace has never been synced
    let mut history = Session::new(WorkspaceConfig::new(dir.path(), "History"));
    assert!(!history.has_synced_workspace());
    let response = history
        .ask(AskRequest::new("Ribosomes?"), &FakeEmbedder, &generator)
        .expect("ask");
    assert!(!response.context.is_grounded());

    // while Biology answers grounded
    let response = biology
        .ask(AskRequest::new("Ribosomes?"), &FakeEmbedder, &generator)
        .expect("ask");
    assert!(response.context.joined_text().contains("Ribosomes"));
}

#[test]
fn mismatched_embedder_model_is_refused_at_ask_time() {
    struct OtherModel;

    impl Embedder for OtherModel {
        fn model_name(&self) -> &str {
            "some-other-model"
        }
        fn dimension(&self) -> usize {
            64
        }
        fn embed_query(&self, _text: &str) -> Result<Vec<f32>> {
            Ok(vec![0.0; 64])
        }
    }

    let dir = tempdir().expect("tmp");
    let mut session = Session::new(WorkspaceConfig::new(dir.path(), "General"));
    session
        .sync(
            &[Upload::new("notes.txt", b"Enzymes lower activation energy.".to_vec())],
            &FakeEmbedder,
        )
        .expect("sync");

    let generator = CannedGenerator::new("answer");
    let err = session
        .ask(AskRequest::new("Enzymes?"), &OtherModel, &generator)
        .expect_err("must refuse");
    assert!(matches!(err, ScholarError::EmbeddingModelMismatch { .. }));
    // nothing was appended for the failed exchange
    assert!(session.messages().is_empty());
}

#[test]
fn corrupt_workspace_is_an_error_not_a_silent_fallback() {
    let dir = tempdir().expect("tmp");
    let config = WorkspaceConfig::new(dir.path(), "General");
    let mut session = Session::new(config.clone());
    session
        .sync(
            &[Upload::new("notes.txt", b"Gravity bends spacetime.".to_vec())],
            &FakeEmbedder,
        )
        .expect("sync");

    // truncate the data file behind the manifest's back
    fs_err::write(config.vectors_path(), b"").expect("truncate");

    let generator = CannedGenerator::new("answer");
    let err = session
        .ask(AskRequest::new("Gravity?"), &FakeEmbedder, &generator)
        .expect_err("must surface corruption");
    assert!(matches!(err, ScholarError::IndexCorrupt { .. }));
}
