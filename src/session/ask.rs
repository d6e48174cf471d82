//! Question answering: retrieve, compose, generate, append.

use std::time::Instant;

use super::Session;
use crate::embed::Embedder;
use crate::error::Result;
use crate::index::store;
use crate::llm::AnswerGenerator;
use crate::prompt::compose_prompt;
use crate::types::{AskRequest, AskResponse, AskStats, RetrievedContext, RetrievedPassage};

impl Session {
    /// Answer one question against the workspace and append the exchange.
    ///
    /// A missing workspace is not an error: retrieval reports an absent
    /// context and the model answers ungrounded. A corrupt workspace or a
    /// mismatched embedder is an error. The transcript gains the user and
    /// assistant messages only when generation succeeds.
    pub fn ask<E, G>(
        &mut self,
        request: AskRequest,
        embedder: &E,
        generator: &G,
    ) -> Result<AskResponse>
    where
        E: Embedder + ?Sized,
        G: AnswerGenerator + ?Sized,
    {
        let total_start = Instant::now();

        let retrieval_start = Instant::now();
        let context = self.retrieve(&request, embedder)?;
        let retrieval_ms = retrieval_start.elapsed().as_millis();

        let language = request.language.unwrap_or(self.language());
        let prompt = compose_prompt(&request.question, language, &context);

        let generation_start = Instant::now();
        let answer = generator.generate(&prompt)?;
        let generation_ms = generation_start.elapsed().as_millis();

        self.push_exchange(&request.question, &answer);

        Ok(AskResponse {
            question: request.question,
            answer,
            context,
            stats: AskStats {
                retrieval_ms,
                generation_ms,
                latency_ms: total_start.elapsed().as_millis(),
            },
        })
    }

    fn retrieve<E>(&self, request: &AskRequest, embedder: &E) -> Result<RetrievedContext>
    where
        E: Embedder + ?Sized,
    {
        if !store::exists(&self.config) {
            tracing::debug!(
                workspace = %self.config.workspace,
                "no persisted workspace, answering ungrounded"
            );
            return Ok(RetrievedContext::Absent);
        }

        let index = store::load(&self.config)?;
        index.ensure_compatible(embedder)?;

        let query_embedding = embedder.embed_query(&request.question)?;
        let hits = index.query(&query_embedding, request.top_k)?;
        let passages: Vec<RetrievedPassage> = hits
            .iter()
            .map(|hit| RetrievedPassage::from_chunk(hit.rank, hit.score, &hit.chunk))
            .collect();

        tracing::debug!(passages = passages.len(), "retrieval complete");
        Ok(RetrievedContext::Present(passages))
    }
}
