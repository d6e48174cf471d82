//! Prompt composition for the answer generator.

use crate::types::{AnswerLanguage, RetrievedContext};

/// Build the single-shot prompt sent to the hosted model.
///
/// The fixed instruction, the raw question, and the retrieved passages are
/// concatenated in that order, passages newline-joined in retrieval rank
/// order. The grounded and ungrounded branches are deliberate: an absent
/// workspace produces a prompt with no context block at all.
#[must_use]
pub fn compose_prompt(
    question: &str,
    language: AnswerLanguage,
    context: &RetrievedContext,
) -> String {
    let mut prompt = format!(
        "You are a professional teacher. Explain in {} and include a Mermaid diagram where it helps understanding.\n\nQuestion: {question}\n",
        language.label()
    );

    if context.is_grounded() {
        prompt.push_str("\nUse the following study material as context:\n");
        prompt.push_str(&context.joined_text());
        prompt.push('\n');
    } else {
        prompt.push_str("\nNo study material is available; answer from general knowledge.\n");
    }

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RetrievedPassage;

    fn passage(rank: usize, text: &str) -> RetrievedPassage {
        RetrievedPassage {
            rank,
            score: 0.9,
            source: "notes.pdf".to_string(),
            page: 1,
            text: text.to_string(),
        }
    }

    #[test]
    fn grounded_prompt_contains_passages_in_rank_order() {
        let context =
            RetrievedContext::Present(vec![passage(1, "light energy"), passage(2, "chlorophyll")]);
        let prompt = compose_prompt("What is photosynthesis?", AnswerLanguage::English, &context);
        assert!(prompt.contains("Question: What is photosynthesis?"));
        assert!(prompt.contains("light energy\nchlorophyll"));
        assert!(prompt.contains("Explain in English"));
    }

    #[test]
    fn ungrounded_prompt_has_no_context_block() {
        let prompt = compose_prompt(
            "What is photosynthesis?",
            AnswerLanguage::Hinglish,
            &RetrievedContext::Absent,
        );
        assert!(!prompt.contains("study material as context"));
        assert!(prompt.contains("answer from general knowledge"));
        assert!(prompt.contains("Explain in Hinglish"));
    }
}
