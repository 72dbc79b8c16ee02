//! Full humanization pipeline: chunk → count → prompt → complete → post-process.

use tracing::{debug, warn};

use crate::errors::AppError;
use crate::humanize::chunker::chunk_text;
use crate::humanize::metrics::count_words;
use crate::humanize::post_process::humanize_text;
use crate::humanize::prompts::build_prompt;
use crate::llm_client::LlmClient;

/// Word-window size for completion calls.
const CHUNK_SIZE: usize = 100;
/// Words shared between neighboring chunks for coherence.
const CHUNK_OVERLAP: usize = 20;

/// Rewrites `paragraph` chunk by chunk and stitches the results together.
///
/// Each chunk is rewritten by the model, roughed up by the post-processor,
/// and normalized back to the chunk's own word count. A failed completion
/// does not fail the request: the error text flows through post-processing
/// in place of model output.
pub async fn humanize_paragraph(
    llm: &LlmClient,
    paragraph: &str,
    human_seed: &str,
) -> Result<String, AppError> {
    let chunks = chunk_text(paragraph, CHUNK_SIZE, CHUNK_OVERLAP);
    debug!("Humanizing {} chunk(s)", chunks.len());

    let mut humanized_chunks = Vec::with_capacity(chunks.len());
    for chunk in &chunks {
        let word_count = count_words(chunk);
        let prompt = build_prompt(chunk, human_seed);
        let max_tokens = ((word_count * 3) / 2).max(1) as u32;

        let raw = match llm.complete(&prompt, max_tokens).await {
            Ok(text) => text,
            Err(e) => {
                warn!("Completion failed for chunk, substituting error text: {e}");
                format!("Error generating text: {e}")
            }
        };

        // ThreadRng is !Send; keep it scoped between await points.
        let processed = {
            let mut rng = rand::thread_rng();
            humanize_text(&raw, word_count, &mut rng)
        };
        humanized_chunks.push(processed);
    }

    Ok(humanized_chunks.join(" "))
}
