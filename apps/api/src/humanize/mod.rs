//! Humanization pipeline — chunking, prompting, and post-processing around
//! the completion client.

pub mod chunker;
pub mod handlers;
pub mod lexicon;
pub mod metrics;
pub mod pipeline;
pub mod post_process;
pub mod prompts;
