//! relata-openai
//!
//! Prompt assembly and OpenAI chat-completion invocation.

pub mod client;
pub mod error;
pub mod prompt;
