//! relata-export
//!
//! DOCX generation from model output: markdown cleanup, paragraph
//! splitting, and document serialization.

pub mod docx;
pub mod error;
pub mod markdown;
pub mod styles;
