//! Text processing and ranking module

pub mod document;
pub mod text_processor;
pub mod vectorizer;
pub mod ranker;
pub mod resume_parser;
pub mod matcher;
