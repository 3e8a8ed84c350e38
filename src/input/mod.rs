//! Input processing module
//! Handles resume file reading and the job store collaborator

pub mod file_detector;
pub mod text_extractor;
pub mod manager;
pub mod job_store;
