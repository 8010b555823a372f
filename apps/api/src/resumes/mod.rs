// Resume API: upload → store → OCR → analyze, plus interviewer-side retrieval.
// All analysis goes through crate::analysis; this module only orchestrates I/O.

pub mod handlers;
pub mod store;
pub mod workflow;
