//! HTTP adapter for the EduBot answer service.
//!
//! | Operation | Request |
//! |-----------|---------|
//! | ask | `PUT {base}/api/questions/` with `{session_id, question}` |
//! | feedback | `POST {base}/api/feedback/` with `{question, answer, feedback}` |

pub mod client;
pub mod error;
