//! Custom extractors that reject with `AppError` instead of plain text.

mod json_body;
mod path_id;

pub use json_body::JsonBody;
pub use path_id::PathId;
