pub mod parse;
mod reader;
mod trace;

pub use reader::SvgAreaReader;
pub use trace::{trace_path, MapPath, MapTransform};
