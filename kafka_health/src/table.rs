mod numeric;
mod parser;
mod record;
mod record_store;
mod render;

pub use numeric::*;
pub use parser::*;
pub use record::*;
pub use record_store::*;
pub use render::*;
