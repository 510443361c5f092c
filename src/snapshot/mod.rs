pub mod coverage;
pub mod writer;

pub use coverage::coverage;
pub use writer::write_snapshot;
