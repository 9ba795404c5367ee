pub mod alloc;
pub mod dice;
pub mod error;
pub mod lookup;
pub mod parser;
pub mod records;
pub mod registry;
pub mod tables;

pub use alloc::{AllocEntry, AllocTable, AllocTables, init_alloc};
pub use error::{FinishError, LoadError, ParseError, ParseErrorKind, RegError};
pub use parser::{Fields, Parser};
pub use records::{DenseTable, Records};
pub use registry::{
    DataSource, FileSource, GameContent, LoadOptions, LoadReport, MemorySource, init_arrays,
    load_dir, run_parser,
};
pub use tables::FileParser;
