pub mod assembler;
pub mod cursor;
pub mod decoder;
pub mod error;
pub mod flags;
pub mod instructions;
pub mod render;
pub mod source;
pub mod symbols;

pub use assembler::{assemble_str, AsmConfig, Assembler, Model};
pub use error::AsmError;
pub use flags::{RdaFlags, SkipFlags, ZeroMask};
pub use instructions::{ChoOp, Instruction, LfoSource, Target};
pub use symbols::{Constant, ConstantAlias, EquTable, MemRegion, MemTable};
