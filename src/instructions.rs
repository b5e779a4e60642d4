use serde::{Deserialize, Serialize};

use crate::flags::{RdaFlags, SkipFlags};

/// Operand that is either a number or a label name, stored unresolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Target {
    Literal(u32),
    Symbolic(String),
}

/// LFO feeding a `cho` instruction; the discriminant is its 2-bit index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LfoSource {
    Sin0 = 0,
    Sin1 = 1,
    Rmp0 = 2,
    Rmp1 = 3,
}

impl LfoSource {
    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(n: u8) -> Option<Self> {
        match n {
            0 => Some(Self::Sin0),
            1 => Some(Self::Sin1),
            2 => Some(Self::Rmp0),
            3 => Some(Self::Rmp1),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChoOp {
    Rda {
        source: LfoSource,
        flags: RdaFlags,
        addr: Option<Target>,
    },
    // Not decoded yet; operand text is carried through as written.
    Rdal { operands: String },
    Sof { operands: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Instruction {
    Label { name: String },
    Skp { flags: SkipFlags, target: Target },
    Wlds { sin: u8, freq: u16, amp: u16 },
    Cho(ChoOp),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mnemonic {
    Mem,
    Equ,
    Skp,
    Wlds,
    Cho,
}

#[derive(Debug, Clone, Copy)]
pub struct InstrDesc {
    pub op: Mnemonic,
    pub mnemonic: &'static str,
}

pub const TABLE: &[InstrDesc] = &[
    InstrDesc {
        op: Mnemonic::Mem,
        mnemonic: Mnemonic::Mem.text(),
    },
    InstrDesc {
        op: Mnemonic::Equ,
        mnemonic: Mnemonic::Equ.text(),
    },
    InstrDesc {
        op: Mnemonic::Skp,
        mnemonic: Mnemonic::Skp.text(),
    },
    InstrDesc {
        op: Mnemonic::Wlds,
        mnemonic: Mnemonic::Wlds.text(),
    },
    InstrDesc {
        op: Mnemonic::Cho,
        mnemonic: Mnemonic::Cho.text(),
    },
];

impl Mnemonic {
    /// Source spelling, shared by the lookup table and the renderer.
    pub const fn text(self) -> &'static str {
        match self {
            Mnemonic::Mem => "mem",
            Mnemonic::Equ => "equ",
            Mnemonic::Skp => "skp",
            Mnemonic::Wlds => "wlds",
            Mnemonic::Cho => "cho",
        }
    }
}
