use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::AsmError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemRegion {
    pub label: String,
    pub offset: u32,
}

/// Delay-memory allocator. Regions are laid out back to back in declaration
/// order; `close` appends the unnamed sentinel at the running total.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemTable {
    pub regions: Vec<MemRegion>,
    pub top: u32,
}

impl MemTable {
    pub fn declare(
        &mut self,
        label: &str,
        size: u64,
        max_regions: usize,
        budget: u32,
    ) -> Result<(), AsmError> {
        if label.is_empty() {
            return Err(AsmError::MissingLabel("mem"));
        }
        if self.regions.len() >= max_regions {
            return Err(AsmError::TooMany("mem"));
        }
        let used = u64::from(self.top).saturating_add(size);
        if used > u64::from(budget) {
            return Err(AsmError::MemoryBudget { used, budget });
        }
        debug!(label, offset = self.top, size, "mem region");
        self.regions.push(MemRegion {
            label: label.to_string(),
            offset: self.top,
        });
        self.top = used as u32;
        Ok(())
    }

    pub(crate) fn close(&mut self) {
        self.regions.push(MemRegion {
            label: String::new(),
            offset: self.top,
        });
    }

    /// `(label, size)` of every declared region; needs the sentinel.
    pub fn sizes(&self) -> Vec<(&str, u32)> {
        self.regions
            .windows(2)
            .map(|w| (w[0].label.as_str(), w[1].offset - w[0].offset))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Constant {
    /// `equ name regN`
    Register(u8),
    /// `equ name <integer>`
    Literal(i64),
    /// Anything else; kept verbatim, never rendered.
    Unsupported(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstantAlias {
    pub label: String,
    pub value: Constant,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EquTable {
    pub aliases: Vec<ConstantAlias>,
}

impl EquTable {
    pub fn declare(
        &mut self,
        label: &str,
        value: Constant,
        max_aliases: usize,
    ) -> Result<(), AsmError> {
        if label.is_empty() {
            return Err(AsmError::MissingLabel("equ"));
        }
        if self.aliases.len() >= max_aliases {
            return Err(AsmError::TooMany("equ"));
        }
        debug!(label, ?value, "equ");
        self.aliases.push(ConstantAlias {
            label: label.to_string(),
            value,
        });
        Ok(())
    }
}
