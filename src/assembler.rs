use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::cursor::Cursor;
use crate::decoder::{decode_cho, decode_equ, decode_mem, decode_skp, decode_wlds};
use crate::error::AsmError;
use crate::instructions::{Instruction, Mnemonic, TABLE};
use crate::render::render_lines;
use crate::symbols::{EquTable, MemTable};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AsmConfig {
    pub memory_budget: u32, // delay memory, in samples
    pub max_mem: usize,
    pub max_equ: usize,
    pub max_instructions: usize,
    pub max_line_len: usize,
}

impl Default for AsmConfig {
    fn default() -> Self {
        Self {
            memory_budget: 32768,
            max_mem: 255,
            max_equ: 256,
            max_instructions: 256,
            max_line_len: 1024,
        }
    }
}

/// Everything parsed from one source, in declaration order. The memory table
/// ends with the sentinel region.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Model {
    pub mem: MemTable,
    pub equ: EquTable,
    pub instructions: Vec<Instruction>,
}

impl Model {
    pub fn render(&self) -> Vec<String> {
        render_lines(self)
    }
}

/// Line-at-a-time driver. Feed cleaned lines, then `finish`.
#[derive(Debug, Clone, Default)]
pub struct Assembler {
    cfg: AsmConfig,
    model: Model,
    line_no: usize,
}

impl Assembler {
    pub fn new(cfg: AsmConfig) -> Self {
        Self {
            cfg,
            model: Model::default(),
            line_no: 0,
        }
    }

    /// What has been accepted so far.
    pub fn model(&self) -> &Model {
        &self.model
    }

    /// Parse one comment-stripped, trimmed line. Errors carry the line number.
    pub fn feed_line(&mut self, line: &str) -> Result<(), AsmError> {
        self.line_no += 1;
        self.parse_line(line)
            .map_err(|err| err.at_line(self.line_no))
    }

    pub fn finish(mut self) -> Model {
        self.model.mem.close();
        info!(
            mem = self.model.mem.regions.len() - 1,
            mem_used = self.model.mem.top,
            equ = self.model.equ.aliases.len(),
            instructions = self.model.instructions.len(),
            "parsed"
        );
        self.model
    }

    fn parse_line(&mut self, line: &str) -> Result<(), AsmError> {
        let mut cur = Cursor::new(line);
        cur.skip_space();
        if cur.is_empty() {
            return Ok(());
        }
        if let Some((name, rest)) = cur.rest().split_once(':') {
            self.push(Instruction::Label {
                name: name.to_string(),
            })?;
            let mut cur = Cursor::new(rest);
            cur.skip_space();
            if cur.is_empty() {
                return Ok(());
            }
            return self.dispatch(cur);
        }
        self.dispatch(cur)
    }

    fn dispatch(&mut self, mut cur: Cursor<'_>) -> Result<(), AsmError> {
        let desc = TABLE
            .iter()
            .find(|d| cur.eat_word(d.mnemonic))
            .ok_or_else(|| AsmError::UnknownMnemonic(cur.rest().to_string()))?;
        debug!(line = self.line_no, mnemonic = desc.mnemonic, "decode");
        match desc.op {
            Mnemonic::Mem => {
                let (label, size) = decode_mem(&mut cur)?;
                self.model
                    .mem
                    .declare(label, size, self.cfg.max_mem, self.cfg.memory_budget)
            }
            Mnemonic::Equ => {
                let (label, value) = decode_equ(&mut cur)?;
                self.model.equ.declare(label, value, self.cfg.max_equ)
            }
            Mnemonic::Skp => {
                let ins = decode_skp(&mut cur)?;
                self.push(ins)
            }
            Mnemonic::Wlds => {
                let ins = decode_wlds(&mut cur)?;
                self.push(ins)
            }
            Mnemonic::Cho => {
                let ins = decode_cho(&mut cur)?;
                self.push(ins)
            }
        }
    }

    fn push(&mut self, ins: Instruction) -> Result<(), AsmError> {
        if self.model.instructions.len() >= self.cfg.max_instructions {
            return Err(AsmError::TooMany("instruction"));
        }
        self.model.instructions.push(ins);
        Ok(())
    }
}

/// Parse a whole source text with the default line cleaning.
pub fn assemble_str(text: &str, cfg: AsmConfig) -> Result<Model, AsmError> {
    let mut asm = Assembler::new(cfg);
    for line in crate::source::clean_lines(text.as_bytes(), cfg.max_line_len) {
        asm.feed_line(&line?)?;
    }
    Ok(asm.finish())
}
