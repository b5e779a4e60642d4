use crate::assembler::Model;
use crate::flags::format_flags;
use crate::instructions::{ChoOp, Instruction, LfoSource, Mnemonic, Target};
use crate::symbols::Constant;

fn target(t: &Target) -> String {
    match t {
        Target::Literal(n) => n.to_string(),
        Target::Symbolic(name) => name.clone(),
    }
}

fn lfo(src: LfoSource) -> String {
    let n = src.index();
    format!("{}{}", if n & 2 != 0 { "rmp" } else { "sin" }, n & 1)
}

fn with_operands(mn: &str, sub: &str, operands: &str) -> String {
    if operands.is_empty() {
        format!("{mn} {sub}")
    } else {
        format!("{mn} {sub}, {operands}")
    }
}

/// Canonical source text of one instruction.
pub fn fmt_instr(ins: &Instruction) -> String {
    match ins {
        Instruction::Label { name } => format!("{name}:"),
        Instruction::Skp { flags, target: t } => {
            format!(
                "{} {}, {}",
                Mnemonic::Skp.text(),
                format_flags(flags),
                target(t)
            )
        }
        Instruction::Wlds { sin, freq, amp } => {
            format!("{} sin{sin}, {freq}, {amp}", Mnemonic::Wlds.text())
        }
        Instruction::Cho(ChoOp::Rda {
            source,
            flags,
            addr,
        }) => {
            let mut flags = format_flags(flags);
            if flags.is_empty() {
                flags.push('0');
            }
            let mut s = format!("{} rda, {}, {flags}", Mnemonic::Cho.text(), lfo(*source));
            if let Some(addr) = addr {
                s.push_str(", ");
                s.push_str(&target(addr));
            }
            s
        }
        Instruction::Cho(ChoOp::Rdal { operands }) => {
            with_operands(Mnemonic::Cho.text(), "rdal", operands)
        }
        Instruction::Cho(ChoOp::Sof { operands }) => {
            with_operands(Mnemonic::Cho.text(), "sof", operands)
        }
    }
}

/// All output lines: memory table with its sentinel, register aliases, then
/// the instruction list.
pub fn render_lines(model: &Model) -> Vec<String> {
    let mut out = Vec::new();
    for (i, region) in model.mem.regions.iter().enumerate() {
        out.push(format!("mem[{i}]={{\"{}\",{}}}", region.label, region.offset));
    }
    for (i, alias) in model.equ.aliases.iter().enumerate() {
        if let Constant::Register(r) = alias.value {
            out.push(format!("equ[{i}]={{\"{}\",reg{r}}}", alias.label));
        }
    }
    for (i, ins) in model.instructions.iter().enumerate() {
        out.push(format!("instr[{i}]={}", fmt_instr(ins)));
    }
    out
}

impl std::fmt::Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&fmt_instr(self))
    }
}
