//! One decoder per mnemonic. Each gets the cursor just past the mnemonic
//! and must consume the whole rest of the line.

use crate::cursor::{is_space, Cursor};
use crate::error::AsmError;
use crate::flags::{parse_flags, RdaFlags, SkipFlags, ZeroMask};
use crate::instructions::{ChoOp, Instruction, LfoSource, Target};
use crate::symbols::Constant;

const SKIP_COUNT_BITS: u32 = 6;
const WLDS_FREQ_BITS: u32 = 9;
const WLDS_AMP_BITS: u32 = 15;
const CHO_ADDR_BITS: u32 = 16;
const REGISTER_BITS: u32 = 5;

fn label<'a>(cur: &mut Cursor<'a>, directive: &'static str) -> Result<&'a str, AsmError> {
    cur.skip_space();
    let name = cur.token();
    if name.is_empty() {
        return Err(AsmError::MissingLabel(directive));
    }
    cur.skip_space();
    Ok(name)
}

fn target(cur: &mut Cursor<'_>, bits: u32, what: &'static str) -> Result<Target, AsmError> {
    cur.skip_space();
    if cur.starts_with_digit() {
        Ok(Target::Literal(cur.uint(bits, what)?))
    } else {
        Ok(Target::Symbolic(cur.token().to_string()))
    }
}

/// `mem <label> <size>`
pub fn decode_mem<'a>(cur: &mut Cursor<'a>) -> Result<(&'a str, u64), AsmError> {
    let name = label(cur, "mem")?;
    let size = cur.uint_bits(64, "mem size")?;
    cur.expect_end()?;
    Ok((name, size))
}

/// `equ <label> reg<N>` or `equ <label> <integer>`; any other value is kept
/// as [`Constant::Unsupported`].
pub fn decode_equ<'a>(cur: &mut Cursor<'a>) -> Result<(&'a str, Constant), AsmError> {
    let name = label(cur, "equ")?;
    let rest = cur.rest();
    if rest.len() > 3 && cur.eat_ci("reg") {
        let n = cur.uint(REGISTER_BITS, "register")?;
        cur.expect_end()?;
        return Ok((name, Constant::Register(n as u8)));
    }

    let mut lit = *cur;
    let negative = lit.eat_char('-');
    if lit.starts_with_digit() {
        if let Ok(v) = lit.integer_literal() {
            if lit.expect_end().is_ok() {
                if let Ok(v) = i64::try_from(v) {
                    return Ok((name, Constant::Literal(if negative { -v } else { v })));
                }
            }
        }
    }
    Ok((name, Constant::Unsupported(rest.to_string())))
}

/// `skp <flags>, <count|label>`
pub fn decode_skp(cur: &mut Cursor<'_>) -> Result<Instruction, AsmError> {
    let flags = parse_flags::<SkipFlags>(cur, ZeroMask::Allow)?;
    cur.skip_space();
    if cur.is_empty() {
        return Err(AsmError::expected("skip target", cur.rest()));
    }
    let target = target(cur, SKIP_COUNT_BITS, "skip count")?;
    cur.expect_end()?;
    Ok(Instruction::Skp { flags, target })
}

/// `wlds sin<0|1>, <freq>, <amp>`
pub fn decode_wlds(cur: &mut Cursor<'_>) -> Result<Instruction, AsmError> {
    cur.skip_space();
    cur.expect_ci("sin")?;
    let sin = match cur.peek() {
        Some('0') => 0,
        Some('1') => 1,
        _ => return Err(AsmError::expected("sin0 or sin1", cur.rest())),
    };
    cur.bump(1);
    cur.expect_char(',')?;
    cur.skip_space();
    let freq = cur.uint(WLDS_FREQ_BITS, "frequency")? as u16;
    cur.expect_char(',')?;
    cur.skip_space();
    let amp = cur.uint(WLDS_AMP_BITS, "amplitude")? as u16;
    cur.expect_end()?;
    Ok(Instruction::Wlds { sin, freq, amp })
}

fn eat_subop(cur: &mut Cursor<'_>, name: &str) -> bool {
    if !cur.starts_with_ci(name) {
        return false;
    }
    match cur.rest()[name.len()..].chars().next() {
        None | Some(',') => {}
        Some(c) if is_space(c) => {}
        Some(_) => return false,
    }
    cur.bump(name.len());
    true
}

fn raw_operands(cur: &mut Cursor<'_>) -> String {
    cur.skip_space();
    cur.eat_char(',');
    cur.skip_space();
    let text = cur.rest().trim_end().to_string();
    cur.bump(cur.rest().len());
    text
}

fn lfo_source(cur: &mut Cursor<'_>) -> Result<LfoSource, AsmError> {
    cur.skip_space();
    let text = cur.token_until(',');
    let bad = || AsmError::expected("sin0, sin1, rmp0 or rmp1", text);
    if text.len() != 4 {
        return Err(bad());
    }
    let base = match text.get(..3) {
        Some(kind) if kind.eq_ignore_ascii_case("sin") => 0,
        Some(kind) if kind.eq_ignore_ascii_case("rmp") => 2,
        _ => return Err(bad()),
    };
    let unit = match &text[3..] {
        "0" => 0,
        "1" => 1,
        _ => return Err(bad()),
    };
    LfoSource::from_index(base | unit).ok_or_else(bad)
}

/// `cho rda, <lfo>, <flags>[, <addr>]`, `cho rdal ...`, `cho sof ...`
pub fn decode_cho(cur: &mut Cursor<'_>) -> Result<Instruction, AsmError> {
    cur.skip_space();
    let op = if eat_subop(cur, "rdal") {
        ChoOp::Rdal {
            operands: raw_operands(cur),
        }
    } else if eat_subop(cur, "rda") {
        cur.expect_char(',')?;
        let source = lfo_source(cur)?;
        cur.expect_char(',')?;
        let flags = parse_flags::<RdaFlags>(cur, ZeroMask::Reject)?;
        cur.skip_space();
        let addr = if cur.is_empty() {
            None
        } else {
            Some(target(cur, CHO_ADDR_BITS, "address")?)
        };
        cur.expect_end()?;
        ChoOp::Rda {
            source,
            flags,
            addr,
        }
    } else if eat_subop(cur, "sof") {
        ChoOp::Sof {
            operands: raw_operands(cur),
        }
    } else {
        return Err(AsmError::UnknownSubOp(cur.rest().to_string()));
    };
    Ok(Instruction::Cho(op))
}
