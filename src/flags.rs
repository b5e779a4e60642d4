//! Named-flag bitmask expressions.
//!
//! A flag expression is either an integer literal or names from a fixed
//! vocabulary joined with `|`, e.g. `neg|run` or `0x11`. Each vocabulary is a
//! `bitflags` type whose declaration order is its bit order; rendering walks
//! that order, so `run|neg` comes back as `neg|run`.

use bitflags::{bitflags, Flags};
use serde::{Deserialize, Serialize};

use crate::cursor::{is_space, Cursor};
use crate::error::AsmError;

bitflags! {
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkipFlags: u32 {
const NEG = 1 << 0;
const GEZ = 1 << 1;
const ZRO = 1 << 2;
const ZRC = 1 << 3;
const RUN = 1 << 4;
}
}

bitflags! {
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RdaFlags: u32 {
const COS = 1 << 0;
const REG = 1 << 1;
const COMPC = 1 << 2;
const COMPA = 1 << 3;
const RPTR2 = 1 << 4;
const NA = 1 << 5;
}
}

/// What an empty expression (nothing before the `,` or end of line) means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZeroMask {
    /// Empty expression is the empty mask.
    Allow,
    /// Empty expression is an error; a literal `0` is still accepted.
    Reject,
}

fn ends_name(c: Option<char>) -> bool {
    match c {
        None | Some(',') | Some('|') => true,
        Some(c) => is_space(c),
    }
}

/// Consume an optional `,` closing the expression; anything else but end of
/// line is an error.
fn close_expression(cur: &mut Cursor<'_>) -> Result<(), AsmError> {
    cur.skip_space();
    if cur.eat_char(',') || cur.is_empty() {
        Ok(())
    } else {
        Err(AsmError::expected("',' after flags", cur.rest()))
    }
}

/// Parse one flag expression at the cursor and consume its trailing `,`.
pub fn parse_flags<F>(cur: &mut Cursor<'_>, policy: ZeroMask) -> Result<F, AsmError>
where
    F: Flags<Bits = u32>,
{
    cur.skip_space();
    match cur.peek() {
        None | Some(',') => {
            if policy == ZeroMask::Reject {
                return Err(AsmError::EmptyFlags(cur.rest().to_string()));
            }
            cur.eat_char(',');
            return Ok(F::empty());
        }
        Some(c) if c.is_ascii_digit() => {
            let value = cur.integer_literal()?;
            let flags = u32::try_from(value)
                .ok()
                .and_then(F::from_bits)
                .ok_or(AsmError::InvalidFlagBits(value))?;
            close_expression(cur)?;
            return Ok(flags);
        }
        Some(_) => {}
    }

    let mut acc = F::empty();
    loop {
        let flag = F::FLAGS
            .iter()
            .find(|flag| {
                let name = flag.name();
                cur.starts_with_ci(name) && ends_name(cur.rest()[name.len()..].chars().next())
            })
            .ok_or_else(|| AsmError::UnknownFlag(cur.rest().to_string()))?;
        acc.insert(F::from_bits_retain(flag.value().bits()));
        cur.bump(flag.name().len());
        cur.skip_space();
        if !cur.eat_char('|') {
            break;
        }
        cur.skip_space();
    }
    close_expression(cur)?;
    Ok(acc)
}

/// Set names in bit order joined with `|`; empty for an empty mask.
pub fn format_flags<F>(flags: &F) -> String
where
    F: Flags<Bits = u32>,
{
    F::FLAGS
        .iter()
        .filter(|flag| {
            let bit = flag.value().bits();
            bit != 0 && flags.bits() & bit == bit
        })
        .map(|flag| flag.name().to_ascii_lowercase())
        .collect::<Vec<_>>()
        .join("|")
}
