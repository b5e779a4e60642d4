use dsp_asm::cursor::Cursor;
use dsp_asm::decoder::{decode_cho, decode_skp, decode_wlds};
use dsp_asm::{AsmError, ChoOp, Instruction, LfoSource, RdaFlags, SkipFlags, Target};

fn skp(operands: &str) -> Result<Instruction, AsmError> {
    decode_skp(&mut Cursor::new(operands))
}

fn wlds(operands: &str) -> Result<Instruction, AsmError> {
    decode_wlds(&mut Cursor::new(operands))
}

fn cho(operands: &str) -> Result<Instruction, AsmError> {
    decode_cho(&mut Cursor::new(operands))
}

#[test]
fn skp_literal_and_symbolic_targets() {
    assert_eq!(
        skp(" neg|run, 5").unwrap(),
        Instruction::Skp {
            flags: SkipFlags::NEG | SkipFlags::RUN,
            target: Target::Literal(5)
        }
    );
    assert_eq!(
        skp(" zro|zrc, loopstart").unwrap(),
        Instruction::Skp {
            flags: SkipFlags::ZRO | SkipFlags::ZRC,
            target: Target::Symbolic("loopstart".into())
        }
    );
}

#[test]
fn skp_without_flags() {
    assert_eq!(
        skp(" , 2").unwrap(),
        Instruction::Skp {
            flags: SkipFlags::empty(),
            target: Target::Literal(2)
        }
    );
    assert_eq!(
        skp(" 0x18,1").unwrap(),
        Instruction::Skp {
            flags: SkipFlags::ZRC | SkipFlags::RUN,
            target: Target::Literal(1)
        }
    );
}

#[test]
fn skp_errors() {
    assert!(matches!(
        skp(" run, 64"),
        Err(AsmError::OutOfRange { what: "skip count", bits: 6, .. })
    ));
    assert_eq!(skp(" run, 5 extra"), Err(AsmError::TrailingText("extra".into())));
    assert_eq!(skp(" bogus, 1"), Err(AsmError::UnknownFlag("bogus, 1".into())));
    assert!(matches!(skp(" run"), Err(AsmError::Expected { .. })));
}

#[test]
fn wlds_field_widths() {
    assert_eq!(
        wlds(" sin0, 511, 32767").unwrap(),
        Instruction::Wlds {
            sin: 0,
            freq: 511,
            amp: 32767
        }
    );
    assert_eq!(
        wlds(" sin0, 512, 0"),
        Err(AsmError::OutOfRange {
            what: "frequency",
            text: "512".into(),
            bits: 9
        })
    );
    assert_eq!(
        wlds(" sin1, 0, 32768"),
        Err(AsmError::OutOfRange {
            what: "amplitude",
            text: "32768".into(),
            bits: 15
        })
    );
    assert_eq!(
        wlds(" sin0, 99999999999999999999, 0"),
        Err(AsmError::OutOfRange {
            what: "frequency",
            text: "99999999999999999999".into(),
            bits: 9
        })
    );
}

#[test]
fn wlds_malformed() {
    assert_eq!(
        wlds(" SIN1,3,4").unwrap(),
        Instruction::Wlds {
            sin: 1,
            freq: 3,
            amp: 4
        }
    );
    assert!(matches!(wlds(" sin2, 1, 1"), Err(AsmError::Expected { .. })));
    assert!(matches!(wlds(" cos0, 1, 1"), Err(AsmError::Expected { .. })));
    assert!(matches!(wlds(" sin0 1, 1"), Err(AsmError::Expected { .. })));
    assert!(matches!(wlds(" sin0, , 1"), Err(AsmError::ExpectedNumber(_))));
}

#[test]
fn cho_rda_fields() {
    let ins = cho(" rda, sin1, reg|compc").unwrap();
    assert_eq!(
        ins,
        Instruction::Cho(ChoOp::Rda {
            source: LfoSource::Sin1,
            flags: RdaFlags::REG | RdaFlags::COMPC,
            addr: None
        })
    );
    if let Instruction::Cho(ChoOp::Rda { source, .. }) = ins {
        assert_eq!(source.index(), 1);
    }

    assert_eq!(
        cho(" RDA,rmp1,na|cos, delay").unwrap(),
        Instruction::Cho(ChoOp::Rda {
            source: LfoSource::Rmp1,
            flags: RdaFlags::COS | RdaFlags::NA,
            addr: Some(Target::Symbolic("delay".into()))
        })
    );
    assert_eq!(
        cho(" rda, rmp0, 0, 100").unwrap(),
        Instruction::Cho(ChoOp::Rda {
            source: LfoSource::Rmp0,
            flags: RdaFlags::empty(),
            addr: Some(Target::Literal(100))
        })
    );
}

#[test]
fn cho_rda_errors() {
    assert!(matches!(cho(" rda, sin0,"), Err(AsmError::EmptyFlags(_))));
    assert!(matches!(cho(" rda, tri0, reg"), Err(AsmError::Expected { .. })));
    assert!(matches!(cho(" rda, sin2, reg"), Err(AsmError::Expected { .. })));
    assert!(matches!(cho(" rda sin0, reg"), Err(AsmError::Expected { .. })));
    assert_eq!(cho(" rda, sin0, 64"), Err(AsmError::InvalidFlagBits(64)));
}

#[test]
fn cho_other_sub_operations() {
    assert_eq!(
        cho(" rdal, sin0").unwrap(),
        Instruction::Cho(ChoOp::Rdal {
            operands: "sin0".into()
        })
    );
    assert_eq!(
        cho(" sof").unwrap(),
        Instruction::Cho(ChoOp::Sof {
            operands: String::new()
        })
    );
    assert_eq!(cho(" xyz, 1"), Err(AsmError::UnknownSubOp("xyz, 1".into())));
    assert_eq!(cho(" rdax, 1"), Err(AsmError::UnknownSubOp("rdax, 1".into())));
}
