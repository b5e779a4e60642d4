use pretty_assertions::assert_eq;

use dsp_asm::render::fmt_instr;
use dsp_asm::{assemble_str, AsmConfig, Model};

fn model(src: &str) -> Model {
    assemble_str(src, AsmConfig::default()).unwrap()
}

/// Render the single instruction of `line`.
fn round_trip(line: &str) -> String {
    let m = model(line);
    assert_eq!(m.instructions.len(), 1);
    fmt_instr(&m.instructions[0])
}

#[test]
fn full_listing() {
    let src = "\
; delay line setup
mem delay 100
mem  echo 2000   ; echo buffer
equ vol reg3
equ k 0.5
equ n 12
equ pot REG16

loop:
skp run, loop
wlds sin0, 511, 32767
cho rda, rmp1, reg|compc, delay
skp , 5
";
    let lines = model(src).render();
    assert_eq!(
        lines,
        vec![
            r#"mem[0]={"delay",0}"#,
            r#"mem[1]={"echo",100}"#,
            r#"mem[2]={"",2100}"#,
            r#"equ[0]={"vol",reg3}"#,
            r#"equ[3]={"pot",reg16}"#,
            "instr[0]=loop:",
            "instr[1]=skp run, loop",
            "instr[2]=wlds sin0, 511, 32767",
            "instr[3]=cho rda, rmp1, reg|compc, delay",
            "instr[4]=skp , 5",
        ]
    );
}

#[test]
fn empty_source_still_has_sentinel() {
    assert_eq!(model("").render(), vec![r#"mem[0]={"",0}"#]);
}

#[test]
fn skp_flags_render_in_vocabulary_order() {
    assert_eq!(round_trip("skp neg|run, 5"), "skp neg|run, 5");
    assert_eq!(round_trip("skp run|gez|neg, 5"), "skp neg|gez|run, 5");
    assert_eq!(round_trip("skp zro|zrc, loopstart"), "skp zro|zrc, loopstart");
    assert_eq!(round_trip("SKP 0x11, 2"), "skp neg|run, 2");
}

#[test]
fn cho_round_trips() {
    assert_eq!(round_trip("cho rda, sin1, reg|compc"), "cho rda, sin1, reg|compc");
    assert_eq!(round_trip("cho rda, sin1, compc|reg"), "cho rda, sin1, reg|compc");
    assert_eq!(round_trip("cho rda, rmp0, 0"), "cho rda, rmp0, 0");
    assert_eq!(round_trip("cho rdal,   sin0"), "cho rdal, sin0");
    assert_eq!(round_trip("cho sof"), "cho sof");
}

#[test]
fn rendered_text_parses_back_to_the_same_model() {
    let src = "\
top: skp gez|zrc, 3
wlds sin1, 7, 100
cho rda, sin0, 0
cho rda, rmp1, cos|rptr2|na, 4096
skp , top
";
    let first = model(src);
    let text: Vec<String> = first
        .instructions
        .iter()
        .map(|ins| ins.to_string())
        .collect();
    let second = model(&text.join("\n"));
    assert_eq!(first.instructions, second.instructions);
}

#[test]
fn json_dump_has_all_tables() {
    let m = model("mem a 4\nequ r reg1\nskp run, 1\n");
    let v = serde_json::to_value(&m).unwrap();
    assert_eq!(v["mem"]["regions"].as_array().map(Vec::len), Some(2));
    assert_eq!(v["equ"]["aliases"][0]["label"], "r");
    assert!(v["instructions"][0].get("Skp").is_some());
}
