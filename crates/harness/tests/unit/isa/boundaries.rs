//! Field-width boundary tests.
//!
//! The maximum representable value of every field must round-trip exactly,
//! and `max + 1` must encode identically to `0`.

use rstest::rstest;

use mipstb_core::isa::{decode_i, decode_j, decode_r, encode_i, encode_j, encode_r};

const REG_MAX: u32 = 31;
const FIELD6_MAX: u32 = 63;
const IMM_MAX: u32 = 0xFFFF;
const TARGET_MAX: u32 = 0x03FF_FFFF;

#[test]
fn test_r_max_fields_roundtrip() {
    let r = decode_r(encode_r(REG_MAX, REG_MAX, REG_MAX, REG_MAX, FIELD6_MAX));
    assert_eq!(
        (r.rs, r.rt, r.rd, r.shamt, r.funct),
        (REG_MAX, REG_MAX, REG_MAX, REG_MAX, FIELD6_MAX)
    );
}

#[test]
fn test_i_max_fields_roundtrip() {
    let i = decode_i(encode_i(FIELD6_MAX, REG_MAX, REG_MAX, IMM_MAX));
    assert_eq!(
        (i.opcode, i.rs, i.rt, i.immediate),
        (FIELD6_MAX, REG_MAX, REG_MAX, IMM_MAX)
    );
}

#[test]
fn test_j_max_fields_roundtrip() {
    let j = decode_j(encode_j(FIELD6_MAX, TARGET_MAX));
    assert_eq!((j.opcode, j.target), (FIELD6_MAX, TARGET_MAX));
}

#[rstest]
#[case::rs(|v| encode_r(v, 7, 7, 7, 7))]
#[case::rt(|v| encode_r(7, v, 7, 7, 7))]
#[case::rd(|v| encode_r(7, 7, v, 7, 7))]
#[case::shamt(|v| encode_r(7, 7, 7, v, 7))]
fn test_r_register_field_wraps(#[case] pack: fn(u32) -> u32) {
    assert_eq!(pack(REG_MAX + 1), pack(0));
    assert_ne!(pack(REG_MAX), pack(0));
}

#[rstest]
#[case::funct(|v| encode_r(7, 7, 7, 7, v))]
#[case::opcode_i(|v| encode_i(v, 7, 7, 7))]
#[case::opcode_j(|v| encode_j(v, 7))]
fn test_six_bit_field_wraps(#[case] pack: fn(u32) -> u32) {
    assert_eq!(pack(FIELD6_MAX + 1), pack(0));
    assert_ne!(pack(FIELD6_MAX), pack(0));
}

#[test]
fn test_immediate_wraps() {
    assert_eq!(encode_i(13, 7, 7, IMM_MAX + 1), encode_i(13, 7, 7, 0));
}

#[test]
fn test_target_wraps() {
    assert_eq!(encode_j(2, TARGET_MAX + 1), encode_j(2, 0));
}
