use mpi_bignum::{BigNum, DecodeError, MpiBuf};

#[test]
fn does_not_read_past_the_declared_buffer() {
    // header claims almost 4 GiB of payload; errors are ok, wild reads are not
    let decode_data = [0xffu8, 0xff, 0xff, 0xff, 0x01];
    assert_eq!(
        BigNum::from_mpi(&decode_data),
        Err(DecodeError::MalformedBuffer)
    );
    let mut buf = decode_data.as_slice();
    assert_eq!(buf.get_mpi(), Err(DecodeError::MalformedBuffer));
}

#[test]
fn stops_cleanly_on_trailing_garbage() {
    let decode_data = [0x00u8, 0x00, 0x00, 0x02, 0x9a, 0x01, 0x7f, 0x00];
    let mut buf = decode_data.as_slice();
    assert!(buf.get_mpi().is_ok());
    assert!(buf.get_mpi().is_err());
}

#[test]
fn compact_accepts_any_word() {
    // oversized exponents and sign-flagged mantissas decode, never panic
    for word in [
        0u32,
        0x0100_0000,
        0x0180_0000,
        0x2000_0000,
        0xff00_0000,
        0xffff_ffff,
    ] {
        let n = BigNum::from_compact(word);
        let _ = n.to_compact();
    }
}

#[test]
fn hex_accepts_any_text() {
    for s in ["", "-", "0x", "0X", "zz", "-0xzz", "  -  "] {
        let n = BigNum::from_hex(s);
        assert_eq!(n, BigNum::default(), "{:?}", s);
    }
    // whitespace is legal between the 0x marker and the digits
    assert_eq!(BigNum::from_hex("-0x 1"), BigNum::from(-1));
    assert!(BigNum::parse_hex("zz").is_err());
}
