#![no_main]

use libfuzzer_sys::fuzz_target;
use mpi_bignum::BigNum;

fuzz_target!(|v: i64| {
    let n = BigNum::from(v);
    let mpi = n.to_mpi();
    assert_eq!(BigNum::from_mpi(&mpi).unwrap(), n);
    assert_eq!(BigNum::from_le_bytes(&n.to_le_bytes()), n);
    assert_eq!(n.low_u64(), v.unsigned_abs());
});
