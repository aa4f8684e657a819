#![no_main]

use libfuzzer_sys::fuzz_target;
use mpi_bignum::BigNum;

fuzz_target!(|word: u32| {
    let n = BigNum::from_compact(word);
    // one truncation pass lands inside the compact domain and stays there
    let truncated = BigNum::from_compact(n.to_compact());
    assert_eq!(BigNum::from_compact(truncated.to_compact()), truncated);
});
