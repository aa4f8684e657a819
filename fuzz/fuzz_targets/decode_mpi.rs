#![no_main]

use libfuzzer_sys::fuzz_target;
use mpi_bignum::{BigNum, MpiBuf};

fuzz_target!(|data: &[u8]| {
    // attempts to decode all the data as MPI frames; errors are ok, panics
    // and out-of-bounds reads are not
    let _ = BigNum::from_mpi(data);

    let mut src = data;
    while !src.is_empty() {
        if src.get_mpi().is_err() {
            break;
        }
    }
});
