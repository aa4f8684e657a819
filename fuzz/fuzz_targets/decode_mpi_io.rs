#![no_main]

use libfuzzer_sys::fuzz_target;
use mpi_bignum::read_mpi;

fuzz_target!(|data: &[u8]| {
    // errors are ok, panics are not
    let mut src = data;
    while !src.is_empty() {
        if read_mpi(&mut src).is_err() {
            break;
        }
    }
});
