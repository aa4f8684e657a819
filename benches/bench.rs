use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use mpi_bignum::{BigNum, MpiBuf, MpiBufMut};
use rand::prelude::*;

// Empirically enough values to smooth out allocator noise per iteration.
const ARRAY_LEN: usize = 1024;

// Generate an array of values whose MPI payloads are exactly `payload_bytes`
// long, mixing signs, from seeded rngs so runs are comparable.
fn generate_values(len: usize, payload_bytes: usize) -> Vec<BigNum> {
    let mut rng = StdRng::from_seed([0xabu8; 32]);
    (0..len)
        .map(|_| {
            let mut buf = vec![0, 0, 0, payload_bytes as u8];
            let mut payload = vec![0u8; payload_bytes];
            rng.fill_bytes(&mut payload);
            // a nonzero leading magnitude bit keeps the width stable
            payload[0] |= 0x01;
            buf.extend_from_slice(&payload);
            BigNum::from_mpi(&buf).unwrap()
        })
        .collect()
}

fn benchmark(c: &mut Criterion) {
    for payload_bytes in [1usize, 3, 8, 20, 33] {
        let values = generate_values(ARRAY_LEN, payload_bytes);
        let mut g = c.benchmark_group(format!("payload_bytes{}", payload_bytes));
        g.throughput(Throughput::Elements(ARRAY_LEN as u64));

        g.bench_with_input("put_mpi", &values, |b, values| {
            let mut output = Vec::with_capacity(ARRAY_LEN * (payload_bytes + 4));
            b.iter(|| {
                output.clear();
                for v in values {
                    output.put_mpi(v);
                }
                assert!(!output.is_empty());
            });
        });

        let mut encoded: Vec<u8> = Vec::new();
        for v in &values {
            encoded.put_mpi(v);
        }
        g.bench_with_input("get_mpi", &encoded, |b, encoded| {
            b.iter(|| {
                let mut buf = encoded.as_slice();
                let mut count = 0;
                while let Ok(v) = buf.get_mpi() {
                    black_box(v);
                    count += 1;
                }
                assert_eq!(count, ARRAY_LEN);
            });
        });

        g.bench_with_input("to_compact", &values, |b, values| {
            b.iter(|| {
                for v in values {
                    black_box(v.to_compact());
                }
            });
        });

        g.finish();
    }
}

criterion_group!(benches, benchmark);
criterion_main!(benches);
