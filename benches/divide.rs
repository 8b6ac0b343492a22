use criterion::*;
use divconst::*;

fn factorial_mod_slow(n: u32, p: u32) -> u32 {
    let mut ret = 1u32;
    for i in 1..=n {
        ret = (ret as u64 * i as u64 % p as u64) as u32;
    }
    ret
}

fn factorial_mod_fast(n: u32, p: FastDiv64) -> u32 {
    let mut ret = 1u32;
    for i in 1..=n {
        ret = (ret as u64 * i as u64 % p) as u32;
    }
    ret
}

fn is_odd_prime_slow(k: u64) -> bool {
    if k < 3 || k % 2 == 0 {
        return false;
    }
    let mut d = 3;
    while d * d <= k {
        if k % d == 0 {
            return false;
        }
        d += 2;
    }
    true
}

fn count_odd_primes_slow(lo: u64, hi: u64) -> usize {
    (lo..hi).filter(|&k| is_odd_prime_slow(k)).count()
}

fn criterion_bench(c: &mut Criterion) {
    for (n, p) in [
        (1_000_000, 100_000_007u32),
        (1_000_000, 1_000_000_006),
        (1_000_000, 1_000_000_007),
    ] {
        let p_div = FastDiv64::new(p as u64);
        assert_eq!(factorial_mod_slow(1000, p), factorial_mod_fast(1000, p_div));

        c.bench_function(&format!("factorial-slow-{p}-{n}"), |b| {
            b.iter(|| factorial_mod_slow(black_box(n), black_box(p)));
        });
        c.bench_function(&format!("factorial-fast-{p}-{n}"), |b| {
            b.iter(|| factorial_mod_fast(black_box(n), black_box(p_div)));
        });
    }

    let table32 = DivisorTable::<u32>::new(1 << 16);
    let table64 = DivisorTable::<u64>::new(1 << 18);
    for (lo, hi) in [(3u64, 100_003u64), (1_000_000_001, 1_000_020_001)] {
        c.bench_function(&format!("primes-slow-{lo}-{hi}"), |b| {
            b.iter(|| count_odd_primes_slow(black_box(lo), black_box(hi)));
        });
        c.bench_function(&format!("primes-fast32-{lo}-{hi}"), |b| {
            b.iter(|| table32.count_odd_primes(black_box(lo as u32)..black_box(hi as u32)));
        });
    }
    for (lo, hi) in [
        (10_000_000_001u64, 10_000_020_001u64),
        (20_000_000_001, 20_000_020_001),
    ] {
        c.bench_function(&format!("primes-slow-{lo}-{hi}"), |b| {
            b.iter(|| count_odd_primes_slow(black_box(lo), black_box(hi)));
        });
        c.bench_function(&format!("primes-fast64-{lo}-{hi}"), |b| {
            b.iter(|| table64.count_odd_primes(black_box(lo)..black_box(hi)));
        });
    }

    for n in [1024, 16 * 1024] {
        let data: Vec<u64> = (0..n as u64).map(|i| i.wrapping_mul(0x9e3779b97f4a7c15)).collect();
        let fast = FastDiv64::new(1_000_000_007);
        let exact = ExactDiv64::new(1_000_000_007);

        let mut buf = data.clone();
        c.bench_function(&format!("div-in-place-{n}"), |b| {
            b.iter(|| {
                buf.copy_from_slice(&data);
                fast.div_in_place(&mut buf);
            });
        });
        c.bench_function(&format!("div-hardware-{n}"), |b| {
            b.iter(|| {
                buf.copy_from_slice(&data);
                for x in buf.iter_mut() {
                    *x /= black_box(1_000_000_007u64);
                }
            });
        });
        c.bench_function(&format!("count-multiples-{n}"), |b| {
            b.iter(|| exact.count_multiples(black_box(&data)));
        });
    }
}

criterion_group!(benches, criterion_bench);
criterion_main!(benches);
