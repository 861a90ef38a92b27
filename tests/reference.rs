//! Differential tests against `num-bigint` on seeded random operands.

use num_bigint::{BigInt as RefInt, RandomBits};
use num_traits::{Signed, Zero};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use twos_bigint::BigInt;

fn convert(val: &RefInt) -> BigInt {
    val.to_string().parse().unwrap()
}

fn sample(prng: &mut ChaCha20Rng) -> RefInt {
    let bits = match prng.gen_range(0..4) {
        0 => prng.gen_range(1..=64),
        1 => prng.gen_range(65..=160),
        2 => 32 * prng.gen_range(1..=12),
        _ => prng.gen_range(161..=1200),
    };
    prng.sample(RandomBits::new(bits))
}

#[test]
fn test_add_sub_mul() {
    let mut prng = ChaCha20Rng::seed_from_u64(0);
    for _ in 0..500 {
        let a = sample(&mut prng);
        let b = sample(&mut prng);
        let (x, y) = (convert(&a), convert(&b));

        assert_eq!((&x + &y).to_string(), (&a + &b).to_string(), "{} + {}", a, b);
        assert_eq!((&x - &y).to_string(), (&a - &b).to_string(), "{} - {}", a, b);
        assert_eq!((&x * &y).to_string(), (&a * &b).to_string(), "{} * {}", a, b);
        assert_eq!(x.cmp(&y), a.cmp(&b), "{} <=> {}", a, b);
    }
}

#[test]
fn test_div_rem() {
    let mut prng = ChaCha20Rng::seed_from_u64(1);
    for _ in 0..500 {
        let a = sample(&mut prng);
        let b = sample(&mut prng);
        if b.is_zero() {
            continue;
        }
        let (x, y) = (convert(&a), convert(&b));

        let (q, r) = x.div_rem(&y).unwrap();
        assert_eq!(q.to_string(), (&a / &b).to_string(), "{} / {}", a, b);
        assert_eq!(r.to_string(), (&a % &b).to_string(), "{} % {}", a, b);
    }
}

#[test]
fn test_div_rem_close_magnitudes() {
    // dividend and divisor share their leading digits, which stresses the
    // quotient digit estimate
    let mut prng = ChaCha20Rng::seed_from_u64(2);
    for _ in 0..300 {
        let b = sample(&mut prng).abs() + RefInt::from(1);
        let k: u32 = prng.gen_range(1..4);
        let a: RefInt = &b * RefInt::from(k) - RefInt::from(prng.gen_range(0..3_u32));
        let (x, y) = (convert(&a), convert(&b));

        assert_eq!((&x / &y).to_string(), (&a / &b).to_string(), "{} / {}", a, b);
        assert_eq!((&x % &y).to_string(), (&a % &b).to_string(), "{} % {}", a, b);
    }
}

#[test]
fn test_bitwise() {
    let mut prng = ChaCha20Rng::seed_from_u64(3);
    for _ in 0..500 {
        let a = sample(&mut prng);
        let b = sample(&mut prng);
        let (x, y) = (convert(&a), convert(&b));

        assert_eq!((&x & &y).to_string(), (&a & &b).to_string(), "{} & {}", a, b);
        assert_eq!((&x | &y).to_string(), (&a | &b).to_string(), "{} | {}", a, b);
        assert_eq!((&x ^ &y).to_string(), (&a ^ &b).to_string(), "{} ^ {}", a, b);
        assert_eq!((!&x).to_string(), (!&a).to_string(), "!{}", a);
    }
}

#[test]
fn test_shifts() {
    let mut prng = ChaCha20Rng::seed_from_u64(4);
    for _ in 0..500 {
        let a = sample(&mut prng);
        let n: u32 = prng.gen_range(0..300);
        let x = convert(&a);

        assert_eq!((&x << n).to_string(), (&a << n).to_string(), "{} << {}", a, n);
        assert_eq!((&x >> n).to_string(), (&a >> n).to_string(), "{} >> {}", a, n);
    }
}

#[test]
fn test_decimal_round_trip() {
    let mut prng = ChaCha20Rng::seed_from_u64(5);
    for _ in 0..500 {
        let a = sample(&mut prng);
        let text = a.to_string();
        assert_eq!(convert(&a).to_string(), text);
    }
}
