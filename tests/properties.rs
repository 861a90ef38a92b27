//! Algebraic properties checked over generated operands.

use proptest::prelude::*;

use twos_bigint::BigInt;

/// Builds values from up to eight random 32-bit digits, with either sign.
fn big_int() -> impl Strategy<Value = BigInt> {
    (prop::collection::vec(any::<u32>(), 0..8), any::<bool>()).prop_map(|(digits, negative)| {
        let magnitude = digits
            .iter()
            .fold(BigInt::zero(), |acc, &d| (acc << 32) + BigInt::from(d));
        if negative {
            -magnitude
        } else {
            magnitude
        }
    })
}

fn nonzero_big_int() -> impl Strategy<Value = BigInt> {
    big_int().prop_filter("nonzero divisor", |b| !b.is_zero())
}

proptest! {
    #[test]
    fn decimal_round_trip(text in "-?[1-9][0-9]{0,80}") {
        let a: BigInt = text.parse().unwrap();
        prop_assert_eq!(a.to_string(), text);
    }

    #[test]
    fn value_round_trip(a in big_int()) {
        let back: BigInt = a.to_string().parse().unwrap();
        prop_assert_eq!(back, a);
    }

    #[test]
    fn matches_i128(a in any::<i64>(), b in any::<i64>()) {
        let (x, y) = (BigInt::from(a), BigInt::from(b));
        let (a, b) = (i128::from(a), i128::from(b));
        prop_assert_eq!(&x + &y, BigInt::from(a + b));
        prop_assert_eq!(&x - &y, BigInt::from(a - b));
        prop_assert_eq!(&x * &y, BigInt::from(a * b));
        prop_assert_eq!(x.cmp(&y), a.cmp(&b));
        if b != 0 {
            prop_assert_eq!(&x / &y, BigInt::from(a / b));
            prop_assert_eq!(&x % &y, BigInt::from(a % b));
        }
    }

    #[test]
    fn additive_inverse(a in big_int()) {
        prop_assert!((&a + &(-&a)).is_zero());
        prop_assert!((&a - &a).is_zero());
        prop_assert_eq!(-(-a.clone()), a);
    }

    #[test]
    fn add_commutes_and_associates(a in big_int(), b in big_int(), c in big_int()) {
        prop_assert_eq!(&a + &b, &b + &a);
        prop_assert_eq!((&a + &b) + &c, &a + (&b + &c));
        prop_assert_eq!(&(&a + &b) - &b, a);
    }

    #[test]
    fn mul_commutes_and_distributes(a in big_int(), b in big_int(), c in big_int()) {
        prop_assert_eq!(&a * &b, &b * &a);
        prop_assert_eq!((&a * &b) * &c, &a * (&b * &c));
        prop_assert_eq!(&a * (&b + &c), &a * &b + &a * &c);
    }

    #[test]
    fn div_rem_identity(a in big_int(), b in nonzero_big_int()) {
        let (q, r) = a.div_rem(&b).unwrap();
        prop_assert_eq!(&q * &b + &r, a.clone());
        prop_assert!(r.abs() < b.abs());
        prop_assert!(r.is_zero() || r.is_negative() == a.is_negative());
    }

    #[test]
    fn bitwise_identities(a in big_int(), b in big_int()) {
        prop_assert_eq!(!!a.clone(), a.clone());
        prop_assert_eq!(&a & &a, a.clone());
        prop_assert_eq!(&a | &a, a.clone());
        prop_assert!((&a ^ &a).is_zero());
        prop_assert_eq!(!&a, -&a - BigInt::from(1));
        prop_assert_eq!(&a ^ &b, (&a | &b) - (&a & &b));
    }

    #[test]
    fn shift_identities(a in big_int(), n in 0_u32..200) {
        let pow = BigInt::from(1) << n;
        prop_assert_eq!(&a << n, &a * &pow);
        prop_assert_eq!((&a << n) >> n, a.clone());
        // arithmetic right shift is floor division by 2^n
        let (q, r) = a.div_rem(&pow).unwrap();
        let floor = if r.is_negative() { q - BigInt::from(1) } else { q };
        prop_assert_eq!(&a >> n, floor);
    }

    #[test]
    fn comparator_is_total(a in big_int(), b in big_int()) {
        prop_assert_eq!(a.cmp(&b), b.cmp(&a).reverse());
        prop_assert_eq!(a == b, a.cmp(&b).is_eq());
        prop_assert_eq!(a < b, (&a - &b).is_negative());
    }
}
