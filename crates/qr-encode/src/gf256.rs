//! Arithmetic in `GF(2)[x] / (x^8 + x^4 + x^3 + x^2 + 1)`, the field used by
//! the Reed-Solomon codec. The primitive polynomial is 0x11D; the generator
//! is `alpha = 2`. Addition is XOR and is not given its own function, use
//! `^` directly.

use std::sync::OnceLock;

const PRIMITIVE_POLY: u16 = 0x11D;

struct Tables {
    exp: [u8; 256],
    log: [u8; 256],
}

fn tables() -> &'static Tables {
    static TABLES: OnceLock<Tables> = OnceLock::new();
    TABLES.get_or_init(|| {
        let mut exp = [0u8; 256];
        let mut log = [0u8; 256];
        let mut x: u16 = 1;
        for i in 0..255usize {
            exp[i] = x as u8;
            log[x as usize] = i as u8;
            x <<= 1;
            if x & 0x100 != 0 {
                x ^= PRIMITIVE_POLY;
            }
        }
        // exp[255] is unused (alpha^255 = alpha^0 = 1, already recorded at index 0);
        // keep a copy for convenience when callers index 255 directly via wraparound.
        exp[255] = exp[0];
        Tables { exp, log }
    })
}

/// Multiplies two field elements modulo `GF(2^8)/0x11D`. `mul(a, 0) == mul(0,
/// b) == 0` and `mul(a, 1) == a` for all inputs.
pub fn mul(a: u8, b: u8) -> u8 {
    if a == 0 || b == 0 {
        return 0;
    }
    let t = tables();
    let sum = u16::from(t.log[a as usize]) + u16::from(t.log[b as usize]);
    t.exp[(sum % 255) as usize]
}

/// Returns `alpha^power`, reducing the exponent modulo 255 (the multiplicative
/// order of the field).
pub fn exp(power: u32) -> u8 {
    tables().exp[(power % 255) as usize]
}

/// Multiplicative inverse of a nonzero field element. Unused by the encoder
/// proper; provided for round-trip testing of the field implementation.
pub fn inv(a: u8) -> u8 {
    assert!(a != 0, "zero has no multiplicative inverse");
    let t = tables();
    t.exp[(255 - u16::from(t.log[a as usize])) as usize % 255]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mul_zero_and_identity() {
        assert_eq!(mul(200, 0), 0);
        assert_eq!(mul(0, 200), 0);
        assert_eq!(mul(200, 1), 200);
    }

    #[test]
    fn mul_is_commutative() {
        for a in [3u8, 17, 200, 255] {
            for b in [5u8, 64, 99, 1] {
                assert_eq!(mul(a, b), mul(b, a));
            }
        }
    }

    #[test]
    fn mul_is_associative() {
        let (a, b, c) = (13u8, 201u8, 7u8);
        assert_eq!(mul(mul(a, b), c), mul(a, mul(b, c)));
    }

    #[test]
    fn mul_distributes_over_xor() {
        let (a, b, c) = (13u8, 201u8, 7u8);
        assert_eq!(mul(a, b ^ c), mul(a, b) ^ mul(a, c));
    }

    #[test]
    fn alpha_powers_cycle_with_period_255() {
        assert_eq!(exp(0), 1);
        assert_eq!(exp(255), exp(0));
        for a in [1u8, 45, 199] {
            assert_eq!(mul(a, exp(255)), mul(a, exp(0)));
        }
    }

    #[test]
    fn inv_round_trips() {
        for a in [1u8, 2, 17, 200, 255] {
            assert_eq!(mul(a, inv(a)), 1);
        }
    }
}
