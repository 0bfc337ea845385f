/// Odd primes used as state multipliers. Any odd multiplier keeps the state
/// transition a bijection; picking among several breaks up short cycles.
pub const PRIMES: [u64; 8] = [
    2_147_483_647,
    998_244_353,
    1_000_000_007,
    1_000_000_009,
    4_294_967_291,
    4_294_967_311,
    2_305_843_009_213_693_951,
    18_446_744_073_709_551_557,
];
