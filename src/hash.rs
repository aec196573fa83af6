//! Structural hashing for document nodes.
//!
//! Hashes are 32-bit signed integers built from a polynomial rolling hash:
//!
//! ```text
//! hash_string(s)    = fold(0, utf16(s), |h, unit| 31 * h + unit)   (wrapping)
//! combine(a, b)     = append_hash(append_hash(0, a), b)
//! object/array hash = smi(fold(0, entries, |h, (k, v)| append_hash(h, combine(#k, #v))))
//! ```
//!
//! Composite nodes memoize their hash at construction, so hashing a parent
//! only reads its children's stored values. Hashes are meant for cheap
//! equality checks and deduplication within one process; they are not
//! cryptographic.
//!
//! Strings are hashed over UTF-16 code units, so a character outside the
//! basic multilingual plane contributes its two surrogate units.
//!
//! ```rust
//! use hyperjson::{combine, hash_string};
//!
//! assert_eq!(hash_string(""), 0);
//! assert_eq!(hash_string("ab"), 31 * 97 + 98);
//! assert_eq!(combine(1, 2), 33);
//! ```

use serde_json::Value;

use crate::node::Node;

const U32_MAX_F64: f64 = 4_294_967_295.0;
const TWO_POW_32: f64 = 4_294_967_296.0;

/// Truncate a float to a 32-bit signed integer with wraparound, the same
/// way IEEE-754 hosts convert doubles to int32. Non-finite values give 0.
pub fn to_int32(n: f64) -> i32 {
    if !n.is_finite() {
        return 0;
    }
    let wrapped = n.trunc().rem_euclid(TWO_POW_32);
    (wrapped as u32) as i32
}

/// Hash a number. Magnitudes beyond the `u32` range are folded in by
/// repeated division, so large values still spread across the hash space.
pub fn hash_number(n: f64) -> i32 {
    let mut hash = to_int32(n);
    if !n.is_finite() {
        return hash;
    }
    let mut number = n;
    while number > U32_MAX_F64 {
        number /= U32_MAX_F64;
        hash ^= to_int32(number);
    }
    hash
}

/// Polynomial rolling hash over UTF-16 code units, normalized with [`smi`].
pub fn hash_string(s: &str) -> i32 {
    smi(s
        .encode_utf16()
        .fold(0, |hash, unit| append_hash(hash, i32::from(unit))))
}

/// One step of the rolling hash: `31 * hash + code`, wrapping.
#[inline]
pub fn append_hash(hash: i32, code: i32) -> i32 {
    hash.wrapping_mul(31).wrapping_add(code)
}

/// Positional combination of two hashes.
#[inline]
pub fn combine(a: i32, b: i32) -> i32 {
    append_hash(append_hash(0, a), b)
}

/// Copy bit 31 into bit 30 so the value survives hosts that keep small
/// integers in 31 bits.
#[inline]
pub fn smi(hash: i32) -> i32 {
    let bits = hash as u32;
    (((bits >> 1) & 0x4000_0000) | (bits & 0xBFFF_FFFF)) as i32
}

/// Hash any node. Composites reuse their memoized hash.
pub fn compute_hash(item: &Node) -> i32 {
    match item {
        Node::Null => 0,
        Node::Bool(b) => hash_bool(*b),
        Node::Number(n) => n.as_f64().map_or(0, hash_number),
        Node::String(s) => hash_string(s),
        Node::Object(obj) => obj.hash(),
        Node::Array(arr) => arr.hash(),
    }
}

/// Hash a value that never went through the builder.
///
/// Primitives hash exactly as [`compute_hash`] does. Composites carry no
/// memoized hash, so their compact JSON text is hashed instead; with the
/// default `serde_json` map this text has keys in sorted order.
pub fn compute_raw_hash(item: &Value) -> i32 {
    match item {
        Value::Null => 0,
        Value::Bool(b) => hash_bool(*b),
        Value::Number(n) => n.as_f64().map_or(0, hash_number),
        Value::String(s) => hash_string(s),
        Value::Object(_) | Value::Array(_) => {
            serde_json::to_string(item).map_or(0, |text| hash_string(&text))
        }
    }
}

fn hash_bool(b: bool) -> i32 {
    hash_string(if b { "true" } else { "false" })
}
