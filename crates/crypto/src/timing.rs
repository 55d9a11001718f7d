//! Constant-time operations.

use subtle::ConstantTimeEq;

/// Compare two byte slices in constant time.
///
/// Running time depends only on the slice lengths, never on the position of
/// the first differing byte. Slices of different length compare unequal
/// without inspecting their contents.
pub fn constant_time_compare(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}
