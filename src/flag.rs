//! Helpers for integers used as bit flags.
use num_traits::PrimInt;

/// true if all bits of `flag` are set in `flags`
pub fn is_flag_set<T: PrimInt>(flags: T, flag: T) -> bool {
    flags & flag == flag
}

/// `flags` with all bits of `flag` set
pub fn set_flag<T: PrimInt>(flags: T, flag: T) -> T {
    flags | flag
}

/// `flags` with all bits of `flag` set or cleared, depending on `set`
pub fn set_flag_to<T: PrimInt>(flags: T, flag: T, set: bool) -> T {
    if set {
        set_flag(flags, flag)
    } else {
        unset_flag(flags, flag)
    }
}

/// `flags` with all bits of `flag` cleared
pub fn unset_flag<T: PrimInt>(flags: T, flag: T) -> T {
    flags & !flag
}

/// clears `flag` if it is fully set, otherwise sets it
pub fn toggle_flag<T: PrimInt>(flags: T, flag: T) -> T {
    if is_flag_set(flags, flag) {
        unset_flag(flags, flag)
    } else {
        set_flag(flags, flag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: u8 = 0b0001;
    const B: u8 = 0b0010;
    const AB: u8 = A | B;

    #[test]
    fn set_and_unset() {
        assert!(is_flag_set(AB, A));
        assert!(!is_flag_set(A, AB));
        assert_eq!(set_flag(A, B), AB);
        assert_eq!(set_flag(AB, B), AB);
        assert_eq!(unset_flag(AB, B), A);
        assert_eq!(unset_flag(A, B), A);
        assert_eq!(set_flag_to(A, B, true), AB);
        assert_eq!(set_flag_to(AB, A, false), B);
    }

    #[test]
    fn toggle() {
        assert_eq!(toggle_flag(A, B), AB);
        assert_eq!(toggle_flag(AB, B), A);
        // a partially set flag is completed
        assert_eq!(toggle_flag(A, AB), AB);
        assert_eq!(toggle_flag(-1i64, 4), -5);
    }

    #[quickcheck]
    fn toggle_twice_is_identity_for_single_bits(flags: u32, bit: u8) -> bool {
        let flag = 1u32 << (bit % 32);
        toggle_flag(toggle_flag(flags, flag), flag) == flags
    }

    #[quickcheck]
    fn set_then_check(flags: u64, flag: u64) -> bool {
        is_flag_set(set_flag(flags, flag), flag) && (flag == 0 || !is_flag_set(unset_flag(flags, flag), flag))
    }
}
