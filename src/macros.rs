/// Creates a [SortedVec](crate::SortedVec) in natural order from a list of elements
#[macro_export]
macro_rules! sorted_vec {
    () => ({
        $crate::SortedVec::default()
    });
    ($($x:expr),*$(,)*) => ({
        let mut seq = $crate::SortedVec::default();
        $(seq.insert($x);)*
        seq
    });
}

/// Creates a [SortedVecSet](crate::SortedVecSet) in natural order from a list of elements.
/// Duplicates are dropped.
#[macro_export]
macro_rules! sorted_vec_set {
    () => ({
        $crate::SortedVecSet::default()
    });
    ($($x:expr),*$(,)*) => ({
        let mut set = $crate::SortedVecSet::default();
        $(set.insert($x);)*
        set
    });
}
