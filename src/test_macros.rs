/// checks that a sorted collection of i64 stays sorted under every mutation
macro_rules! sort_invariant_holds {
    ($test:ty) => {
        #[quickcheck]
        fn sorted_after_every_insert(elements: Vec<i64>) -> bool {
            let mut c = <$test>::default();
            elements.into_iter().all(|e| {
                c.insert(e);
                c.comparator().is_sorted(c.as_slice())
            })
        }

        #[quickcheck]
        fn sorted_after_every_insert_reversed(elements: Vec<i64>) -> bool {
            let mut c = <$test>::with_comparator(Comparator::natural().reversed());
            elements.into_iter().all(|e| {
                c.insert(e);
                c.comparator().is_sorted(c.as_slice())
            })
        }

        #[quickcheck]
        fn sorted_after_collect(elements: Vec<i64>) -> bool {
            let c: $test = elements.into_iter().collect();
            c.comparator().is_sorted(c.as_slice())
        }

        #[quickcheck]
        fn sorted_after_remove(elements: Vec<i64>, removed: Vec<i64>) -> bool {
            let mut c: $test = elements.into_iter().collect();
            removed.iter().all(|e| {
                c.remove(e);
                c.comparator().is_sorted(c.as_slice())
            })
        }

        #[quickcheck]
        fn sorted_after_set_comparator(elements: Vec<i64>) -> bool {
            let mut c: $test = elements.into_iter().collect();
            c.set_comparator(Comparator::natural().reversed());
            let reversed = c.comparator().is_sorted(c.as_slice());
            c.set_comparator(Comparator::natural());
            reversed && c.comparator().is_sorted(c.as_slice())
        }
    };
}

/// checks that positional insertion is always rejected, whatever the arguments
macro_rules! positional_insert_rejected {
    ($test:ty) => {
        #[quickcheck]
        fn insert_at_is_unsupported(elements: Vec<i64>, index: usize, value: i64) -> bool {
            let mut c: $test = elements.into_iter().collect();
            let before = c.as_slice().to_vec();
            let rejected = matches!(
                c.insert_at(index, value),
                Err($crate::Error::UnsupportedOperation(_))
            );
            rejected && c.as_slice() == before.as_slice()
        }
    };
}
