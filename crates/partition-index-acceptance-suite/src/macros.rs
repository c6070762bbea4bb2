/// Instantiates every acceptance scenario as a `#[test]` against `$setup`.
///
/// `$setup` is evaluated once per test.
#[macro_export]
macro_rules! generate_acceptance_tests {
    ($setup:expr) => {
        $crate::generate_acceptance_tests_impl!(
            $setup,
            lifecycle { basic delete_twice import }
            disappears { index table database }
            concurrency { same_name_create same_name_create_after_throttling }
            drift { modified_keys_are_replaced }
            create { times_out cancelled unknown_partition_key failed_index }
            faults { transient_absorbed fatal_fails_fast retries_exhausted }
        );
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! generate_acceptance_tests_impl {
    (
        $setup:expr,
        $($module:ident {
            $($test:ident)*
        })*
    ) => {
        $(
            mod $module {
                use super::*;

                $(
                    #[test]
                    fn $test() {
                        let mut test = $crate::Test::new($setup);
                        test.run(async |t| $crate::tests::$module::$test(t).await);
                    }
                )*
            }
        )*
    };
}
