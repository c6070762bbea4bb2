use tests::MemorySetup;

partition_index_acceptance_suite::generate_acceptance_tests!(MemorySetup::new());
