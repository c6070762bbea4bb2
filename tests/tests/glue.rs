#![cfg(feature = "glue")]

use tests::GlueSetup;

partition_index_acceptance_suite::generate_acceptance_tests!(GlueSetup);
