mod schema_tests;
mod type_ref_tests;
