/// Wire format and input validation tests (no database required)
pub mod wire_tests;
