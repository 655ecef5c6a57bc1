mod base_error_tests;
