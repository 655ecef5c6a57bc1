mod filler_tests;
