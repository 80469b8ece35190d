mod assistant_tests;
