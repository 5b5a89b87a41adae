mod tree_tests;
