mod cli_test;
