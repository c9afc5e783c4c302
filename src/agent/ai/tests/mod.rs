// Unit tests for the Pacman agents


mod search_tests;
