use super::*;

mod parse_test;
