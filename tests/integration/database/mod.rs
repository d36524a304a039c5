//! Repository behavior against SQLite

mod favorites_race_test;
