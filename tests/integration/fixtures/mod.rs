// Documents with known vocabulary reports for golden-file testing

#![allow(dead_code)]

/// Dictionary shared by the fixtures below
pub const FIXTURE_WORDS: &[&str] = &[
    "the", "a", "of", "and", "ship", "sailed", "into", "harbor", "crew", "cargo",
    "was", "unloaded", "at", "dawn", "extraordinary", "captain", "pkg", "anchor",
];

/// Extracted text with doubled-character runs and section markers
pub const DOUBLED_TEXT: &str = "TThhee sshhiipp sailed into the harbor. \
The crew unloaded the cargo at dawn, an extraordinary sight.\n\
[[ppkkgg]] Contents: one frobnicator and a widgetmaker.\n\
[[anchor]] The captain kept a zymurgical log; the frobnicator stayed below.";

/// Expected report for DOUBLED_TEXT against FIXTURE_WORDS
pub const DOUBLED_EXPECTED: &str = "non-dictionary words
an
below
contents (pkg?)
frobnicator (pkg?)
kept
log
one (pkg?)
sight
stayed
widgetmaker (pkg?)
zymurgical

infrequent words (<4 occurrences)
anchor, 1
and, 1
at, 1
captain, 1
cargo, 1
crew, 1
dawn, 1
extraordinary, 1
harbor, 1
into, 1
pkg, 1
sailed, 1
ship, 1
unloaded, 1
a, 2

long words
extraordinary

least frequent 150 known words
";

/// Frequency ranks for the rarest-words fixture
pub const FIXTURE_FREQUENCIES: &str = "the 1\nof 2\nand 3\nship 900\ncaptain 1500\nharbor 2100\nzymurgical 99999\n";
