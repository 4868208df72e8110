//! Finnish dictionary, Latin-1.
//!
//! The extra vowels are Latin-1 bytes: 0xC4 Ä, 0xD6 Ö.

use crate::WORD_LEN;

/// Menu title word.
pub const TITLE: &[u8; WORD_LEN] = b"SANAT";

/// Extra characters on the special-character key.
pub const SPECIAL_CHARS: &[u8] = &[0xC4, 0xD6];

/// Words round solutions are drawn from.
pub const ANSWERS: &[[u8; WORD_LEN]] = &[
    *b"SANAT", *b"AALTO", *b"AARRE", *b"HELMI", *b"HETKI", *b"HUONE",
    *b"KALAT", *b"KIELI", *b"KIRJA", *b"KISSA", *b"KOIRA", *b"KUKKA",
    *b"KUUSI", *b"LAIVA", *b"LAMPI", *b"LEHTI", *b"LINTU", *b"MAITO",
    *b"MARJA", *b"NIEMI", *b"NORSU", *b"PELTO", *b"PILVI", *b"POLKU",
    *b"RANTA", *b"SAARI", *b"SIENI", *b"SILTA", *b"TALVI", *b"TUULI",
    *b"VIRTA", *b"VUORI", *b"JOULU", *b"OMENA", *b"PAPPI", *b"RUOKA",
    *b"SUKKA", *b"TAKKI", *b"YKSIN",
    *b"HIIRI", *b"HYLJE", *b"KETTU", *b"KARHU", *b"PEURA", *b"HIRVI",
    *b"ORAVA", *b"KOTKA", *b"HAUKI", *b"AHVEN",
    *b"METS\xC4",          // METSÄ
    *b"M\xD6KKI",          // MÖKKI
    *b"P\xD6YT\xC4",       // PÖYTÄ
    *b"SYD\xC4N",          // SYDÄN
    *b"T\xC4HTI",          // TÄHTI
    *b"J\xC4RVI",          // JÄRVI
    *b"LEIP\xC4",          // LEIPÄ
    *b"P\xD6LL\xD6",       // PÖLLÖ
];

/// Only the English list extends guesses beyond its answers.
pub const ALLOWED: &[[u8; WORD_LEN]] = &[];
