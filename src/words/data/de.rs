//! German dictionary, Latin-1.
//!
//! Umlauts and eszett are Latin-1 bytes: 0xC4 Ä, 0xD6 Ö, 0xDC Ü, 0xDF ß.

use crate::WORD_LEN;

/// Menu title word.
pub const TITLE: &[u8; WORD_LEN] = b"WORTE";

/// Extra characters on the special-character key.
pub const SPECIAL_CHARS: &[u8] = &[0xC4, 0xD6, 0xDC, 0xDF];

/// Words round solutions are drawn from.
pub const ANSWERS: &[[u8; WORD_LEN]] = &[
    *b"WORTE", *b"APFEL", *b"BAUER", *b"BERGE", *b"BIRNE", *b"BLICK",
    *b"BLITZ", *b"BODEN", *b"BRAND", *b"BRIEF", *b"BROTE", *b"BUCHT",
    *b"DAMPF", *b"DRAHT", *b"DRUCK", *b"DURST", *b"EBENE", *b"EIMER",
    *b"EISEN", *b"ENGEL", *b"ERNTE", *b"FADEN", *b"FARBE", *b"FEDER",
    *b"FEIER", *b"FERNE", *b"FEUER", *b"FLUSS", *b"FRAGE", *b"GABEL",
    *b"GEIGE", *b"GLANZ", *b"GRUND", *b"HAFEN", *b"HERDE", *b"HONIG",
    *b"KABEL", *b"KERZE", *b"KLANG", *b"KNOPF", *b"KRAFT", *b"KREIS",
    *b"LAMPE", *b"LEBEN", *b"LICHT", *b"MAUER", *b"MILCH", *b"MONAT",
    *b"MUSIK", *b"NACHT", *b"NEBEL", *b"PFERD", *b"PLATZ", *b"PREIS",
    *b"REGEN", *b"REISE", *b"SALAT", *b"SONNE", *b"SPIEL", *b"STERN",
    *b"STUHL", *b"TANTE", *b"TEICH", *b"TIGER", *b"TISCH", *b"TRAUM",
    *b"VOGEL", *b"WAGEN", *b"WELLE", *b"WIESE", *b"WOLKE",
    *b"BIENE", *b"DACHS", *b"FALKE", *b"KATZE", *b"PILZE", *b"SCHAF",
    *b"TAUBE", *b"ZIEGE",
    *b"\xC4PFEL",          // ÄPFEL
    *b"GR\xDCNE",          // GRÜNE
    *b"SCH\xD6N",          // SCHÖN
    *b"GRO\xDFE",          // GROßE
    *b"G\xC4NSE",          // GÄNSE
    *b"L\xD6WEN",          // LÖWEN
    *b"M\xC4USE",          // MÄUSE
    *b"W\xD6LFE",          // WÖLFE
];

/// Only the English list extends guesses beyond its answers.
pub const ALLOWED: &[[u8; WORD_LEN]] = &[];
