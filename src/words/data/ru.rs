//! Russian dictionary, code page 1251.
//!
//! The uppercase Cyrillic block is contiguous, 0xC0 А through 0xDF Я.

use crate::WORD_LEN;

/// Menu title word, СЛОВА.
pub const TITLE: &[u8; WORD_LEN] = b"\xD1\xCB\xCE\xC2\xC0";

/// Extra characters on the special-character key. Cyrillic needs none
/// beyond the hyphen.
pub const SPECIAL_CHARS: &[u8] = &[];

/// Words round solutions are drawn from.
pub const ANSWERS: &[[u8; WORD_LEN]] = &[
    *b"\xD1\xCB\xCE\xC2\xC0", // СЛОВА
    *b"\xD1\xCB\xCE\xC2\xCE", // СЛОВО
    *b"\xD2\xCE\xD7\xCA\xC0", // ТОЧКА
    *b"\xD0\xD3\xD7\xCA\xC0", // РУЧКА
    *b"\xCA\xCD\xC8\xC3\xC0", // КНИГА
    *b"\xD1\xD2\xC5\xCD\xC0", // СТЕНА
    *b"\xCE\xCA\xC5\xC0\xCD", // ОКЕАН
    *b"\xD0\xC5\xD7\xCA\xC0", // РЕЧКА
    *b"\xC3\xCE\xD0\xCE\xC4", // ГОРОД
    *b"\xC4\xCE\xD1\xCA\xC0", // ДОСКА
    *b"\xC7\xC5\xCC\xCB\xDF", // ЗЕМЛЯ
    *b"\xC2\xC5\xD1\xCD\xC0", // ВЕСНА
    *b"\xCE\xD1\xC5\xCD\xDC", // ОСЕНЬ
    *b"\xC2\xD0\xC5\xCC\xDF", // ВРЕМЯ
    *b"\xCC\xC5\xD1\xD2\xCE", // МЕСТО
    *b"\xCF\xD2\xC8\xD6\xC0", // ПТИЦА
    *b"\xD0\xDB\xC1\xCA\xC0", // РЫБКА
    *b"\xCA\xCE\xD8\xCA\xC0", // КОШКА
    *b"\xCC\xDB\xD8\xCA\xC0", // МЫШКА
    *b"\xC7\xC5\xC1\xD0\xC0", // ЗЕБРА
    *b"\xD1\xC0\xD5\xC0\xD0", // САХАР
    *b"\xCC\xC0\xD1\xCB\xCE", // МАСЛО
    *b"\xCA\xC0\xD0\xD2\xC0", // КАРТА
    *b"\xCB\xC0\xCC\xCF\xC0", // ЛАМПА
    *b"\xC4\xC2\xC5\xD0\xDC", // ДВЕРЬ
    *b"\xCA\xD0\xDB\xD8\xC0", // КРЫША
    *b"\xCF\xCE\xD7\xD2\xC0", // ПОЧТА
    *b"\xD6\xC8\xD4\xD0\xC0", // ЦИФРА
    *b"\xC1\xD3\xCA\xC2\xC0", // БУКВА
    *b"\xC8\xC3\xD0\xCE\xCA", // ИГРОК
    *b"\xD8\xCA\xCE\xCB\xC0", // ШКОЛА
    *b"\xD2\xC5\xC0\xD2\xD0", // ТЕАТР
    *b"\xCC\xD3\xC7\xC5\xC9", // МУЗЕЙ
    *b"\xCF\xC5\xD1\xCD\xDF", // ПЕСНЯ
    *b"\xD2\xC0\xCD\xC5\xD6", // ТАНЕЦ
    *b"\xC2\xC5\xD2\xC5\xD0", // ВЕТЕР
    *b"\xC4\xCE\xC6\xC4\xDC", // ДОЖДЬ
    *b"\xD2\xD3\xD7\xCA\xC0", // ТУЧКА
    *b"\xC3\xD0\xCE\xC7\xC0", // ГРОЗА
    *b"\xC0\xD0\xC1\xD3\xC7", // АРБУЗ
    *b"\xC1\xC0\xCD\xC0\xCD", // БАНАН
    *b"\xC2\xC8\xD8\xCD\xDF", // ВИШНЯ
    *b"\xC3\xD0\xD3\xD8\xC0", // ГРУША
    *b"\xCB\xC8\xCC\xCE\xCD", // ЛИМОН
    *b"\xD1\xCB\xC8\xC2\xC0", // СЛИВА
    *b"\xD2\xDB\xCA\xC2\xC0", // ТЫКВА
    *b"\xDF\xC3\xCE\xC4\xC0", // ЯГОДА
];

/// Only the English list extends guesses beyond its answers.
pub const ALLOWED: &[[u8; WORD_LEN]] = &[];
