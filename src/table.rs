//! The fixed full-width to ASCII punctuation table.

use phf::phf_map;

/// Full-width punctuation mapped to its ASCII counterpart.
///
/// No value is also a key, so applying the table twice gives the same
/// result as applying it once.
static SUBSTITUTIONS: phf::Map<char, char> = phf_map! {
    '。' => '.',
    '，' => ',',
    '、' => ',',
    '；' => ';',
    '：' => ':',
    '！' => '!',
    '？' => '?',
    '）' => ')',
    '（' => '(',
    '】' => ']',
    '【' => '[',
    '“' => '"',
    '”' => '"',
    '‘' => '\'',
    '’' => '\'',
};

/// Returns the ASCII replacement for `c`, or `c` itself if it is not in the table.
#[inline]
pub fn substitute(c: char) -> char {
    SUBSTITUTIONS.get(&c).copied().unwrap_or(c)
}

/// Checks whether `c` is one of the converted punctuation marks.
#[inline]
pub fn is_fullwidth_punctuation(c: char) -> bool {
    SUBSTITUTIONS.contains_key(&c)
}

/// Iterates over every `(full-width, ascii)` pair in the table.
pub fn substitutions() -> impl Iterator<Item = (char, char)> {
    SUBSTITUTIONS.entries().map(|(&from, &to)| (from, to))
}
