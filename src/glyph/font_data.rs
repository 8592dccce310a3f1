//! Preset 8x8 font data for the ASCII and block-graphic glyph sets.
//!
//! Each glyph is eight bytes, one per row, most significant bit leftmost.

/// Bitmaps for the printable ASCII range `' '..='~'`, indexed by `ch - 0x20`.
pub(crate) const ASCII_GLYPHS: [[u8; 8]; 95] = [
    // ' '
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // '!'
    [0x00, 0x10, 0x10, 0x10, 0x10, 0x00, 0x10, 0x00],
    // '"'
    [0x00, 0x24, 0x24, 0x00, 0x00, 0x00, 0x00, 0x00],
    // '#'
    [0x00, 0x24, 0x7E, 0x24, 0x24, 0x7E, 0x24, 0x00],
    // '$'
    [0x00, 0x08, 0x3E, 0x28, 0x3E, 0x0A, 0x3E, 0x08],
    // '%'
    [0x00, 0x62, 0x64, 0x08, 0x10, 0x26, 0x46, 0x00],
    // '&'
    [0x00, 0x10, 0x28, 0x10, 0x2A, 0x44, 0x3A, 0x00],
    // '\''
    [0x00, 0x08, 0x10, 0x00, 0x00, 0x00, 0x00, 0x00],
    // '('
    [0x00, 0x04, 0x08, 0x08, 0x08, 0x08, 0x04, 0x00],
    // ')'
    [0x00, 0x20, 0x10, 0x10, 0x10, 0x10, 0x20, 0x00],
    // '*'
    [0x00, 0x00, 0x14, 0x08, 0x3E, 0x08, 0x14, 0x00],
    // '+'
    [0x00, 0x00, 0x08, 0x08, 0x3E, 0x08, 0x08, 0x00],
    // ','
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x08, 0x08, 0x10],
    // '-'
    [0x00, 0x00, 0x00, 0x00, 0x3E, 0x00, 0x00, 0x00],
    // '.'
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x18, 0x18, 0x00],
    // '/'
    [0x00, 0x00, 0x02, 0x04, 0x08, 0x10, 0x20, 0x00],
    // '0'
    [0x00, 0x3C, 0x46, 0x4A, 0x52, 0x62, 0x3C, 0x00],
    // '1'
    [0x00, 0x18, 0x28, 0x08, 0x08, 0x08, 0x3E, 0x00],
    // '2'
    [0x00, 0x3C, 0x42, 0x02, 0x3C, 0x40, 0x7E, 0x00],
    // '3'
    [0x00, 0x3C, 0x42, 0x0C, 0x02, 0x42, 0x3C, 0x00],
    // '4'
    [0x00, 0x08, 0x18, 0x28, 0x48, 0x7E, 0x08, 0x00],
    // '5'
    [0x00, 0x7E, 0x40, 0x7C, 0x02, 0x42, 0x3C, 0x00],
    // '6'
    [0x00, 0x3C, 0x40, 0x7C, 0x42, 0x42, 0x3C, 0x00],
    // '7'
    [0x00, 0x7E, 0x02, 0x04, 0x08, 0x10, 0x10, 0x00],
    // '8'
    [0x00, 0x3C, 0x42, 0x3C, 0x42, 0x42, 0x3C, 0x00],
    // '9'
    [0x00, 0x3C, 0x42, 0x42, 0x3E, 0x02, 0x3C, 0x00],
    // ':'
    [0x00, 0x00, 0x00, 0x10, 0x00, 0x00, 0x10, 0x00],
    // ';'
    [0x00, 0x00, 0x10, 0x00, 0x00, 0x10, 0x10, 0x20],
    // '<'
    [0x00, 0x00, 0x04, 0x08, 0x10, 0x08, 0x04, 0x00],
    // '='
    [0x00, 0x00, 0x00, 0x3E, 0x00, 0x3E, 0x00, 0x00],
    // '>'
    [0x00, 0x00, 0x10, 0x08, 0x04, 0x08, 0x10, 0x00],
    // '?'
    [0x00, 0x3C, 0x42, 0x04, 0x08, 0x00, 0x08, 0x00],
    // '@'
    [0x00, 0x3C, 0x4A, 0x56, 0x5E, 0x40, 0x3C, 0x00],
    // 'A'
    [0x00, 0x3C, 0x42, 0x42, 0x7E, 0x42, 0x42, 0x00],
    // 'B'
    [0x00, 0x7C, 0x42, 0x7C, 0x42, 0x42, 0x7C, 0x00],
    // 'C'
    [0x00, 0x3C, 0x42, 0x40, 0x40, 0x42, 0x3C, 0x00],
    // 'D'
    [0x00, 0x78, 0x44, 0x42, 0x42, 0x44, 0x78, 0x00],
    // 'E'
    [0x00, 0x7E, 0x40, 0x7C, 0x40, 0x40, 0x7E, 0x00],
    // 'F'
    [0x00, 0x7E, 0x40, 0x7C, 0x40, 0x40, 0x40, 0x00],
    // 'G'
    [0x00, 0x3C, 0x42, 0x40, 0x4E, 0x42, 0x3C, 0x00],
    // 'H'
    [0x00, 0x42, 0x42, 0x7E, 0x42, 0x42, 0x42, 0x00],
    // 'I'
    [0x00, 0x3E, 0x08, 0x08, 0x08, 0x08, 0x3E, 0x00],
    // 'J'
    [0x00, 0x02, 0x02, 0x02, 0x42, 0x42, 0x3C, 0x00],
    // 'K'
    [0x00, 0x44, 0x48, 0x70, 0x48, 0x44, 0x42, 0x00],
    // 'L'
    [0x00, 0x40, 0x40, 0x40, 0x40, 0x40, 0x7E, 0x00],
    // 'M'
    [0x00, 0x42, 0x66, 0x5A, 0x42, 0x42, 0x42, 0x00],
    // 'N'
    [0x00, 0x42, 0x62, 0x52, 0x4A, 0x46, 0x42, 0x00],
    // 'O'
    [0x00, 0x3C, 0x42, 0x42, 0x42, 0x42, 0x3C, 0x00],
    // 'P'
    [0x00, 0x7C, 0x42, 0x42, 0x7C, 0x40, 0x40, 0x00],
    // 'Q'
    [0x00, 0x3C, 0x42, 0x42, 0x52, 0x4A, 0x3C, 0x00],
    // 'R'
    [0x00, 0x7C, 0x42, 0x42, 0x7C, 0x44, 0x42, 0x00],
    // 'S'
    [0x00, 0x3C, 0x40, 0x3C, 0x02, 0x42, 0x3C, 0x00],
    // 'T'
    [0x00, 0xFE, 0x10, 0x10, 0x10, 0x10, 0x10, 0x00],
    // 'U'
    [0x00, 0x42, 0x42, 0x42, 0x42, 0x42, 0x3C, 0x00],
    // 'V'
    [0x00, 0x42, 0x42, 0x42, 0x42, 0x24, 0x18, 0x00],
    // 'W'
    [0x00, 0x42, 0x42, 0x42, 0x42, 0x5A, 0x24, 0x00],
    // 'X'
    [0x00, 0x42, 0x24, 0x18, 0x18, 0x24, 0x42, 0x00],
    // 'Y'
    [0x00, 0x82, 0x44, 0x28, 0x10, 0x10, 0x10, 0x00],
    // 'Z'
    [0x00, 0x7E, 0x04, 0x08, 0x10, 0x20, 0x7E, 0x00],
    // '['
    [0x00, 0x0E, 0x08, 0x08, 0x08, 0x08, 0x0E, 0x00],
    // '\\'
    [0x00, 0x00, 0x40, 0x20, 0x10, 0x08, 0x04, 0x00],
    // ']'
    [0x00, 0x70, 0x10, 0x10, 0x10, 0x10, 0x70, 0x00],
    // '^'
    [0x00, 0x10, 0x38, 0x54, 0x10, 0x10, 0x10, 0x00],
    // '_'
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFF],
    // '`'
    [0x00, 0x1C, 0x22, 0x78, 0x20, 0x20, 0x7E, 0x00],
    // 'a'
    [0x00, 0x00, 0x38, 0x04, 0x3C, 0x44, 0x3C, 0x00],
    // 'b'
    [0x00, 0x20, 0x20, 0x3C, 0x22, 0x22, 0x3C, 0x00],
    // 'c'
    [0x00, 0x00, 0x1C, 0x20, 0x20, 0x20, 0x1C, 0x00],
    // 'd'
    [0x00, 0x04, 0x04, 0x3C, 0x44, 0x44, 0x3C, 0x00],
    // 'e'
    [0x00, 0x00, 0x38, 0x44, 0x78, 0x40, 0x3C, 0x00],
    // 'f'
    [0x00, 0x0C, 0x10, 0x18, 0x10, 0x10, 0x10, 0x00],
    // 'g'
    [0x00, 0x00, 0x3C, 0x44, 0x44, 0x3C, 0x04, 0x38],
    // 'h'
    [0x00, 0x40, 0x40, 0x78, 0x44, 0x44, 0x44, 0x00],
    // 'i'
    [0x00, 0x10, 0x00, 0x30, 0x10, 0x10, 0x38, 0x00],
    // 'j'
    [0x00, 0x04, 0x00, 0x04, 0x04, 0x04, 0x24, 0x18],
    // 'k'
    [0x00, 0x20, 0x28, 0x30, 0x30, 0x28, 0x24, 0x00],
    // 'l'
    [0x00, 0x10, 0x10, 0x10, 0x10, 0x10, 0x0C, 0x00],
    // 'm'
    [0x00, 0x00, 0x68, 0x54, 0x54, 0x54, 0x54, 0x00],
    // 'n'
    [0x00, 0x00, 0x78, 0x44, 0x44, 0x44, 0x44, 0x00],
    // 'o'
    [0x00, 0x00, 0x38, 0x44, 0x44, 0x44, 0x38, 0x00],
    // 'p'
    [0x00, 0x00, 0x78, 0x44, 0x44, 0x78, 0x40, 0x40],
    // 'q'
    [0x00, 0x00, 0x3C, 0x44, 0x44, 0x3C, 0x04, 0x06],
    // 'r'
    [0x00, 0x00, 0x1C, 0x20, 0x20, 0x20, 0x20, 0x00],
    // 's'
    [0x00, 0x00, 0x38, 0x40, 0x38, 0x04, 0x78, 0x00],
    // 't'
    [0x00, 0x10, 0x38, 0x10, 0x10, 0x10, 0x0C, 0x00],
    // 'u'
    [0x00, 0x00, 0x44, 0x44, 0x44, 0x44, 0x38, 0x00],
    // 'v'
    [0x00, 0x00, 0x44, 0x44, 0x28, 0x28, 0x10, 0x00],
    // 'w'
    [0x00, 0x00, 0x44, 0x54, 0x54, 0x54, 0x28, 0x00],
    // 'x'
    [0x00, 0x00, 0x44, 0x28, 0x10, 0x28, 0x44, 0x00],
    // 'y'
    [0x00, 0x00, 0x44, 0x44, 0x44, 0x3C, 0x04, 0x38],
    // 'z'
    [0x00, 0x00, 0x7C, 0x08, 0x10, 0x20, 0x7C, 0x00],
    // '{'
    [0x00, 0x0E, 0x08, 0x30, 0x08, 0x08, 0x0E, 0x00],
    // '|'
    [0x00, 0x08, 0x08, 0x08, 0x08, 0x08, 0x08, 0x00],
    // '}'
    [0x00, 0x70, 0x10, 0x0C, 0x10, 0x10, 0x70, 0x00],
    // '~'
    [0x00, 0x14, 0x28, 0x00, 0x00, 0x00, 0x00, 0x00],
];

/// Preset block-graphic glyphs, keyed by uppercase letter slots.
pub(crate) const PRESET_GRAPHIC_GLYPHS: [(char, [u8; 8]); 24] = [
    ('A', [0xF0, 0xF0, 0xF0, 0xF0, 0x00, 0x00, 0x00, 0x00]),
    ('B', [0x0F, 0x0F, 0x0F, 0x0F, 0x00, 0x00, 0x00, 0x00]),
    ('C', [0x00, 0x00, 0x00, 0x00, 0xF0, 0xF0, 0xF0, 0xF0]),
    ('D', [0x00, 0x00, 0x00, 0x00, 0x0F, 0x0F, 0x0F, 0x0F]),
    ('E', [0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x00]),
    ('F', [0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF]),
    ('G', [0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0]),
    ('H', [0x0F, 0x0F, 0x0F, 0x0F, 0x0F, 0x0F, 0x0F, 0x0F]),
    ('I', [0xF0, 0xF0, 0xF0, 0xF0, 0x0F, 0x0F, 0x0F, 0x0F]),
    ('J', [0x0F, 0x0F, 0x0F, 0x0F, 0xF0, 0xF0, 0xF0, 0xF0]),
    ('K', [0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF]),
    ('L', [0xA0, 0x50, 0xA0, 0x50, 0x00, 0x00, 0x00, 0x00]),
    ('M', [0x0A, 0x05, 0x0A, 0x05, 0x00, 0x00, 0x00, 0x00]),
    ('N', [0x00, 0x00, 0x00, 0x00, 0xA0, 0x50, 0xA0, 0x50]),
    ('O', [0x00, 0x00, 0x00, 0x00, 0x0A, 0x05, 0x0A, 0x05]),
    ('P', [0xAA, 0x55, 0xAA, 0x55, 0x00, 0x00, 0x00, 0x00]),
    ('Q', [0x00, 0x00, 0x00, 0x00, 0xAA, 0x55, 0xAA, 0x55]),
    ('R', [0xA0, 0x50, 0xA0, 0x50, 0xA0, 0x50, 0xA0, 0x50]),
    ('S', [0x0A, 0x05, 0x0A, 0x05, 0x0A, 0x05, 0x0A, 0x05]),
    ('T', [0xA0, 0x50, 0xA0, 0x50, 0x0A, 0x05, 0x0A, 0x05]),
    ('U', [0x0A, 0x05, 0x0A, 0x05, 0xA0, 0x50, 0xA0, 0x50]),
    ('V', [0xAA, 0x55, 0xAA, 0x55, 0xAA, 0x55, 0xAA, 0x55]),
    ('W', [0xFF, 0x00, 0xFF, 0x00, 0xFF, 0x00, 0xFF, 0x00]),
    ('X', [0xAA, 0xAA, 0xAA, 0xAA, 0xAA, 0xAA, 0xAA, 0xAA]),
];
