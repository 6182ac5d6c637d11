//! English panel character set.
//!
//! Covers bytes `0x00..=0xDF`. The upper range carries accented Latin
//! letters, a few currency/math symbols and the two zone-bypass arrows the
//! keypad firmware draws. Byte `0x9F` is a plain `A` on the panel.

pub const DECODING_TABLE: [char; 224] = [
    // 0x00..=0x7F: identity
    '\x00', '\x01', '\x02', '\x03', '\x04', '\x05', '\x06', '\x07',
    '\x08', '\x09', '\x0a', '\x0b', '\x0c', '\x0d', '\x0e', '\x0f',
    '\x10', '\x11', '\x12', '\x13', '\x14', '\x15', '\x16', '\x17',
    '\x18', '\x19', '\x1a', '\x1b', '\x1c', '\x1d', '\x1e', '\x1f',
    ' ', '!', '"', '#', '$', '%', '&', '\'',
    '(', ')', '*', '+', ',', '-', '.', '/',
    '0', '1', '2', '3', '4', '5', '6', '7',
    '8', '9', ':', ';', '<', '=', '>', '?',
    '@', 'A', 'B', 'C', 'D', 'E', 'F', 'G',
    'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O',
    'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W',
    'X', 'Y', 'Z', '[', '\\', ']', '^', '_',
    '`', 'a', 'b', 'c', 'd', 'e', 'f', 'g',
    'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o',
    'p', 'q', 'r', 's', 't', 'u', 'v', 'w',
    'x', 'y', 'z', '{', '|', '}', '~', '\x7f',
    'Û', // 0x80 latin capital letter u with circumflex
    'Ù', // 0x81 latin capital letter u with grave
    'Ú', // 0x82 latin capital letter u with acute
    'Ü', // 0x83 latin capital letter u with diaeresis
    'û', // 0x84 latin small letter u with circumflex
    'ù', // 0x85 latin small letter u with grave
    'ú', // 0x86 latin small letter u with acute
    'ü', // 0x87 latin small letter u with diaeresis
    'Ò', // 0x88 latin capital letter o with grave
    'Ó', // 0x89 latin capital letter o with acute
    'Ö', // 0x8A latin capital letter o with diaeresis
    'Ô', // 0x8B latin capital letter o with circumflex
    'ò', // 0x8C latin small letter o with grave
    'ó', // 0x8D latin small letter o with acute
    'ö', // 0x8E latin small letter o with diaeresis
    'ô', // 0x8F latin small letter o with circumflex
    'Ê', // 0x90 latin capital letter e with circumflex
    'È', // 0x91 latin capital letter e with grave
    'É', // 0x92 latin capital letter e with acute
    'Ë', // 0x93 latin capital letter e with diaeresis
    'ê', // 0x94 latin small letter e with circumflex
    'è', // 0x95 latin small letter e with grave
    'é', // 0x96 latin small letter e with acute
    'ë', // 0x97 latin small letter e with diaeresis
    'Â', // 0x98 latin capital letter a with circumflex
    'Ä', // 0x99 latin capital letter a with diaeresis
    'À', // 0x9A latin capital letter a with grave
    'Á', // 0x9B latin capital letter a with acute
    'â', // 0x9C latin small letter a with circumflex
    'à', // 0x9D latin small letter a with grave
    'ä', // 0x9E latin small letter a with diaeresis
    'A', // 0x9F latin capital letter a
    'á', // 0xA0 latin small letter a with acute
    'Î', // 0xA1 latin capital letter i with circumflex
    'Ì', // 0xA2 latin capital letter i with grave
    'Í', // 0xA3 latin capital letter i with acute
    'Ï', // 0xA4 latin capital letter i with diaeresis
    'î', // 0xA5 latin small letter i with circumflex
    'ì', // 0xA6 latin small letter i with grave
    'í', // 0xA7 latin small letter i with acute
    'ï', // 0xA8 latin small letter i with diaeresis
    'Ñ', // 0xA9 latin capital letter n with tilde
    'ñ', // 0xAA latin small letter n with tilde
    'Ç', // 0xAB latin capital letter c with cedilla
    'ç', // 0xAC latin small letter c with cedilla
    'ß', // 0xAD latin small letter sharp s
    'Æ', // 0xAE latin capital letter ae
    'æ', // 0xAF latin small letter ae
    '°', // 0xB0 degree sign
    '±', // 0xB1 plus-minus sign
    '²', // 0xB2 superscript two
    '³', // 0xB3 superscript three
    'µ', // 0xB4 micro sign
    '¶', // 0xB5 pilcrow sign
    '§', // 0xB6 section sign
    '£', // 0xB7 pound sign
    '¥', // 0xB8 yen sign
    '⤈', // 0xB9 downwards arrow with horizontal stroke
    '⤉', // 0xBA upwards arrow with horizontal stroke
    '←', // 0xBB leftwards arrow
    '→', // 0xBC rightwards arrow
    '↑', // 0xBD upwards arrow
    '↓', // 0xBE downwards arrow
    '÷', // 0xBF division sign
    'Ÿ', // 0xC0 latin capital letter y with diaeresis
    'ÿ', // 0xC1 latin small letter y with diaeresis
    'Å', // 0xC2 latin capital letter a with ring above
    'å', // 0xC3 latin small letter a with ring above
    'Ø', // 0xC4 latin capital letter o with stroke
    'ø', // 0xC5 latin small letter o with stroke
    'Œ', // 0xC6 latin capital ligature oe
    'œ', // 0xC7 latin small ligature oe
    'Ý', // 0xC8 latin capital letter y with acute
    'ý', // 0xC9 latin small letter y with acute
    'Š', // 0xCA latin capital letter s with caron
    'š', // 0xCB latin small letter s with caron
    'Ž', // 0xCC latin capital letter z with caron
    'ž', // 0xCD latin small letter z with caron
    'Õ', // 0xCE latin capital letter o with tilde
    'õ', // 0xCF latin small letter o with tilde
    '¿', // 0xD0 inverted question mark
    '¡', // 0xD1 inverted exclamation mark
    '«', // 0xD2 left-pointing double angle quotation mark
    '»', // 0xD3 right-pointing double angle quotation mark
    '€', // 0xD4 euro sign
    '¢', // 0xD5 cent sign
    '¤', // 0xD6 currency sign
    '©', // 0xD7 copyright sign
    '®', // 0xD8 registered sign
    '¼', // 0xD9 vulgar fraction one quarter
    '½', // 0xDA vulgar fraction one half
    '¾', // 0xDB vulgar fraction three quarters
    '×', // 0xDC multiplication sign
    '■', // 0xDD black square
    '□', // 0xDE white square
    '█', // 0xDF full block
];
