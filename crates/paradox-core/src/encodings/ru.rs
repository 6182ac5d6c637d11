//! Russian panel character set.
//!
//! Full 256-byte table. `0xA0..=0xC7` and `0xE0..=0xE6` follow the Cyrillic
//! character ROM used by the keypad LCDs; the remaining high bytes hold the
//! Latin-1 letters and symbols the ROM exposes elsewhere.

pub const DECODING_TABLE: [char; 256] = [
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
    'Ä', // 0x80 latin capital letter a with diaeresis
    'Ö', // 0x81 latin capital letter o with diaeresis
    'Ü', // 0x82 latin capital letter u with diaeresis
    'ä', // 0x83 latin small letter a with diaeresis
    'ö', // 0x84 latin small letter o with diaeresis
    'ü', // 0x85 latin small letter u with diaeresis
    'ß', // 0x86 latin small letter sharp s
    'É', // 0x87 latin capital letter e with acute
    'é', // 0x88 latin small letter e with acute
    'È', // 0x89 latin capital letter e with grave
    'è', // 0x8A latin small letter e with grave
    'Ê', // 0x8B latin capital letter e with circumflex
    'ê', // 0x8C latin small letter e with circumflex
    'À', // 0x8D latin capital letter a with grave
    'à', // 0x8E latin small letter a with grave
    'Â', // 0x8F latin capital letter a with circumflex
    'â', // 0x90 latin small letter a with circumflex
    'Ç', // 0x91 latin capital letter c with cedilla
    'ç', // 0x92 latin small letter c with cedilla
    'Ñ', // 0x93 latin capital letter n with tilde
    'ñ', // 0x94 latin small letter n with tilde
    'Å', // 0x95 latin capital letter a with ring above
    'å', // 0x96 latin small letter a with ring above
    'Æ', // 0x97 latin capital letter ae
    'æ', // 0x98 latin small letter ae
    'Ø', // 0x99 latin capital letter o with stroke
    'ø', // 0x9A latin small letter o with stroke
    '£', // 0x9B pound sign
    '¥', // 0x9C yen sign
    '§', // 0x9D section sign
    '°', // 0x9E degree sign
    '±', // 0x9F plus-minus sign
    'Б', // 0xA0 cyrillic capital letter be
    'Г', // 0xA1 cyrillic capital letter ghe
    'Ё', // 0xA2 cyrillic capital letter io
    'Ж', // 0xA3 cyrillic capital letter zhe
    'З', // 0xA4 cyrillic capital letter ze
    'И', // 0xA5 cyrillic capital letter i
    'Й', // 0xA6 cyrillic capital letter short i
    'Л', // 0xA7 cyrillic capital letter el
    'П', // 0xA8 cyrillic capital letter pe
    'У', // 0xA9 cyrillic capital letter u
    'Ф', // 0xAA cyrillic capital letter ef
    'Ч', // 0xAB cyrillic capital letter che
    'Ш', // 0xAC cyrillic capital letter sha
    'Ъ', // 0xAD cyrillic capital letter hard sign
    'Ы', // 0xAE cyrillic capital letter yeru
    'Э', // 0xAF cyrillic capital letter e
    'Ю', // 0xB0 cyrillic capital letter yu
    'Я', // 0xB1 cyrillic capital letter ya
    'б', // 0xB2 cyrillic small letter be
    'в', // 0xB3 cyrillic small letter ve
    'г', // 0xB4 cyrillic small letter ghe
    'ё', // 0xB5 cyrillic small letter io
    'ж', // 0xB6 cyrillic small letter zhe
    'з', // 0xB7 cyrillic small letter ze
    'и', // 0xB8 cyrillic small letter i
    'й', // 0xB9 cyrillic small letter short i
    'к', // 0xBA cyrillic small letter ka
    'л', // 0xBB cyrillic small letter el
    'м', // 0xBC cyrillic small letter em
    'н', // 0xBD cyrillic small letter en
    'п', // 0xBE cyrillic small letter pe
    'т', // 0xBF cyrillic small letter te
    'ч', // 0xC0 cyrillic small letter che
    'ш', // 0xC1 cyrillic small letter sha
    'ъ', // 0xC2 cyrillic small letter hard sign
    'ы', // 0xC3 cyrillic small letter yeru
    'ь', // 0xC4 cyrillic small letter soft sign
    'э', // 0xC5 cyrillic small letter e
    'ю', // 0xC6 cyrillic small letter yu
    'я', // 0xC7 cyrillic small letter ya
    '«', // 0xC8 left-pointing double angle quotation mark
    '»', // 0xC9 right-pointing double angle quotation mark
    '„', // 0xCA double low-9 quotation mark
    '“', // 0xCB left double quotation mark
    '№', // 0xCC numero sign
    '←', // 0xCD leftwards arrow
    '→', // 0xCE rightwards arrow
    '↑', // 0xCF upwards arrow
    '↓', // 0xD0 downwards arrow
    '↵', // 0xD1 downwards arrow with corner leftwards
    '÷', // 0xD2 division sign
    '×', // 0xD3 multiplication sign
    '²', // 0xD4 superscript two
    '³', // 0xD5 superscript three
    '½', // 0xD6 vulgar fraction one half
    '¼', // 0xD7 vulgar fraction one quarter
    '¾', // 0xD8 vulgar fraction three quarters
    'µ', // 0xD9 micro sign
    '¿', // 0xDA inverted question mark
    '¡', // 0xDB inverted exclamation mark
    '©', // 0xDC copyright sign
    '®', // 0xDD registered sign
    '€', // 0xDE euro sign
    '¢', // 0xDF cent sign
    'Д', // 0xE0 cyrillic capital letter de
    'Ц', // 0xE1 cyrillic capital letter tse
    'Щ', // 0xE2 cyrillic capital letter shcha
    'д', // 0xE3 cyrillic small letter de
    'ф', // 0xE4 cyrillic small letter ef
    'ц', // 0xE5 cyrillic small letter tse
    'щ', // 0xE6 cyrillic small letter shcha
    'А', // 0xE7 cyrillic capital letter a
    'В', // 0xE8 cyrillic capital letter ve
    'Е', // 0xE9 cyrillic capital letter ie
    'К', // 0xEA cyrillic capital letter ka
    'М', // 0xEB cyrillic capital letter em
    'Н', // 0xEC cyrillic capital letter en
    'О', // 0xED cyrillic capital letter o
    'Р', // 0xEE cyrillic capital letter er
    'С', // 0xEF cyrillic capital letter es
    'Т', // 0xF0 cyrillic capital letter te
    'Х', // 0xF1 cyrillic capital letter ha
    'Ь', // 0xF2 cyrillic capital letter soft sign
    'а', // 0xF3 cyrillic small letter a
    'е', // 0xF4 cyrillic small letter ie
    'о', // 0xF5 cyrillic small letter o
    'р', // 0xF6 cyrillic small letter er
    'с', // 0xF7 cyrillic small letter es
    'у', // 0xF8 cyrillic small letter u
    'х', // 0xF9 cyrillic small letter ha
    '■', // 0xFA black square
    '□', // 0xFB white square
    '▲', // 0xFC black up-pointing triangle
    '▼', // 0xFD black down-pointing triangle
    '♪', // 0xFE eighth note
    '█', // 0xFF full block
];
