//! # Code 128 Symbol and Pattern Tables
//!
//! Fixed lookup data for Code 128 subset B.
//!
//! ## Code Values
//!
//! | Range | Meaning |
//! |-------|---------|
//! | 0-94 | Printable ASCII, space (`0x20`) through `~` (`0x7E`) |
//! | 95 | DEL (never produced by this crate) |
//! | 96-102 | FNC3, FNC2, SHIFT, CODE C, FNC4, CODE A, FNC1 |
//! | 103-105 | START A, START B, START C |
//! | 106 | STOP |
//!
//! ## Patterns
//!
//! Each code value maps to an 11-module pattern, `1` for a bar and `0` for a
//! space. Every pattern holds three bars and three spaces.
//!
//! The STOP entry is stored in its 11-module form (`11000111010`); the
//! trailing 2-module termination bar of ISO/IEC 15417 is not appended.

/// A Code 128 code value, 0 through 106.
pub type CodeValue = u8;

/// Width of one symbol pattern in modules.
pub const PATTERN_WIDTH: usize = 11;

/// Number of printable subset-B characters (space through `~`).
pub const PRINTABLE_COUNT: usize = 95;

pub const FNC3: u8 = 96;
pub const FNC2: u8 = 97;
pub const SHIFT: u8 = 98;
pub const CODE_C: u8 = 99;
pub const FNC4: u8 = 100;
pub const CODE_A: u8 = 101;
pub const FNC1: u8 = 102;
pub const START_A: u8 = 103;
pub const START_B: u8 = 104;
pub const START_C: u8 = 105;
pub const STOP: u8 = 106;

/// Bar/space pattern for every code value, indexed by value.
pub const PATTERNS: [&str; 107] = [
    "11011001100", //   0 space
    "11001101100", //   1 `!`
    "11001100110", //   2 `"`
    "10010011000", //   3 `#`
    "10010001100", //   4 `$`
    "10001001100", //   5 `%`
    "10011001000", //   6 `&`
    "10011000100", //   7 `'`
    "10001100100", //   8 `(`
    "11001001000", //   9 `)`
    "11001000100", //  10 `*`
    "11000100100", //  11 `+`
    "10110011100", //  12 `,`
    "10011011100", //  13 `-`
    "10011001110", //  14 `.`
    "10111001100", //  15 `/`
    "10011101100", //  16 `0`
    "10011100110", //  17 `1`
    "11001110010", //  18 `2`
    "11001011100", //  19 `3`
    "11001001110", //  20 `4`
    "11011100100", //  21 `5`
    "11001110100", //  22 `6`
    "11101101110", //  23 `7`
    "11101001100", //  24 `8`
    "11100101100", //  25 `9`
    "11100100110", //  26 `:`
    "11101100100", //  27 `;`
    "11100110100", //  28 `<`
    "11100110010", //  29 `=`
    "11011011000", //  30 `>`
    "11011000110", //  31 `?`
    "11000110110", //  32 `@`
    "10100011000", //  33 `A`
    "10001011000", //  34 `B`
    "10001000110", //  35 `C`
    "10110001000", //  36 `D`
    "10001101000", //  37 `E`
    "10001100010", //  38 `F`
    "11010001000", //  39 `G`
    "11000101000", //  40 `H`
    "11000100010", //  41 `I`
    "10110111000", //  42 `J`
    "10110001110", //  43 `K`
    "10001101110", //  44 `L`
    "10111011000", //  45 `M`
    "10111000110", //  46 `N`
    "10001110110", //  47 `O`
    "11101110110", //  48 `P`
    "11010001110", //  49 `Q`
    "11000101110", //  50 `R`
    "11011101000", //  51 `S`
    "11011100010", //  52 `T`
    "11011101110", //  53 `U`
    "11101011000", //  54 `V`
    "11101000110", //  55 `W`
    "11100010110", //  56 `X`
    "11101101000", //  57 `Y`
    "11101100010", //  58 `Z`
    "11100011010", //  59 `[`
    "11101111010", //  60 `\`
    "11001000010", //  61 `]`
    "11110001010", //  62 `^`
    "10100110000", //  63 `_`
    "10100001100", //  64 ```
    "10010110000", //  65 `a`
    "10010000110", //  66 `b`
    "10000101100", //  67 `c`
    "10000100110", //  68 `d`
    "10110010000", //  69 `e`
    "10110000100", //  70 `f`
    "10011010000", //  71 `g`
    "10011000010", //  72 `h`
    "10000110100", //  73 `i`
    "10000110010", //  74 `j`
    "11000010010", //  75 `k`
    "11001010000", //  76 `l`
    "11110111010", //  77 `m`
    "11000010100", //  78 `n`
    "10001111010", //  79 `o`
    "10100111100", //  80 `p`
    "10010111100", //  81 `q`
    "10010011110", //  82 `r`
    "10111100100", //  83 `s`
    "10011110100", //  84 `t`
    "10011110010", //  85 `u`
    "11110100100", //  86 `v`
    "11110010100", //  87 `w`
    "11110010010", //  88 `x`
    "11011011110", //  89 `y`
    "11011110110", //  90 `z`
    "11110110110", //  91 `{`
    "10101111000", //  92 `|`
    "10100011110", //  93 `}`
    "10001011110", //  94 `~`
    "10111101000", //  95 DEL
    "10111100010", //  96 FNC3
    "11110101000", //  97 FNC2
    "11110100010", //  98 SHIFT
    "10111011110", //  99 CODE C
    "10111101110", // 100 FNC4
    "11101011110", // 101 CODE A
    "11110101110", // 102 FNC1
    "11010000100", // 103 START A
    "11010010000", // 104 START B
    "11010011100", // 105 START C
    "11000111010", // 106 STOP
];

/// An encodable Code 128 entity in subset B.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// A printable character (space through `~`)
    Char(char),
    Fnc1,
    Fnc2,
    Fnc3,
    Fnc4,
    Shift,
    CodeA,
    CodeC,
    StartA,
    StartB,
    StartC,
    Stop,
}

impl Symbol {
    /// Code value for this symbol, or `None` for a non-printable `Char`.
    pub fn code_value(self) -> Option<u8> {
        match self {
            Symbol::Char(c) => code_value(c),
            Symbol::Fnc1 => Some(FNC1),
            Symbol::Fnc2 => Some(FNC2),
            Symbol::Fnc3 => Some(FNC3),
            Symbol::Fnc4 => Some(FNC4),
            Symbol::Shift => Some(SHIFT),
            Symbol::CodeA => Some(CODE_A),
            Symbol::CodeC => Some(CODE_C),
            Symbol::StartA => Some(START_A),
            Symbol::StartB => Some(START_B),
            Symbol::StartC => Some(START_C),
            Symbol::Stop => Some(STOP),
        }
    }

    /// The 11-module pattern for this symbol.
    pub fn pattern(self) -> Option<&'static str> {
        self.code_value().and_then(pattern)
    }
}

/// Look up the subset-B code value of a printable character.
pub fn code_value(c: char) -> Option<u8> {
    match c {
        ' '..='~' => Some(c as u8 - b' '),
        _ => None,
    }
}

/// Inverse of [`code_value`] for values 0-94.
pub fn char_for_value(value: u8) -> Option<char> {
    if (value as usize) < PRINTABLE_COUNT {
        Some((value + b' ') as char)
    } else {
        None
    }
}

/// The 11-module pattern for a code value, or `None` above 106.
pub fn pattern(value: u8) -> Option<&'static str> {
    PATTERNS.get(value as usize).copied()
}

/// Printable symbol keys in storefront key order.
///
/// The storefront's symbol table is a keyed map whose enumeration lists the
/// integer-like keys `0`-`9` first, then every other key in insertion order:
/// `0..=9`, then space through `/`, then `:` through `~`. Checksum symbols in
/// [`ChecksumSymbol::TableKey`] mode are picked by position in this sequence.
///
/// [`ChecksumSymbol::TableKey`]: super::code128::ChecksumSymbol::TableKey
pub fn table_keys() -> impl Iterator<Item = char> {
    (b'0'..=b'9')
        .chain(b' '..=b'/')
        .chain(b':'..=b'~')
        .map(char::from)
}
