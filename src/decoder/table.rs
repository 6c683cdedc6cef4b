use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

use crate::constants::{MOD_LEFT_CTRL, MOD_LEFT_SHIFT, MOD_NONE};
use crate::decoder::{Report, Symbol};
use crate::error::TableError;

use Symbol::{Character, EndOfTransmissionPrimary, EndOfTransmissionSecondary};

/// Keymap of the MCR12 scanner in keyboard emulation mode, as
/// `(modifier, usage ID, symbol)`.
///
/// Usage IDs are from the HID keyboard page on a US layout. Enter ends a scan;
/// the scanner also emits Ctrl+J, kept here as the secondary marker.
pub static MCR12_KEYMAP: [(u8, u8, Symbol); 89] = [
    (MOD_NONE, 0x27, Character('0')),
    (MOD_NONE, 0x1e, Character('1')),
    (MOD_NONE, 0x1f, Character('2')),
    (MOD_NONE, 0x20, Character('3')),
    (MOD_NONE, 0x21, Character('4')),
    (MOD_NONE, 0x22, Character('5')),
    (MOD_NONE, 0x23, Character('6')),
    (MOD_NONE, 0x24, Character('7')),
    (MOD_NONE, 0x25, Character('8')),
    (MOD_NONE, 0x26, Character('9')),
    (MOD_NONE, 0x04, Character('a')),
    (MOD_NONE, 0x05, Character('b')),
    (MOD_NONE, 0x06, Character('c')),
    (MOD_NONE, 0x07, Character('d')),
    (MOD_NONE, 0x08, Character('e')),
    (MOD_NONE, 0x09, Character('f')),
    (MOD_NONE, 0x0a, Character('g')),
    (MOD_NONE, 0x0b, Character('h')),
    (MOD_NONE, 0x0c, Character('i')),
    (MOD_NONE, 0x0d, Character('j')),
    (MOD_NONE, 0x0e, Character('k')),
    (MOD_NONE, 0x0f, Character('l')),
    (MOD_NONE, 0x10, Character('m')),
    (MOD_NONE, 0x11, Character('n')),
    (MOD_NONE, 0x12, Character('o')),
    (MOD_NONE, 0x13, Character('p')),
    (MOD_NONE, 0x14, Character('q')),
    (MOD_NONE, 0x15, Character('r')),
    (MOD_NONE, 0x16, Character('s')),
    (MOD_NONE, 0x17, Character('t')),
    (MOD_NONE, 0x18, Character('u')),
    (MOD_NONE, 0x19, Character('v')),
    (MOD_NONE, 0x1a, Character('w')),
    (MOD_NONE, 0x1b, Character('x')),
    (MOD_NONE, 0x1c, Character('y')),
    (MOD_NONE, 0x1d, Character('z')),
    (MOD_LEFT_SHIFT, 0x04, Character('A')),
    (MOD_LEFT_SHIFT, 0x05, Character('B')),
    (MOD_LEFT_SHIFT, 0x06, Character('C')),
    (MOD_LEFT_SHIFT, 0x07, Character('D')),
    (MOD_LEFT_SHIFT, 0x08, Character('E')),
    (MOD_LEFT_SHIFT, 0x09, Character('F')),
    (MOD_LEFT_SHIFT, 0x0a, Character('G')),
    (MOD_LEFT_SHIFT, 0x0b, Character('H')),
    (MOD_LEFT_SHIFT, 0x0c, Character('I')),
    (MOD_LEFT_SHIFT, 0x0d, Character('J')),
    (MOD_LEFT_SHIFT, 0x0e, Character('K')),
    (MOD_LEFT_SHIFT, 0x0f, Character('L')),
    (MOD_LEFT_SHIFT, 0x10, Character('M')),
    (MOD_LEFT_SHIFT, 0x11, Character('N')),
    (MOD_LEFT_SHIFT, 0x12, Character('O')),
    (MOD_LEFT_SHIFT, 0x13, Character('P')),
    (MOD_LEFT_SHIFT, 0x14, Character('Q')),
    (MOD_LEFT_SHIFT, 0x15, Character('R')),
    (MOD_LEFT_SHIFT, 0x16, Character('S')),
    (MOD_LEFT_SHIFT, 0x17, Character('T')),
    (MOD_LEFT_SHIFT, 0x18, Character('U')),
    (MOD_LEFT_SHIFT, 0x19, Character('V')),
    (MOD_LEFT_SHIFT, 0x1a, Character('W')),
    (MOD_LEFT_SHIFT, 0x1b, Character('X')),
    (MOD_LEFT_SHIFT, 0x1c, Character('Y')),
    (MOD_LEFT_SHIFT, 0x1d, Character('Z')),
    (MOD_LEFT_SHIFT, 0x1e, Character('!')),
    (MOD_LEFT_SHIFT, 0x34, Character('"')),
    (MOD_LEFT_SHIFT, 0x20, Character('#')),
    (MOD_LEFT_SHIFT, 0x21, Character('$')),
    (MOD_LEFT_SHIFT, 0x22, Character('%')),
    (MOD_LEFT_SHIFT, 0x24, Character('&')),
    (MOD_NONE, 0x31, Character('\\')),
    (MOD_NONE, 0x34, Character('\'')),
    (MOD_LEFT_SHIFT, 0x26, Character('(')),
    (MOD_LEFT_SHIFT, 0x27, Character(')')),
    (MOD_LEFT_SHIFT, 0x25, Character('*')),
    (MOD_LEFT_SHIFT, 0x2e, Character('+')),
    (MOD_NONE, 0x36, Character(',')),
    (MOD_NONE, 0x2d, Character('-')),
    (MOD_NONE, 0x37, Character('.')),
    (MOD_NONE, 0x38, Character('/')),
    (MOD_LEFT_SHIFT, 0x33, Character(':')),
    (MOD_NONE, 0x33, Character(';')),
    (MOD_LEFT_SHIFT, 0x38, Character('?')),
    (MOD_LEFT_SHIFT, 0x1f, Character('@')),
    (MOD_NONE, 0x2f, Character('[')),
    (MOD_NONE, 0x30, Character(']')),
    (MOD_LEFT_SHIFT, 0x23, Character('^')),
    (MOD_LEFT_SHIFT, 0x2d, Character('_')),
    (MOD_LEFT_SHIFT, 0x31, Character('|')),
    (MOD_NONE, 0x28, EndOfTransmissionPrimary),
    (MOD_LEFT_CTRL, 0x0d, EndOfTransmissionSecondary),
];

/// Immutable mapping from report pattern to decoded symbol.
///
/// Every pattern maps to one symbol and every character is produced by exactly
/// one pattern, so lookups never depend on iteration order.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    entries: HashMap<Report, Symbol>,
}

impl SymbolTable {
    /// Builds a table, rejecting duplicate patterns and characters reachable
    /// from more than one pattern.
    pub fn new(entries: impl IntoIterator<Item = (Report, Symbol)>) -> Result<Self, TableError> {
        let mut table = HashMap::new();
        let mut characters = HashSet::new();

        for (report, symbol) in entries {
            if let Symbol::Character(c) = symbol {
                if !characters.insert(c) {
                    return Err(TableError::DuplicateCharacter(c));
                }
            }
            match table.entry(report) {
                Entry::Occupied(_) => return Err(TableError::DuplicatePattern(report)),
                Entry::Vacant(slot) => {
                    slot.insert(symbol);
                }
            }
        }

        Ok(SymbolTable { entries: table })
    }

    /// Builds a table from patterns in their 32 digit hex form.
    pub fn from_hex_patterns<'a>(
        entries: impl IntoIterator<Item = (&'a str, Symbol)>,
    ) -> Result<Self, TableError> {
        let parsed = entries
            .into_iter()
            .map(|(pattern, symbol)| Ok((Report::from_hex(pattern)?, symbol)))
            .collect::<Result<Vec<_>, TableError>>()?;
        Self::new(parsed)
    }

    /// The table for the MCR12 scanner.
    pub fn mcr12() -> Result<Self, TableError> {
        Self::new(
            MCR12_KEYMAP
                .iter()
                .map(|&(modifier, usage, symbol)| (Report::key_press(modifier, usage), symbol)),
        )
    }

    pub fn get(&self, report: &Report) -> Option<Symbol> {
        self.entries.get(report).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Report, &Symbol)> {
        self.entries.iter()
    }
}
