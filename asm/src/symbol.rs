use arch::inst::ADDR_MAX;
use arch::symbol::Predefined;
use indexmap::IndexMap;
use serde::Serialize;
use strum::IntoEnumIterator;

use crate::error::Error;

/// First RAM address handed out to variables.
pub const VARIABLE_BASE: u16 = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Predefined,
    Label,
    Variable,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Symbol {
    pub kind: Kind,
    pub value: u16,
    /// Line of the label definition
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
}

/// One namespace for predefined symbols, labels and variables.
/// Entries are never rebound once inserted.
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct SymbolTable {
    symbols: IndexMap<String, Symbol>,
    #[serde(skip)]
    next_variable: u16,
}

impl SymbolTable {
    pub fn new() -> Self {
        let symbols = Predefined::iter()
            .map(|p| {
                let symbol = Symbol {
                    kind: Kind::Predefined,
                    value: p.addr(),
                    line: None,
                };
                (p.to_string(), symbol)
            })
            .collect();
        SymbolTable {
            symbols,
            next_variable: VARIABLE_BASE,
        }
    }

    pub fn define_label(&mut self, name: &str, value: u16, line: usize) -> Result<(), Error> {
        if let Some(prev) = self.symbols.get(name) {
            return Err(Error::RedefinedLabel(name.to_string(), prev.line));
        }
        if value > ADDR_MAX {
            return Err(Error::AddressOverflow(name.to_string()));
        }
        let symbol = Symbol {
            kind: Kind::Label,
            value,
            line: Some(line),
        };
        self.symbols.insert(name.to_string(), symbol);
        Ok(())
    }

    /// Address of `name`, binding it to the next free variable slot on first sight.
    pub fn resolve(&mut self, name: &str) -> Result<u16, Error> {
        if let Some(value) = self.get_val(name) {
            return Ok(value);
        }
        let value = self.next_variable;
        if value > ADDR_MAX {
            return Err(Error::AddressOverflow(name.to_string()));
        }
        let symbol = Symbol {
            kind: Kind::Variable,
            value,
            line: None,
        };
        self.symbols.insert(name.to_string(), symbol);
        self.next_variable += 1;
        Ok(value)
    }

    pub fn get(&self, name: &str) -> Option<&Symbol> {
        self.symbols.get(name)
    }

    pub fn get_val(&self, name: &str) -> Option<u16> {
        self.symbols.get(name).map(|symbol| symbol.value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Symbol)> {
        self.symbols.iter()
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn count(&self, kind: Kind) -> usize {
        self.symbols.values().filter(|s| s.kind == kind).count()
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predefined_symbols() {
        let mut table = SymbolTable::new();
        let fixed = [
            ("R0", 0),
            ("R7", 7),
            ("R15", 15),
            ("SP", 0),
            ("LCL", 1),
            ("ARG", 2),
            ("THIS", 3),
            ("THAT", 4),
            ("SCREEN", 16384),
            ("KBD", 24576),
        ];
        for (name, addr) in fixed {
            assert_eq!(table.resolve(name).unwrap(), addr, "symbol: {}", name);
        }
        assert_eq!(table.count(Kind::Predefined), 23);
        assert_eq!(table.count(Kind::Variable), 0);
        assert_eq!(table.resolve("first").unwrap(), VARIABLE_BASE);
    }

    #[test]
    fn variables_are_allocated_in_order() {
        let mut table = SymbolTable::new();
        assert_eq!(table.resolve("i").unwrap(), 16);
        assert_eq!(table.resolve("sum").unwrap(), 17);
        assert_eq!(table.resolve("i").unwrap(), 16);
        assert_eq!(table.get("sum").map(|s| s.kind), Some(Kind::Variable));
        assert_eq!(table.count(Kind::Variable), 2);
    }

    #[test]
    fn labels_do_not_take_variable_slots() {
        let mut table = SymbolTable::new();
        table.define_label("LOOP", 4, 2).unwrap();
        assert_eq!(table.resolve("LOOP").unwrap(), 4);
        assert_eq!(table.resolve("x").unwrap(), 16);
        assert_eq!(table.get("LOOP").and_then(|s| s.line), Some(2));
    }

    #[test]
    fn redefinition_is_rejected() {
        let mut table = SymbolTable::new();
        table.define_label("END", 10, 7).unwrap();
        match table.define_label("END", 12, 9) {
            Err(Error::RedefinedLabel(name, prev)) => {
                assert_eq!(name, "END");
                assert_eq!(prev, Some(7));
            }
            other => panic!("unexpected: {:?}", other),
        }
        assert_eq!(table.get_val("END"), Some(10));
        assert!(matches!(
            table.define_label("SCREEN", 0, 1),
            Err(Error::RedefinedLabel(_, None))
        ));
    }

    #[test]
    fn variable_space_is_bounded() {
        let mut table = SymbolTable::new();
        table.next_variable = ADDR_MAX;
        assert_eq!(table.resolve("last").unwrap(), ADDR_MAX);
        assert!(matches!(
            table.resolve("one_too_many"),
            Err(Error::AddressOverflow(name)) if name == "one_too_many"
        ));
        assert_eq!(table.get("one_too_many"), None);
    }

    #[test]
    fn serializes_as_yaml_map() {
        let mut table = SymbolTable::new();
        table.define_label("LOOP", 3, 5).unwrap();
        table.resolve("total").unwrap();
        let yaml = serde_yaml::to_string(&table).unwrap();
        assert!(yaml.contains("LOOP:\n  kind: label\n  value: 3\n  line: 5\n"));
        assert!(yaml.contains("total:\n  kind: variable\n  value: 16\n"));
        assert!(yaml.starts_with("R0:\n  kind: predefined\n  value: 0\n"));
    }
}
