//! Bookkeeping for the aggregated export surface of the API groups.
//!
//! Each group contributes its symbols in declaration order. The first group to
//! export a name owns it; a later group exporting the same name is recorded as
//! shadowed instead of replacing the earlier binding.

use crate::apis::API_GROUPS;
use crate::utils::error::{ClientError, Result};
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// Never copied into the aggregate surface.
pub const RESERVED_SYMBOL: &str = "default";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiGroup {
    pub name: &'static str,
    pub symbols: &'static [&'static str],
}

impl ApiGroup {
    pub const fn new(name: &'static str, symbols: &'static [&'static str]) -> Self {
        Self { name, symbols }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shadowed {
    pub symbol: &'static str,
    pub kept_from: &'static str,
    pub dropped_from: &'static str,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportSurface {
    bindings: BTreeMap<&'static str, &'static str>,
    shadowed: Vec<Shadowed>,
}

impl ExportSurface {
    pub fn aggregate<'a, I>(groups: I) -> Self
    where
        I: IntoIterator<Item = &'a ApiGroup>,
    {
        let mut surface = Self::default();
        for group in groups {
            surface.register(group);
        }
        surface
    }

    fn register(&mut self, group: &ApiGroup) {
        for &symbol in group.symbols {
            if symbol == RESERVED_SYMBOL {
                continue;
            }
            match self.bindings.get(symbol) {
                Some(&owner) => {
                    tracing::debug!(
                        "{} from {} is shadowed by {}",
                        symbol,
                        group.name,
                        owner
                    );
                    self.shadowed.push(Shadowed {
                        symbol,
                        kept_from: owner,
                        dropped_from: group.name,
                    });
                }
                None => {
                    self.bindings.insert(symbol, group.name);
                }
            }
        }
    }

    /// The group whose binding is reachable under `symbol`.
    pub fn resolve(&self, symbol: &str) -> Option<&'static str> {
        self.bindings.get(symbol).copied()
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.bindings.contains_key(symbol)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Symbols in lexicographic order.
    pub fn symbols(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.bindings.keys().copied()
    }

    pub fn shadowed(&self) -> &[Shadowed] {
        &self.shadowed
    }

    pub fn ensure_unambiguous(&self) -> Result<()> {
        match self.shadowed.first() {
            Some(collision) => Err(ClientError::SymbolCollision {
                symbol: collision.symbol.to_string(),
                first: collision.kept_from.to_string(),
                second: collision.dropped_from.to_string(),
            }),
            None => Ok(()),
        }
    }
}

/// The surface of all shipped groups, built on first use.
pub fn api_surface() -> &'static ExportSurface {
    static SURFACE: OnceLock<ExportSurface> = OnceLock::new();
    SURFACE.get_or_init(|| {
        let surface = ExportSurface::aggregate(&API_GROUPS);
        for collision in surface.shadowed() {
            tracing::warn!(
                "Symbol {} of {} is unreachable, {} already exports it",
                collision.symbol,
                collision.dropped_from,
                collision.kept_from
            );
        }
        tracing::debug!(
            "Aggregated {} symbols from {} API groups",
            surface.len(),
            API_GROUPS.len()
        );
        surface
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: ApiGroup = ApiGroup::new("A", &["Foo", "Bar"]);
    const B: ApiGroup = ApiGroup::new("B", &["Bar", "Baz"]);

    #[test]
    fn test_first_writer_wins() {
        let surface = ExportSurface::aggregate(&[A, B]);

        assert_eq!(surface.symbols().collect::<Vec<_>>(), vec!["Bar", "Baz", "Foo"]);
        assert_eq!(surface.resolve("Bar"), Some("A"));
        assert_eq!(surface.resolve("Foo"), Some("A"));
        assert_eq!(surface.resolve("Baz"), Some("B"));
        assert_eq!(
            surface.shadowed(),
            &[Shadowed {
                symbol: "Bar",
                kept_from: "A",
                dropped_from: "B",
            }]
        );
    }

    #[test]
    fn test_declaration_order_decides_collisions() {
        let surface = ExportSurface::aggregate(&[B, A]);

        assert_eq!(surface.len(), 3);
        assert_eq!(surface.resolve("Bar"), Some("B"));
        assert_eq!(surface.shadowed()[0].dropped_from, "A");
    }

    #[test]
    fn test_reserved_symbol_is_skipped() {
        let group = ApiGroup::new("WithDefault", &["default", "Client"]);
        let surface = ExportSurface::aggregate(&[group]);

        assert!(!surface.contains("default"));
        assert!(surface.contains("Client"));
        assert_eq!(surface.len(), 1);
        assert!(surface.shadowed().is_empty());
    }

    #[test]
    fn test_aggregation_is_idempotent() {
        let first = ExportSurface::aggregate(&[A, B]);
        let second = ExportSurface::aggregate(&[A, B]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_removing_a_group_removes_only_its_unique_symbols() {
        let c = ApiGroup::new("C", &["Qux"]);
        let with = ExportSurface::aggregate(&[A, B, c]);
        let without = ExportSurface::aggregate(&[A, c]);

        assert!(!without.contains("Baz"));
        assert_eq!(without.resolve("Bar"), Some("A"));
        assert_eq!(without.resolve("Qux"), Some("C"));
        assert_eq!(with.len() - without.len(), 1);
    }

    #[test]
    fn test_adding_a_disjoint_group_grows_by_its_symbol_count() {
        let extra = ApiGroup::new("Extra", &["One", "Two", "Three"]);
        let before = ExportSurface::aggregate(&[A, B]);
        let after = ExportSurface::aggregate(&[A, B, extra]);

        assert_eq!(after.len(), before.len() + extra.symbols.len());
        for symbol in before.symbols() {
            assert_eq!(after.resolve(symbol), before.resolve(symbol));
        }
    }

    #[test]
    fn test_ensure_unambiguous_reports_first_collision() {
        let err = ExportSurface::aggregate(&[A, B]).ensure_unambiguous().unwrap_err();
        assert_eq!(err.to_string(), "Symbol 'Bar' exported by both A and B");
        assert!(ExportSurface::aggregate(&[A]).ensure_unambiguous().is_ok());
    }

    #[test]
    fn test_empty_surface() {
        let surface = ExportSurface::aggregate(&[]);
        assert!(surface.is_empty());
        assert_eq!(surface.resolve("Foo"), None);
    }
}
