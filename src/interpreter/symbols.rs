/// Symbol storage.
///
/// Defines `ScalarSymbol`, `ArraySymbol`, the insertion-ordered `SymbolList`
/// and the `SymbolTable` that holds one list of each kind.
pub mod table;

/// Symbol discovery.
///
/// Scans an expression once and registers every scalar and array name it
/// references.
pub mod discovery;
