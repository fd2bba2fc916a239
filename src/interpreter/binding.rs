/// Record-level value binding.
///
/// Reads value records line by line and writes them into a `SymbolTable`.
pub mod core;

/// `(index,value)` pair parsing.
///
/// Tokenizes and parses the sparse element list of an array record.
pub mod pairs;
