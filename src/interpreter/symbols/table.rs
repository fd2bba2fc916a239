use std::collections::HashMap;

/// Common behaviour of everything stored in a [`SymbolList`].
///
/// Symbols are identified by name alone; two symbols with the same name are
/// the same symbol regardless of their values.
pub trait Symbol {
    /// Creates a symbol with its default value.
    fn with_name(name: &str) -> Self;
    /// The identifying name.
    fn name(&self) -> &str;
}

/// A named scalar variable holding a single integer.
#[derive(Debug, Clone)]
pub struct ScalarSymbol {
    /// The variable name.
    pub name:  String,
    /// The bound value, `0` until a value is loaded.
    pub value: i64,
}

/// A named one-dimensional array of integers.
///
/// The backing store is empty until a value record allocates it; after that
/// its length never changes until the array is re-bound.
#[derive(Debug, Clone)]
pub struct ArraySymbol {
    /// The array name.
    pub name:   String,
    /// The backing store.
    pub values: Vec<i64>,
}

impl Symbol for ScalarSymbol {
    fn with_name(name: &str) -> Self {
        Self { name:  name.to_string(),
               value: 0, }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl Symbol for ArraySymbol {
    fn with_name(name: &str) -> Self {
        Self { name:   name.to_string(),
               values: Vec::new(), }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl PartialEq for ScalarSymbol {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for ScalarSymbol {}

impl PartialEq for ArraySymbol {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for ArraySymbol {}

impl std::fmt::Display for ScalarSymbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}={}", self.name, self.value)
    }
}

impl std::fmt::Display for ArraySymbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}=[", self.name)?;
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, "]")
    }
}

/// An insertion-ordered collection of symbols with name lookup.
///
/// Iteration yields symbols in the order they were first inserted. Inserting
/// a name that is already present is a no-op.
#[derive(Debug, Clone)]
pub struct SymbolList<T> {
    entries: Vec<T>,
    index:   HashMap<String, usize>,
}

impl<T> Default for SymbolList<T> {
    fn default() -> Self {
        Self { entries: Vec::new(),
               index:   HashMap::new(), }
    }
}

impl<T: Symbol> SymbolList<T> {
    /// Registers `name` with a default value.
    ///
    /// Returns `true` if the name was new, `false` if it was already present.
    ///
    /// # Example
    /// ```
    /// use symbex::interpreter::symbols::table::{ScalarSymbol, SymbolList};
    ///
    /// let mut list = SymbolList::<ScalarSymbol>::default();
    /// assert!(list.insert("x"));
    /// assert!(!list.insert("x"));
    /// assert_eq!(list.len(), 1);
    /// ```
    pub fn insert(&mut self, name: &str) -> bool {
        if self.index.contains_key(name) {
            return false;
        }
        let symbol = T::with_name(name);
        self.index.insert(symbol.name().to_string(), self.entries.len());
        self.entries.push(symbol);
        true
    }

    /// Looks up a symbol by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&T> {
        self.index.get(name).map(|&i| &self.entries[i])
    }

    /// Looks up a symbol by name for modification.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut T> {
        self.index.get(name).map(|&i| &mut self.entries[i])
    }

    /// Returns `true` if a symbol called `name` exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }
}

impl<T> SymbolList<T> {
    /// All symbols in first-occurrence order.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.entries
    }

    /// Iterates over all symbols in first-occurrence order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entries.iter()
    }

    /// Number of symbols.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no symbols.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a, T> IntoIterator for &'a SymbolList<T> {
    type IntoIter = std::slice::Iter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// The scalar and array symbols of one expression.
///
/// The two lists are independent: category is decided during discovery by
/// whether a name is immediately followed by `[`.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    /// Scalar variables.
    pub scalars: SymbolList<ScalarSymbol>,
    /// Array variables.
    pub arrays:  SymbolList<ArraySymbol>,
}

impl SymbolTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a scalar by name.
    #[must_use]
    pub fn scalar(&self, name: &str) -> Option<&ScalarSymbol> {
        self.scalars.get(name)
    }

    /// Looks up an array by name.
    #[must_use]
    pub fn array(&self, name: &str) -> Option<&ArraySymbol> {
        self.arrays.get(name)
    }
}
