use std::io::BufRead;

use crate::{
    error::BindingError,
    interpreter::{
        binding::pairs::{parse_integer, parse_pairs},
        symbols::table::SymbolTable,
    },
    util::num::i64_to_index_checked,
};

impl SymbolTable {
    /// Loads symbol values from a line-oriented reader.
    ///
    /// Every line is one record:
    /// ```text
    ///     <scalar> <value>
    ///     <array> <length> (<index>,<value>) (<index>,<value>) ...
    /// ```
    /// Records naming a symbol that is in neither list are skipped, as are
    /// blank lines. A later record for the same symbol overwrites the earlier
    /// one; an array record always allocates a fresh zeroed store, discarding
    /// the previous contents and length.
    ///
    /// Binding stops at the first failing record. Records before it stay
    /// applied.
    ///
    /// # Errors
    /// Returns a `BindingError` if a record is malformed, an array length
    /// cannot be allocated, an `(index,value)` pair lies outside the declared
    /// length, or the reader fails.
    ///
    /// # Example
    /// ```
    /// use symbex::interpreter::symbols::table::SymbolTable;
    ///
    /// let mut table = SymbolTable::discover("a+arr[1]");
    /// table.load_values("a 3\nunknown 9\narr 4 (1,10) (3, 2)".as_bytes())
    ///      .unwrap();
    ///
    /// assert_eq!(table.scalar("a").unwrap().value, 3);
    /// assert_eq!(table.array("arr").unwrap().values, vec![0, 10, 0, 2]);
    /// ```
    pub fn load_values<R: BufRead>(&mut self, reader: R) -> Result<(), BindingError> {
        for (number, record) in reader.lines().enumerate() {
            let line = number + 1;
            let record = record.map_err(|source| BindingError::Io { source, line })?;
            self.bind_record(&record, line)?;
        }

        Ok(())
    }

    /// Applies a single value record.
    ///
    /// The record's category follows the symbol's: a known scalar gets a
    /// scalar record, a known array an array record. A name registered as
    /// both falls back to counting fields, where exactly two fields mean a
    /// scalar.
    ///
    /// # Errors
    /// See [`SymbolTable::load_values`].
    pub fn bind_record(&mut self, record: &str, line: usize) -> Result<(), BindingError> {
        let Some((name, rest)) = next_field(record) else {
            return Ok(());
        };

        let is_scalar = self.scalars.contains(name);
        let is_array = self.arrays.contains(name);

        match (is_scalar, is_array) {
            (false, false) => {
                tracing::debug!(line, name, "skipping record for unknown symbol");
                Ok(())
            },
            (true, false) => self.bind_scalar(name, rest, line),
            (false, true) => self.bind_array(name, rest, line),
            (true, true) => {
                if rest.split_whitespace().count() == 1 {
                    self.bind_scalar(name, rest, line)
                } else {
                    self.bind_array(name, rest, line)
                }
            },
        }
    }

    fn bind_scalar(&mut self, name: &str, rest: &str, line: usize) -> Result<(), BindingError> {
        let mut fields = rest.split_whitespace();
        let value = fields.next()
                          .ok_or_else(|| BindingError::MissingValue { name: name.to_string(),
                                                                      line })?;
        let value = parse_integer(value, line)?;

        if let Some(extra) = fields.next() {
            return Err(BindingError::UnexpectedToken { token: extra.to_string(),
                                                       line });
        }

        if let Some(symbol) = self.scalars.get_mut(name) {
            symbol.value = value;
        }
        tracing::trace!(line, name, value, "bound scalar");
        Ok(())
    }

    fn bind_array(&mut self, name: &str, rest: &str, line: usize) -> Result<(), BindingError> {
        let (length, pairs) = next_field(rest).ok_or_else(|| BindingError::MissingValue { name: name.to_string(),
                                                                                          line })?;
        let length = parse_integer(length, line)?;
        let length =
            usize::try_from(length).map_err(|_| BindingError::NegativeLength { name: name.to_string(),
                                                                               length,
                                                                               line })?;

        let mut values = Vec::new();
        values.try_reserve_exact(length)
              .map_err(|_| BindingError::LengthTooLarge { name: name.to_string(),
                                                          length,
                                                          line })?;
        values.resize(length, 0);

        for (index, value) in parse_pairs(pairs, line)? {
            let slot = i64_to_index_checked(index, length).ok_or_else(|| {
                                                              BindingError::IndexOutOfBounds {
                    name: name.to_string(),
                    length,
                    found: index,
                    line,
                }
                                                          })?;
            values[slot] = value;
        }

        if let Some(symbol) = self.arrays.get_mut(name) {
            symbol.values = values;
        }
        tracing::trace!(line, name, length, "bound array");
        Ok(())
    }
}

/// Splits off the first whitespace-separated field.
///
/// Returns the field and the unconsumed remainder, or `None` if `input` holds
/// only whitespace.
fn next_field(input: &str) -> Option<(&str, &str)> {
    let input = input.trim_start();
    if input.is_empty() {
        return None;
    }

    Some(input.split_once(char::is_whitespace).unwrap_or((input, "")))
}
