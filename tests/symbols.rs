use std::io::{self, BufRead, BufReader, Read};

use symbex::{Expression, error::BindingError};

fn names<T>(symbols: &[T], name: impl Fn(&T) -> &str) -> Vec<String> {
    symbols.iter().map(|s| name(s).to_string()).collect()
}

fn discovered(source: &str) -> (Vec<String>, Vec<String>) {
    let mut expr = Expression::new(source);
    expr.build_symbols();
    (names(expr.scalars(), |s| s.name.as_str()), names(expr.arrays(), |a| a.name.as_str()))
}

#[test]
fn discovery_classifies_by_bracket() {
    let (scalars, arrays) = discovered("a+b*arr[c]-d/vec[arr[2]]");
    assert_eq!(scalars, ["a", "b", "c", "d"]);
    assert_eq!(arrays, ["arr", "vec"]);
}

#[test]
fn discovery_keeps_first_occurrence_order_without_duplicates() {
    let (scalars, arrays) = discovered("z+a*z-(a+y)+q[a]+q[z]+p[1]");
    assert_eq!(scalars, ["z", "a", "y"]);
    assert_eq!(arrays, ["q", "p"]);
}

#[test]
fn discovery_ignores_whitespace_and_literals() {
    let (scalars, arrays) = discovered(" x  *  12 + values [ 3 ] ");
    assert_eq!(scalars, ["x"]);
    assert_eq!(arrays, ["values"]);

    let (scalars, arrays) = discovered("1+2*(3-4)");
    assert!(scalars.is_empty());
    assert!(arrays.is_empty());
}

#[test]
fn digits_end_identifiers() {
    let (scalars, _) = discovered("a1b+c");
    assert_eq!(scalars, ["a", "b", "c"]);
}

#[test]
fn discovery_is_idempotent() {
    let mut expr = Expression::new("a+arr[b]");
    expr.build_symbols();
    expr.load_symbol_values("a 5\nb 1\narr 2 (1,3)".as_bytes())
        .unwrap();

    expr.build_symbols();
    let first = (expr.scalars().to_vec(), expr.arrays().to_vec());
    expr.build_symbols();
    let second = (expr.scalars().to_vec(), expr.arrays().to_vec());

    assert_eq!(first, second);
    assert_eq!(expr.scalar("a").unwrap().value, 0);
    assert!(expr.array("arr").unwrap().values.is_empty());
}

#[test]
fn scalar_binding_last_value_wins() {
    let mut expr = Expression::new("a");
    expr.build_symbols();
    expr.load_symbol_values("a 1\na 2".as_bytes()).unwrap();
    expr.load_symbol_values("a 7".as_bytes()).unwrap();

    assert_eq!(expr.scalar("a").unwrap().value, 7);
    assert_eq!(expr.evaluate().unwrap(), 7.0);
}

#[test]
fn array_rebinding_discards_previous_store() {
    let mut expr = Expression::new("arr[0]");
    expr.build_symbols();
    expr.load_symbol_values("arr 5 (0,1) (4,9)".as_bytes())
        .unwrap();
    assert_eq!(expr.array("arr").unwrap().values, vec![1, 0, 0, 0, 9]);

    expr.load_symbol_values("arr 2 (1,3)".as_bytes()).unwrap();
    assert_eq!(expr.array("arr").unwrap().values, vec![0, 3]);
    assert_eq!(expr.evaluate().unwrap(), 0.0);
}

#[test]
fn pairs_may_contain_whitespace() {
    let mut expr = Expression::new("arr[0]");
    expr.build_symbols();
    expr.load_symbol_values("  arr   4 ( 0 , 11 )(1,12)\t(3,  14)  ".as_bytes())
        .unwrap();

    assert_eq!(expr.array("arr").unwrap().values, vec![11, 12, 0, 14]);
}

#[test]
fn array_without_pairs_is_zeroed() {
    let mut expr = Expression::new("arr[2]");
    expr.build_symbols();
    expr.load_symbol_values("arr 3".as_bytes()).unwrap();

    assert_eq!(expr.array("arr").unwrap().values, vec![0, 0, 0]);
    assert_eq!(expr.evaluate().unwrap(), 0.0);
}

#[test]
fn unknown_and_blank_records_change_nothing() {
    let mut expr = Expression::new("a+arr[0]");
    expr.build_symbols();
    let before = (expr.scalars().to_vec(), expr.arrays().to_vec());

    expr.load_symbol_values("x\n\n   \nghost 4 (1,2)\nother 12".as_bytes())
        .unwrap();

    let after = (expr.scalars().to_vec(), expr.arrays().to_vec());
    assert_eq!(before, after);
    assert_eq!(expr.scalar("a").unwrap().value, 0);
    assert!(expr.array("arr").unwrap().values.is_empty());
}

#[test]
fn binding_errors_report_line_numbers() {
    let mut expr = Expression::new("a+arr[0]");
    expr.build_symbols();

    let err = expr.load_symbol_values("a 1\n\narr 2 (2,5)".as_bytes())
                  .unwrap_err();
    assert!(matches!(err,
                     BindingError::IndexOutOfBounds { length: 2,
                                                      found: 2,
                                                      line: 3,
                                                      .. }));
    assert_eq!(expr.scalar("a").unwrap().value, 1);

    let err = expr.load_symbol_values("a 1.5".as_bytes()).unwrap_err();
    assert!(matches!(err, BindingError::InvalidInteger { line: 1, .. }));

    let err = expr.load_symbol_values("arr -2".as_bytes()).unwrap_err();
    assert!(matches!(err, BindingError::NegativeLength { length: -2, .. }));

    let err = expr.load_symbol_values("a".as_bytes()).unwrap_err();
    assert!(matches!(err, BindingError::MissingValue { .. }));

    let err = expr.load_symbol_values("arr".as_bytes()).unwrap_err();
    assert!(matches!(err, BindingError::MissingValue { .. }));
}

#[test]
fn unallocatable_array_length_is_error() {
    let mut expr = Expression::new("arr[0]");
    expr.build_symbols();
    expr.load_symbol_values("arr 2 (1,4)".as_bytes()).unwrap();

    let err = expr.load_symbol_values("arr 9223372036854775807 (0,1)".as_bytes())
                  .unwrap_err();
    assert!(matches!(err,
                     BindingError::LengthTooLarge { length: 9_223_372_036_854_775_807,
                                                    line: 1,
                                                    .. }));
    assert_eq!(expr.array("arr").unwrap().values, vec![0, 4]);
}

#[test]
fn name_used_as_scalar_and_array_binds_by_field_count() {
    let mut expr = Expression::new("n+n[1]");
    expr.build_symbols();
    assert!(expr.scalar("n").is_some());
    assert!(expr.array("n").is_some());

    expr.load_symbol_values("n 4\nn 2 (1,6)".as_bytes()).unwrap();
    assert_eq!(expr.scalar("n").unwrap().value, 4);
    assert_eq!(expr.array("n").unwrap().values, vec![0, 6]);
    assert_eq!(expr.evaluate().unwrap(), 10.0);
}

#[test]
fn symbols_display_as_name_value() {
    let mut expr = Expression::new("a+arr[a]");
    expr.build_symbols();
    expr.load_symbol_values("a 2\narr 3 (2,8)".as_bytes())
        .unwrap();

    assert_eq!(expr.scalars()[0].to_string(), "a=2");
    assert_eq!(expr.arrays()[0].to_string(), "arr=[0,0,8]");
}

struct FailingReader;

impl Read for FailingReader {
    fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::other("disk on fire"))
    }
}

#[test]
fn reader_failures_surface_as_io_errors() {
    let mut expr = Expression::new("a");
    expr.build_symbols();

    let reader: Box<dyn BufRead> = Box::new(BufReader::new(FailingReader));
    let err = expr.load_symbol_values(reader).unwrap_err();
    assert!(matches!(err, BindingError::Io { line: 1, .. }));
    assert!(std::error::Error::source(&err).is_some());
}
