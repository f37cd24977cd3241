use super::{is_symbol, Cell};

#[test]
fn test_classify_every_digit() {
    for (n, b) in (b'0'..=b'9').enumerate() {
        assert_eq!(Cell::classify(b), Cell::Digit(n as u8));
        assert!(!is_symbol(b));
    }
}

#[test]
fn test_punctuation_and_letters_are_symbols() {
    for &b in b"*#+$/=@%&-xZ " {
        assert!(is_symbol(b), "{:?} should be a symbol", b as char);
        assert!(!Cell::classify(b).is_digit());
    }
}

#[test]
fn test_display() {
    assert_eq!(Cell::Digit(4).to_string(), "4");
    assert_eq!(Cell::Empty.to_string(), ".");
    assert_eq!(Cell::Symbol(b'$').to_string(), "$");
    assert_eq!(Cell::Symbol(b'\t').to_string(), "\\t");
}
