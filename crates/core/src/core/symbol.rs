//! Symbols and word representations.
//!
//! A word is handled as an ordered sequence of symbols. Before any merge
//! each symbol is a single `char`, and every word ends with the
//! [`END_OF_WORD`] sentinel so that a suffix such as `er` at the end of a
//! word is learned separately from the same letters mid-word.

use compact_str::CompactString;

/// An immutable text fragment: one character or a concatenation of merged ones.
pub type Symbol = CompactString;

/// An ordered pair of adjacent symbols.
pub type Pair = (Symbol, Symbol);

/// End-of-word sentinel appended as the last symbol of every word.
pub const END_OF_WORD: &str = "</w>";

/// Split a word into single-character symbols followed by the sentinel.
pub fn word_symbols(word: &str) -> Vec<Symbol> {
    let mut symbols: Vec<Symbol> = word
        .chars()
        .map(|c| {
            let mut buf = [0u8; 4];
            CompactString::new(c.encode_utf8(&mut buf))
        })
        .collect();
    symbols.push(CompactString::new(END_OF_WORD));
    symbols
}

/// Merge every occurrence of `left right` into a single symbol.
///
/// Occurrences are found left to right and never overlap; a symbol created
/// by this call is not matched again within the same call, so `a a a`
/// merged on `(a, a)` becomes `aa a`.
///
/// Returns the number of merges performed.
pub fn merge_pair(symbols: &mut Vec<Symbol>, left: &str, right: &str) -> usize {
    let mut merged = 0;
    let mut i = 0;

    while i + 1 < symbols.len() {
        if symbols[i].as_str() == left && symbols[i + 1].as_str() == right {
            let tail = symbols.remove(i + 1);
            symbols[i].push_str(&tail);
            merged += 1;
        }
        i += 1;
    }

    merged
}

/// Space-joined textual form of a symbol sequence, e.g. `"l o w </w>"`.
pub fn representation(symbols: &[Symbol]) -> String {
    let mut out = String::with_capacity(symbols.iter().map(|s| s.len() + 1).sum());
    for (i, symbol) in symbols.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(symbol);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_symbols() {
        let symbols = word_symbols("low");
        assert_eq!(representation(&symbols), "l o w </w>");
    }

    #[test]
    fn test_word_symbols_empty() {
        let symbols = word_symbols("");
        assert_eq!(symbols.len(), 1);
        assert_eq!(symbols[0].as_str(), END_OF_WORD);
    }

    #[test]
    fn test_word_symbols_multibyte() {
        let symbols = word_symbols("héé");
        assert_eq!(representation(&symbols), "h é é </w>");
    }

    #[test]
    fn test_merge_pair() {
        let mut symbols = word_symbols("newer");
        assert_eq!(merge_pair(&mut symbols, "e", "r"), 1);
        assert_eq!(representation(&symbols), "n e w er </w>");

        assert_eq!(merge_pair(&mut symbols, "er", END_OF_WORD), 1);
        assert_eq!(representation(&symbols), "n e w er</w>");
    }

    #[test]
    fn test_merge_pair_non_overlapping() {
        let mut symbols = word_symbols("aaa");
        assert_eq!(merge_pair(&mut symbols, "a", "a"), 1);
        assert_eq!(representation(&symbols), "aa a </w>");

        let mut symbols = word_symbols("aaaa");
        assert_eq!(merge_pair(&mut symbols, "a", "a"), 2);
        assert_eq!(representation(&symbols), "aa aa </w>");
    }

    #[test]
    fn test_merge_pair_respects_symbol_boundaries() {
        // "b" must not match the prefix of the symbol "bc".
        let mut symbols = word_symbols("abc");
        merge_pair(&mut symbols, "b", "c");
        assert_eq!(merge_pair(&mut symbols, "a", "b"), 0);
        assert_eq!(representation(&symbols), "a bc </w>");
    }

    #[test]
    fn test_merge_pair_no_match() {
        let mut symbols = word_symbols("xyz");
        assert_eq!(merge_pair(&mut symbols, "q", "r"), 0);
        assert_eq!(symbols.len(), 4);
    }
}
