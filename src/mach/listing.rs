use super::MAX_LINE_LEN;
use crate::error;
use crate::lang::{Error, LineNumber};
use std::collections::{btree_map, BTreeMap};
use std::sync::Arc;

/// ## Program source
///
/// The stored program, as typed: line number to source text.
/// Cloning is cheap so the host can hold a copy for completion.

#[derive(Debug, Clone, Default)]
pub struct Listing {
    source: Arc<BTreeMap<LineNumber, String>>,
}

/// A line typed at the command prompt.
#[derive(Debug, PartialEq)]
pub enum Entry<'a> {
    /// `<number> <code>`
    Store(LineNumber, &'a str),
    /// `<number>` alone
    Delete(LineNumber),
    /// Anything without a leading line number.
    Direct(&'a str),
}

impl<'a> Entry<'a> {
    pub fn parse(s: &'a str) -> Result<Entry<'a>, Error> {
        let s = s.trim();
        let digits = s.find(|c: char| !c.is_ascii_digit()).unwrap_or_else(|| s.len());
        if digits == 0 {
            return Ok(Entry::Direct(s));
        }
        let msg = "INVALID LINE NUMBER";
        let number = match s[..digits].parse::<LineNumber>() {
            Ok(0) => return Err(error!(SyntaxError; msg)),
            Ok(n) => n,
            Err(_) => return Err(error!(Overflow; msg)),
        };
        let code = s[digits..].trim();
        if code.is_empty() {
            Ok(Entry::Delete(number))
        } else {
            Ok(Entry::Store(number, code))
        }
    }
}

impl Listing {
    pub fn clear(&mut self) {
        self.source = Arc::default();
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    pub fn len(&self) -> usize {
        self.source.len()
    }

    pub fn insert(&mut self, number: LineNumber, code: &str) -> Option<String> {
        Arc::make_mut(&mut self.source).insert(number, code.to_string())
    }

    pub fn remove(&mut self, number: LineNumber) -> Option<String> {
        Arc::make_mut(&mut self.source).remove(&number)
    }

    pub fn get(&self, number: LineNumber) -> Option<&str> {
        self.source.get(&number).map(|s| s.as_str())
    }

    /// Lines in ascending order.
    pub fn iter(&self) -> btree_map::Iter<'_, LineNumber, String> {
        self.source.iter()
    }

    /// One `<line> <code>` string per stored line, ascending.
    pub fn lines(&self) -> Vec<String> {
        self.source
            .iter()
            .map(|(number, code)| format!("{} {}", number, code))
            .collect()
    }

    /// Used for loading a new Listing from a file.
    pub fn load_str(&mut self, line: &str) -> Result<(), Error> {
        if line.len() > MAX_LINE_LEN {
            return Err(error!(LineBufferOverflow));
        }
        if line.trim().is_empty() {
            return Ok(());
        }
        match Entry::parse(line)? {
            Entry::Store(number, code) => {
                self.insert(number, code);
                Ok(())
            }
            Entry::Delete(number) => {
                self.remove(number);
                Ok(())
            }
            Entry::Direct(_) => Err(error!(DirectStatementInFile)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry() {
        assert_eq!(Entry::parse("10 PRINT \"HI\""), Ok(Entry::Store(10, "PRINT \"HI\"")));
        assert_eq!(Entry::parse("10PRINT 1"), Ok(Entry::Store(10, "PRINT 1")));
        assert_eq!(Entry::parse(" 10 "), Ok(Entry::Delete(10)));
        assert_eq!(Entry::parse("run"), Ok(Entry::Direct("run")));
        assert!(Entry::parse("0 PRINT").is_err());
        assert_eq!(Entry::parse("70000 PRINT"), Ok(Entry::Store(70000, "PRINT")));
        assert!(Entry::parse("99999999999 PRINT").is_err());
    }

    #[test]
    fn test_clone_is_a_snapshot() {
        let mut listing = Listing::default();
        listing.insert(20, "PRINT 2");
        let copy = listing.clone();
        listing.insert(10, "PRINT 1");
        assert_eq!(copy.len(), 1);
        assert_eq!(listing.lines(), vec!["10 PRINT 1", "20 PRINT 2"]);
    }

    #[test]
    fn test_load_str() {
        let mut listing = Listing::default();
        assert!(listing.load_str("10 A=1").is_ok());
        assert!(listing.load_str("").is_ok());
        assert_eq!(
            listing.load_str("PRINT A"),
            Err(error!(DirectStatementInFile))
        );
        assert_eq!(listing.get(10), Some("A=1"));
    }
}
