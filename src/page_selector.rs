use crate::error::InputError;
use std::fmt;
use std::num::IntErrorKind;
use std::str::FromStr;

/// An ordered list of 1-based page numbers, as typed by the user.
///
/// Order and repeats are kept: "3,1,3" means page 3, then page 1, then page 3 again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSelector {
    pages: Vec<Page>,
}

/// A whole number too large for `i64` is kept as typed; it never names a page.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Page {
    Number(i64),
    Overflow(String),
}

impl PageSelector {
    /// Parse a comma-separated page list like "1, 3,5"
    ///
    /// Values are only checked for being integers here; whether they exist in a
    /// document is decided by [`PageSelector::resolve`].
    pub fn parse(s: &str) -> Result<Self, InputError> {
        if s.trim().is_empty() {
            return Err(InputError::NoPagesSpecified);
        }

        let pages = s
            .split(',')
            .map(parse_page_number)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(PageSelector { pages })
    }

    /// Convert to 0-based indices into a document with `page_count` pages.
    ///
    /// Every value is checked before anything is returned, so a caller never
    /// starts copying pages for a selector that would fail later.
    pub fn resolve(&self, page_count: usize) -> Result<Vec<usize>, InputError> {
        let last = i64::try_from(page_count).unwrap_or(i64::MAX);

        self.pages
            .iter()
            .map(|page| match *page {
                Page::Number(n) if (1..=last).contains(&n) => Ok((n - 1) as usize),
                Page::Number(n) => Err(InputError::InvalidPageNumber(n)),
                Page::Overflow(ref token) => Err(InputError::PageNumberOverflow(token.clone())),
            })
            .collect()
    }
}

impl FromStr for PageSelector {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PageSelector::parse(s)
    }
}

impl fmt::Display for PageSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, page) in self.pages.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            match page {
                Page::Number(n) => write!(f, "{}", n)?,
                Page::Overflow(token) => f.write_str(token)?,
            }
        }
        Ok(())
    }
}

fn parse_page_number(token: &str) -> Result<Page, InputError> {
    let token = token.trim();
    match token.parse::<i64>() {
        Ok(n) => Ok(Page::Number(n)),
        Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
            Ok(Page::Overflow(token.to_string()))
        }
        Err(_) => Err(InputError::InvalidToken(token.to_string())),
    }
}
