use crate::books::domain::Book;

// FlagFilter is a boolean query parameter after coercion. Values other than 1/0/true/false
// are kept as Unmatched so that they select no book rather than failing the request.
// `true` and `false` are accepted next to `1` and `0`, so `reading=true` selects the
// reading books where a numeric-only comparison would select none.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagFilter {
    Is(bool),
    Unmatched,
}

impl FlagFilter {
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "1" | "true" => FlagFilter::Is(true),
            "0" | "false" => FlagFilter::Is(false),
            _ => FlagFilter::Unmatched,
        }
    }

    fn matches(&self, value: bool) -> bool {
        match self {
            FlagFilter::Is(flag) => *flag == value,
            FlagFilter::Unmatched => false,
        }
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

// BookFilter selects books for listing. Exactly one criterion applies per query,
// picked in the order name, reading, finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookFilter {
    All,
    NameContains(String),
    Reading(FlagFilter),
    Finished(FlagFilter),
}

impl BookFilter {
    pub fn from_query(name: Option<&str>, reading: Option<&str>, finished: Option<&str>) -> Self {
        if let Some(name) = present(name) {
            BookFilter::NameContains(name.to_string())
        } else if let Some(reading) = present(reading) {
            BookFilter::Reading(FlagFilter::parse(reading))
        } else if let Some(finished) = present(finished) {
            BookFilter::Finished(FlagFilter::parse(finished))
        } else {
            BookFilter::All
        }
    }

    pub fn matches<B: Book>(&self, book: &B) -> bool {
        match self {
            BookFilter::All => true,
            BookFilter::NameContains(needle) => {
                book.name().to_lowercase().contains(needle.to_lowercase().as_str())
            }
            BookFilter::Reading(flag) => flag.matches(book.is_reading()),
            BookFilter::Finished(flag) => flag.matches(book.is_finished()),
        }
    }
}
