//! Splits command arguments into a preamble and prefixed values.

/// Field prefix of the command language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Prefix {
    Name,
    Id,
    Count,
    Tag,
}

impl Prefix {
    pub const ALL: [Prefix; 4] = [Prefix::Name, Prefix::Id, Prefix::Count, Prefix::Tag];

    pub const fn token(self) -> &'static str {
        match self {
            Prefix::Name => "n/",
            Prefix::Id => "i/",
            Prefix::Count => "c/",
            Prefix::Tag => "t/",
        }
    }
}

impl core::fmt::Display for Prefix {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.token())
    }
}

/// Arguments split by prefix.
///
/// A prefix is only recognised at the very start of the arguments or right
/// after whitespace, so `n/Bagel i/100` has two fields while `and/or` has
/// none. Values are trimmed, and every occurrence is kept in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentMap {
    preamble: String,
    values: Vec<(Prefix, String)>,
}

impl ArgumentMap {
    /// Tokenizes `args`, recognising only `prefixes`.
    pub fn tokenize(args: &str, prefixes: &[Prefix]) -> Self {
        let mut marks: Vec<(usize, Prefix)> = Vec::new();
        let mut previous: Option<char> = None;
        for (at, ch) in args.char_indices() {
            if previous.is_none_or(char::is_whitespace) {
                let rest = &args[at..];
                if let Some(prefix) = prefixes.iter().copied().find(|p| rest.starts_with(p.token())) {
                    marks.push((at, prefix));
                }
            }
            previous = Some(ch);
        }

        let preamble_end = marks.first().map_or(args.len(), |(at, _)| *at);
        let values = marks
            .iter()
            .enumerate()
            .map(|(index, (at, prefix))| {
                let start = at + prefix.token().len();
                let end = marks.get(index + 1).map_or(args.len(), |(next, _)| *next);
                (*prefix, args[start..end].trim().to_string())
            })
            .collect();

        Self {
            preamble: args[..preamble_end].trim().to_string(),
            values,
        }
    }

    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// The last value given for `prefix`.
    pub fn value(&self, prefix: Prefix) -> Option<&str> {
        self.values
            .iter()
            .rev()
            .find(|(p, _)| *p == prefix)
            .map(|(_, value)| value.as_str())
    }

    /// Every value given for `prefix`, in input order.
    pub fn all_values(&self, prefix: Prefix) -> Vec<&str> {
        self.values
            .iter()
            .filter(|(p, _)| *p == prefix)
            .map(|(_, value)| value.as_str())
            .collect()
    }

    pub fn contains(&self, prefix: Prefix) -> bool {
        self.values.iter().any(|(p, _)| *p == prefix)
    }
}
