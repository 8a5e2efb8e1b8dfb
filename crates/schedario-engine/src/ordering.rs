use std::cmp::Ordering;

/// Case-insensitive comparison that orders digit runs by numeric value,
/// so "U.R. 2" sorts before "U.R. 10".
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut left = Chunks::new(a);
    let mut right = Chunks::new(b);

    loop {
        let ordering = match (left.next(), right.next()) {
            (None, None) => break,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(Chunk::Digits(x)), Some(Chunk::Digits(y))) => compare_digits(x, y),
            (Some(Chunk::Digits(_)), Some(Chunk::Text(_))) => Ordering::Less,
            (Some(Chunk::Text(_)), Some(Chunk::Digits(_))) => Ordering::Greater,
            (Some(Chunk::Text(x)), Some(Chunk::Text(y))) => x.to_lowercase().cmp(&y.to_lowercase()),
        };
        if ordering != Ordering::Equal {
            return ordering;
        }
    }

    // Equal under natural rules ("a01" vs "a1", "A" vs "a"): keep the order total.
    a.cmp(b)
}

fn compare_digits(x: &str, y: &str) -> Ordering {
    let x = x.trim_start_matches('0');
    let y = y.trim_start_matches('0');
    x.len().cmp(&y.len()).then_with(|| x.cmp(y))
}

enum Chunk<'a> {
    Digits(&'a str),
    Text(&'a str),
}

struct Chunks<'a> {
    rest: &'a str,
}

impl<'a> Chunks<'a> {
    fn new(input: &'a str) -> Self {
        Self { rest: input }
    }
}

impl<'a> Iterator for Chunks<'a> {
    type Item = Chunk<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.rest.chars().next()?;
        let digits = first.is_ascii_digit();
        let end = self
            .rest
            .char_indices()
            .find(|(_, c)| c.is_ascii_digit() != digits)
            .map(|(idx, _)| idx)
            .unwrap_or(self.rest.len());
        let (chunk, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(if digits {
            Chunk::Digits(chunk)
        } else {
            Chunk::Text(chunk)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_survey_unit_identifiers() {
        let mut ids = vec!["U.R. 10", "U.R. 2", "U.R. 1"];
        ids.sort_by(|a, b| natural_cmp(a, b));
        assert_eq!(ids, vec!["U.R. 1", "U.R. 2", "U.R. 10"]);
    }

    #[test]
    fn test_case_insensitive_and_empty_first() {
        let mut ids = vec!["ur 3", "UR 21", "", "Ur 100"];
        ids.sort_by(|a, b| natural_cmp(a, b));
        assert_eq!(ids, vec!["", "ur 3", "UR 21", "Ur 100"]);
    }

    #[test]
    fn test_leading_zeros_compare_numerically() {
        assert_eq!(natural_cmp("UR 007", "UR 8"), Ordering::Less);
        assert_ne!(natural_cmp("UR 01", "UR 1"), Ordering::Equal);
    }
}
