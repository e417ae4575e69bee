// crates/infra/src/codec/location.rs
use std::fmt;

/// Position inside a document, rendered like `<>.layers[2].name`.
#[derive(Debug, Default, Clone)]
pub(crate) struct Location {
    segments: Vec<Segment>,
}

#[derive(Debug, Clone)]
enum Segment {
    Key(String),
    Index(usize),
}

impl Location {
    pub(crate) fn push_key(&mut self, key: &str) {
        self.segments.push(Segment::Key(key.to_string()));
    }

    pub(crate) fn push_index(&mut self, index: usize) {
        self.segments.push(Segment::Index(index));
    }

    pub(crate) fn pop(&mut self) {
        self.segments.pop();
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<>")?;
        for segment in &self.segments {
            match segment {
                Segment::Key(key) => write!(f, ".{key}")?,
                Segment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_nested_path() {
        let mut location = Location::default();
        assert_eq!(location.to_string(), "<>");
        location.push_key("layers");
        location.push_index(2);
        location.push_key("name");
        assert_eq!(location.to_string(), "<>.layers[2].name");
        location.pop();
        location.pop();
        assert_eq!(location.to_string(), "<>.layers");
    }
}
