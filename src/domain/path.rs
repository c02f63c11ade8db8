use std::fmt;

/// One step into the form value tree: an object key or an array index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    Key(String),
    Index(usize),
}

/// A field identifier: a dotted/bracketed path naming one location in the
/// form's value tree, e.g. `"contacts[0].email"`. Unique per rendered
/// control and stable for the control's lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath {
    segments: Vec<Segment>,
}

impl FieldPath {
    /// Parses a dotted/bracketed identifier. Bracket groups that are not a
    /// plain decimal index are kept as part of the surrounding key.
    pub fn parse(name: &str) -> Self {
        let mut segments = Vec::new();
        for part in name.split('.') {
            let mut rest = part;
            loop {
                match split_index_suffix(rest) {
                    Some((head, index, tail)) => {
                        if !head.is_empty() {
                            segments.push(Segment::Key(head.to_string()));
                        }
                        segments.push(Segment::Index(index));
                        rest = tail;
                        if rest.is_empty() {
                            break;
                        }
                    }
                    None => {
                        if !rest.is_empty() {
                            segments.push(Segment::Key(rest.to_string()));
                        }
                        break;
                    }
                }
            }
        }
        FieldPath { segments }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// JSON pointer form, e.g. `/contacts/0/email`.
    pub fn pointer(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            out.push('/');
            match segment {
                Segment::Key(key) => out.push_str(&escape_pointer_token(key)),
                Segment::Index(index) => out.push_str(&index.to_string()),
            }
        }
        out
    }

    /// Path of the `index`-th element under this path (`name[i]`).
    pub fn child(&self, index: usize) -> FieldPath {
        let mut segments = self.segments.clone();
        segments.push(Segment::Index(index));
        FieldPath { segments }
    }
}

impl From<&str> for FieldPath {
    fn from(name: &str) -> Self {
        FieldPath::parse(name)
    }
}

impl From<&FieldPath> for FieldPath {
    fn from(path: &FieldPath) -> Self {
        path.clone()
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for segment in &self.segments {
            match segment {
                Segment::Key(key) => {
                    if !first {
                        f.write_str(".")?;
                    }
                    f.write_str(key)?;
                }
                Segment::Index(index) => write!(f, "[{index}]")?,
            }
            first = false;
        }
        Ok(())
    }
}

// RFC 6901 token escaping.
fn escape_pointer_token(token: &str) -> String {
    token.replace('~', "~0").replace('/', "~1")
}

fn split_index_suffix(part: &str) -> Option<(&str, usize, &str)> {
    let open = part.find('[')?;
    let close = part[open..].find(']')? + open;
    let index = part[open + 1..close].parse::<usize>().ok()?;
    Some((&part[..open], index, &part[close + 1..]))
}
