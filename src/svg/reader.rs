use svg::node::element::tag::Type;
use svg::parser::{Event, Parser};

/// Streaming view over an SVG document that yields the `(name, path
/// data)` pairs of every `<path>` inside the designated group.
///
/// Group names come from `inkscape:label` when present (Inkscape layers
/// carry their human name there) and fall back to the `id` attribute.
/// Nested groups without either inherit the surrounding name, so paths
/// wrapped in anonymous sub-groups still belong to their layer.
pub struct SvgAreaReader<'a> {
    parser: Parser<'a>,
    group: String,
    stack: Vec<String>,
}

impl<'a> SvgAreaReader<'a> {
    pub fn open(
        path: impl AsRef<std::path::Path>,
        group: &str,
        buff: &'a mut String,
    ) -> Result<Self, std::io::Error> {
        svg::open(path.as_ref(), buff).map(|parser| Self {
            parser,
            group: group.to_string(),
            stack: vec![],
        })
    }

    pub fn read(content: &'a str, group: &str) -> Result<Self, std::io::Error> {
        svg::read(content).map(|parser| Self {
            parser,
            group: group.to_string(),
            stack: vec![],
        })
    }
}

impl Iterator for SvgAreaReader<'_> {
    type Item = (String, String);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.parser.next()? {
                Event::Tag("g", Type::Start, attrs) => {
                    let name = attrs
                        .get("inkscape:label")
                        .or(attrs.get("id"))
                        .map(ToString::to_string)
                        .or_else(|| self.stack.last().cloned())
                        .unwrap_or_default();
                    self.stack.push(name);
                }
                Event::Tag("g", Type::End, _) => {
                    let _ = self.stack.pop();
                }
                Event::Tag("path", _, attrs) => {
                    if self.stack.last().map(String::as_str) != Some(self.group.as_str()) {
                        continue;
                    }
                    let name = attrs.get("id").map(ToString::to_string).unwrap_or_default();
                    match attrs.get("d") {
                        Some(data) => return Some((name, data.to_string())),
                        None => warn!("path {name:?} has no path data, skipping"),
                    }
                }
                _ => {}
            }
        }
    }
}
