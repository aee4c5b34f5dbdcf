use nom::number::complete::double;

/// Drawing commands understood by the tracer. Curve commands are out of
/// scope, the map geometry is polygonal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cmd {
    MoveTo,
    RelMoveTo,
    LineTo,
    RelLineTo,
    HorizontalTo,
    RelHorizontalTo,
    VerticalTo,
    RelVerticalTo,
    Close,
}

impl Cmd {
    fn from_char(c: char) -> Option<Self> {
        Some(match c {
            'M' => Cmd::MoveTo,
            'm' => Cmd::RelMoveTo,
            'L' => Cmd::LineTo,
            'l' => Cmd::RelLineTo,
            'H' => Cmd::HorizontalTo,
            'h' => Cmd::RelHorizontalTo,
            'V' => Cmd::VerticalTo,
            'v' => Cmd::RelVerticalTo,
            'Z' | 'z' => Cmd::Close,
            _ => return None,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token<'a> {
    Command(Cmd),
    Argument(&'a str),
}

/// Splits one `d` attribute into command and argument tokens.
///
/// Fields are whitespace separated. A field that starts with a command
/// letter but carries trailing text (`M0,0`) yields the command followed
/// by the remainder as an argument, which is how compact path data keeps
/// its coordinates.
pub fn tokenize(data: &str) -> Tokens<'_> {
    Tokens {
        fields: data.split_whitespace(),
        pending: None,
    }
}

#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    fields: std::str::SplitWhitespace<'a>,
    pending: Option<Token<'a>>,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(token) = self.pending.take() {
            return Some(token);
        }

        let field = self.fields.next()?;
        match field.chars().next().and_then(Cmd::from_char) {
            Some(cmd) => {
                // command letters are ascii, the remainder starts at byte 1
                let rest = &field[1..];
                if !rest.is_empty() {
                    self.pending = Some(Token::Argument(rest));
                }
                Some(Token::Command(cmd))
            }
            None => Some(Token::Argument(field)),
        }
    }
}

/// Permissive numeric parse: anything `nom` cannot read as a leading
/// number becomes 0. Garbage coordinates are preferred over aborting a
/// run, a stricter mode would replace this function only.
pub fn coordinate_or_zero(s: &str) -> f64 {
    double::<_, nom::error::Error<&str>>(s)
        .map(|(_, v)| v)
        .unwrap_or(0.0)
}

/// Reads an `x,y` argument. Without a comma the whole argument is
/// worthless and parses as (0, 0); each side falls back to zero on its
/// own.
pub fn dual_coordinate(s: &str) -> (f64, f64) {
    match s.split_once(',') {
        Some((x, y)) => (coordinate_or_zero(x), coordinate_or_zero(y)),
        None => (0.0, 0.0),
    }
}
