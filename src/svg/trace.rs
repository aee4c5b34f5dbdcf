use geo::{coord, Coord, LineString};

use crate::svg::parse::{self, Cmd, Token};

/// Affine mapping from drawing space to map space, shared by every path
/// of a run.
///
/// The default is all zeroes: with a zero scale every coordinate
/// collapses to the origin, so nothing renders anywhere useful until the
/// scale is configured explicitly.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct MapTransform {
    pub offset_x: f64,
    pub offset_y: f64,
    pub scale_x: f64,
    pub scale_y: f64,
}

impl MapTransform {
    pub const IDENTITY: Self = Self {
        offset_x: 0.0,
        offset_y: 0.0,
        scale_x: 1.0,
        scale_y: 1.0,
    };

    /// Maps a raw drawing point to an integral map position. Flooring is
    /// intentional, map positions are whole blocks.
    pub fn apply(&self, x: f64, y: f64) -> Coord {
        coord! {
            x: ((x + self.offset_x) * self.scale_x).floor(),
            y: ((y + self.offset_y) * self.scale_y).floor(),
        }
    }
}

/// One traced shape: its vertices in map space, in drawing order, plus
/// the element id it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct MapPath {
    pub name: String,
    pub points: LineString,
}

/// Walks one `d` attribute and produces the transformed vertex sequence.
///
/// The pen starts at (0, 0) with no current command. Each argument token
/// is dispatched against the current command, so implicit repeats
/// (`L 1,1 2,2 3,3`) fall out of the per-argument dispatch. `Z` ends the
/// path without emitting anything, arguments seen before any command are
/// dropped. The pen tracks raw drawing coordinates; the transform only
/// shapes the output and never feeds back into relative deltas.
pub fn trace_path(data: &str, transform: &MapTransform) -> LineString {
    let mut pen = (0.0, 0.0);
    let mut current: Option<Cmd> = None;
    let mut points = Vec::new();

    for token in parse::tokenize(data) {
        match token {
            Token::Command(Cmd::Close) => break,
            Token::Command(cmd) => current = Some(cmd),
            Token::Argument(arg) => {
                if let Some((x, y)) = step(pen, current, arg) {
                    points.push(transform.apply(x, y));
                    pen = (x, y);
                }
            }
        }
    }

    LineString(points)
}

/// Pen transition for one argument token, or `None` when no command is
/// in effect and the argument is ignored.
fn step(pen: (f64, f64), current: Option<Cmd>, arg: &str) -> Option<(f64, f64)> {
    let (x, y) = pen;
    Some(match current? {
        Cmd::VerticalTo => (x, parse::coordinate_or_zero(arg)),
        Cmd::RelVerticalTo => (x, y + parse::coordinate_or_zero(arg)),
        Cmd::HorizontalTo => (parse::coordinate_or_zero(arg), y),
        Cmd::RelHorizontalTo => (x + parse::coordinate_or_zero(arg), y),
        Cmd::MoveTo | Cmd::LineTo => parse::dual_coordinate(arg),
        Cmd::RelMoveTo | Cmd::RelLineTo => {
            let (dx, dy) = parse::dual_coordinate(arg);
            (x + dx, y + dy)
        }
        // close is handled by the trace loop before dispatch
        Cmd::Close => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(line: &LineString) -> Vec<(f64, f64)> {
        line.0.iter().map(|c| (c.x, c.y)).collect()
    }

    #[test]
    fn traces_absolute_commands() {
        let line = trace_path("M 10,10 L 20,10 L 20,20 Z", &MapTransform::IDENTITY);
        assert_eq!(points(&line), vec![(10.0, 10.0), (20.0, 10.0), (20.0, 20.0)]);
    }

    #[test]
    fn applies_offset_then_scale() {
        let transform = MapTransform {
            offset_x: 5.0,
            offset_y: 0.0,
            scale_x: 2.0,
            scale_y: 1.0,
        };
        let line = trace_path("M 10,10 L 20,10 L 20,20 Z", &transform);
        assert_eq!(points(&line), vec![(30.0, 10.0), (50.0, 10.0), (50.0, 20.0)]);
    }

    #[test]
    fn traces_relative_commands() {
        let line = trace_path("M0,0 l10,0 l0,10", &MapTransform::IDENTITY);
        assert_eq!(points(&line), vec![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)]);
    }

    #[test]
    fn implicit_repeats_reuse_the_current_command() {
        let line = trace_path("M 0,0 L 1,1 2,2 3,3", &MapTransform::IDENTITY);
        assert_eq!(
            points(&line),
            vec![(0.0, 0.0), (1.0, 1.0), (2.0, 2.0), (3.0, 3.0)]
        );

        let line = trace_path("m 1,1 1,1 1,1", &MapTransform::IDENTITY);
        assert_eq!(points(&line), vec![(1.0, 1.0), (2.0, 2.0), (3.0, 3.0)]);
    }

    #[test]
    fn horizontal_and_vertical_lines() {
        let line = trace_path("M 1,2 H 10 v 3 h -1 V 0", &MapTransform::IDENTITY);
        assert_eq!(
            points(&line),
            vec![(1.0, 2.0), (10.0, 2.0), (10.0, 5.0), (9.0, 5.0), (9.0, 0.0)]
        );
    }

    #[test]
    fn close_truncates_the_remaining_tokens() {
        let line = trace_path("M 1,1 Z L 5,5", &MapTransform::IDENTITY);
        assert_eq!(points(&line), vec![(1.0, 1.0)]);

        let line = trace_path("M 1,1 z L 5,5", &MapTransform::IDENTITY);
        assert_eq!(points(&line), vec![(1.0, 1.0)]);
    }

    #[test]
    fn arguments_before_any_command_are_ignored() {
        let line = trace_path("10,10 4 M 2,2", &MapTransform::IDENTITY);
        assert_eq!(points(&line), vec![(2.0, 2.0)]);
    }

    #[test]
    fn malformed_pair_contributes_nothing_to_relative_commands() {
        let line = trace_path("M 3,4 l garbage", &MapTransform::IDENTITY);
        assert_eq!(points(&line), vec![(3.0, 4.0), (3.0, 4.0)]);
    }

    #[test]
    fn malformed_pair_sends_absolute_commands_to_the_origin() {
        let line = trace_path("M 3,4 L garbage", &MapTransform::IDENTITY);
        assert_eq!(points(&line), vec![(3.0, 4.0), (0.0, 0.0)]);
    }

    #[test]
    fn vertical_commands_take_the_first_number_of_a_pair() {
        let line = trace_path("M 1,1 V 10,20", &MapTransform::IDENTITY);
        assert_eq!(points(&line), vec![(1.0, 1.0), (1.0, 10.0)]);
    }

    #[test]
    fn default_transform_collapses_to_the_origin() {
        let line = trace_path("M 17,23 L 40,2", &MapTransform::default());
        assert_eq!(points(&line), vec![(0.0, 0.0), (0.0, 0.0)]);
    }

    #[test]
    fn output_is_floored() {
        let transform = MapTransform {
            offset_x: 0.0,
            offset_y: 0.0,
            scale_x: 0.5,
            scale_y: 0.5,
        };
        let line = trace_path("M 5,7", &transform);
        assert_eq!(points(&line), vec![(2.0, 3.0)]);
    }

    #[test]
    fn transform_never_feeds_back_into_relative_deltas() {
        let transform = MapTransform {
            offset_x: 100.0,
            offset_y: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
        };
        let line = trace_path("M 0,0 l 10,0", &transform);
        assert_eq!(points(&line), vec![(100.0, 0.0), (110.0, 0.0)]);
    }

    #[test]
    fn empty_data_yields_a_degenerate_path() {
        assert!(trace_path("", &MapTransform::IDENTITY).0.is_empty());
    }
}
