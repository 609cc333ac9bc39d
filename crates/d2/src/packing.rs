//! Candidate packing states explored by the search.

use crate::skyline::Skyline;
use platepack_core::{BoxSize, Orientation, Position};
use std::rc::Rc;

/// Which skyline a box is slid toward first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SlideOrder {
    /// Drop toward the x-skyline, then slide toward the y-skyline.
    DownThenLeft,
    /// Slide toward the y-skyline, then drop toward the x-skyline.
    LeftThenDown,
}

/// The immutable part of a packing problem, shared by all candidates.
#[derive(Debug)]
pub(crate) struct Problem {
    /// Plate dimensions.
    pub(crate) master: BoxSize,
    /// Gap-expanded box footprints, in the caller's original order.
    pub(crate) boxes: Vec<BoxSize>,
    /// Fixed processing order (indices into `boxes`).
    pub(crate) order: Vec<usize>,
}

/// A partial arrangement of the first `used_boxes()` boxes in processing
/// order.
///
/// Candidates are extended by appending exactly one more placed box at a
/// time; search branching duplicates the whole state instead of rolling
/// anything back, so every branch owns an independent copy.
#[derive(Debug, Clone)]
pub(crate) struct Packing {
    problem: Rc<Problem>,
    /// Per-placed-box orientation, indexed in processing order until
    /// [`reorder_to_original`](Self::reorder_to_original) permutes it.
    orientations: Vec<Orientation>,
    /// Per-placed-box lower-left position, indexed like `orientations`.
    positions: Vec<Position>,
    x_skyline: Skyline,
    y_skyline: Skyline,
    in_original_order: bool,
}

impl Packing {
    /// Creates an empty candidate for the given problem.
    pub(crate) fn new(problem: Rc<Problem>) -> Self {
        Self {
            problem,
            orientations: Vec::new(),
            positions: Vec::new(),
            x_skyline: Skyline::new(),
            y_skyline: Skyline::new(),
            in_original_order: false,
        }
    }

    /// Number of boxes placed so far.
    pub(crate) fn used_boxes(&self) -> usize {
        self.orientations.len()
    }

    /// True once every box of the problem is placed.
    pub(crate) fn is_complete(&self) -> bool {
        self.used_boxes() == self.problem.boxes.len()
    }

    /// Attempts to add the next box in processing order with the given
    /// orientation and slide order.
    ///
    /// The first box of an empty candidate is placed directly at the
    /// origin and seeds both skylines; every later box is slid into place.
    /// On failure the candidate is left unchanged.
    pub(crate) fn add_next_box(&mut self, orientation: Orientation, order: SlideOrder) -> bool {
        debug_assert!(self.used_boxes() < self.problem.boxes.len());

        let next = orientation.apply(self.problem.boxes[self.problem.order[self.used_boxes()]]);
        let master = self.problem.master;

        let position = if self.used_boxes() == 0 {
            if next.x() > master.x() || next.y() > master.y() {
                return false;
            }
            self.x_skyline.seed(next.x(), next.y(), master.x());
            self.y_skyline.seed(next.y(), next.x(), master.y());
            Position::default()
        } else {
            match self.slide(&next, order) {
                Some(position) => position,
                None => return false,
            }
        };

        self.orientations.push(orientation);
        self.positions.push(position);
        true
    }

    /// Slides a box toward both skylines in the requested order.
    ///
    /// The left-then-down order reuses the down-then-left logic in a frame
    /// rotated 90 degrees: master and box are rotated, the skylines swap
    /// roles and the resulting position is rotated back.
    fn slide(&mut self, item: &BoxSize, order: SlideOrder) -> Option<Position> {
        match order {
            SlideOrder::DownThenLeft => slide_toward(
                &self.problem.master,
                item,
                &mut self.x_skyline,
                &mut self.y_skyline,
            ),
            SlideOrder::LeftThenDown => {
                let master = self.problem.master.rotated();
                let item = item.rotated();
                let position =
                    slide_toward(&master, &item, &mut self.y_skyline, &mut self.x_skyline)?;
                Some(position.rotated())
            }
        }
    }

    /// Permutes positions and orientations back into the caller's original
    /// box order.
    ///
    /// Only applicable to complete packings; an incomplete candidate is
    /// left untouched.
    pub(crate) fn reorder_to_original(&mut self) {
        if self.in_original_order {
            return;
        }
        if !self.is_complete() {
            return;
        }

        let count = self.used_boxes();
        let mut orientations = vec![Orientation::default(); count];
        let mut positions = vec![Position::default(); count];
        for (i, &original) in self.problem.order.iter().enumerate() {
            orientations[original] = self.orientations[i];
            positions[original] = self.positions[i];
        }

        self.orientations = orientations;
        self.positions = positions;
        self.in_original_order = true;
    }

    /// Shifts every stored position from the lower-left corner of a
    /// gap-expanded box to the lower-left corner of the true box.
    pub(crate) fn adjust_positions_to_original_sizes(&mut self, min_gap: f64) {
        let correction = Position::new(min_gap / 2.0, min_gap / 2.0);
        for position in &mut self.positions {
            *position += correction;
        }
    }

    /// Consumes the candidate and yields its placement data.
    pub(crate) fn into_parts(self) -> (Vec<Orientation>, Vec<Position>) {
        (self.orientations, self.positions)
    }

    /// Logs the corners of every placed box at debug level.
    pub(crate) fn log_arrangement(&self) {
        if !log::log_enabled!(log::Level::Debug) {
            return;
        }
        for i in 0..self.used_boxes() {
            let index = if self.in_original_order {
                i
            } else {
                self.problem.order[i]
            };
            let size = self.orientations[i].apply(self.problem.boxes[index]);
            let p = self.positions[i];
            log::debug!(
                "box {}: ({}, {}) -- ({}, {})",
                index,
                p.x(),
                p.y(),
                p.x() + size.x(),
                p.y() + size.y()
            );
        }
    }

    #[cfg(test)]
    pub(crate) fn position(&self, i: usize) -> Position {
        self.positions[i]
    }

    #[cfg(test)]
    pub(crate) fn orientation(&self, i: usize) -> Orientation {
        self.orientations[i]
    }

    #[cfg(test)]
    pub(crate) fn skylines(&self) -> (&Skyline, &Skyline) {
        (&self.x_skyline, &self.y_skyline)
    }
}

/// Slides a box down toward `x_skyline`, then left toward `y_skyline`, and
/// incorporates it into both on success.
///
/// Nothing is mutated on any failure path.
fn slide_toward(
    master: &BoxSize,
    item: &BoxSize,
    x_skyline: &mut Skyline,
    y_skyline: &mut Skyline,
) -> Option<Position> {
    // Drop the box from the upper right corner straight down until it rests
    // on the x-skyline. Only shelf positions the box's right edge can still
    // clear are examined.
    let y_bottom = x_skyline.max_value_beyond(master.x() - item.x())?;
    let y_top = y_bottom + item.y();
    if y_top > master.y() {
        return None;
    }

    // Slide the box to the left until it hits the y-skyline.
    let x_left = y_skyline.max_value_in_span(y_bottom, y_top)?;
    let x_right = x_left + item.x();
    if x_right > master.x() {
        return None;
    }

    y_skyline.cover(y_bottom, y_top, x_right);
    x_skyline.cover(x_left, x_right, y_top);

    Some(Position::new(x_left, y_bottom))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn problem(master: (f64, f64), boxes: &[(f64, f64)]) -> Rc<Problem> {
        Rc::new(Problem {
            master: BoxSize::new(master.0, master.1),
            boxes: boxes.iter().map(|&(x, y)| BoxSize::new(x, y)).collect(),
            order: (0..boxes.len()).collect(),
        })
    }

    #[test]
    fn test_first_box_at_origin() {
        let mut packing = Packing::new(problem((10.0, 10.0), &[(4.0, 3.0)]));
        assert!(packing.add_next_box(Orientation::AsGiven, SlideOrder::DownThenLeft));

        assert_eq!(packing.used_boxes(), 1);
        assert_relative_eq!(packing.position(0).x(), 0.0);
        assert_relative_eq!(packing.position(0).y(), 0.0);

        let (x_skyline, y_skyline) = packing.skylines();
        assert_eq!(x_skyline.breakpoints(), &[(4.0, 3.0), (10.0, 0.0)]);
        assert_eq!(y_skyline.breakpoints(), &[(3.0, 4.0), (10.0, 0.0)]);
    }

    #[test]
    fn test_first_box_rotated() {
        // 12 x 4 only fits the 6 x 20 plate when rotated.
        let mut packing = Packing::new(problem((6.0, 20.0), &[(12.0, 4.0)]));
        assert!(!packing.add_next_box(Orientation::AsGiven, SlideOrder::DownThenLeft));
        assert_eq!(packing.used_boxes(), 0);

        assert!(packing.add_next_box(Orientation::Rotated, SlideOrder::DownThenLeft));
        assert!(packing.orientation(0).is_rotated());
    }

    #[test]
    fn test_second_box_slides_down_then_left() {
        let mut packing = Packing::new(problem((10.0, 10.0), &[(4.0, 4.0), (4.0, 4.0)]));
        assert!(packing.add_next_box(Orientation::AsGiven, SlideOrder::DownThenLeft));
        assert!(packing.add_next_box(Orientation::AsGiven, SlideOrder::DownThenLeft));

        // The second box drops to the floor and slides left against the
        // first one.
        assert_relative_eq!(packing.position(1).x(), 4.0);
        assert_relative_eq!(packing.position(1).y(), 0.0);

        let (x_skyline, y_skyline) = packing.skylines();
        assert_eq!(x_skyline.breakpoints(), &[(4.0, 4.0), (8.0, 4.0), (10.0, 0.0)]);
        assert_eq!(
            y_skyline.breakpoints(),
            &[(0.0, 4.0), (4.0, 8.0), (10.0, 0.0)]
        );
    }

    #[test]
    fn test_second_box_slides_left_then_down() {
        let mut packing = Packing::new(problem((10.0, 10.0), &[(4.0, 4.0), (4.0, 4.0)]));
        assert!(packing.add_next_box(Orientation::AsGiven, SlideOrder::DownThenLeft));
        assert!(packing.add_next_box(Orientation::AsGiven, SlideOrder::LeftThenDown));

        // In the rotated frame the roles swap: the box ends up on top of
        // the first one, flush with the left edge.
        assert_relative_eq!(packing.position(1).x(), 0.0);
        assert_relative_eq!(packing.position(1).y(), 4.0);
    }

    #[test]
    fn test_failed_slide_leaves_candidate_unchanged() {
        let mut packing = Packing::new(problem((10.0, 10.0), &[(8.0, 8.0), (8.0, 8.0)]));
        assert!(packing.add_next_box(Orientation::AsGiven, SlideOrder::DownThenLeft));

        let before = packing.clone();
        assert!(!packing.add_next_box(Orientation::AsGiven, SlideOrder::DownThenLeft));
        assert!(!packing.add_next_box(Orientation::AsGiven, SlideOrder::LeftThenDown));

        assert_eq!(packing.used_boxes(), before.used_boxes());
        assert_eq!(packing.skylines().0, before.skylines().0);
        assert_eq!(packing.skylines().1, before.skylines().1);
    }

    #[test]
    fn test_reorder_to_original() {
        // Processing order reversed relative to the original order.
        let problem = Rc::new(Problem {
            master: BoxSize::new(20.0, 20.0),
            boxes: vec![BoxSize::new(2.0, 2.0), BoxSize::new(6.0, 6.0)],
            order: vec![1, 0],
        });

        let mut packing = Packing::new(problem);
        assert!(packing.add_next_box(Orientation::AsGiven, SlideOrder::DownThenLeft));
        assert!(packing.add_next_box(Orientation::AsGiven, SlideOrder::DownThenLeft));

        // Placed in processing order: the 6x6 first, the 2x2 beside it.
        assert_relative_eq!(packing.position(0).x(), 0.0);
        assert_relative_eq!(packing.position(1).x(), 6.0);

        packing.reorder_to_original();

        // After reordering, index 0 is the 2x2 box again.
        assert_relative_eq!(packing.position(0).x(), 6.0);
        assert_relative_eq!(packing.position(1).x(), 0.0);
    }

    #[test]
    fn test_reorder_incomplete_is_noop() {
        let mut packing = Packing::new(problem((10.0, 10.0), &[(4.0, 4.0), (4.0, 4.0)]));
        assert!(packing.add_next_box(Orientation::AsGiven, SlideOrder::DownThenLeft));

        packing.reorder_to_original();
        assert_eq!(packing.used_boxes(), 1);
        assert_relative_eq!(packing.position(0).x(), 0.0);
    }

    #[test]
    fn test_position_adjustment() {
        let mut packing = Packing::new(problem((10.0, 10.0), &[(4.0, 4.0), (4.0, 4.0)]));
        assert!(packing.add_next_box(Orientation::AsGiven, SlideOrder::DownThenLeft));
        assert!(packing.add_next_box(Orientation::AsGiven, SlideOrder::DownThenLeft));

        packing.adjust_positions_to_original_sizes(1.0);
        assert_relative_eq!(packing.position(0).x(), 0.5);
        assert_relative_eq!(packing.position(0).y(), 0.5);
        assert_relative_eq!(packing.position(1).x(), 4.5);
        assert_relative_eq!(packing.position(1).y(), 0.5);
    }
}
