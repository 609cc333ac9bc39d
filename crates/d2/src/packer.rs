//! Bounded backtracking search over candidate packings.

use crate::boundary::Plate;
use crate::packing::{Packing, Problem, SlideOrder};
use platepack_core::{BoxSize, Config, Orientation, Placement, Result, SolveResult};

use std::rc::Rc;
use std::time::Instant;

/// Arranges box footprints on a build plate without overlap.
///
/// Each part is represented by its minimal axis-aligned bounding box. Boxes
/// keep their base orientation (only 90 degree in-plane rotation is
/// considered) and their height is never checked: the working space is
/// assumed to accommodate any height.
///
/// The search is deterministic and depth-pruned: it may fail to find an
/// arrangement that exists when finding it would require backtracking more
/// than [`Config::max_back_depth`] boxes behind the best candidate seen.
pub struct PlatePacker {
    plate: Plate,
    boxes: Vec<BoxSize>,
    /// Fixed processing order, larger footprint diagonals first.
    order: Vec<usize>,
    config: Config,
}

impl PlatePacker {
    /// Creates a packer for the given plate and box footprints.
    pub fn new(plate: Plate, boxes: Vec<BoxSize>) -> Self {
        let order = processing_order(&boxes);
        Self {
            plate,
            boxes,
            order,
            config: Config::default(),
        }
    }

    /// Replaces the configuration.
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Attempts to pack every box onto the plate.
    ///
    /// Returns `Err` only for invalid inputs. A search that finds no
    /// arrangement — whether none exists or the depth bound gave up first —
    /// yields `Ok` with [`SolveResult::solved`] set to `false` and an empty
    /// placement list.
    pub fn pack(&self) -> Result<SolveResult> {
        self.plate.validate()?;
        self.config.validate()?;
        for item in &self.boxes {
            item.validate()?;
        }

        let start = Instant::now();
        let mut result = SolveResult::new();

        if self.boxes.is_empty() {
            result.solved = true;
            result.computation_time_ms = start.elapsed().as_millis() as u64;
            return Ok(result);
        }

        // Expand every footprint by the minimum gap; the search then only
        // has to keep expanded boxes from overlapping to guarantee the
        // true boxes keep their clearance.
        let expanded: Vec<BoxSize> = self
            .boxes
            .iter()
            .map(|item| item.expanded(self.config.min_gap))
            .collect();
        let problem = Rc::new(Problem {
            master: self.plate.size(),
            boxes: expanded,
            order: self.order.clone(),
        });
        let num_boxes = problem.boxes.len();

        // Seed the stack with the first box in both orientations; the
        // slide order does not matter for an empty packing.
        let mut pending: Vec<Packing> = Vec::new();
        let mut packing = Packing::new(problem.clone());
        if packing.add_next_box(Orientation::Rotated, SlideOrder::DownThenLeft) {
            pending.push(packing);
            packing = Packing::new(problem.clone());
        }
        if packing.add_next_box(Orientation::AsGiven, SlideOrder::DownThenLeft) {
            pending.push(packing);
        }

        // Keep extending candidates until one uses every box or all
        // possibilities within the depth bound are exhausted.
        let mut winner: Option<Packing> = None;
        let mut max_used_boxes = 1;
        while let Some(mut packing) = pending.pop() {
            if packing.used_boxes() == num_boxes {
                winner = Some(packing);
                break;
            }

            // A candidate trailing the search front by more than the depth
            // bound is abandoned; completing the search from that far back
            // would take too long.
            max_used_boxes = max_used_boxes.max(packing.used_boxes());
            if max_used_boxes - packing.used_boxes() > self.config.max_back_depth {
                continue;
            }

            // Try to add the next box in 4 different ways and keep the
            // successful extensions. The last attempt reuses the popped
            // candidate, so as-given/down-then-left is explored first.
            let mut branch = packing.clone();
            if branch.add_next_box(Orientation::Rotated, SlideOrder::LeftThenDown) {
                pending.push(branch);
            }
            let mut branch = packing.clone();
            if branch.add_next_box(Orientation::Rotated, SlideOrder::DownThenLeft) {
                pending.push(branch);
            }
            let mut branch = packing.clone();
            if branch.add_next_box(Orientation::AsGiven, SlideOrder::LeftThenDown) {
                pending.push(branch);
            }
            if packing.add_next_box(Orientation::AsGiven, SlideOrder::DownThenLeft) {
                pending.push(packing);
            }
        }

        if let Some(mut packing) = winner {
            packing.reorder_to_original();
            packing.adjust_positions_to_original_sizes(self.config.min_gap);
            packing.log_arrangement();

            let (orientations, positions) = packing.into_parts();
            result.placements = orientations
                .into_iter()
                .zip(positions)
                .enumerate()
                .map(|(index, (orientation, position))| {
                    Placement::new(index, position, orientation)
                })
                .collect();
            result.solved = true;
            result.utilization =
                self.boxes.iter().map(BoxSize::area).sum::<f64>() / self.plate.area();
            log::debug!(
                "packed {} boxes, utilization {}",
                num_boxes,
                result.utilization_percent()
            );
        } else {
            log::debug!("no arrangement found for {} boxes", num_boxes);
        }

        result.computation_time_ms = start.elapsed().as_millis() as u64;
        Ok(result)
    }
}

/// Sorts box indices by strictly decreasing squared footprint diagonal.
///
/// Placing the most space-constrained boxes first keeps backtracking short.
/// Ties keep the original index order so that repeated runs are
/// reproducible.
fn processing_order(boxes: &[BoxSize]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..boxes.len()).collect();
    order.sort_by(|&i, &j| {
        boxes[j]
            .diagonal_sq()
            .total_cmp(&boxes[i].diagonal_sq())
            .then_with(|| i.cmp(&j))
    });
    order
}
