use navgraph2d::core::math::Vector2;

/// Cycles all the point index positions forward by `n`. E.g. index 0 becomes 1, last index
/// becomes 0, etc.
pub fn cycle_start_index_forward(input: &[Vector2<f64>], n: usize) -> Vec<Vector2<f64>> {
    assert!(n > 0, "cycling forward by 0 just returns the same loop");
    assert!(
        n < input.len(),
        "cycling forward by more than the loop length is unnecessary"
    );
    input.iter().cycle().skip(n).take(input.len()).copied().collect()
}

#[derive(Debug, Clone, Copy)]
pub struct ModifiedLoopState {
    pub inverted_direction: bool,
    pub cycle_position: usize,
}

/// Visits a point loop along with its reversed and index cycled variants. Every variant
/// describes the same closed shape so shape level properties must hold for all of them.
#[derive(Debug, Clone)]
pub struct ModifiedLoopSet<'a> {
    pub input: &'a [Vector2<f64>],
    pub invert_direction: bool,
    pub cycle_index_positions: bool,
}

impl<'a> ModifiedLoopSet<'a> {
    pub fn new(input: &'a [Vector2<f64>], invert_direction: bool, cycle_index_positions: bool) -> Self {
        Self {
            input,
            invert_direction,
            cycle_index_positions,
        }
    }

    pub fn accept_closure<F>(&self, visitor: &mut F)
    where
        F: FnMut(Vec<Vector2<f64>>, ModifiedLoopState),
    {
        let state = |inverted_direction, cycle_position| ModifiedLoopState {
            inverted_direction,
            cycle_position,
        };

        let mut inverted = self.input.to_vec();
        inverted.reverse();

        visitor(self.input.to_vec(), state(false, 0));
        if self.invert_direction {
            visitor(inverted.clone(), state(true, 0));
        }

        if self.cycle_index_positions {
            for i in 1..self.input.len() {
                visitor(cycle_start_index_forward(self.input, i), state(false, i));
            }

            if self.invert_direction {
                for i in 1..inverted.len() {
                    visitor(cycle_start_index_forward(&inverted, i), state(true, i));
                }
            }
        }
    }
}
