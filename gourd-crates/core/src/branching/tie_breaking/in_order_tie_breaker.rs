use super::Direction;
use super::TieBreaker;

/// A tie-breaker which selects the first variable that it receives with the "best" value
/// according to the provided [`Direction`].
///
/// For example, if the provided direction is [`Direction::Minimum`] and the variables `x1` and
/// `x2` both have value 5, then the tie-breaker returns whichever of the two it received first.
#[derive(Debug)]
pub struct InOrderTieBreaker<Var, Value> {
    selected_variable: Option<Var>,
    selected_value: Option<Value>,
    direction: Direction,
}

impl<Var, Value> InOrderTieBreaker<Var, Value> {
    pub fn new(direction: Direction) -> Self {
        Self {
            selected_variable: None,
            selected_value: None,
            direction,
        }
    }

    fn reset(&mut self) {
        self.selected_variable = None;
        self.selected_value = None;
    }
}

impl<Var: Copy, Value: PartialOrd> TieBreaker<Var, Value> for InOrderTieBreaker<Var, Value> {
    fn consider(&mut self, variable: Var, value: Value) {
        let is_better = match self.selected_value.as_ref() {
            None => true,
            Some(selected_value) => match self.direction {
                Direction::Maximum => value > *selected_value,
                Direction::Minimum => value < *selected_value,
            },
        };

        if is_better {
            self.selected_variable = Some(variable);
            self.selected_value = Some(value);
        }
    }

    fn select(&mut self) -> Option<Var> {
        let selected = self.selected_variable;
        self.reset();
        selected
    }

    fn get_direction(&self) -> Direction {
        self.direction
    }
}
