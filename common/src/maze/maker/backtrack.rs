use rand::Rng;

use super::MazeMaker;

pub trait Backtrack {
    fn backtrack(&mut self);
}

impl<R: Rng + ?Sized> Backtrack for MazeMaker<'_, R> {
    fn backtrack(&mut self) {
        let mut stack = Vec::new();
        let mut current = self.start;
        self.visit_cell(current);

        loop {
            if let Some(next) = self.pick_neighbor(current) {
                self.remove_wall_between(current, next);
                self.visit_cell(next);
                stack.push(current);
                current = next;
            } else if let Some(previous) = stack.pop() {
                current = previous;
            } else {
                break;
            }
        }
    }
}
