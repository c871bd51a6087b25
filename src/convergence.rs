use crate::point::Point;
use crate::primitive::Primitive;

/// Enum with possible convergence strategies.
/// These strategies specify when a running k-means calculation is considered settled:
/// the update step left every centroid where it was, and further iterations would
/// only replay the same state.
pub enum ConvergenceStrategy<T: Primitive> {
    /// Exact coordinate equality between the previous and the updated centroid set.
    Strict,
    /// A centroid counts as unchanged when it moved by at most **epsilon**
    /// (euclidean distance). The comparison is done in squared space, so no
    /// square root is taken.
    /// ## Fields:
    /// - **epsilon**: Maximum movement still treated as "unchanged"
    Tolerance { epsilon: T },
}
impl<T: Primitive> ConvergenceStrategy<T> {
    pub(crate) fn create_logic(&self) -> Box<dyn ConvergenceLogic<T>> {
        match *self {
            ConvergenceStrategy::Strict => Box::new(StrictLogic),
            ConvergenceStrategy::Tolerance { epsilon } => Box::new(ToleranceLogic { epsilon }),
        }
    }
}

pub(crate) trait ConvergenceLogic<T: Primitive> {
    /// Function that has to be called after each update step, with the centroid set
    /// from before and after the update.
    /// ## Returns
    /// - **true** if the calculation has converged
    /// - **false** if the calculation should continue
    fn settled(&mut self, previous: &[Point<T>], current: &[Point<T>]) -> bool;
}

pub(crate) struct StrictLogic;
impl<T: Primitive> ConvergenceLogic<T> for StrictLogic {
    fn settled(&mut self, previous: &[Point<T>], current: &[Point<T>]) -> bool {
        previous
            .iter()
            .zip(current.iter())
            .all(|(p, c)| p.x == c.x && p.y == c.y)
    }
}

pub(crate) struct ToleranceLogic<T: Primitive> {
    epsilon: T,
}
impl<T: Primitive> ConvergenceLogic<T> for ToleranceLogic<T> {
    fn settled(&mut self, previous: &[Point<T>], current: &[Point<T>]) -> bool {
        let limit = self.epsilon * self.epsilon;
        previous
            .iter()
            .zip(current.iter())
            .all(|(p, c)| p.squared_distance(c) <= limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strict_f32() {
        test_strict::<f32>();
    }
    #[test]
    fn test_strict_f64() {
        test_strict::<f64>();
    }

    fn test_strict<T: Primitive>() {
        let mut logic = ConvergenceStrategy::<T>::Strict.create_logic();
        let a = vec![Point::new(T::zero(), T::zero()), Point::new(T::one(), T::one())];
        let b = a.clone();
        assert_eq!(logic.settled(&a, &b), true);

        let mut moved = a.clone();
        moved[1].x = T::from(1.0001).unwrap();
        assert_eq!(logic.settled(&a, &moved), false);
    }

    #[test]
    fn test_tolerance_f32() {
        test_tolerance::<f32>();
    }
    #[test]
    fn test_tolerance_f64() {
        test_tolerance::<f64>();
    }

    fn test_tolerance<T: Primitive>() {
        let eps = T::from(0.1).unwrap();
        {
            let mut logic = ConvergenceStrategy::Tolerance { epsilon: eps }.create_logic();
            let a = vec![Point::new(T::zero(), T::zero())];
            let b = vec![Point::new(T::from(0.05).unwrap(), T::zero())];
            assert_eq!(logic.settled(&a, &b), true);
        }
        {
            let mut logic = ConvergenceStrategy::Tolerance { epsilon: eps }.create_logic();
            let a = vec![Point::new(T::zero(), T::zero())];
            let b = vec![Point::new(T::from(0.5).unwrap(), T::zero())];
            assert_eq!(logic.settled(&a, &b), false);
        }
        {
            // One settled centroid does not hide another moving one
            let mut logic = ConvergenceStrategy::Tolerance { epsilon: eps }.create_logic();
            let a = vec![Point::new(T::zero(), T::zero()), Point::new(T::one(), T::one())];
            let b = vec![Point::new(T::zero(), T::zero()), Point::new(T::one(), T::from(2.0).unwrap())];
            assert_eq!(logic.settled(&a, &b), false);
        }
    }
}
