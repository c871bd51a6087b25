use crate::history::{History, HistoryEntry};
use crate::point::Point;
use crate::primitive::Primitive;

/// A replay cursor over a finished clustering run.
///
/// The session performs no computation and no I/O: stepping and jumping are
/// reads over the already-complete [`History`]. The cursor starts at entry 0
/// and clamps at the final entry; reaching the clamp is the caller's
/// convergence/termination signal.
#[derive(Debug)]
pub struct ReplaySession<T: Primitive> {
    history: History<T>,
    cursor: usize,
}

impl<T: Primitive> ReplaySession<T> {
    pub fn new(history: History<T>) -> Self {
        Self { history, cursor: 0 }
    }

    /// The underlying history.
    pub fn history(&self) -> &History<T> {
        &self.history
    }

    /// Index of the entry the cursor currently points at.
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// The entry the cursor currently points at.
    pub fn current(&self) -> &HistoryEntry<T> {
        // A history is never empty, so the cursor always addresses an entry
        self.history
            .at(self.cursor)
            .unwrap_or_else(|_| self.history.last())
    }

    /// Whether the cursor sits on the final entry.
    pub fn at_end(&self) -> bool {
        self.history.is_last(self.cursor)
    }

    /// Advance by one entry, clamped to the final one, and return the entry
    /// now pointed at. Call [`ReplaySession::at_end`] to detect the clamp.
    pub fn step(&mut self) -> &HistoryEntry<T> {
        if self.cursor + 1 < self.history.len() {
            self.cursor += 1;
        }
        self.current()
    }

    /// Jump straight to the final (converged or capped) entry.
    pub fn run_to_end(&mut self) -> &HistoryEntry<T> {
        self.cursor = self.history.len() - 1;
        self.current()
    }

    /// Move the cursor back to entry 0.
    pub fn reset(&mut self) {
        self.cursor = 0;
    }
}

/// State of a [`CentroidPicker`].
#[derive(Debug, Clone, PartialEq)]
pub enum PickerState<T: Primitive> {
    /// No collection in progress.
    Idle,
    /// Collecting centroid positions; `collected` grows towards `needed`.
    Collecting {
        needed: usize,
        collected: Vec<Point<T>>,
    },
    /// Exactly the needed amount of centroids was collected.
    Ready(Vec<Point<T>>),
}

/// Collects manually placed centroid positions, one click at a time.
///
/// The picker is a plain state machine over click coordinates, decoupled from
/// any input-event API: whoever translates pointer events into data
/// coordinates feeds them in via [`CentroidPicker::click`]. Once the needed
/// amount is collected, the set can be handed to
/// [`InitMethod::Manual`](crate::InitMethod).
#[derive(Debug)]
pub struct CentroidPicker<T: Primitive> {
    state: PickerState<T>,
}

impl<T: Primitive> CentroidPicker<T> {
    pub fn new() -> Self {
        Self {
            state: PickerState::Idle,
        }
    }

    /// Start collecting `k` centroid positions, discarding any previous
    /// collection. With `k == 0` there is nothing to collect and the picker
    /// stays idle.
    pub fn begin(&mut self, k: usize) {
        self.state = if k == 0 {
            PickerState::Idle
        } else {
            PickerState::Collecting {
                needed: k,
                collected: Vec::with_capacity(k),
            }
        };
    }

    /// Feed one click position into the machine. Clicks are only consumed
    /// while collecting; in `Idle` and `Ready` they are ignored.
    pub fn click(&mut self, position: Point<T>) {
        if let PickerState::Collecting { needed, collected } = &mut self.state {
            collected.push(position);
            if collected.len() == *needed {
                let done = std::mem::take(collected);
                self.state = PickerState::Ready(done);
            }
        }
    }

    pub fn state(&self) -> &PickerState<T> {
        &self.state
    }

    /// How many more clicks are needed before the set is complete.
    pub fn remaining(&self) -> usize {
        match &self.state {
            PickerState::Collecting { needed, collected } => needed - collected.len(),
            PickerState::Idle | PickerState::Ready(_) => 0,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.state, PickerState::Ready(_))
    }

    /// The collected centroid set, once complete.
    pub fn centroids(&self) -> Option<&[Point<T>]> {
        match &self.state {
            PickerState::Ready(centroids) => Some(centroids),
            _ => None,
        }
    }

    /// Drop any collected positions and return to `Idle`.
    pub fn reset(&mut self) {
        self.state = PickerState::Idle;
    }
}

impl<T: Primitive> Default for CentroidPicker<T> {
    fn default() -> Self {
        Self::new()
    }
}
