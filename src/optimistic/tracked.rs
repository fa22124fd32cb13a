/// Whether an operation is outstanding for a tracked value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    InFlight,
}

/// A value under optimistic control.
///
/// `confirmed` is the last value the remote side accepted (or the initial
/// value); `pending` is what is displayed while a confirmation is in flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackedValue<T> {
    confirmed: T,
    pending: Option<T>,
}

impl<T> TrackedValue<T> {
    pub fn new(initial: T) -> Self {
        Self {
            confirmed: initial,
            pending: None,
        }
    }

    pub fn confirmed(&self) -> &T {
        &self.confirmed
    }

    pub fn pending(&self) -> Option<&T> {
        self.pending.as_ref()
    }

    /// The value a view should render.
    pub fn displayed(&self) -> &T {
        self.pending.as_ref().unwrap_or(&self.confirmed)
    }

    pub fn phase(&self) -> Phase {
        if self.pending.is_some() {
            Phase::InFlight
        } else {
            Phase::Idle
        }
    }

    pub(crate) fn begin(&mut self, value: T) {
        self.pending = Some(value);
    }

    pub(crate) fn commit(&mut self, value: T) {
        self.confirmed = value;
        self.pending = None;
    }

    pub(crate) fn revert_to(&mut self, rollback: T) {
        self.confirmed = rollback;
        self.pending = None;
    }
}
