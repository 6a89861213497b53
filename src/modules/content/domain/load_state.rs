/// Where a single load stands: not yet available, available, or failed.
///
/// `Pending` is the only state without a value. Once `Ready` or `Failed`
/// is reached the load is over; a retry is a new load.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T, E> {
    Pending,
    Ready(T),
    Failed(E),
}

impl<T, E> LoadState<T, E> {
    pub fn is_pending(&self) -> bool {
        matches!(self, LoadState::Pending)
    }

    pub fn is_terminal(&self) -> bool {
        !self.is_pending()
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            LoadState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&E> {
        match self {
            LoadState::Failed(error) => Some(error),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> LoadState<U, E> {
        match self {
            LoadState::Pending => LoadState::Pending,
            LoadState::Ready(value) => LoadState::Ready(f(value)),
            LoadState::Failed(error) => LoadState::Failed(error),
        }
    }

    /// Merges two independent loads for a view that needs both.
    ///
    /// Pending while either is pending, failed if either failed (this one's
    /// failure reported first), ready only when both are.
    pub fn zip<U>(self, other: LoadState<U, E>) -> LoadState<(T, U), E> {
        match (self, other) {
            (LoadState::Pending, _) | (_, LoadState::Pending) => LoadState::Pending,
            (LoadState::Failed(error), _) | (_, LoadState::Failed(error)) => {
                LoadState::Failed(error)
            }
            (LoadState::Ready(a), LoadState::Ready(b)) => LoadState::Ready((a, b)),
        }
    }
}

impl<T, E> From<Result<T, E>> for LoadState<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => LoadState::Ready(value),
            Err(error) => LoadState::Failed(error),
        }
    }
}
