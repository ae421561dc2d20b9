/// Value-or-error container for expected domain failures.
///
/// Unlike a thrown error, a `Fail` is an ordinary outcome the caller is
/// expected to inspect, e.g. an unknown enum code or a missing reference.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Either<V, E> {
    Ok(V),
    Fail(E),
}

impl<V, E> Either<V, E> {
    pub fn of(value: V) -> Self {
        Self::Ok(value)
    }

    pub fn safe<F>(work: F) -> Self
    where
        F: FnOnce() -> Result<V, E>,
    {
        work().into()
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    pub fn is_fail(&self) -> bool {
        matches!(self, Self::Fail(_))
    }

    pub fn ok(&self) -> Option<&V> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Fail(_) => None,
        }
    }

    pub fn error(&self) -> Option<&E> {
        match self {
            Self::Ok(_) => None,
            Self::Fail(error) => Some(error),
        }
    }

    pub fn get_or_else(self, default: V) -> V {
        match self {
            Self::Ok(value) => value,
            Self::Fail(_) => default,
        }
    }

    pub fn map<U, F>(self, f: F) -> Either<U, E>
    where
        F: FnOnce(V) -> U,
    {
        match self {
            Self::Ok(value) => Either::Ok(f(value)),
            Self::Fail(error) => Either::Fail(error),
        }
    }

    pub fn chain<U, F>(self, f: F) -> Either<U, E>
    where
        F: FnOnce(V) -> Either<U, E>,
    {
        match self {
            Self::Ok(value) => f(value),
            Self::Fail(error) => Either::Fail(error),
        }
    }

    pub fn as_array(self) -> (Option<V>, Option<E>) {
        match self {
            Self::Ok(value) => (Some(value), None),
            Self::Fail(error) => (None, Some(error)),
        }
    }

    pub fn into_result(self) -> Result<V, E> {
        self.into()
    }
}

impl<T, E> Either<Vec<T>, Vec<E>> {
    /// Applies `f` to every item, keeping all failures instead of stopping at
    /// the first one.
    pub fn chain_each<U, F>(self, mut f: F) -> Either<Vec<U>, Vec<E>>
    where
        F: FnMut(T) -> Either<U, E>,
    {
        let values = match self {
            Self::Ok(values) => values,
            Self::Fail(errors) => return Either::Fail(errors),
        };

        let mut oks = Vec::with_capacity(values.len());
        let mut errors = Vec::new();
        for value in values {
            match f(value) {
                Either::Ok(ok) => oks.push(ok),
                Either::Fail(error) => errors.push(error),
            }
        }

        if errors.is_empty() {
            Either::Ok(oks)
        } else {
            Either::Fail(errors)
        }
    }
}

impl<V, E> From<Result<V, E>> for Either<V, E> {
    fn from(result: Result<V, E>) -> Self {
        match result {
            Ok(value) => Self::Ok(value),
            Err(error) => Self::Fail(error),
        }
    }
}

impl<V, E> From<Either<V, E>> for Result<V, E> {
    fn from(either: Either<V, E>) -> Self {
        match either {
            Either::Ok(value) => Ok(value),
            Either::Fail(error) => Err(error),
        }
    }
}
