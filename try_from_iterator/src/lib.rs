use core::convert::Infallible;

/// Fallible equivalent of [`FromIterator`].
///
/// Collections in the state have a fixed or maximum length, so constructing them from an
/// arbitrary iterator can fail. Coherence rules prevent [`FromIterator`] and [`TryFrom`]
/// from being used for this.
pub trait TryFromIterator<T>: Sized {
    type Error;

    fn try_from_iter(items: impl IntoIterator<Item = T>) -> Result<Self, Self::Error>;
}

impl<T> TryFromIterator<T> for Box<[T]> {
    type Error = Infallible;

    fn try_from_iter(items: impl IntoIterator<Item = T>) -> Result<Self, Self::Error> {
        Ok(Self::from_iter(items))
    }
}

impl<T> TryFromIterator<T> for Vec<T> {
    type Error = Infallible;

    fn try_from_iter(items: impl IntoIterator<Item = T>) -> Result<Self, Self::Error> {
        Ok(Self::from_iter(items))
    }
}
