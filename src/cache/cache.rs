// A derived value is either not computed yet, or computed against one
// specific buffer version. "Computed as empty" is a Ready value, never Unset.

use crate::types::identifiers::TextVersion;

#[derive(Debug, Clone)]
pub enum Cached<T> {
    Unset,
    Ready { version: TextVersion, value: T },
}

impl<T> Default for Cached<T> {
    fn default() -> Self {
        Cached::Unset
    }
}

impl<T> Cached<T> {
    /// The cached value, if it was computed from `version`.
    pub fn get(&self, version: &TextVersion) -> Option<&T> {
        match self {
            Cached::Ready { version: stamp, value } if stamp == version => Some(value),
            _ => None,
        }
    }

    pub fn store(&mut self, version: TextVersion, value: T) -> &T {
        *self = Cached::Ready { version, value };
        match self {
            Cached::Ready { value, .. } => value,
            Cached::Unset => unreachable!(),
        }
    }

    /// Return the value for `version`, computing it with `fill` on a miss.
    /// A failed fill leaves the cell unset.
    pub fn get_or_try_fill<E>(
        &mut self,
        version: &TextVersion,
        fill: impl FnOnce() -> Result<T, E>,
    ) -> Result<&T, E> {
        if self.get(version).is_none() {
            *self = Cached::Unset;
            let value = fill()?;
            return Ok(self.store(version.clone(), value));
        }
        match self {
            Cached::Ready { value, .. } => Ok(value),
            Cached::Unset => unreachable!(),
        }
    }

    pub fn invalidate(&mut self) {
        *self = Cached::Unset;
    }

    pub fn is_set(&self) -> bool {
        matches!(self, Cached::Ready { .. })
    }
}
