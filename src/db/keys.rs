/// A key to access a clause in the [clause database](crate::db::clause).
///
/// Keys are issued in order of addition, and as clauses are never removed a key remains valid for the life of a context.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClauseKey(pub(crate) usize);

impl ClauseKey {
    /// The position of the keyed clause in the order of addition.
    pub fn index(&self) -> usize {
        self.0
    }
}

impl std::fmt::Display for ClauseKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}
