//! Identity generation for vertices and edges

use super::store::{GraphError, GraphResult};

/// Issues strictly increasing integer IDs.
///
/// The largest representable value is never issued: a generator whose next
/// value would be `u64::MAX` is exhausted. Not safe for concurrent use.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    next: u64,
}

impl IdGenerator {
    /// First ID issued when none is configured
    pub const DEFAULT_FIRST_ID: u64 = 1;

    /// Create a generator whose first ID is `first_id`.
    ///
    /// Fails when `first_id` leaves no room to issue even one ID.
    pub fn new(first_id: u64) -> GraphResult<Self> {
        if first_id == u64::MAX {
            return Err(GraphError::InvalidFirstId(first_id));
        }
        Ok(IdGenerator { next: first_id })
    }

    /// Issue the next ID
    pub fn next_id(&mut self) -> GraphResult<u64> {
        if self.next == u64::MAX {
            return Err(GraphError::IdsExhausted);
        }
        let id = self.next;
        self.next += 1;
        Ok(id)
    }

    /// The ID the next call to [`next_id`](Self::next_id) would issue
    pub fn peek(&self) -> u64 {
        self.next
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        IdGenerator {
            next: Self::DEFAULT_FIRST_ID,
        }
    }
}
