/// Identity of a rendered list row, owned by the panel that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowId(pub u64);

/// Hands out row identities that are never reused within one panel.
#[derive(Debug, Default, Clone)]
pub struct RowAllocator {
    next: u64,
}

impl RowAllocator {
    pub fn allocate(&mut self) -> RowId {
        let id = RowId(self.next);
        self.next += 1;
        id
    }
}
