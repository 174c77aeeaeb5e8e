/// Identifies one source file inside an analysis snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FileId(u32);

impl FileId {
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for FileId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}
