/// One of the two seats at the board
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Player {
    index: usize,
    ai: bool,
}

impl Player {
    pub fn new(index: usize) -> Self {
        Self { index, ai: false }
    }

    pub fn with_ai(mut self, ai: bool) -> Self {
        self.ai = ai;
        self
    }

    /// The index tagged on this player's tiles, 0 or 1
    pub fn index(&self) -> usize {
        self.index
    }

    /// The 1-based number shown to people
    pub fn number(&self) -> usize {
        self.index + 1
    }

    pub fn is_ai(&self) -> bool {
        self.ai
    }

    pub fn set_ai(&mut self, ai: bool) {
        self.ai = ai;
    }
}
