use case_core::Producer;

/// Pares desde 0 hasta `limit` (excluido).
#[derive(Debug, Clone)]
pub struct EvenNumbersGenerator {
    index: i32,
    limit: i32,
}

impl EvenNumbersGenerator {
    pub const DEFAULT_LIMIT: i32 = 10;

    pub fn new() -> Self {
        Self::with_limit(Self::DEFAULT_LIMIT)
    }

    pub fn with_limit(limit: i32) -> Self {
        Self { index: 0, limit }
    }
}

impl Default for EvenNumbersGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl Producer for EvenNumbersGenerator {
    type Item = i32;

    fn has_more(&mut self) -> bool {
        self.index < self.limit
    }

    fn produce(&mut self) -> Option<i32> {
        if !self.has_more() {
            return None;
        }
        let current = self.index;
        self.index += 2;
        Some(current)
    }
}
