/// Snapshot of how much of a generation has been carried out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub done: usize,
    pub from: usize,
    pub is_done: bool,
}

impl Progress {
    pub fn new(done: usize, from: usize) -> Self {
        Self {
            done,
            from,
            is_done: false,
        }
    }

    pub fn new_empty() -> Self {
        Self::new(0, 0)
    }

    pub fn percent(&self) -> f32 {
        if self.from == 0 {
            return if self.is_done { 1.0 } else { 0.0 };
        }

        self.done as f32 / self.from as f32
    }

    pub fn finish(&mut self) {
        self.done = self.from;
        self.is_done = true;
    }
}

impl Default for Progress {
    fn default() -> Self {
        Self::new_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::Progress;

    #[test]
    fn percent() {
        let mut progress = Progress::new(5, 20);
        assert_eq!(progress.percent(), 0.25);

        progress.finish();
        assert!(progress.is_done);
        assert_eq!(progress.percent(), 1.0);

        assert_eq!(Progress::new_empty().percent(), 0.0);
    }
}
