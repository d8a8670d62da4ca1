/// The core of a difficulty object: a pairing of a hit object with the one
/// before it, indexable into the full difficulty object sequence.
pub(crate) trait IDifficultyObject: Sized {
    /// The index within the difficulty object sequence.
    fn idx(&self) -> usize;

    /// The clock-rate adjusted start time.
    fn start_time(&self) -> f64;

    /// The difficulty object `backwards_idx + 1` positions earlier.
    fn previous<'a>(&self, backwards_idx: usize, objects: &'a [Self]) -> Option<&'a Self> {
        self.idx()
            .checked_sub(backwards_idx + 1)
            .and_then(|idx| objects.get(idx))
    }
}
