use hashbrown::HashSet;
use rand_pcg::Pcg32;

use crate::*;

/// Sparse minesweeper board: the set of existing fields plus the mined, revealed and flagged subsets.
///
/// Invariants kept by every operation: `mines ⊆ fields`, `revealed ⊆ fields`, `flags ⊆ mines`.
#[derive(Clone, Debug)]
pub struct Board {
    mode: BoardMode,
    seed: u64,
    bounds: Bounds,
    fields: HashSet<Coord2>,
    mines: HashSet<Coord2>,
    revealed: HashSet<Coord2>,
    flags: HashSet<Coord2>,
    pub(crate) rng: Pcg32,
}

impl Board {
    pub(crate) fn empty(seed: u64, mode: BoardMode, bounds: Bounds) -> Self {
        Self {
            mode,
            seed,
            bounds,
            fields: HashSet::new(),
            mines: HashSet::new(),
            revealed: HashSet::new(),
            flags: HashSet::new(),
            rng: seeded_rng(seed),
        }
    }

    /// Square or rectangular board, fails when the config leaves no safe cell.
    pub fn finite(seed: u64, config: GameConfig) -> Result<Self> {
        FiniteGenerator::new(seed, config).generate()
    }

    /// Finite board with an explicit mine layout instead of a seeded one.
    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let config = GameConfig::new(size, 0)?;
        let bounds = config.bounds();

        let mut board = Self::empty(0, BoardMode::Finite, bounds);
        for coords in bounds.iter() {
            board.insert_field(coords);
        }

        for &coords in mine_coords {
            if !bounds.contains(coords) {
                return Err(GameError::InvalidCoords);
            }
            board.insert_mine(coords);
        }

        GameConfig::new(size, board.mine_count().try_into().unwrap_or(CellCount::MAX))?;
        Ok(board)
    }

    pub fn procedural(seed: u64) -> Self {
        ProceduralGenerator::new(seed).build()
    }

    pub(crate) fn insert_field(&mut self, coords: Coord2) -> bool {
        self.fields.insert(coords)
    }

    /// Marks `coords` as mined, materializing the field first if needed.
    pub(crate) fn insert_mine(&mut self, coords: Coord2) -> bool {
        self.fields.insert(coords);
        self.mines.insert(coords)
    }

    pub fn mode(&self) -> BoardMode {
        self.mode
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Extent of a finite board. Procedural boards report the origin only.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Smallest rectangle covering every existing field.
    pub fn explored_bounds(&self) -> Option<Bounds> {
        let mut iter = self.fields.iter().copied();
        let first = iter.next()?;
        Some(iter.fold(Bounds::point(first), Bounds::include))
    }

    pub fn fields(&self) -> &HashSet<Coord2> {
        &self.fields
    }

    pub fn mines(&self) -> &HashSet<Coord2> {
        &self.mines
    }

    pub fn revealed(&self) -> &HashSet<Coord2> {
        &self.revealed
    }

    pub fn flags(&self) -> &HashSet<Coord2> {
        &self.flags
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    pub fn mine_count(&self) -> usize {
        self.mines.len()
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.len()
    }

    pub fn flag_count(&self) -> usize {
        self.flags.len()
    }

    pub fn is_field(&self, coords: Coord2) -> bool {
        self.fields.contains(&coords)
    }

    pub fn is_mine(&self, coords: Coord2) -> bool {
        self.mines.contains(&coords)
    }

    pub fn is_revealed(&self, coords: Coord2) -> bool {
        self.revealed.contains(&coords)
    }

    pub fn is_flagged(&self, coords: Coord2) -> bool {
        self.flags.contains(&coords)
    }

    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        coords.iter_neighbors().filter(|pos| self.mines.contains(pos)).count() as u8
    }

    pub fn classify(&self, coords: Coord2) -> FieldState {
        use FieldState::*;

        if !self.is_field(coords) {
            return Absent;
        }

        match (self.is_revealed(coords), self.is_mine(coords)) {
            (false, _) if self.is_flagged(coords) => Flagged,
            (false, true) => HiddenMine,
            (false, false) => Hidden,
            (true, true) => RevealedMine,
            (true, false) => FieldState::from_count(self.adjacent_mine_count(coords)),
        }
    }

    /// Same as [`Board::classify`], but an impossible adjacent count becomes an error.
    pub fn checked_classify(&self, coords: Coord2) -> Result<FieldState> {
        self.classify(coords).check(coords)
    }

    /// Classifies every coordinate of `bounds` in row-major order, for drawing a visible window.
    pub fn classify_region(&self, bounds: Bounds) -> impl Iterator<Item = (Coord2, FieldState)> + '_ {
        bounds.iter().map(|coords| (coords, self.classify(coords)))
    }

    /// Reveals a single field.
    ///
    /// Returns the unrevealed neighbors when the field turned out to have no adjacent mines, the caller drives the
    /// rest of the cascade. Anything else, including revealing a mine, returns `None`.
    pub fn reveal(&mut self, coords: Coord2) -> Option<Candidates> {
        self.reveal_outcome(coords).into_candidates()
    }

    pub fn reveal_outcome(&mut self, coords: Coord2) -> RevealOutcome {
        use RevealOutcome::*;

        if !self.is_field(coords) || !self.revealed.insert(coords) {
            return NoChange;
        }

        if self.is_mine(coords) {
            log::debug!("Revealed mine at {:?}", coords);
            return Exploded;
        }

        if self.mode.is_procedural() {
            self.expand_around(coords);
        }

        let adjacent_mines = self.adjacent_mine_count(coords);
        log::trace!("Revealed field at {:?}, mine count: {}", coords, adjacent_mines);

        if adjacent_mines == 0 {
            Cascade(
                coords
                    .iter_neighbors()
                    .filter(|pos| !self.revealed.contains(pos))
                    .collect(),
            )
        } else {
            Revealed
        }
    }

    /// Flags a field, which only ever sticks on mines.
    pub fn set_flag(&mut self, coords: Coord2) -> MarkOutcome {
        if self.is_field(coords) && self.is_mine(coords) && self.flags.insert(coords) {
            log::trace!("Flagged {:?}", coords);
            MarkOutcome::Changed
        } else {
            MarkOutcome::NoChange
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn layout(size: Coord2, mines: &[Coord2]) -> Board {
        Board::from_mine_coords(size, mines).unwrap()
    }

    #[test]
    fn absent_coordinates_are_no_ops() {
        let mut board = layout((3, 3), &[]);

        assert_eq!(board.classify((5, 5)), FieldState::Absent);
        assert_eq!(board.reveal_outcome((-1, 0)), RevealOutcome::NoChange);
        assert_eq!(board.set_flag((3, 0)), MarkOutcome::NoChange);
        assert_eq!(board.revealed_count(), 0);
    }

    #[test]
    fn classify_hidden_states() {
        let mut board = layout((2, 2), &[(0, 0)]);

        assert_eq!(board.classify((0, 0)), FieldState::HiddenMine);
        assert_eq!(board.classify((1, 1)), FieldState::Hidden);

        board.set_flag((0, 0));
        assert_eq!(board.classify((0, 0)), FieldState::Flagged);
    }

    #[test]
    fn reveal_counts_adjacent_mines() {
        let mut board = layout((3, 3), &[(0, 0), (2, 2)]);

        assert_eq!(board.reveal_outcome((1, 1)), RevealOutcome::Revealed);
        assert_eq!(board.classify((1, 1)), FieldState::Revealed(2));
    }

    #[test]
    fn reveal_mine_marks_it_and_stops() {
        let mut board = layout((2, 2), &[(0, 0)]);

        assert_eq!(board.reveal_outcome((0, 0)), RevealOutcome::Exploded);
        assert_eq!(board.classify((0, 0)), FieldState::RevealedMine);
        assert_eq!(board.reveal((1, 1)), None);
        assert_eq!(board.classify((1, 1)), FieldState::Revealed(1));
    }

    #[test]
    fn zero_field_returns_unrevealed_neighbors() {
        let mut board = layout((3, 3), &[]);
        board.reveal((0, 1));

        let mut candidates: Vec<_> = board.reveal((0, 0)).unwrap().into_iter().collect();
        candidates.sort();

        // candidates are not filtered by existence, only (0, 1) is left out
        assert_eq!(candidates, [(-1, -1), (-1, 0), (-1, 1), (0, -1), (1, -1), (1, 0), (1, 1)]);
    }

    #[test]
    fn reveal_twice_is_a_no_op() {
        let mut board = layout((3, 3), &[]);

        assert!(board.reveal((1, 1)).is_some());
        assert_eq!(board.reveal((1, 1)), None);
        assert_eq!(board.revealed_count(), 1);
    }

    #[test]
    fn flags_only_stick_on_mines() {
        let mut board = layout((3, 1), &[(2, 0)]);

        assert_eq!(board.set_flag((0, 0)), MarkOutcome::NoChange);
        assert_eq!(board.set_flag((2, 0)), MarkOutcome::Changed);
        assert_eq!(board.set_flag((2, 0)), MarkOutcome::NoChange);
        assert_eq!(board.flag_count(), 1);
    }

    #[test]
    fn revealed_flag_shows_the_mine() {
        let mut board = layout((3, 1), &[(2, 0)]);
        board.set_flag((2, 0));
        board.reveal((2, 0));

        assert_eq!(board.classify((2, 0)), FieldState::RevealedMine);
    }

    #[test]
    fn checked_classify_passes_valid_states() {
        let mut board = layout((3, 3), &[(0, 0)]);
        board.reveal((1, 1));

        assert_eq!(board.checked_classify((1, 1)), Ok(FieldState::Revealed(1)));
        assert_eq!(board.checked_classify((9, 9)), Ok(FieldState::Absent));
    }

    #[test]
    fn classify_region_walks_rows() {
        let board = layout((2, 1), &[(1, 0)]);
        let states: Vec<_> = board.classify_region(Bounds::new((0, 0), (2, 0))).collect();

        assert_eq!(
            states,
            [
                ((0, 0), FieldState::Hidden),
                ((1, 0), FieldState::HiddenMine),
                ((2, 0), FieldState::Absent),
            ]
        );
    }

    #[test]
    fn explored_bounds_follow_procedural_growth() {
        let mut board = Board::procedural(1);
        assert_eq!(board.explored_bounds(), Some(Bounds::point((0, 0))));
        assert_eq!(board.bounds(), Bounds::point((0, 0)));

        board.reveal((0, 0));
        assert_eq!(board.explored_bounds(), Some(Bounds::new((-1, -1), (1, 1))));
    }
}
