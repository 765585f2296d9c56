//! Irving's algorithm for the stable roommates problem.
//!
//! Given `n` people who each rank everybody else, find a perfect matching in
//! which no two people would both rather be with each other than with their
//! assigned partners. Unlike stable marriage such a matching may not exist.
//!
//! The solver runs in two phases over a shared rank table:
//!
//! 1. **Proposals.** Everyone proposes down their list. A person holds the
//!    best proposal received so far and rejects the rest; a rejected proposer
//!    moves on to their next choice. Afterwards each list is cut to the
//!    entries between the person's accepted proposal and the proposal they
//!    hold.
//! 2. **Rotations.** While someone still has more than one candidate, trace
//!    the rotation through "second choices" starting at that person and
//!    eliminate it. An emptied list means there is no stable matching.
//!    The walk that found a rotation is kept: its members are popped and
//!    tracing resumes from the tail left behind.
//!
//! Both phases move each list's bounds and second-choice cursors
//! monotonically inwards, so the total work is O(n²).

use crate::errors::PreferenceError;
use tracing::trace;

/// Index of a person in a [`PreferenceMatrix`].
pub type PersonIndex = usize;

/// Complete preference table for the stable roommates problem.
///
/// Row `i` ranks all `n` people from most to least preferred partner for
/// person `i` and ends with `i` itself, which marks the end of the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferenceMatrix {
    rows: Vec<Vec<PersonIndex>>,
}

impl PreferenceMatrix {
    /// Validate and wrap a preference table.
    ///
    /// # Errors
    /// Returns an error if a row is not a permutation of `0..n` ending with
    /// the row's own index.
    pub fn new(rows: Vec<Vec<PersonIndex>>) -> Result<Self, PreferenceError> {
        let n = rows.len();
        let mut seen = vec![false; n];

        for (row, ranking) in rows.iter().enumerate() {
            if ranking.len() != n {
                return Err(PreferenceError::RowLength {
                    row,
                    len: ranking.len(),
                    expected: n,
                });
            }

            seen.iter_mut().for_each(|flag| *flag = false);
            for &person in ranking {
                if person >= n {
                    return Err(PreferenceError::PersonOutOfRange {
                        row,
                        person,
                        size: n,
                    });
                }
                if std::mem::replace(&mut seen[person], true) {
                    return Err(PreferenceError::DuplicatePerson { row, person });
                }
            }

            if let Some(&last) = ranking.last() {
                if last != row {
                    return Err(PreferenceError::SentinelNotLast { row, found: last });
                }
            }
        }

        Ok(Self { rows })
    }

    /// Build from rows that are known to be well formed.
    pub(crate) fn from_ranked_rows(rows: Vec<Vec<PersonIndex>>) -> Self {
        debug_assert!(Self::new(rows.clone()).is_ok());
        Self { rows }
    }

    /// Number of people.
    #[inline]
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// Ranking of person `person`, most preferred first.
    #[inline]
    pub fn row(&self, person: PersonIndex) -> &[PersonIndex] {
        &self.rows[person]
    }

    pub fn rows(&self) -> &[Vec<PersonIndex>] {
        &self.rows
    }
}

/// Solve the stable roommates problem.
///
/// Returns `partners` with `partners[p]` the partner of `p` when a stable
/// perfect matching exists, and `None` otherwise. Empty and odd-sized tables
/// have no perfect matching and return `None` immediately.
pub fn stable_roommates(preferences: &PreferenceMatrix) -> Option<Vec<PersonIndex>> {
    let n = preferences.size();
    if n == 0 || n % 2 == 1 {
        return None;
    }
    StableRoommatesSolver::new(preferences).solve()
}

/// Working state of Irving's algorithm.
///
/// `leftmost[p]` is the rank (in `p`'s own list) of the best candidate `p`
/// still has, `rightmost[p]` the rank of the worst one. During phase 1
/// `rightmost[p]` is the rank of the proposal `p` currently holds, with `p`
/// itself standing for "holding nobody".
pub struct StableRoommatesSolver<'a> {
    preferences: &'a PreferenceMatrix,
    n: usize,
    /// `rank[p * n + q]`: position of `q` in `p`'s list.
    rank: Vec<usize>,
    /// `removed[p * n + q]`: `q` is no longer a candidate for `p`.
    removed: Vec<bool>,
    leftmost: Vec<usize>,
    rightmost: Vec<usize>,
    /// Rank of the second candidate last seen for each person.
    second: Vec<usize>,
    /// Phase 2 walk, shared across rotations.
    walk: Vec<PersonIndex>,
    /// Index of each person in `walk`, `usize::MAX` when absent.
    position_in_walk: Vec<usize>,
}

impl<'a> StableRoommatesSolver<'a> {
    pub fn new(preferences: &'a PreferenceMatrix) -> Self {
        let n = preferences.size();
        let mut rank = vec![0; n * n];
        for (person, ranking) in preferences.rows().iter().enumerate() {
            for (position, &other) in ranking.iter().enumerate() {
                rank[person * n + other] = position;
            }
        }

        Self {
            preferences,
            n,
            rank,
            removed: vec![true; n * n],
            leftmost: vec![0; n],
            rightmost: vec![n.saturating_sub(1); n],
            second: vec![0; n],
            walk: Vec::with_capacity(n),
            position_in_walk: vec![usize::MAX; n],
        }
    }

    /// Run both phases; `Some(partners)` on success.
    pub fn solve(mut self) -> Option<Vec<PersonIndex>> {
        if self.n == 0 || self.n % 2 == 1 {
            return None;
        }
        if !self.propose_all() {
            trace!("stable roommates: proposal phase exhausted a list");
            return None;
        }
        if !self.prune() {
            return None;
        }
        if !self.eliminate_rotations() {
            trace!("stable roommates: rotation elimination emptied a list");
            return None;
        }
        Some(
            (0..self.n)
                .map(|person| self.best_potential_partner(person))
                .collect(),
        )
    }

    #[inline]
    fn rank(&self, person: PersonIndex, other: PersonIndex) -> usize {
        self.rank[person * self.n + other]
    }

    #[inline]
    fn at_rank(&self, person: PersonIndex, position: usize) -> PersonIndex {
        self.preferences.row(person)[position]
    }

    #[inline]
    fn is_candidate(&self, person: PersonIndex, other: PersonIndex) -> bool {
        !self.removed[person * self.n + other]
    }

    fn remove_pair(&mut self, a: PersonIndex, b: PersonIndex) {
        self.removed[a * self.n + b] = true;
        self.removed[b * self.n + a] = true;
    }

    /// Best candidate left for `person`.
    #[inline]
    fn best_potential_partner(&self, person: PersonIndex) -> PersonIndex {
        self.at_rank(person, self.leftmost[person])
    }

    /// Worst candidate left for `person`.
    #[inline]
    fn worst_potential_partner(&self, person: PersonIndex) -> PersonIndex {
        self.at_rank(person, self.rightmost[person])
    }

    /// Phase 1. Returns `false` if someone runs out of people to propose to.
    fn propose_all(&mut self) -> bool {
        for person in 0..self.n {
            let mut proposer = person;
            loop {
                let target = self.best_potential_partner(proposer);
                if target == proposer {
                    return false;
                }

                let position = self.rank(target, proposer);
                if position < self.rightmost[target] {
                    let jilted = self.worst_potential_partner(target);
                    self.rightmost[target] = position;
                    if jilted == target {
                        break;
                    }
                    self.leftmost[jilted] += 1;
                    proposer = jilted;
                } else {
                    self.leftmost[proposer] += 1;
                }
            }
        }
        true
    }

    /// Cut every list to its phase-1 bounds and make candidacy symmetric.
    fn prune(&mut self) -> bool {
        let n = self.n;
        for person in 0..n {
            for other in 0..n {
                let keep = person != other
                    && (self.leftmost[person]..=self.rightmost[person])
                        .contains(&self.rank(person, other))
                    && self.rank(other, person) <= self.rightmost[other];
                self.removed[person * n + other] = !keep;
            }
        }
        (0..n).all(|person| self.tighten(person))
    }

    /// Move `person`'s bounds past removed entries; `false` if the list is
    /// now empty.
    fn tighten(&mut self, person: PersonIndex) -> bool {
        while self.leftmost[person] <= self.rightmost[person]
            && !self.is_candidate(person, self.best_potential_partner(person))
        {
            self.leftmost[person] += 1;
        }
        while self.rightmost[person] > self.leftmost[person]
            && !self.is_candidate(person, self.worst_potential_partner(person))
        {
            self.rightmost[person] -= 1;
        }
        self.leftmost[person] <= self.rightmost[person]
    }

    /// Second remaining candidate of `person`.
    ///
    /// Entries before the cursor stay removed once removed, so the scan picks
    /// up where the previous call stopped.
    fn second_choice(&mut self, person: PersonIndex) -> Option<PersonIndex> {
        let mut position = self.second[person].max(self.leftmost[person] + 1);
        while position <= self.rightmost[person]
            && !self.is_candidate(person, self.at_rank(person, position))
        {
            position += 1;
        }
        self.second[person] = position;
        (position <= self.rightmost[person]).then(|| self.at_rank(person, position))
    }

    #[inline]
    fn has_single_candidate(&self, person: PersonIndex) -> bool {
        self.leftmost[person] == self.rightmost[person]
    }

    fn push_walk(&mut self, person: PersonIndex) {
        self.position_in_walk[person] = self.walk.len();
        self.walk.push(person);
    }

    fn pop_walk(&mut self) {
        if let Some(person) = self.walk.pop() {
            self.position_in_walk[person] = usize::MAX;
        }
    }

    /// Phase 2. Returns `false` if the table has no stable matching.
    ///
    /// Traces `p(i+1) = last(second(p(i)))` until the walk meets itself; the
    /// cycle is a rotation. After eliminating it the rest of the walk is still
    /// a valid prefix, so tracing continues from its end.
    fn eliminate_rotations(&mut self) -> bool {
        let mut cursor = 0;
        loop {
            while self
                .walk
                .last()
                .is_some_and(|&person| self.has_single_candidate(person))
            {
                self.pop_walk();
            }

            let person = match self.walk.last().copied() {
                Some(person) => person,
                None => {
                    // Lists only shrink, so people already down to one
                    // candidate never need to be revisited.
                    while cursor < self.n && self.has_single_candidate(cursor) {
                        cursor += 1;
                    }
                    if cursor == self.n {
                        return true;
                    }
                    self.push_walk(cursor);
                    cursor
                }
            };

            let Some(second) = self.second_choice(person) else {
                return false;
            };
            let next = self.worst_potential_partner(second);

            match self.position_in_walk[next] {
                usize::MAX => self.push_walk(next),
                start => {
                    let rotation = self.walk.split_off(start);
                    for &member in &rotation {
                        self.position_in_walk[member] = usize::MAX;
                    }
                    trace!(len = rotation.len(), "stable roommates: eliminating rotation");
                    if !self.eliminate(&rotation) {
                        return false;
                    }
                }
            }
        }
    }

    /// Every member of the rotation is rejected by their first choice and
    /// accepted by their second, who drops everyone ranked below them.
    fn eliminate(&mut self, rotation: &[PersonIndex]) -> bool {
        let seconds: Option<Vec<PersonIndex>> = rotation
            .iter()
            .map(|&person| self.second_choice(person))
            .collect();
        let Some(seconds) = seconds else {
            return false;
        };

        for (&person, &acceptor) in rotation.iter().zip(&seconds) {
            let kept = self.rank(acceptor, person);
            let worst = self.rightmost[acceptor];
            for position in kept + 1..=worst {
                let dropped = self.at_rank(acceptor, position);
                if self.is_candidate(acceptor, dropped) {
                    self.remove_pair(acceptor, dropped);
                    if !self.tighten(dropped) {
                        return false;
                    }
                }
            }
            self.rightmost[acceptor] = kept.min(worst);
            if !self.tighten(acceptor) {
                return false;
            }
        }
        true
    }
}
