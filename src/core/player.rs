//! Seat identification and per-seat data storage.
//!
//! ## PlayerId
//!
//! A seat at the table, 0-based. Seating order is the order of turns and of
//! every "in seating order" poll the engine performs.
//!
//! ## PlayerMap
//!
//! Per-seat storage backed by a `Vec`, indexed by `PlayerId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Most seats a table supports.
pub const MAX_SEATS: usize = 8;

/// Fewest seats a table supports.
pub const MIN_SEATS: usize = 2;

/// Seat identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new seat ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all seats of a table with `seat_count` seats.
    ///
    /// ```
    /// use sanguo_engine::core::PlayerId;
    ///
    /// let seats: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(seats.len(), 4);
    /// assert_eq!(seats[3], PlayerId::new(3));
    /// ```
    pub fn all(seat_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..seat_count as u8).map(PlayerId)
    }

    /// The seat to the left (next in turn order), wrapping around.
    #[must_use]
    pub fn next(self, seat_count: usize) -> PlayerId {
        PlayerId(((self.index() + 1) % seat_count) as u8)
    }

    /// Every seat once, in seating order, beginning with `self`.
    ///
    /// ```
    /// use sanguo_engine::core::PlayerId;
    ///
    /// let order: Vec<_> = PlayerId::new(2).around(4).map(|p| p.0).collect();
    /// assert_eq!(order, vec![2, 3, 0, 1]);
    /// ```
    pub fn around(self, seat_count: usize) -> impl Iterator<Item = PlayerId> {
        let start = self.index();
        (0..seat_count).map(move |offset| PlayerId(((start + offset) % seat_count) as u8))
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Seat {}", self.0)
    }
}

/// Per-seat data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use sanguo_engine::core::{PlayerId, PlayerMap};
///
/// let mut hp: PlayerMap<u32> = PlayerMap::new(4, |_| 4);
/// hp[PlayerId::new(1)] = 2;
/// assert_eq!(hp[PlayerId::new(0)], 4);
/// assert_eq!(hp[PlayerId::new(1)], 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(seat_count: usize, factory: impl FnMut(PlayerId) -> T) -> Self {
        assert!(seat_count > 0, "Must have at least 1 seat");
        assert!(seat_count <= 255, "At most 255 seats supported");

        let data = (0..seat_count as u8).map(PlayerId).map(factory).collect();
        Self { data }
    }

    /// Build a map from one value per seat, in seat order.
    pub fn from_vec(data: Vec<T>) -> Self {
        assert!(!data.is_empty(), "Must have at least 1 seat");
        assert!(data.len() <= 255, "At most 255 seats supported");
        Self { data }
    }

    /// Number of seats.
    #[must_use]
    pub fn seat_count(&self) -> usize {
        self.data.len()
    }

    /// Does `seat` sit at this table?
    #[must_use]
    pub fn contains(&self, seat: PlayerId) -> bool {
        seat.index() < self.data.len()
    }

    #[must_use]
    pub fn get(&self, seat: PlayerId) -> &T {
        &self.data[seat.index()]
    }

    pub fn get_mut(&mut self, seat: PlayerId) -> &mut T {
        &mut self.data[seat.index()]
    }

    /// Iterate over `(PlayerId, &T)` pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over `(PlayerId, &mut T)` pairs in seat order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        self.data
            .iter_mut()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over values in seat order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, seat: PlayerId) -> &Self::Output {
        self.get(seat)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, seat: PlayerId) -> &mut Self::Output {
        self.get_mut(seat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        let p1 = PlayerId::new(1);
        assert_eq!(p1.index(), 1);
        assert_eq!(format!("{}", p1), "Seat 1");
    }

    #[test]
    fn test_next_wraps() {
        assert_eq!(PlayerId::new(0).next(3), PlayerId::new(1));
        assert_eq!(PlayerId::new(2).next(3), PlayerId::new(0));
    }

    #[test]
    fn test_around_visits_every_seat_once() {
        let order: Vec<_> = PlayerId::new(3).around(5).collect();
        assert_eq!(
            order,
            vec![
                PlayerId::new(3),
                PlayerId::new(4),
                PlayerId::new(0),
                PlayerId::new(1),
                PlayerId::new(2),
            ]
        );
    }

    #[test]
    fn test_player_map_new() {
        let map: PlayerMap<usize> = PlayerMap::new(4, |p| p.index() * 10);
        assert_eq!(map[PlayerId::new(0)], 0);
        assert_eq!(map[PlayerId::new(3)], 30);
        assert_eq!(map.seat_count(), 4);
    }

    #[test]
    fn test_player_map_mutation() {
        let mut map = PlayerMap::from_vec(vec![0, 0]);
        map[PlayerId::new(1)] = 20;
        assert_eq!(map[PlayerId::new(0)], 0);
        assert_eq!(map[PlayerId::new(1)], 20);
        assert!(map.contains(PlayerId::new(1)));
        assert!(!map.contains(PlayerId::new(2)));
    }

    #[test]
    fn test_player_map_iter() {
        let map = PlayerMap::from_vec(vec!['a', 'b', 'c']);
        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs[2], (PlayerId::new(2), &'c'));
    }

    #[test]
    fn test_player_map_serialization() {
        let map: PlayerMap<i32> = PlayerMap::new(2, |p| p.index() as i32 + 1);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: PlayerMap<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }

    #[test]
    #[should_panic(expected = "Must have at least 1 seat")]
    fn test_player_map_zero_seats() {
        let _: PlayerMap<i32> = PlayerMap::new(0, |_| 0);
    }
}
