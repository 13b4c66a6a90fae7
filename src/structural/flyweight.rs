//! Structural Pattern: Flyweight
//! Example: every player of a team shares one dress object
//!
//! The cache lives in an explicit [`DressFactory`] owned by the [`Game`], not
//! in a process-wide singleton.
//!
//! Run with: cargo run --bin flyweight

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use itertools::Itertools;
use tracing::{debug, warn};

use crate::error::CatalogError;
use crate::transcript::Transcript;

pub const TERRORIST_DRESS_TYPE: &str = "tDress";
pub const COUNTER_TERRORIST_DRESS_TYPE: &str = "ctDress";

/// Intrinsic, shareable state.
pub trait Dress: fmt::Debug {
    fn color(&self) -> &str;
}

#[derive(Debug)]
pub struct TerroristDress {
    color: String,
}

impl TerroristDress {
    pub fn new() -> Self {
        TerroristDress {
            color: "red".to_string(),
        }
    }
}

impl Default for TerroristDress {
    fn default() -> Self {
        Self::new()
    }
}

impl Dress for TerroristDress {
    fn color(&self) -> &str {
        &self.color
    }
}

#[derive(Debug)]
pub struct CounterTerroristDress {
    color: String,
}

impl CounterTerroristDress {
    pub fn new() -> Self {
        CounterTerroristDress {
            color: "green".to_string(),
        }
    }
}

impl Default for CounterTerroristDress {
    fn default() -> Self {
        Self::new()
    }
}

impl Dress for CounterTerroristDress {
    fn color(&self) -> &str {
        &self.color
    }
}

#[derive(Debug, Default)]
pub struct DressFactory {
    dresses: HashMap<String, Rc<dyn Dress>>,
}

impl DressFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// The cached dress for `dress_type`, created on first request.
    pub fn dress(&mut self, dress_type: &str) -> Result<Rc<dyn Dress>, CatalogError> {
        if let Some(dress) = self.dresses.get(dress_type) {
            debug!(dress_type, "dress cache hit");
            return Ok(Rc::clone(dress));
        }

        let dress: Rc<dyn Dress> = match dress_type {
            TERRORIST_DRESS_TYPE => Rc::new(TerroristDress::new()),
            COUNTER_TERRORIST_DRESS_TYPE => Rc::new(CounterTerroristDress::new()),
            other => return Err(CatalogError::UnknownDressType(other.to_string())),
        };

        debug!(dress_type, color = dress.color(), "dress cache miss");
        self.dresses.insert(dress_type.to_string(), Rc::clone(&dress));
        Ok(dress)
    }

    /// Cached dresses in unspecified order.
    pub fn cached(&self) -> impl Iterator<Item = (&str, &Rc<dyn Dress>)> {
        self.dresses.iter().map(|(key, dress)| (key.as_str(), dress))
    }

    pub fn len(&self) -> usize {
        self.dresses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dresses.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerKind {
    Terrorist,
    CounterTerrorist,
}

impl fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerKind::Terrorist => write!(f, "T"),
            PlayerKind::CounterTerrorist => write!(f, "CT"),
        }
    }
}

/// Extrinsic state: who the player is and where they stand.
#[derive(Debug)]
pub struct Player {
    kind: PlayerKind,
    dress: Option<Rc<dyn Dress>>,
    lat: i32,
    long: i32,
}

impl Player {
    /// An unknown dress type leaves the player without a dress.
    pub fn new(kind: PlayerKind, dress_type: &str, factory: &mut DressFactory) -> Self {
        let dress = match factory.dress(dress_type) {
            Ok(dress) => Some(dress),
            Err(err) => {
                warn!(%err, %kind, "player created without a dress");
                None
            }
        };

        Player {
            kind,
            dress,
            lat: 0,
            long: 0,
        }
    }

    pub fn kind(&self) -> PlayerKind {
        self.kind
    }

    pub fn dress(&self) -> Option<&Rc<dyn Dress>> {
        self.dress.as_ref()
    }

    pub fn new_location(&mut self, lat: i32, long: i32) {
        self.lat = lat;
        self.long = long;
    }

    pub fn location(&self) -> (i32, i32) {
        (self.lat, self.long)
    }
}

#[derive(Debug, Default)]
pub struct Game {
    factory: DressFactory,
    terrorists: Vec<Player>,
    counter_terrorists: Vec<Player>,
}

impl Game {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_terrorist(&mut self, dress_type: &str) -> &mut Player {
        let player = Player::new(PlayerKind::Terrorist, dress_type, &mut self.factory);
        self.terrorists.push(player);
        let last = self.terrorists.len() - 1;
        &mut self.terrorists[last]
    }

    pub fn add_counter_terrorist(&mut self, dress_type: &str) -> &mut Player {
        let player = Player::new(PlayerKind::CounterTerrorist, dress_type, &mut self.factory);
        self.counter_terrorists.push(player);
        let last = self.counter_terrorists.len() - 1;
        &mut self.counter_terrorists[last]
    }

    pub fn factory(&self) -> &DressFactory {
        &self.factory
    }

    pub fn terrorists(&self) -> &[Player] {
        &self.terrorists
    }

    pub fn counter_terrorists(&self) -> &[Player] {
        &self.counter_terrorists
    }
}

pub fn demo(out: &Transcript) -> Result<(), CatalogError> {
    let mut game = Game::new();

    for i in 0..4 {
        game.add_terrorist(TERRORIST_DRESS_TYPE).new_location(i, i * 2);
    }
    for i in 0..3 {
        game.add_counter_terrorist(COUNTER_TERRORIST_DRESS_TYPE).new_location(-i, i);
    }

    // Sorted so the transcript is stable; the cache itself has no order.
    for (dress_type, dress) in game.factory().cached().sorted_by_key(|(key, _)| *key) {
        out.line(format!("DressColorType: {dress_type}"));
        out.line(format!("DressColor: {}", dress.color()));
        // One reference belongs to the cache.
        out.line(format!("SharedBy: {} players", Rc::strong_count(dress) - 1));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_key_returns_same_instance() {
        let mut factory = DressFactory::new();
        let first = factory.dress(TERRORIST_DRESS_TYPE).unwrap();
        let second = factory.dress(TERRORIST_DRESS_TYPE).unwrap();

        assert!(Rc::ptr_eq(&first, &second));
        assert_eq!(factory.len(), 1);
    }

    #[test]
    fn test_different_keys_return_different_instances() {
        let mut factory = DressFactory::new();
        let red = factory.dress(TERRORIST_DRESS_TYPE).unwrap();
        let green = factory.dress(COUNTER_TERRORIST_DRESS_TYPE).unwrap();

        assert!(!Rc::ptr_eq(&red, &green));
        assert_eq!(red.color(), "red");
        assert_eq!(green.color(), "green");
    }

    #[test]
    fn test_default_dresses_carry_team_colors() {
        assert_eq!(TerroristDress::default().color(), "red");
        assert_eq!(CounterTerroristDress::default().color(), "green");
    }

    #[test]
    fn test_unknown_key_fails_without_caching() {
        let mut factory = DressFactory::new();
        let err = factory.dress("bDress").unwrap_err();

        assert_eq!(err, CatalogError::UnknownDressType("bDress".to_string()));
        assert!(factory.is_empty());
    }

    #[test]
    fn test_players_share_team_dress() {
        let mut game = Game::new();
        game.add_terrorist(TERRORIST_DRESS_TYPE);
        game.add_terrorist(TERRORIST_DRESS_TYPE);
        game.add_counter_terrorist(COUNTER_TERRORIST_DRESS_TYPE);

        let [a, b] = game.terrorists() else {
            panic!("expected two terrorists");
        };
        assert!(Rc::ptr_eq(a.dress().unwrap(), b.dress().unwrap()));
        assert_eq!(game.factory().len(), 2);
        assert_eq!(game.counter_terrorists()[0].kind(), PlayerKind::CounterTerrorist);
    }

    #[test]
    fn test_unknown_dress_leaves_player_undressed() {
        let mut game = Game::new();
        let player = game.add_terrorist("bDress");
        player.new_location(3, 4);

        assert!(player.dress().is_none());
        assert_eq!(player.location(), (3, 4));
        assert!(game.factory().is_empty());
    }

    #[test]
    fn test_demo_reports_each_cached_dress() {
        let out = Transcript::new();
        demo(&out).unwrap();

        let lines = out.lines();
        let red = lines.iter().position(|l| l == "DressColorType: tDress").unwrap();
        assert_eq!(lines[red + 1], "DressColor: red");
        assert_eq!(lines[red + 2], "SharedBy: 4 players");

        let green = lines.iter().position(|l| l == "DressColorType: ctDress").unwrap();
        assert_eq!(lines[green + 1], "DressColor: green");
        assert_eq!(lines[green + 2], "SharedBy: 3 players");
    }
}
