//! Domain DTOs for the hero API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently,
//! so the client surface never couples to Axum internals. Integration tests
//! catch any schema drift between the two crates. `HeroId` exists because
//! delete addresses a hero either by its record or by its bare id; both
//! shapes must derive the same request URL.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single hero record as stored by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Hero {
    pub id: u32,
    pub name: String,
}

/// Request payload for creating a new hero. The server assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewHero {
    pub name: String,
}

/// The hero addressed by a delete: either a full record or a bare id.
///
/// Operations take `impl Into<HeroId>`, so `client.delete_hero(5)` and
/// `client.delete_hero(&hero)` are both accepted and resolve to the same id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeroId(u32);

impl HeroId {
    /// The raw numeric id.
    pub fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for HeroId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl From<Hero> for HeroId {
    fn from(hero: Hero) -> Self {
        Self(hero.id)
    }
}

impl From<&Hero> for HeroId {
    fn from(hero: &Hero) -> Self {
        Self(hero.id)
    }
}

impl fmt::Display for HeroId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hero_id_derives_the_same_id_from_either_shape() {
        let hero = Hero {
            id: 5,
            name: "X".to_string(),
        };
        assert_eq!(HeroId::from(5u32), HeroId::from(&hero));
        assert_eq!(HeroId::from(hero.clone()).get(), hero.id);
    }

    #[test]
    fn hero_id_displays_as_the_bare_number() {
        assert_eq!(HeroId::from(42u32).to_string(), "42");
    }
}
