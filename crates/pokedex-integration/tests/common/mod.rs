//! Fixtures for running the catalog against a mock upstream

#![allow(dead_code)]

use std::time::Duration;

use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use pokedex_integration::{Catalog, CatalogConfig};

/// A creature as the mock upstream should serve it
#[derive(Debug, Clone)]
pub struct Creature {
    pub id: u32,
    pub name: String,
    pub species: String,
    pub types: Vec<String>,
    pub generation: String,
    pub color: String,
    pub chain_id: u32,
    pub artwork: Option<String>,
    pub sprite: Option<String>,
    pub delay: Option<Duration>,
}

pub fn creature(id: u32, name: &str) -> Creature {
    Creature {
        id,
        name: name.to_string(),
        species: name.to_string(),
        types: vec!["normal".to_string()],
        generation: "generation-i".to_string(),
        color: "red".to_string(),
        chain_id: id,
        artwork: Some(format!("https://img.test/artwork/{}.png", id)),
        sprite: Some(format!("https://img.test/sprite/{}.png", id)),
        delay: None,
    }
}

impl Creature {
    pub fn types(mut self, types: &[&str]) -> Self {
        self.types = types.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn generation(mut self, generation: &str) -> Self {
        self.generation = generation.to_string();
        self
    }

    pub fn color(mut self, color: &str) -> Self {
        self.color = color.to_string();
        self
    }

    pub fn chain(mut self, chain_id: u32) -> Self {
        self.chain_id = chain_id;
        self
    }

    pub fn species(mut self, species: &str) -> Self {
        self.species = species.to_string();
        self
    }

    pub fn no_artwork(mut self) -> Self {
        self.artwork = None;
        self
    }

    pub fn no_sprite(mut self) -> Self {
        self.sprite = None;
        self
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

/// Evolution-chain node JSON
pub fn node(name: &str, children: Vec<Value>) -> Value {
    json!({
        "species": { "name": name, "url": "" },
        "evolves_to": children
    })
}

pub struct Upstream {
    pub server: MockServer,
}

impl Upstream {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    pub fn base(&self) -> String {
        self.server.uri()
    }

    pub fn catalog(&self) -> Catalog {
        Catalog::new(CatalogConfig::default().with_base_url(self.base())).unwrap()
    }

    pub fn pokemon_json(&self, c: &Creature) -> Value {
        let types: Vec<Value> = c
            .types
            .iter()
            .enumerate()
            .map(|(i, t)| json!({ "slot": i + 1, "type": { "name": t, "url": "" } }))
            .collect();
        let stats: Vec<Value> = ["hp", "attack", "defense", "special-attack", "special-defense", "speed"]
            .iter()
            .enumerate()
            .map(|(i, s)| json!({ "base_stat": 40 + i as u32 * 5, "effort": 0, "stat": { "name": s, "url": "" } }))
            .collect();

        json!({
            "id": c.id,
            "name": c.name,
            "sprites": {
                "front_default": c.sprite,
                "other": { "official-artwork": { "front_default": c.artwork } }
            },
            "types": types,
            "stats": stats,
            "species": { "name": c.species, "url": format!("{}/pokemon-species/{}", self.base(), c.species) },
            "weight": c.id * 10,
            "height": c.id
        })
    }

    pub fn species_json(&self, c: &Creature) -> Value {
        json!({
            "name": c.species,
            "color": { "name": c.color, "url": "" },
            "generation": { "name": c.generation, "url": "" },
            "evolution_chain": { "url": format!("{}/evolution-chain/{}", self.base(), c.chain_id) },
            "varieties": [
                { "is_default": true, "pokemon": { "name": c.name, "url": format!("{}/pokemon/{}", self.base(), c.name) } }
            ]
        })
    }

    /// Serve `/pokemon/{name}`, `/pokemon/{id}` and `/pokemon-species/{species}`
    pub async fn mount_creature(&self, c: &Creature) {
        let mut record = ResponseTemplate::new(200).set_body_json(self.pokemon_json(c));
        if let Some(delay) = c.delay {
            record = record.set_delay(delay);
        }
        for route in [format!("/pokemon/{}", c.name), format!("/pokemon/{}", c.id)] {
            Mock::given(method("GET"))
                .and(path(route))
                .respond_with(record.clone())
                .mount(&self.server)
                .await;
        }
        self.mount_species(c).await;
    }

    pub async fn mount_species(&self, c: &Creature) {
        Mock::given(method("GET"))
            .and(path(format!("/pokemon-species/{}", c.species)))
            .respond_with(ResponseTemplate::new(200).set_body_json(self.species_json(c)))
            .mount(&self.server)
            .await;
    }

    pub async fn mount_creatures(&self, creatures: &[Creature]) {
        for c in creatures {
            self.mount_creature(c).await;
        }
    }

    /// Serve an evolution chain, expecting it to be fetched `expected` times
    /// when given
    pub async fn mount_chain(&self, chain_id: u32, root: Value, expected: Option<u64>) {
        let mock = Mock::given(method("GET"))
            .and(path(format!("/evolution-chain/{}", chain_id)))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": chain_id, "chain": root })));
        let mock = match expected {
            Some(n) => mock.expect(n),
            None => mock,
        };
        mock.mount(&self.server).await;
    }

    /// Serve one page of `/pokemon?limit=&offset=`
    pub async fn mount_listing(&self, limit: u32, offset: u32, count: u32, has_next: bool, names: &[&str]) {
        let results: Vec<Value> = names
            .iter()
            .map(|n| json!({ "name": n, "url": format!("{}/pokemon/{}", self.base(), n) }))
            .collect();
        let next = has_next.then(|| format!("{}/pokemon?offset={}&limit={}", self.base(), offset + limit, limit));

        Mock::given(method("GET"))
            .and(path("/pokemon"))
            .and(query_param("limit", limit.to_string()))
            .and(query_param("offset", offset.to_string()))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "count": count,
                "next": next,
                "previous": null,
                "results": results
            })))
            .mount(&self.server)
            .await;
    }

    pub async fn mount_json(&self, route: &str, body: Value) {
        Mock::given(method("GET"))
            .and(path(route.to_string()))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    pub async fn mount_status(&self, route: &str, status: u16) {
        Mock::given(method("GET"))
            .and(path(route.to_string()))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.server)
            .await;
    }
}

/// The classic three-stage fire line used across tests
pub fn fire_starters() -> Vec<Creature> {
    vec![
        creature(4, "charmander").types(&["fire"]).chain(2),
        creature(5, "charmeleon").types(&["fire"]).chain(2),
        creature(6, "charizard").types(&["fire", "flying"]).chain(2),
    ]
}

pub fn fire_chain() -> Value {
    node("charmander", vec![node("charmeleon", vec![node("charizard", vec![])])])
}

pub fn ids(items: &[pokedex_core::Item]) -> Vec<u32> {
    items.iter().map(|i| i.id).collect()
}
