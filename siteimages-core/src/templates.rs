//! Image Templates - the fixed batch of site artwork
//!
//! A template names an output file, its exact pixel size, the seed of its
//! random stream and the scene that paints it. `TemplateRegistry::bristol()`
//! holds the seven published images in generation order.

use serde::{Deserialize, Serialize};

use crate::canvas::Canvas;
use crate::card::{CardScene, ColorScheme, Direction};
use crate::color::Color;
use crate::home::HomeScene;
use crate::locations::LocationsScene;
use crate::motifs::Building;
use crate::random::{seeded, RandomSource};

pub type TemplateId = String;

pub const HERO_HOME: [u32; 2] = [1920, 800];
pub const HERO_LOCATIONS: [u32; 2] = [1920, 600];
pub const CARD: [u32; 2] = [600, 400];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Scene {
    Home(HomeScene),
    Locations(LocationsScene),
    Card(CardScene),
}

impl Scene {
    pub fn paint(&self, canvas: &mut Canvas, rng: &mut impl RandomSource) {
        match self {
            Scene::Home(scene) => scene.paint(canvas, rng),
            Scene::Locations(scene) => scene.paint(canvas, rng),
            Scene::Card(scene) => scene.paint(canvas),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageTemplate {
    pub id: TemplateId,
    pub filename: String,
    pub size: [u32; 2],
    #[serde(default)]
    pub seed: u64,
    pub scene: Scene,
}

impl ImageTemplate {
    /// Paints the scene with the template's own seeded stream.
    pub fn render(&self) -> Canvas {
        self.render_with(&mut seeded(self.seed))
    }

    pub fn render_with(&self, rng: &mut impl RandomSource) -> Canvas {
        let mut canvas = Canvas::new(self.size[0], self.size[1]);
        self.scene.paint(&mut canvas, rng);
        canvas
    }
}

/// One Bristol service area and its card artwork.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    pub slug: &'static str,
    pub card: CardScene,
}

impl Region {
    pub fn filename(&self) -> String {
        format!("location-{}-bristol.webp", self.slug)
    }
}

fn scheme(start: [u8; 3], end: [u8; 3], accent: [u8; 3], highlight: [u8; 3]) -> ColorScheme {
    let c = |[r, g, b]: [u8; 3]| Color::rgb(r, g, b);
    ColorScheme { start: c(start), end: c(end), accent: c(accent), highlight: c(highlight) }
}

fn skyline(rows: &[(i32, i32, i32, bool)]) -> Vec<Building> {
    rows.iter().map(|&(x, w, h, roof)| Building::new(x, w, h, roof)).collect()
}

/// The five regional cards, in generation order.
pub fn bristol_regions() -> Vec<Region> {
    vec![
        // cool teal
        Region {
            slug: "north",
            card: CardScene::new(
                Direction::North,
                scheme([15, 60, 90], [30, 100, 140], [50, 140, 170], [120, 200, 225]),
                skyline(&[
                    (20, 55, 100, true), (90, 50, 80, true), (155, 60, 120, false),
                    (230, 45, 70, true), (290, 55, 95, true), (360, 65, 110, false),
                    (440, 50, 85, true), (505, 55, 100, true),
                ]),
            ),
        },
        // terraced streets, warm blue-purple
        Region {
            slug: "south",
            card: CardScene::new(
                Direction::South,
                scheme([25, 50, 85], [45, 75, 115], [65, 95, 140], [140, 170, 210]),
                skyline(&[
                    (15, 35, 110, true), (60, 35, 115, true), (105, 35, 108, true),
                    (150, 35, 112, true), (195, 35, 118, true), (240, 35, 105, true),
                    (285, 35, 110, true), (330, 35, 115, true), (375, 35, 108, true),
                    (420, 35, 112, true), (465, 35, 118, true), (510, 35, 105, true),
                    (555, 35, 110, true),
                ]),
            ),
        },
        // green-teal
        Region {
            slug: "east",
            card: CardScene::new(
                Direction::East,
                scheme([10, 55, 70], [25, 90, 110], [45, 130, 145], [110, 195, 200]),
                skyline(&[
                    (10, 60, 90, true), (85, 40, 130, false), (140, 55, 80, true),
                    (210, 70, 110, false), (295, 45, 95, true), (355, 55, 140, false),
                    (425, 50, 75, true), (490, 65, 105, true), (555, 40, 85, false),
                ]),
            ),
        },
        // blue-grey, wide Georgian frontages
        Region {
            slug: "west",
            card: CardScene::new(
                Direction::West,
                scheme([18, 48, 75], [35, 80, 110], [55, 115, 145], [130, 180, 210]),
                skyline(&[
                    (20, 80, 130, true), (115, 75, 125, true), (205, 85, 135, true),
                    (305, 70, 120, true), (390, 80, 130, true), (485, 75, 125, true),
                ]),
            ),
        },
        // vibrant blue, city-centre towers
        Region {
            slug: "central",
            card: CardScene::new(
                Direction::Center,
                scheme([12, 45, 80], [30, 80, 120], [50, 120, 155], [120, 190, 220]),
                skyline(&[
                    (10, 50, 160, false), (75, 65, 100, true), (155, 45, 180, false),
                    (215, 70, 90, true), (300, 55, 150, false), (370, 60, 120, true),
                    (445, 80, 170, false), (540, 50, 95, true),
                ]),
            ),
        },
    ]
}

/// Ordered template registry.
#[derive(Debug, Clone, Default)]
pub struct TemplateRegistry {
    templates: Vec<ImageTemplate>,
}

impl TemplateRegistry {
    pub fn new() -> Self {
        Self { templates: vec![] }
    }

    /// Both heroes followed by the five location cards.
    pub fn bristol() -> Self {
        let mut registry = Self::new();
        registry.register(ImageTemplate {
            id: "hero-home".to_string(),
            filename: "hero-emergency-plumber-bristol.webp".to_string(),
            size: HERO_HOME,
            seed: 42,
            scene: Scene::Home(HomeScene::default()),
        });
        registry.register(ImageTemplate {
            id: "hero-locations".to_string(),
            filename: "hero-locations-bristol.webp".to_string(),
            size: HERO_LOCATIONS,
            seed: 99,
            scene: Scene::Locations(LocationsScene::default()),
        });
        for region in bristol_regions() {
            registry.register(ImageTemplate {
                id: format!("location-{}", region.slug),
                filename: region.filename(),
                size: CARD,
                seed: 0,
                scene: Scene::Card(region.card),
            });
        }
        registry
    }

    pub fn get(&self, id: &str) -> Option<&ImageTemplate> {
        self.templates.iter().find(|t| t.id == id)
    }

    pub fn list(&self) -> &[ImageTemplate] {
        &self.templates
    }

    /// Adds a template, replacing any existing one with the same id in place.
    pub fn register(&mut self, template: ImageTemplate) {
        match self.templates.iter_mut().find(|t| t.id == template.id) {
            Some(slot) => *slot = template,
            None => self.templates.push(template),
        }
    }
}
