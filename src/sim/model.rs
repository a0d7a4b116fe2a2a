//! In-memory traffic model.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Problem constructing a [`TrafficModel`].
#[derive(Debug, Error)]
pub enum ModelError {
    /// The grid needs at least one cell in each dimension.
    #[error("grid dimensions {width}x{height} must be positive")]
    InvalidDimensions { width: i32, height: i32 },

    /// More cars requested than free cells to place them on.
    #[error("not enough free cells to place {requested} cars ({available} available)")]
    TooManyCars { requested: usize, available: usize },
}

/// Steps between red↔green flips of a traffic light.
const LIGHT_PERIOD: u8 = 10;

/// Light cells: (x, y, group). Group 0 starts green, group 1 red, so the
/// two phases of the junction oppose each other.
const LIGHT_CELLS: [(i32, i32, u8); 4] = [(6, 2, 0), (7, 2, 0), (5, 4, 1), (8, 4, 1)];

const DIRECTIONS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Traffic light phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LightState {
    Red,
    Green,
}

impl LightState {
    fn flipped(self) -> Self {
        match self {
            LightState::Red => LightState::Green,
            LightState::Green => LightState::Red,
        }
    }
}

/// One car's grid position, as served by `/cars`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarSnapshot {
    pub id: u32,
    pub x: i32,
    pub y: i32,
}

/// One light's state, as served by `/trafficLights`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrafficLightSnapshot {
    pub id: u32,
    pub state: LightState,
    pub group: u8,
}

/// Status document served by `/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimStatus {
    pub message: String,
    pub step: u64,
}

#[derive(Debug)]
struct Car {
    id: u32,
    x: i32,
    y: i32,
}

#[derive(Debug)]
struct TrafficLight {
    id: u32,
    x: i32,
    y: i32,
    group: u8,
    state: LightState,
    timer: u8,
}

/// Cars wandering a bounded grid with period-toggled traffic lights.
#[derive(Debug)]
pub struct TrafficModel {
    width: i32,
    height: i32,
    step_count: u64,
    cars: Vec<Car>,
    lights: Vec<TrafficLight>,
    rng: StdRng,
}

impl TrafficModel {
    /// Model with randomly placed cars.
    pub fn new(width: i32, height: i32, car_count: usize) -> Result<Self, ModelError> {
        Self::build(width, height, car_count, StdRng::from_entropy())
    }

    /// Deterministic model for tests.
    pub fn seeded(width: i32, height: i32, car_count: usize, seed: u64) -> Result<Self, ModelError> {
        Self::build(width, height, car_count, StdRng::seed_from_u64(seed))
    }

    fn build(
        width: i32,
        height: i32,
        car_count: usize,
        mut rng: StdRng,
    ) -> Result<Self, ModelError> {
        if width < 1 || height < 1 {
            return Err(ModelError::InvalidDimensions { width, height });
        }

        let lights: Vec<TrafficLight> = LIGHT_CELLS
            .iter()
            .enumerate()
            .map(|(idx, &(x, y, group))| TrafficLight {
                id: idx as u32,
                x,
                y,
                group,
                state: if group == 0 { LightState::Green } else { LightState::Red },
                timer: 0,
            })
            .collect();

        let mut taken: HashSet<(i32, i32)> = lights.iter().map(|l| (l.x, l.y)).collect();
        let blocked = lights
            .iter()
            .filter(|l| l.x < width && l.y < height)
            .count();
        let available = (width as usize) * (height as usize) - blocked;
        if car_count > available {
            return Err(ModelError::TooManyCars {
                requested: car_count,
                available,
            });
        }

        let mut cars = Vec::with_capacity(car_count);
        while cars.len() < car_count {
            let cell = (rng.gen_range(0..width), rng.gen_range(0..height));
            if taken.insert(cell) {
                cars.push(Car {
                    id: cars.len() as u32,
                    x: cell.0,
                    y: cell.1,
                });
            }
        }

        Ok(Self {
            width,
            height,
            step_count: 0,
            cars,
            lights,
            rng,
        })
    }

    /// Advance the model by one step.
    ///
    /// Lights flip every [`LIGHT_PERIOD`] steps. Every car then attempts
    /// one random cardinal move; moves off the grid, into a red light's
    /// cell, or into another car are skipped for that step.
    pub fn step(&mut self) {
        self.step_count += 1;

        for light in &mut self.lights {
            light.timer += 1;
            if light.timer >= LIGHT_PERIOD {
                light.state = light.state.flipped();
                light.timer = 0;
            }
        }

        let red_cells: HashSet<(i32, i32)> = self
            .lights
            .iter()
            .filter(|l| l.state == LightState::Red)
            .map(|l| (l.x, l.y))
            .collect();
        let mut occupied: HashSet<(i32, i32)> =
            self.cars.iter().map(|c| (c.x, c.y)).collect();

        for i in 0..self.cars.len() {
            let (dx, dy) = DIRECTIONS[self.rng.gen_range(0..DIRECTIONS.len())];
            let from = (self.cars[i].x, self.cars[i].y);
            let to = (from.0 + dx, from.1 + dy);

            if !self.in_bounds(to) || red_cells.contains(&to) || occupied.contains(&to) {
                continue;
            }

            occupied.remove(&from);
            occupied.insert(to);
            self.cars[i].x = to.0;
            self.cars[i].y = to.1;
        }
    }

    /// Steps taken so far.
    pub fn step_count(&self) -> u64 {
        self.step_count
    }

    pub fn status(&self) -> SimStatus {
        SimStatus {
            message: "Traffic model running".to_string(),
            step: self.step_count,
        }
    }

    /// Car positions, ordered by id.
    pub fn cars(&self) -> Vec<CarSnapshot> {
        self.cars
            .iter()
            .map(|c| CarSnapshot {
                id: c.id,
                x: c.x,
                y: c.y,
            })
            .collect()
    }

    /// Light states, ordered by id.
    pub fn traffic_lights(&self) -> Vec<TrafficLightSnapshot> {
        self.lights
            .iter()
            .map(|l| TrafficLightSnapshot {
                id: l.id,
                state: l.state,
                group: l.group,
            })
            .collect()
    }

    fn in_bounds(&self, (x, y): (i32, i32)) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height
    }
}
