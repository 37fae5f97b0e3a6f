// Copyright 2026 the Loam Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A tiny Conway's-life tick loop wiring the Loam crates together.
//!
//! The world lives in a `Grid<u8>`, neighborhood walks use `Direction` and
//! `Vec2I`, births and deaths are announced through an `EventManager`, and
//! the per-generation scratch buffers come out of a `Pool`.
//!
//! Run with: `cargo run -p loam_demos --example grid_life`

use std::cell::Cell;
use std::rc::Rc;

use loam_events::EventManager;
use loam_geom::{Direction, Vec2I};
use loam_grid::Grid;
use loam_pool::{Pool, Poolable};

const WIDTH: usize = 12;
const HEIGHT: usize = 10;
const GENERATIONS: usize = 8;

/// Per-generation change list, pooled and reused across ticks.
#[derive(Default)]
struct ChangeSet {
    born: Vec<Vec2I>,
    died: Vec<Vec2I>,
}

impl Poolable for ChangeSet {
    fn reset(&mut self) {
        self.born.clear();
        self.died.clear();
    }
}

fn live_neighbors(world: &Grid<u8>, pos: Vec2I) -> usize {
    Direction::COMPASS
        .iter()
        .filter_map(|dir| world.neighbor(pos, *dir))
        .filter(|neighbor| world[*neighbor] == 1)
        .count()
}

fn step(world: &Grid<u8>, changes: &mut ChangeSet) -> Grid<u8> {
    Grid::from_fn(world.width(), world.height(), |i, j| {
        let pos = Vec2I::new(i as i32, j as i32);
        let alive = world[pos] == 1;
        let neighbors = live_neighbors(world, pos);
        let next = matches!((alive, neighbors), (true, 2) | (_, 3));
        if next && !alive {
            changes.born.push(pos);
        } else if alive && !next {
            changes.died.push(pos);
        }
        u8::from(next)
    })
}

fn render(world: &Grid<u8>) {
    for j in 0..world.height() {
        let row: String = (0..world.width())
            .map(|i| if world[(i, j)] == 1 { '#' } else { '.' })
            .collect();
        println!("  {row}");
    }
}

fn main() {
    let mut world: Grid<u8> = Grid::new(WIDTH, HEIGHT);
    // A glider, drifting south-east.
    for pos in [(2, 1), (3, 2), (1, 3), (2, 3), (3, 3)] {
        world[pos] = 1;
    }

    let mut events: EventManager<&str, Vec2I> = EventManager::new();
    let births = Rc::new(Cell::new(0_usize));
    let deaths = Rc::new(Cell::new(0_usize));

    let counter = births.clone();
    events.register("born", move |_event, _ctx| {
        counter.set(counter.get() + 1);
    });
    let counter = deaths.clone();
    events.register("died", move |_event, _ctx| {
        counter.set(counter.get() + 1);
    });

    let mut scratch: Pool<ChangeSet> = Pool::new(2);

    for generation in 0..GENERATIONS {
        println!("generation {generation}:");
        render(&world);

        let mut changes = scratch.alloc();
        world = step(&world, &mut changes);

        for pos in &changes.born {
            events.queue_with("born", *pos);
        }
        for pos in &changes.died {
            events.queue_with("died", *pos);
        }
        scratch.free(changes);
        events.process();
    }

    println!(
        "{} births and {} deaths over {GENERATIONS} generations",
        births.get(),
        deaths.get()
    );
}
