#[macro_use]
extern crate log;

use llrb_map::RedBlackMap;
use rand::Rng;
use simplelog::{Config, LevelFilter, SimpleLogger};

const NUM_OF_INSERTIONS: usize = 10;
const KEY_RANGE: i32 = 10;
const VALUE_RANGE: i32 = 100;
const KEY_TO_FIND: i32 = 5;
const KEY_TO_REMOVE: i32 = 3;

fn log_tree(map: &RedBlackMap) {
    for (key, value, color) in map.traverse() {
        info!("Key: {}, Value: {}, Color: {}", key, value, color);
    }
}

fn main() {
    if let Err(err) = SimpleLogger::init(LevelFilter::Info, Config::default()) {
        eprintln!("Failed to initialize logger: {}", err);
    }

    let mut rng = rand::thread_rng();
    let mut map = RedBlackMap::new();
    for _ in 0..NUM_OF_INSERTIONS {
        let key = rng.gen_range(0, KEY_RANGE);
        let value = rng.gen_range(0, VALUE_RANGE);
        map.insert(key, value);
    }

    log_tree(&map);
    info!("Height of the tree: {}", map.height());

    match map.get(&KEY_TO_FIND) {
        Some(value) => info!("Value for key {}: {}", KEY_TO_FIND, value),
        None => info!("Key {} not found", KEY_TO_FIND),
    }

    match map.remove(&KEY_TO_REMOVE) {
        Some((key, value)) => info!("Removed value for key {}: {}", key, value),
        None => info!("Key {} not found for removal", KEY_TO_REMOVE),
    }

    log_tree(&map);
    if let Err(err) = map.check_order() {
        error!("Tree is out of order: {}", err);
    }
}
