use std::fs::File;
use std::io::BufReader;

use crate::problem::Instance;

pub mod challenge_reader;
pub mod itinerary_writer;

/// Loads a challenge instance from the given file, or from stdin when no
/// path is provided.
pub fn load_instance(path: Option<&str>) -> anyhow::Result<Instance> {
    match path {
        Some(path) => challenge_reader::read_instance(BufReader::new(File::open(path)?)),
        None => challenge_reader::read_instance(std::io::stdin().lock()),
    }
}
