use std::collections::HashMap;
use std::io::BufRead;

use anyhow::Context;

use crate::problem::{Cost, FlightCostMatrixBuilder, Instance};

/**
Input format of the Kiwi.com Travelling Salesman Challenge:

```text
NCE ...ignored...
NCE DBV 0 173
DBV WAW 1 504
...
```

The first line names the start city by its three-letter code; anything after
the code is ignored. Every following line is one flight offer with four
whitespace-separated fields `from to day cost`, read until EOF. City indices
are assigned in order of first appearance, so the start city always becomes
index 0 and `N` is the number of distinct codes seen.
 */
pub fn read_instance(reader: impl BufRead) -> anyhow::Result<Instance> {
    let mut lines = reader.lines();

    let first = lines.next().context("input is empty")??;
    let start_code = first.get(0..3).context("start city code is shorter than three characters")?;

    let mut cities = CityRegistry::new();
    let start_city = cities.index_of(start_code);

    let mut flights = Vec::new();
    for line in lines {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let mut fields = line.split_whitespace();
        let from = fields.next().context("flight line is missing the origin")?;
        let to = fields.next().context("flight line is missing the destination")?;
        let day: usize = fields
            .next()
            .context("flight line is missing the day")?
            .parse()?;
        let cost: Cost = fields
            .next()
            .context("flight line is missing the price")?
            .parse()?;
        flights.push(Flight {
            from: cities.index_of(from),
            to: cities.index_of(to),
            day,
            cost,
        });
    }

    let num_cities = cities.names.len();
    let mut builder = FlightCostMatrixBuilder::with_num_cities(num_cities);
    for flight in flights {
        // a flight beyond the last day (or priced at zero) can never be part
        // of a tour
        if flight.day < num_cities && flight.cost > 0 {
            builder.set_flight(flight.day, flight.from, flight.to, flight.cost);
        }
    }

    Ok(Instance::new(cities.names, start_city, builder.build()))
}

struct Flight {
    from: usize,
    to: usize,
    day: usize,
    cost: Cost,
}

struct CityRegistry {
    names: Vec<String>,
    indices: HashMap<String, usize>,
}

impl CityRegistry {
    fn new() -> Self {
        Self {
            names: Vec::new(),
            indices: HashMap::new(),
        }
    }

    fn index_of(&mut self, code: &str) -> usize {
        if let Some(&index) = self.indices.get(code) {
            return index;
        }
        let index = self.names.len();
        self.names.push(code.to_string());
        self.indices.insert(code.to_string(), index);
        index
    }
}
