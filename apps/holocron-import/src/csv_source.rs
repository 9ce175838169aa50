//! CSV reader for planet seed files

use std::{fs::File, io, path::Path};

use csv::{ReaderBuilder, StringRecord};
use holocron_domain::Planet;
use tracing::{debug, warn};

const DELIMITER: u8 = b';';

/// Reads `name;climate;terrain` rows, the first line being a header
///
/// Columns are taken by position so the header text does not matter.
pub struct CsvPlanetSource<R> {
    reader: csv::Reader<R>,
}

impl CsvPlanetSource<File> {
    pub fn open(path: impl AsRef<Path>) -> csv::Result<Self> {
        let reader = builder().from_path(path)?;
        Ok(Self { reader })
    }
}

impl<R: io::Read> CsvPlanetSource<R> {
    pub fn from_reader(reader: R) -> Self {
        Self {
            reader: builder().from_reader(reader),
        }
    }

    /// Read every complete row
    ///
    /// Rows with an empty name, climate or terrain are logged and skipped.
    /// A malformed file aborts the read.
    pub fn read_planets(&mut self) -> csv::Result<Vec<Planet>> {
        let mut planets = Vec::new();
        let mut record = StringRecord::new();
        let mut line = 1;

        while self.reader.read_record(&mut record)? {
            line += 1;
            let planet = Planet::new(field(&record, 0), field(&record, 1), field(&record, 2));

            let missing = planet.missing_fields();
            if !missing.is_empty() {
                warn!(
                    line,
                    name = planet.name(),
                    climate = planet.climate(),
                    terrain = planet.terrain(),
                    missing = ?missing,
                    "Skipping incomplete row"
                );
                continue;
            }

            planets.push(planet);
        }

        debug!(rows = line - 1, planets = planets.len(), "Read planet seed file");
        Ok(planets)
    }
}

fn builder() -> ReaderBuilder {
    let mut builder = ReaderBuilder::new();
    builder.delimiter(DELIMITER).has_headers(true).flexible(true);
    builder
}

fn field(record: &StringRecord, index: usize) -> &str {
    record.get(index).unwrap_or_default()
}
