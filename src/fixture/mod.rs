mod coerce;
mod flat;
mod kind_ref;
mod nested;
pub mod reserved;

pub use coerce::coerce;
pub use flat::load_fixture_flat;
pub use kind_ref::KindRef;
pub use nested::load_fixture;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde_json::{Map as JsonMap, Value as JsonValue};

use crate::data::Entity;
use crate::Result;

/// Caller-supplied hook run once per materialized instance, for derived
/// values the fixture format cannot express. The nested loader runs it
/// before persistence, the flat loader after.
pub type PostProcessor<'a> = &'a mut dyn FnMut(&mut Entity);

/// Read a fixture document: a JSON array of node objects. The file handle
/// lives only for the duration of the parse.
fn read_nodes(path: &Path) -> Result<Vec<JsonMap<String, JsonValue>>> {
    let file = File::open(path)?;
    let nodes = serde_json::from_reader(BufReader::new(file))?;
    Ok(nodes)
}
