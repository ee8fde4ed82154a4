use {
	crate::{writeOutput, Result},
	serde::Serialize,
	std::{collections::BTreeMap, path::Path},
};

pub const FILENAME: &str = "map.json";

pub type Column = BTreeMap<String, i32>;

/// `x -> y -> tileId`, keyed by decimal strings since that's what ends up as JSON object keys.
#[derive(Serialize, Default, Debug, PartialEq, Eq)]
#[serde(transparent)]
pub struct SparseTileMap {
	columns: BTreeMap<String, Column>,
}

impl SparseTileMap {
	/// Returns the tile id previously placed at `(x, y)`, if any.
	pub fn insert(&mut self, x: u16, y: u16, tileId: i32) -> Option<i32> {
		self.columns.entry(x.to_string()).or_default().insert(y.to_string(), tileId)
	}

	pub fn get(&self, x: u16, y: u16) -> Option<i32> {
		self.columns.get(&x.to_string())?.get(&y.to_string()).copied()
	}

	/// Number of placed tiles.
	pub fn len(&self) -> usize {
		self.columns.values().map(Column::len).sum()
	}

	pub fn is_empty(&self) -> bool {
		self.columns.is_empty()
	}

	pub fn writeTo(&self, dir: &Path, pretty: bool) -> Result<()> {
		let (path, json) = (dir.join(FILENAME), serialize(self, pretty)?);
		writeOutput(&path, &json)?;
		log::info!("wrote {} tiles to {path:?}", self.len());
		Ok(())
	}
}

pub fn serialize(map: &SparseTileMap, pretty: bool) -> Result<Vec<u8>> {
	Ok(if pretty { serde_json::to_vec_pretty(map)? } else { serde_json::to_vec(map)? })
}

#[cfg(test)]
mod tests {
	use {super::*, serde_json::json};

	#[test]
	fn nests_string_keys() {
		let mut map = SparseTileMap::default();
		assert_eq!(map.insert(1, 10, 4), None);
		map.insert(1, 2, 0);
		map.insert(300, 7, -1);
		let value: serde_json::Value = serde_json::from_slice(&serialize(&map, false).unwrap()).unwrap();
		assert_eq!(value, json!({ "1": { "10": 4, "2": 0 }, "300": { "7": -1 } }));
	}

	#[test]
	fn later_insert_overwrites() {
		let mut map = SparseTileMap::default();
		map.insert(5, 5, 1);
		assert_eq!(map.insert(5, 5, 2), Some(1));
		assert_eq!(map.get(5, 5), Some(2));
		assert_eq!(map.len(), 1);
	}

	#[test]
	fn empty_map_is_empty_object() {
		assert_eq!(serialize(&SparseTileMap::default(), false).unwrap(), b"{}");
	}

	#[test]
	fn pretty_output_is_same_value() {
		let mut map = SparseTileMap::default();
		map.insert(0, 0, 12);
		let pretty = serialize(&map, true).unwrap();
		assert!(pretty.contains(&b'\n'));
		assert_eq!(
			serde_json::from_slice::<serde_json::Value>(&pretty).unwrap(),
			serde_json::from_slice::<serde_json::Value>(&serialize(&map, false).unwrap()).unwrap()
		);
	}
}
