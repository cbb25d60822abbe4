use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};

use crate::block::Pose;
use crate::error::LevelError;

use super::{Grid, TileKind};

/// The `.json` half of a level: everything except the tiles.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub(crate) struct LevelMetadata {
    pub(crate) name: String,
    pub(crate) width: usize,
    pub(crate) height: usize,
    pub(crate) start: Pose,
}

impl LevelMetadata {
    pub(crate) fn parse(json_str: &str) -> Result<Self, LevelError> {
        let metadata: Self = serde_json::from_str(json_str)?;
        if metadata.width == 0 || metadata.height == 0 {
            return Err(LevelError::ZeroSized {
                width: metadata.width,
                height: metadata.height,
            });
        }
        Ok(metadata)
    }
}

/// Reads rows of integer tile codes. Rows may have different lengths.
fn parse_rows(csv_str: &str) -> Result<Vec<Vec<TileKind>>, LevelError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(csv_str.as_bytes());

    let mut rows = Vec::new();
    for (row, result) in reader.records().enumerate() {
        let record = result?;
        let tiles = record
            .iter()
            .enumerate()
            .map(|(col, field)| {
                let text = field.trim();
                text.parse::<u8>()
                    .ok()
                    .and_then(TileKind::from_code)
                    .ok_or_else(|| LevelError::UnknownTile {
                        row,
                        col,
                        text: text.to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        rows.push(tiles);
    }
    Ok(rows)
}

impl Grid {
    #[cfg(test)]
    pub(crate) fn from_csv(csv_str: &str) -> Self {
        let rows = parse_rows(csv_str).expect("invalid CSV");
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        Self::fitted(width, rows.len(), rows)
    }

    /// Builds the grid declared by `metadata`. The declared size wins over
    /// the shape of the tile data.
    pub(crate) fn from_csv_and_metadata(
        csv_str: &str,
        metadata: &LevelMetadata,
    ) -> Result<Self, LevelError> {
        let rows = parse_rows(csv_str)?;
        let data_width = rows.iter().map(Vec::len).max().unwrap_or(0);
        if rows.len() != metadata.height || data_width != metadata.width {
            log::warn!(
                "Level {:?} declares {}x{} but its tiles are {}x{}",
                metadata.name,
                metadata.width,
                metadata.height,
                data_width,
                rows.len()
            );
        }
        Ok(Self::fitted(metadata.width, metadata.height, rows))
    }
}
