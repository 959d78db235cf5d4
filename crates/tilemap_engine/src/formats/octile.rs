use crate::{EngineError, Result, Size, Tile, TileMap};

use super::{MapFormat, SaveOptions};

/// Octile terrain codec.
///
/// ```text
/// type octile
/// height <H>
/// width <W>
/// map
/// <H rows of '.' and '@'>
/// ```
///
/// The three keyword lines may appear in any order, but the body starts at
/// the line right after the `map` line. Rows longer than `width` keep their
/// extra characters ignored.
#[derive(Default)]
pub(crate) struct Octile {}

impl MapFormat for Octile {
    fn get_file_extension(&self) -> &str {
        "map"
    }

    fn get_name(&self) -> &str {
        "Octile"
    }

    fn to_bytes(&self, map: &TileMap, options: &SaveOptions) -> Result<Vec<u8>> {
        let nl = options.line_ending.as_str();
        let mut result = String::with_capacity((map.get_width() as usize + 2) * (map.get_height() as usize + 4));

        result.push_str("type octile");
        result.push_str(nl);
        result.push_str(&format!("height {}", map.get_height()));
        result.push_str(nl);
        result.push_str(&format!("width {}", map.get_width()));
        result.push_str(nl);
        result.push_str("map");
        result.push_str(nl);

        for row in 0..map.get_height() {
            for col in 0..map.get_width() {
                result.push(map.get(row, col)?.to_char());
            }
            result.push_str(nl);
        }

        Ok(result.into_bytes())
    }

    fn load_map(&self, data: &[u8]) -> Result<TileMap> {
        let text = String::from_utf8_lossy(data);
        let lines: Vec<&str> = text.lines().collect();

        let width = parse_dimension(find_keyword_line(&lines, "width")?.1)?;
        let height = parse_dimension(find_keyword_line(&lines, "height")?.1)?;
        let map_line = find_keyword_line(&lines, "map")?.0;

        let mut tiles = Vec::with_capacity((width * height) as usize);
        for row in 0..height {
            let Some(line) = lines.get(map_line + 1 + row as usize) else {
                return Err(EngineError::TruncatedRow { row });
            };
            let mut chars = line.chars();
            for _ in 0..width {
                let Some(ch) = chars.next() else {
                    return Err(EngineError::TruncatedRow { row });
                };
                tiles.push(Tile::from_char(ch));
            }
        }

        let body_end = map_line + 1 + height as usize;
        let trailing = lines[body_end..].iter().filter(|line| !line.trim().is_empty()).count();
        if trailing > 0 {
            log::warn!("ignoring {trailing} extra non-empty lines after the map body");
        }

        Ok(TileMap::from_tiles(Size::new(width, height), tiles))
    }
}

/// First line starting with `keyword`, with its index.
fn find_keyword_line<'a>(lines: &[&'a str], keyword: &'static str) -> Result<(usize, &'a str)> {
    lines
        .iter()
        .enumerate()
        .find(|(_, line)| line.starts_with(keyword))
        .map(|(idx, line)| (idx, *line))
        .ok_or(EngineError::MissingKeyword { keyword })
}

/// Second whitespace-separated token of a keyword line, as a positive number.
fn parse_dimension(line: &str) -> Result<i32> {
    let value = line.split_whitespace().nth(1).unwrap_or("");
    match value.parse::<i32>() {
        Ok(dimension) if dimension > 0 => Ok(dimension),
        _ => Err(EngineError::InvalidDimension { value: value.to_string() }),
    }
}
