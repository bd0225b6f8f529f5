use super::*;

/// The walled room of the top-down demo.
pub const DEMO_LEVEL: &str = "
###############################
#.............................#
#.............................#
#.............................#
#.............................#
#.............................#
#.............................#
#.............................#
#.............................#
#.............................#
#.............................#
#.............................#
#.............................#
###############################
";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Wall,
    Floor,
}

/// A grid of tiles read from text: `#` is a wall, `.` is floor, anything
/// else is left empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Level {
    /// Grid cell `(column, row)` of every tile.
    pub tiles: Vec<(vec2<Coord>, Tile)>,
    pub columns: Coord,
    pub rows: Coord,
}

impl Level {
    pub fn parse(layout: &str) -> Self {
        let mut level = Self::default();
        let lines = layout.lines().map(str::trim).filter(|line| !line.is_empty());
        for (row, line) in lines.enumerate() {
            let row = row as Coord;
            for (column, symbol) in line.chars().enumerate() {
                let column = column as Coord;
                let tile = match symbol {
                    '#' => Tile::Wall,
                    '.' => Tile::Floor,
                    _ => continue,
                };
                level.tiles.push((vec2(column, row), tile));
            }
            level.columns = level.columns.max(line.chars().count() as Coord);
            level.rows = row + 1;
        }
        level
    }

    /// Size in pixels.
    pub fn size(&self, tile_size: Coord) -> vec2<Coord> {
        vec2(self.columns, self.rows) * tile_size
    }
}

impl World {
    /// Spawn the tiles of a level and make it the playing area.
    pub fn load_level(&mut self, level: &Level, wall: &Sprite, floor: &Sprite) {
        let tile_size = self.config.tile_size;
        for &(cell, tile) in &level.tiles {
            let position = cell * tile_size;
            match tile {
                Tile::Wall => self.spawn_wall(position, wall.clone()),
                Tile::Floor => self.spawn_floor(position, floor.clone()),
            };
        }
        self.bounds = rect_at(vec2(0, 0), level.size(tile_size));
        log::info!(
            "Loaded a {}x{} level with {} tiles",
            level.columns,
            level.rows,
            level.tiles.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let level = Level::parse("###\n#.#\n# #\n###\n");
        assert_eq!((level.columns, level.rows), (3, 4));
        assert_eq!(level.tiles.len(), 11);
        assert!(level.tiles.contains(&(vec2(1, 1), Tile::Floor)));
        assert!(!level.tiles.iter().any(|&(cell, _)| cell == vec2(1, 2)));
        assert_eq!(level.size(32), vec2(96, 128));
    }

    #[test]
    fn test_demo_level() {
        let level = Level::parse(DEMO_LEVEL);
        assert_eq!((level.columns, level.rows), (31, 14));
        let walls = level
            .tiles
            .iter()
            .filter(|&&(_, tile)| tile == Tile::Wall)
            .count();
        assert_eq!(walls, 31 * 2 + 12 * 2);
    }

    #[test]
    fn test_load_level() {
        let mut world = World::with_seed(Config::default(), 0);
        let wall = Sprite::new("wall", vec2(32, 32));
        let floor = Sprite::new("floor", vec2(32, 32));
        world.load_level(&Level::parse("##\n.."), &wall, &floor);

        assert_eq!(world.entities.len(), 4);
        assert_eq!(world.bounds, rect_at(vec2(0, 0), vec2(64, 64)));
        // Only walls block
        let obstacles = world.obstacles();
        assert_eq!(obstacles.len(), 2);
        assert!(obstacles.iter().all(|o| o.rect.min.y == 0));
    }
}
