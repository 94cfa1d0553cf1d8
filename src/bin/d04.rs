use lib::prelude::*;

struct Day04;

impl Puzzle for Day04 {
    type Data = Grid;
    type Part1 = u64;
    type Part2 = usize;

    fn preprocess(input: &mut IStr<'_>) -> Result<Self::Data> {
        Ok(Grid::parse(input.as_data())?)
    }

    fn part1(grid: &Grid) -> Result<u64> {
        // One accumulator shared by all eight scans. A word lies along
        // exactly one axis and direction, so the sum never double counts.
        let mut count = WordCount::new(b"XMAS");

        for scan in Scan::all(grid.dims()) {
            grid.scan(scan, &mut count);
        }

        Ok(count.total())
    }

    fn part2(grid: &Grid) -> Result<usize> {
        let dims = grid.dims();

        // One anchor set per axis, shared by the two scans of that axis. A
        // word that reads differently in reverse completes from one end of
        // an axis only, so the directions contribute disjoint anchors.
        let mut main = WordAnchors::new(b"MAS", 1);
        grid.scan(Scan::diagonals(dims), &mut main);
        grid.scan(Scan::diagonals_rev(dims), &mut main);

        let mut anti = WordAnchors::new(b"MAS", 1);
        grid.scan(Scan::anti_diagonals(dims), &mut anti);
        grid.scan(Scan::anti_diagonals_rev(dims), &mut anti);

        Ok(main.anchors().intersection(anti.anchors()).count())
    }
}

lib::puzzle! {
    Day04,
    example = "d04e.txt", expect = (18, 9),
    input = "d04.txt",
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &[u8] = include_bytes!(concat!(env!("CARGO_MANIFEST_DIR"), "/inputs/d04e.txt"));

    #[test]
    fn test_example() {
        let mut input = IStr::new(EXAMPLE);
        let data = Day04::preprocess(&mut input).unwrap();
        assert_eq!(Day04::part1(&data).unwrap(), 18);
        assert_eq!(Day04::part2(&data).unwrap(), 9);
    }

    #[test]
    fn test_single_cross() {
        let mut input = IStr::new(b"M.S\n.A.\nM.S\n");
        let data = Day04::preprocess(&mut input).unwrap();
        assert_eq!(Day04::part2(&data).unwrap(), 1);
    }
}
