use std::collections::HashSet;

use super::{Grid, GridError, Needle, Pos, Scan, ScanSink, WordAnchors, WordCount};

/// Records every visited cell and line break.
#[derive(Default)]
struct Tracer {
    cells: Vec<(u8, Pos)>,
    lines: usize,
}

impl ScanSink for Tracer {
    fn ingest(&mut self, symbol: u8, at: Pos) {
        self.cells.push((symbol, at));
    }

    fn end_of_line(&mut self) {
        self.lines += 1;
    }
}

fn grid(input: &str) -> Grid {
    Grid::parse(input.as_bytes()).unwrap()
}

fn trace(g: &Grid, scan: Scan) -> Tracer {
    let mut tracer = Tracer::default();
    g.scan(scan, &mut tracer);
    tracer
}

#[test]
fn test_parse() {
    let g = grid("AB\nCD\n");
    assert_eq!(g.dims().rows, 2);
    assert_eq!(g.dims().cols, 2);
    assert_eq!(g.get(Pos::new(1, 0)), Some(b'C'));
    assert_eq!(g.get(Pos::new(2, 0)), None);
    assert_eq!(g.get(Pos::new(0, -1)), None);
}

#[test]
fn test_parse_rejects_empty() {
    assert!(matches!(Grid::parse(b""), Err(GridError::Empty)));
    assert!(matches!(Grid::parse(b"\n"), Err(GridError::Empty)));
}

#[test]
fn test_parse_rejects_ragged() {
    assert!(matches!(
        Grid::parse(b"ABC\nAB\n"),
        Err(GridError::Ragged { row: 1, len: 2, expected: 3 })
    ));
}

#[test]
fn test_scans_tile_grid() {
    // Squares, wide and tall rectangles, single row, single column, single
    // cell.
    for input in ["X", "AB\nCD", "ABC\nDEF", "AB\nCD\nEF", "ABCDE", "A\nB\nC"] {
        let g = grid(input);
        let dims = g.dims();

        for scan in Scan::all(dims) {
            let tracer = trace(&g, scan);

            assert_eq!(tracer.cells.len(), dims.rows * dims.cols);

            let positions = tracer
                .cells
                .iter()
                .map(|&(_, at)| at)
                .collect::<HashSet<_>>();

            assert_eq!(positions.len(), dims.rows * dims.cols);

            for &(symbol, at) in &tracer.cells {
                assert_eq!(g.get(at), Some(symbol));
            }
        }
    }
}

#[test]
fn test_line_breaks() {
    let g = grid("ABC\nDEF");
    let dims = g.dims();

    assert_eq!(trace(&g, Scan::rows(dims)).lines, 2);
    assert_eq!(trace(&g, Scan::rows_rev(dims)).lines, 2);
    assert_eq!(trace(&g, Scan::columns(dims)).lines, 3);
    assert_eq!(trace(&g, Scan::columns_rev(dims)).lines, 3);
    assert_eq!(trace(&g, Scan::diagonals(dims)).lines, 4);
    assert_eq!(trace(&g, Scan::diagonals_rev(dims)).lines, 4);
    assert_eq!(trace(&g, Scan::anti_diagonals(dims)).lines, 4);
    assert_eq!(trace(&g, Scan::anti_diagonals_rev(dims)).lines, 4);
}

#[test]
fn test_scan_orders() {
    let g = grid("AB\nCD");
    let dims = g.dims();

    let symbols = |scan| {
        trace(&g, scan)
            .cells
            .iter()
            .map(|&(symbol, _)| symbol)
            .collect::<Vec<_>>()
    };

    assert_eq!(symbols(Scan::rows(dims)), b"ABCD");
    assert_eq!(symbols(Scan::rows_rev(dims)), b"BADC");
    assert_eq!(symbols(Scan::columns(dims)), b"ACBD");
    assert_eq!(symbols(Scan::columns_rev(dims)), b"CADB");
    assert_eq!(symbols(Scan::diagonals(dims)), b"BADC");
    assert_eq!(symbols(Scan::diagonals_rev(dims)), b"BDAC");
    assert_eq!(symbols(Scan::anti_diagonals(dims)), b"ABCD");
    assert_eq!(symbols(Scan::anti_diagonals_rev(dims)), b"ACBD");
}

#[test]
fn test_direction_matters() {
    // SAMX only reads as XMAS right to left.
    let g = grid("SAMX");
    let dims = g.dims();

    let mut count = WordCount::new(b"XMAS");
    g.scan(Scan::rows(dims), &mut count);
    assert_eq!(count.total(), 0);

    let mut count = WordCount::new(b"XMAS");
    g.scan(Scan::rows_rev(dims), &mut count);
    assert_eq!(count.total(), 1);
}

#[test]
fn test_word_found_once_across_all_scans() {
    // A single down-right XMAS; no other direction can assemble one.
    let g = grid("X...\n.M..\n..A.\n...S");

    let mut count = WordCount::new(b"XMAS");

    for scan in Scan::all(g.dims()) {
        g.scan(scan, &mut count);
    }

    assert_eq!(count.total(), 1);
}

#[test]
fn test_no_match_across_line_breaks() {
    // XM ends one row and AS starts the next.
    let g = grid("..XM\nAS..");

    let mut count = WordCount::new(b"XMAS");
    g.scan(Scan::rows(g.dims()), &mut count);
    assert_eq!(count.total(), 0);
}

fn feed_all(needle: &mut Needle, text: &str) -> Vec<Pos> {
    let mut out = Vec::new();

    for (col, symbol) in text.bytes().enumerate() {
        if let Some(at) = needle.feed(symbol, Pos::new(0, col as isize)) {
            out.push(at);
        }
    }

    out
}

#[test]
fn test_needle_restarts_on_first_symbol() {
    let mut needle = Needle::new(b"XMAS");
    assert_eq!(feed_all(&mut needle, "XMXMAS"), [Pos::new(0, 2)]);
}

#[test]
fn test_needle_back_to_back() {
    let mut needle = Needle::new(b"XMAS");
    assert_eq!(
        feed_all(&mut needle, "XMASXMAS"),
        [Pos::new(0, 0), Pos::new(0, 4)]
    );
}

#[test]
fn test_needle_anchor_follows_restart() {
    // The MA prefix is abandoned for the second M, so the anchor is the
    // second A.
    let mut needle = Needle::anchored(b"MAS", 1);
    assert_eq!(feed_all(&mut needle, "XMAMAS"), [Pos::new(0, 4)]);
}

#[test]
fn test_needle_reset() {
    let mut needle = Needle::new(b"XMAS");
    assert!(feed_all(&mut needle, "XMA").is_empty());
    needle.reset();
    assert!(feed_all(&mut needle, "S").is_empty());
}

#[test]
fn test_anchor_sets_cross() {
    // MAS down-right and MAS up-right share the A.
    let g = grid("M.S\n.A.\nM.S");
    let dims = g.dims();

    let mut down = WordAnchors::new(b"MAS", 1);
    g.scan(Scan::diagonals(dims), &mut down);
    g.scan(Scan::diagonals_rev(dims), &mut down);
    assert_eq!(down.anchors().len(), 1);
    assert!(down.anchors().contains(&Pos::new(1, 1)));

    let mut up = WordAnchors::new(b"MAS", 1);
    g.scan(Scan::anti_diagonals(dims), &mut up);
    g.scan(Scan::anti_diagonals_rev(dims), &mut up);
    assert_eq!(up.anchors().len(), 1);

    assert_eq!(down.anchors().intersection(up.anchors()).count(), 1);
}

#[test]
fn test_unpaired_diagonal_is_no_cross() {
    // Only the down-right arm spells MAS.
    let g = grid("M.M\n.A.\nM.S");
    let dims = g.dims();

    let mut down = WordAnchors::new(b"MAS", 1);
    g.scan(Scan::diagonals(dims), &mut down);
    g.scan(Scan::diagonals_rev(dims), &mut down);

    let mut up = WordAnchors::new(b"MAS", 1);
    g.scan(Scan::anti_diagonals(dims), &mut up);
    g.scan(Scan::anti_diagonals_rev(dims), &mut up);

    assert_eq!(down.anchors().intersection(up.anchors()).count(), 0);
}
