use std::path::PathBuf;

use terrain_pathfinding::path::is_contiguous;
use terrain_pathfinding::{
    load_grid, Algorithm, Cost, CostTable, Overlay, PathfindingError, Relaxation, TerrainGrid,
};

fn board(name: &str) -> TerrainGrid {
    let path: PathBuf = [env!("CARGO_MANIFEST_DIR"), "boards", name].iter().collect();
    load_grid(&path, &CostTable::default()).unwrap()
}

/// (board, A*, BFS, Dijkstra) as (cost, path length) under the reference policy.
const REFERENCE: [(&str, (Cost, usize), (Cost, usize), (Cost, usize)); 8] = [
    ("board-1-1.txt", (15, 15), (15, 15), (15, 15)),
    ("board-1-2.txt", (25, 25), (21, 21), (21, 21)),
    ("board-1-3.txt", (17, 17), (17, 17), (17, 17)),
    ("board-1-4.txt", (26, 26), (26, 26), (26, 26)),
    ("board-2-1.txt", (40, 23), (356, 13), (58, 19)),
    ("board-2-2.txt", (96, 17), (666, 17), (91, 19)),
    ("board-2-3.txt", (15, 15), (601, 13), (15, 15)),
    ("board-2-4.txt", (168, 20), (168, 20), (667, 24)),
];

/// Same as [REFERENCE] with the improving policy.
const IMPROVING: [(&str, (Cost, usize), (Cost, usize), (Cost, usize)); 8] = [
    ("board-1-1.txt", (15, 15), (15, 15), (15, 15)),
    ("board-1-2.txt", (21, 21), (21, 21), (21, 21)),
    ("board-1-3.txt", (17, 17), (17, 17), (17, 17)),
    ("board-1-4.txt", (26, 26), (26, 26), (26, 26)),
    ("board-2-1.txt", (40, 23), (356, 13), (40, 23)),
    ("board-2-2.txt", (91, 19), (641, 17), (91, 19)),
    ("board-2-3.txt", (15, 15), (601, 13), (15, 15)),
    ("board-2-4.txt", (168, 20), (192, 20), (168, 20)),
];

fn verify(relaxation: Relaxation, table: &[(&str, (Cost, usize), (Cost, usize), (Cost, usize))]) {
    for (name, astar, bfs, dijkstra) in table {
        let grid = board(name);
        for (algorithm, expected) in [
            (Algorithm::AStar, astar),
            (Algorithm::Bfs, bfs),
            (Algorithm::Dijkstra, dijkstra),
        ] {
            let result = algorithm.solve(&grid, relaxation).unwrap();
            println!("{algorithm} on {name}: cost {}", result.cost);
            assert_eq!((result.cost, result.path.len()), *expected);
            assert!(is_contiguous(grid.start(), &result.path));
        }
    }
}

#[test]
fn reference_costs() {
    verify(Relaxation::Reference, &REFERENCE);
}

#[test]
fn improving_costs() {
    verify(Relaxation::Improving, &IMPROVING);
}

#[test]
fn walled_board_has_no_path() {
    let grid = board("board-walled.txt");
    for algorithm in Algorithm::ALL {
        for relaxation in [Relaxation::Reference, Relaxation::Improving] {
            assert!(matches!(
                algorithm.solve(&grid, relaxation),
                Err(PathfindingError::NoPathFound)
            ));
        }
    }
}

#[test]
fn render_path() {
    let grid = board("board-1-3.txt");
    let result = Algorithm::AStar.solve(&grid, Relaxation::Reference).unwrap();
    let expected = "\
..........#.........
..####....#...####..
..#..#....#......#..
..#AO#....#OOOB..#..
..#.O#.....O.#####..
..#.O######O........
..#.OOOOOOOO........
";
    assert_eq!(Overlay::new(&grid, &result, false).to_string(), expected);
}

#[test]
fn render_sets() {
    let grid = board("board-1-3.txt");
    let expected = [
        (
            Algorithm::AStar,
            "\
..........#.........
..####....#...####..
..#xx#....#***...#..
..#AO#....#OOOB..#..
..#xO#....*O*#####..
..#xO######O*.......
..#*OOOOOOOO*.......
",
        ),
        (
            Algorithm::Bfs,
            "\
..........#*........
..####....#x*.####..
..#xx#...*#xx*...#..
..#AO#..*x#OOOB..#..
..#xO#.*xxxOx#####..
..#xO######Oxxxxx*..
..#xOOOOOOOOxxxxxx*.
",
        ),
        (
            Algorithm::Dijkstra,
            "\
..........#*........
..####....#x**####..
..#xx#...*#xxx*..#..
..#Ax#..*x#xOOB..#..
..#Ox#.*xxxOO#####..
..#Ox######Oxxxxx*..
..#OOOOOOOOOxxxxxx*.
",
        ),
    ];
    for (algorithm, text) in expected {
        let result = algorithm.solve(&grid, Relaxation::Reference).unwrap();
        assert_eq!(Overlay::new(&grid, &result, true).to_string(), text);
    }
}
