use casim_lib::{
    moore, moore_with_center, Config, DenseGrid, Error, Grid, Neighborhood, Outcome, Rule,
    SparseGrid, State,
};
use std::error::Error as StdError;

const LAYOUT: &str = "L.LL.LL.LL\n\
                      LLLLLLL.LL\n\
                      L.L.L..L..\n\
                      LLLL.LL.LL\n\
                      L.LL.LL.LL\n\
                      L.LLLLL.LL\n\
                      ..L.L.....\n\
                      LLLLLLLLLL\n\
                      L.LLLLLL.L\n\
                      L.LLLLL.LL";

const PATTERN: &str = ".#.\n\
                      ..#\n\
                      ###";

#[test]
fn seating_adjacent() -> Result<(), Box<dyn StdError>> {
    let summary = Config::new(2).set_rule_string("B0/S0123").run(LAYOUT)?;
    assert_eq!(summary.population, 37);
    assert_eq!(summary.outcome, Outcome::Converged);
    Ok(())
}

#[test]
fn seating_visible() -> Result<(), Box<dyn StdError>> {
    let summary = Config::new(2)
        .set_rule_string("B0/S01234")
        .set_neighborhood(Neighborhood::Visible)
        .run(LAYOUT)?;
    assert_eq!(summary.population, 26);
    assert_eq!(summary.outcome, Outcome::Converged);
    Ok(())
}

#[test]
fn cubes_3d() -> Result<(), Box<dyn StdError>> {
    let summary = Config::default().run(PATTERN)?;
    assert_eq!(summary.population, 112);
    assert_eq!(summary.generations, 6);
    assert_eq!(summary.outcome, Outcome::GenerationLimit);
    Ok(())
}

#[test]
fn hypercubes_4d() -> Result<(), Box<dyn StdError>> {
    let summary = Config::new(4).run(PATTERN)?;
    assert_eq!(summary.population, 848);
    assert_eq!(summary.outcome, Outcome::GenerationLimit);
    Ok(())
}

#[test]
fn adjacent_cardinality() -> Result<(), Box<dyn StdError>> {
    let grid: DenseGrid = "LLL\nLLL\nLLL".parse()?;
    assert_eq!(grid.adjacent((1, 1)).len(), 8);
    assert_eq!(grid.adjacent((0, 1)).len(), 5);
    assert_eq!(grid.adjacent((0, 0)).len(), 3);
    assert_eq!(grid.adjacent((2, 2)).len(), 3);
    Ok(())
}

#[test]
fn moore_cardinality() {
    assert_eq!(moore::<2>([0; 2]).count(), 8);
    assert_eq!(moore::<3>([0; 3]).count(), 26);
    assert_eq!(moore::<4>([0; 4]).count(), 80);
    assert_eq!(moore_with_center::<3>([0; 3]).count(), 27);
}

#[test]
fn moore_excludes_center() {
    assert!(moore::<3>([5, -2, 0]).all(|n| n != [5, -2, 0]));
    assert!(moore_with_center::<3>([5, -2, 0]).any(|n| n == [5, -2, 0]));
}

#[test]
fn step_is_deterministic() -> Result<(), Box<dyn StdError>> {
    let grid: DenseGrid = LAYOUT.parse()?;
    let rule = Rule::seating(4);
    let (first, _) = grid.step(Neighborhood::Adjacent, &rule);
    let (second, _) = grid.step(Neighborhood::Adjacent, &rule);
    assert_eq!(first, second);

    let sparse = SparseGrid::<3>::from_pattern(PATTERN)?;
    assert_eq!(sparse.step(&Rule::life()).0, sparse.step(&Rule::life()).0);
    Ok(())
}

#[test]
fn step_reads_one_snapshot() -> Result<(), Box<dyn StdError>> {
    // Every empty seat has zero occupied neighbors in the initial snapshot,
    // so all of them must fill in the same step, regardless of the order
    // the cells are visited in.
    let grid: DenseGrid = "LL\nLL".parse()?;
    let (next, changed) = grid.step(Neighborhood::Adjacent, &Rule::seating(4));
    assert!(changed);
    assert_eq!(next.population(), 4);

    // Each occupied seat now has 3 occupied neighbors, under the crowd
    // threshold, so the grid is already at its fixed point.
    let summary = Config::new(2).set_rule_string("B0/S0123").run("LL\nLL")?;
    assert_eq!(summary.population, 4);
    assert_eq!(summary.generations, 1);
    assert_eq!(summary.outcome, Outcome::Converged);
    Ok(())
}

#[test]
fn fixed_point_is_idempotent() -> Result<(), Box<dyn StdError>> {
    let grid: DenseGrid = LAYOUT.parse()?;
    let rule = Rule::seating(4);
    let (settled, _, outcome) = grid.settle(Neighborhood::Adjacent, &rule, None);
    assert_eq!(outcome, Outcome::Converged);

    let (again, changed) = settled.step(Neighborhood::Adjacent, &rule);
    assert!(!changed);
    assert_eq!(again, settled);
    assert_eq!(again.population(), settled.population());
    Ok(())
}

#[test]
fn generation_cap() -> Result<(), Box<dyn StdError>> {
    let summary = Config::new(2)
        .set_rule_string("B0/S0123")
        .set_generations(0)
        .run(LAYOUT)?;
    assert_eq!(summary.population, 0);
    assert_eq!(summary.outcome, Outcome::GenerationLimit);
    Ok(())
}

#[test]
fn ray_stops_at_boundary() -> Result<(), Box<dyn StdError>> {
    let grid: DenseGrid = "LLL\nLLL\nLLL".parse()?;
    assert_eq!(grid.visible((0, 1), (-1, 0)), None);
    assert_eq!(grid.visible((0, 0), (-1, -1)), None);
    assert_eq!(grid.visible((2, 2), (1, 1)), None);
    Ok(())
}

#[test]
fn ray_sees_through_floor() -> Result<(), Box<dyn StdError>> {
    let grid: DenseGrid = ".......#.\n\
                           ...#.....\n\
                           .#.......\n\
                           .........\n\
                           ..#L....#\n\
                           ....#....\n\
                           .........\n\
                           #........\n\
                           ...#....."
        .parse()?;
    assert_eq!(grid.get((4, 3)), State::Inactive);
    assert_eq!(grid.active_neighbors((4, 3), Neighborhood::Visible), 8);
    Ok(())
}

#[test]
fn ray_stops_at_first_seat() -> Result<(), Box<dyn StdError>> {
    // The empty seat at (1, 3) hides the occupied seats behind it.
    let grid: DenseGrid = ".............\n\
                           .L.L.#.#.#.#.\n\
                           ............."
        .parse()?;
    assert_eq!(grid.visible((1, 1), (0, 1)), Some(State::Inactive));
    assert_eq!(grid.active_neighbors((1, 1), Neighborhood::Visible), 0);
    Ok(())
}

#[test]
fn ray_blocked_by_empty_seats() -> Result<(), Box<dyn StdError>> {
    let grid: DenseGrid = ".##.##.\n\
                           #.#.#.#\n\
                           ##...##\n\
                           ...L...\n\
                           ##...##\n\
                           #.#.#.#\n\
                           .##.##."
        .parse()?;
    assert_eq!(grid.active_neighbors((3, 3), Neighborhood::Visible), 0);
    Ok(())
}

#[test]
fn seating_rule_as_bs_notation() -> Result<(), Box<dyn StdError>> {
    assert_eq!(Rule::seating(4), "B0/S0123".parse()?);
    assert_eq!(Rule::seating(5), "B0/S01234".parse()?);
    assert_eq!(Rule::life(), "B3/S23".parse()?);
    Ok(())
}

#[test]
fn floor_is_inert() {
    let rule = Rule::life();
    for count in 0..=8 {
        assert_eq!(rule.next_state(State::Floor, count), State::Floor);
    }
    assert_eq!(rule.next_state(State::Inactive, 3), State::Active);
    assert_eq!(rule.next_state(State::Inactive, 2), State::Inactive);
    assert_eq!(rule.next_state(State::Active, 2), State::Active);
    assert_eq!(rule.next_state(State::Active, 4), State::Inactive);
}

#[test]
fn default_reads() -> Result<(), Box<dyn StdError>> {
    let grid: DenseGrid = "LL\nLL".parse()?;
    assert_eq!(grid.get((5, 5)), State::Floor);

    let mut sparse = SparseGrid::<3>::new();
    assert_eq!(sparse.get([100, -100, 0]), State::Inactive);
    sparse.set([100, -100, 0], State::Active);
    assert_eq!(sparse.get([100, -100, 0]), State::Active);
    assert_eq!(sparse.population(), 1);
    sparse.set([100, -100, 0], State::Inactive);
    assert_eq!(sparse.population(), 0);
    Ok(())
}

#[test]
fn display_round_trip() -> Result<(), Box<dyn StdError>> {
    let grid: DenseGrid = LAYOUT.parse()?;
    let rendered = grid.to_string();
    let reparsed: DenseGrid = rendered.parse()?;
    assert_eq!(grid, reparsed);
    assert_eq!(rendered.lines().count(), 10);
    Ok(())
}

#[test]
fn parse_errors() {
    assert_eq!(
        "LL\nLLL".parse::<DenseGrid>(),
        Err(Error::RaggedRow(1, 3, 2))
    );
    assert_eq!(
        "LX".parse::<DenseGrid>(),
        Err(Error::UnexpectedChar(0, 'X'))
    );
    assert_eq!("".parse::<DenseGrid>(), Err(Error::EmptyGrid));
    assert_eq!(
        SparseGrid::<3>::from_pattern(".L."),
        Err(Error::UnexpectedChar(0, 'L'))
    );
    assert!("B9/S23".parse::<Rule>().is_err());
    assert_eq!(
        Config::new(5).run(PATTERN),
        Err(Error::Dimension(5))
    );
}
