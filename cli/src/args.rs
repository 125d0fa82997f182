//! Parsing command-line arguments.

use casim_lib::{Config, Neighborhood, Rule};
use clap::{command, value_parser, Arg, ArgAction};
use std::{error::Error, fs};

/// Parses the command-line arguments, runs the simulation, and prints the
/// final active-cell count.
pub(crate) fn run() -> Result<(), Box<dyn Error>> {
    let matches = command!()
        .long_about(
            "Runs a discrete cellular automaton over a plain-text grid file \
             and prints the number of active cells at the end.\n\
             \n\
             With --dimension 2 the grid is bounded (`.` floor, `L` empty \
             seat, `#` occupied seat) and the simulation runs until a step \
             changes nothing. With --dimension 3 or 4 the pattern (`.`/`#`) \
             seeds an unbounded grid and the simulation runs a fixed number \
             of generations.",
        )
        .arg(
            Arg::new("FILE")
                .help("Path of the initial grid file")
                .required(true),
        )
        .arg(
            Arg::new("RULE")
                .help("Rule of the cellular automaton, in B/S notation")
                .short('r')
                .long("rule")
                .default_value("B3/S23")
                .value_parser(|s: &str| {
                    s.parse::<Rule>()
                        .map(|_| s.to_string())
                        .map_err(|e| e.to_string())
                }),
        )
        .arg(
            Arg::new("DIMENSION")
                .help("Number of grid dimensions (2, 3 or 4)")
                .short('d')
                .long("dimension")
                .default_value("3")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("NEIGHBORHOOD")
                .help("Neighborhood of the bounded grid")
                .long_help(
                    "Neighborhood of the bounded grid\n\
                     \"adjacent\" counts the eight surrounding cells; \
                     \"visible\" counts the first seat visible in each of \
                     the eight compass directions. Only meaningful with \
                     --dimension 2.",
                )
                .short('n')
                .long("neighborhood")
                .value_parser(["adjacent", "visible"])
                .default_value("adjacent"),
        )
        .arg(
            Arg::new("GENERATIONS")
                .help("Number of generations to run")
                .long_help(
                    "Number of generations to run\n\
                     Defaults to 6 for the unbounded grid. For the bounded \
                     grid this caps the run; by default it runs until it \
                     converges.",
                )
                .short('g')
                .long("generations")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("SEATING")
                .help("Seating preset: a bounded grid with the crowd-threshold rule")
                .long_help(
                    "Seating preset: a bounded grid with the crowd-threshold \
                     rule\n\
                     Sets --dimension 2 and picks the rule from the \
                     neighborhood: an empty seat fills iff no neighbor is \
                     occupied, and an occupied seat empties at 4 (adjacent) \
                     or 5 (visible) occupied neighbors.",
                )
                .long("seating")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let path = matches.get_one::<String>("FILE").unwrap();
    let input = fs::read_to_string(path)?;

    let neighborhood = match matches.get_one::<String>("NEIGHBORHOOD").unwrap().as_str() {
        "visible" => Neighborhood::Visible,
        _ => Neighborhood::Adjacent,
    };

    let mut config = Config::new(*matches.get_one::<usize>("DIMENSION").unwrap())
        .set_rule_string(matches.get_one::<String>("RULE").unwrap())
        .set_neighborhood(neighborhood)
        .set_generations(matches.get_one::<usize>("GENERATIONS").copied());

    if matches.get_flag("SEATING") {
        let rule_string = match neighborhood {
            Neighborhood::Adjacent => "B0/S0123",
            Neighborhood::Visible => "B0/S01234",
        };
        config = config.set_dimension(2).set_rule_string(rule_string);
    }

    let summary = config.run(&input)?;
    println!("{}", summary.population);
    Ok(())
}
