use std::env;

use knapsack_dp::KnapsackSolver;

const DEFAULT_CAPACITY: i64 = 50;
const DEFAULT_WEIGHTS: &[i64] = &[10, 20, 30];
const DEFAULT_VALUES: &[i64] = &[60, 100, 120];

fn main() {
    #[cfg(feature = "tracing")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let options = match Options::parse(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("knapsack: {err}");
            Options::print_help();
            std::process::exit(2);
        }
    };

    let selection =
        match KnapsackSolver::solve_with_items(options.capacity, &options.weights, &options.values)
        {
            Ok(selection) => selection,
            Err(err) => {
                eprintln!("knapsack: {err}");
                std::process::exit(1);
            }
        };

    println!("Maximum value in knapsack: {}", selection.value);
    if options.show_items {
        let indices: Vec<String> = selection.items.iter().map(|i| i.to_string()).collect();
        println!("Chosen items: [{}]", indices.join(", "));
        println!("Total weight: {}", selection.weight);
    }
}

#[derive(Debug)]
struct Options {
    capacity: i64,
    weights: Vec<i64>,
    values: Vec<i64>,
    show_items: bool,
}

impl Options {
    fn parse<I, T>(mut args: I) -> Result<Self, String>
    where
        I: Iterator<Item = T>,
        T: Into<String>,
    {
        let mut capacity = DEFAULT_CAPACITY;
        let mut weights = DEFAULT_WEIGHTS.to_vec();
        let mut values = DEFAULT_VALUES.to_vec();
        let mut show_items = false;

        while let Some(arg) = args.next() {
            let arg = arg.into();
            if arg == "--help" || arg == "-h" {
                Options::print_help();
                std::process::exit(0);
            } else if arg == "--items" {
                show_items = true;
            } else if let Some(value) = arg.strip_prefix("--capacity=") {
                capacity = parse_int("capacity", value)?;
            } else if arg == "--capacity" {
                let value = next_value(&mut args, "--capacity")?;
                capacity = parse_int("capacity", &value)?;
            } else if let Some(value) = arg.strip_prefix("--weights=") {
                weights = parse_list("weights", value)?;
            } else if arg == "--weights" {
                let value = next_value(&mut args, "--weights")?;
                weights = parse_list("weights", &value)?;
            } else if let Some(value) = arg.strip_prefix("--values=") {
                values = parse_list("values", value)?;
            } else if arg == "--values" {
                let value = next_value(&mut args, "--values")?;
                values = parse_list("values", &value)?;
            } else {
                return Err(format!("unrecognized argument '{arg}'"));
            }
        }

        Ok(Self {
            capacity,
            weights,
            values,
            show_items,
        })
    }

    fn print_help() {
        println!(
            "\
Usage: cargo run --bin knapsack [-- <options>]

Options:
  --capacity <N>                Knapsack capacity (default: 50)
  --weights <a,b,...>           Item weights (default: 10,20,30)
  --values <a,b,...>            Item values (default: 60,100,120)
  --items                       Also print the chosen items and their total weight
  -h, --help                    Print this help message

Examples:
  cargo run --bin knapsack
  cargo run --bin knapsack -- --capacity 10 --weights 5,4,6,3 --values 10,40,30,50 --items
"
        );
    }
}

fn next_value<I, T>(args: &mut I, flag: &str) -> Result<String, String>
where
    I: Iterator<Item = T>,
    T: Into<String>,
{
    args.next()
        .map(Into::into)
        .ok_or_else(|| format!("missing value after {flag}"))
}

fn parse_int(name: &str, raw: &str) -> Result<i64, String> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| format!("{name} must be an integer, got '{raw}'"))
}

fn parse_list(name: &str, raw: &str) -> Result<Vec<i64>, String> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    raw.split(',').map(|part| parse_int(name, part)).collect()
}
