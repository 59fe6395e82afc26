//! Verba CLI
//!
//! Letters, numbers and running sums in the concatenated English spellings
//! of one through 999,999,999.

use num_bigint::BigInt;
use verba_algebra::Pretty;
use verba_grammar::{spell, Digits, Numerals};
use verbac::tracing_setup::init_tracing;
use verbac::{parse_target, SolveError, Solver, DEFAULT_TARGET};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    let Some(command) = args.get(1) else {
        print_usage();
        return;
    };

    match command.as_str() {
        "solve" => {
            let target = target_arg(&args);
            report(Solver::new().solve(&target));
        }
        "letter" => {
            let target = target_arg(&args);
            report(Solver::new().letter(&target));
        }
        "unsorted" => {
            let target = target_arg(&args);
            report(Solver::new().unsorted(&target));
        }
        "count" => {
            println!("{}", Solver::new().count());
        }
        "volume" => {
            println!("{}", Solver::new().volume());
        }
        "grammar" => {
            let digits = match args.get(2).map(|arg| arg.parse::<Digits>()) {
                None => Digits::Two,
                Some(Ok(digits)) => digits,
                Some(Err(message)) => {
                    eprintln!("error: {message}");
                    std::process::exit(1);
                }
            };
            let numerals: Numerals<Pretty> = Numerals::up_to(digits);
            println!("{digits} = {}", numerals.get(digits));
        }
        "spell" => {
            let Some(arg) = args.get(2) else {
                eprintln!("Usage: verbac spell <n>");
                std::process::exit(1);
            };
            match arg.trim().parse::<u32>().ok().and_then(spell) {
                Some(word) => println!("{word}"),
                None => {
                    eprintln!("error: cannot spell '{arg}' (expected 1..={})", verba_grammar::LARGEST);
                    std::process::exit(1);
                }
            }
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("verbac {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

/// The position argument after the command, or the default position.
fn target_arg(args: &[String]) -> BigInt {
    let Some(arg) = args.get(2) else {
        return BigInt::from(DEFAULT_TARGET);
    };
    match parse_target(arg) {
        Ok(target) => target,
        Err(err) => fail(&err),
    }
}

fn report<T: std::fmt::Display>(result: Result<T, SolveError>) {
    match result {
        Ok(answer) => println!("{answer}"),
        Err(err) => fail(&err),
    }
}

fn fail(err: &SolveError) -> ! {
    eprintln!("error: {err}");
    std::process::exit(1);
}

fn print_usage() {
    println!("Verba - positions in the sorted concatenation of number words");
    println!();
    println!("Usage: verbac <command> [args]");
    println!();
    println!("Commands:");
    println!("  solve [pos]          Word ending at pos, its number and the running sum");
    println!("  letter [pos]         Letter at pos of the sorted concatenation");
    println!("  unsorted [pos]       Letter at pos of the concatenation in numeric order");
    println!("  count                How many numbers are spelled");
    println!("  volume               Length of the concatenation");
    println!("  grammar [d1|d2|d3|d6|d9]");
    println!("                       Print a range of the grammar (default: d2)");
    println!("  spell <n>            Spell a single number");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Positions are 1-based; the default is {DEFAULT_TARGET}.");
    println!();
    println!("Environment:");
    println!("  RUST_LOG=debug       Trace searches on stderr");
    println!("  VERBA_LOG_TREE=1     Draw traces as an indented span tree");
    println!();
    println!("Examples:");
    println!("  verbac solve");
    println!("  verbac letter 12");
    println!("  verbac unsorted 51000000000");
    println!("  verbac grammar d1");
    println!("  verbac spell 2017");
}
