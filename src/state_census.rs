use std::process::exit;
use stab_enum::enumerate;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let verbose = args.iter().any(|a| a == "--states");
    let n: usize = match args.iter().find(|a| !a.starts_with("--")) {
        Some(raw) => match raw.parse() {
            Ok(n) => n,
            Err(_) => {
                eprintln!("state_census: bad qubit count {:?}", raw);
                exit(2);
            },
        },
        None => {
            eprintln!("usage: state_census <n> [--states]");
            exit(2);
        },
    };

    if verbose {
        let all = match enumerate::states(n) {
            Ok(all) => all,
            Err(err) => { eprintln!("state_census: {}", err); exit(1); },
        };
        for (record, amps) in all.iter() {
            println!(
                "K = {}  b = {}  J = {}",
                record.support(),
                record.linear(),
                record.quadratic(),
            );
            println!("  {}", record.kets());
            println!("  {}", amps);
        }
        println!("total: {}", all.len());
    } else {
        match enumerate::count(n) {
            Ok(total) => {
                println!(
                    "n = {}: {} states (closed form: {})",
                    n, total, enumerate::stabilizer_count(n),
                );
            },
            Err(err) => { eprintln!("state_census: {}", err); exit(1); },
        }
    }
}
