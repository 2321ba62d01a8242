use coordsparser::{version, Notation};
use std::{env, error::Error, process};

fn usage() -> String {
    format!(
        "Usage: ./{} [d|hd|hdm|hdms] <coordinates>\n\n\
         Examples:\n  \
         {0} 42.0, 23.123\n  \
         {0} hdms N 40 45 36.0 W 73 59 02.4",
        version::name()
    )
}

/// Run the program on the given command line arguments (without the program name), returning
/// the text to print on success.
fn run(args: &[String]) -> Result<String, Box<dyn Error>> {
    match args {
        [] => return Err(usage().into()),
        [flag] if flag == "-h" || flag == "--help" => return Ok(usage()),
        [flag] if flag == "-V" || flag == "--version" => return Ok(version::full_name()),
        _ => {}
    }

    // An optional leading argument selects the notation; otherwise it is detected from the input
    let (explicit, rest) = match args[0].parse::<Notation>() {
        Ok(notation) if args.len() > 1 => (Some(notation), &args[1..]),
        _ => (None, args),
    };

    let input = rest.join(" ");
    let (notation, coord) = match explicit {
        Some(notation) => (notation, notation.parse(&input)?),
        None => Notation::parse_any(&input)?,
    };

    Ok(format!(
        "Notation:  {}\nLatitude:  {}\nLongitude: {}",
        notation,
        coord.latitude(),
        coord.longitude()
    ))
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    match run(&args) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    }
}
