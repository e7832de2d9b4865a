use std::{fs::File, io::BufReader, path::PathBuf};

use stoat_sat::{
    builder::dimacs::ParserInfo,
    context::Context,
    types::err::{self, ParseError},
};

use xz2::read::XzDecoder;

/// Reads a DIMACS file into the context, decompressing `.xz` files
/// transparently.
pub fn load_dimacs(context: &mut Context, path: &PathBuf) -> Result<ParserInfo, err::ErrorKind> {
    let file = match File::open(path) {
        Err(_) => return Err(err::ErrorKind::from(ParseError::NoFile)),
        Ok(file) => file,
    };

    match &path.extension() {
        Some(extension) if *extension == "xz" => {
            context.read_dimacs(BufReader::new(XzDecoder::new(&file)))
        }
        _ => context.read_dimacs(BufReader::new(&file)),
    }
}

/// Prints the model in the SAT competition format: `v` lines of at most
/// ten literals, closed with a trailing 0. Unvalued variables are
/// omitted.
pub fn print_model(context: &Context) {
    let mut line = String::from("v");
    let mut on_line = 0;

    for variable in 1..=context.variable_count() as u32 {
        let int = match context.value_of(variable) {
            None => continue,
            Some(true) => variable as i64,
            Some(false) => -(variable as i64),
        };
        line.push_str(format!(" {int}").as_str());
        on_line += 1;
        if on_line == 10 {
            println!("{line}");
            line = String::from("v");
            on_line = 0;
        }
    }

    line.push_str(" 0");
    println!("{line}");
}

/// Prints the counters of a solve as comment lines.
pub fn print_stats(context: &Context) {
    let counters = &context.counters;
    println!("c time                 {:.3?}", counters.time);
    println!("c iterations           {}", counters.total_iterations);
    println!("c conflicts            {}", counters.total_conflicts);
    println!("c decisions            {}", counters.total_decisions);
    println!("c propagations         {}", counters.total_propagations);
    println!("c learned              {}", counters.total_learned);
    println!("c restarts             {}", counters.restarts);
    println!("c purges               {}", counters.purges);
    println!("c purged lemmas        {}", counters.purged_lemmas);
    println!("c on-the-fly subsumed  {}", counters.subsumed_on_the_fly);
    println!("c tail subsumed        {}", counters.tail_subsumed);
    println!("c minimized literals   {}", counters.minimized_literals);
    println!("c tombstoned cells     {}", counters.tombstoned_cells);
    println!("c agility              {:.3}", counters.agility_fraction());
}
