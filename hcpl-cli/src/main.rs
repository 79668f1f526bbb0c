use clap::Parser;
use hcpl::vm::VMOptions;

/// Run an HCPL program.
#[derive(Parser, Debug)]
#[command()]
struct Args {
    /// File containing an HCPL program.
    #[arg()]
    file: String,
    /// A limit for the number of executed actions.
    /// If the limit is reached, the program will be stopped with an error.
    #[arg(long, short = 'l')]
    action_limit: Option<u64>,
    /// Also print a record for every DO/DONT/LET/BREACH action.
    #[arg(long, short = 't')]
    trace: bool,
    /// Print the final Databer contents after running the program.
    #[arg(long, short = 's')]
    state: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let source = std::fs::read_to_string(&args.file)?;

    let mut options = VMOptions::default();
    options.trace = args.trace;
    if let Some(limit) = args.action_limit {
        options.max_actions = limit;
    }

    let result = hcpl::vm::run(&source, options);

    for record in result.output.iter() {
        println!("{}", record);
    }

    if args.state {
        for (index, value) in result.databer.datalings().iter().enumerate() {
            eprintln!("[{}] = {}", index, value);
        }
    }

    if let Some(error) = result.error {
        eprintln!("{}", error);
        std::process::exit(1);
    }

    Ok(())
}
