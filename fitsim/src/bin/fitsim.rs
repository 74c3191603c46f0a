use fitsim::*;
use fitcore::MemUnits;
use log::info;

/// A fixed-partition memory placement simulator
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Partition sizes, in table order
    #[arg(short, long, required = true, value_delimiter = ',')]
    partitions: Vec<MemUnits>,

    /// Process memory requirements, in table order
    #[arg(short = 'r', long, required = true, value_delimiter = ',')]
    processes:  Vec<MemUnits>,

    /// Print the final snapshot as JSON instead of tables
    #[arg(long)]
    json:       bool,

    /// Steps to run: first|best|worst|next, release=<id>, compact, status, map, frag
    #[arg(value_parser = Step::from_str)]
    steps:      Vec<Step>,
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();
    let cli = Args::parse();

    let mut session = Session::new(&cli.partitions, &cli.processes)?;
    info!("Running {} step(s) over {} partitions and {} processes.",
        cli.steps.len(), session.parts.len(), session.procs.len());
    for step in cli.steps {
        print!("{}", session.apply(step));
    }

    if cli.json {
        println!("{}", session.to_json()?);
    } else {
        print!("{}", session.summary());
    }

    Ok(())
}
