use std::io::Write;
use std::process;

use chrono::Local;
use env_logger::{Builder, Env};
use log::{error, info, log_enabled, Level, LevelFilter};
use structopt::StructOpt;

use union_find::*;

#[derive(StructOpt, Debug)]
#[structopt(name = "uf")]
struct Config {
    #[structopt(short = "i", long = "input-file", default_value = "UF.txt")]
    input_file: String,

    #[structopt(short = "v", long = "verbose")]
    verbose: bool,
}

fn init_logger(verbose: bool) {
    let env = Env::new()
        .filter_or("UF_LOG", "warn")
        .write_style("UF_LOG_STYLE");
    let mut builder = Builder::from_env(env);
    if verbose {
        builder.filter_level(LevelFilter::Debug);
    }
    builder
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} {}",
                Local::now().format("%Y-%m-%dT%H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .init();
}

fn run(opt: &Config) -> Result<(), Error> {
    let pairs = load_pairs(&opt.input_file)?;
    info!("loaded {} pairs from {}", pairs.pairs.len(), opt.input_file);
    let uf = connect_pairs(&pairs)?;
    println!("{:?}", uf.parents());
    Ok(())
}

fn failure_message(input_file: &str, e: &Error) -> String {
    format!("{}: {}", input_file, e)
}

fn main() {
    let opt = Config::from_args();
    init_logger(opt.verbose);

    if let Err(e) = run(&opt) {
        // UF_LOG=off must not swallow the failure
        let message = failure_message(&opt.input_file, &e);
        if log_enabled!(Level::Error) {
            error!("{}", message);
        } else {
            eprintln!("uf: {}", message);
        }
        process::exit(1);
    }
}
