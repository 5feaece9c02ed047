use std::path::PathBuf;

use client_common::{
    compare::{self, Comparison},
    config::Config,
    hash_client::{HashRequestClient, Output, OutputSink},
    rainbow::{Probe, RainbowTable},
    strength, RpcClient,
};
use eyre::WrapErr;
use rustyline::{error::ReadlineError, history::DefaultHistory, Editor};
use structopt::StructOpt;
use tracing::{debug, error, metadata::LevelFilter};
use tracing_subscriber::EnvFilter;

mod helper;

use helper::{gauge, parse_command, Command, StrengthHelper};

#[derive(StructOpt, Debug)]
#[structopt(name = "armor-cli", about = "Password strength gauge and /hash client")]
struct Opt {
    /// TOML configuration file
    #[structopt(short, long, parse(from_os_str))]
    config: Option<PathBuf>,

    /// Overrides `server_url` from the configuration
    #[structopt(long)]
    server_url: Option<String>,
}

const HELP: &str = "\
strength <password>   show the armor gauge
hash <password>       ask the server for a salted hash
compare <password>    unsalted SHA-256 next to two bcrypt hashes
rainbow <target>      look a plaintext or a bcrypt hash up
help                  this message

Everything after the first space is the password, spaces included.";

fn setup_logger() -> eyre::Result<()> {

    let filter = EnvFilter::from_default_env()
        // Set the base level when not matched by other directives to WARN.
        .add_directive(LevelFilter::WARN.into())
        .add_directive("common=trace".parse()?)
        .add_directive("client_common=trace".parse()?)
        .add_directive("armor_cli=trace".parse()?)
    ;

    let subscriber = tracing_subscriber::FmtSubscriber::builder()
    .with_max_level(tracing::Level::TRACE)
    .with_env_filter(filter)
    .finish();

    tracing::subscriber::set_global_default(subscriber)
        .wrap_err("setting default subscriber failed")?;

    Ok(())
}

struct Terminal;

impl OutputSink for Terminal {
    fn render(&self, output: Output) {
        println!("{}", output);
    }
}

fn print_probe(probe: &Probe) {
    match probe {
        Probe::Bcrypt { target, found: Some(plain) } => println!("bcrypt {} is in the table: {}", target, plain),
        Probe::Bcrypt { target, found: None } => println!("bcrypt {} is not in the table", target),
        Probe::Plaintext { plaintext, sha256, sha_cracked } => {
            println!("unsalted SHA-256 of {:?}: {}", plaintext, sha256);
            match sha_cracked {
                Some(plain) => println!("cracked by lookup: {}", plain),
                None => println!("not in the lookup table"),
            }
        }
    }
}

fn print_comparison(c: &Comparison) {
    println!("unsalted SHA-256: {}", c.unsalted);
    println!("bcrypt (salt 1):  {}", c.bcrypt1);
    println!("bcrypt (salt 2):  {}", c.bcrypt2);
}

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    setup_logger()?;

    let opt = Opt::from_args();
    let config_path = opt.config.unwrap_or_else(|| PathBuf::from(common::consts::CONFIG_PATH));
    let mut config = Config::load(&config_path)?;
    if let Some(url) = opt.server_url {
        config.server_url = url;
    }
    debug!(?config, "configuration loaded");

    let rainbow = match &config.rainbow_file {
        Some(path) => {
            RainbowTable::seed_demo(path, compare::DEFAULT_COST)?;
            RainbowTable::load(path)?
        }
        None => RainbowTable::default(),
    };

    let rt = tokio::runtime::Builder::new_current_thread().enable_all().build()?;
    let client = HashRequestClient::new(RpcClient::new(&config.server_url), Terminal);

    // no history: most lines carry a password
    let mut rl: Editor<StrengthHelper, DefaultHistory> = Editor::new()?;
    rl.set_helper(Some(StrengthHelper));

    loop {
        let readline = rl.readline(">> ");
        match readline {
            Ok(line) => {
                match parse_command(&line) {
                    Command::Strength(pw) => println!("{}", gauge(&strength::evaluate(pw))),
                    Command::Hash(pw) => rt.block_on(client.submit(pw)),
                    Command::Compare("") => println!("{}", common::consts::EMPTY_PASSWORD_PROMPT),
                    Command::Compare(pw) => match compare::compare(pw) {
                        Ok(c) => print_comparison(&c),
                        Err(e) => error!("{:#}", e),
                    },
                    Command::Rainbow(target) => print_probe(&rainbow.probe(target)),
                    Command::Help => println!("{}", HELP),
                    Command::Empty => {}
                    Command::Unknown(cmd) => {
                        error!("unknown command {:?}, try `help`", cmd);
                    }
                }
            },
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break
            },
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break
            },
            Err(err) => {
                println!("Error: {:?}", err);
                break
            }
        }
    }
    Ok(())
}
