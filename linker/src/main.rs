use clap::Parser;
use linker::{Error, Format, Listing};

const HELP_TEMPLATE: &str = "\
{before-help}{bin} {version}
  {author}
  {about}

{usage-heading}
{tab}{usage}

{all-args}{after-help}";

#[derive(Debug, clap::Parser)]
#[clap(author, version, about, help_template = HELP_TEMPLATE)]
struct Args {
    /// Input object file
    #[clap(default_value = "main.obj")]
    input: String,

    /// Listing format
    #[clap(short, long, value_enum, default_value = "text")]
    format: Format,

    /// Write the listing to a file instead of stdout
    #[clap(short, long)]
    output: Option<String>,

    /// Machine description (YAML)
    #[clap(short, long)]
    machine: Option<String>,

    /// Colorize diagnostics
    #[clap(short, long)]
    color: bool,

    /// Print link progress to stderr
    #[clap(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    let level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();

    let code = match std::fs::read_to_string(&args.input) {
        Ok(code) => code,
        Err(e) => {
            Error::FileOpen(args.input.clone(), e).print_diag("");
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&args, &code) {
        e.print_diag(&code);
        std::process::exit(1);
    }
}

fn run(args: &Args, code: &str) -> Result<(), Error> {
    log::info!("< {}", args.input);
    let machine = linker::load_machine(args.machine.as_deref())?;
    let linked = linker::link_source(&args.input, code, &machine)?;

    let text = Listing::new(&linked).render(args.format, args.color)?;
    match &args.output {
        Some(path) => {
            log::info!("> {}", path);
            std::fs::write(path, text).map_err(|e| Error::FileWrite(path.clone(), e))
        }
        None => {
            print!("{}", text);
            Ok(())
        }
    }
}
