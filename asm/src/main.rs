use std::{
    fs::File,
    io::{self, BufRead, BufReader, BufWriter, Write},
    path::PathBuf,
    process::ExitCode,
};

use clap::error::ErrorKind;
use color_print::ceprintln;
use ipp_parse::{
    error::{EXIT_INPUT, EXIT_OUTPUT, EXIT_USAGE},
    Builder, Program,
};
use tracing::Level;

const HELP_TEMPLATE: &str = "\
{before-help}{bin} {version}
  {about}

{usage-heading}
{tab}{usage}

{all-args}{after-help}";

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum Format {
    /// XML program representation
    Xml,
    /// The same tree as YAML
    Yaml,
}

#[derive(Debug, clap::Parser)]
#[clap(version, about, help_template = HELP_TEMPLATE)]
struct Args {
    /// Input file (default: stdin)
    input: Option<PathBuf>,

    /// Output file (default: stdout)
    #[clap(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[clap(short, long, value_enum, default_value_t = Format::Xml)]
    format: Format,

    /// Dump parsed instructions to stderr
    #[clap(short, long)]
    dump: bool,

    /// One of `TRACE`, `DEBUG`, `INFO`, `WARN`, or `ERROR`
    #[clap(short, long, default_value_t = Level::WARN)]
    log_level: Level,
}

fn main() -> ExitCode {
    use clap::Parser;

    // `--help` only stands alone
    let argv: Vec<String> = std::env::args().collect();
    if argv.len() > 2 && argv[1..].iter().any(|arg| arg == "--help" || arg == "-h") {
        ceprintln!("<red,bold>error</>: `--help` cannot be combined with other arguments");
        return ExitCode::from(EXIT_USAGE);
    }

    let args = match Args::try_parse_from(&argv) {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            return match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::from(EXIT_USAGE),
            };
        }
    };

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .with_writer(io::stderr)
        .init();

    // 1. Read lines and build the program
    let (name, reader): (String, Box<dyn BufRead>) = match &args.input {
        Some(path) => match File::open(path) {
            Ok(file) => (path.display().to_string(), Box::new(BufReader::new(file))),
            Err(err) => {
                ceprintln!("<red,bold>error</>: Failed to open file: {}: {}", path.display(), err);
                return ExitCode::from(EXIT_INPUT);
            }
        },
        None => ("<stdin>".to_string(), Box::new(io::stdin().lock())),
    };

    let mut builder = Builder::new();
    for (idx, raw) in reader.lines().enumerate() {
        let raw = match raw {
            Ok(raw) => raw,
            Err(err) => {
                ceprintln!("<red,bold>error</>: Failed to read line {}: {}", idx + 1, err);
                return ExitCode::from(EXIT_INPUT);
            }
        };
        if let Err(err) = builder.feed(&raw) {
            err.print_diag(&name, idx, &raw);
            return ExitCode::from(err.exit_code());
        }
    }

    let program = match builder.finish() {
        Ok(program) => program,
        Err(err) => {
            err.print(&name);
            return ExitCode::from(err.exit_code());
        }
    };
    tracing::info!(source = %name, "parsed");

    if args.dump {
        eprintln!("{}", program.cformat());
    }

    // 2. Emit
    if let Err(err) = emit(&program, args.format, args.output.as_ref()) {
        ceprintln!("<red,bold>error</>: Failed to write output: {}", err);
        return ExitCode::from(EXIT_OUTPUT);
    }
    ExitCode::SUCCESS
}

fn emit(program: &Program, format: Format, output: Option<&PathBuf>) -> io::Result<()> {
    let mut out: Box<dyn Write> = match output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(io::stdout().lock()),
    };

    match format {
        Format::Xml => program.write_xml(&mut out)?,
        Format::Yaml => serde_yaml::to_writer(&mut out, program)
            .map_err(|err| io::Error::new(io::ErrorKind::Other, err))?,
    }
    out.flush()
}
