use assign_calc::{
    printer,
    scanner,
    Config,
    ErrorPolicy,
    Interpreter,
    Session,
    StatementError,
};
use clap::{Parser as ClapParser, Subcommand, ValueEnum};
use std::{
    io::{self, BufRead, Read, Write},
    process,
};

#[derive(ClapParser, Debug)]
#[command(version, about = "Evaluates `name = expression;` programs", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Runs a program and prints the final bindings
    Run {
        #[command(flatten)]
        source: Source,

        /// What to do when a statement fails
        #[arg(long, value_enum, default_value_t = OnError::Halt)]
        on_error: OnError,
    },
    /// Prints the token stream of a program
    Tokens {
        #[command(flatten)]
        source: Source,
    },
    /// Reads statements interactively
    Repl,
}

#[derive(clap::Args, Debug)]
struct Source {
    /// Program file; standard input when omitted
    file: Option<String>,

    /// Program text given inline
    #[arg(short = 'e', long = "eval", conflicts_with = "file")]
    text: Option<String>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum OnError {
    Halt,
    Continue,
}

impl From<OnError> for ErrorPolicy {
    fn from(o: OnError) -> ErrorPolicy {
        match o {
            OnError::Halt => ErrorPolicy::Halt,
            OnError::Continue => ErrorPolicy::Continue,
        }
    }
}

fn main() {
    env_logger::init();

    let args = Args::parse();
    let result = match args.command.unwrap_or(Command::Repl) {
        Command::Run { source, on_error } => {
            let config = Config::new().on_error(on_error.into());
            read_source(&source).and_then(|text| run(&text, config))
        },
        Command::Tokens { source } => read_source(&source).and_then(|text| print_tokens(&text)),
        Command::Repl => run_prompt(),
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        process::exit(74);
    }
}

fn read_source(source: &Source) -> io::Result<String> {
    match (&source.text, &source.file) {
        (Some(text), _) => Ok(text.clone()),
        (None, Some(path)) => std::fs::read_to_string(path),
        (None, None) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        },
    }
}

fn run(text: &str, config: Config) -> io::Result<()> {
    let mut stdout = io::stdout();
    let mut stderr = io::stderr();

    match Interpreter::new(config).run(text) {
        Ok(report) => {
            write!(stdout, "{}", report)?;
            for e in report.skipped() {
                writeln!(stderr, "{}", e)?;
            }
            if !report.is_clean() {
                process::exit(65);
            }
            Ok(())
        },
        Err(e) => {
            writeln!(stderr, "{}", e)?;
            process::exit(exit_code(&e));
        },
    }
}

fn print_tokens(text: &str) -> io::Result<()> {
    match scanner::tokenize(text) {
        Ok(tokens) => {
            write!(io::stdout(), "{}", printer::tokens(&tokens))?;
            Ok(())
        },
        Err(e) => {
            writeln!(io::stderr(), "{}", e)?;
            process::exit(65);
        },
    }
}

fn run_prompt() -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut stderr = io::stderr();
    let mut session = Session::new(Config::default());
    let mut buffer = String::new();

    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        buffer.clear();

        let num_bytes = stdin.lock().read_line(&mut buffer)?;
        if num_bytes == 0 { break };

        match session.feed(buffer.as_str()) {
            Ok(assigned) => write!(stdout, "{}", printer::bindings(&assigned))?,
            Err(e) => writeln!(stderr, "{}", e)?,
        }
    }

    Ok(())
}

fn exit_code(e: &StatementError) -> i32 {
    if e.source.is_evaluation() { 70 } else { 65 }
}
