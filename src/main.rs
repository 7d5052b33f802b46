use std::{
    env,
    fs::{read_to_string, File},
    io::BufReader,
    path::{Path, PathBuf},
    process,
    time::Instant,
};

use linelex::{
    errors::errors::Error,
    lexer::{lexer::Scanner, source::LineReader},
    render_error,
};
use tracing::debug;

fn main() {
    init_tracing();

    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("usage: {} <file>", args.first().map(String::as_str).unwrap_or("linelex"));
        process::exit(2);
    }

    let file_path = PathBuf::from(&args[1]);
    let file_name = file_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| args[1].clone());

    let file = match File::open(&file_path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("Failed to open {}: {}", file_path.display(), err);
            process::exit(1);
        }
    };

    let start = Instant::now();
    let mut scanner = Scanner::new(LineReader::new(BufReader::new(file)), Some(file_name));
    let mut count = 0usize;

    loop {
        match scanner.read() {
            Ok(token) if token.is_eof() => break,
            Ok(token) => {
                println!("{}", token);
                count += 1;
            }
            Err(error) => {
                display_error(&error, &file_path);
                process::exit(1);
            }
        }
    }

    debug!(tokens = count, elapsed = ?start.elapsed(), "scanned {}", scanner.file());
}

fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    // Only initialize if RUST_LOG is set
    if env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_level(true))
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn display_error(error: &Error, file: &Path) {
    let line = usize::try_from(error.get_position().line - 1)
        .ok()
        .and_then(|index| {
            read_to_string(file)
                .ok()
                .and_then(|content| content.lines().nth(index).map(String::from))
        })
        .unwrap_or_default();

    eprintln!("{}", render_error(error, &line));
}
