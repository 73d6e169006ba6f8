use std::io::{self, BufRead, Write};

use agm_lib::{
    config::Config,
    context::Context,
    io::{
        cli::{self, ConfigIO},
        render, store,
    },
    types::err::{self},
};

/// A line of input to the loop over standard input.
enum Command<'l> {
    Revise(&'l str),
    Query(&'l str),
    Delete(&'l str),
    Normalize(&'l str),
    List,
    Quit,
    Blank,
}

impl<'l> Command<'l> {
    fn read(line: &'l str) -> Self {
        let line = line.trim();
        match line {
            "" => Command::Blank,
            ":list" => Command::List,
            ":quit" => Command::Quit,
            _ => match line.split_at(line.char_indices().nth(1).map_or(line.len(), |(i, _)| i)) {
                ("?", rest) => Command::Query(rest.trim()),
                ("-", rest) if !rest.starts_with('>') => Command::Delete(rest.trim()),
                ("=", rest) => Command::Normalize(rest.trim()),
                _ => Command::Revise(line),
            },
        }
    }
}

fn main() {
    #[cfg(feature = "log")]
    env_logger::init();

    let matches = cli::cli().get_matches();

    let config = Config::from_args(&matches);
    let config_io = ConfigIO::from_args(&matches);

    let base = match &config_io.store {
        Some(path) => match store::load(path) {
            Ok(base) => base,
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        },
        None => Default::default(),
    };

    if config_io.detail > 0 {
        println!("{config}");
    }

    let mut the_context = Context::with_base(config, base);

    let result = match config_io.formulas.is_empty() {
        true => read_loop(&mut the_context, &config_io),
        false => config_io
            .formulas
            .iter()
            .try_for_each(|formula| revise(&mut the_context, formula, &config_io)),
    };

    if let Err(e) = result {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn read_loop(the_context: &mut Context, config_io: &ConfigIO) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = line?;

        match Command::read(&line) {
            Command::Blank => {}

            Command::Quit => break,

            Command::List => render::write_base(&mut stdout, the_context.base(), config_io.detail > 1)?,

            Command::Revise(text) => revise(the_context, text, config_io)?,

            Command::Query(text) => match the_context.entails(text) {
                Ok(true) => writeln!(stdout, "{} follows from the base", text.trim())?,
                Ok(false) => writeln!(stdout, "{} does not follow from the base", text.trim())?,
                Err(e) => report_error(text, &e),
            },

            Command::Delete(text) => {
                let steps = the_context.contract(text);
                if steps.is_empty() {
                    writeln!(stdout, "{} is not in the base", text.trim())?;
                } else {
                    render::write_steps(&mut stdout, &steps)?;
                    save(the_context, config_io);
                }
            }

            Command::Normalize(text) => match the_context.cnf(text) {
                Ok(cnf) => writeln!(stdout, "{cnf}")?,
                Err(e) => report_error(text, &e),
            },
        }
    }

    Ok(())
}

fn revise(the_context: &mut Context, text: &str, config_io: &ConfigIO) -> io::Result<()> {
    let mut stdout = io::stdout();

    match the_context.revise(text) {
        Ok(revision) => {
            render::write_steps(&mut stdout, &revision.steps)?;
            if revision.changed() {
                save(the_context, config_io);
            }
            if config_io.detail > 0 {
                render::write_base(&mut stdout, the_context.base(), config_io.detail > 1)?;
            }
        }

        Err(e) => report_error(text, &e),
    }

    Ok(())
}

fn save(the_context: &Context, config_io: &ConfigIO) {
    if let Some(path) = &config_io.store {
        if let Err(e) = store::save(path, the_context.base()) {
            eprintln!("{e}");
        }
    }
}

/// Marks the position of a parse error beneath the (trimmed) input, where possible.
fn report_error(text: &str, e: &err::ErrorKind) {
    let text = text.trim();
    if let err::ErrorKind::Parse(parse_error) = e {
        if let Some(position) = parse_error.position() {
            eprintln!("{text}");
            eprintln!("{}^", " ".repeat(position));
        }
    }
    eprintln!("{e}");
}
