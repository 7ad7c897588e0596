use anyhow::{Context, Result};
use simple_logger::SimpleLogger;
use std::fs;
use std::time::Instant;
use stilo_css::parser_config::ParserConfig;
use stilo_css::walker::Walker;
use stilo_css::{grammar, Css2};

fn main() -> Result<()> {
    let matches = clap::Command::new("stilo CSS2 parser")
        .version("0.1.0")
        .arg(
            clap::Arg::new("filename")
                .help("The css file to parse")
                .default_value("example.css")
                .index(1),
        )
        .arg(
            clap::Arg::new("debug")
                .help("Enable debug logging")
                .short('d')
                .long("debug")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("quiet")
                .help("Don't display the parsed stylesheet")
                .long("quiet")
                .short('q')
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("analyze")
                .help("Check the grammar for cycles without progress and exit")
                .long("analyze")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    let debug = matches.get_flag("debug");
    let quiet = matches.get_flag("quiet");
    let filename: String = matches
        .get_one::<String>("filename")
        .expect("filename")
        .to_string();

    if debug {
        SimpleLogger::new().init().unwrap();
    }

    if matches.get_flag("analyze") {
        let findings = grammar::shared().analyze();
        if findings.is_empty() {
            println!("grammar: no cycles without progress.");
            return Ok(());
        }
        for finding in &findings {
            eprintln!("grammar: {finding}");
        }
        std::process::exit(1);
    }

    let css = fs::read(&filename).with_context(|| format!("could not read {filename}"))?;

    let config = ParserConfig {
        source: Some(filename.clone()),
    };

    let now = Instant::now();
    let result = Css2::parse(&css, config);
    let elapsed_time = now.elapsed();

    match result {
        Ok(sheet) => {
            if !quiet {
                Walker::new(&sheet).walk_stdout();
            }
            println!(
                "Parsed {} ({} selectors) in {} µs.",
                filename,
                sheet.properties.len(),
                elapsed_time.as_micros()
            );
            Ok(())
        }
        Err(err) => {
            eprintln!("{err}");
            eprint!("{}", err.snippet(&css));
            println!("Parse of {} failed after {} µs.", filename, elapsed_time.as_micros());
            std::process::exit(1);
        }
    }
}
