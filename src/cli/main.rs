/*!
A simple CLI interface to the library.

# Use

```sh
heron_cli <check|impl|equiv|neg> [--no-closure] [--strict-domains] [--model] sentence…
```

`check` takes one or more premises followed by a conclusion; the other
subcommands take exactly two sentences.

Exit codes: 0 if the queried relation holds, 1 if it does not, 2 on malformed
input or a backend failure.
*/

use heron_fol::{config::Config, context::Context, reports::Report};

mod config;
use config::{parse_args, CliConfig, Command};

/// Entrypoint to the CLI.
fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let mut lib_config = Config::default();
    let mut cli_config = CliConfig::default();

    let (command, sentences) = match parse_args(&args, &mut lib_config, &mut cli_config) {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    };

    let mut ctx = Context::from_config(lib_config);

    let outcome = match command {
        Command::Check | Command::Implication => {
            let premises: Vec<&str> = sentences[..sentences.len() - 1]
                .iter()
                .map(String::as_str)
                .collect();
            let conclusion = sentences.last().expect("at least two sentences").as_str();

            match ctx.check_implication(&premises, conclusion) {
                Ok(report) => {
                    if let (true, Report::NotEntailed(model)) = (cli_config.show_model, &report) {
                        println!("countermodel: {model}");
                    }
                    Ok(report.holds())
                }
                Err(e) => Err(e),
            }
        }

        Command::Equivalence => ctx.equivalent(&sentences[0], &sentences[1]),

        Command::Negation => ctx.negation_of(&sentences[0], &sentences[1]),
    };

    match outcome {
        Ok(true) => {
            println!("holds");
            std::process::exit(0);
        }
        Ok(false) => {
            println!("does not hold");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("error: {e:?}");
            std::process::exit(2);
        }
    }
}
