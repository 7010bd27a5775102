//! Check a handful of entailments and print each verdict.
//!
//! ```sh
//! cargo run --example entailment
//! ```

use heron_fol::{config::Config, context::Context};

fn main() {
    let mut ctx = Context::from_config(Config::default());

    let queries: [(&[&str], &str); 4] = [
        (&["all x. (P(x) -> Q(x))", "P(a)"], "Q(a)"),
        (
            &["all x. (Man(x) -> Mortal(x))", "Man(socrates)"],
            "Mortal(socrates)",
        ),
        (&["all x. (P(x) -> Q(x))"], "Q(a)"),
        (&["(P(a) & -P(a))"], "Q(b)"),
    ];

    for (premises, conclusion) in queries {
        let report = match ctx.check_implication(premises, conclusion) {
            Ok(report) => report,
            Err(e) => {
                eprintln!("error: {e:?}");
                continue;
            }
        };

        println!("{} ⊨ {conclusion}\t{report}", premises.join(", "));
    }
}
