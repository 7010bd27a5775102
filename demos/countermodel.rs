//! Print the decoded countermodel of a failed entailment.
//!
//! ```sh
//! cargo run --example countermodel
//! ```

use heron_fol::{config::Config, context::Context, reports::Report};

fn main() {
    let mut ctx = Context::from_config(Config::default());

    let premises = ["all x. (P(x) -> Q(x))", "exists x. P(x)"];
    let conclusion = "Q(a)";

    match ctx.check_implication(&premises, conclusion) {
        Ok(Report::Entailed) => println!("the conclusion follows"),

        Ok(Report::NotEntailed(model)) => {
            println!("the conclusion does not follow; one countermodel:");
            for literal in &model.literals {
                println!("  {literal}");
            }
        }

        Err(e) => eprintln!("error: {e:?}"),
    }
}
