//! Parameter listing command.

use clap::Args;
use remolino_core::{ParamFlags, ParameterInfo};
use remolino_effects::ModDelay;

/// Arguments for `remolino params`.
#[derive(Args)]
pub struct ParamsArgs {}

/// Run the params command.
pub fn run(_args: ParamsArgs) -> anyhow::Result<()> {
    let effect = ModDelay::new();

    println!("Parameters");
    println!("==========");
    println!();
    println!(
        "  {:14}  {:12}  {:14}  {:10}  {}",
        "Name", "Id", "Range", "Default", "Notes"
    );
    println!(
        "  {:14}  {:12}  {:14}  {:10}  {}",
        "----", "--", "-----", "-------", "-----"
    );

    for i in 0..effect.param_count() {
        let Some(desc) = effect.param_info(i) else {
            continue;
        };

        let range = format!("{}..{}{}", desc.min, desc.max, desc.unit.suffix());
        let notes = if desc.flags.contains(ParamFlags::STEPPED) {
            desc.step_labels.join(" / ")
        } else {
            String::new()
        };

        println!(
            "  {:14}  {:12}  {:14}  {:10}  {}",
            desc.name, desc.string_id, range, desc.default, notes
        );
    }

    println!();
    println!("Example usage:");
    println!();
    println!("  remolino process input.wav output.wav --mode flanger --rate 0.5 --mix 0.7");

    Ok(())
}
