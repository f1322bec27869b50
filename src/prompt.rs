use dialoguer::Confirm as Dialog;
use owo_colors::OwoColorize;
use spu_core::Calendar;
use spu_core::calendar::DEFAULT_RUN_QUARTERS;
use spu_core::sync::Confirm;
use spu_core::{SpuError, SpuResult};

use crate::render::Render;

/// Shows the quarters about to be created and asks on the terminal.
pub struct TerminalConfirm;

impl Confirm for TerminalConfirm {
    fn confirm(&self, subject: &str, calendar: &Calendar) -> SpuResult<bool> {
        println!();
        println!("{}", format!("Boards to create for {}:", subject).bold());
        for plan in calendar.quarters().take(DEFAULT_RUN_QUARTERS) {
            println!("{}", plan.render());
        }
        println!();

        Dialog::new()
            .with_prompt(format!(
                "Create {} {} for {}?",
                calendar.len(),
                if calendar.len() == 1 { "quarter" } else { "quarters" },
                subject
            ))
            .default(false)
            .interact()
            .map_err(|e| SpuError::Prompt(e.to_string()))
    }
}
