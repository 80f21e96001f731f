//! Templates command handler.

use policyqa_console::Painter;
use policyqa_core::{config::AppConfig, AppResult};

use super::use_color;

pub fn execute(config: &AppConfig) -> AppResult<()> {
    print!("{}", Painter::new(use_color(config)).quick_actions());
    Ok(())
}
