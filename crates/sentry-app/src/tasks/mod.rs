use crate::prelude::*;
use embassy_stm32::exti::ExtiInput;

pub mod gesture;

// Re-exports
pub use gesture::*;

/// Stands in for the button interrupt: each rising edge gets the debounce
/// check and, if it passes, a flag set. Nothing else happens here.
#[embassy_executor::task]
pub async fn button_task(mut button: ExtiInput<'static>) {
    loop {
        button.wait_for_rising_edge().await;
        BUTTON.on_rising_edge(Instant::now().as_millis());
    }
}
