use crate::error::{CalcError, CalcResult};

use super::CalculatorConfig;

pub(super) fn validate_calculator_config(
    config: CalculatorConfig,
) -> CalcResult<CalculatorConfig> {
    if !config.viewport.is_valid() {
        return Err(CalcError::InvalidViewport {
            width: config.viewport.width,
            height: config.viewport.height,
        });
    }
    // One byte stays reserved, so anything below 2 can never hold a character.
    if config.input_capacity < 2 {
        return Err(CalcError::InvalidConfig(
            "input capacity must be >= 2".to_owned(),
        ));
    }
    if config.history_capacity == 0 {
        return Err(CalcError::InvalidConfig(
            "history capacity must be > 0".to_owned(),
        ));
    }
    if !config.plot_area.is_valid() {
        return Err(CalcError::InvalidConfig(
            "plot area must be finite with positive size".to_owned(),
        ));
    }
    config.graph.validate()?;
    config.keypad_layout.validate()?;
    Ok(config)
}
