use serde::{Deserialize, Serialize};

/// Calculator presentation mode. `MODE` cycles through these in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CalculatorMode {
    #[default]
    Basic,
    Scientific,
    Graphing,
    Equation,
}

impl CalculatorMode {
    pub const ALL: [Self; 4] = [Self::Basic, Self::Scientific, Self::Graphing, Self::Equation];

    /// Next mode in the cycle, wrapping from `Equation` back to `Basic`.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Basic => Self::Scientific,
            Self::Scientific => Self::Graphing,
            Self::Graphing => Self::Equation,
            Self::Equation => Self::Basic,
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Basic => "Basic",
            Self::Scientific => "Scientific",
            Self::Graphing => "Graphing",
            Self::Equation => "Equation",
        }
    }

    /// Screen title, e.g. `"Calculator - Basic Mode"`.
    #[must_use]
    pub fn title(self) -> String {
        format!("Calculator - {} Mode", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::CalculatorMode;

    #[test]
    fn four_steps_return_to_start() {
        for mode in CalculatorMode::ALL {
            assert_eq!(mode.next().next().next().next(), mode);
        }
    }
}
