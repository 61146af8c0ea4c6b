//! Status chip.

use merchdesk_core::format::{ChipTone, chip_label};

/// A small status label such as "Published" or "Hidden".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chip {
    pub label: String,
    pub class: &'static str,
}

impl Chip {
    /// Chip for a stored status value, in any case.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            label: chip_label(value),
            class: ChipTone::for_value(value).css_class(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chip_from_stored_value() {
        let chip = Chip::new("PUBLISHED");
        assert_eq!(chip.label, "Published");
        assert_eq!(chip.class, "chip-published");

        let chip = Chip::new("archived");
        assert_eq!(chip.label, "Archived");
        assert_eq!(chip.class, ChipTone::Neutral.css_class());
    }
}
