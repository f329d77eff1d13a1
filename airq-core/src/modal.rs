use crate::animate::{AnimationTarget, AnimationTrigger};

/// One row of the air-quality key: a US AQI range and its category name.
#[derive(Debug, Clone, Copy)]
pub struct KeyBand {
    pub range: &'static str,
    pub label: &'static str,
}

/// The US AQI bands the key overlay explains.
pub const KEY_BANDS: &[KeyBand] = &[
    KeyBand { range: "0-50", label: "Good" },
    KeyBand { range: "51-100", label: "Moderate" },
    KeyBand { range: "101-150", label: "Unhealthy for Sensitive Groups" },
    KeyBand { range: "151-200", label: "Unhealthy" },
    KeyBand { range: "201-300", label: "Very Unhealthy" },
    KeyBand { range: "301+", label: "Hazardous" },
];

/// Visibility state of the "air quality key" overlay.
///
/// `open` animates the backdrop and panel in (best effort); `close` hides
/// immediately. Both are idempotent.
#[derive(Debug)]
pub struct KeyModal {
    visible: bool,
    animation: AnimationTrigger,
}

impl KeyModal {
    pub fn new(animation: AnimationTrigger) -> Self {
        Self { visible: false, animation }
    }

    pub fn open(&mut self) {
        if self.visible {
            return;
        }
        self.visible = true;
        self.animation.animate(AnimationTarget::Modal);
    }

    pub fn close(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}
