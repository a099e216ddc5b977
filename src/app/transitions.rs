//! Declarative animation table. State machines stay timing-free; components
//! look up the visual rules for their current trigger and emit inline styles.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    MenuOpen,
    MenuClosed,
    GateEnter,
    CursorHover,
    CursorIdle,
}

#[derive(Debug, Clone, Copy)]
pub struct VisualRule {
    pub trigger: Trigger,
    pub property: &'static str,
    pub target: &'static str,
    pub duration_ms: u32,
}

pub const RULES: &[VisualRule] = &[
    VisualRule {
        trigger: Trigger::MenuOpen,
        property: "transform",
        target: "translateX(0)",
        duration_ms: 500,
    },
    VisualRule {
        trigger: Trigger::MenuClosed,
        property: "transform",
        target: "translateX(-100%)",
        duration_ms: 500,
    },
    VisualRule {
        trigger: Trigger::MenuOpen,
        property: "opacity",
        target: "1",
        duration_ms: 300,
    },
    VisualRule {
        trigger: Trigger::MenuClosed,
        property: "opacity",
        target: "0",
        duration_ms: 300,
    },
    VisualRule {
        trigger: Trigger::CursorHover,
        property: "scale",
        target: "1.5",
        duration_ms: 200,
    },
    VisualRule {
        trigger: Trigger::CursorIdle,
        property: "scale",
        target: "1",
        duration_ms: 200,
    },
    VisualRule {
        trigger: Trigger::GateEnter,
        property: "transform",
        target: "translateY(0)",
        duration_ms: 400,
    },
    VisualRule {
        trigger: Trigger::GateEnter,
        property: "opacity",
        target: "1",
        duration_ms: 400,
    },
];

/// Milliseconds of extra delay applied to the n-th staggered element.
const STAGGER_STEP_MS: u32 = 50;

pub fn stagger_delay_ms(index: usize) -> u32 {
    index as u32 * STAGGER_STEP_MS
}

pub fn rules_for(trigger: Trigger) -> impl Iterator<Item = &'static VisualRule> {
    RULES.iter().filter(move |r| r.trigger == trigger)
}

pub fn target_for(trigger: Trigger, property: &str) -> Option<&'static str> {
    rules_for(trigger)
        .find(|r| r.property == property)
        .map(|r| r.target)
}

/// Inline style block for everything the trigger animates, including the
/// matching `transition` shorthand so durations live only in the table.
pub fn style_for(trigger: Trigger) -> String {
    let mut declarations = String::new();
    let mut transitions = Vec::new();
    for rule in rules_for(trigger) {
        declarations.push_str(&format!("{}: {}; ", rule.property, rule.target));
        transitions.push(format!("{} {}ms ease-out", rule.property, rule.duration_ms));
    }
    format!("{}transition: {}", declarations, transitions.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_trigger_has_rules() {
        for trigger in [
            Trigger::MenuOpen,
            Trigger::MenuClosed,
            Trigger::GateEnter,
            Trigger::CursorHover,
            Trigger::CursorIdle,
        ] {
            assert!(rules_for(trigger).count() > 0, "{trigger:?} has no rules");
        }
    }

    #[test]
    fn menu_states_animate_the_same_properties() {
        let open: Vec<_> = rules_for(Trigger::MenuOpen).map(|r| r.property).collect();
        let closed: Vec<_> = rules_for(Trigger::MenuClosed).map(|r| r.property).collect();
        assert_eq!(open, closed);
        // ...toward different targets
        assert_ne!(
            target_for(Trigger::MenuOpen, "transform"),
            target_for(Trigger::MenuClosed, "transform")
        );
    }

    #[test]
    fn durations_are_positive() {
        assert!(RULES.iter().all(|r| r.duration_ms > 0));
    }

    #[test]
    fn cursor_scale_targets() {
        assert_eq!(target_for(Trigger::CursorHover, "scale"), Some("1.5"));
        assert_eq!(target_for(Trigger::CursorIdle, "scale"), Some("1"));
    }

    #[test]
    fn style_block_includes_targets_and_durations() {
        let style = style_for(Trigger::MenuOpen);
        assert!(style.contains("transform: translateX(0);"));
        assert!(style.contains("opacity: 1;"));
        assert!(style.contains("transform 500ms ease-out"));
        assert!(style.contains("opacity 300ms ease-out"));
    }

    #[test]
    fn stagger_grows_linearly() {
        assert_eq!(stagger_delay_ms(0), 0);
        assert_eq!(stagger_delay_ms(3), 150);
    }
}
